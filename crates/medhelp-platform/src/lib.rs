//! Browser adapters for the MedHelp ports.

pub mod reply;
pub mod startup;

#[cfg(test)]
mod tests;
