//! Full-screen loading view shown while the session bootstraps.

use egui::{self, RichText, Spinner};
use crate::state::UiState;
use crate::theme::*;

pub fn loading_panel(ui: &mut egui::Ui, state: &UiState) {
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.4).max(0.0));
        ui.add(Spinner::new().size(48.0).color(ACCENT));
        ui.add_space(12.0);
        ui.label(
            RichText::new(&state.status_text)
                .color(TEXT_SECONDARY)
                .strong(),
        );
    });
}
