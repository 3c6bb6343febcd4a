//! Header and disclaimer strips around the chat card.

use egui::{self, RichText};
use crate::theme::*;

pub fn header(ui: &mut egui::Ui) {
    egui::Frame::default()
        .fill(BG_CARD)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚕").color(ACCENT).size(28.0));
                ui.heading(
                    RichText::new("MedHelp")
                        .color(TEXT_PRIMARY)
                        .strong()
                        .size(24.0),
                );
            });
            ui.label(RichText::new("Your AI Medical Assistant").color(TEXT_SECONDARY));
        });
}

pub fn disclaimer(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(
                "This is an AI assistant. For medical emergencies, please call your \
                 local emergency services or consult a healthcare professional.",
            )
            .color(TEXT_SECONDARY)
            .small(),
        );
    });
}
