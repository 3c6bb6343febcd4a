//! Chat panel — message thread and input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Spinner, Vec2};
use medhelp_types::message::Message;
use crate::state::UiState;
use crate::theme::*;

const INPUT_ROW_HEIGHT: f32 = 56.0;
pub const ERROR_LINE_HEIGHT: f32 = 18.0;

/// Height left for the message thread once the rows below it are reserved.
pub fn messages_area_height(available: f32, state: &UiState) -> f32 {
    let mut reserved = INPUT_ROW_HEIGHT;
    if state.last_error.is_some() {
        reserved += ERROR_LINE_HEIGHT;
    }
    (available - reserved).max(0.0)
}

/// Render the chat panel. Returns true when the user asks to send `draft`.
///
/// The panel only reports intent; the caller hands it to the controller,
/// which decides whether the submit goes through and clears the draft.
pub fn chat_panel(ui: &mut egui::Ui, state: &UiState, draft: &mut String) -> bool {
    let mut submitted = false;

    egui::Frame::default()
        .fill(BG_CARD)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Messages area
                ScrollArea::vertical()
                    .max_height(messages_area_height(ui.available_height(), state))
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        let bubble_width = ui.available_width() * BUBBLE_MAX_FRACTION;
                        for message in &state.messages {
                            render_message(ui, message, bubble_width);
                            ui.add_space(8.0);
                        }

                        if state.is_busy() {
                            ui.horizontal(|ui| {
                                ui.add(Spinner::new().size(16.0).color(ACCENT));
                                ui.label(
                                    RichText::new(&state.status_text)
                                        .color(TEXT_SECONDARY)
                                        .small(),
                                );
                            });
                        }
                    });

                ui.separator();

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut *draft)
                        .hint_text("Type your medical question...")
                        .desired_width(ui.available_width() - 80.0)
                        .font(egui::FontId::proportional(15.0));

                    let response = ui.add(input);

                    let send_enabled = !draft.trim().is_empty() && !state.is_busy();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_ON_ACCENT))
                            .fill(if send_enabled { ACCENT } else { BORDER })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(64.0, 0.0)),
                    );

                    let enter = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    if (enter && send_enabled) || send_btn.clicked() {
                        submitted = true;
                        response.request_focus();
                    }
                });

                if let Some(reason) = &state.last_error {
                    ui.label(
                        RichText::new("Reply unavailable")
                            .color(WARNING)
                            .small(),
                    )
                    .on_hover_text(reason.as_str());
                }
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, message: &Message, max_width: f32) {
    let (align, fill, text_color) = if message.is_user() {
        (Align::Max, BUBBLE_USER, TEXT_ON_ACCENT)
    } else {
        (Align::Min, BUBBLE_ASSISTANT, TEXT_PRIMARY)
    };

    ui.with_layout(Layout::top_down(align), |ui| {
        ui.set_max_width(max_width);
        egui::Frame::default()
            .fill(fill)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(message.sender().label())
                        .color(text_color)
                        .strong()
                        .small(),
                );
                ui.label(RichText::new(message.text()).color(text_color));
                ui.label(
                    RichText::new(message.display_time())
                        .color(text_color.gamma_multiply(0.7))
                        .small(),
                );
            });
    });
}
