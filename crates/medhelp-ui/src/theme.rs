//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(239, 246, 255);
pub const BG_CARD: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_INPUT: Color32 = Color32::from_rgb(249, 250, 251);
pub const BUBBLE_USER: Color32 = Color32::from_rgb(37, 99, 235);
pub const BUBBLE_ASSISTANT: Color32 = Color32::from_rgb(243, 244, 246);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(31, 41, 55);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(75, 85, 99);
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(29, 78, 216);
pub const BORDER: Color32 = Color32::from_rgb(229, 231, 235);
pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
pub const WARNING: Color32 = Color32::from_rgb(202, 138, 4);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 12.0);
/// Bubbles never take more than this share of the chat width
pub const BUBBLE_MAX_FRACTION: f32 = 0.8;

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_CARD;
    style.visuals.extreme_bg_color = BG_CARD;

    style.visuals.widgets.inactive.bg_fill = BG_INPUT;
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER);
    style.visuals.widgets.hovered.bg_fill = BG_INPUT;
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    style.visuals.widgets.active.bg_fill = ACCENT_HOVER;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_ON_ACCENT);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
