//! UI theme constants, one palette per persisted theme preference.

use egui::{Color32, CornerRadius, Stroke, Vec2};
use lawease_types::config::Theme;

pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_surface: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
}

pub const DARK: Palette = Palette {
    bg_primary: Color32::from_rgb(16, 22, 46),
    bg_secondary: Color32::from_rgb(26, 35, 64),
    bg_surface: Color32::from_rgb(38, 48, 86),
    text_primary: Color32::from_rgb(228, 228, 231),
    text_secondary: Color32::from_rgb(161, 161, 170),
    accent: Color32::from_rgb(99, 102, 241),
    success: Color32::from_rgb(34, 197, 94),
    error: Color32::from_rgb(239, 68, 68),
    warning: Color32::from_rgb(234, 179, 8),
};

pub const LIGHT: Palette = Palette {
    bg_primary: Color32::from_rgb(245, 246, 250),
    bg_secondary: Color32::from_rgb(232, 234, 242),
    bg_surface: Color32::from_rgb(214, 218, 232),
    text_primary: Color32::from_rgb(24, 24, 27),
    text_secondary: Color32::from_rgb(82, 82, 91),
    accent: Color32::from_rgb(79, 70, 229),
    success: Color32::from_rgb(22, 163, 74),
    error: Color32::from_rgb(220, 38, 38),
    warning: Color32::from_rgb(202, 138, 4),
};

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

/// Apply the selected palette to an egui context.
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let p = palette(theme);
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = theme == Theme::Dark;
    style.visuals.panel_fill = p.bg_primary;
    style.visuals.window_fill = p.bg_secondary;
    style.visuals.extreme_bg_color = p.bg_surface;

    style.visuals.widgets.inactive.bg_fill = p.bg_surface;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, p.text_secondary);
    style.visuals.widgets.hovered.bg_fill = p.bg_surface;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, p.text_primary);
    style.visuals.widgets.active.bg_fill = p.accent;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, p.text_primary);

    style.visuals.selection.bg_fill = p.accent.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, p.accent);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
