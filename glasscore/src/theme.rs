//! Glass theme — dark, semi-transparent, rounded
//!
//! Deep gray panels with a little alpha so the desktop shows through,
//! white text, one blue accent for equals and one red for clear.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The calculator palette. Base colors keep some transparency; hover
/// variants go opaque so buttons visibly "light up" under the pointer.
pub struct GlassColors;

impl GlassColors {
    /// Window and panel background.
    pub const BG: Color32 = Color32::from_rgba_premultiplied(30, 32, 36, 220);

    /// Digit and decimal-point buttons.
    pub const BTN: Color32 = Color32::from_rgba_premultiplied(45, 47, 51, 230);
    pub const BTN_HOVER: Color32 = Color32::from_rgb(60, 63, 70);

    /// Arithmetic operator buttons.
    pub const OP: Color32 = Color32::from_rgba_premultiplied(60, 63, 70, 230);
    pub const OP_HOVER: Color32 = Color32::from_rgb(80, 90, 110);

    /// The equals button.
    pub const EQ: Color32 = Color32::from_rgb(0, 120, 215);
    pub const EQ_HOVER: Color32 = Color32::from_rgb(0, 100, 180);

    /// The clear button.
    pub const CLEAR: Color32 = Color32::from_rgba_premultiplied(200, 50, 50, 230);
    pub const CLEAR_HOVER: Color32 = Color32::from_rgb(220, 80, 80);

    /// Button and display text.
    pub const TEXT: Color32 = Color32::WHITE;

    /// The small operation label above the display.
    pub const LABEL: Color32 = Color32::from_rgb(180, 180, 180);
}

/// Theme configuration for the calculator window
pub struct GlassTheme {
    pub font_size_display: f32,
    pub font_size_button: f32,
    pub font_size_label: f32,
    pub button_rounding: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for GlassTheme {
    fn default() -> Self {
        Self {
            font_size_display: 38.0,
            font_size_button: 22.0,
            font_size_label: 18.0,
            button_rounding: 11.0,
            window_padding: 10.0,
            item_spacing: 10.0,
        }
    }
}

impl GlassTheme {
    /// Apply the glass theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_label, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_display, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_button, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::dark();

        visuals.window_fill = GlassColors::BG;
        visuals.panel_fill = GlassColors::BG;
        visuals.faint_bg_color = GlassColors::BTN;
        visuals.extreme_bg_color = GlassColors::BG;

        visuals.window_rounding = Rounding::same(self.button_rounding);
        visuals.menu_rounding = Rounding::same(self.button_rounding);
        visuals.window_stroke = Stroke::NONE;

        visuals.override_text_color = Some(GlassColors::TEXT);

        let rounded = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = GlassColors::BTN;
            ws.bg_stroke = Stroke::NONE;
            ws.fg_stroke = Stroke::new(1.0, GlassColors::TEXT);
            ws.rounding = Rounding::same(self.button_rounding);
        };
        rounded(&mut visuals.widgets.noninteractive);
        rounded(&mut visuals.widgets.inactive);
        rounded(&mut visuals.widgets.hovered);
        rounded(&mut visuals.widgets.active);
        rounded(&mut visuals.widgets.open);

        visuals.widgets.hovered.bg_fill = GlassColors::BTN_HOVER;
        visuals.widgets.active.bg_fill = GlassColors::BTN_HOVER;

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Panel frame: glass background, padded
    pub fn panel_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(GlassColors::BG)
            .inner_margin(egui::Margin::same(self.window_padding))
    }
}
