//! Custom widgets — rounded, hover-recolored buttons
//!
//! egui's stock button takes its colors from the shared style. The
//! calculator wants a per-button palette (digits, operators, equals and
//! clear all differ), so the button paints itself: rounded fill, hover
//! fill swap, text centered with the painter.

use egui::{Color32, Response, Rounding, Sense, Ui, Widget};

use crate::theme::GlassColors;

/// A rounded button with its own base and hover fill.
pub struct GlassButton<'a> {
    text: &'a str,
    fill: Color32,
    hover_fill: Color32,
    text_color: Color32,
    size: egui::Vec2,
    rounding: f32,
    font_size: f32,
}

impl<'a> GlassButton<'a> {
    pub fn new(text: &'a str, size: egui::Vec2) -> Self {
        Self {
            text,
            fill: GlassColors::BTN,
            hover_fill: GlassColors::BTN_HOVER,
            text_color: GlassColors::TEXT,
            size,
            rounding: 11.0,
            font_size: 22.0,
        }
    }

    /// Base fill and the fill shown while hovered.
    pub fn fill(mut self, fill: Color32, hover_fill: Color32) -> Self {
        self.fill = fill;
        self.hover_fill = hover_fill;
        self
    }

    pub fn text_color(mut self, color: Color32) -> Self {
        self.text_color = color;
        self
    }

    pub fn rounding(mut self, rounding: f32) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl<'a> Widget for GlassButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            let fill = if response.hovered() || response.is_pointer_button_down_on() {
                self.hover_fill
            } else {
                self.fill
            };
            painter.rect_filled(rect, Rounding::same(self.rounding), fill);

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                egui::FontId::proportional(self.font_size),
                self.text_color,
            );
        }

        response
    }
}

/// Blank grid cell — takes up a button's space, paints nothing.
pub fn grid_spacer(ui: &mut Ui, size: egui::Vec2) {
    let _ = ui.allocate_exact_size(size, Sense::hover());
}
