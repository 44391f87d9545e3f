//! glasscalc application window

use egui::{Context, Key};
use glasscore::theme::{GlassColors, GlassTheme};
use glasscore::widgets::{grid_spacer, GlassButton};

use crate::engine::{Evaluator, Event, Op};

/// Which palette a button gets.
#[derive(Clone, Copy, PartialEq)]
enum ButtonKind {
    Digit,
    Operator,
    Equals,
    Clear,
}

impl ButtonKind {
    fn fills(self) -> (egui::Color32, egui::Color32) {
        match self {
            ButtonKind::Digit => (GlassColors::BTN, GlassColors::BTN_HOVER),
            ButtonKind::Operator => (GlassColors::OP, GlassColors::OP_HOVER),
            ButtonKind::Equals => (GlassColors::EQ, GlassColors::EQ_HOVER),
            ButtonKind::Clear => (GlassColors::CLEAR, GlassColors::CLEAR_HOVER),
        }
    }
}

pub struct GlassCalcApp {
    calc: Evaluator,
    theme: GlassTheme,
}

impl GlassCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            calc: Evaluator::new(),
            theme: GlassTheme::default(),
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // Shifted number keys are operators, not digits.
            for digit in '0'..='9' {
                if !i.modifiers.shift && i.key_pressed(digit_to_key(digit)) {
                    self.calc.press(Event::Digit(digit));
                }
            }
            if i.key_pressed(Key::Period) {
                self.calc.press(Event::Digit('.'));
            }

            if i.key_pressed(Key::Plus) || (i.modifiers.shift && i.key_pressed(Key::Equals)) {
                self.calc.press(Event::Operator(Op::Add));
            }
            if i.key_pressed(Key::Minus) {
                self.calc.press(Event::Operator(Op::Subtract));
            }
            if i.modifiers.shift && i.key_pressed(Key::Num8) {
                self.calc.press(Event::Operator(Op::Multiply));
            }
            if i.key_pressed(Key::Slash) {
                self.calc.press(Event::Operator(Op::Divide));
            }
            if i.modifiers.shift && i.key_pressed(Key::Num5) {
                self.calc.press(Event::Operator(Op::Modulo));
            }

            if i.key_pressed(Key::Enter) || (!i.modifiers.shift && i.key_pressed(Key::Equals)) {
                self.calc.press(Event::Equals);
            }
            if i.key_pressed(Key::Escape) || i.key_pressed(Key::C) {
                self.calc.press(Event::Clear);
            }
        });
    }

    fn render_button(
        &self,
        ui: &mut egui::Ui,
        label: &str,
        kind: ButtonKind,
        size: egui::Vec2,
    ) -> bool {
        let (fill, hover) = kind.fills();
        ui.add(
            GlassButton::new(label, size)
                .fill(fill, hover)
                .text_color(GlassColors::TEXT)
                .rounding(self.theme.button_rounding)
                .font_size(self.theme.font_size_button),
        )
        .clicked()
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(self.calc.operator_label())
                    .font(egui::FontId::proportional(self.theme.font_size_label))
                    .color(GlassColors::LABEL),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(self.calc.display())
                    .font(egui::FontId::proportional(self.theme.font_size_display))
                    .color(GlassColors::TEXT)
                    .strong(),
            );
        });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing.x;
        let btn_w = (ui.available_width() - spacing * 3.0) / 4.0;
        let btn_h = (ui.available_height() - spacing * 4.0) / 5.0;
        let size = egui::vec2(btn_w, btn_h);

        // Row 1: C, _, _, /
        ui.horizontal(|ui| {
            if self.render_button(ui, "C", ButtonKind::Clear, size) {
                self.calc.press(Event::Clear);
            }
            grid_spacer(ui, size);
            grid_spacer(ui, size);
            if self.render_button(ui, "/", ButtonKind::Operator, size) {
                self.calc.press(Event::Operator(Op::Divide));
            }
        });

        // Row 2: 7, 8, 9, *
        ui.horizontal(|ui| {
            for d in ['7', '8', '9'] {
                if self.render_button(ui, &d.to_string(), ButtonKind::Digit, size) {
                    self.calc.press(Event::Digit(d));
                }
            }
            if self.render_button(ui, "*", ButtonKind::Operator, size) {
                self.calc.press(Event::Operator(Op::Multiply));
            }
        });

        // Row 3: 4, 5, 6, -
        ui.horizontal(|ui| {
            for d in ['4', '5', '6'] {
                if self.render_button(ui, &d.to_string(), ButtonKind::Digit, size) {
                    self.calc.press(Event::Digit(d));
                }
            }
            if self.render_button(ui, "-", ButtonKind::Operator, size) {
                self.calc.press(Event::Operator(Op::Subtract));
            }
        });

        // Row 4: 1, 2, 3, +
        ui.horizontal(|ui| {
            for d in ['1', '2', '3'] {
                if self.render_button(ui, &d.to_string(), ButtonKind::Digit, size) {
                    self.calc.press(Event::Digit(d));
                }
            }
            if self.render_button(ui, "+", ButtonKind::Operator, size) {
                self.calc.press(Event::Operator(Op::Add));
            }
        });

        // Row 5: 0, ., =, %
        ui.horizontal(|ui| {
            if self.render_button(ui, "0", ButtonKind::Digit, size) {
                self.calc.press(Event::Digit('0'));
            }
            if self.render_button(ui, ".", ButtonKind::Digit, size) {
                self.calc.press(Event::Digit('.'));
            }
            if self.render_button(ui, "=", ButtonKind::Equals, size) {
                self.calc.press(Event::Equals);
            }
            if self.render_button(ui, "%", ButtonKind::Operator, size) {
                self.calc.press(Event::Operator(Op::Modulo));
            }
        });
    }
}

impl eframe::App for GlassCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(self.theme.panel_frame())
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(16.0);
                self.render_buttons(ui);
            });
    }

    // Let the glass background's alpha show through the window.
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }
}

fn digit_to_key(digit: char) -> Key {
    match digit {
        '0' => Key::Num0,
        '1' => Key::Num1,
        '2' => Key::Num2,
        '3' => Key::Num3,
        '4' => Key::Num4,
        '5' => Key::Num5,
        '6' => Key::Num6,
        '7' => Key::Num7,
        '8' => Key::Num8,
        '9' => Key::Num9,
        _ => Key::Num0,
    }
}
