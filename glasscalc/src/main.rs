//! glasscalc - a glass-styled desktop calculator
//!
//! One window, one display, a grid of rounded buttons.

mod app;
mod engine;

use app::GlassCalcApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 540.0])
            .with_resizable(false)
            .with_transparent(true)
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(|cc| {
            glasscore::GlassTheme::default().apply(&cc.egui_ctx);
            Box::new(GlassCalcApp::new(cc))
        }),
    )
}
