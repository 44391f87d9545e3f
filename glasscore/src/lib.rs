//! glasscore — shared library for the glass calculator

pub mod theme;
pub mod widgets;

pub use theme::{GlassColors, GlassTheme};
pub use widgets::GlassButton;
