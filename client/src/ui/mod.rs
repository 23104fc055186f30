//! UI module

pub mod pause_menu;
pub mod styles;
pub mod tuning_panel;

pub use pause_menu::PauseMenuPlugin;
pub use tuning_panel::TuningPanelPlugin;
