//! Reusable UI components

pub mod dialogs;

// Component architecture
pub mod confirm_dialog;
pub mod log_panel;
pub mod showcase;
pub mod status_bar;

// Component exports
pub use confirm_dialog::{ConfirmDialog, DialogButton};
pub use log_panel::LogPanel;
pub use showcase::ShowcaseComponent;
pub use status_bar::StatusBar;
