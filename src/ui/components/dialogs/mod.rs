//! Shared building blocks for dialogs

pub mod common;

pub use common::{create_button, create_dialog_block, create_instructions_paragraph, shortcuts, variant_color};
