//! Confirmist - awaitable confirmation dialogs for terminal applications
//!
//! A call site asks the user a yes/no question and awaits the answer; a modal
//! dialog renders the question and reports the choice back. The crate ships
//! the coordinator behind that flow, a Ratatui presenter for it, and a small
//! showcase application wiring the two together.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`confirm`] - Confirmation coordinator and request types
//! * [`logger`] - Logging setup and in-memory log buffer
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Confirmation coordinator, handles and request types
pub mod confirm;

/// Application constants and default values
pub mod constants;

/// Logging setup for file and in-memory logs
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

pub use confirm::{Confirmation, ConfirmCoordinator, ConfirmHandle, ConfirmOptions, Variant};
