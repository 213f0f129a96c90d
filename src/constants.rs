//! Constants used throughout the application
//!
//! This module centralizes labels, UI text, and other constant values
//! to improve maintainability and consistency.

// Confirmation defaults
pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

// Dialog geometry (percent of the terminal area)
pub const DIALOG_DEFAULT_WIDTH_PERCENT: u16 = 50;
pub const DIALOG_DEFAULT_HEIGHT_PERCENT: u16 = 30;
pub const DIALOG_MIN_WIDTH_PERCENT: u16 = 20;
pub const DIALOG_MIN_HEIGHT_PERCENT: u16 = 10;

// Logging
pub const LOG_FILE_NAME: &str = "confirmist.log";
pub const LOG_BUFFER_CAPACITY: usize = 500;
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

// Status Messages
pub const STATUS_CONFIRMED: &str = "✅ Confirmed";
pub const STATUS_CANCELLED: &str = "↩ Cancelled";
pub const STATUS_WAITING: &str = "⏳ Waiting for confirmation";
pub const STATUS_HINTS: &str = "1/2: page • d: delete • r: reset • c: conflict demo • L: logs • q: quit";

// Config Messages
pub const CONFIG_GENERATED: &str = "✅ Configuration file generated";
