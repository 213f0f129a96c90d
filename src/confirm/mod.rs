//! Awaitable confirmation requests
//!
//! This module owns the confirmation workflow that the rest of the application
//! builds on. A call site asks a question through a [`ConfirmHandle`] and gets
//! back a [`Confirmation`], a future that resolves to the user's decision once
//! the presenter reports it.
//!
//! # Module Components
//!
//! - [`request`] - Options supplied by callers and the snapshot shown to the user
//! - [`coordinator`] - The single-slot coordinator and its cloneable handle
//!
//! # Lifecycle
//!
//! The coordinator is either idle or holds exactly one pending request:
//!
//! 1. [`ConfirmHandle::confirm`] stores the request and publishes a snapshot
//! 2. The presenter renders the snapshot and waits for input
//! 3. [`ConfirmHandle::answer`] resolves the caller's future and clears the slot
//!
//! A request that is dropped without an answer (ignored as a conflict, or still
//! pending when the coordinator goes away) leaves its [`Confirmation`] pending
//! forever. It never resolves to an error.

pub mod coordinator;
pub mod request;

pub use coordinator::{Confirmation, ConfirmCoordinator, ConfirmHandle};
pub use request::{ConfirmOptions, PendingConfirmation, Variant};

use serde::{Deserialize, Serialize};

/// What the coordinator does with a `confirm` call that arrives while another
/// request is still pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Keep the pending request and drop the new one with a warning
    #[default]
    Ignore,
    /// Show the new request once every earlier one has been answered
    Queue,
}

/// Errors raised by the confirmation layer
#[derive(Debug, thiserror::Error)]
pub enum ConfirmError {
    /// No provider is mounted, or the handle outlived the provider it came from
    #[error("no ConfirmProvider is mounted in this context")]
    ProviderNotMounted,
}
