//! Core UI functionality for the Confirmist showcase.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, component abstractions, the confirm provider, and
//! background task management.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Shared services, including the mounted confirm provider
//! - [`event_handler`] - Terminal input and confirmation change notifications
//! - [`provider`] - Coordinator and presenter pair mounted at the root
//! - [`task_manager`] - Background tasks that await confirmations
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Context** hands the confirm service to whoever needs it
//! 4. **Events** are processed through the [`EventHandler`] system
//! 5. **Tasks** await confirmations via the [`TaskManager`] and report back as actions

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod provider;
pub mod task_manager;

pub use actions::{Action, PendingOperation, ShowcasePage};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use provider::ConfirmProvider;
pub use task_manager::{TaskId, TaskManager};
