use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

/// Presentation style of a confirmation dialog. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// Caller-supplied description of a confirmation request
///
/// Labels left as `None` fall back to the coordinator's configured defaults
/// ("Confirm" / "Cancel" unless the config file says otherwise).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: String,
    pub description: Option<String>,
    pub confirm_label: Option<String>,
    pub cancel_label: Option<String>,
    pub variant: Variant,
}

impl ConfirmOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            confirm_label: None,
            cancel_label: None,
            variant: Variant::Default,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Shorthand for `.variant(Variant::Destructive)`
    pub fn destructive(self) -> Self {
        self.variant(Variant::Destructive)
    }
}

/// Snapshot of the pending request as the presenter sees it
///
/// Labels are already resolved against the configured defaults. The resolver
/// never leaves the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub confirm_label: String,
    pub cancel_label: String,
    pub variant: Variant,
}

/// A request held by the coordinator together with its single-use resolver
#[derive(Debug)]
pub(crate) struct ConfirmationRequest {
    pub(crate) pending: PendingConfirmation,
    resolver: Option<oneshot::Sender<bool>>,
}

impl ConfirmationRequest {
    pub(crate) fn new(pending: PendingConfirmation, resolver: oneshot::Sender<bool>) -> Self {
        Self {
            pending,
            resolver: Some(resolver),
        }
    }

    /// Hand `confirmed` to the waiting caller. Later calls do nothing.
    pub(crate) fn resolve(&mut self, confirmed: bool) {
        if let Some(resolver) = self.resolver.take() {
            if resolver.send(confirmed).is_err() {
                log::debug!(
                    "Confirmation #{} answered after its caller stopped waiting",
                    self.pending.id
                );
            }
        }
    }
}
