use crate::config::{Config, UiConfig};
use crate::confirm::{ConfirmCoordinator, ConfirmHandle, PendingConfirmation};
use crate::ui::components::ConfirmDialog;
use log::info;
use tokio::sync::watch;

/// The coordinator and presenter pair, mounted once at the application root
///
/// Call sites reach the provider through [`AppContext`](super::AppContext);
/// the presenter built by [`ConfirmProvider::presenter`] renders whatever the
/// coordinator currently holds.
pub struct ConfirmProvider {
    coordinator: ConfirmCoordinator,
    ui: UiConfig,
}

impl ConfirmProvider {
    pub fn mount(config: &Config) -> Self {
        info!(
            "Mounting confirm provider (conflict policy: {:?})",
            config.confirm.conflict_policy
        );
        Self {
            coordinator: ConfirmCoordinator::new(config.confirm.clone()),
            ui: config.ui.clone(),
        }
    }

    pub fn handle(&self) -> ConfirmHandle {
        self.coordinator.handle()
    }

    /// Build the dialog that renders this provider's requests
    pub fn presenter(&self) -> ConfirmDialog {
        ConfirmDialog::new(self.coordinator.handle(), self.coordinator.subscribe(), &self.ui)
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<PendingConfirmation>> {
        self.coordinator.subscribe()
    }
}
