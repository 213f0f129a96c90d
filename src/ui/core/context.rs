use super::provider::ConfirmProvider;
use crate::confirm::{ConfirmError, ConfirmHandle};
use crate::logger::Logger;

/// Services shared with every part of the UI
pub struct AppContext {
    provider: Option<ConfirmProvider>,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(logger: Logger) -> Self {
        Self {
            provider: None,
            logger,
        }
    }

    pub fn with_provider(mut self, provider: ConfirmProvider) -> Self {
        self.mount(provider);
        self
    }

    pub fn mount(&mut self, provider: ConfirmProvider) {
        self.provider = Some(provider);
    }

    /// Tear the provider down. Unanswered requests are dropped with it.
    pub fn unmount(&mut self) -> Option<ConfirmProvider> {
        self.provider.take()
    }

    pub fn provider(&self) -> Option<&ConfirmProvider> {
        self.provider.as_ref()
    }

    pub fn try_use_confirm(&self) -> Result<ConfirmHandle, ConfirmError> {
        self.provider
            .as_ref()
            .map(ConfirmProvider::handle)
            .ok_or(ConfirmError::ProviderNotMounted)
    }

    /// Get the confirm service
    ///
    /// # Panics
    /// Panics when no provider is mounted. That is a wiring bug, not a
    /// runtime condition.
    pub fn use_confirm(&self) -> ConfirmHandle {
        match self.try_use_confirm() {
            Ok(handle) => handle,
            Err(e) => panic!("use_confirm must be called within a mounted ConfirmProvider ({e})"),
        }
    }
}
