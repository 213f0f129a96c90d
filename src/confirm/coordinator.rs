//! Single-slot confirmation coordinator
//!
//! The coordinator owns at most one pending [`ConfirmationRequest`]. Every
//! state change is published on a `watch` channel so presenters can re-render
//! without polling.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::task::{Context, Poll};

use log::{debug, error, info, warn};
use tokio::sync::{oneshot, watch};

use super::request::{ConfirmOptions, ConfirmationRequest, PendingConfirmation};
use super::{ConfirmError, ConflictPolicy};
use crate::config::ConfirmConfig;

/// Eventual outcome of a confirmation request
///
/// Resolves to `true` when the user confirmed and `false` when they cancelled
/// or dismissed the dialog. If the request is dropped without an answer the
/// future stays pending for good.
#[derive(Debug)]
#[must_use = "a Confirmation does nothing unless awaited"]
pub struct Confirmation {
    receiver: Option<oneshot::Receiver<bool>>,
}

impl Confirmation {
    fn new(receiver: oneshot::Receiver<bool>) -> Self {
        Self {
            receiver: Some(receiver),
        }
    }

    /// A confirmation that will never resolve
    fn orphaned() -> Self {
        Self { receiver: None }
    }

    /// True when the request was dropped on arrival and this will never resolve
    ///
    /// Check it before awaiting. Only an ignored conflict produces one; a
    /// request that was accepted and later dropped unanswered looks live here.
    pub fn is_orphaned(&self) -> bool {
        self.receiver.is_none()
    }
}

impl Future for Confirmation {
    type Output = bool;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        let this = self.get_mut();
        let Some(receiver) = this.receiver.as_mut() else {
            return Poll::Pending;
        };

        let polled = Pin::new(receiver).poll(cx);
        match polled {
            Poll::Ready(Ok(confirmed)) => {
                this.receiver = None;
                Poll::Ready(confirmed)
            }
            Poll::Ready(Err(_)) => {
                // Resolver dropped unanswered
                this.receiver = None;
                Poll::Pending
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

#[derive(Debug, Default)]
struct CoordinatorState {
    current: Option<ConfirmationRequest>,
    queue: VecDeque<ConfirmationRequest>,
    next_id: u64,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<CoordinatorState>,
    notifier: watch::Sender<Option<PendingConfirmation>>,
    config: ConfirmConfig,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, CoordinatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn resolve_labels(&self, id: u64, options: ConfirmOptions) -> PendingConfirmation {
        PendingConfirmation {
            id,
            title: options.title,
            description: options.description,
            confirm_label: options
                .confirm_label
                .unwrap_or_else(|| self.config.confirm_label.clone()),
            cancel_label: options
                .cancel_label
                .unwrap_or_else(|| self.config.cancel_label.clone()),
            variant: options.variant,
        }
    }

    fn confirm(&self, options: ConfirmOptions) -> Confirmation {
        let mut state = self.lock();
        state.next_id += 1;
        let id = state.next_id;

        if let Some(current) = &state.current {
            if self.config.conflict_policy == ConflictPolicy::Ignore {
                warn!(
                    "Ignoring confirmation #{} '{}': #{} '{}' is still pending",
                    id, options.title, current.pending.id, current.pending.title
                );
                return Confirmation::orphaned();
            }
        }

        let (resolver, receiver) = oneshot::channel();
        let request = ConfirmationRequest::new(self.resolve_labels(id, options), resolver);

        if state.current.is_some() {
            info!(
                "Queueing confirmation #{} '{}' behind {} pending request(s)",
                id,
                request.pending.title,
                state.queue.len() + 1
            );
            state.queue.push_back(request);
        } else {
            debug!("Confirmation #{} '{}' is now pending", id, request.pending.title);
            self.notifier.send_replace(Some(request.pending.clone()));
            state.current = Some(request);
        }

        Confirmation::new(receiver)
    }

    fn answer(&self, confirmed: bool) -> bool {
        let mut state = self.lock();
        let Some(mut request) = state.current.take() else {
            debug!("Ignoring answer({}) with no pending confirmation", confirmed);
            return false;
        };

        info!(
            "Confirmation #{} '{}' {}",
            request.pending.id,
            request.pending.title,
            if confirmed { "confirmed" } else { "cancelled" }
        );
        request.resolve(confirmed);

        let next = state.queue.pop_front();
        self.notifier
            .send_replace(next.as_ref().map(|request| request.pending.clone()));
        state.current = next;
        true
    }

    fn pending(&self) -> Option<PendingConfirmation> {
        self.lock().current.as_ref().map(|request| request.pending.clone())
    }

    fn queued(&self) -> usize {
        self.lock().queue.len()
    }

    fn clear(&self) {
        let mut state = self.lock();
        let dropped = usize::from(state.current.is_some()) + state.queue.len();
        if dropped > 0 {
            debug!("Dropping {} unanswered confirmation(s)", dropped);
        }
        state.current = None;
        state.queue.clear();
        self.notifier.send_replace(None);
    }
}

/// Owner of the confirmation state
///
/// Exactly one coordinator exists per application, created at startup by the
/// provider. Call sites never hold it directly; they get a [`ConfirmHandle`].
/// Dropping the coordinator drops every unanswered request, which leaves their
/// callers waiting forever.
#[derive(Debug)]
pub struct ConfirmCoordinator {
    shared: Arc<Shared>,
}

impl ConfirmCoordinator {
    pub fn new(config: ConfirmConfig) -> Self {
        let (notifier, _) = watch::channel(None);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(CoordinatorState::default()),
                notifier,
                config,
            }),
        }
    }

    pub fn handle(&self) -> ConfirmHandle {
        ConfirmHandle {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Receive a snapshot every time the pending request changes
    pub fn subscribe(&self) -> watch::Receiver<Option<PendingConfirmation>> {
        self.shared.notifier.subscribe()
    }

    pub fn config(&self) -> &ConfirmConfig {
        &self.shared.config
    }
}

impl Drop for ConfirmCoordinator {
    fn drop(&mut self) {
        self.shared.clear();
    }
}

/// Cloneable access to the coordinator for call sites and presenters
///
/// The handle does not keep the coordinator alive. Asking or answering through
/// a handle whose coordinator is gone is a wiring bug: [`confirm`](Self::confirm)
/// and [`answer`](Self::answer) panic, the `try_` variants return
/// [`ConfirmError::ProviderNotMounted`].
#[derive(Debug, Clone)]
pub struct ConfirmHandle {
    shared: Weak<Shared>,
}

impl ConfirmHandle {
    fn live(&self) -> Result<Arc<Shared>, ConfirmError> {
        self.shared.upgrade().ok_or(ConfirmError::ProviderNotMounted)
    }

    /// Ask the user to confirm something
    ///
    /// # Panics
    /// Panics when the coordinator behind this handle has been dropped.
    pub fn confirm(&self, options: ConfirmOptions) -> Confirmation {
        match self.try_confirm(options) {
            Ok(confirmation) => confirmation,
            Err(e) => panic!("confirm called after its ConfirmProvider was unmounted ({e})"),
        }
    }

    pub fn try_confirm(&self, options: ConfirmOptions) -> Result<Confirmation, ConfirmError> {
        match self.live() {
            Ok(shared) => Ok(shared.confirm(options)),
            Err(e) => {
                error!("Confirmation '{}' requested after the coordinator shut down", options.title);
                Err(e)
            }
        }
    }

    /// Resolve the pending request with `confirmed`
    ///
    /// Returns `false` and does nothing when no request is pending.
    ///
    /// # Panics
    /// Panics when the coordinator behind this handle has been dropped.
    pub fn answer(&self, confirmed: bool) -> bool {
        match self.try_answer(confirmed) {
            Ok(resolved) => resolved,
            Err(e) => panic!("answer called after its ConfirmProvider was unmounted ({e})"),
        }
    }

    pub fn try_answer(&self, confirmed: bool) -> Result<bool, ConfirmError> {
        match self.live() {
            Ok(shared) => Ok(shared.answer(confirmed)),
            Err(e) => {
                warn!("answer({}) after the coordinator shut down", confirmed);
                Err(e)
            }
        }
    }

    pub fn pending(&self) -> Option<PendingConfirmation> {
        self.shared.upgrade().and_then(|shared| shared.pending())
    }

    pub fn is_pending(&self) -> bool {
        self.pending().is_some()
    }

    /// Number of requests waiting behind the pending one (queue policy only)
    pub fn queued(&self) -> usize {
        self.shared.upgrade().map(|shared| shared.queued()).unwrap_or(0)
    }
}
