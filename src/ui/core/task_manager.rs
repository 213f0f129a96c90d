use super::actions::{Action, PendingOperation};
use crate::confirm::{ConfirmHandle, ConfirmOptions};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs call sites that await a confirmation off the UI loop
///
/// Each task reports back with [`Action::ConfirmationResolved`] on the channel
/// returned by [`TaskManager::new`].
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Ask for confirmation and report the outcome of `operation`
    ///
    /// The request reaches the coordinator before this returns, so two calls in
    /// a row are seen by the coordinator in call order. Returns `None` without
    /// spawning anything when the coordinator ignored the request.
    pub fn spawn_confirmation(
        &mut self,
        confirm: &ConfirmHandle,
        options: ConfirmOptions,
        operation: PendingOperation,
    ) -> Option<TaskId> {
        let description = format!("Confirm: {}", options.title);
        let confirmation = confirm.confirm(options);
        if confirmation.is_orphaned() {
            log::debug!("Not spawning a task for ignored request '{}'", description);
            return None;
        }

        let task_id = self.next_task_id;
        self.next_task_id += 1;
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let confirmed = confirmation.await;
            let _ = action_sender.send(Action::ConfirmationResolved { operation, confirmed });
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        Some(task_id)
    }

    /// Drop bookkeeping for tasks that already finished
    pub fn cleanup_finished(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|_, task| !task.handle.is_finished());
        before - self.tasks.len()
    }

    /// Abort every task, including ones waiting on a confirmation forever
    pub fn abort_all(&mut self) {
        for (_, task) in self.tasks.drain() {
            log::debug!(
                "Aborting task {} '{}' after {:?}",
                task.id,
                task.description,
                task.started_at.elapsed()
            );
            task.handle.abort();
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
