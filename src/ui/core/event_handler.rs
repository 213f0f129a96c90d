use crate::confirm::PendingConfirmation;
use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::watch;
use tokio::time::Duration;

pub struct EventHandler {
    tick_rate: Duration,
    confirm_updates: Option<watch::Receiver<Option<PendingConfirmation>>>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(100), // 10 Hz for application ticks
            confirm_updates: None,
        }
    }

    /// Wake up whenever the pending confirmation changes
    pub fn with_confirm_updates(mut self, updates: watch::Receiver<Option<PendingConfirmation>>) -> Self {
        self.confirm_updates = Some(updates);
        self
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            let event = match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Mouse(mouse) => EventType::Mouse(mouse),
                Event::Resize(w, h) => EventType::Resize(w, h),
                _ => EventType::Other,
            };
            return Ok(event);
        }

        Ok(self.wait_for_update().await)
    }

    /// Wait one tick, returning early if the pending confirmation changes
    pub async fn wait_for_update(&mut self) -> EventType {
        let sleep = tokio::time::sleep(self.tick_rate);
        let Some(updates) = self.confirm_updates.as_mut() else {
            sleep.await;
            return EventType::Tick;
        };

        let changed = tokio::select! {
            result = updates.changed() => Some(result.is_ok()),
            () = sleep => None,
        };

        match changed {
            Some(true) => EventType::ConfirmChanged,
            Some(false) => {
                // Coordinator is gone, nothing left to watch
                self.confirm_updates = None;
                EventType::Tick
            }
            None => EventType::Tick,
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    ConfirmChanged,
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
