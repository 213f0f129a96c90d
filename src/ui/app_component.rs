use crate::config::Config;
use crate::confirm::{ConfirmOptions, PendingConfirmation};
use crate::constants::STATUS_WAITING;
use crate::logger::Logger;
use crate::ui::components::{ConfirmDialog, LogPanel, ShowcaseComponent, StatusBar};
use crate::ui::core::{
    actions::{Action, PendingOperation},
    event_handler::EventType,
    task_manager::TaskManager,
    AppContext, Component, ConfirmProvider,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use log::info;
use ratatui::{layout::Rect, Frame};
use tokio::sync::{mpsc, watch};

/// Root component: showcase pages with the confirm provider mounted on top
pub struct AppComponent {
    // Component composition
    showcase: ShowcaseComponent,
    confirm_dialog: ConfirmDialog,

    // Services
    context: AppContext,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // Simple UI state
    mouse_enabled: bool,
    status_message: Option<String>,
    show_logs: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let provider = ConfirmProvider::mount(config);
        let confirm_dialog = provider.presenter();
        let (task_manager, background_action_rx) = TaskManager::new();

        Self {
            showcase: ShowcaseComponent::new(),
            confirm_dialog,
            context: AppContext::new(logger).with_provider(provider),
            task_manager,
            background_action_rx,
            mouse_enabled: config.ui.mouse_enabled,
            status_message: None,
            show_logs: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_dialog_open(&self) -> bool {
        self.confirm_dialog.is_visible()
    }

    pub fn showcase(&self) -> &ShowcaseComponent {
        &self.showcase
    }

    pub fn confirm_dialog(&self) -> &ConfirmDialog {
        &self.confirm_dialog
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Notifications for the event loop when the pending confirmation changes
    pub fn confirm_updates(&self) -> Option<watch::Receiver<Option<PendingConfirmation>>> {
        self.context.provider().map(ConfirmProvider::subscribe)
    }

    /// Route a terminal event and apply the resulting action
    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) => self.handle_mouse_events(mouse),
            _ => Action::None,
        };
        self.handle_app_action(action);
    }

    /// Drain actions reported by background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    pub fn on_tick(&mut self) {
        self.task_manager.cleanup_finished();
    }

    pub fn handle_app_action(&mut self, action: Action) {
        match self.showcase.update(action) {
            Action::RequestConfirmation { options, operation } => self.request_confirmation(options, operation),
            Action::ConflictDemo => {
                self.request_confirmation(
                    ConfirmOptions::new("First request").description("Sent first, shown first."),
                    PendingOperation::ConflictDemo(1),
                );
                self.request_confirmation(
                    ConfirmOptions::new("Second request").description("Sent while the first one was open."),
                    PendingOperation::ConflictDemo(2),
                );
            }
            Action::ConfirmationResolved { operation, confirmed } => {
                let message = self.showcase.apply_outcome(&operation, confirmed);
                info!("{}", message);
                self.status_message = Some(message);
            }
            Action::ToggleLogs => self.show_logs = !self.show_logs,
            Action::Quit => {
                info!("Quitting with {} background task(s)", self.task_manager.task_count());
                self.task_manager.abort_all();
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn request_confirmation(&mut self, options: ConfirmOptions, operation: PendingOperation) {
        let confirm = self.context.use_confirm();
        self.task_manager.spawn_confirmation(&confirm, options, operation);
        self.status_message = Some(STATUS_WAITING.to_string());
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        // The dialog is modal: nothing else sees input while it is open
        if self.confirm_dialog.is_visible() {
            return self.confirm_dialog.handle_key_events(key);
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('L') => Action::ToggleLogs,
            KeyCode::Esc if self.show_logs => Action::ToggleLogs,
            _ => self.showcase.handle_key_events(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled || !self.confirm_dialog.is_visible() {
            return Action::None;
        }
        self.confirm_dialog.handle_mouse_events(mouse)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);
        self.showcase.render(f, areas[0]);

        let confirm = self.context.try_use_confirm().ok();
        let queued = confirm.as_ref().map(|handle| handle.queued()).unwrap_or(0);
        StatusBar::render(
            f,
            areas[1],
            self.status_message.as_deref(),
            self.confirm_dialog.is_visible(),
            queued,
        );

        if self.show_logs {
            LogPanel::render(f, rect, &self.context.logger);
        }

        // Drawn last so it sits above everything else
        self.confirm_dialog.render(f, rect);
    }
}
