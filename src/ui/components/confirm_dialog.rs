//! Modal presenter for confirmation requests.
//!
//! The dialog renders whatever request the coordinator currently holds and
//! reports the user's choice back through [`ConfirmHandle::answer`]. When no
//! request is pending it draws nothing and ignores input.
//!
//! # Controls
//! - `y` confirms, `n` cancels
//! - `Tab`, `←`/`→` or `h`/`l` move focus between the buttons
//! - `Enter`/`Space` activate the focused button
//! - `Esc` and a click outside the dialog dismiss it, same as Cancel

use crate::config::UiConfig;
use crate::confirm::{ConfirmHandle, PendingConfirmation, Variant};
use crate::ui::components::dialogs::{
    common::button_width, create_button, create_dialog_block, create_instructions_paragraph, shortcuts,
    variant_color,
};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tokio::sync::watch;

const BUTTON_GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Cancel,
    Confirm,
}

impl DialogButton {
    /// Focus given to a freshly shown request
    pub fn initial(variant: Variant) -> Self {
        match variant {
            Variant::Default => DialogButton::Confirm,
            Variant::Destructive => DialogButton::Cancel,
        }
    }

    fn toggle(self) -> Self {
        match self {
            DialogButton::Cancel => DialogButton::Confirm,
            DialogButton::Confirm => DialogButton::Cancel,
        }
    }
}

/// Screen areas of a rendered dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    pub dialog: Rect,
    pub description: Rect,
    pub cancel: Rect,
    pub confirm: Rect,
    pub instructions: Rect,
}

pub struct ConfirmDialog {
    handle: ConfirmHandle,
    updates: watch::Receiver<Option<PendingConfirmation>>,
    focus: DialogButton,
    shown_id: Option<u64>,
    width_percent: u16,
    height_percent: u16,
    /// Request id and frame area of the last dialog actually drawn
    last_frame: Option<(u64, Rect)>,
}

impl ConfirmDialog {
    pub fn new(handle: ConfirmHandle, updates: watch::Receiver<Option<PendingConfirmation>>, ui: &UiConfig) -> Self {
        Self {
            handle,
            updates,
            focus: DialogButton::Confirm,
            shown_id: None,
            width_percent: ui.dialog_width_percent,
            height_percent: ui.dialog_height_percent,
            last_frame: None,
        }
    }

    /// The request being shown, if any
    pub fn current(&self) -> Option<PendingConfirmation> {
        self.updates.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.updates.borrow().is_some()
    }

    pub fn focused(&self) -> Option<DialogButton> {
        let pending = self.current()?;
        if self.shown_id == Some(pending.id) {
            Some(self.focus)
        } else {
            Some(DialogButton::initial(pending.variant))
        }
    }

    /// Answer the pending request with `true`
    pub fn confirm(&mut self) {
        self.last_frame = None;
        self.handle.answer(true);
    }

    /// Cancel the pending request. Cancel button, Esc and outside clicks all end up here.
    pub fn dismiss(&mut self) {
        self.last_frame = None;
        self.handle.answer(false);
    }

    /// Area of the dialog as last rendered
    pub fn dialog_area(&self) -> Option<Rect> {
        self.rendered_layout().map(|layout| layout.dialog)
    }

    /// Area of `button` as last rendered
    pub fn button_area(&self, button: DialogButton) -> Option<Rect> {
        self.rendered_layout().map(|layout| match button {
            DialogButton::Cancel => layout.cancel,
            DialogButton::Confirm => layout.confirm,
        })
    }

    fn rendered_layout(&self) -> Option<DialogLayout> {
        let pending = self.current()?;
        let frame = self.drawn_frame(&pending)?;
        Some(self.layout(frame, &pending))
    }

    /// Frame `pending` was drawn into, if it has been drawn at all
    fn drawn_frame(&self, pending: &PendingConfirmation) -> Option<Rect> {
        self.last_frame
            .filter(|(id, _)| *id == pending.id)
            .map(|(_, frame)| frame)
    }

    /// Pick up a newly shown request, resetting focus
    fn sync(&mut self) -> Option<PendingConfirmation> {
        let pending = self.current();
        match &pending {
            Some(request) if self.shown_id != Some(request.id) => {
                self.shown_id = Some(request.id);
                self.focus = DialogButton::initial(request.variant);
            }
            Some(_) => {}
            None => self.shown_id = None,
        }
        pending
    }

    fn activate(&mut self, button: DialogButton) {
        match button {
            DialogButton::Confirm => self.confirm(),
            DialogButton::Cancel => self.dismiss(),
        }
    }

    /// Compute where everything goes for `pending` inside `area`
    pub fn layout(&self, area: Rect, pending: &PendingConfirmation) -> DialogLayout {
        // Width does not depend on height, so measure it on the final horizontal split
        let dialog_width = LayoutManager::centered_rect_lines(self.width_percent, area.height, area).width;
        let inner_width = dialog_width.saturating_sub(2).max(1);

        let description_lines = pending
            .description
            .as_deref()
            .map(|text| {
                let width = Span::raw(text).width();
                let lines = width.div_ceil(usize::from(inner_width)).max(1);
                u16::try_from(lines).unwrap_or(u16::MAX)
            })
            .unwrap_or(0);

        // borders + description + spacer + buttons + instructions
        let required = 2u16.saturating_add(description_lines).saturating_add(3);
        let minimum = (u32::from(area.height) * u32::from(self.height_percent) / 100) as u16;
        let height = required.max(minimum).min(area.height);

        let dialog = LayoutManager::centered_rect_lines(self.width_percent, height, area);
        let inner = Block::default().borders(Borders::ALL).inner(dialog);
        let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)]).split(inner);
        let button_row = rows[1];

        let cancel_width = button_width(&pending.cancel_label);
        let confirm_width = button_width(&pending.confirm_label);
        let total = cancel_width.saturating_add(BUTTON_GAP).saturating_add(confirm_width);
        let start_x = button_row.x + button_row.width.saturating_sub(total) / 2;

        let cancel = Rect::new(start_x, button_row.y, cancel_width, 1).intersection(button_row);
        let confirm = Rect::new(
            start_x.saturating_add(cancel_width).saturating_add(BUTTON_GAP),
            button_row.y,
            confirm_width,
            1,
        )
        .intersection(button_row);

        DialogLayout {
            dialog,
            description: rows[0],
            cancel,
            confirm,
            instructions: rows[2],
        }
    }
}

impl Component for ConfirmDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.sync().is_none() {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.dismiss(),
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h')
            | KeyCode::Char('l') => self.focus = self.focus.toggle(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.focus),
            _ => {}
        }

        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some(pending) = self.sync() else {
            return Action::None;
        };
        // Never hit-test a request the user has not seen yet
        let Some(frame) = self.drawn_frame(&pending) else {
            return Action::None;
        };
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        let layout = self.layout(frame, &pending);
        let position = Position::new(mouse.column, mouse.row);

        if layout.confirm.contains(position) {
            self.confirm();
        } else if layout.cancel.contains(position) || !layout.dialog.contains(position) {
            self.dismiss();
        }

        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(pending) = self.sync() else {
            self.last_frame = None;
            return;
        };
        self.last_frame = Some((pending.id, rect));

        let layout = self.layout(rect, &pending);
        let color = variant_color(pending.variant);
        let title = format!(" {} ", pending.title);

        f.render_widget(Clear, layout.dialog);
        f.render_widget(create_dialog_block(&title, color), layout.dialog);

        if let Some(description) = &pending.description {
            let paragraph = Paragraph::new(description.as_str())
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, layout.description);
        }

        f.render_widget(
            create_button(&pending.cancel_label, Color::Gray, self.focus == DialogButton::Cancel),
            layout.cancel,
        );
        f.render_widget(
            create_button(&pending.confirm_label, color, self.focus == DialogButton::Confirm),
            layout.confirm,
        );

        let instructions = create_instructions_paragraph(&[
            shortcuts::Y_CONFIRM,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
            shortcuts::SEPARATOR,
            shortcuts::TAB_SWITCH,
        ]);
        f.render_widget(instructions, layout.instructions);
    }
}
