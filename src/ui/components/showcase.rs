//! The two showcase pages.
//!
//! Every destructive or resetting action on these pages goes through the
//! confirm service first; the page only changes once the outcome comes back
//! through [`ShowcaseComponent::apply_outcome`].

use crate::confirm::{ConfirmOptions, Variant};
use crate::constants::{STATUS_CANCELLED, STATUS_CONFIRMED};
use crate::ui::components::dialogs::{create_button, variant_color};
use crate::ui::core::{
    actions::{Action, PendingOperation, ShowcasePage},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

const SAMPLE_ITEMS: [&str; 8] = [
    "Button",
    "Select",
    "Combobox",
    "MultiSelect",
    "Slider",
    "Dialog",
    "Date picker",
    "Data table",
];

pub struct ShowcaseComponent {
    pub page: ShowcasePage,
    pub items: Vec<String>,
    pub selected: usize,
    pub applied_tokens: u32,
    list_state: ListState,
}

impl Default for ShowcaseComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowcaseComponent {
    pub fn new() -> Self {
        Self {
            page: ShowcasePage::default(),
            items: SAMPLE_ITEMS.iter().map(ToString::to_string).collect(),
            selected: 0,
            applied_tokens: 0,
            list_state: ListState::default(),
        }
    }

    pub fn selected_item(&self) -> Option<&String> {
        self.items.get(self.selected)
    }

    fn delete_request(&self) -> Action {
        let Some(item) = self.selected_item() else {
            return Action::None;
        };

        Action::RequestConfirmation {
            options: ConfirmOptions::new(format!("Delete {}?", item))
                .description("This action cannot be undone.")
                .confirm_label("Delete")
                .cancel_label("Keep")
                .destructive(),
            operation: PendingOperation::DeleteItem(item.clone()),
        }
    }

    fn reset_request(&self) -> Action {
        Action::RequestConfirmation {
            options: ConfirmOptions::new("Reset design tokens?").description(format!(
                "{} customised token(s) will be restored to their defaults.",
                self.applied_tokens
            )),
            operation: PendingOperation::ResetTokens,
        }
    }

    /// Apply a confirmation outcome and return the status line describing it
    pub fn apply_outcome(&mut self, operation: &PendingOperation, confirmed: bool) -> String {
        if confirmed {
            match operation {
                PendingOperation::DeleteItem(name) => {
                    // Look the item up by name, the list may have changed while the dialog was open
                    if let Some(index) = self.items.iter().position(|item| item == name) {
                        self.items.remove(index);
                        if self.selected >= self.items.len() {
                            self.selected = self.items.len().saturating_sub(1);
                        }
                    }
                }
                PendingOperation::ResetTokens => self.applied_tokens = 0,
                PendingOperation::ConflictDemo(_) => {}
            }
        }

        let status = if confirmed { STATUS_CONFIRMED } else { STATUS_CANCELLED };
        format!("{}: {}", status, describe(operation))
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ShowcasePage::ALL
            .iter()
            .enumerate()
            .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Confirmist "),
            )
            .select(self.page.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        f.render_widget(tabs, area);
    }

    fn render_components_page(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self.items.iter().map(|item| ListItem::new(item.as_str())).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Components • d: delete "),
            )
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
            .highlight_symbol("> ");

        self.list_state
            .select((!self.items.is_empty()).then_some(self.selected));
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_design_system_page(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Design System • +: customise token • r: reset ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        f.render_widget(
            Paragraph::new(format!("Customised tokens: {}", self.applied_tokens)),
            rows[0],
        );
        f.render_widget(Paragraph::new("Dialog variants:"), rows[2]);

        let samples = Layout::horizontal([Constraint::Length(14), Constraint::Length(18), Constraint::Min(0)])
            .split(rows[3]);
        f.render_widget(create_button("Default", variant_color(Variant::Default), true), samples[0]);
        f.render_widget(
            create_button("Destructive", variant_color(Variant::Destructive), true),
            samples[1],
        );
    }
}

fn describe(operation: &PendingOperation) -> String {
    match operation {
        PendingOperation::DeleteItem(name) => format!("delete {}", name),
        PendingOperation::ResetTokens => "reset design tokens".to_string(),
        PendingOperation::ConflictDemo(n) => format!("conflict demo request #{}", n),
    }
}

impl Component for ShowcaseComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('1') => return Action::SwitchPage(ShowcasePage::Components),
            KeyCode::Char('2') => return Action::SwitchPage(ShowcasePage::DesignSystem),
            KeyCode::Tab => return Action::NextPage,
            KeyCode::Char('c') => return Action::ConflictDemo,
            _ => {}
        }

        match self.page {
            ShowcasePage::Components => match key.code {
                KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,
                KeyCode::Char('k') | KeyCode::Up => Action::SelectPrevious,
                KeyCode::Char('d') | KeyCode::Delete => self.delete_request(),
                _ => Action::None,
            },
            ShowcasePage::DesignSystem => match key.code {
                KeyCode::Char('+') => Action::IncrementTokens,
                KeyCode::Char('r') => self.reset_request(),
                _ => Action::None,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SwitchPage(page) => self.page = page,
            Action::NextPage => self.page = self.page.next(),
            Action::SelectNext => {
                if self.selected + 1 < self.items.len() {
                    self.selected += 1;
                }
            }
            Action::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            Action::IncrementTokens => self.applied_tokens += 1,
            other => return other,
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::page_layout(rect);
        self.render_tabs(f, areas[0]);

        match self.page {
            ShowcasePage::Components => self.render_components_page(f, areas[1]),
            ShowcasePage::DesignSystem => self.render_design_system_page(f, areas[1]),
        }
    }
}
