//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::{STATUS_HINTS, STATUS_WAITING};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, message: Option<&str>, dialog_open: bool, queued: usize) {
        let status_text = if dialog_open && queued > 0 {
            format!("{} ({} queued)", STATUS_WAITING, queued)
        } else if dialog_open {
            STATUS_WAITING.to_string()
        } else if let Some(message) = message {
            format!("{} • {}", message, STATUS_HINTS)
        } else {
            STATUS_HINTS.to_string()
        };

        let status_color = if dialog_open { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
