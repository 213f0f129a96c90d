//! Log panel overlay

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem},
    Frame,
};

use crate::logger::Logger;
use crate::ui::layout::LayoutManager;

/// Overlay listing the newest log lines first
pub struct LogPanel;

impl LogPanel {
    pub fn render(f: &mut Frame, area: Rect, logger: &Logger) {
        let panel_area = LayoutManager::centered_rect(80, 70, area);
        f.render_widget(Clear, panel_area);

        let visible = usize::from(panel_area.height.saturating_sub(2));
        let items: Vec<ListItem> = logger.get_logs().into_iter().take(visible).map(ListItem::new).collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Logs • L: close "),
            )
            .style(Style::default().fg(Color::Gray));

        f.render_widget(list, panel_area);
    }
}
