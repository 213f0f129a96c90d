//! Screen areas shared by the showcase and its overlays

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Splits the terminal into the areas each component draws into
pub struct LayoutManager;

impl LayoutManager {
    /// Page on top, one-line status bar at the bottom
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let status_height = area.height.min(1);
        let page = Rect {
            height: area.height - status_height,
            ..area
        };
        let status = Rect {
            y: area.y + page.height,
            height: status_height,
            ..area
        };

        vec![page, status]
    }

    /// Tab bar on top of the page body
    #[must_use]
    pub fn page_layout(area: Rect) -> Vec<Rect> {
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Centered overlay sized as a percentage of `area` in both directions
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        Self::center(area, Constraint::Percentage(percent_x), Constraint::Percentage(percent_y))
    }

    /// Centered overlay with a percentage width and a fixed number of lines
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, area: Rect) -> Rect {
        Self::center(area, Constraint::Percentage(percent_x), Constraint::Length(height_lines))
    }

    fn center(area: Rect, width: Constraint, height: Constraint) -> Rect {
        let [row] = Layout::vertical([height]).flex(Flex::Center).areas(area);
        let [centered] = Layout::horizontal([width]).flex(Flex::Center).areas(row);
        centered
    }
}
