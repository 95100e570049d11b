use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows reserved for the chat pane when it is open
const CHAT_PANE_HEIGHT: u16 = 12;

/// Pane layout for the explorer
pub struct AppLayout {
    pub header_area: Rect,
    pub map_area: Rect,
    pub content_area: Rect,
    /// Present only while the chat is open
    pub chat_area: Option<Rect>,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the screen layout:
    /// - Header: top row
    /// - Brain map: 45% width (left), content pane: 55% width (right)
    /// - Chat pane: fixed-height strip above the status bar, only when open
    /// - Status bar: bottom row
    pub fn new(area: Rect, chat_open: bool) -> Self {
        let constraints = if chat_open {
            vec![
                Constraint::Length(1),                 // Header
                Constraint::Min(3),                    // Main area
                Constraint::Length(CHAT_PANE_HEIGHT),  // Chat pane
                Constraint::Length(1),                 // Status bar
            ]
        } else {
            vec![
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ]
        };

        let vertical_chunks =
            Layout::default().direction(Direction::Vertical).constraints(constraints).split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(45), // Brain map
                Constraint::Percentage(55), // Content pane
            ])
            .split(vertical_chunks[1]);

        let (chat_area, status_area) = if chat_open {
            (Some(vertical_chunks[2]), vertical_chunks[3])
        } else {
            (None, vertical_chunks[2])
        };

        Self {
            header_area: vertical_chunks[0],
            map_area: horizontal_chunks[0],
            content_area: horizontal_chunks[1],
            chat_area,
            status_area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_chat() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::new(area, false);

        assert_eq!(layout.header_area.height, 1);
        assert_eq!(layout.header_area.y, 0);
        assert!(layout.chat_area.is_none());

        // Status bar pinned to the bottom row
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);

        // Main area fills the rest
        assert_eq!(layout.map_area.height, 28);
        assert_eq!(layout.content_area.height, 28);

        // ~45/55 split
        assert_eq!(layout.map_area.width, 45);
        assert_eq!(layout.content_area.width, 55);
    }

    #[test]
    fn test_layout_with_chat() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::new(area, true);

        let chat = layout.chat_area.expect("chat pane should exist while open");
        assert_eq!(chat.height, CHAT_PANE_HEIGHT);

        // Chat sits between the main area and the status bar
        assert_eq!(chat.y + chat.height, layout.status_area.y);
        assert_eq!(layout.map_area.height, 30 - 1 - CHAT_PANE_HEIGHT - 1);
    }

    #[test]
    fn test_layout_minimum_height() {
        let area = Rect::new(0, 0, 80, 5);
        let layout = AppLayout::new(area, false);

        assert_eq!(layout.header_area.height, 1);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.map_area.height, 3);
    }
}
