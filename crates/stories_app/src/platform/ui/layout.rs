use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Rect,
    pub search: Rect,
    pub message: Rect,
    pub list: Rect,
    pub status: Rect,
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Error line
            Constraint::Min(3),    // Story list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenAreas {
        title: chunks[0],
        search: chunks[1],
        message: chunks[2],
        list: chunks[3],
        status: chunks[4],
    }
}

pub fn list_columns() -> [Constraint; 5] {
    [
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Length(9),
    ]
}
