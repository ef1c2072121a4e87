pub mod constants;
pub mod layout;
pub mod render;

use ratatui::widgets::TableState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    List,
}

/// Presentation-only state: focus, list selection and the quit flag.
#[derive(Debug)]
pub struct UiState {
    pub focus: Focus,
    pub table: TableState,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        // The search box starts focused.
        Self {
            focus: Focus::Search,
            table: TableState::default(),
            should_quit: false,
        }
    }
}

impl UiState {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::List,
            Focus::List => Focus::Search,
        };
    }

    pub fn selected(&self) -> Option<usize> {
        self.table.selected()
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.table.select(None);
            return;
        }
        let next = match self.table.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.table.select(Some(next));
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.table.select(None);
            return;
        }
        let prev = match self.table.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.table.select(Some(prev));
    }

    /// Keeps the selection inside a list that may have shrunk or been replaced.
    pub fn clamp_selection(&mut self, len: usize) {
        match self.table.selected() {
            _ if len == 0 => self.table.select(None),
            Some(i) if i >= len => self.table.select(Some(len - 1)),
            None if self.focus == Focus::List => self.table.select(Some(0)),
            _ => {}
        }
    }
}
