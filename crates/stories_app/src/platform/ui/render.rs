use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use stories_core::{AppViewModel, Story};

use super::constants::*;
use super::layout::{list_columns, screen_areas};
use super::{Focus, UiState};

pub fn draw(frame: &mut Frame, view: &AppViewModel, ui: &mut UiState) {
    let areas = screen_areas(frame.area());
    ui.clamp_selection(view.story_count());

    let title = Line::from(APP_TITLE).style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(Paragraph::new(title), areas.title);

    draw_search(frame, view, ui, areas.search);

    if view.is_error {
        let text = match view.failure {
            Some(reason) => format!("{ERROR_TEXT} ({reason})"),
            None => ERROR_TEXT.to_string(),
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::Red)),
            areas.message,
        );
    }

    if view.is_loading {
        frame.render_widget(
            Paragraph::new(LOADING_TEXT).block(Block::default().borders(Borders::ALL)),
            areas.list,
        );
    } else {
        draw_list(frame, view, ui, areas.list);
    }

    draw_status(frame, view, ui, areas.status);
}

fn draw_search(frame: &mut Frame, view: &AppViewModel, ui: &UiState, area: Rect) {
    let focused = ui.focus == Focus::Search;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled(SEARCH_LABEL, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(view.search_term.as_str()),
    ]);
    let text_width = line.width();
    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);

    if focused {
        frame.set_cursor_position(Position::new(
            search_cursor_x(area, text_width),
            area.y.saturating_add(1),
        ));
    }
}

/// Column just past the typed text, kept inside the box border.
fn search_cursor_x(area: Rect, text_width: usize) -> u16 {
    let width = u16::try_from(text_width).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    area.x.saturating_add(1).saturating_add(width).min(max_x)
}

fn draw_list(frame: &mut Frame, view: &AppViewModel, ui: &mut UiState, area: Rect) {
    let header = Row::new(LIST_HEADERS.iter().map(|h| Cell::from(*h)))
        .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));
    let rows = view.stories.iter().map(story_row);

    let border_style = if ui.focus == Focus::List {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let table = Table::new(rows, list_columns())
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} stories ", view.story_count())),
        )
        .row_highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut ui.table);
}

fn story_row(story: &Story) -> Row<'_> {
    Row::new(vec![
        Cell::from(story.title.as_str()),
        Cell::from(story.author.as_str()),
        Cell::from(story.num_comments.to_string()),
        Cell::from(story.points.to_string()),
        Cell::from(DISMISS_LABEL).style(Style::default().fg(Color::Yellow)),
    ])
}

fn draw_status(frame: &mut Frame, view: &AppViewModel, ui: &UiState, area: Rect) {
    let text = match ui.focus {
        Focus::Search => SEARCH_HINT.to_string(),
        Focus::List => match ui.selected().and_then(|i| view.stories.get(i)) {
            Some(story) if !story.url.is_empty() => format!("{} | {}", story.url, LIST_HINT),
            _ => LIST_HINT.to_string(),
        },
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
