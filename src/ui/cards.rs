//! Results grid: one card per suggested name

use rand::Rng;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::names::NameInfo;

const CARD_HEIGHT: u16 = 8;

/// Column count for the results grid at a given width
pub fn grid_columns(width: u16) -> usize {
    if width < 60 {
        1
    } else if width < 100 {
        2
    } else {
        3
    }
}

pub fn draw_results<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    if app.generated_names.is_empty() {
        return;
    }

    let columns = grid_columns(area.width);
    let rows: Vec<&[NameInfo]> = app.generated_names.chunks(columns).collect();

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            rows.iter()
                .map(|_| Constraint::Length(CARD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
            .split(*row_area);

        for (info, cell) in row.iter().zip(cells.iter()) {
            draw_card(f, app, info, *cell);
        }
    }
}

fn draw_card<R: Rng>(f: &mut Frame, app: &App<R>, info: &NameInfo, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", info.name),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.inactive));

    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {} ", info.meaning),
            Style::default().fg(theme.text).bg(theme.badge),
        )),
        Line::from(""),
        Line::from(Span::styled(
            info.cultural_notes.as_str(),
            Style::default().fg(theme.text_dim),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(block);

    f.render_widget(body, area);
}
