mod cards;

use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus, Popup};
use crate::names::Gender;

pub fn draw<R: Rng>(f: &mut Frame, app: &App<R>) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(2),  // Title + subtitle
            Constraint::Length(11), // Form card
            Constraint::Length(1),  // Toast line
            Constraint::Min(0),     // Results grid
            Constraint::Length(1),  // Footer
        ])
        .split(area);

    draw_header(f, app, chunks[0]);
    draw_form(f, app, chunks[1]);
    draw_toast(f, app, chunks[2]);
    cards::draw_results(f, app, chunks[3]);
    draw_footer(f, app, chunks[4]);

    if app.popup == Popup::Help {
        draw_help_popup(f, app);
    }
}

fn draw_header<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let theme = &app.theme;
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "英文名字生成器",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "English Name Generator for Chinese Families",
            Style::default().fg(theme.text_dim),
        )),
    ])
    .alignment(Alignment::Center);

    f.render_widget(header, area);
}

fn field_block<'a, R: Rng>(app: &App<R>, title: &'a str, focused: bool) -> Block<'a> {
    let theme = &app.theme;
    let (border, title_style) = if focused {
        (theme.accent, Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
    } else {
        (theme.inactive, Style::default().fg(theme.inactive))
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_form<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let theme = &app.theme;
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.inactive));
    let inner_area = card.inner(area);
    f.render_widget(card, area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(inner_area);

    // Family name input
    let name_focused = app.focus == Focus::FamilyName;
    let cursor = if name_focused && app.popup == Popup::None { "_" } else { "" };
    let name_line = if app.last_name.is_empty() && !name_focused {
        Line::from(Span::styled(
            "Enter your family name (姓氏)",
            Style::default().fg(theme.text_dim),
        ))
    } else {
        Line::from(vec![
            Span::styled(app.last_name.as_str(), Style::default().fg(theme.text)),
            Span::styled(cursor, Style::default().fg(theme.accent)),
        ])
    };
    let name_input =
        Paragraph::new(name_line).block(field_block(app, " Family Name 姓氏 ", name_focused));
    f.render_widget(name_input, inner[0]);

    // Gender select
    let gender_focused = app.focus == Focus::Gender;
    let options: Vec<Span> = [Gender::Male, Gender::Female]
        .iter()
        .flat_map(|&g| {
            let style = if g == app.gender {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_dim)
            };
            let marker = if g == app.gender { "● " } else { "○ " };
            vec![
                Span::styled(marker, style),
                Span::styled(g.label(), style),
                Span::raw("    "),
            ]
        })
        .collect();
    let select =
        Paragraph::new(Line::from(options)).block(field_block(app, " Gender 性别 ", gender_focused));
    f.render_widget(select, inner[1]);

    // Generate button
    let button_focused = app.focus == Focus::Generate;
    let button_style = if button_focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Line::from(Span::styled(" Generate Names 生成名字 ", button_style)))
        .alignment(Alignment::Center)
        .block(field_block(app, "", button_focused));
    f.render_widget(button, inner[2]);
}

fn draw_toast<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let Some(toast) = &app.toast else {
        return;
    };
    let theme = &app.theme;

    let mut spans = vec![
        Span::styled("⚠ ", Style::default().fg(theme.warning)),
        Span::styled(
            toast.title.as_str(),
            Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(theme.text_dim)),
        Span::styled(toast.description.as_str(), Style::default().fg(theme.text)),
    ];
    if toast.repeats > 1 {
        spans.push(Span::styled(
            format!(" (×{})", toast.repeats),
            Style::default().fg(theme.text_dim),
        ));
    }
    spans.push(Span::styled("  (Esc dismisses)", Style::default().fg(theme.text_dim)));

    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

fn draw_footer<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let theme = &app.theme;
    let key = |k: &'static str| Span::styled(k, Style::default().fg(theme.accent));
    let desc = |d: &'static str| Span::styled(d, Style::default().fg(theme.text_dim));

    let quit = if app.accepts_text() { "Ctrl+C" } else { "q" };
    let footer = Paragraph::new(Line::from(vec![
        key("Tab"),
        desc(" next field  "),
        key("Enter"),
        desc(" generate  "),
        key("Ctrl+R"),
        desc(" regenerate  "),
        key("F1"),
        desc(" help  "),
        key(quit),
        desc(" quit"),
    ]))
    .alignment(Alignment::Center);

    f.render_widget(footer, area);
}

fn draw_help_popup<R: Rng>(f: &mut Frame, app: &App<R>) {
    let theme = &app.theme;
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 95 } else { 60 },
        if area.height < 30 { 90 } else { 60 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().fg(theme.danger).add_modifier(Modifier::BOLD),
        ))
    };
    let binding = |keys: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(keys, Style::default().fg(theme.accent)),
            Span::raw(what),
        ])
    };

    let help_text = vec![
        section("═══ Form ═══"),
        binding("  Tab/S-Tab  ", "Move between name, gender and button"),
        binding("  Enter      ", "Generate names"),
        binding("  Ctrl+R     ", "Regenerate from any field"),
        Line::from(""),
        section("═══ Gender ═══"),
        binding("  ←/→ Space  ", "Switch between male and female"),
        binding("  m / f      ", "Select male / female"),
        Line::from(""),
        section("═══ General ═══"),
        binding("  Esc        ", "Dismiss warning"),
        binding("  F1 / ?     ", "Show this help"),
        binding("  q / Ctrl+C ", "Quit (q works outside the name field)"),
        Line::from(""),
        section("═══ Scripts ═══"),
        binding("  namegen -n Wang -g female --json", ""),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(theme.text_dim)),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::styled(" to close", Style::default().fg(theme.text_dim)),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" namegen Help ", Style::default().fg(theme.accent)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::names::NameTable;
    use crossterm::event::{KeyCode, KeyEvent};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    /// Buffer contents as text, one line per row
    pub(crate) fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn render(app: &App<StdRng>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    pub(crate) fn test_app() -> App<StdRng> {
        App::with_rng(
            &AppConfig::default(),
            NameTable::builtin().clone(),
            StdRng::seed_from_u64(11),
        )
    }

    #[test]
    fn test_initial_screen() {
        let app = test_app();
        let screen = render(&app, 120, 40);
        assert!(screen.contains("English Name Generator for Chinese Families"));
        assert!(screen.contains("Generate Names"));
        assert!(screen.contains("Male"));
        assert!(!screen.contains("Please enter your family name"));
    }

    #[test]
    fn test_warning_is_rendered() {
        let mut app = test_app();
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        let screen = render(&app, 120, 40);
        assert!(screen.contains("Please enter your family name to continue"));
    }

    #[test]
    fn test_help_popup_is_rendered() {
        let mut app = test_app();
        app.handle_key(KeyEvent::from(KeyCode::F(1)));
        let screen = render(&app, 120, 40);
        assert!(screen.contains("namegen Help"));
    }

    #[test]
    fn test_typed_name_is_rendered() {
        let mut app = test_app();
        for c in "Wang".chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        let screen = render(&app, 120, 40);
        assert!(screen.contains("Wang_"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut app = test_app();
        app.last_name = "Li".to_string();
        app.generate();
        render(&app, 20, 8);
    }
}
