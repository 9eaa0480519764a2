mod sections;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::sync::OnceLock;

use crate::app::{App, Popup};
use crate::theme::Theme;

// Load the palette once at startup
static THEME: OnceLock<Theme> = OnceLock::new();

fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::load)
}

// Helper functions to get theme colors
fn accent() -> Color {
    theme().accent
}
fn gold() -> Color {
    theme().gold
}
fn text() -> Color {
    theme().text
}
fn text_dim() -> Color {
    theme().text_dim
}
fn frame_color() -> Color {
    theme().frame
}
fn heading() -> Color {
    theme().heading
}
fn success() -> Color {
    theme().success
}
fn danger() -> Color {
    theme().danger
}
fn bg_selected() -> Color {
    theme().bg_selected
}

/// Rows reserved outside the page area (info line + footer). The event
/// loop uses this to size the viewport before drawing.
pub const CHROME_ROWS: u16 = 2;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info line
            Constraint::Min(3),    // Page
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_info_line(f, app, chunks[0]);
    draw_page(f, app, chunks[1]);
    draw_footer(f, chunks[2]);

    if app.popup == Popup::Help {
        draw_help_popup(f);
    }
}

fn draw_info_line(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(ref status) = app.status_message {
        let color = if status.starts_with("Error") {
            danger()
        } else {
            gold()
        };
        Line::from(Span::styled(status.clone(), Style::default().fg(color)))
    } else {
        let rotate = if app.rotator.is_running() {
            "auto-rotate on"
        } else {
            "auto-rotate off"
        };
        Line::from(vec![
            Span::styled("SportPass", Style::default().fg(accent()).add_modifier(Modifier::BOLD)),
            Span::styled(" · QR check-in for gyms", Style::default().fg(text_dim())),
            Span::styled(" │ ", Style::default().fg(frame_color())),
            Span::styled(
                format!(
                    "screen {}/{} ({})",
                    app.rotator.active_index() + 1,
                    app.rotator.len(),
                    app.rotator.active().label
                ),
                Style::default().fg(text()),
            ),
            Span::styled(" │ ", Style::default().fg(frame_color())),
            Span::styled(rotate, Style::default().fg(text_dim())),
        ])
    };

    let info = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(info, area);
}

/// Render the visible slice of the page document.
fn draw_page(f: &mut Frame, app: &App, area: Rect) {
    let doc = sections::build_document(app);
    let start = (app.scroll as usize).min(doc.len());
    let end = (start + area.height as usize).min(doc.len());
    let visible: Vec<Line> = doc[start..end].to_vec();

    f.render_widget(Paragraph::new(visible), area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let hints: Vec<(&str, &str)> = vec![
        ("j/k", "Scroll"),
        ("←→", "Screen"),
        ("Tab", "Interface"),
        ("Space", "Auto"),
        ("?", "Help"),
        ("q", "Quit"),
    ];

    // Responsive: show fewer hints on narrow terminals
    let max_hints = if area.width < 60 {
        4
    } else {
        hints.len()
    };

    let hint_spans: Vec<Span> = hints
        .iter()
        .take(max_hints)
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(accent())),
                Span::styled(format!(" {} │ ", action), Style::default().fg(text_dim())),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_help_popup(f: &mut Frame) {
    let popup_area = centered_rect(
        if f.area().width < 70 { 90 } else { 60 },
        if f.area().height < 30 { 90 } else { 70 },
        f.area(),
    );

    f.render_widget(Clear, popup_area);

    let key = |k: &str, action: &str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", k), Style::default().fg(accent())),
            Span::raw(action.to_string()),
        ])
    };

    let help_text = vec![
        Line::from(Span::styled(
            "═══ Page ═══",
            Style::default().fg(heading()).add_modifier(Modifier::BOLD),
        )),
        key("j/k ↑/↓", "Scroll one row"),
        key("PgUp/PgDn", "Scroll one screen"),
        key("g/G", "Jump to top / bottom"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Hero screens ═══",
            Style::default().fg(heading()).add_modifier(Modifier::BOLD),
        )),
        key("←/→ h/l", "Previous / next screen"),
        key("1-4", "Pick a screen directly"),
        key("Space", "Toggle auto-rotation"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Interface gallery ═══",
            Style::default().fg(heading()).add_modifier(Modifier::BOLD),
        )),
        key("Tab/S-Tab", "Cycle the gallery selection"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ CLI ═══",
            Style::default().fg(heading()).add_modifier(Modifier::BOLD),
        )),
        key("--clubs", "Club catalog as JSON"),
        key("--screens", "Hero screen catalog as JSON"),
        key("--export-bundle", "Write a signed bundle manifest"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(text_dim())),
            Span::styled("?", Style::default().fg(accent())),
            Span::styled("/", Style::default().fg(text_dim())),
            Span::styled("Esc", Style::default().fg(accent())),
            Span::styled(" to close", Style::default().fg(text_dim())),
        ]),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(Span::styled(" sportdeck Help ", Style::default().fg(accent())))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent())),
    );

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
