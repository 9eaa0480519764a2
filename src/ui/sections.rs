//! Section renderers for the page document.
//!
//! Each section produces exactly its block height in rows (padded or
//! truncated), so the document's row offsets always line up with the
//! extents registered with the reveal watcher. Blocks the watcher has
//! not revealed yet render as a dim placeholder.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{accent, bg_selected, frame_color, gold, heading, success, text, text_dim};
use crate::app::{App, PAGE_BLOCKS};
use crate::content;

pub fn build_document(app: &App) -> Vec<Line<'static>> {
    let mut doc = Vec::with_capacity(crate::app::page_height() as usize);
    for block in PAGE_BLOCKS {
        let mut lines = if app.reveal.is_visible(block.id) {
            match block.id {
                "hero" => hero(app),
                "steps" => steps(),
                "benefits" => benefits(),
                "interfaces" => interfaces(app),
                "owner" => owner(),
                "brochure" => brochure(),
                "clubs" => clubs(),
                "pilot" => pilot(),
                "users" => users(),
                "cta" => cta(),
                _ => Vec::new(),
            }
        } else {
            placeholder(block.height)
        };
        pad_to(&mut lines, block.height);
        doc.extend(lines);
    }
    doc
}

/// Pre-reveal stand-in, the terminal equivalent of the pre-fade-in
/// state.
fn placeholder(height: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    lines.push(Line::from(Span::styled(
        "   · · ·",
        Style::default().fg(frame_color()),
    )));
    pad_to(&mut lines, height);
    lines
}

fn pad_to(lines: &mut Vec<Line<'static>>, height: u16) {
    lines.truncate(height as usize);
    while lines.len() < height as usize {
        lines.push(Line::from(""));
    }
}

fn eyebrow(label: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", label.to_uppercase()),
        Style::default().fg(gold()).add_modifier(Modifier::BOLD),
    ))
}

fn headline(text_str: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", text_str),
        Style::default().fg(heading()).add_modifier(Modifier::BOLD),
    ))
}

fn body(text_str: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", text_str),
        Style::default().fg(text()),
    ))
}

fn dim(text_str: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", text_str),
        Style::default().fg(text_dim()),
    ))
}

fn hero(app: &App) -> Vec<Line<'static>> {
    let active = app.rotator.active();

    let mut lines = vec![
        eyebrow("Partner program · local market"),
        headline("Attract new members without changing how your club runs"),
        body("SportPass brings you new walk-ins through a simple QR system"),
        body("and tracks your earnings the moment they happen."),
        Line::from(""),
    ];

    for point in content::owner_points() {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(success())),
            Span::styled(point.to_string(), Style::default().fg(text())),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            " [ Join as a partner ]",
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  [ See how it works ]", Style::default().fg(text_dim())),
    ]));
    lines.push(Line::from(""));

    // Phone mock with the active screen
    let frame = Style::default().fg(frame_color());
    lines.push(Line::from(Span::styled(
        "  ╭──────────────────────────╮",
        frame,
    )));
    lines.push(Line::from(vec![
        Span::styled("  │ ", frame),
        Span::styled(
            format!("{:^24}", active.label.clone()),
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │", frame),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  │ ", frame),
        Span::styled(format!("{:^24}", "▒▒▒▒▒▒▒▒▒▒"), Style::default().fg(text_dim())),
        Span::styled(" │", frame),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  │ ", frame),
        Span::styled(
            format!("{:^24}", active.image_ref.clone()),
            Style::default().fg(text_dim()),
        ),
        Span::styled(" │", frame),
    ]));
    lines.push(Line::from(Span::styled(
        "  ╰──────────────────────────╯",
        frame,
    )));
    lines.push(dim(&active.caption));

    // Screen tabs
    let mut tab_spans: Vec<Span> = vec![Span::raw("  ")];
    for (i, item) in app.rotator.items().iter().enumerate() {
        let style = if i == app.rotator.active_index() {
            Style::default()
                .fg(accent())
                .bg(bg_selected())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(text_dim())
        };
        tab_spans.push(Span::styled(format!(" {} ", item.label), style));
        tab_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(tab_spans));
    lines.push(dim("←/→ or 1-4 to switch · Space toggles auto-rotate"));

    lines
}

fn steps() -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow("How it works for club owners"),
        headline("Simple to run from day one"),
        Line::from(""),
    ];

    for step in content::steps() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", step.number),
                Style::default().fg(gold()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                step.title.to_string(),
                Style::default().fg(heading()).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(dim(step.text));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(" Every app entry: ", Style::default().fg(text())),
        Span::styled(
            "80% to the club",
            Style::default().fg(success()).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · 20% platform fee", Style::default().fg(text_dim())),
    ]));
    lines.push(dim("No fixed fees. No monthly subscription."));

    lines
}

fn benefits() -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow("Why club owners join"),
        headline("Extra growth without risking your current operation"),
        Line::from(""),
    ];

    for card in content::benefits() {
        lines.push(Line::from(vec![
            Span::styled("  ▪ ", Style::default().fg(accent())),
            Span::styled(
                card.title.to_string(),
                Style::default().fg(heading()).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(dim(&format!("    {}", card.text)));
    }

    lines
}

fn interfaces(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow("App interfaces"),
        headline("A consistent SportPass experience, screen by screen"),
        Line::from(""),
    ];

    // Selector list
    for (i, panel) in app.interfaces.items().iter().enumerate() {
        let selected = i == app.interfaces.active_index();
        let marker = if selected { "▶" } else { " " };
        let style = if selected {
            Style::default()
                .fg(accent())
                .bg(bg_selected())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(text_dim())
        };
        lines.push(Line::from(Span::styled(
            format!(" {} {:<26} {}", marker, panel.title, panel.subtitle),
            style,
        )));
    }

    lines.push(Line::from(""));

    // Detail stage for the active panel
    let active = app.interfaces.active();
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {}", active.title),
            Style::default().fg(heading()).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", active.image_ref),
            Style::default().fg(text_dim()),
        ),
    ]));
    lines.push(dim(&active.subtitle));
    for point in &active.points {
        lines.push(Line::from(vec![
            Span::styled("   • ", Style::default().fg(accent())),
            Span::styled(point.clone(), Style::default().fg(text())),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(dim("Tab / Shift-Tab to browse the gallery"));

    lines
}

fn owner() -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow("Money and operations"),
        headline("Stop collecting cash by hand; everything is recorded"),
        Line::from(""),
    ];

    for metric in content::owner_metrics() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<24}", metric.label), Style::default().fg(text_dim())),
            Span::styled(
                metric.value.to_string(),
                Style::default().fg(success()).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {:<14}{:<16}{:<8}{}", "Member", "Branch", "Time", "Amount"),
        Style::default().fg(heading()),
    )));
    for entry in content::entries_today() {
        lines.push(Line::from(Span::styled(
            format!(
                " {:<14}{:<16}{:<8}{}",
                entry.member, entry.branch, entry.time, entry.amount
            ),
            Style::default().fg(text()),
        )));
    }

    lines
}

fn brochure() -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow("Club brochures"),
        headline("Two QR codes per club, each with one job"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ▪ Brochure QR  ", Style::default().fg(gold()).add_modifier(Modifier::BOLD)),
            Span::styled(
                "opens the club page: price, branch and entry steps".to_string(),
                Style::default().fg(text()),
            ),
        ]),
        Line::from(vec![
            Span::styled("  ▪ Check-in QR  ", Style::default().fg(accent()).add_modifier(Modifier::BOLD)),
            Span::styled(
                "scanned from inside the app at the door".to_string(),
                Style::default().fg(text()),
            ),
        ]),
        Line::from(""),
    ];

    for club in content::clubs() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} · {}", club.name, club.branch),
                Style::default().fg(heading()),
            ),
            Span::styled(
                format!("  sportpass.app/clubs/{}", club.slug),
                Style::default().fg(text_dim()),
            ),
        ]));
    }

    lines
}

fn clubs() -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow("Partner clubs"),
        headline("Launch catalog, Damascus"),
        Line::from(""),
    ];

    for club in content::clubs() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} · {}", club.name, club.branch),
                Style::default().fg(heading()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} SYP/visit", club.entry_price),
                Style::default().fg(gold()),
            ),
        ]));
        lines.push(dim(&format!(
            "   {} · {} · {}",
            club.address,
            club.open_hours,
            club.highlights.join(", ")
        )));
    }

    lines
}

fn pilot() -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow("Founding partner pilot"),
        headline("A three-month pilot, not a leap of faith"),
        Line::from(""),
    ];

    for point in content::trust_points() {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(success())),
            Span::styled(point.to_string(), Style::default().fg(text())),
        ]));
    }

    lines.push(Line::from(""));
    for stage in content::pilot_timeline() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<10}", stage.label),
                Style::default().fg(gold()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(stage.value.to_string(), Style::default().fg(text_dim())),
        ]));
    }

    lines
}

fn users() -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow("For members"),
        headline("Train anywhere, pay per visit"),
        Line::from(""),
    ];

    for point in content::user_points() {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(accent())),
            Span::styled(point.to_string(), Style::default().fg(text())),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            " [ Download the app ]",
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  sportpass.app/apk", Style::default().fg(text_dim())),
    ]));

    lines
}

fn cta() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        headline("Ready to open your doors to SportPass members?"),
        body("Join the pilot and start earning from day one."),
        Line::from(vec![
            Span::styled(
                " [ Get the app ]",
                Style::default().fg(accent()).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  sportpass.app/download", Style::default().fg(text_dim())),
        ]),
        Line::from(""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::page_height;
    use crate::config::AppConfig;

    #[test]
    fn document_height_matches_the_registered_blocks() {
        for motion in [true, false] {
            let mut app = App::new(&AppConfig::default(), motion).unwrap();
            app.set_viewport_height(10);
            let doc = build_document(&app);
            assert_eq!(doc.len(), page_height() as usize);
        }
    }

    #[test]
    fn pilot_and_user_sections_render_their_catalogs() {
        let mut app = App::new(&AppConfig::default(), false).unwrap();
        app.set_viewport_height(10);
        let doc = build_document(&app);

        let block_text = |id: &str, height: u16| -> String {
            let top = crate::app::block_top(id) as usize;
            doc[top..top + height as usize]
                .iter()
                .flat_map(|line| line.spans.iter())
                .map(|span| span.content.as_ref())
                .collect()
        };

        let pilot = block_text("pilot", 13);
        assert!(pilot.contains("Month 1"));
        assert!(pilot.contains("Month 3"));

        let users = block_text("users", 10);
        assert!(users.contains("Pay only when you train"));

        let brochure = block_text("brochure", 10);
        assert!(brochure.contains("sportpass.app/clubs/olympia-mazzeh"));
    }
}
