use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Timers"));
    lines.extend(section_lines(&[
        "1-6: Start/stop that task's timer",
        "Up/Down: Move selection",
        "Space/Enter: Start/stop selected timer",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Projection"));
    lines.extend(section_lines(&[
        "s: Edit horizon years and daily rate",
        "c: Complete - stop all timers and show the report",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "?: Toggle help",
        "esc: Close help/report",
        "q: Quit",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Settings popup"));
    lines.extend(section_lines(&[
        "Tab/Up/Down: Switch field",
        "Enter: Apply (years floored at 1, bad rate falls back to 0)",
        "Esc: Cancel",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
