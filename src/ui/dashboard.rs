use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{clamp_name, format_countdown, hex_to_color};
use super::theme::Theme;
use crate::app::App;
use crate::types::TaskState;

pub fn build_dashboard_text(app: &App) -> Text<'_> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "  Content Tasks",
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "  ──────────────",
        Style::default().fg(Theme::dim()),
    )));
    lines.push(Line::from(""));

    for (index, task) in app.board.tasks().iter().enumerate() {
        let selected = index == app.selected_task_index;
        let marker_style = if selected {
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        let task_color = hex_to_color(task.color).unwrap_or(Color::Magenta);

        let (state_label, state_style) = match task.state() {
            TaskState::Running => (
                "● running",
                Style::default().fg(Theme::gain()).add_modifier(Modifier::BOLD),
            ),
            TaskState::Expired => ("✓ done", Style::default().fg(Theme::loss())),
            TaskState::Idle => ("○ idle", Style::default().fg(Theme::dim())),
        };

        lines.push(Line::from(vec![
            Span::styled(if selected { "> " } else { "  " }, marker_style),
            Span::styled(
                format!("{}. ", index + 1),
                Style::default().fg(Theme::accent()),
            ),
            Span::styled(
                clamp_name(task.title, 20),
                Style::default().fg(task_color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format_countdown(task.time_remaining),
                Style::default()
                    .fg(if task.is_active {
                        Theme::gain()
                    } else {
                        Theme::text()
                    })
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("{state_label:<10}"), state_style),
            Span::styled(task.subtitle, Style::default().fg(Theme::dim())),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Projection",
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "  ───────────",
        Style::default().fg(Theme::dim()),
    )));
    lines.push(Line::from(vec![
        Span::styled("  Horizon: ", Style::default().fg(Theme::dim())),
        Span::styled(
            format!("{} years", app.years),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Daily rate: ", Style::default().fg(Theme::dim())),
        Span::styled(
            format!("{}%", app.daily_rate_percent),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    if let Some(status) = &app.status {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {status}"),
            Style::default().fg(Theme::warn()),
        )));
    }

    Text::from(lines)
}
