use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{clamp_name, format_amount, format_minutes};
use super::theme::Theme;
use crate::types::CalculationResult;

const CHART_WIDTH: usize = 20;
/// A full 20-minute session fills the whole bar.
const CHART_FULL_MINUTES: f64 = 20.0;

pub fn build_results_text(result: &CalculationResult, years: u32, rate: f64) -> Text<'_> {
    let mut lines = Vec::new();

    let verdict_style = if result.is_loss {
        Style::default().fg(Theme::loss()).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::gain()).add_modifier(Modifier::BOLD)
    };

    lines.push(Line::from(vec![
        Span::styled(
            "Projection report",
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({years} years at {rate}%/day)"),
            Style::default().fg(Theme::dim()),
        ),
    ]));
    lines.push(Line::from(""));

    for projection in &result.projections {
        let principal_style = if projection.daily_principal < 0.0 {
            Style::default().fg(Theme::loss())
        } else {
            Style::default().fg(Theme::gain())
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                clamp_name(projection.title, 18),
                Style::default().fg(Theme::text()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>6} min  ", format_minutes(projection.minutes)),
                Style::default().fg(Theme::accent()),
            ),
            Span::styled(
                format!("{:>13}/day  ", format_amount(projection.daily_principal)),
                principal_style,
            ),
            Span::styled(
                format!("{:>18}", format_amount(projection.future_value)),
                principal_style,
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Minutes worked",
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    )));
    for point in &result.chart_data {
        let filled = ((point.minutes / CHART_FULL_MINUTES) * CHART_WIDTH as f64).round() as usize;
        let filled = filled.min(CHART_WIDTH);
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(CHART_WIDTH - filled));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(clamp_name(point.name, 18), Style::default().fg(Theme::text())),
            Span::styled(bar, Style::default().fg(Theme::highlight())),
            Span::styled(
                format!(" {}", format_minutes(point.minutes)),
                Style::default().fg(Theme::accent()),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "────────────────────────────────────────",
        Style::default().fg(Theme::dim()),
    )));
    lines.push(Line::from(vec![
        Span::styled("  Total minutes:     ", Style::default().fg(Theme::dim())),
        Span::styled(
            format_minutes(result.total_minutes),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Net daily amount:  ", Style::default().fg(Theme::dim())),
        Span::styled(format_amount(result.daily_principal), verdict_style),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Net future value:  ", Style::default().fg(Theme::dim())),
        Span::styled(format_amount(result.future_value), verdict_style),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        if result.is_loss {
            "  Projected loss. Discipline compounds too."
        } else {
            "  Projected gain. Keep the streak going."
        },
        verdict_style,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter/Esc: close",
        Style::default().fg(Theme::dim()),
    )));

    Text::from(lines)
}
