mod dashboard;
mod help;
mod helpers;
mod results;
mod theme;

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, AppView, SettingsField};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (title, body_text) = match app.view {
        AppView::Dashboard => (" Dashboard ", dashboard::build_dashboard_text(app)),
        AppView::Help => (" Help ", help::build_help_text()),
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let now = Local::now();
    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  RPMDash  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "content creator dashboard",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            now.format("%A, %B %e, %Y").to_string(),
            Style::default().fg(Theme::dim()),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(header, layout[0]);

    let mut body_lines = vec![
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    body_lines.extend(body_text.lines);
    body_lines.push(Line::from(""));
    body_lines.push(Line::from(Span::styled(
        "----------------------------------------",
        Style::default().fg(Theme::dim()),
    )));
    body_lines.extend(keybinds_lines(app));
    let body = Paragraph::new(Text::from(body_lines))
        .style(Style::default().fg(Theme::text()))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Text::from(active_timers_line(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, layout[2]);

    if let Some(popup) = &app.settings_popup {
        render_settings_popup(frame, popup);
    }
    if app.results_open {
        if let Some(result) = &app.results {
            render_results_modal(frame, result, app.years, app.daily_rate_percent);
        }
    }
}

fn render_settings_popup(frame: &mut Frame, popup: &crate::app::SettingsPopup) {
    let area = centered_rect(50, 35, frame.area());
    frame.render_widget(Clear, area);

    let field_style = |active: bool| {
        if active {
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::text())
        }
    };
    let years_active = popup.field == SettingsField::Years;
    let rate_active = popup.field == SettingsField::Rate;
    let arrow_style = Style::default()
        .fg(Theme::selection_marker())
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        "Projection settings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(if years_active { "> " } else { "  " }, arrow_style),
        Span::styled("Years:      ", Style::default().fg(Theme::dim())),
        Span::styled(popup.years.as_str(), field_style(years_active)),
    ]));
    lines.push(Line::from(vec![
        Span::styled(if rate_active { "> " } else { "  " }, arrow_style),
        Span::styled("Rate %/day: ", Style::default().fg(Theme::dim())),
        Span::styled(popup.rate.as_str(), field_style(rate_active)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Type to edit. Tab: switch field. Enter: apply. Esc: cancel.",
        Style::default().fg(Theme::dim()),
    )));

    let popup_widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(" Settings "),
        );
    frame.render_widget(popup_widget, area);
}

fn render_results_modal(
    frame: &mut Frame,
    result: &crate::types::CalculationResult,
    years: u32,
    rate: f64,
) {
    let area = centered_rect(80, 85, frame.area());
    frame.render_widget(Clear, area);

    let popup_widget = Paragraph::new(results::build_results_text(result, years, rate))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(" Results "),
        );
    frame.render_widget(popup_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}

fn active_timers_line(app: &App) -> Line<'_> {
    let active = app.board.active_count();
    if active > 0 {
        // Animated indicator that cycles every second
        let animation_chars = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        let anim_index = (Local::now().timestamp() % animation_chars.len() as i64) as usize;
        let indicator = animation_chars[anim_index];

        let label = if active == 1 { "timer" } else { "timers" };
        Line::from(vec![
            Span::styled(
                format!("{indicator} "),
                Style::default()
                    .fg(Theme::gain())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{active} {label} running"),
                Style::default()
                    .fg(Theme::gain())
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "● No timers running",
            Style::default().fg(Theme::dim()),
        ))
    }
}

fn keybinds_lines(app: &App) -> Vec<Line<'static>> {
    let (primary, secondary) = match app.view {
        AppView::Dashboard => (
            "1-6/Space: Start/stop timer  Up/Down: Select  s: Settings  c: Complete",
            "?: Help  q: Quit",
        ),
        AppView::Help => ("Press ? or ESC to close this help screen", ""),
    };
    vec![
        Line::from(Span::styled(primary, Style::default().fg(Theme::dim()))),
        Line::from(Span::styled(secondary, Style::default().fg(Theme::dim()))),
    ]
}
