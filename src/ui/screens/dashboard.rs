use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{LimitProgress, SpendingLimit};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, progress_bar};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Limit card
            Constraint::Length(5), // Current spending card
            Constraint::Min(0),
        ])
        .split(area);

    match &app.limit {
        Some(limit) => render_limit_card(f, chunks[0], limit, app.total_spending),
        None => render_prompt_card(f, chunks[0]),
    }
    render_spending_card(f, chunks[1], app);
}

fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ))
}

/// Call-to-action card shown while no active limit is known. A failed fetch
/// lands here too; the distinction only exists in the log file.
fn render_prompt_card(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No spending limit set", theme::dim_style())),
        Line::from(Span::styled(
            "Press Enter to set one, or use :limit",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(card_block("Spending Limit"));
    f.render_widget(msg, area);
}

/// Progress card: period, bar, and spent-of-limit amounts, all colored by
/// the derived band.
fn render_limit_card(f: &mut Frame, area: Rect, limit: &SpendingLimit, total_spending: Decimal) {
    let progress = LimitProgress::derive(limit, total_spending);
    let color = theme::band_color(progress.band);

    let bar_width = (area.width.saturating_sub(12) as usize).clamp(10, 40);
    let ratio = (progress.percentage / Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0);

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} limit", limit.period),
            theme::dim_style(),
        )),
        Line::from(vec![
            Span::styled(progress_bar(ratio, bar_width), Style::default().fg(color)),
            Span::styled(
                format!(" {:.0}%", progress.percentage),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format_amount(total_spending),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" of {}", format_amount(limit.amount)),
                theme::dim_style(),
            ),
        ]),
    ])
    .centered()
    .block(card_block("Spending Limit"));

    f.render_widget(text, area);
}

fn render_spending_card(f: &mut Frame, area: Rect, app: &App) {
    let subtitle = match &app.limit {
        Some(limit) => format!("{} period", limit.period),
        None => "this period".to_string(),
    };

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(app.total_spending),
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(card_block("Current Spending"));

    f.render_widget(text, area);
}
