use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Period;
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Set Spending Limit ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Amount field
            Constraint::Length(3), // Period selection
            Constraint::Length(1), // Save state / hints
            Constraint::Min(0),
        ])
        .split(inner);

    render_amount_field(f, chunks[0], app);
    render_period_row(f, chunks[1], app);
    render_footer(f, chunks[2], app);
}

fn render_amount_field(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(Span::styled(" Amount ", theme::dim_style()));

    let line = Line::from(vec![
        Span::styled("$ ", Style::default().fg(theme::TEXT_DIM)),
        Span::styled(&app.amount_input, theme::normal_style()),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);

    if !app.submitting {
        f.set_cursor_position((area.x + 3 + app.amount_input.len() as u16, area.y + 1));
    }
}

fn render_period_row(f: &mut Frame, area: Rect, app: &App) {
    let periods = Period::all();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, periods.len() as u32);
            periods.len()
        ])
        .split(area);

    for (i, period) in periods.iter().enumerate() {
        let selected = app.selected_period == Some(*period);
        let style = if selected {
            theme::selected_style().add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };
        let border = if selected { theme::ACCENT } else { theme::OVERLAY };

        let cell = Paragraph::new(Line::from(Span::styled(period.label(), style)))
            .centered()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(cell, cells[i]);
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let line = if app.submitting {
        Line::from(Span::styled(
            " Saving…",
            Style::default().fg(theme::YELLOW),
        ))
    } else {
        Line::from(Span::styled(
            " Enter save · j/k choose period · Esc cancel",
            theme::dim_style(),
        ))
    };
    f.render_widget(Paragraph::new(line), area);
}
