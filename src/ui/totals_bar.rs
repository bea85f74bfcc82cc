use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::totals::{format_money, Totals};

/// Render the totals bar below the product list
///
/// The caller skips this widget entirely while both totals are zero; the
/// bar fades back in (appears) as soon as anything has a price.
pub fn render_totals_bar(f: &mut Frame, area: Rect, totals: &Totals, currency: &str) {
    let line = Line::from(vec![
        Span::styled("Total: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_money(totals.total_cents, currency),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("In cart: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_money(totals.checked_cents, currency),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(bar, area);
}
