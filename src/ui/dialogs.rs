use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the add-product input popup
///
/// The entry line is `name [quantity] [price]`, e.g. `oat milk 2 1.19`.
pub fn render_add_product(f: &mut Frame, input: &str) {
    let area = centered_rect(f.area(), 50, 6);

    let lines = vec![
        Line::from(vec![
            Span::raw("> "),
            Span::raw(input.to_string()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "name [quantity] [price]   Enter adds, Esc cancels",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Add Product ")
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Render the delete-checked confirmation prompt
pub fn render_delete_checked_confirmation(f: &mut Frame, checked_count: usize) {
    let area = centered_rect(f.area(), 46, 5);

    let noun = if checked_count == 1 { "product" } else { "products" };
    let lines = vec![
        Line::from(format!(
            "Remove {} checked {} from the list?",
            checked_count, noun
        )),
        Line::from(""),
        Line::from(Span::styled(
            "(y/n)",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Delete Checked ")
            .border_style(Style::default().fg(Color::Red)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Center a fixed-size popup within the frame
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
