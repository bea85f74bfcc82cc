use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::logic::totals::format_money;
use crate::store::Product;
use crate::utils;

const QTY_COLUMN: usize = 6;
const PRICE_COLUMN: usize = 12;

/// Render the product list panel
///
/// Shows a loading placeholder before the first reload completes and an
/// empty-state panel when the list (or the active search) has no rows.
pub fn render_product_list(
    f: &mut Frame,
    area: Rect,
    products: &[Product],
    list_name: &str,
    currency: &str,
    loaded: bool,
    filter_active: bool,
    state: &mut ListState,
) {
    let title = if list_name.is_empty() {
        " Shopping List ".to_string()
    } else {
        format!(" {} ({}) ", list_name, products.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    if !loaded {
        let placeholder = Paragraph::new("Loading…")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    if products.is_empty() {
        let message = if filter_active {
            "No products match the search"
        } else {
            "The list is empty\n\nPress 'a' to add a product"
        };
        let empty_state = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty_state, area);
        return;
    }

    // Columns: checkbox, name (flexible), quantity, price
    let inner_width = area.width.saturating_sub(2) as usize;
    let name_width = inner_width.saturating_sub(4 + QTY_COLUMN + PRICE_COLUMN);

    let items: Vec<ListItem> = products
        .iter()
        .map(|product| ListItem::new(product_line(product, name_width, currency)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▸ ");

    f.render_stateful_widget(list, area, state);
}

fn product_line(product: &Product, name_width: usize, currency: &str) -> Line<'static> {
    let (checkbox, checkbox_style, name_style) = if product.checked {
        (
            "[x] ",
            Style::default().fg(Color::Green),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default(), Style::default())
    };

    let quantity = if product.quantity > 1 {
        format!("{:>width$}", format!("×{}", product.quantity), width = QTY_COLUMN)
    } else {
        " ".repeat(QTY_COLUMN)
    };

    let price = if product.price_cents > 0 {
        format!(
            "{:>width$}",
            format_money(product.price_cents, currency),
            width = PRICE_COLUMN
        )
    } else {
        " ".repeat(PRICE_COLUMN)
    };

    Line::from(vec![
        Span::styled(checkbox.to_string(), checkbox_style),
        Span::styled(utils::fit_width(&product.name, name_width), name_style),
        Span::styled(quantity, Style::default().fg(Color::Cyan)),
        Span::styled(price, Style::default().fg(Color::Yellow)),
    ])
}
