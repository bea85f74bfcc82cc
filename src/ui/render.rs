use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
    Frame,
};

use crate::App;

use super::{dialogs, product_list, status_bar, toast, totals_bar};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // Totals bar only takes space while there is something to show
    let totals_visible = !app.model.shopping.totals.is_zero();
    let mut constraints = vec![Constraint::Min(1)];
    if totals_visible {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    // Product list with selection state from the model
    let visible = app.model.visible_products();
    let mut list_state = ListState::default()
        .with_offset(app.model.navigation.offset)
        .with_selected(app.model.navigation.selected);

    product_list::render_product_list(
        f,
        chunks[0],
        &visible,
        app.model.shopping.list_name(),
        &app.config.currency,
        app.model.shopping.loaded,
        !app.model.ui.search_query.is_empty(),
        &mut list_state,
    );

    // Sync back what the widget actually displayed
    app.model.navigation.offset = list_state.offset();
    app.model.navigation.selected = list_state.selected();

    let mut chunk_idx = 1;
    if totals_visible {
        totals_bar::render_totals_bar(
            f,
            chunks[chunk_idx],
            &app.model.shopping.totals,
            &app.config.currency,
        );
        chunk_idx += 1;
    }

    status_bar::render_status_bar(
        f,
        chunks[chunk_idx],
        app.model.shopping.list.as_ref(),
        app.model.ui.search_mode,
        &app.model.ui.search_query,
    );

    // Modal popups over the list
    if let Some(input) = app.model.ui.new_product_input.as_deref() {
        dialogs::render_add_product(f, input);
    }

    if app.model.ui.confirm_delete_checked {
        let checked_count = app
            .model
            .shopping
            .products
            .iter()
            .filter(|p| p.checked)
            .count();
        dialogs::render_delete_checked_confirmation(f, checked_count);
    }

    if let Some((message, _)) = app.model.ui.toast_message.clone() {
        toast::render_toast(f, size, &message);
    }
}
