use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::store::ListDetails;

/// Render the bottom status bar
///
/// While search input is active it shows the query being typed; otherwise
/// the sort state, an optional filter reminder, and the key legend.
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    list: Option<&ListDetails>,
    search_mode: bool,
    search_query: &str,
) {
    let line = if search_mode {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Yellow)),
            Span::raw(search_query.to_string()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else {
        let sort_display = match list {
            Some(list) => format!(
                "Sort: {} {}",
                list.sort_by.as_str(),
                if list.sort_ascending { "▲" } else { "▼" }
            ),
            None => "Sort: -".to_string(),
        };

        let filter_display = if search_query.is_empty() {
            String::new()
        } else {
            format!(" │ Filter: {} (Esc clears)", search_query)
        };

        Line::from(vec![
            Span::styled(sort_display, Style::default().fg(Color::Cyan)),
            Span::styled(filter_display, Style::default().fg(Color::Yellow)),
            Span::styled(
                " │ ␣ check  a add  s sort  r reverse  / search  D delete checked  q quit",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };

    f.render_widget(Paragraph::new(line), area);
}
