//! Setlist screen: ordered list of songs for the session.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::create_titled_block;

/// Draw the setlist in performance order.
pub fn draw_setlist(f: &mut Frame, app: &mut App, area: Rect) {
    if app.setlist.is_empty() {
        let empty = Paragraph::new(
            "El setlist está vacío. Marca canciones con 's' desde la lista o el visor.",
        )
        .block(create_titled_block("Setlist", true))
        .wrap(Wrap { trim: true });
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .setlist
        .titles()
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let known = app.library.find_by_title(title).is_some();
            let style = if known {
                Style::default().fg(Color::White)
            } else {
                // Song was deleted from the book after being listed.
                Style::default().fg(Color::Red)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::Cyan)),
                Span::styled(title.clone(), style),
            ]))
        })
        .collect();

    let title = format!("Setlist ({})", app.setlist.len());
    let list = List::new(items)
        .block(create_titled_block(&title, true))
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(80, 80, 120))
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(list, area, &mut app.setlist_state);
}
