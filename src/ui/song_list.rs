//! Song list screen: browse, search and filter the song book.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::constants::ui::LIST_PANE_PERCENT;
use crate::ui::create_titled_block;

/// Draw the song list with a preview pane for the selected song.
pub fn draw_song_list(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(LIST_PANE_PERCENT),
            Constraint::Percentage(100 - LIST_PANE_PERCENT),
        ])
        .split(area);

    draw_list_pane(f, app, chunks[0]);
    draw_preview_pane(f, app, chunks[1]);
}

fn draw_list_pane(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .visible
        .iter()
        .filter_map(|&index| app.library.get(index))
        .map(|song| {
            let marker = if app.setlist.contains(&song.title) { "♪ " } else { "  " };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(song.title.clone(), Style::default().fg(Color::White)),
            ];
            if !song.author.is_empty() {
                spans.push(Span::styled(
                    format!(" — {}", song.author),
                    Style::default().fg(Color::Gray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut title = format!("Canciones ({})", app.visible.len());
    if let Some(category) = &app.category_filter {
        title.push_str(&format!(" [{category}]"));
    }
    if !app.search_query.is_empty() {
        title.push_str(&format!(" /{}", app.search_query));
    }

    let list = List::new(items)
        .block(create_titled_block(&title, true))
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(80, 80, 120))
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn draw_preview_pane(f: &mut Frame, app: &App, area: Rect) {
    let Some(song) = app.selected_song().and_then(|i| app.library.get(i)) else {
        let empty = Paragraph::new("El cancionero está vacío. Pulsa 'a' para añadir una canción.")
            .block(create_titled_block("Vista previa", false))
            .wrap(Wrap { trim: true });
        f.render_widget(empty, area);
        return;
    };

    let chord_style = Style::default()
        .fg(app.config.chord_color)
        .add_modifier(Modifier::BOLD);
    let lines = chords_preview(&song.lyrics, chord_style);

    let title = if song.category.is_empty() {
        song.title.clone()
    } else {
        format!("{} ({})", song.title, song.category)
    };
    let preview = Paragraph::new(lines).block(create_titled_block(&title, false));
    f.render_widget(preview, area);
}

/// Render lyric lines with chords styled, without transposition.
fn chords_preview(lyrics: &str, chord_style: Style) -> Vec<Line<'static>> {
    lyrics
        .split('\n')
        .flat_map(|line| super::viewer::render_line(line, 0, chord_style))
        .collect()
}
