//! Song editor screen: title/author/category inputs and a lyrics buffer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, EditorField};
use crate::ui::create_titled_block;

/// Draw the song editor form.
pub fn draw_editor(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    draw_field(f, app, EditorField::Title, &app.editor.title, chunks[0]);
    draw_field(f, app, EditorField::Author, &app.editor.author, chunks[1]);
    draw_field(f, app, EditorField::Category, &app.editor.category, chunks[2]);
    draw_lyrics(f, app, chunks[3]);
}

fn draw_field(f: &mut Frame, app: &App, field: EditorField, value: &str, area: Rect) {
    let focused = app.editor.field == field;
    let input = Paragraph::new(value.to_string()).block(create_titled_block(field.name(), focused));
    f.render_widget(input, area);
    if focused {
        #[allow(clippy::cast_possible_truncation)]
        f.set_cursor(area.left() + value.chars().count() as u16 + 1, area.top() + 1);
    }
}

fn draw_lyrics(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.editor.field == EditorField::Lyrics;
    let lines: Vec<Line> = app
        .editor
        .lyrics
        .iter()
        .enumerate()
        .map(|(i, text)| {
            if focused && i == app.editor.cursor_line {
                Line::from(Span::styled(
                    text.clone(),
                    Style::default().bg(Color::Rgb(60, 60, 90)).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::raw(text.clone()))
            }
        })
        .collect();

    let title = if app.editor.editing.is_some() {
        "Letra (editando)"
    } else {
        "Letra (nueva canción)"
    };
    let body = Paragraph::new(lines).block(create_titled_block(title, focused));
    f.render_widget(body, area);
}
