//! User interface components.
//!
//! Provides TUI widgets and drawing functions for the application's
//! terminal-based user interface using ratatui.

mod editor;
mod setlist_view;
mod song_list;
mod viewer;

pub use editor::draw_editor;
pub use setlist_view::draw_setlist;
pub use song_list::draw_song_list;
pub use viewer::draw_viewer;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AppMode};
use crate::constants::ui::COMMAND_BAR_HEIGHT;

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(COMMAND_BAR_HEIGHT), // Command/status bar at bottom
        ])
        .split(f.size());

    match app.mode {
        AppMode::SongList => draw_song_list(f, app, chunks[0]),
        AppMode::Viewer => draw_viewer(f, app, chunks[0]),
        AppMode::Editor => draw_editor(f, app, chunks[0]),
        AppMode::Setlist => draw_setlist(f, app, chunks[0]),
    }

    draw_command_bar(f, app, chunks[1]);

    // Error modal blocks everything else
    if let Some(error) = &app.error_message {
        draw_error_message(f, error);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.search_active { "Buscar" } else { "Comandos" };
    let border_color = if app.search_active { Color::Cyan } else { Color::Yellow };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(border_color)));
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1)
        .split(area)[0];

    if app.search_active {
        let search = Paragraph::new(format!(" /{}", app.search_query))
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(search, inner_area);
        f.set_cursor(
            inner_area.left() + app.search_query.chars().count() as u16 + 2,
            inner_area.top(),
        );
        return;
    }

    let mut help_text = match app.mode {
        AppMode::SongList => create_help_text(&[
            ("Enter", "Ver"),
            ("/", "Buscar"),
            ("c", "Categoría"),
            ("a", "Nueva"),
            ("e", "Editar"),
            ("s", "Setlist"),
            ("q", "Salir"),
        ]),
        AppMode::Viewer => create_help_text(&[
            ("+/-", "Transponer"),
            ("0", "Tono original"),
            ("s", "Setlist"),
            ("ESC", "Volver"),
        ]),
        AppMode::Editor => create_help_text(&[
            ("Tab", "Campo"),
            ("Ctrl+S", "Guardar"),
            ("Ctrl+F", "Anclar acordes"),
            ("ESC", "Cancelar"),
        ]),
        AppMode::Setlist => create_help_text(&[
            ("J/K", "Mover"),
            ("x", "Quitar"),
            ("Enter", "Ver"),
            ("ESC", "Volver"),
        ]),
    };

    if let Some(status) = &app.status_message {
        help_text.push(Span::styled(
            format!(" | {status}"),
            Style::default().fg(Color::Green),
        ));
    }

    let status_bar = Paragraph::new(Line::from(help_text)).style(Style::default().fg(Color::Gray));
    f.render_widget(status_bar, inner_area);
}

/// Build styled help text spans from key-description pairs for the command bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")]; // Start with padding

    for (i, (key, description)) in commands.iter().enumerate() {
        text.push(Span::styled(
            *key,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        text.push(Span::raw(format!(": {description}")));
        if i < commands.len() - 1 {
            text.push(Span::raw(" | "));
        }
    }

    text
}

/// Create a bordered block with a title, highlighted when focused.
pub fn create_titled_block(title: &str, is_focused: bool) -> Block<'_> {
    let title_style = if is_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn draw_error_message(f: &mut Frame, error: &str) {
    let area = centered_rect(60, 20, f.size());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(error.to_string())
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(text, area);
}

/// Compute a centered rect occupying the given percentages of `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
