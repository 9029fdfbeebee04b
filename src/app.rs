//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use crate::chords::anchored;
use crate::config::Config;
use crate::error::Result;
use crate::library::{search, Library, Song};
use crate::setlist::Setlist;

/// Top-level application screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Browse/search the song book.
    #[default]
    SongList,
    /// View one song with chords highlighted.
    Viewer,
    /// Add or edit a song.
    Editor,
    /// Review and reorder the setlist.
    Setlist,
}

/// Which editor field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    /// Song title input.
    #[default]
    Title,
    /// Author input.
    Author,
    /// Category input.
    Category,
    /// Multiline lyrics buffer.
    Lyrics,
}

impl EditorField {
    /// Human-readable field label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "Título",
            Self::Author => "Autor",
            Self::Category => "Categoría",
            Self::Lyrics => "Letra",
        }
    }

    /// Cycle to the next field (Tab order).
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Category,
            Self::Category => Self::Lyrics,
            Self::Lyrics => Self::Title,
        }
    }
}

/// Editor buffer for adding or editing a song.
#[derive(Debug, Default, Clone)]
pub struct EditorState {
    /// Title input contents.
    pub title: String,
    /// Author input contents.
    pub author: String,
    /// Category input contents.
    pub category: String,
    /// Lyrics buffer, one entry per line.
    pub lyrics: Vec<String>,
    /// Focused field.
    pub field: EditorField,
    /// Cursor line within the lyrics buffer.
    pub cursor_line: usize,
    /// Library index being edited; `None` when adding a new song.
    pub editing: Option<usize>,
}

impl EditorState {
    /// Start editing an existing song.
    fn from_song(song: &Song, index: usize) -> Self {
        Self {
            title: song.title.clone(),
            author: song.author.clone(),
            category: song.category.clone(),
            lyrics: song.lyrics.split('\n').map(String::from).collect(),
            field: EditorField::Title,
            cursor_line: 0,
            editing: Some(index),
        }
    }

    /// Build the song record currently described by the buffer.
    fn to_song(&self) -> Song {
        Song {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            category: self.category.trim().to_string(),
            lyrics: self.lyrics.join("\n"),
        }
    }
}

/// Top-level application state.
///
/// The default value is an empty song book with default configuration.
#[derive(Default)]
pub struct App {
    /// Loaded configuration.
    pub config: Config,
    /// The song book.
    pub library: Library,
    /// Current session's setlist.
    pub setlist: Setlist,
    /// Active screen.
    pub mode: AppMode,
    /// Selection state for the song list.
    pub list_state: ListState,
    /// Selection state for the setlist screen.
    pub setlist_state: ListState,
    /// Library indices currently visible (after search/filter).
    pub visible: Vec<usize>,
    /// Whether the search input is capturing keys.
    pub search_active: bool,
    /// Current search query.
    pub search_query: String,
    /// Active category filter, if any.
    pub category_filter: Option<String>,
    /// Library index of the song open in the viewer.
    pub viewing: Option<usize>,
    /// Current transposition in semitones.
    pub transpose: i32,
    /// Viewer scroll offset in lines.
    pub scroll: u16,
    /// Editor buffer.
    pub editor: EditorState,
    /// Transient status message shown in the command bar.
    pub status_message: Option<String>,
    /// Error message shown as a blocking modal.
    pub error_message: Option<String>,
    /// Pending delete confirmation (library index).
    pending_delete: Option<usize>,
    should_quit: bool,
}

impl App {
    /// Load configuration and the song book, and build the initial state.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let library = Library::load(&config.songbook_file)?;
        let mut app = Self { config, library, ..Self::default() };
        app.refresh_visible();
        Ok(app)
    }

    /// Whether the main loop should exit.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Recompute the visible song indices from the query and filter.
    pub fn refresh_visible(&mut self) {
        self.visible = search::search(
            self.library.songs(),
            &self.search_query,
            self.category_filter.as_deref(),
        );
        let selected = self.list_state.selected().unwrap_or(0);
        if self.visible.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(selected.min(self.visible.len() - 1)));
        }
    }

    /// Library index of the song selected in the list, if any.
    pub fn selected_song(&self) -> Option<usize> {
        self.list_state
            .selected()
            .and_then(|i| self.visible.get(i).copied())
    }

    /// Handle one key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Blocking modals consume the next key.
        if self.error_message.take().is_some() {
            return;
        }
        self.status_message = None;

        if self.search_active {
            self.handle_search_key(key);
            return;
        }

        match self.mode {
            AppMode::SongList => self.handle_song_list_key(key),
            AppMode::Viewer => self.handle_viewer_key(key),
            AppMode::Editor => self.handle_editor_key(key),
            AppMode::Setlist => self.handle_setlist_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search_active = false;
                self.search_query.clear();
                self.refresh_visible();
            }
            KeyCode::Enter => self.search_active = false,
            KeyCode::Backspace => {
                self.search_query.pop();
                self.refresh_visible();
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.refresh_visible();
            }
            _ => {}
        }
    }

    fn handle_song_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.search_active = true,
            KeyCode::Esc => {
                self.search_query.clear();
                self.category_filter = None;
                self.refresh_visible();
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_offset(1),
            KeyCode::Up | KeyCode::Char('k') => self.select_offset(-1),
            KeyCode::Enter => {
                if let Some(index) = self.selected_song() {
                    self.viewing = Some(index);
                    self.scroll = 0;
                    self.mode = AppMode::Viewer;
                }
            }
            KeyCode::Char('a') => {
                self.editor = EditorState::default();
                self.editor.lyrics.push(String::new());
                self.mode = AppMode::Editor;
            }
            KeyCode::Char('e') => {
                if let Some(index) = self.selected_song() {
                    if let Some(song) = self.library.get(index) {
                        self.editor = EditorState::from_song(song, index);
                        self.mode = AppMode::Editor;
                    }
                }
            }
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('s') => self.toggle_setlist_for_selected(),
            KeyCode::Char('S') => self.mode = AppMode::Setlist,
            KeyCode::Char('c') => self.cycle_category_filter(),
            _ => {}
        }
        if key.code != KeyCode::Char('d') {
            self.pending_delete = None;
        }
    }

    fn handle_viewer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.mode = AppMode::SongList;
                self.transpose = 0;
            }
            KeyCode::Char('+' | '=') => self.shift_transpose(1),
            KeyCode::Char('-') => self.shift_transpose(-1),
            KeyCode::Char('0') => {
                self.transpose = 0;
                self.status_message = Some("Tono original".to_string());
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Char('s') => {
                if let Some(index) = self.viewing {
                    self.toggle_setlist_song(index);
                }
            }
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.save_editor(),
                KeyCode::Char('f') => self.merge_editor_chord_lines(),
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.mode = AppMode::SongList,
            KeyCode::Tab => self.editor.field = self.editor.field.next(),
            KeyCode::Enter => {
                if self.editor.field == EditorField::Lyrics {
                    let line = (self.editor.cursor_line + 1).min(self.editor.lyrics.len());
                    self.editor.lyrics.insert(line, String::new());
                    self.editor.cursor_line = line;
                } else {
                    self.editor.field = self.editor.field.next();
                }
            }
            KeyCode::Up => {
                if self.editor.field == EditorField::Lyrics {
                    self.editor.cursor_line = self.editor.cursor_line.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.editor.field == EditorField::Lyrics {
                    let last = self.editor.lyrics.len().saturating_sub(1);
                    self.editor.cursor_line = (self.editor.cursor_line + 1).min(last);
                }
            }
            KeyCode::Backspace => self.editor_backspace(),
            KeyCode::Char(c) => self.editor_insert(c),
            _ => {}
        }
    }

    fn handle_setlist_key(&mut self, key: KeyEvent) {
        let selected = self.setlist_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.mode = AppMode::SongList,
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.setlist.is_empty() {
                    let next = (selected + 1).min(self.setlist.len() - 1);
                    self.setlist_state.select(Some(next));
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.setlist_state.select(Some(selected.saturating_sub(1)));
            }
            KeyCode::Char('J') => {
                let moved = self.setlist.move_down(selected);
                self.setlist_state.select(Some(moved));
            }
            KeyCode::Char('K') => {
                let moved = self.setlist.move_up(selected);
                self.setlist_state.select(Some(moved));
            }
            KeyCode::Char('x') => {
                self.setlist.remove(selected);
                if self.setlist.is_empty() {
                    self.setlist_state.select(None);
                } else {
                    self.setlist_state.select(Some(selected.min(self.setlist.len() - 1)));
                }
            }
            KeyCode::Enter => {
                let title = self.setlist.titles().get(selected).cloned();
                if let Some(index) = title.and_then(|t| self.library.find_by_title(&t)) {
                    self.viewing = Some(index);
                    self.scroll = 0;
                    self.mode = AppMode::Viewer;
                }
            }
            _ => {}
        }
    }

    fn select_offset(&mut self, delta: i64) {
        if self.visible.is_empty() {
            return;
        }
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let next = (self.list_state.selected().unwrap_or(0) as i64 + delta)
            .clamp(0, self.visible.len() as i64 - 1) as usize;
        self.list_state.select(Some(next));
    }

    fn shift_transpose(&mut self, delta: i32) {
        self.transpose = (self.transpose + delta).rem_euclid(12);
        self.status_message = Some(format!("Transposición: {:+} semitonos", self.transpose));
    }

    fn cycle_category_filter(&mut self) {
        let categories = self.library.categories();
        self.category_filter = self.category_filter.as_ref().map_or_else(
            || categories.first().cloned(),
            |current| {
                categories
                    .iter()
                    .position(|c| c == current)
                    .and_then(|i| categories.get(i + 1))
                    .cloned()
            },
        );
        self.refresh_visible();
    }

    fn toggle_setlist_for_selected(&mut self) {
        if let Some(index) = self.selected_song() {
            self.toggle_setlist_song(index);
        }
    }

    /// Toggle the song at `index` on the setlist and report what happened.
    fn toggle_setlist_song(&mut self, index: usize) {
        if let Some(song) = self.library.get(index) {
            let title = song.title.clone();
            let added = self.setlist.toggle(&title);
            self.status_message = Some(if added {
                format!("\"{title}\" añadida al setlist")
            } else {
                format!("\"{title}\" quitada del setlist")
            });
        }
    }

    fn delete_selected(&mut self) {
        let Some(index) = self.selected_song() else { return };
        if self.pending_delete == Some(index) {
            self.pending_delete = None;
            if let Some(song) = self.library.remove(index) {
                self.status_message = Some(format!("\"{}\" eliminada", song.title));
                self.save_library();
                self.refresh_visible();
            }
        } else {
            self.pending_delete = Some(index);
            self.status_message = Some("Pulsa d otra vez para eliminar".to_string());
        }
    }

    fn editor_insert(&mut self, c: char) {
        match self.editor.field {
            EditorField::Title => self.editor.title.push(c),
            EditorField::Author => self.editor.author.push(c),
            EditorField::Category => self.editor.category.push(c),
            EditorField::Lyrics => {
                if self.editor.lyrics.is_empty() {
                    self.editor.lyrics.push(String::new());
                }
                let line = self.editor.cursor_line.min(self.editor.lyrics.len() - 1);
                if let Some(text) = self.editor.lyrics.get_mut(line) {
                    text.push(c);
                }
            }
        }
    }

    fn editor_backspace(&mut self) {
        match self.editor.field {
            EditorField::Title => {
                self.editor.title.pop();
            }
            EditorField::Author => {
                self.editor.author.pop();
            }
            EditorField::Category => {
                self.editor.category.pop();
            }
            EditorField::Lyrics => {
                let line = self.editor.cursor_line;
                let popped = self.editor.lyrics.get_mut(line).and_then(String::pop);
                if popped.is_none() && line > 0 {
                    self.editor.lyrics.remove(line);
                    self.editor.cursor_line = line - 1;
                }
            }
        }
    }

    fn save_editor(&mut self) {
        let song = self.editor.to_song();
        if song.title.is_empty() {
            self.error_message = Some("La canción necesita un título".to_string());
            return;
        }
        match self.editor.editing {
            Some(index) => {
                self.library.update(index, song);
            }
            None => self.library.add(song),
        }
        self.save_library();
        self.refresh_visible();
        self.mode = AppMode::SongList;
    }

    /// Convert chord lines above lyric lines in the editor buffer into the
    /// anchored `[Chord]` format.
    fn merge_editor_chord_lines(&mut self) {
        let merged = anchored::merge_chord_lines(&self.editor.lyrics.join("\n"));
        self.editor.lyrics = merged.split('\n').map(String::from).collect();
        let last = self.editor.lyrics.len().saturating_sub(1);
        self.editor.cursor_line = self.editor.cursor_line.min(last);
        self.status_message = Some("Acordes anclados a la letra".to_string());
    }

    fn save_library(&mut self) {
        if let Err(e) = self.library.save() {
            tracing::error!("failed to save song book: {e}");
            self.error_message = Some(format!("No se pudo guardar el cancionero: {e}"));
        } else if self.status_message.is_none() {
            self.status_message = Some("Cancionero guardado".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crossterm::event::KeyEvent;

    fn app_with_songs(titles: &[&str]) -> App {
        let mut library = Library::default();
        for title in titles {
            library.add(Song {
                title: (*title).to_string(),
                author: String::new(),
                category: String::new(),
                lyrics: "Do   Sol\nletra".to_string(),
            });
        }
        let mut app = App { library, ..App::default() };
        app.refresh_visible();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn navigation_clamps_to_the_list() {
        let mut app = app_with_songs(&["Una", "Dos"]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.list_state.selected(), Some(1));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn enter_opens_the_viewer() {
        let mut app = app_with_songs(&["Una"]);
        app.list_state.select(Some(0));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Viewer);
        assert_eq!(app.viewing, Some(0));
    }

    #[test]
    fn transpose_keys_wrap_mod_twelve() {
        let mut app = app_with_songs(&["Una"]);
        app.mode = AppMode::Viewer;
        app.viewing = Some(0);
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.transpose, 11);
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.transpose, 1);
        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.transpose, 0);
    }

    #[test]
    fn search_narrows_the_visible_list() {
        let mut app = app_with_songs(&["Sublime Gracia", "Vine a Alabar"]);
        press(&mut app, KeyCode::Char('/'));
        for c in "gracia".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.visible, vec![0]);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.visible.len(), 2);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = app_with_songs(&["Una"]);
        app.list_state.select(Some(0));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.library.len(), 1);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.library.len(), 0);
    }

    #[test]
    fn setlist_toggle_from_the_viewer() {
        let mut app = app_with_songs(&["Una"]);
        app.mode = AppMode::Viewer;
        app.viewing = Some(0);
        press(&mut app, KeyCode::Char('s'));
        assert!(app.setlist.contains("Una"));
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.setlist.contains("Una"));
    }

    #[test]
    fn setlist_toggle_from_the_list() {
        let mut app = app_with_songs(&["Una"]);
        app.list_state.select(Some(0));
        press(&mut app, KeyCode::Char('s'));
        assert!(app.setlist.contains("Una"));
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.setlist.contains("Una"));
    }

    #[test]
    fn editor_merges_chord_lines_on_demand() {
        let mut app = app_with_songs(&[]);
        app.mode = AppMode::Editor;
        app.editor = EditorState::default();
        app.editor.lyrics = vec!["Do       Sol".to_string(), "Canta al Señor".to_string()];
        app.editor.field = EditorField::Lyrics;
        app.handle_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL));
        assert_eq!(app.editor.lyrics, vec!["[Do]Canta al [Sol]Señor".to_string()]);
    }
}
