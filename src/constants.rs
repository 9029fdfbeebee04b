//! Application constants.
//!
//! Centralizes tunable values and magic numbers for better maintainability.

/// Chord engine tunables.
pub mod chords {
    /// Lines with at most this many characters are treated as chord lines.
    pub const CHORD_LINE_MAX_CHARS: usize = 5;

    /// Space-to-character ratio above which a line reads as a chord line.
    pub const CHORD_LINE_SPACE_RATIO: f32 = 0.2;

    /// Rendered in place of a blank line so line counts are preserved.
    pub const BLANK_LINE_PLACEHOLDER: char = '\u{a0}';
}

/// Search tunables.
pub mod search {
    /// Minimum fuzzy-match score for a song to appear in results.
    pub const MIN_FUZZY_SCORE: i64 = 50;

    /// Maximum number of search results shown in the song list.
    pub const MAX_SEARCH_RESULTS: usize = 50;
}

/// UI layout constants.
pub mod ui {
    /// Width of the song list pane as a percentage of the screen.
    pub const LIST_PANE_PERCENT: u16 = 34;

    /// Height of the command/status bar at the bottom of the screen.
    pub const COMMAND_BAR_HEIGHT: u16 = 3;
}
