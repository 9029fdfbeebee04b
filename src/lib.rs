//! `Cancionero` - terminal song book manager for worship musicians.
//!
//! Stores song lyrics with embedded chord symbols in a flat CSV file and
//! provides browsing, fuzzy search, setlists, semitone transposition and a
//! viewer that highlights chords above or inline with the lyrics.

// Re-export public modules for use in integration tests and as a library
pub mod app;
pub mod chords;
pub mod config;
pub mod constants;
pub mod error;
pub mod library;
pub mod setlist;
pub mod ui;
