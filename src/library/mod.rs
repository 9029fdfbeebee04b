//! Song book persistence over a flat CSV file.
//!
//! The on-disk format keeps the Spanish column headers of the original
//! `cancionero.csv` files (`Título`, `Autor`, `Categoría`, `Letra`) so
//! existing song books load unchanged. A missing or empty file is a valid
//! empty song book, not an error.

pub mod search;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One song record as stored in the song book CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title.
    #[serde(rename = "Título")]
    pub title: String,
    /// Author or composer.
    #[serde(rename = "Autor")]
    pub author: String,
    /// Category used for filtering (e.g. "Adoración", "Alabanza").
    #[serde(rename = "Categoría")]
    pub category: String,
    /// Lyrics with embedded chord symbols, newline-delimited.
    #[serde(rename = "Letra")]
    pub lyrics: String,
}

/// The song book: an in-memory list of songs backed by one CSV file.
#[derive(Debug, Default)]
pub struct Library {
    path: PathBuf,
    songs: Vec<Song>,
}

impl Library {
    /// Load the song book at `path`.
    ///
    /// A missing or zero-length file yields an empty song book.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !file_has_content(&path)? {
            tracing::info!("song book {} not found or empty, starting fresh", path.display());
            return Ok(Self { path, songs: Vec::new() });
        }

        let mut reader = csv::Reader::from_path(&path)?;
        let mut songs = Vec::new();
        for record in reader.deserialize() {
            songs.push(record?);
        }
        tracing::info!("loaded {} songs from {}", songs.len(), path.display());
        Ok(Self { path, songs })
    }

    /// Write the song book back to its CSV file.
    pub fn save(&self) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for song in &self.songs {
            writer.serialize(song)?;
        }
        writer.flush()?;
        tracing::info!("saved {} songs to {}", self.songs.len(), self.path.display());
        Ok(())
    }

    /// All songs in book order.
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Number of songs in the book.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the book has no songs.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Song at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// Append a song to the book.
    pub fn add(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Replace the song at `index`. Returns false when out of range.
    pub fn update(&mut self, index: usize, song: Song) -> bool {
        let Some(slot) = self.songs.get_mut(index) else {
            return false;
        };
        *slot = song;
        true
    }

    /// Remove and return the song at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Song> {
        (index < self.songs.len()).then(|| self.songs.remove(index))
    }

    /// Index of the first song with the given title.
    pub fn find_by_title(&self, title: &str) -> Option<usize> {
        self.songs.iter().position(|s| s.title == title)
    }

    /// Sorted, de-duplicated list of non-empty categories in the book.
    pub fn categories(&self) -> Vec<String> {
        let mut cats: Vec<String> = self
            .songs
            .iter()
            .map(|s| s.category.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        cats.sort();
        cats.dedup();
        cats
    }
}

/// Whether the file exists and has at least one byte of content.
fn file_has_content(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let meta = fs_err::metadata(path)?;
    Ok(meta.len() > 0)
}
