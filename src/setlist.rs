//! Setlist bookkeeping for a service or rehearsal.
//!
//! A setlist is an ordered list of song titles kept for the current session;
//! it is not persisted with the song book.

/// An ordered list of song titles.
#[derive(Debug, Default, Clone)]
pub struct Setlist {
    titles: Vec<String>,
}

impl Setlist {
    /// Titles in performance order.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Number of songs in the setlist.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the setlist is empty.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Whether a title is already on the setlist.
    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    /// Add a title if absent, remove it if present. Returns true when the
    /// title is on the setlist afterwards.
    pub fn toggle(&mut self, title: &str) -> bool {
        if let Some(pos) = self.titles.iter().position(|t| t == title) {
            self.titles.remove(pos);
            false
        } else {
            self.titles.push(title.to_string());
            true
        }
    }

    /// Remove the entry at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.titles.len()).then(|| self.titles.remove(index))
    }

    /// Move the entry at `index` one position earlier. Returns the new index.
    pub fn move_up(&mut self, index: usize) -> usize {
        if index > 0 && index < self.titles.len() {
            self.titles.swap(index, index - 1);
            index - 1
        } else {
            index
        }
    }

    /// Move the entry at `index` one position later. Returns the new index.
    pub fn move_down(&mut self, index: usize) -> usize {
        if index + 1 < self.titles.len() {
            self.titles.swap(index, index + 1);
            index + 1
        } else {
            index
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.titles.clear();
    }
}
