//! Fuzzy search and category filtering over the song book.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use super::Song;
use crate::constants::search::{MAX_SEARCH_RESULTS, MIN_FUZZY_SCORE};

/// Indices of songs matching `query`, best matches first.
///
/// An empty query returns every song in book order (category-filtered when a
/// filter is set). Exact substring matches on title or author win outright;
/// everything else is scored with the fuzzy matcher and cut at a minimum
/// quality threshold.
pub fn search(songs: &[Song], query: &str, category: Option<&str>) -> Vec<usize> {
    let in_category = |song: &Song| category.is_none_or(|c| song.category == c);

    if query.trim().is_empty() {
        return songs
            .iter()
            .enumerate()
            .filter(|(_, song)| in_category(song))
            .map(|(i, _)| i)
            .collect();
    }

    let matcher = SkimMatcherV2::default();
    let query_lower = query.to_lowercase();

    let mut scored: Vec<(usize, i64)> = songs
        .iter()
        .enumerate()
        .filter(|(_, song)| in_category(song))
        .filter_map(|(i, song)| {
            let haystack = format!("{} {}", song.title, song.author).to_lowercase();
            if haystack.contains(&query_lower) {
                return Some((i, i64::MAX));
            }
            let score = matcher.fuzzy_match(&haystack, &query_lower)?;
            (score >= MIN_FUZZY_SCORE).then_some((i, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(MAX_SEARCH_RESULTS)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn song(title: &str, author: &str, category: &str) -> Song {
        Song {
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            lyrics: String::new(),
        }
    }

    fn sample_book() -> Vec<Song> {
        vec![
            song("Vine a Alabar", "Tradicional", "Alabanza"),
            song("Sublime Gracia", "John Newton", "Himno"),
            song("Cuan Grande es Él", "Carl Boberg", "Himno"),
        ]
    }

    #[test]
    fn empty_query_returns_book_order() {
        let songs = sample_book();
        assert_eq!(search(&songs, "", None), vec![0, 1, 2]);
        assert_eq!(search(&songs, "   ", None), vec![0, 1, 2]);
    }

    #[test]
    fn category_filter_applies_without_query() {
        let songs = sample_book();
        assert_eq!(search(&songs, "", Some("Himno")), vec![1, 2]);
        assert!(search(&songs, "", Some("Adoración")).is_empty());
    }

    #[test]
    fn substring_match_wins() {
        let songs = sample_book();
        let results = search(&songs, "gracia", None);
        assert_eq!(results.first(), Some(&1));
    }

    #[test]
    fn author_is_searchable() {
        let songs = sample_book();
        let results = search(&songs, "newton", None);
        assert_eq!(results, vec![1]);
    }

    #[test]
    fn query_and_category_compose() {
        let songs = sample_book();
        assert!(search(&songs, "gracia", Some("Alabanza")).is_empty());
        assert_eq!(search(&songs, "gracia", Some("Himno")), vec![1]);
    }

    #[test]
    fn nonsense_query_matches_nothing() {
        let songs = sample_book();
        assert!(search(&songs, "zzqqxx", None).is_empty());
    }
}
