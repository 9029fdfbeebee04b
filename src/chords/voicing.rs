//! Chord voicings as pitch classes, for keyboard highlighting.
//!
//! Maps a recognized chord to the set of pitch classes it sounds
//! (0 = Do/C), derived from the root index plus an interval table per
//! quality suffix.

use super::notes;
use super::symbol::ChordSymbol;

/// Semitone intervals above the root for a quality suffix.
///
/// Unknown suffixes fall back to the major triad.
fn intervals(suffix: &str) -> &'static [u8] {
    match suffix {
        "m" | "min" => &[0, 3, 7],
        "7" => &[0, 4, 7, 10],
        "maj7" | "M7" => &[0, 4, 7, 11],
        "m7" | "min7" => &[0, 3, 7, 10],
        "dim" => &[0, 3, 6],
        "aug" => &[0, 4, 8],
        "sus4" => &[0, 5, 7],
        "sus2" => &[0, 2, 7],
        "6" => &[0, 4, 7, 9],
        "m6" => &[0, 3, 7, 9],
        "9" => &[0, 4, 7, 10, 2],
        "maj9" | "M9" => &[0, 4, 7, 11, 2],
        "m9" | "min9" => &[0, 3, 7, 10, 2],
        "add9" => &[0, 4, 7, 2],
        _ => &[0, 4, 7],
    }
}

/// Pitch classes sounded by a chord symbol, in voicing order.
///
/// Returns `None` when the root resolves in neither note table.
#[allow(clippy::cast_possible_truncation)]
pub fn pitch_classes(sym: &ChordSymbol) -> Option<Vec<u8>> {
    let (_, root) = notes::lookup(&sym.root)?;
    let root = root as u8;
    Some(
        intervals(&sym.suffix)
            .iter()
            .map(|&i| (root + i) % notes::SEMITONES as u8)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn classes(token: &str) -> Vec<u8> {
        let sym = ChordSymbol::parse(token).expect("chord-shaped");
        pitch_classes(&sym).expect("known root")
    }

    #[test]
    fn major_and_minor_triads() {
        assert_eq!(classes("Do"), vec![0, 4, 7]);
        assert_eq!(classes("Lam"), vec![9, 0, 4]);
        assert_eq!(classes("Rem"), vec![2, 5, 9]);
    }

    #[test]
    fn sevenths_wrap_past_the_octave() {
        assert_eq!(classes("Do7"), vec![0, 4, 7, 10]);
        assert_eq!(classes("Re7"), vec![2, 6, 9, 0]);
        assert_eq!(classes("Fa#m7"), vec![6, 9, 1, 4]);
        assert_eq!(classes("Sol#m7"), vec![8, 11, 3, 6]);
    }

    #[test]
    fn letter_roots_share_the_latin_pitch_classes() {
        assert_eq!(classes("C"), classes("Do"));
        assert_eq!(classes("Am"), classes("Lam"));
        assert_eq!(classes("Bb7"), classes("La#7"));
    }

    #[test]
    fn suspended_chords_replace_the_third() {
        assert_eq!(classes("Dosus4"), vec![0, 5, 7]);
        assert_eq!(classes("Dosus2"), vec![0, 2, 7]);
    }

    #[test]
    fn unknown_suffix_falls_back_to_major() {
        assert_eq!(classes("Do4347"), classes("Do"));
    }
}
