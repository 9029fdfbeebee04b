//! Chord annotation engine.
//!
//! Scans a block of lyric text interleaved with chord symbols, decides which
//! tokens are chords (as opposed to words that collide with note names, such
//! as "La" or "Si"), optionally transposes each chord by a number of
//! semitones, and re-renders the text with chords wrapped in caller-supplied
//! markup. Inter-token whitespace is preserved byte-for-byte so chords stay
//! vertically aligned with the syllables they annotate.
//!
//! The engine is pure and synchronous: no IO, no shared state, safe to call
//! from any number of threads.

pub mod anchored;
pub mod notes;
pub mod scanner;
pub mod symbol;
pub mod voicing;

pub use notes::{Notation, LATIN, LETTER, SEMITONES};
pub use scanner::{classify_line, tokenize, LineKind, Segment};
pub use symbol::{classify, ChordSymbol};

use crate::constants::chords::BLANK_LINE_PLACEHOLDER;

/// Annotate `text`, transposing recognized chords by `semitones` and
/// wrapping each one with `markup`.
///
/// Shifts outside [-11, 11] are reduced mod 12; a shift of zero still marks
/// chords but leaves their spelling untouched. Blank lines map 1:1 to a
/// non-breaking-space placeholder so the output line count always equals the
/// input line count. Tokens not recognized as chords, and all whitespace
/// between tokens, pass through character-for-character.
pub fn annotate<F>(text: &str, semitones: i32, markup: F) -> String
where
    F: Fn(&str) -> String,
{
    if text.is_empty() {
        return String::new();
    }
    text.split('\n')
        .map(|line| annotate_line(line, semitones, &markup))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Annotate a single line. See [`annotate`] for the contract.
pub fn annotate_line<F>(line: &str, semitones: i32, markup: &F) -> String
where
    F: Fn(&str) -> String,
{
    let kind = scanner::classify_line(line);
    if kind == LineKind::Blank {
        return BLANK_LINE_PLACEHOLDER.to_string();
    }
    let on_chord_line = kind == LineKind::Chord;
    let (segments, trailing) = scanner::tokenize(line);
    let mut out = String::with_capacity(line.len());
    for segment in segments {
        out.push_str(segment.gap);
        let rendered = symbol::classify(segment.token, on_chord_line)
            .and_then(|sym| sym.transposed(semitones))
            .map_or_else(|| segment.token.to_string(), |chord| markup(&chord));
        out.push_str(&rendered);
    }
    out.push_str(trailing);
    out
}
