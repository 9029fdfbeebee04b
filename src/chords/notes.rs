//! Pitch-class tables and the transposition cipher.
//!
//! Two parallel naming systems are supported: Latin (Do, Re, Mi, ...) and
//! Letter (C, D, E, ...). `LATIN[i]` and `LETTER[i]` denote the same pitch
//! class for every index, so transposition is addition mod 12 on the index.
//! A root transposes within its own naming system; cross-system conversion
//! is deliberately not offered.

/// Number of pitch classes in the chromatic scale.
pub const SEMITONES: usize = 12;

/// Latin note spellings, indexed by pitch class (0 = Do).
pub const LATIN: [&str; SEMITONES] = [
    "Do", "Do#", "Re", "Re#", "Mi", "Fa", "Fa#", "Sol", "Sol#", "La", "La#", "Si",
];

/// Letter note spellings, indexed by pitch class (0 = C).
pub const LETTER: [&str; SEMITONES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Naming system a chord root was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Do-Re-Mi names.
    Latin,
    /// A-B-C names.
    Letter,
}

impl Notation {
    /// The spelling table for this naming system.
    pub const fn table(self) -> &'static [&'static str; SEMITONES] {
        match self {
            Self::Latin => &LATIN,
            Self::Letter => &LETTER,
        }
    }
}

/// Map a flat Letter spelling to its sharp equivalent for table lookup.
/// Latin roots are already in the canonical sharp-or-natural spelling.
fn sharpen(root: &str) -> &str {
    match root {
        "Db" => "C#",
        "Eb" => "D#",
        "Gb" => "F#",
        "Ab" => "G#",
        "Bb" => "A#",
        other => other,
    }
}

/// Locate a root spelling in the note tables.
///
/// Flat Letter spellings are normalized to sharps first. Returns the naming
/// system the root belongs to and its pitch-class index, or `None` for
/// spellings in neither table.
pub fn lookup(root: &str) -> Option<(Notation, usize)> {
    let canonical = sharpen(root);
    if let Some(i) = LATIN.iter().position(|&n| n == canonical) {
        return Some((Notation::Latin, i));
    }
    LETTER
        .iter()
        .position(|&n| n == canonical)
        .map(|i| (Notation::Letter, i))
}

/// Shift a pitch-class index by `semitones`, wrapping mod 12.
///
/// `semitones` is reduced mod 12 before the addition, so any `i32` shift is
/// valid input; `rem_euclid` keeps negative shifts wrapping correctly.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn shift_index(index: usize, semitones: i32) -> usize {
    (index + semitones.rem_euclid(SEMITONES as i32) as usize) % SEMITONES
}

/// Transpose a root spelling by `semitones`, staying in its naming system.
///
/// Returns `None` when the spelling is in neither table.
pub fn transpose_root(root: &str, semitones: i32) -> Option<&'static str> {
    let (notation, index) = lookup(root)?;
    Some(notation.table()[shift_index(index, semitones)])
}
