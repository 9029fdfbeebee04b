//! Chord symbol recognition and transposition.
//!
//! A token is chord-shaped when it is a note root (Latin or Letter, with an
//! optional accidental) followed entirely by suffix atoms from the chord
//! vocabulary. Whether a chord-shaped token actually *is* a chord can depend
//! on the enclosing line: "La", "Si" and bare "A" collide with common short
//! words, so with no suffix they only count as chords on a chord line.

use std::sync::LazyLock;

use regex::Regex;

use super::notes;

/// Full-token chord pattern: root, optional accidental, then zero or more
/// suffix atoms. Anchored so accented lyric words never partially match.
#[allow(clippy::expect_used)]
static RE_CHORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Do|Re|Mi|Fa|Sol|La|Si|[A-G])([#b]?)((?:maj|min|dim|aug|sus|add|[mM0-9])*)$")
        .expect("valid regex: RE_CHORD")
});

/// A recognized chord token split into root and verbatim suffix.
///
/// The suffix (quality/extension such as `m`, `7`, `sus4`) is carried
/// opaquely and never altered; only the root is rewritten on transposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSymbol {
    /// Root spelling exactly as written, accidental included (e.g. "Fa#", "Bb").
    pub root: String,
    /// Quality/extension suffix exactly as written (may be empty).
    pub suffix: String,
}

impl ChordSymbol {
    /// Try to split a token into root and suffix.
    ///
    /// Returns `None` for tokens that are not chord-shaped at all; those are
    /// ordinary lyric text.
    pub fn parse(token: &str) -> Option<Self> {
        let caps = RE_CHORD.captures(token)?;
        Some(Self {
            root: format!("{}{}", &caps[1], &caps[2]),
            suffix: caps[3].to_string(),
        })
    }

    /// Whether this symbol collides with a common short word and needs line
    /// context to resolve: empty suffix and a root of "La", "Si" or bare "A".
    pub fn is_ambiguous(&self) -> bool {
        self.suffix.is_empty() && matches!(self.root.as_str(), "La" | "Si" | "A")
    }

    /// True when the root resolves to an entry in one of the note tables.
    pub fn has_known_root(&self) -> bool {
        notes::lookup(&self.root).is_some()
    }

    /// Render this chord with the root shifted by `semitones`.
    ///
    /// A shift of zero (mod 12) keeps the original spelling verbatim, so flat
    /// roots like "Bb" are not rewritten to sharps on a no-op transpose. The
    /// root must resolve in a note table either way; `None` means the symbol
    /// should pass through unmarked.
    #[allow(clippy::cast_possible_wrap)]
    pub fn transposed(&self, semitones: i32) -> Option<String> {
        if semitones.rem_euclid(notes::SEMITONES as i32) == 0 {
            self.has_known_root()
                .then(|| format!("{}{}", self.root, self.suffix))
        } else {
            notes::transpose_root(&self.root, semitones)
                .map(|root| format!("{root}{}", self.suffix))
        }
    }
}

/// Resolve a token to a chord, applying the ambiguity policy for its line.
///
/// Returns `None` when the token is lyric text: not chord-shaped, ambiguous
/// outside a chord line, or chord-shaped with a root in neither note table.
pub fn classify(token: &str, on_chord_line: bool) -> Option<ChordSymbol> {
    let sym = ChordSymbol::parse(token)?;
    if sym.is_ambiguous() && !on_chord_line {
        return None;
    }
    if !sym.has_known_root() {
        // Chord-shaped but unspellable (e.g. a Latin flat like "Lab").
        tracing::debug!("token {token:?} matched the chord pattern but has no table entry");
        return None;
    }
    Some(sym)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn parts(token: &str) -> (String, String) {
        let sym = ChordSymbol::parse(token).expect("chord-shaped");
        (sym.root, sym.suffix)
    }

    #[test]
    fn parse_splits_root_and_suffix() {
        assert_eq!(parts("Fa#m7"), ("Fa#".to_string(), "m7".to_string()));
        assert_eq!(parts("Dm7"), ("D".to_string(), "m7".to_string()));
        assert_eq!(parts("Bb7"), ("Bb".to_string(), "7".to_string()));
        assert_eq!(parts("Solsus4"), ("Sol".to_string(), "sus4".to_string()));
        assert_eq!(parts("MiM"), ("Mi".to_string(), "M".to_string()));
        assert_eq!(parts("Cmaj7"), ("C".to_string(), "maj7".to_string()));
        assert_eq!(parts("Laadd9"), ("La".to_string(), "add9".to_string()));
    }

    #[test]
    fn parse_rejects_lyric_words() {
        assert!(ChordSymbol::parse("casa").is_none());
        assert!(ChordSymbol::parse("Solo").is_none());
        assert!(ChordSymbol::parse("Dos").is_none());
        assert!(ChordSymbol::parse("Amar").is_none());
        assert!(ChordSymbol::parse("tía").is_none());
        assert!(ChordSymbol::parse("la").is_none()); // lowercase never matches
        assert!(ChordSymbol::parse("").is_none());
    }

    #[test]
    fn ambiguity_is_limited_to_bare_collision_roots() {
        assert!(ChordSymbol::parse("La").unwrap().is_ambiguous());
        assert!(ChordSymbol::parse("Si").unwrap().is_ambiguous());
        assert!(ChordSymbol::parse("A").unwrap().is_ambiguous());
        // A suffix disambiguates.
        assert!(!ChordSymbol::parse("Lam").unwrap().is_ambiguous());
        assert!(!ChordSymbol::parse("A7").unwrap().is_ambiguous());
        // Other roots are never ambiguous.
        assert!(!ChordSymbol::parse("Do").unwrap().is_ambiguous());
        assert!(!ChordSymbol::parse("Mi").unwrap().is_ambiguous());
        assert!(!ChordSymbol::parse("C").unwrap().is_ambiguous());
    }

    #[test]
    fn classify_applies_line_context() {
        assert!(classify("La", false).is_none());
        assert!(classify("La", true).is_some());
        assert!(classify("Lam", false).is_some());
        assert!(classify("Sol", false).is_some());
    }

    #[test]
    fn classify_drops_unspellable_roots() {
        // "Lab" parses as root "La" + accidental "b" but resolves in no table.
        assert!(classify("Lab", true).is_none());
    }

    #[test]
    fn transpose_rewrites_only_the_root() {
        let sym = ChordSymbol::parse("Fa#m7").unwrap();
        assert_eq!(sym.transposed(1).unwrap(), "Solm7");

        let sym = ChordSymbol::parse("Lam").unwrap();
        assert_eq!(sym.transposed(2).unwrap(), "Sim");
    }

    #[test]
    fn zero_shift_preserves_flat_spelling() {
        let sym = ChordSymbol::parse("Bb7").unwrap();
        assert_eq!(sym.transposed(0).unwrap(), "Bb7");
        assert_eq!(sym.transposed(12).unwrap(), "Bb7");
        // A real shift normalizes to the sharp table.
        assert_eq!(sym.transposed(1).unwrap(), "B7");
    }

    #[test]
    fn transpose_handles_negative_shifts() {
        let sym = ChordSymbol::parse("Eb").unwrap();
        assert_eq!(sym.transposed(-3).unwrap(), "C");
    }
}
