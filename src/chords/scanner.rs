//! Line classification and whitespace-preserving tokenization.
//!
//! Annotation runs in two explicit phases: this module splits a line into
//! (gap, token) segments without losing a single byte of whitespace, and
//! [`super::symbol`] classifies each token. Keeping the phases separate makes
//! the disambiguation policy testable independent of line splitting.

use crate::constants::chords::{CHORD_LINE_MAX_CHARS, CHORD_LINE_SPACE_RATIO};

/// How a line participates in annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only; rendered as a placeholder, never tokenized.
    Blank,
    /// Carries chord symbols positioned above lyrics; ambiguous tokens
    /// resolve toward the chord interpretation.
    Chord,
    /// Any other non-blank line; tokens are classified individually.
    Lyric,
}

/// Classify one line of input text.
pub fn classify_line(line: &str) -> LineKind {
    if line.trim().is_empty() {
        LineKind::Blank
    } else if is_chord_line(line) {
        LineKind::Chord
    } else {
        LineKind::Lyric
    }
}

/// Chord-line heuristic: very short lines, or space-dense lines with at
/// least one columnar alignment run (two or more consecutive spaces).
///
/// The run requirement keeps single-spaced prose out even when short words
/// push its space ratio past the threshold; columnar chord lines always
/// carry multi-space runs. Lengths are measured in chars so accented lyric
/// text is not penalized by UTF-8 width.
#[allow(clippy::cast_precision_loss)]
fn is_chord_line(line: &str) -> bool {
    let chars = line.chars().count();
    if chars <= CHORD_LINE_MAX_CHARS {
        return true;
    }
    let spaces = line.chars().filter(|&c| c == ' ').count();
    let ratio = spaces as f32 / chars as f32;
    ratio > CHORD_LINE_SPACE_RATIO && line.contains("  ")
}

/// One whitespace-prefixed token within a line.
///
/// The gap is the exact whitespace run that preceded the token; emitting
/// `gap` then `token` for every segment (plus the trailing run) reproduces
/// the line byte-for-byte, which is what keeps chords vertically aligned
/// with the syllables beneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Whitespace immediately before the token (may be empty).
    pub gap: &'a str,
    /// Maximal run of non-whitespace characters.
    pub token: &'a str,
}

/// Split a line into (gap, token) segments plus its trailing whitespace.
pub fn tokenize(line: &str) -> (Vec<Segment<'_>>, &str) {
    let mut segments = Vec::new();
    let mut pos = 0;
    while pos < line.len() {
        let rest = &line[pos..];
        let gap_len = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        if gap_len == rest.len() {
            // Only trailing whitespace remains.
            return (segments, rest);
        }
        let after_gap = &rest[gap_len..];
        let token_len = after_gap.find(char::is_whitespace).unwrap_or(after_gap.len());
        segments.push(Segment {
            gap: &rest[..gap_len],
            token: &after_gap[..token_len],
        });
        pos += gap_len + token_len;
    }
    (segments, "")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn blank_lines() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   "), LineKind::Blank);
        assert_eq!(classify_line("\t"), LineKind::Blank);
    }

    #[test]
    fn short_lines_read_as_chord_lines() {
        assert_eq!(classify_line("La"), LineKind::Chord);
        assert_eq!(classify_line("C"), LineKind::Chord);
        assert_eq!(classify_line("Sol#"), LineKind::Chord);
    }

    #[test]
    fn columnar_spacing_reads_as_chord_line() {
        assert_eq!(classify_line("Do   Sol   La"), LineKind::Chord);
        assert_eq!(classify_line("C   G   Am"), LineKind::Chord);
        assert_eq!(classify_line("Fa#m7        Si7"), LineKind::Chord);
    }

    #[test]
    fn prose_reads_as_lyric_line() {
        assert_eq!(classify_line("La casa de mi tía"), LineKind::Lyric);
        assert_eq!(classify_line("Vine a alabar a Dios"), LineKind::Lyric);
        assert_eq!(classify_line("Cantad alegres"), LineKind::Lyric);
    }

    #[test]
    fn tokenize_preserves_whitespace_exactly() {
        let line = "  Do   Sol \t La  ";
        let (segments, trailing) = tokenize(line);
        let rebuilt: String = segments
            .iter()
            .map(|s| format!("{}{}", s.gap, s.token))
            .collect::<String>()
            + trailing;
        assert_eq!(rebuilt, line);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].gap, "  ");
        assert_eq!(segments[0].token, "Do");
        assert_eq!(segments[1].gap, "   ");
        assert_eq!(segments[2].gap, " \t ");
        assert_eq!(trailing, "  ");
    }

    #[test]
    fn tokenize_handles_edge_shapes() {
        let (segments, trailing) = tokenize("");
        assert!(segments.is_empty());
        assert_eq!(trailing, "");

        let (segments, trailing) = tokenize("Do");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].gap, "");
        assert_eq!(trailing, "");

        let (segments, trailing) = tokenize("    ");
        assert!(segments.is_empty());
        assert_eq!(trailing, "    ");
    }

    #[test]
    fn tokenize_is_utf8_safe() {
        let (segments, _) = tokenize("mi tía canta");
        assert_eq!(segments[1].token, "tía");
    }
}
