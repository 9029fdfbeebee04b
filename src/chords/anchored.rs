//! Inline `[Chord]` anchor format.
//!
//! Besides whitespace-aligned chord lines, songs can carry chords anchored
//! directly into the lyric text: `[Sol]Canta al Se[Re]ñor`. This module
//! converts between the two shapes: merging an aligned chord line into the
//! lyric line beneath it, and splitting an anchored line back into an
//! aligned (chord row, lyric row) pair for display.

use std::sync::LazyLock;

use regex::Regex;

use super::scanner::{self, LineKind};
use super::symbol;

/// Matches one `[Chord]` anchor and captures its content.
#[allow(clippy::expect_used)]
static RE_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("valid regex: RE_ANCHOR"));

/// True when a line contains at least one `[...]` anchor.
pub fn has_anchors(line: &str) -> bool {
    RE_ANCHOR.is_match(line)
}

/// Convert chord lines positioned above lyric lines into the anchored form.
///
/// A pair is merged when the first line classifies as a chord line, every
/// token on it is a recognizable chord, and the following line is a plain
/// lyric line. Each chord is inserted as `[Chord]` at the column it occupied,
/// so the anchor lands right before the syllable it was aligned over. Lines
/// that do not form such a pair pass through untouched.
pub fn merge_chord_lines(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let next = lines.get(i + 1).copied().unwrap_or("");
        if line_is_all_chords(line) && scanner::classify_line(next) == LineKind::Lyric {
            out.push(merge_pair(line, next));
            i += 2;
        } else {
            out.push(line.to_string());
            i += 1;
        }
    }
    out.join("\n")
}

/// Split an anchored line into an aligned (chord row, lyric row) pair,
/// transposing each anchored chord by `semitones`.
///
/// The chord row is padded with spaces so each chord starts at the column of
/// the lyric text that followed its anchor. Anchor contents that are not
/// recognizable chords are carried into the chord row verbatim.
pub fn split_anchored(line: &str, semitones: i32) -> (String, String) {
    let mut chord_row = String::new();
    let mut lyric_row = String::new();
    let mut chord_width = 0usize;
    let mut lyric_width = 0usize;
    let mut last = 0usize;

    for caps in RE_ANCHOR.captures_iter(line) {
        let Some(whole) = caps.get(0) else { continue };
        let before = &line[last..whole.start()];
        lyric_row.push_str(before);
        lyric_width += before.chars().count();

        if chord_width < lyric_width {
            let pad = lyric_width - chord_width;
            chord_row.push_str(&" ".repeat(pad));
            chord_width += pad;
        } else if chord_width > 0 {
            // Crowded anchors: keep at least one space between chords.
            chord_row.push(' ');
            chord_width += 1;
        }

        let content = &caps[1];
        let rendered = symbol::classify(content, true)
            .and_then(|sym| sym.transposed(semitones))
            .unwrap_or_else(|| content.to_string());
        chord_width += rendered.chars().count();
        chord_row.push_str(&rendered);

        last = whole.end();
    }
    lyric_row.push_str(&line[last..]);
    (chord_row, lyric_row)
}

/// True when the line is a chord line whose every token parses as a chord.
fn line_is_all_chords(line: &str) -> bool {
    if scanner::classify_line(line) != LineKind::Chord {
        return false;
    }
    let (segments, _) = scanner::tokenize(line);
    !segments.is_empty()
        && segments
            .iter()
            .all(|s| symbol::classify(s.token, true).is_some())
}

/// Insert the chords of `chord_line` into `lyric_line` at their columns.
fn merge_pair(chord_line: &str, lyric_line: &str) -> String {
    let lyric: Vec<char> = lyric_line.chars().collect();
    let (segments, _) = scanner::tokenize(chord_line);
    let mut merged = String::new();
    let mut col = 0usize;
    let mut cursor = 0usize;
    for segment in &segments {
        col += segment.gap.chars().count();
        while cursor < col {
            merged.push(lyric.get(cursor).copied().unwrap_or(' '));
            cursor += 1;
        }
        merged.push('[');
        merged.push_str(segment.token);
        merged.push(']');
        col += segment.token.chars().count();
    }
    merged.extend(lyric.iter().skip(cursor));
    merged
}
