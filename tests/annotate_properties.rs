//! End-to-end checks for the chord annotation pipeline.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use cancionero::chords::annotate;
use cancionero::constants::chords::BLANK_LINE_PLACEHOLDER;

fn identity(chord: &str) -> String {
    chord.to_string()
}

fn bracket(chord: &str) -> String {
    format!("[{chord}]")
}

#[test]
fn lyric_lines_pass_through_unmarked() {
    let text = "La casa de mi tía";
    assert_eq!(annotate(text, 0, bracket), text);
}

#[test]
fn chord_line_is_transposed_and_marked() {
    let text = "Do   Sol   La";
    assert_eq!(annotate(text, 2, identity), "Re   La   Si");
    assert_eq!(annotate(text, 2, bracket), "[Re]   [La]   [Si]");
}

#[test]
fn suffix_is_preserved_through_transposition() {
    assert_eq!(annotate("Fa#m7", 1, identity), "Solm7");
}

#[test]
fn zero_shift_preserves_flat_spelling() {
    // Bb7 is recognized and marked, but its spelling is left alone
    // when no transposition is applied.
    assert_eq!(annotate("Bb7", 0, bracket), "[Bb7]");
}

#[test]
fn flats_normalize_to_sharps_when_shifted() {
    assert_eq!(annotate("Eb", -3, identity), "C");
}

#[test]
fn unknown_roots_are_left_alone() {
    // "Lab" is not a valid Latin spelling (flats use La♭ -> Lab is not in
    // the scheme); the token passes through untouched.
    assert_eq!(annotate("Lab  Sol", 2, bracket), "Lab  [La]");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(annotate("", 5, bracket), "");
}

#[test]
fn whitespace_runs_survive_exactly() {
    let text = "Do\t \tSol   La";
    let out = annotate(text, 0, identity);
    assert_eq!(out, text);

    let shifted = annotate("  Do   Sol  ", 2, identity);
    assert_eq!(shifted, "  Re   La  ");
}

#[test]
fn blank_lines_keep_line_count() {
    let text = "Do   Sol\n\nEn tu casa estoy\n   \nDo   Sol";
    let out = annotate(text, 0, identity);
    let placeholder = BLANK_LINE_PLACEHOLDER.to_string();
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], placeholder);
    assert_eq!(lines[3], placeholder);
}

#[test]
fn marking_is_idempotent() {
    let text = "Do   Sol   La\nCanta al Señor\n\nMim   La7";
    let once = annotate(text, 0, identity);
    let twice = annotate(&once, 0, identity);
    assert_eq!(once, twice);
}

#[test]
fn transposition_composes_additively() {
    let text = "Do   Sol   La\nRem7   Mi";
    let in_two_steps = annotate(&annotate(text, 3, identity), 4, identity);
    let in_one_step = annotate(text, 7, identity);
    assert_eq!(in_two_steps, in_one_step);

    // A full octave is a no-op on spelling.
    assert_eq!(annotate(text, 12, identity), annotate(text, 0, identity));
}

#[test]
fn transposition_round_trips() {
    // Sharp spellings survive a there-and-back shift; flat spellings would
    // come back sharpened, so they are covered by the zero-shift tests.
    let text = "Do#   Sol   Fa#m7\nRe   La#   Si";
    for n in 1..12 {
        let there = annotate(text, n, identity);
        let back = annotate(&there, -n, identity);
        assert_eq!(back, text, "round trip failed for {n} semitones");
    }
}

#[test]
fn bare_ambiguous_tokens_need_a_chord_line() {
    // "La" alone on a short line is a chord; inside a lyric sentence it is
    // the Spanish article.
    assert_eq!(annotate("La", 2, bracket), "[Si]");
    let lyric = "La paz sea con ustedes todos";
    assert_eq!(annotate(lyric, 2, bracket), lyric);
}

#[test]
fn letter_and_latin_systems_transpose_together() {
    assert_eq!(annotate("C   G   Am", 2, identity), "D   A   Bm");
    assert_eq!(annotate("Do   Sol   Lam", 2, identity), "Re   La   Sim");
}
