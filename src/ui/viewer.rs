//! Song viewer: lyrics with highlighted, transposable chords.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::chords::{self, anchored, scanner, symbol, voicing, LineKind, LATIN};
use crate::constants::chords::BLANK_LINE_PLACEHOLDER;
use crate::ui::create_titled_block;

/// Draw the viewer for the currently open song.
pub fn draw_viewer(f: &mut Frame, app: &App, area: Rect) {
    let Some(song) = app.viewing.and_then(|i| app.library.get(i)) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let chord_style = Style::default()
        .fg(app.config.chord_color)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line<'static>> = song
        .lyrics
        .split('\n')
        .flat_map(|line| render_line(line, app.transpose, chord_style))
        .collect();

    let mut title = song.title.clone();
    if !song.author.is_empty() {
        title.push_str(&format!(" — {}", song.author));
    }
    if app.transpose != 0 {
        title.push_str(&format!("  [{:+} st]", app.transpose));
    }

    let body = Paragraph::new(lines)
        .block(create_titled_block(&title, true))
        .scroll((app.scroll, 0));
    f.render_widget(body, chunks[0]);

    draw_piano_strip(f, app, song, chunks[1]);
}

/// Render one raw lyric line into display lines.
///
/// Blank lines become a placeholder, anchored lines expand into an aligned
/// chord row plus lyric row, and everything else is annotated token by token
/// with whitespace preserved exactly as typed.
pub(super) fn render_line(line: &str, transpose: i32, chord_style: Style) -> Vec<Line<'static>> {
    if anchored::has_anchors(line) {
        let (chord_row, lyric_row) = anchored::split_anchored(line, transpose);
        return vec![
            Line::from(Span::styled(chord_row, chord_style)),
            Line::from(Span::raw(lyric_row)),
        ];
    }

    let kind = scanner::classify_line(line);
    if kind == LineKind::Blank {
        return vec![Line::from(Span::raw(BLANK_LINE_PLACEHOLDER.to_string()))];
    }

    let on_chord_line = kind == LineKind::Chord;
    let (segments, trailing) = scanner::tokenize(line);
    let mut spans = Vec::with_capacity(segments.len() * 2 + 1);
    for segment in segments {
        if !segment.gap.is_empty() {
            spans.push(Span::raw(segment.gap.to_string()));
        }
        let span = symbol::classify(segment.token, on_chord_line)
            .and_then(|sym| sym.transposed(transpose))
            .map_or_else(
                || Span::raw(segment.token.to_string()),
                |chord| Span::styled(chord, chord_style),
            );
        spans.push(span);
    }
    if !trailing.is_empty() {
        spans.push(Span::raw(trailing.to_string()));
    }
    vec![Line::from(spans)]
}

/// One-line piano strip highlighting the voicing of the song's first chord.
fn draw_piano_strip(f: &mut Frame, app: &App, song: &crate::library::Song, area: Rect) {
    let first = first_chord(&song.lyrics, app.transpose);
    let (title, active) = match &first {
        Some((name, classes)) => (format!("Piano — {name}"), classes.clone()),
        None => ("Piano".to_string(), Vec::new()),
    };

    let spans: Vec<Span> = LATIN
        .iter()
        .enumerate()
        .flat_map(|(i, note)| {
            #[allow(clippy::cast_possible_truncation)]
            let lit = active.contains(&(i as u8));
            let style = if lit {
                Style::default()
                    .fg(Color::Black)
                    .bg(app.config.chord_color)
                    .add_modifier(Modifier::BOLD)
            } else if note.ends_with('#') {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            [Span::styled((*note).to_string(), style), Span::raw(" ")]
        })
        .collect();

    let strip = Paragraph::new(Line::from(spans)).block(create_titled_block(&title, false));
    f.render_widget(strip, area);
}

/// Find the first recognizable chord in the lyrics, transposed for display,
/// together with its pitch classes.
fn first_chord(lyrics: &str, transpose: i32) -> Option<(String, Vec<u8>)> {
    for line in lyrics.split('\n') {
        let kind = scanner::classify_line(line);
        if kind == LineKind::Blank {
            continue;
        }

        // Anchored lines carry their (already transposed) chords in the
        // split-out chord row; plain lines are classified token by token.
        let haystack = if anchored::has_anchors(line) {
            anchored::split_anchored(line, transpose).0
        } else {
            let on_chord_line = kind == LineKind::Chord;
            let (segments, _) = scanner::tokenize(line);
            segments
                .iter()
                .filter_map(|s| {
                    symbol::classify(s.token, on_chord_line)
                        .and_then(|sym| sym.transposed(transpose))
                })
                .collect::<Vec<_>>()
                .join(" ")
        };

        let (segments, _) = scanner::tokenize(&haystack);
        for segment in segments {
            if let Some(found) = chord_with_classes(segment.token) {
                return Some(found);
            }
        }
    }
    None
}

/// Parse an already-transposed chord spelling and pair it with its voicing.
fn chord_with_classes(token: &str) -> Option<(String, Vec<u8>)> {
    let sym = chords::ChordSymbol::parse(token)?;
    let classes = voicing::pitch_classes(&sym)?;
    Some((token.to_string(), classes))
}
