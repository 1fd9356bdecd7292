//! Note name parsing — converts "C4", "Eb3", "F♯2" or a bare "60" to MIDI note numbers.

use super::error::NoteError;
use super::pitch::{letter_pitch_class, NOTE_LETTERS};

/// Octave assumed when a note name carries no octave number.
pub const DEFAULT_OCTAVE: i32 = 4;

/// Parse a note name or plain integer into a MIDI note number.
///
/// Format: `<letter><optional accidental><optional octave>` or `<integer>`
/// - Letter: C D E F G A B, either case
/// - Accidental: `#` `♯` (sharp), `b` `♭` (flat), `♮` (natural)
/// - Octave: signed integer, default 4 (C4 = middle C = MIDI 60)
///
/// Surrounding whitespace is ignored, and whitespace may separate the parts.
pub fn parse_note(text: &str) -> Result<u8, NoteError> {
    let trimmed = text.trim();
    let chars: Vec<char> = trimmed.chars().collect();
    let run = chars
        .iter()
        .take_while(|&&c| NOTE_LETTERS.contains(c))
        .count();

    let value = if run == 0 {
        trimmed.parse::<i64>().map_err(|_| {
            log::debug!("{text:?} is neither a note name nor an integer");
            NoteError::invalid(text)
        })?
    } else {
        note_value(&chars, run).ok_or_else(|| {
            log::debug!("{text:?} does not match the note name grammar");
            NoteError::invalid(text)
        })?
    };

    if !(0..=127).contains(&value) {
        log::debug!("{text:?} resolves to {value}, outside 0..=127");
        return Err(NoteError::OutOfRange(value));
    }
    Ok(value as u8)
}

fn skip_whitespace(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    i
}

/// Unchecked MIDI value of a note name whose leading letter run has length `run`.
fn note_value(chars: &[char], run: usize) -> Option<i64> {
    let mut note = letter_pitch_class(chars[0])?;
    let mut i = run;

    match run {
        1 => {
            i = skip_whitespace(chars, i);
            match chars.get(i) {
                Some('#') | Some('♯') => {
                    note += 1;
                    i += 1;
                }
                Some('b') | Some('♭') => {
                    note -= 1;
                    i += 1;
                }
                Some('♮') => i += 1,
                _ => {}
            }
        }
        // a trailing 'b' in the letter run is a flat, not a note
        2 if chars[1] == 'b' => note -= 1,
        _ => return None,
    }

    i = skip_whitespace(chars, i);
    let rest: String = chars[i..].iter().collect();
    let mut octave = if rest.is_empty() {
        i64::from(DEFAULT_OCTAVE)
    } else {
        i64::from(rest.parse::<i32>().ok()?)
    };

    if note >= 12 {
        note -= 12;
        octave += 1;
    }
    while note < 0 {
        note += 12;
        octave -= 1;
    }

    Some(i64::from(note) + (octave + 1) * 12)
}
