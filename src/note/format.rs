//! Note formatting — converts MIDI note numbers to names like "C♯3" or "Bb4".

use super::accent::AccentStyle;
use super::pitch::{is_accidental, octave, pitch_class, FLAT_NAMES, SHARP_NAMES};
use super::DisplayConfig;

/// Letter name plus optional accent for one pitch class.
///
/// Sharp selects the sharp table; every other style (or none) reads the flat
/// table, which holds the same letters for natural classes.
fn note_string(pitch_class: usize, accent: Option<AccentStyle>, ascii: bool) -> String {
    let names = if accent == Some(AccentStyle::Sharp) {
        &SHARP_NAMES
    } else {
        &FLAT_NAMES
    };
    let mut s = String::with_capacity(4);
    s.push(names[pitch_class]);
    if let Some(style) = accent {
        s.push(style.display(ascii));
    }
    s
}

/// Spell a MIDI note number under the given display configuration.
///
/// Returns None only for an accidental note when neither Sharp nor Flat is
/// selected. Input is not range-checked.
pub fn spell(note: i32, config: &DisplayConfig) -> Option<String> {
    let pc = pitch_class(note);
    let octave = octave(note);
    let ascii = config.ascii_style;

    let flat = config.has(AccentStyle::Flat);
    let sharp = config.has(AccentStyle::Sharp);

    let name = if is_accidental(pc) {
        match (sharp, flat) {
            (true, true) => format!(
                "{}/{}",
                note_string(pc, Some(AccentStyle::Sharp), ascii),
                note_string(pc, Some(AccentStyle::Flat), ascii)
            ),
            (false, true) => note_string(pc, Some(AccentStyle::Flat), ascii),
            (true, false) => note_string(pc, Some(AccentStyle::Sharp), ascii),
            (false, false) => {
                log::trace!("note {note}: accidental with no sharp/flat style selected");
                return None;
            }
        }
    } else if config.has(AccentStyle::Natural) {
        note_string(pc, Some(AccentStyle::Natural), ascii)
    } else {
        note_string(pc, None, ascii)
    };

    Some(format!("{name}{octave}"))
}
