//! Pitch-class arithmetic and the letter-name tables shared by format and parse.

/// Letter names for each pitch class when accidentals are spelled as flats.
pub const FLAT_NAMES: [char; 12] = ['C', 'D', 'D', 'E', 'E', 'F', 'G', 'G', 'A', 'A', 'B', 'B'];

/// Letter names for each pitch class when accidentals are spelled as sharps.
pub const SHARP_NAMES: [char; 12] = ['C', 'C', 'D', 'D', 'E', 'F', 'F', 'G', 'G', 'A', 'A', 'B'];

/// Note letters accepted by the parser, lowercase first.
pub const NOTE_LETTERS: &str = "cdefgabCDEFGAB";

/// Pitch class of a MIDI note number, always in 0..=11 (negative input included).
pub fn pitch_class(note: i32) -> usize {
    note.rem_euclid(12) as usize
}

/// MIDI octave of a note number: C4 = 60, C-1 = 0.
///
/// Uses floor division so negative numbers stay consistent with `pitch_class`.
pub fn octave(note: i32) -> i32 {
    note.div_euclid(12) - 1
}

/// True for the five black-key pitch classes {1, 3, 6, 8, 10}.
pub fn is_accidental(pitch_class: usize) -> bool {
    (pitch_class % 2 == 1) != (pitch_class > 4)
}

/// Natural pitch class for a note letter (either case), or None.
///
/// C=0 D=2 E=4 F=5 G=7 A=9 B=11.
pub fn letter_pitch_class(letter: char) -> Option<i32> {
    let position = NOTE_LETTERS.chars().position(|c| c == letter)? % 7;
    let mut note = position as i32 * 2;
    // no E♯/F♭ or B♯/C♭ step
    if note > 4 {
        note -= 1;
    }
    Some(note)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accidental_classes() {
        let accidentals: Vec<usize> = (0..12).filter(|&pc| is_accidental(pc)).collect();
        assert_eq!(accidentals, vec![1, 3, 6, 8, 10]);
    }

    #[test]
    fn pitch_class_wraps_negative() {
        assert_eq!(pitch_class(0), 0);
        assert_eq!(pitch_class(61), 1);
        assert_eq!(pitch_class(-1), 11);
        assert_eq!(pitch_class(-12), 0);
    }

    #[test]
    fn octave_boundaries() {
        assert_eq!(octave(0), -1);
        assert_eq!(octave(11), -1);
        assert_eq!(octave(12), 0);
        assert_eq!(octave(60), 4);
        assert_eq!(octave(127), 9);
        assert_eq!(octave(-1), -2);
    }

    #[test]
    fn letters_map_to_diatonic_classes() {
        let upper: Vec<i32> = "CDEFGAB".chars().filter_map(letter_pitch_class).collect();
        assert_eq!(upper, vec![0, 2, 4, 5, 7, 9, 11]);
        let lower: Vec<i32> = "cdefgab".chars().filter_map(letter_pitch_class).collect();
        assert_eq!(lower, upper);
    }

    #[test]
    fn non_letters_rejected() {
        assert_eq!(letter_pitch_class('H'), None);
        assert_eq!(letter_pitch_class('#'), None);
    }

    #[test]
    fn name_tables_agree_on_naturals() {
        for pc in (0..12).filter(|&pc| !is_accidental(pc)) {
            assert_eq!(FLAT_NAMES[pc], SHARP_NAMES[pc]);
        }
    }
}
