//! Note conversion — MIDI note number ↔ note name ("C♯3", "A4", "Bb2").

pub mod accent;
pub mod error;
pub mod format;
pub mod parse;
pub mod pitch;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use accent::AccentStyle;
pub use error::NoteError;
pub use parse::parse_note;

/// Display settings for note names: which accent styles to use and whether to
/// restrict output to ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Selected accent styles. Sharp and/or Flat pick the accidental spelling;
    /// Natural adds an explicit ♮ to natural notes.
    #[serde(default = "DisplayConfig::default_accent_style")]
    pub accent_style: BTreeSet<AccentStyle>,
    /// Use `b`, `#` and a space instead of ♭, ♯ and ♮.
    #[serde(default)]
    pub ascii_style: bool,
}

impl DisplayConfig {
    pub fn new(styles: impl IntoIterator<Item = AccentStyle>, ascii_style: bool) -> Self {
        Self {
            accent_style: styles.into_iter().collect(),
            ascii_style,
        }
    }

    fn default_accent_style() -> BTreeSet<AccentStyle> {
        BTreeSet::from([AccentStyle::Sharp])
    }

    pub fn has(&self, style: AccentStyle) -> bool {
        self.accent_style.contains(&style)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            accent_style: Self::default_accent_style(),
            ascii_style: false,
        }
    }
}

/// Converts between MIDI note numbers and note names.
///
/// Conversions only read the configuration; change it through the setters.
#[derive(Debug, Clone, Default)]
pub struct NoteConverter {
    config: DisplayConfig,
}

impl NoteConverter {
    /// A converter with sharps and Unicode glyphs.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn set_accent_style(&mut self, styles: impl IntoIterator<Item = AccentStyle>) {
        self.config.accent_style = styles.into_iter().collect();
    }

    pub fn set_ascii_mode(&mut self, ascii: bool) {
        self.config.ascii_style = ascii;
    }

    pub fn accent_style(&self) -> &BTreeSet<AccentStyle> {
        &self.config.accent_style
    }

    pub fn ascii_mode(&self) -> bool {
        self.config.ascii_style
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Format a MIDI note number as a name.
    ///
    /// Never fails. Out-of-range numbers produce out-of-range octaves, and an
    /// accidental note with neither Sharp nor Flat selected yields "".
    pub fn format(&self, note: i32) -> String {
        format::spell(note, &self.config).unwrap_or_default()
    }

    /// Like [`format`](Self::format), but reports the missing spelling case.
    pub fn try_format(&self, note: i32) -> Result<String, NoteError> {
        format::spell(note, &self.config).ok_or(NoteError::NoRepresentation(note))
    }

    /// Parse a note name or plain integer into a MIDI note number.
    pub fn parse(&self, text: &str) -> Result<u8, NoteError> {
        parse_note(text)
    }
}

/// A MIDI note number in 0..=127.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MidiNote(u8);

impl MidiNote {
    pub const MIN: MidiNote = MidiNote(0);
    pub const MAX: MidiNote = MidiNote(127);
    pub const MIDDLE_C: MidiNote = MidiNote(60);

    pub fn new(number: u8) -> Option<Self> {
        (number <= 127).then_some(Self(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn pitch_class(self) -> usize {
        pitch::pitch_class(self.0 as i32)
    }

    pub fn octave(self) -> i32 {
        pitch::octave(self.0 as i32)
    }

    pub fn is_accidental(self) -> bool {
        pitch::is_accidental(self.pitch_class())
    }
}

impl TryFrom<i64> for MidiNote {
    type Error = NoteError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(MidiNote::new)
            .ok_or(NoteError::OutOfRange(value))
    }
}

impl From<MidiNote> for u8 {
    fn from(note: MidiNote) -> u8 {
        note.0
    }
}

impl FromStr for MidiNote {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_note(s).map(MidiNote)
    }
}

/// Sharp spelling by default; `{:#}` uses flats.
impl fmt::Display for MidiNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if f.alternate() {
            AccentStyle::Flat
        } else {
            AccentStyle::Sharp
        };
        let config = DisplayConfig::new([style], false);
        let name = format::spell(self.0 as i32, &config).unwrap_or_default();
        f.write_str(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sharp_unicode() {
        let conv = NoteConverter::new();
        assert_eq!(conv.accent_style(), &BTreeSet::from([AccentStyle::Sharp]));
        assert!(!conv.ascii_mode());
        assert_eq!(conv.format(61), "C♯4");
    }

    #[test]
    fn setters_change_output() {
        let mut conv = NoteConverter::new();
        conv.set_accent_style([AccentStyle::Flat]);
        assert_eq!(conv.format(61), "D♭4");
        conv.set_ascii_mode(true);
        assert_eq!(conv.format(61), "Db4");
        conv.set_accent_style([AccentStyle::Sharp, AccentStyle::Flat]);
        assert_eq!(conv.format(61), "C#/Db4");
    }

    #[test]
    fn format_empty_without_accidental_style() {
        let mut conv = NoteConverter::new();
        conv.set_accent_style([AccentStyle::Natural]);
        assert_eq!(conv.format(61), "");
        assert_eq!(conv.try_format(61), Err(NoteError::NoRepresentation(61)));
        assert_eq!(conv.try_format(60).as_deref(), Ok("C♮4"));
    }

    #[test]
    fn parse_independent_of_config() {
        let mut conv = NoteConverter::new();
        conv.set_accent_style([AccentStyle::Flat]);
        assert_eq!(conv.parse("C♯3"), Ok(49));
        assert_eq!(conv.parse("D♭3"), Ok(49));
    }

    #[test]
    fn display_config_yaml_defaults() {
        let config: DisplayConfig = serde_yaml::from_str("ascii_style: true\n").unwrap();
        assert!(config.ascii_style);
        assert!(config.has(AccentStyle::Sharp));

        let config: DisplayConfig =
            serde_yaml::from_str("accent_style: [flat, natural]\n").unwrap();
        assert!(config.has(AccentStyle::Flat));
        assert!(config.has(AccentStyle::Natural));
        assert!(!config.has(AccentStyle::Sharp));
        assert!(!config.ascii_style);
    }

    #[test]
    fn midi_note_bounds() {
        assert_eq!(MidiNote::new(127), Some(MidiNote::MAX));
        assert_eq!(MidiNote::new(128), None);
        assert_eq!(MidiNote::try_from(200), Err(NoteError::OutOfRange(200)));
        assert_eq!(MidiNote::try_from(-1), Err(NoteError::OutOfRange(-1)));
        assert_eq!(MidiNote::try_from(60), Ok(MidiNote::MIDDLE_C));
    }

    #[test]
    fn midi_note_accessors() {
        let note: MidiNote = "F#3".parse().unwrap();
        assert_eq!(note.number(), 54);
        assert_eq!(note.pitch_class(), 6);
        assert_eq!(note.octave(), 3);
        assert!(note.is_accidental());
        assert!(!MidiNote::MIDDLE_C.is_accidental());
    }

    #[test]
    fn midi_note_display() {
        let note = MidiNote::new(70).unwrap();
        assert_eq!(note.to_string(), "A♯4");
        assert_eq!(format!("{note:#}"), "B♭4");
    }

    #[test]
    fn midi_note_serde() {
        let yaml = serde_yaml::to_string(&MidiNote::MIDDLE_C).unwrap();
        assert_eq!(yaml.trim(), "60");
        let parsed: MidiNote = serde_yaml::from_str("69").unwrap();
        assert_eq!(parsed.number(), 69);
        assert!(serde_yaml::from_str::<MidiNote>("200").is_err());
    }
}
