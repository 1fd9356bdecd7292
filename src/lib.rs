//! midinote — MIDI note number ↔ note name conversion.

pub mod config;
pub mod logging;
pub mod note;

pub use note::{AccentStyle, DisplayConfig, MidiNote, NoteConverter, NoteError};
