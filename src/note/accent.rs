//! Accent styles — the modifier glyphs used when spelling a note name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A note-name accent style.
///
/// Each style has a Unicode glyph and an ASCII fallback. The natural
/// fallback is a single space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentStyle {
    Flat,
    Sharp,
    Natural,
}

impl AccentStyle {
    /// All styles, in declaration order.
    pub const ALL: [AccentStyle; 3] = [AccentStyle::Flat, AccentStyle::Sharp, AccentStyle::Natural];

    /// Unicode glyph: ♭, ♯ or ♮.
    pub fn glyph(self) -> char {
        match self {
            AccentStyle::Flat => '♭',
            AccentStyle::Sharp => '♯',
            AccentStyle::Natural => '♮',
        }
    }

    /// ASCII fallback: `b`, `#` or a space.
    pub fn ascii(self) -> char {
        match self {
            AccentStyle::Flat => 'b',
            AccentStyle::Sharp => '#',
            AccentStyle::Natural => ' ',
        }
    }

    /// The character to emit for this style.
    pub fn display(self, ascii: bool) -> char {
        if ascii {
            self.ascii()
        } else {
            self.glyph()
        }
    }
}

impl fmt::Display for AccentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
