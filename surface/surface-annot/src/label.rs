//! Colortable labels.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry of an annotation colortable.
///
/// Labels pair a region name with the color used to paint it; the packed
/// form of that color is what annotation files store per vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Label {
    /// Position of the label in the colortable.
    pub index: u32,
    /// Region name, for example `precentral`.
    pub name: String,
    /// Red color channel.
    pub red: u8,
    /// Green color channel.
    pub green: u8,
    /// Blue color channel.
    pub blue: u8,
    /// Transparency channel, 0 for fully opaque.
    pub transparency: u8,
}

impl Label {
    /// The packed per-vertex color code for this label.
    ///
    /// Channels are packed little-endian as red, green, blue,
    /// transparency. Index 0 is the conventional "unknown" label and
    /// always maps to code 0 regardless of its color.
    #[inline]
    #[must_use]
    pub const fn color_code(&self) -> u32 {
        if self.index == 0 {
            0
        } else {
            u32::from_le_bytes([self.red, self.green, self.blue, self.transparency])
        }
    }

    /// The display color as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn hex_color_code(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Label(name={}, index={}, color={})",
            self.name,
            self.index,
            self.hex_color_code()
        )
    }
}
