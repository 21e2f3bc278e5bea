use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::PALETTE_COLORS;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Palette overflow: maximum 256 colors supported, got {0}")]
    CapacityExceeded(usize),
}

/// A four channel color, stored in the order it was read.
///
/// Channels 0..=2 are red, green and blue; channel 3 is alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color([u8; 4]);

impl Color {
    pub const fn new(c0: u8, c1: u8, c2: u8, c3: u8) -> Self {
        Self([c0, c1, c2, c3])
    }

    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    pub const fn a(&self) -> u8 {
        self.0[3]
    }

    pub const fn to_array(self) -> [u8; 4] {
        self.0
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// An ordered set of at most 256 colors. The position of a color is its index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub const MAX_COLORS: usize = PALETTE_COLORS;

    /// Builds a palette from an ordered list of colors.
    ///
    /// # Errors
    /// - Returns `PaletteError::CapacityExceeded` if more than 256 colors are given
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.len() > Self::MAX_COLORS {
            return Err(PaletteError::CapacityExceeded(colors.len()));
        }
        Ok(Self { colors })
    }

    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = PaletteError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<[Color; PALETTE_COLORS]> for Palette {
    fn from(colors: [Color; PALETTE_COLORS]) -> Self {
        Self {
            colors: colors.to_vec(),
        }
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let colors = Vec::<Color>::deserialize(deserializer)?;
        Palette::new(colors).map_err(serde::de::Error::custom)
    }
}
