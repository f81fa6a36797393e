use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::EnharmonicError;

/// Accidental kind, used both inside a [Pitch](super::Pitch) and as the
/// preferred spelling direction of a scale.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default,
    Serialize, Deserialize,
)]
pub enum Accidental {
    #[serde(rename = "#")]
    Sharp,
    #[default]
    #[serde(rename = "b")]
    Flat,
}
impl Accidental {
    pub const SHARP: char = '#';
    pub const FLAT: char = 'b';

    pub fn symbol(&self) -> char {
        match self {
            Self::Sharp => Self::SHARP,
            Self::Flat => Self::FLAT,
        }
    }
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            Self::SHARP => Some(Self::Sharp),
            Self::FLAT => Some(Self::Flat),
            _ => None,
        }
    }
    pub fn opposite(&self) -> Self {
        match self {
            Self::Sharp => Self::Flat,
            Self::Flat => Self::Sharp,
        }
    }
    /// Direction of a single accidental on the chromatic circle.
    pub fn sign(&self) -> isize {
        match self {
            Self::Sharp => 1,
            Self::Flat => -1,
        }
    }
}
impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl FromStr for Accidental {
    type Err = EnharmonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Self::from_symbol), chars.next()) {
            (Some(accidental), None) => Ok(accidental),
            _ => Err(EnharmonicError::InvalidNote(s.to_string())),
        }
    }
}
