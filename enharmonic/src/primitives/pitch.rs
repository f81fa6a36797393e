//! Validated note tokens.
//!
//! A token is a single uppercase letter, optionally followed by a run of
//! identical accidentals: `C`, `F#`, `Ebb`, `A####`. Mixed runs (`C#b`) or
//! runs longer than [MAX_ACCIDENTALS] can not be constructed.

use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::Accidental;
use crate::error::{EnharmonicError, EnharmonicResult};

/// Longest accidental run a token can carry.
pub const MAX_ACCIDENTALS: usize = 12;

pub type Scale = Vec<Pitch>;

#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch {
    letter: char,
    accidental: Option<(Accidental, usize)>,
}
impl Pitch {
    pub fn new(
        letter: char,
        accidental: Accidental,
        count: usize,
    ) -> EnharmonicResult<Self> {
        if !letter.is_ascii_uppercase() || count > MAX_ACCIDENTALS {
            return Err(EnharmonicError::InvalidNote(format!(
                "{letter}{}",
                accidental.symbol().to_string().repeat(count)
            )));
        }
        Ok(Self {
            letter,
            accidental: (count > 0).then_some((accidental, count)),
        })
    }
    pub fn natural_from(letter: char) -> EnharmonicResult<Self> {
        Self::new(letter, Accidental::Flat, 0)
    }

    pub fn letter(&self) -> char {
        self.letter
    }
    /// The same letter without accidentals.
    pub fn natural(&self) -> Self {
        Self {
            letter: self.letter,
            accidental: None,
        }
    }
    pub fn is_natural(&self) -> bool {
        self.accidental.is_none()
    }
    pub fn accidental(&self) -> Option<Accidental> {
        self.accidental.map(|(accidental, _)| accidental)
    }
    /// Length of the accidental run.
    pub fn accidentals(&self) -> usize {
        self.accidental.map_or(0, |(_, count)| count)
    }
    /// Amount of accidentals of the given kind (0 if the pitch carries the
    /// other kind).
    pub fn count_of(&self, kind: Accidental) -> usize {
        match self.accidental {
            Some((accidental, count)) if accidental == kind => count,
            _ => 0,
        }
    }
}
impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        if let Some((accidental, count)) = self.accidental {
            for _ in 0..count {
                write!(f, "{}", accidental)?;
            }
        }
        Ok(())
    }
}
impl FromStr for Pitch {
    type Err = EnharmonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EnharmonicError::InvalidNote(s.to_string());
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let run: Vec<char> = chars.collect();
        match run.first() {
            None => Self::natural_from(letter).map_err(|_| invalid()),
            Some(&symbol) => {
                let accidental =
                    Accidental::from_symbol(symbol).ok_or_else(invalid)?;
                if !run.iter().all_equal() {
                    return Err(invalid());
                }
                Self::new(letter, accidental, run.len()).map_err(|_| invalid())
            }
        }
    }
}
impl TryFrom<String> for Pitch {
    type Error = EnharmonicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl From<Pitch> for String {
    fn from(value: Pitch) -> Self {
        value.to_string()
    }
}

/// Runtime check of the token shape, without any table lookup.
pub fn is_valid_pitch_token(token: &str) -> bool {
    token.parse::<Pitch>().is_ok()
}

/// Parse a sequence of tokens, failing on the first invalid one.
pub fn parse_scale<I>(tokens: I) -> EnharmonicResult<Scale>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| token.as_ref().parse())
        .collect()
}

/// Space-separated rendering, used in log messages.
pub fn render_scale(scale: &[Pitch]) -> String {
    scale.iter().join(" ")
}

#[cfg(test)]
mod tests {
    use super::{is_valid_pitch_token, parse_scale, Pitch, MAX_ACCIDENTALS};
    use crate::{error::EnharmonicError, primitives::Accidental};

    #[test]
    fn parse() {
        let pitch: Pitch = "Ebb".parse().expect("valid token");
        assert_eq!(pitch.letter(), 'E');
        assert_eq!(pitch.accidental(), Some(Accidental::Flat));
        assert_eq!(pitch.accidentals(), 2);
        assert_eq!(pitch.count_of(Accidental::Flat), 2);
        assert_eq!(pitch.count_of(Accidental::Sharp), 0);
        assert_eq!(pitch.natural(), "E".parse::<Pitch>().unwrap());
        assert_eq!(pitch.to_string(), "Ebb");

        let natural: Pitch = "B".parse().unwrap();
        assert!(natural.is_natural());
        assert_eq!(natural.accidental(), None);
        assert_eq!(natural.to_string(), "B");
    }

    #[test]
    fn invalid_tokens() {
        for token in ["", "c", "C@", "C#b", "Cb#", "#", "CC", "C ", "Hé"] {
            assert_eq!(
                token.parse::<Pitch>(),
                Err(EnharmonicError::InvalidNote(token.to_string())),
                "token: {token:?}"
            );
            assert!(!is_valid_pitch_token(token));
        }
        let too_long = format!("C{}", "#".repeat(MAX_ACCIDENTALS + 1));
        assert!(!is_valid_pitch_token(&too_long));
        let longest = format!("C{}", "#".repeat(MAX_ACCIDENTALS));
        assert!(is_valid_pitch_token(&longest));
        // Letters outside C..B are shaped correctly, tables decide the rest.
        assert!(is_valid_pitch_token("H"));
    }

    #[test]
    fn zero_count_is_natural() {
        let pitch = Pitch::new('G', Accidental::Sharp, 0).unwrap();
        assert_eq!(pitch, Pitch::natural_from('G').unwrap());
        assert!(Pitch::new('g', Accidental::Sharp, 1).is_err());
    }

    #[test]
    fn scale() {
        let scale = parse_scale(["C", "D#", "Fb"]).unwrap();
        assert_eq!(super::render_scale(&scale), "C D# Fb");
        assert_eq!(
            parse_scale(["C", "X!", "D"]),
            Err(EnharmonicError::InvalidNote("X!".to_string()))
        );
    }
}
