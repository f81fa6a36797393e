//! Enharmonic spelling of pitches and scales.
//!
//! The pipeline is: [equivalents] of a single pitch → [respell] of a whole
//! scale for one letter-skip position → [all_candidates] over every
//! ambiguous skip position → [rank] by [weight].

use serde::{Deserialize, Serialize};

use crate::{
    error::{EnharmonicError, EnharmonicResult},
    primitives::{
        position_in, Accidental, Pitch, MAX_ACCIDENTALS, NATURAL_NOTES,
        OCTAVE_NOTES,
    },
};

pub mod equivalence;
pub mod respell;
pub mod scoring;

pub use equivalence::{equivalents, natural_letter_of};
pub use respell::respell;
pub use scoring::{all_candidates, best, rank, weigh, weight, Candidate};

/// Parameters of every spelling operation.
///
/// Fields left out of a deserialized document take their defaults:
/// flat bias, `C D E F G A B`, `C C# D D# E F F# G G# A A# B` and
/// twelve accidentals at most.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellingConfig {
    /// Preferred accidental of respelled notes.
    pub accidental: Accidental,
    pub naturals: Vec<Pitch>,
    pub octave: Vec<Pitch>,
    /// Longest accidental run tried while looking for equivalents.
    ///
    /// Capped by the octave length and by [MAX_ACCIDENTALS], whichever is
    /// smaller: a pitch never carries more than twelve accidentals.
    pub max_accidentals: usize,
}
impl SpellingConfig {
    pub fn new(accidental: Accidental) -> Self {
        Self {
            accidental,
            ..Default::default()
        }
    }

    /// Check that tables are paired and the accidentals limit fits them.
    pub fn validate(&self) -> EnharmonicResult<()> {
        check_accidentals_limit(self.max_accidentals, &self.octave)?;
        if let Some(missing) = self
            .naturals
            .iter()
            .find(|natural| position_in(&self.octave, natural).is_none())
        {
            return Err(EnharmonicError::MissingTableEntry(missing.to_string()));
        }
        Ok(())
    }
}
impl Default for SpellingConfig {
    fn default() -> Self {
        Self {
            accidental: Accidental::Flat,
            naturals: NATURAL_NOTES.to_vec(),
            octave: OCTAVE_NOTES.to_vec(),
            max_accidentals: OCTAVE_NOTES.len(),
        }
    }
}

fn check_accidentals_limit(
    requested: usize,
    octave: &[Pitch],
) -> EnharmonicResult<()> {
    let limit = octave.len().min(MAX_ACCIDENTALS);
    match requested > limit {
        true => {
            Err(EnharmonicError::AccidentalsOutOfRange { requested, limit })
        }
        false => Ok(()),
    }
}
