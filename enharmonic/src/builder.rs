//! Single-shot configuration of a scale respelling.
//!
//! ```
//! # use enharmonic::{
//! #     builder::{EnharmonicScaleBuilder, SortOptions},
//! #     primitives::parse_scale,
//! # };
//! # fn main() -> Result<(), enharmonic::error::EnharmonicError> {
//! let mut builder = EnharmonicScaleBuilder::create();
//! builder
//!     .with_scale(parse_scale(["C#", "D#", "F#", "G#", "A#"])?)?
//!     .with_flat_accidental()?
//!     .with_sort_options(SortOptions::default())?;
//! let best = builder.compute_best()?;
//! assert_eq!(parse_scale(["Db", "Eb", "Gb", "Ab", "Bb"])?, best);
//! assert!(builder.with_sharp_accidental().is_err());
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{EnharmonicError, EnharmonicResult},
    primitives::{Accidental, Pitch, Scale},
    spelling::{all_candidates, rank, SpellingConfig},
};

/// Request for ranking the candidates. Carries no parameters yet.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct SortOptions {}

#[derive(Debug, Clone)]
pub struct EnharmonicScaleBuilder {
    scale: Scale,
    config: SpellingConfig,
    sort_options: Option<SortOptions>,
    /// `None` while the builder is open.
    result: Option<Vec<Scale>>,
}
impl EnharmonicScaleBuilder {
    pub fn create() -> Self {
        Self {
            scale: Vec::new(),
            config: SpellingConfig::default(),
            sort_options: None,
            result: None,
        }
    }

    fn open(&mut self) -> EnharmonicResult<&mut Self> {
        match self.result {
            None => Ok(self),
            Some(_) => {
                log::warn!("builder modified after computation");
                Err(EnharmonicError::AlreadyComputed)
            }
        }
    }

    pub fn with_scale(
        &mut self,
        scale: impl IntoIterator<Item = Pitch>,
    ) -> EnharmonicResult<&mut Self> {
        let builder = self.open()?;
        builder.scale = scale.into_iter().collect();
        Ok(builder)
    }
    pub fn with_accidental(
        &mut self,
        accidental: Accidental,
    ) -> EnharmonicResult<&mut Self> {
        let builder = self.open()?;
        builder.config.accidental = accidental;
        Ok(builder)
    }
    pub fn with_flat_accidental(&mut self) -> EnharmonicResult<&mut Self> {
        self.with_accidental(Accidental::Flat)
    }
    pub fn with_sharp_accidental(&mut self) -> EnharmonicResult<&mut Self> {
        self.with_accidental(Accidental::Sharp)
    }
    pub fn with_natural_notes(
        &mut self,
        naturals: impl IntoIterator<Item = Pitch>,
    ) -> EnharmonicResult<&mut Self> {
        let builder = self.open()?;
        builder.config.naturals = naturals.into_iter().collect();
        Ok(builder)
    }
    pub fn with_octave_notes(
        &mut self,
        octave: impl IntoIterator<Item = Pitch>,
    ) -> EnharmonicResult<&mut Self> {
        let builder = self.open()?;
        builder.config.octave = octave.into_iter().collect();
        Ok(builder)
    }
    pub fn with_accidentals_number(
        &mut self,
        max_accidentals: usize,
    ) -> EnharmonicResult<&mut Self> {
        let builder = self.open()?;
        builder.config.max_accidentals = max_accidentals;
        Ok(builder)
    }
    pub fn with_sort_options(
        &mut self,
        options: SortOptions,
    ) -> EnharmonicResult<&mut Self> {
        let builder = self.open()?;
        builder.sort_options = Some(options);
        Ok(builder)
    }

    pub fn config(&self) -> &SpellingConfig {
        &self.config
    }
    pub fn is_result_computed(&self) -> bool {
        self.result.is_some()
    }

    /// Compute candidates once (ranked, if sorting was requested).
    ///
    /// On success the builder is frozen. A failed computation leaves it
    /// open.
    pub fn compute_all(&mut self) -> EnharmonicResult<&[Scale]> {
        let candidates = match self.result.take() {
            Some(candidates) => candidates,
            None => {
                let candidates = all_candidates(&self.scale, &self.config)?;
                match self.sort_options {
                    Some(_) => {
                        rank(&self.scale, candidates, self.config.accidental)
                    }
                    None => candidates,
                }
            }
        };
        Ok(self.result.insert(candidates).as_slice())
    }

    /// First ranked candidate, or an empty scale when there are none.
    pub fn compute_best(&mut self) -> EnharmonicResult<Scale> {
        if self.sort_options.is_none() {
            return Err(EnharmonicError::SortOptionsRequired);
        }
        Ok(self.compute_all()?.first().cloned().unwrap_or_default())
    }
}
impl Default for EnharmonicScaleBuilder {
    fn default() -> Self {
        Self::create()
    }
}
