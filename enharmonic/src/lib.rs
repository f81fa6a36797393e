//! Enharmonic equivalents of pitches and letter-consistent respelling of
//! scales.
//!
//! A scale, given as pitch classes spelled from the chromatic octave table,
//! is respelled so that each note takes the next natural letter and prefers
//! one accidental kind. Ambiguous scale lengths produce several candidates,
//! ranked by [spelling::weight].

pub mod builder;
pub mod error;
pub mod primitives;
pub mod spelling;

pub use builder::{EnharmonicScaleBuilder, SortOptions};
pub use error::{EnharmonicError, EnharmonicResult};
pub use primitives::{Accidental, Pitch, Scale};
pub use spelling::SpellingConfig;
