//! Elements, from which scales are spelled.
//!
//! Every note token is parsed into [Pitch] once, at the entry point.
//! Tables are plain sequences of pitches: the natural letters define
//! letter adjacency, the octave table defines chromatic positions.

pub mod accidental;
pub mod pitch;
pub mod tables;

pub use accidental::Accidental;
pub use pitch::{
    is_valid_pitch_token, parse_scale, render_scale, Pitch, Scale,
    MAX_ACCIDENTALS,
};
pub use tables::{position_in, NATURAL_NOTES, OCTAVE_NOTES};
