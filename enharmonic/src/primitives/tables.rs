//! Default note tables.

use once_cell::sync::Lazy;

use super::{parse_scale, Pitch};

const NATURAL_TOKENS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];
const OCTAVE_TOKENS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// The seven natural letters, defining letter adjacency.
pub static NATURAL_NOTES: Lazy<Vec<Pitch>> = Lazy::new(|| {
    parse_scale(NATURAL_TOKENS).expect("natural tokens are valid pitches")
});

/// The twelve chromatic slots, spelled with sharps.
pub static OCTAVE_NOTES: Lazy<Vec<Pitch>> = Lazy::new(|| {
    parse_scale(OCTAVE_TOKENS).expect("octave tokens are valid pitches")
});

/// Index of the given spelling inside a table, compared literally.
pub fn position_in(table: &[Pitch], pitch: &Pitch) -> Option<usize> {
    table.iter().position(|entry| entry == pitch)
}
