use itertools::Itertools;

use super::{check_accidentals_limit, SpellingConfig};
use crate::{
    error::{EnharmonicError, EnharmonicResult},
    primitives::{position_in, Accidental, Pitch},
};

/// Natural letter of a raw token.
///
/// All sharps and flats are stripped, whatever their order, and the rest has
/// to be one of `naturals`.
///
/// # Example
/// ```
/// # use enharmonic::{spelling::natural_letter_of, primitives::NATURAL_NOTES};
/// let letter = natural_letter_of("Gbb", &NATURAL_NOTES).unwrap();
/// assert_eq!(letter.to_string(), "G");
/// assert!(natural_letter_of("H", &NATURAL_NOTES).is_err());
/// ```
pub fn natural_letter_of(
    token: &str,
    naturals: &[Pitch],
) -> EnharmonicResult<Pitch> {
    let stripped: String = token
        .chars()
        .filter(|ch| Accidental::from_symbol(*ch).is_none())
        .collect();
    let invalid = || EnharmonicError::InvalidNote(token.to_string());
    let natural: Pitch = stripped.parse().map_err(|_| invalid())?;
    match position_in(naturals, &natural) {
        Some(_) => Ok(natural),
        None => Err(invalid()),
    }
}

/// Index of the pitch's letter inside `naturals`.
pub(crate) fn letter_index(
    pitch: &Pitch,
    naturals: &[Pitch],
) -> EnharmonicResult<usize> {
    position_in(naturals, &pitch.natural())
        .ok_or_else(|| EnharmonicError::InvalidNote(pitch.to_string()))
}

/// Every other spelling of the same chromatic slot.
///
/// `pitch` has to be spelled exactly as in `config.octave`. Each natural
/// letter is tried with 1..=`config.max_accidentals` sharps, then with as
/// many flats. The result keeps that discovery order and never contains
/// `pitch` itself. `config.accidental` is ignored here.
///
/// # Example
/// ```
/// # use enharmonic::{
/// #     primitives::render_scale,
/// #     spelling::{equivalents, SpellingConfig},
/// # };
/// let config = SpellingConfig {
///     max_accidentals: 4,
///     ..Default::default()
/// };
/// let found = equivalents(&"C#".parse().unwrap(), &config).unwrap();
/// assert_eq!(render_scale(&found), "Db Ebbb Fbbbb A#### B##");
/// ```
pub fn equivalents(
    pitch: &Pitch,
    config: &SpellingConfig,
) -> EnharmonicResult<Vec<Pitch>> {
    let octave = &config.octave;
    let target = position_in(octave, pitch)
        .ok_or_else(|| EnharmonicError::InvalidNote(pitch.to_string()))?;
    check_accidentals_limit(config.max_accidentals, octave)?;

    let length = octave.len() as isize;
    let mut found = Vec::new();
    for natural in config.naturals.iter().filter(|n| *n != pitch) {
        let index = position_in(octave, natural).ok_or_else(|| {
            EnharmonicError::MissingTableEntry(natural.to_string())
        })? as isize;
        for accidental in [Accidental::Sharp, Accidental::Flat] {
            for count in 1..=config.max_accidentals {
                let shifted = (index + accidental.sign() * count as isize)
                    .rem_euclid(length);
                if shifted as usize != target {
                    continue;
                }
                let candidate =
                    Pitch::new(natural.letter(), accidental, count)?;
                if candidate != *pitch {
                    found.push(candidate);
                }
            }
        }
    }
    let found: Vec<Pitch> = found.into_iter().unique().collect();
    log::trace!("equivalents of {pitch}: {found:?}");
    Ok(found)
}
