//! Letter-consistent respelling of a whole scale.
//!
//! Every note after the first one is expected to take the letter that
//! follows the letter of the previous *respelled* note. Scales which do not
//! fill the letter cycle evenly need one wider (or zero) step somewhere: its
//! position is the exceptional shift index.

use super::{
    equivalence::{equivalents, letter_index},
    SpellingConfig,
};
use crate::{
    error::EnharmonicResult,
    primitives::{render_scale, Accidental, Pitch, Scale},
};

/// Respell `scale` towards `config.accidental`.
///
/// Always yields one note per input note, each one sounding the same as
/// its source. A note is kept as is, when no equivalent with the wanted
/// letter and the preferred accidental exists.
pub fn respell(
    scale: &[Pitch],
    config: &SpellingConfig,
    exceptional_shift_index: Option<usize>,
) -> EnharmonicResult<Scale> {
    let naturals = &config.naturals;
    let pentatonic = naturals.len().checked_sub(2) == Some(scale.len());
    let mut result: Scale = Vec::with_capacity(scale.len());

    for (index, current) in scale.iter().enumerate() {
        let previous = match result.last() {
            None => {
                result.push(prefer_single_accidental(current, config)?);
                continue;
            }
            Some(previous) => previous,
        };
        let previous_index = letter_index(previous, naturals)?;
        let current_index = letter_index(current, naturals)?;
        let found = equivalents(current, config)?;

        if pentatonic && current_index != previous_index {
            result.push(single_accidental_among(
                current,
                &found,
                config.accidental,
            ));
            continue;
        }

        let shift = match exceptional_shift_index == Some(index) {
            true => naturals.len() as isize - scale.len() as isize + 1,
            false => 1,
        };
        let next_letter = &naturals[(previous_index as isize + shift)
            .rem_euclid(naturals.len() as isize)
            as usize];
        let chosen = found
            .into_iter()
            .find(|candidate| {
                candidate.natural() == *next_letter
                    && candidate.accidental() == Some(config.accidental)
            })
            .unwrap_or_else(|| current.clone());
        log::trace!(
            "{index}: {current} after {previous}, wants {next_letter}: {chosen}"
        );
        result.push(chosen);
    }

    log::debug!(
        "respelled [{}] with {} (shift at {:?}): [{}]",
        render_scale(scale),
        config.accidental,
        exceptional_shift_index,
        render_scale(&result)
    );
    debug_assert_eq!(result.len(), scale.len());
    Ok(result)
}

/// Replace a note spelled against the bias by its one-accidental
/// equivalent of the preferred kind, if there is one.
fn prefer_single_accidental(
    pitch: &Pitch,
    config: &SpellingConfig,
) -> EnharmonicResult<Pitch> {
    let found = match pitch.accidental() == Some(config.accidental.opposite())
    {
        true => equivalents(pitch, config)?,
        false => Vec::new(),
    };
    Ok(single_accidental_among(pitch, &found, config.accidental))
}

/// Same as [prefer_single_accidental], with the equivalents already known.
fn single_accidental_among(
    pitch: &Pitch,
    found: &[Pitch],
    accidental: Accidental,
) -> Pitch {
    if pitch.accidental() != Some(accidental.opposite()) {
        return pitch.clone();
    }
    found
        .iter()
        .find(|candidate| candidate.count_of(accidental) == 1)
        .cloned()
        .unwrap_or_else(|| pitch.clone())
}
