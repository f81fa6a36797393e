//! Candidate enumeration and ranking.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{respell, SpellingConfig};
use crate::{
    error::EnharmonicResult,
    primitives::{render_scale, Accidental, Pitch, Scale},
};

/// Respelled scale paired with its [weight].
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub scale: Scale,
    pub weight: u32,
}

/// All respellings worth comparing.
///
/// Scales outside `naturals - 2 ..= naturals + 1` notes are returned as is.
/// Pentatonic and heptatonic scales (for seven letters) have exactly one
/// letter progression. The rest get one candidate per exceptional shift
/// index. Equal candidates are not merged.
pub fn all_candidates(
    scale: &[Pitch],
    config: &SpellingConfig,
) -> EnharmonicResult<Vec<Scale>> {
    let letters = config.naturals.len();
    let length = scale.len();
    if length + 2 < letters || length > letters + 1 {
        return Ok(vec![scale.to_vec()]);
    }
    if length + 2 == letters || length == letters {
        return Ok(vec![respell(scale, config, None)?]);
    }
    (0..length)
        .map(|index| respell(scale, config, Some(index)))
        .collect()
}

/// Score of a candidate: lower is simpler.
///
/// `1000` per accidental kind present, `100` per accidental opposite to
/// `accidental`, `10` per accidental at all, and `1` per note whose spelling
/// differs from `original`.
pub fn weight(
    original: &[Pitch],
    candidate: &[Pitch],
    accidental: Accidental,
) -> u32 {
    let count = |kind: Accidental| -> usize {
        candidate.iter().map(|pitch| pitch.count_of(kind)).sum()
    };
    let preferred = count(accidental);
    let opposite = count(accidental.opposite());
    let kinds = [preferred, opposite].iter().filter(|n| **n > 0).count();
    let shifts = original
        .iter()
        .zip(candidate)
        .filter(|(source, respelled)| source != respelled)
        .count();
    let total = preferred + opposite;
    (1000 * kinds + 100 * opposite + 10 * total + shifts) as u32
}

/// Weigh candidates and sort them, best first. Ties keep their order.
pub fn weigh(
    original: &[Pitch],
    candidates: Vec<Scale>,
    accidental: Accidental,
) -> Vec<Candidate> {
    let weighed = candidates
        .into_iter()
        .map(|scale| Candidate {
            weight: weight(original, &scale, accidental),
            scale,
        })
        .sorted_by_key(|candidate| candidate.weight)
        .collect::<Vec<_>>();
    log::debug!(
        "ranked [{}]: {}",
        render_scale(original),
        weighed
            .iter()
            .map(|c| format!("[{}]={}", render_scale(&c.scale), c.weight))
            .join(", ")
    );
    weighed
}

pub fn rank(
    original: &[Pitch],
    candidates: Vec<Scale>,
    accidental: Accidental,
) -> Vec<Scale> {
    weigh(original, candidates, accidental)
        .into_iter()
        .map(|candidate| candidate.scale)
        .collect()
}

/// The lowest-weight respelling, or an empty scale for an empty input.
pub fn best(
    scale: &[Pitch],
    config: &SpellingConfig,
) -> EnharmonicResult<Scale> {
    let candidates = all_candidates(scale, config)?;
    Ok(rank(scale, candidates, config.accidental)
        .into_iter()
        .next()
        .unwrap_or_default())
}
