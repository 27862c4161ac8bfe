//! Searching collections of vectors for the candidate nearest to or farthest
//! from a target.

use crate::{
    float::FloatVectorExt,
    num::{Component, Float},
    vector::{average, translate_all},
};
use nalgebra::SVector;

/// The squared distance of the closest candidate seen so far in a streaming
/// nearest search.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Closeness<F> {
    sqr_distance: F,
}

/// The result of challenging a [`Closeness`] with a new candidate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CloserOutcome<F> {
    /// Whether the candidate was strictly closer than the previous best.
    pub is_closer: bool,
    /// The closeness of whichever side won the comparison.
    pub closeness: Closeness<F>,
}

/// A candidate found by [`nearest`], together with its closeness to the
/// target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nearest<F, const D: usize> {
    pub position: SVector<F, D>,
    pub closeness: Closeness<F>,
}

/// What [`find_closest`] and [`find_farthest`] return when there are no
/// candidates.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EmptyCandidates {
    /// Return the value the accumulator was seeded with: the infinitely far
    /// vector for [`closest`] and the zero vector for [`farthest`].
    #[default]
    Sentinel,
    /// Return [`None`].
    Absent,
}

/// Configuration parameters for nearest and farthest searches.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    pub empty_candidates: EmptyCandidates,
}

impl<F: Float> Closeness<F> {
    /// Creates a closeness corresponding to the given squared distance.
    pub fn new(sqr_distance: F) -> Self {
        Self { sqr_distance }
    }

    /// Creates the closeness of an infinitely distant position, which every
    /// finite candidate beats.
    pub fn unbounded() -> Self {
        Self::new(F::INFINITY)
    }

    /// Computes the closeness between the given position and origin.
    pub fn between<const D: usize>(position: &SVector<F, D>, origin: &SVector<F, D>) -> Self {
        Self::new(position.sqr_distance_from(origin))
    }

    pub fn sqr_distance(&self) -> F {
        self.sqr_distance
    }

    /// Compares the closeness of `position` to `origin` against this
    /// closeness. Only a strictly smaller squared distance counts as closer,
    /// and the returned closeness is the squared distance of the winner.
    pub fn challenge<const D: usize>(
        self,
        position: &SVector<F, D>,
        origin: &SVector<F, D>,
    ) -> CloserOutcome<F> {
        let candidate = Self::between(position, origin);
        let is_closer = candidate.sqr_distance < self.sqr_distance;
        CloserOutcome {
            is_closer,
            closeness: if is_closer { candidate } else { self },
        }
    }
}

impl<F: Float> Default for Closeness<F> {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Finds the candidate closest to `target`.
///
/// The best candidate starts out as a vector with all components infinite,
/// and a candidate replaces it only if it is strictly closer, so the first of
/// several equally close candidates wins. Without candidates the infinite
/// vector is returned.
pub fn closest<F: Float, const D: usize>(
    target: &SVector<F, D>,
    candidates: impl IntoIterator<Item = SVector<F, D>>,
) -> SVector<F, D> {
    candidates.into_iter().fold(
        SVector::from_element(F::INFINITY),
        |closest, candidate| {
            if candidate.sqr_distance_from(target) < closest.sqr_distance_from(target) {
                candidate
            } else {
                closest
            }
        },
    )
}

/// Finds the candidate farthest from `target`.
///
/// The best candidate starts out as the zero vector, and a candidate replaces
/// it only if it is strictly farther, so the first of several equally distant
/// candidates wins. The zero vector is returned without candidates, and also
/// when it is farther from `target` than every candidate.
pub fn farthest<F: Float, const D: usize>(
    target: &SVector<F, D>,
    candidates: impl IntoIterator<Item = SVector<F, D>>,
) -> SVector<F, D> {
    candidates
        .into_iter()
        .fold(SVector::zeros(), |farthest, candidate| {
            if candidate.sqr_distance_from(target) > farthest.sqr_distance_from(target) {
                candidate
            } else {
                farthest
            }
        })
}

/// Finds the candidate closest to `target` by threading a [`Closeness`]
/// through the candidates, or returns [`None`] if there are none.
///
/// Ties go to the earliest candidate.
pub fn nearest<F: Float, const D: usize>(
    target: &SVector<F, D>,
    candidates: impl IntoIterator<Item = SVector<F, D>>,
) -> Option<Nearest<F, D>> {
    candidates.into_iter().fold(None, |best: Option<Nearest<F, D>>, candidate| {
        match best {
            None => Some(Nearest {
                position: candidate,
                closeness: Closeness::between(&candidate, target),
            }),
            Some(best) => {
                let outcome = best.closeness.challenge(&candidate, target);
                Some(if outcome.is_closer {
                    Nearest {
                        position: candidate,
                        closeness: outcome.closeness,
                    }
                } else {
                    best
                })
            }
        }
    })
}

/// Like [`closest`], but with the result for an empty candidate set decided
/// by the given configuration.
pub fn find_closest<F: Float, const D: usize>(
    target: &SVector<F, D>,
    candidates: impl IntoIterator<Item = SVector<F, D>>,
    config: &SearchConfig,
) -> Option<SVector<F, D>> {
    let mut candidates = candidates.into_iter().peekable();
    if candidates.peek().is_none() {
        log::trace!(
            "No candidates for closest vector search, resolving as {:?}",
            config.empty_candidates
        );
        return match config.empty_candidates {
            EmptyCandidates::Sentinel => Some(SVector::from_element(F::INFINITY)),
            EmptyCandidates::Absent => None,
        };
    }
    Some(closest(target, candidates))
}

/// Like [`farthest`], but with the result for an empty candidate set decided
/// by the given configuration.
pub fn find_farthest<F: Float, const D: usize>(
    target: &SVector<F, D>,
    candidates: impl IntoIterator<Item = SVector<F, D>>,
    config: &SearchConfig,
) -> Option<SVector<F, D>> {
    let mut candidates = candidates.into_iter().peekable();
    if candidates.peek().is_none() {
        log::trace!(
            "No candidates for farthest vector search, resolving as {:?}",
            config.empty_candidates
        );
        return match config.empty_candidates {
            EmptyCandidates::Sentinel => Some(SVector::zeros()),
            EmptyCandidates::Absent => None,
        };
    }
    Some(farthest(target, candidates))
}

/// Collection operations on iterators over vectors.
pub trait VectorIteratorExt<T: Component, const D: usize>:
    Iterator<Item = SVector<T, D>> + Sized
{
    /// See [`average`].
    fn average(self) -> SVector<T, D> {
        average(self)
    }

    /// See [`translate_all`].
    fn translated(self, translation: &SVector<T, D>) -> Vec<SVector<T, D>> {
        translate_all(self, translation)
    }

    /// See [`closest`].
    fn closest_to(self, target: &SVector<T, D>) -> SVector<T, D>
    where
        T: Float,
    {
        closest(target, self)
    }

    /// See [`farthest`].
    fn farthest_from(self, target: &SVector<T, D>) -> SVector<T, D>
    where
        T: Float,
    {
        farthest(target, self)
    }
}

impl<T, I, const D: usize> VectorIteratorExt<T, D> for I
where
    T: Component,
    I: Iterator<Item = SVector<T, D>>,
{
}
