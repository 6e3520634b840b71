use crate::metric::Metric;
use crate::pairs::{MatchedPair, MismatchedPair};
use crate::resolver::Resolver;
use crate::store::EmbeddingStore;
use thiserror::Error;

/// Lookup failures abort the whole run; a partial accuracy ratio over an
/// incomplete pass is not meaningful.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("no embedding indexed for {identity} #{image}")]
    UnknownKey { identity: String, image: u32 },
    #[error("embedding index {index} out of range (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Classification tally for one dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub correct: usize,
    pub incorrect: usize,
}

impl Outcome {
    fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }

    /// Fraction of correctly classified pairs. An empty dataset has a
    /// ratio of 0.0 by convention.
    pub fn ratio(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total() as f64
    }
}

/// Accuracy results for one evaluation run, one [`Outcome`] per dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    pub matched: Outcome,
    pub mismatched: Outcome,
}

/// Evaluate the verification decision rule over both pair lists.
///
/// A pair is classified "same identity" iff its distance is strictly
/// below `threshold`. Matched pairs are correct when classified same,
/// mismatched pairs when classified different. The two lists may have
/// independent lengths, including zero; each outcome covers exactly its
/// own list. Pure: identical inputs always produce identical outcomes.
pub fn evaluate<R: Resolver>(
    matched: &[MatchedPair],
    mismatched: &[MismatchedPair],
    resolver: &R,
    store: &EmbeddingStore,
    metric: Metric,
    threshold: f32,
) -> Result<Verification, EvalError> {
    let mut matched_outcome = Outcome::default();
    for pair in matched {
        let d = pair_distance(
            (&pair.identity, pair.first),
            (&pair.identity, pair.second),
            resolver,
            store,
            metric,
        )?;
        matched_outcome.record(d < threshold);
    }

    let mut mismatched_outcome = Outcome::default();
    for pair in mismatched {
        let d = pair_distance(
            (&pair.first_identity, pair.first),
            (&pair.second_identity, pair.second),
            resolver,
            store,
            metric,
        )?;
        mismatched_outcome.record(d >= threshold);
    }

    Ok(Verification {
        matched: matched_outcome,
        mismatched: mismatched_outcome,
    })
}

fn pair_distance<R: Resolver>(
    a: (&str, u32),
    b: (&str, u32),
    resolver: &R,
    store: &EmbeddingStore,
    metric: Metric,
) -> Result<f32, EvalError> {
    let idx_a = resolve(resolver, a)?;
    let idx_b = resolve(resolver, b)?;
    Ok(metric.distance(store.get(idx_a)?, store.get(idx_b)?))
}

fn resolve<R: Resolver>(resolver: &R, key: (&str, u32)) -> Result<usize, EvalError> {
    resolver
        .resolve(key.0, key.1)
        .ok_or_else(|| EvalError::UnknownKey {
            identity: key.0.to_string(),
            image: key.1,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_ratio_empty_is_zero() {
        let outcome = Outcome::default();
        assert_eq!(outcome.total(), 0);
        assert_eq!(outcome.ratio(), 0.0);
    }

    #[test]
    fn test_outcome_counts() {
        let mut outcome = Outcome::default();
        outcome.record(true);
        outcome.record(true);
        outcome.record(false);
        assert_eq!(outcome.correct, 2);
        assert_eq!(outcome.incorrect, 1);
        assert_eq!(outcome.total(), 3);
        assert!((outcome.ratio() - 2.0 / 3.0).abs() < 1e-12);
    }
}
