//! Chain combination engine.
//!
//! A [`Chain`] holds an ordered sequence of augmentations and reduces an
//! input signal to a sequence of output variants by folding the sequence
//! through one of three strategies. The folds themselves are pure functions
//! over `(augmentations, input)` so each can be tested without a `Chain`.

use crate::augment::Augmentation;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// How a chain combines the outputs of its augmentations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Every apply-or-don't combination of the non-replacing augmentations.
    #[default]
    Combinatoric,
    /// Strict sequence: each stage replaces the prior working set entirely.
    Linear,
    /// Each augmentation applied to the original input only, side by side.
    Flat,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Combinatoric => write!(f, "combinatoric"),
            Self::Linear => write!(f, "linear"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

/// An ordered composition of augmentations evaluated by one strategy.
///
/// The augmentation order is the application order and is never reordered.
/// Chains hold no per-invocation state, so one chain may be invoked
/// repeatedly with different signals.
pub struct Chain {
    augmentations: Vec<Box<dyn Augmentation>>,
    strategy: Strategy,
}

impl Chain {
    /// Create an empty chain with the given strategy.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            augmentations: Vec::new(),
            strategy,
        }
    }

    /// Create a chain from an ordered list of augmentations.
    #[must_use]
    pub fn with_augmentations(
        strategy: Strategy,
        augmentations: Vec<Box<dyn Augmentation>>,
    ) -> Self {
        Self {
            augmentations,
            strategy,
        }
    }

    /// Append an augmentation to the end of the chain.
    pub fn append(&mut self, augmentation: Box<dyn Augmentation>) {
        self.augmentations.push(augmentation);
    }

    /// The strategy this chain folds with.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of augmentations in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.augmentations.len()
    }

    /// Whether the chain holds no augmentations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.augmentations.is_empty()
    }

    /// Reduce the input signal to a sequence of output variants.
    ///
    /// Any augmentation error aborts the whole invocation; partial results
    /// are discarded and the error surfaces unchanged.
    pub fn invoke(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<Vec<f32>>> {
        match self.strategy {
            Strategy::Combinatoric => combinatoric(&self.augmentations, samples, sample_rate),
            Strategy::Linear => linear(&self.augmentations, samples, sample_rate),
            Strategy::Flat => flat(&self.augmentations, samples, sample_rate),
        }
    }
}

/// Apply every augmentation to every variant produced so far, keeping the
/// originals for non-replacing augmentations.
///
/// With each non-replacing augmentation returning one output per input this
/// doubles the working set per stage (2^N variants for an N-stage chain);
/// replacing augmentations swap the working set for their batch instead.
/// An empty chain returns the input alone.
pub fn combinatoric(
    augmentations: &[Box<dyn Augmentation>],
    samples: &[f32],
    sample_rate: u32,
) -> Result<Vec<Vec<f32>>> {
    let mut working: Vec<Vec<f32>> = vec![samples.to_vec()];

    for augmentation in augmentations {
        // Batch order: all outputs of working[0], then working[1], ...
        let mut batch = Vec::new();
        for variant in &working {
            batch.extend(augmentation.apply(variant, sample_rate)?);
        }

        if augmentation.replaces() {
            working = batch;
        } else {
            working.append(&mut batch);
        }
    }

    Ok(working)
}

/// Apply augmentations in strict sequence; each stage's batch replaces the
/// working set regardless of the augmentation's `replaces` trait.
///
/// An empty chain returns the input alone; a chain of single-output stages
/// yields exactly one variant no matter how long it is.
pub fn linear(
    augmentations: &[Box<dyn Augmentation>],
    samples: &[f32],
    sample_rate: u32,
) -> Result<Vec<Vec<f32>>> {
    let mut working: Vec<Vec<f32>> = vec![samples.to_vec()];

    for augmentation in augmentations {
        let mut batch = Vec::new();
        for variant in &working {
            batch.extend(augmentation.apply(variant, sample_rate)?);
        }
        working = batch;
    }

    Ok(working)
}

/// Apply every augmentation independently to the original input only.
///
/// Useful for inspecting each effect in isolation. An empty chain returns
/// an empty sequence; there is no original passed through.
pub fn flat(
    augmentations: &[Box<dyn Augmentation>],
    samples: &[f32],
    sample_rate: u32,
) -> Result<Vec<Vec<f32>>> {
    let mut results = Vec::new();
    for augmentation in augmentations {
        results.extend(augmentation.apply(samples, sample_rate)?);
    }
    Ok(results)
}
