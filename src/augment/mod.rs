//! Augmentations: parameterized transforms producing one or more variants.
//!
//! Every augmentation is constructed with validated parameters and applied
//! through the [`Augmentation`] trait. The chain engine in [`crate::chain`]
//! never needs to know which concrete augmentation it is folding over.

mod filter;
mod noise;
mod stretch;
mod windowing;

pub use filter::{Equalizer, HighPass, LowPass};
pub use noise::BackgroundNoise;
pub use stretch::{PitchShift, TimeStretch};
pub use windowing::Windowing;

use crate::error::Result;

/// A single audio transform plugged into a chain.
///
/// `apply` must be a pure function of its inputs from the chain's
/// perspective: implementations may use temporary external resources, but
/// those must be invisible to the caller and released on every exit path.
pub trait Augmentation: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Whether this augmentation's outputs replace the input rather than
    /// supplement it. Windowing is the canonical replacing augmentation.
    fn replaces(&self) -> bool {
        false
    }

    /// Apply the augmentation, producing zero or more output variants.
    ///
    /// An empty result means "this input contributed no variants" and is
    /// handled by the chain fold, not treated as an error.
    fn apply(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<Vec<f32>>>;
}
