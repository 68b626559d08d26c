mod kahan;
pub use kahan::*;

mod klein;
pub use klein::*;

mod naive;
pub use naive::*;

mod neumaier;
pub use neumaier::*;

mod pairwise;
pub use pairwise::*;

/// Traits for interacting with summation accumulators.
pub mod traits;

/// Use `use compensated_accumulators::prelude::*;` to import all
/// accumulators and traits.
pub mod prelude {
    use super::*;
    pub use traits::*;

    pub use super::{KahanSum, KleinSum, NaiveSum, NeumaierSum, PairwiseSum};
}
