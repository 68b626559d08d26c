use crate::traits::CompensatedSum;

/// Plain running-sum accumulator with no compensation.
///
/// This is the accuracy *baseline* the compensated accumulators are measured
/// against, not a correctness-preserving option: every addition may discard
/// low-order bits, and the lost bits are gone for good. Summing `1.0` into a
/// total of `1e16` leaves the total unchanged. Prefer [`NeumaierSum`] or
/// [`KleinSum`] for real workloads.
///
/// [`NeumaierSum`]: crate::NeumaierSum
/// [`KleinSum`]: crate::KleinSum
#[derive(Clone, Debug, Default)]
pub struct NaiveSum {
    value: f64,
}

impl NaiveSum {
    /// Creates a new accumulator with value zero.
    pub fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Creates a new accumulator with the given initial value.
    ///
    /// # Arguments
    /// - `x`: the initial value of the sum.
    pub fn with_value(x: f64) -> Self {
        Self { value: x }
    }
}

impl CompensatedSum for NaiveSum {
    #[inline(always)]
    fn add(&mut self, x: f64) {
        self.value += x;
    }

    #[inline(always)]
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, x: f64) {
        self.value = x;
    }
}
