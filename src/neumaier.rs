use crate::traits::CompensatedSum;

/// Neumaier's variation of the Kahan algorithm, also referred to as
/// Kahan–Babuška summation.
///
/// Where [`KahanSum`] always subtracts the running sum from the addition
/// result, this accumulator compares magnitudes first and subtracts in the
/// order that loses fewer bits, so the correction stays meaningful even when
/// the incoming term is larger than the running sum. The correction is kept
/// separate and only added to the sum when the value is read.
///
/// [`KahanSum`]: crate::KahanSum
#[derive(Clone, Debug, Default)]
pub struct NeumaierSum {
    /// The current value of the sum.
    sum: f64,
    /// The running correction, applied at read time.
    c: f64,
}

impl NeumaierSum {
    /// Creates a new accumulator with value zero.
    pub fn new() -> Self {
        Self { sum: 0.0, c: 0.0 }
    }

    /// Creates a new accumulator with the given initial value.
    ///
    /// # Arguments
    /// - `x`: the initial value of the sum.
    pub fn with_value(x: f64) -> Self {
        Self { sum: x, c: 0.0 }
    }
}

impl CompensatedSum for NeumaierSum {
    #[inline(always)]
    fn add(&mut self, x: f64) {
        let t = self.sum + x;
        if self.sum.abs() >= x.abs() {
            self.c += (self.sum - t) + x;
        } else {
            self.c += (x - t) + self.sum;
        }
        self.sum = t;
    }

    #[inline(always)]
    fn value(&self) -> f64 {
        self.sum + self.c
    }

    fn set_value(&mut self, x: f64) {
        self.sum = x;
        self.c = 0.0;
    }
}
