use crate::traits::CompensatedSum;

/// Second-order compensated summation, also referred to as iterative
/// Kahan–Babuška summation.
///
/// Each addition applies the magnitude-branch update of [`NeumaierSum`]
/// twice: the rounding error of folding the incoming term into the running
/// sum is folded into a first-level correction, and the rounding error of
/// *that* addition is collected in a second-level correction. The doubled
/// arithmetic buys accuracy in adversarial sequences where the corrections
/// themselves span such different magnitudes that a single compensation
/// level rounds them away.
///
/// [`NeumaierSum`]: crate::NeumaierSum
#[derive(Clone, Debug, Default)]
pub struct KleinSum {
    /// The current value of the sum.
    sum: f64,
    /// The first-level correction, applied at read time.
    cs: f64,
    /// The second-level correction, applied at read time.
    ccs: f64,
}

impl KleinSum {
    /// Creates a new accumulator with value zero.
    pub fn new() -> Self {
        Self {
            sum: 0.0,
            cs: 0.0,
            ccs: 0.0,
        }
    }

    /// Creates a new accumulator with the given initial value.
    ///
    /// # Arguments
    /// - `x`: the initial value of the sum.
    pub fn with_value(x: f64) -> Self {
        Self {
            sum: x,
            cs: 0.0,
            ccs: 0.0,
        }
    }
}

impl CompensatedSum for KleinSum {
    #[inline(always)]
    fn add(&mut self, x: f64) {
        let t = self.sum + x;
        let c = if self.sum.abs() >= x.abs() {
            (self.sum - t) + x
        } else {
            (x - t) + self.sum
        };
        self.sum = t;

        let t = self.cs + c;
        let cc = if self.cs.abs() >= c.abs() {
            (self.cs - t) + c
        } else {
            (c - t) + self.cs
        };
        self.cs = t;
        self.ccs += cc;
    }

    #[inline(always)]
    fn value(&self) -> f64 {
        self.sum + self.cs + self.ccs
    }

    fn set_value(&mut self, x: f64) {
        self.sum = x;
        self.cs = 0.0;
        self.ccs = 0.0;
    }
}
