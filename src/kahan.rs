use crate::traits::CompensatedSum;

/// A classic Kahan compensated summation accumulator.
///
/// Each addition recovers the low-order bits lost when a small term is added
/// to a much larger running sum and feeds them back into the next addition.
/// For sequences whose terms are small relative to the running total this is
/// enough to keep the result correctly rounded; summing `0.1` a thousand
/// times yields exactly `100.0`.
///
/// Known weakness: the correction is applied through the *next* incoming
/// term, so when a single step produces a rounding error larger than what
/// the next term can absorb (a huge transient followed by cancellation,
/// as in `1.0, 1e100, 1.0, -1e100`), the compensation itself is rounded
/// away and the result degrades. [`NeumaierSum`] and [`KleinSum`] exist
/// precisely to cover that case.
///
/// Reference: <https://en.wikipedia.org/wiki/Kahan_summation_algorithm>
///
/// [`NeumaierSum`]: crate::NeumaierSum
/// [`KleinSum`]: crate::KleinSum
#[derive(Clone, Debug, Default)]
pub struct KahanSum {
    /// The current value of the sum.
    sum: f64,
    /// The running correction.
    c: f64,
}

impl KahanSum {
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

impl CompensatedSum for KahanSum {
    #[inline(always)]
    fn add(&mut self, x: f64) {
        let y = x - self.c;
        let t = self.sum + y;
        self.c = (t - self.sum) - y;
        self.sum = t;
    }

    #[inline(always)]
    fn value(&self) -> f64 {
        self.sum
    }

    fn set_value(&mut self, x: f64) {
        self.sum = x;
        self.c = 0.0;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_exact_tenths() {
        let mut sum = KahanSum::new();
        sum.add_all(std::iter::repeat(0.1).take(1000));
        assert_eq!(sum.value(), 100.0);
    }

    #[test]
    fn test_small_terms_recovered() {
        // Four unit increments on a total whose ulp is 2: naive summation
        // would absorb every one of them.
        let mut sum = KahanSum::with_value(1e16);
        for _ in 0..4 {
            sum.add(1.0);
        }
        assert_eq!(sum.value(), 1e16 + 4.0);
    }

    #[test]
    fn test_set_value_drops_correction() {
        let mut sum = KahanSum::with_value(1e16);
        sum.add(1.0);
        sum.set_value(2.0);
        sum.add(1.0);
        assert_eq!(sum.value(), 3.0);
    }

    #[test]
    fn test_clone_carries_correction() {
        let mut sum = KahanSum::with_value(1e16);
        sum.add(1.0);
        let mut copy = sum.clone();
        sum.add(1.0);
        copy.add(1.0);
        assert_eq!(sum.value(), copy.value());
    }
}
