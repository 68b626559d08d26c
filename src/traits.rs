/// An accumulator for compensated floating-point summation.
///
/// A compensated sum offers reduced numerical error when summing finite
/// precision values in comparison to naive summation. Implementations keep
/// auxiliary state alongside the running total and fold it back so that
/// low-order bits lost to rounding are not lost to the result.
///
/// All implementations accept any `f64`, including infinities and NaN:
/// non-finite values flow through the implementation's ordinary arithmetic
/// and propagate to the result following IEEE 754 rules, without being
/// special-cased and without raising errors.
///
/// The `Clone` supertrait is part of the contract: cloning must produce a
/// deep, independently-mutable copy with the same observable value *and* the
/// same internal compensation state, so that continuing the summation on the
/// copy yields results identical to continuing on the original.
///
/// Accumulators are meant to be owned and driven by a single thread;
/// concurrent access to one instance must be serialized by the caller.
pub trait CompensatedSum: Clone {
    /// Adds `x` to the running total.
    ///
    /// # Arguments
    /// - `x`: the value to add to the sum.
    fn add(&mut self, x: f64);

    /// Returns the best current estimate of the running total.
    ///
    /// Repeated calls without intervening [`add`](CompensatedSum::add)s
    /// return the same value, and reading never degrades the accuracy of
    /// subsequent summation.
    fn value(&self) -> f64;

    /// Sets the running total to `x`, discarding all compensation state.
    ///
    /// An addition sequence performed afterwards behaves exactly as on a
    /// fresh accumulator constructed with initial value `x`.
    ///
    /// # Arguments
    /// - `x`: the new value of the sum.
    fn set_value(&mut self, x: f64);

    /// Sets the sum to zero and resets initial state.
    fn clear(&mut self) {
        self.set_value(0.0);
    }

    /// Adds every value yielded by `values`, in order.
    ///
    /// # Arguments
    /// - `values`: the values to add to the sum.
    fn add_all(&mut self, values: impl IntoIterator<Item = f64>) {
        for x in values {
            self.add(x);
        }
    }
}
