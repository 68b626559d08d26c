use crate::traits::CompensatedSum;
use std::cell::{Cell, RefCell};

/// A pairwise (tree) summation accumulator.
///
/// Instead of compensating every addition, terms are buffered raw and the
/// total is computed on demand by recursively splitting the buffer in two
/// and summing the halves, so each partial addition combines operands of
/// comparable magnitude and the accumulated rounding error grows with the
/// logarithm of the number of terms instead of linearly. When the buffer
/// reaches [`CAPACITY`](PairwiseSum::CAPACITY) terms it is collapsed: the
/// tree sum becomes the sole buffered term, so memory stays bounded and
/// subsequent additions restart cleanly from the collapsed estimate.
///
/// Reading the value refreshes an internal cache through interior
/// mutability, which makes this type `!Sync`; like every accumulator it
/// must be driven by one thread at a time.
///
/// Reference: <https://en.wikipedia.org/wiki/Pairwise_summation>
#[derive(Debug)]
pub struct PairwiseSum {
    /// Raw terms waiting to be summed.
    buffer: RefCell<Vec<f64>>,
    /// The cached result of the last tree summation.
    value: Cell<f64>,
    /// Whether `value` reflects the buffer contents.
    has_value: Cell<bool>,
}

impl PairwiseSum {
    /// The maximum number of buffered terms. Reaching it triggers a
    /// collapse of the buffer into a single partial sum.
    pub const CAPACITY: usize = 8192;

    /// Segments of at most this many terms are summed directly.
    const BASE_LEN: usize = 2;

    /// Creates a new accumulator with value zero.
    pub fn new() -> Self {
        Self {
            buffer: RefCell::new(Vec::with_capacity(Self::CAPACITY)),
            value: Cell::new(0.0),
            has_value: Cell::new(true),
        }
    }

    /// Creates a new accumulator with the given initial value.
    ///
    /// # Arguments
    /// - `x`: the initial value of the sum.
    pub fn with_value(x: f64) -> Self {
        let mut buffer = Vec::with_capacity(Self::CAPACITY);
        buffer.push(x);
        Self {
            buffer: RefCell::new(buffer),
            value: Cell::new(x),
            has_value: Cell::new(true),
        }
    }

    /// Sums a segment by recursive halving, splitting one past the
    /// midpoint.
    fn tree_sum(terms: &[f64]) -> f64 {
        let len = terms.len();
        if len <= Self::BASE_LEN {
            return terms.iter().sum();
        }
        let mid = len / 2 + 1;
        Self::tree_sum(&terms[..mid]) + Self::tree_sum(&terms[mid..])
    }

    /// Brings the cached estimate up to date with a tree summation of the
    /// buffer, then collapses the buffer onto the estimate if requested or
    /// if the buffer has reached capacity.
    fn refresh(&self, collapse: bool) -> f64 {
        if !self.has_value.get() {
            let buffer = self.buffer.borrow();
            let value = if buffer.is_empty() {
                0.0
            } else {
                Self::tree_sum(&buffer)
            };
            self.value.set(value);
            self.has_value.set(true);
        }

        let mut buffer = self.buffer.borrow_mut();
        if collapse || buffer.len() >= Self::CAPACITY {
            buffer.clear();
            buffer.push(self.value.get());
        }

        self.value.get()
    }
}

impl Clone for PairwiseSum {
    fn clone(&self) -> Self {
        let mut buffer = Vec::with_capacity(Self::CAPACITY);
        buffer.extend_from_slice(&self.buffer.borrow());
        Self {
            buffer: RefCell::new(buffer),
            value: self.value.clone(),
            has_value: self.has_value.clone(),
        }
    }
}

impl Default for PairwiseSum {
    fn default() -> Self {
        Self::new()
    }
}

impl CompensatedSum for PairwiseSum {
    fn add(&mut self, x: f64) {
        if self.buffer.get_mut().len() == Self::CAPACITY {
            self.refresh(true);
        }
        let buffer = self.buffer.get_mut();
        buffer.push(x);
        debug_assert!(buffer.len() <= Self::CAPACITY);
        self.has_value.set(false);
    }

    fn value(&self) -> f64 {
        self.refresh(false)
    }

    fn set_value(&mut self, x: f64) {
        let buffer = self.buffer.get_mut();
        buffer.clear();
        // The buffer alone must represent the whole sum, exactly as after
        // a capacity collapse, or the next refresh would drop `x`.
        buffer.push(x);
        self.value.set(x);
        self.has_value.set(true);
    }

    fn clear(&mut self) {
        self.buffer.get_mut().clear();
        self.value.set(0.0);
        self.has_value.set(true);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_value() {
        assert_eq!(PairwiseSum::new().value(), 0.0);
    }

    #[test]
    fn test_buffer_never_exceeds_capacity() {
        let mut sum = PairwiseSum::new();
        for i in 0..2 * PairwiseSum::CAPACITY + 3 {
            sum.add(i as f64);
            assert!(sum.buffer.borrow().len() <= PairwiseSum::CAPACITY);
        }
    }

    #[test]
    fn test_read_below_capacity_keeps_buffer() {
        let mut sum = PairwiseSum::new();
        sum.add_all([1.0, 2.0, 3.0]);
        assert_eq!(sum.value(), 6.0);
        assert_eq!(sum.buffer.borrow().len(), 3);
    }

    #[test]
    fn test_read_at_capacity_collapses_to_single_term() {
        let mut sum = PairwiseSum::new();
        sum.add_all((0..PairwiseSum::CAPACITY).map(|i| i as f64));
        let value = sum.value();
        assert_eq!(sum.buffer.borrow().len(), 1);
        assert_eq!(sum.buffer.borrow()[0], value);
    }

    #[test]
    fn test_add_past_capacity_continues_from_estimate() {
        let mut sum = PairwiseSum::new();
        sum.add_all(std::iter::repeat(1.0).take(PairwiseSum::CAPACITY));
        sum.add(1.0);
        assert_eq!(sum.buffer.borrow().len(), 2);
        // Integer totals below 2^53 make every partial sum exact.
        assert_eq!(sum.value(), (PairwiseSum::CAPACITY + 1) as f64);
    }

    #[test]
    fn test_clear_restores_pristine_state() {
        let mut sum = PairwiseSum::new();
        sum.add_all([1.0, 2.0]);
        sum.clear();
        assert!(sum.buffer.borrow().is_empty());
        assert_eq!(sum.value(), 0.0);
        sum.add(1.5);
        assert_eq!(sum.value(), 1.5);
    }

    #[test]
    fn test_set_value_seeds_buffer() {
        let mut sum = PairwiseSum::new();
        sum.add_all([10.0, 20.0]);
        sum.set_value(5.0);
        sum.add(1.0);
        assert_eq!(sum.value(), 6.0);
    }

    #[test]
    fn test_clone_preserves_pending_terms() {
        let mut sum = PairwiseSum::new();
        sum.add_all([1.0, 2.0, 3.0]);
        let copy = sum.clone();
        sum.add(100.0);
        assert_eq!(copy.value(), 6.0);
        assert_eq!(sum.value(), 106.0);
        assert!(copy.buffer.borrow().capacity() >= PairwiseSum::CAPACITY);
    }

    #[test]
    fn test_tree_sum_segments() {
        // len <= 2 sums directly, longer segments split one past the
        // midpoint: [1, 2, 3] becomes (1 + 2) + 3.
        assert_eq!(PairwiseSum::tree_sum(&[]), 0.0);
        assert_eq!(PairwiseSum::tree_sum(&[1.5]), 1.5);
        assert_eq!(PairwiseSum::tree_sum(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(PairwiseSum::tree_sum(&[1.0, 2.0, 3.0, 4.0, 5.0]), 15.0);
    }
}
