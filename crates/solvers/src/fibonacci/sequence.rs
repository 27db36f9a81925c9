/// Fibonacci numbers `F(0) = F(1) = 1, F(k) = F(k-1) + F(k-2)`, up to the
/// first one that reaches a target ratio.
///
/// Values are stored as `f64`: they are only ever used as placement ratios,
/// and the index stays bounded by the iteration cap.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Sequence {
    values: Vec<f64>,
}

impl Sequence {
    /// Returns `F(0) ..= F(n)` for the smallest `n` with `F(n) >= target`.
    ///
    /// Returns `None` if `n` would exceed `max_index`.
    pub(super) fn covering(target: f64, max_index: usize) -> Option<Self> {
        let mut values = vec![1.0];
        while values[values.len() - 1] < target {
            let n = values.len();
            if n > max_index {
                return None;
            }
            let next = if n < 2 {
                1.0
            } else {
                values[n - 1] + values[n - 2]
            };
            values.push(next);
        }
        Some(Self { values })
    }

    /// Returns the index `n` of the last number.
    pub(super) fn n(&self) -> usize {
        self.values.len() - 1
    }

    /// Returns `F(num) / F(den)`.
    pub(super) fn ratio(&self, num: usize, den: usize) -> f64 {
        self.values[num] / self.values[den]
    }

    /// Returns `F(n)`.
    pub(super) fn last(&self) -> f64 {
        self.values[self.n()]
    }
}
