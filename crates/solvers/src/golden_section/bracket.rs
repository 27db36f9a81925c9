use extremum_core::Bounds;

/// The inverse golden ratio: φ⁻¹ = (√5 - 1) / 2
pub(super) const INV_PHI: f64 = 0.618_033_988_749_895;

/// Golden section search bracket.
///
/// Maintains the outer interval `[low, high]` and two interior points
/// positioned according to the golden ratio.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    pub(super) low: f64,

    pub(super) high: f64,

    /// Inner left point at `high - φ⁻¹ * width`.
    pub(super) inner_left: f64,

    /// Inner right point at `low + φ⁻¹ * width`.
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket from bounds with interior points positioned by the golden ratio.
    pub(super) fn new(bounds: &Bounds) -> Self {
        let [low, high] = bounds.as_array();
        let width = high - low;
        Self {
            low,
            high,
            inner_left: high - INV_PHI * width,
            inner_right: low + INV_PHI * width,
        }
    }

    /// Returns the width of the current bounds.
    pub(super) fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Shrinks the bounds to `[low, inner_right]`.
    ///
    /// The old `inner_left` becomes the new `inner_right`, and a new
    /// `inner_left` is placed in the narrowed bracket.
    pub(super) fn shrink_right(&mut self) {
        self.high = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.high - INV_PHI * self.width();
    }

    /// Shrinks the bounds to `[inner_left, high]`.
    ///
    /// The old `inner_right` becomes the new `inner_left`, and a new
    /// `inner_right` is placed in the narrowed bracket.
    pub(super) fn shrink_left(&mut self) {
        self.low = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.low + INV_PHI * self.width();
    }
}
