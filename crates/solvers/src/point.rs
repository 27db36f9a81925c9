/// A probe with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The objective value at x.
    pub value: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, value: f64) -> Self {
        Self { x, value }
    }
}
