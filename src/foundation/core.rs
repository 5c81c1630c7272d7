use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A span of time in milliseconds.
///
/// Durations are fractional because rescaling redistributes a requested total across steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Millis(pub f64);

impl Millis {
    /// Zero-length span.
    pub const ZERO: Self = Self(0.0);

    /// Return `Some` when `raw` is a finite, non-negative amount of time.
    pub fn non_negative(raw: f64) -> Option<Self> {
        (raw.is_finite() && raw >= 0.0).then_some(Self(raw))
    }

    /// Return `true` when the span is strictly positive.
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl Add for Millis {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Millis {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Millis {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Index of a managed text element within its container.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Name of an easing curve understood by the host's tween primitive (e.g. `linear`, `swing`).
///
/// The engine never evaluates the curve; it only forwards the name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Easing(pub String);

impl Easing {
    /// Create an easing name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the easing name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::new("linear")
    }
}

impl From<&str> for Easing {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
