//! Axis scales and the value transforms applied before binning.

use std::fmt;

/// Axis scale handed to the plotting backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log,
}

impl AxisScale {
    /// Backend-facing name (`"linear"` / `"log"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Log => "log",
        }
    }
}

impl fmt::Display for AxisScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transform applied to raw values before a density estimate or histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTransform {
    Identity,
    /// Inverse hyperbolic sine: linear near zero, logarithmic in the tails,
    /// defined for negative values.
    Arcsinh,
}

impl ValueTransform {
    #[inline]
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Arcsinh => value.asinh(),
        }
    }

    /// Transform a whole series into a fresh buffer.
    #[must_use]
    pub fn apply_all(self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.apply(v)).collect()
    }
}

impl fmt::Display for ValueTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("identity"),
            Self::Arcsinh => f.write_str("arcsinh"),
        }
    }
}
