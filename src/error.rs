use std::{error::Error, fmt::Display};

/// Error conditions raised while fitting or evaluating a tension spline.
///
/// Variants carry the offending values where a caller can act on them.
#[derive(Debug, Clone, PartialEq)]
pub enum TensionSplineError {
    /// Abscissa and ordinate sequences have different lengths.
    LengthMismatch {
        t_len: usize,
        y_len: usize,
    },

    /// Tension parameter is zero or negative.
    NonPositiveTension {
        tau: f64,
    },

    /// Knot abscissas are not strictly increasing, or evaluation
    /// queries are not sorted ascending.
    NonIncreasing,

    /// Fewer than 3 knots were supplied.
    InsufficientPoints {
        len: usize,
    },

    /// A non-finite value appeared while building or solving the moment
    /// system, or while evaluating the basis. Caused by a tension that is
    /// too small or too large relative to the knot spacing.
    NumericDegeneracy,

    /// The spline has not been fitted. Unreachable through the public
    /// constructor, which always fits; kept as a defensive check.
    NotFitted,
}

impl Display for TensionSplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TensionSplineError::LengthMismatch { t_len, y_len } => {
                write!(f, "t and y must have the same length (got {} and {})", t_len, y_len)
            }
            TensionSplineError::NonPositiveTension { tau } => {
                write!(f, "tension must be positive (got {})", tau)
            }
            TensionSplineError::NonIncreasing => {
                write!(f, "abscissas must be sorted in increasing order")
            }
            TensionSplineError::InsufficientPoints { len } => {
                write!(f, "at least 3 knots are required (got {})", len)
            }
            TensionSplineError::NumericDegeneracy => {
                write!(f, "tension is too small or too large for the knot spacing")
            }
            TensionSplineError::NotFitted => {
                write!(f, "spline has not been fitted")
            }
        }
    }
}

impl Error for TensionSplineError {}
