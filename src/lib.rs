//! Tension spline interpolation over ordered 2-D data points.
//!
//! A tension spline is a piecewise-hyperbolic interpolating curve whose
//! tension parameter blends continuously between a natural cubic spline
//! (low tension) and a piecewise-linear interpolant (high tension). Raising
//! the tension suppresses the overshoot a plain cubic spline produces near
//! sharp data transitions.
//!
//! # Example
//! ```
//! use tension_spline::TensionSpline;
//! use assert_approx_eq::assert_approx_eq;
//!
//! let t = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = vec![0.0, 2.0, 1.0, 3.0, 0.0];
//! let spline = TensionSpline::new(t, y, 2.0).unwrap();
//!
//! let result = spline.evaluate(&[1.5, 2.5]).unwrap();
//! assert_approx_eq!(1.414221, result[0], 1e-6);
//! assert_approx_eq!(2.077973, result[1], 1e-6);
//! ```

mod error;
mod spline;

pub use error::TensionSplineError;
pub use spline::TensionSpline;
