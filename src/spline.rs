use nalgebra::{DMatrix, DVector};

use crate::error::TensionSplineError;

/// Tension spline fitted over a strictly increasing knot sequence.
///
/// The tension parameter controls curve stiffness: large values pull the
/// curve toward the piecewise-linear interpolant, small values toward a
/// natural cubic spline. Fitting happens once, inside [TensionSpline::new];
/// the resulting value is immutable.
pub struct TensionSpline {
    t: Vec<f64>,
    y: Vec<f64>,
    tau: f64,
    h: Vec<f64>,
    z: Vec<f64>,
    fitted: bool,
}

impl TensionSpline {
    /// Fits a tension spline through the knots `(t[i], y[i])` with tension `tau`.
    ///
    /// Requires `t` and `y` of equal length, at least 3 knots, strictly
    /// increasing `t` and positive `tau`. Fails with
    /// [TensionSplineError::NumericDegeneracy] when `tau` is so small or so
    /// large relative to the knot spacing that the moment system cannot be
    /// built or solved in finite arithmetic.
    pub fn new(t: Vec<f64>, y: Vec<f64>, tau: f64) -> Result<Self, TensionSplineError> {
        if t.len() != y.len() {
            return Err(TensionSplineError::LengthMismatch {
                t_len: t.len(),
                y_len: y.len(),
            });
        }
        if tau <= 0.0 {
            return Err(TensionSplineError::NonPositiveTension { tau });
        }
        if t.windows(2).any(|w| w[1] - w[0] <= 0.0) {
            return Err(TensionSplineError::NonIncreasing);
        }
        if t.len() < 3 {
            return Err(TensionSplineError::InsufficientPoints { len: t.len() });
        }

        let mut spline = TensionSpline {
            t,
            y,
            tau,
            h: Vec::new(),
            z: Vec::new(),
            fitted: false,
        };
        spline.fit()?;
        Ok(spline)
    }

    /// Evaluates the spline at a batch of queries sorted ascending.
    ///
    /// Queries outside `[t[0], t[n]]` extrapolate with the first or last
    /// segment formula. The returned vector has the same length as `queries`.
    pub fn evaluate(&self, queries: &[f64]) -> Result<Vec<f64>, TensionSplineError> {
        if !self.fitted {
            return Err(TensionSplineError::NotFitted);
        }
        if queries.windows(2).any(|w| w[1] < w[0]) {
            return Err(TensionSplineError::NonIncreasing);
        }

        let mut results = Vec::with_capacity(queries.len());
        let mut index = 0;

        for &x in queries {
            index = self.find_interval_index_with_hint(index, x);
            results.push(self.eval_interval(x, index)?);
        }
        Ok(results)
    }

    /// Evaluates the spline at a single point.
    pub fn evaluate_at(&self, x: f64) -> Result<f64, TensionSplineError> {
        if !self.fitted {
            return Err(TensionSplineError::NotFitted);
        }
        let index = self.find_interval_index_bisect(x);
        self.eval_interval(x, index)
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    pub fn tau(&self) -> f64 {
        self.tau
    }

    fn fit(&mut self) -> Result<(), TensionSplineError> {
        let n = self.t.len() - 1;
        let tau = self.tau;
        let tau2 = tau * tau;

        self.h = self.t.windows(2).map(|w| w[1] - w[0]).collect();

        let mut a_ = Vec::with_capacity(n);
        let mut b_ = Vec::with_capacity(n);
        let mut g_ = Vec::with_capacity(n);

        for i in 0..n {
            let h = self.h[i];
            let sinh_tau_h = (tau * h).sinh();
            let cosh_tau_h = (tau * h).cosh();

            g_.push(tau2 * (self.y[i + 1] - self.y[i]) / h);
            a_.push(1.0 / h - tau / sinh_tau_h);
            b_.push(tau * cosh_tau_h / sinh_tau_h - 1.0 / h);
        }

        if a_.iter().chain(&b_).chain(&g_).any(|v| !v.is_finite()) {
            return Err(TensionSplineError::NumericDegeneracy);
        }

        let mut matrix = DMatrix::<f64>::zeros(n + 1, n + 1);
        let mut rhs = DVector::<f64>::zeros(n + 1);

        // Natural boundary condition: moments vanish at both endpoints.
        matrix[(0, 0)] = 1.0;
        matrix[(n, n)] = 1.0;
        for row in 1..n {
            matrix[(row, row - 1)] = a_[row - 1];
            matrix[(row, row)] = b_[row - 1] + b_[row];
            matrix[(row, row + 1)] = a_[row];
            rhs[row] = g_[row] - g_[row - 1];
        }

        let solution = match matrix.lu().solve(&rhs) {
            Some(solution) => solution,
            None => return Err(TensionSplineError::NumericDegeneracy),
        };
        if solution.iter().any(|z| !z.is_finite()) {
            return Err(TensionSplineError::NumericDegeneracy);
        }

        self.z = solution.iter().copied().collect();
        self.fitted = true;
        Ok(())
    }

    fn eval_interval(&self, x: f64, i: usize) -> Result<f64, TensionSplineError> {
        let tau = self.tau;
        let tau2 = tau * tau;

        let sinh_tau_h = (tau * self.h[i]).sinh();
        let sinh_right = (tau * (self.t[i + 1] - x)).sinh();
        let sinh_left = (tau * (x - self.t[i])).sinh();

        let term1 = (self.z[i] * sinh_right + self.z[i + 1] * sinh_left) / (tau2 * sinh_tau_h);
        let term2 = (self.y[i] - self.z[i] / tau2) * (self.t[i + 1] - x) / self.h[i];
        let term3 = (self.y[i + 1] - self.z[i + 1] / tau2) * (x - self.t[i]) / self.h[i];

        if !term1.is_finite() || !term2.is_finite() || !term3.is_finite() {
            return Err(TensionSplineError::NumericDegeneracy);
        }
        Ok(term1 + term2 + term3)
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if !self.is_in_interval_range(index_hint, x) {
            if index_hint + 1 < self.h.len() && self.is_in_interval_range(index_hint + 1, x) {
                return index_hint + 1;
            }
            return self.find_interval_index_bisect(x);
        }
        index_hint
    }

    // Returns an index in 0..h.len(); queries outside the knot range clamp
    // to the first or last interval, which extrapolates.
    fn find_interval_index_bisect(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.t.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.t[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn is_in_interval_range(&self, interval_index: usize, x: f64) -> bool {
        self.t[interval_index] <= x && x <= self.t[interval_index + 1]
    }
}
