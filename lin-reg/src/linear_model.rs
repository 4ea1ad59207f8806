use nalgebra::{DMatrix, DVector};

/// A fitted linear model `y = X * w + b`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    coefficients: DVector<f64>,
    intercept: f64,
    n_steps: usize,
    converged: bool,
}

impl LinearModel {
    pub(crate) fn new(
        coefficients: DVector<f64>,
        intercept: f64,
        n_steps: usize,
        converged: bool,
    ) -> Self {
        Self {
            coefficients,
            intercept,
            n_steps,
            converged,
        }
    }

    /// Predict one target per row of `design`
    pub fn predict(&self, design: &DMatrix<f64>) -> DVector<f64> {
        (design * &self.coefficients).add_scalar(self.intercept)
    }

    /// The fitted coefficients, one per feature
    #[inline(always)]
    pub fn coefficients(&self) -> &DVector<f64> {
        &self.coefficients
    }

    /// The fitted intercept, 0.0 if none was fitted
    #[inline(always)]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of solver iterations, 1 for closed form solutions
    #[inline(always)]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Whether the solver reached its tolerance
    #[inline(always)]
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Number of coefficients not exactly equal to zero
    pub fn non_zero_count(&self) -> usize {
        self.coefficients.iter().filter(|w| **w != 0.0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_adds_intercept() {
        let model = LinearModel::new(DVector::from_vec(vec![2.0, 0.0, -1.0]), 0.5, 1, true);
        let design = DMatrix::from_row_slice(2, 3, &[1.0, 5.0, 1.0, 0.0, 3.0, 2.0]);

        assert_eq!(model.predict(&design), DVector::from_vec(vec![1.5, -1.5]));
        assert_eq!(model.non_zero_count(), 2);
    }

    #[test]
    fn counts_exact_zeros_only() {
        let coefficients = DVector::from_vec(vec![0.0, 1e-300, -0.0, -2.0]);
        let model = LinearModel::new(coefficients, 0.0, 1, true);
        assert_eq!(model.non_zero_count(), 2);
    }
}
