use nalgebra::{DMatrix, DVector};

use super::{prepare, LinReg, LinRegError, LinearModel, Result};

/// Tikhonov regularization aka ridge regression
/// It is particularly useful to mitigate the problem of multicollinearity in
/// linear regression. Minimises `||y - Xw||^2 + alpha * ||w||^2`.
#[derive(Debug, Clone)]
pub struct TikhonovRegularization {
    /// Ridge parameter
    pub regularization_coeff: f64,
    /// Center the data and fit an intercept
    pub fit_intercept: bool,
}

impl TikhonovRegularization {
    /// Ridge regression with an intercept
    pub fn new(regularization_coeff: f64) -> Self {
        Self {
            regularization_coeff,
            fit_intercept: true,
        }
    }
}

impl LinReg for TikhonovRegularization {
    fn fit(&self, design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<LinearModel> {
        let data = prepare(design, targets, self.regularization_coeff, self.fit_intercept)?;

        let mut p0 = data.design.tr_mul(&data.design);
        for i in 0..p0.nrows() {
            p0[(i, i)] += self.regularization_coeff;
        }
        let p1 = p0.cholesky().ok_or(LinRegError::SingularSystem)?;
        let p2 = data.design.tr_mul(&data.targets);

        let coefficients = p1.solve(&p2);
        let intercept = data.intercept(&coefficients);
        trace!(
            "ridge alpha: {}, intercept: {}, coefficients: {}",
            self.regularization_coeff,
            intercept,
            coefficients
        );

        Ok(LinearModel::new(coefficients, intercept, 1, true))
    }
}
