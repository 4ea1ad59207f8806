//! Penalized linear regression solvers

#![deny(unused_imports)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

use nalgebra::{DMatrix, DVector};

mod error;
mod lasso;
mod linear_model;
mod tikhonov_regularization;

pub use error::{LinRegError, Result};
pub use lasso::Lasso;
pub use linear_model::LinearModel;
pub use tikhonov_regularization::TikhonovRegularization;

/// Generic way of performing penalized linear regression
pub trait LinReg: Clone {
    /// Fit a linear model, mapping the design matrix onto the targets
    ///
    /// # Parameters
    /// design: Input data with one row per sample and one column per feature
    /// targets: One target value per sample
    fn fit(&self, design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<LinearModel>;
}

/// Design matrix and targets with their column means removed
pub(crate) struct Centered {
    pub(crate) design: DMatrix<f64>,
    pub(crate) targets: DVector<f64>,
    pub(crate) design_means: DVector<f64>,
    pub(crate) target_mean: f64,
}

impl Centered {
    /// Intercept that restores the removed means for the given coefficients
    pub(crate) fn intercept(&self, coefficients: &DVector<f64>) -> f64 {
        self.target_mean - self.design_means.dot(coefficients)
    }
}

/// Validate shapes and penalty, then center the data if requested
pub(crate) fn prepare(
    design: &DMatrix<f64>,
    targets: &DVector<f64>,
    penalty: f64,
    fit_intercept: bool,
) -> Result<Centered> {
    if design.nrows() == 0 || design.ncols() == 0 {
        return Err(LinRegError::EmptyDesign);
    }
    if design.nrows() != targets.len() {
        return Err(LinRegError::ShapeMismatch {
            rows: design.nrows(),
            targets: targets.len(),
        });
    }
    if !penalty.is_finite() || penalty < 0.0 {
        return Err(LinRegError::InvalidParams(format!(
            "penalty must be finite and non-negative, got {}",
            penalty
        )));
    }

    if !fit_intercept {
        return Ok(Centered {
            design: design.clone(),
            targets: targets.clone(),
            design_means: DVector::zeros(design.ncols()),
            target_mean: 0.0,
        });
    }

    let design_means = design.row_mean().transpose();
    let target_mean = targets.mean();
    let mut centered = design.clone();
    for (j, mut col) in centered.column_iter_mut().enumerate() {
        col.add_scalar_mut(-design_means[j]);
    }

    Ok(Centered {
        design: centered,
        targets: targets.add_scalar(-target_mean),
        design_means,
        target_mean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_centers_columns() {
        let design = DMatrix::from_row_slice(3, 2, &[1.0, 10.0, 2.0, 20.0, 3.0, 30.0]);
        let targets = DVector::from_vec(vec![1.0, 2.0, 6.0]);

        let c = prepare(&design, &targets, 1.0, true).unwrap();
        assert_eq!(c.design_means, DVector::from_vec(vec![2.0, 20.0]));
        assert_eq!(c.target_mean, 3.0);
        assert_eq!(c.design.column(0).sum(), 0.0);
        assert_eq!(c.design.column(1).sum(), 0.0);
        assert_eq!(c.targets, DVector::from_vec(vec![-2.0, -1.0, 3.0]));
    }

    #[test]
    fn prepare_rejects_bad_input() {
        let design = DMatrix::from_element(3, 2, 1.0);
        let targets = DVector::from_element(2, 1.0);
        assert!(matches!(
            prepare(&design, &targets, 1.0, true),
            Err(LinRegError::ShapeMismatch { rows: 3, targets: 2 })
        ));

        let targets = DVector::from_element(3, 1.0);
        assert!(matches!(
            prepare(&design, &targets, -1.0, true),
            Err(LinRegError::InvalidParams(_))
        ));
        assert!(matches!(
            prepare(&design, &targets, f64::NAN, true),
            Err(LinRegError::InvalidParams(_))
        ));

        let empty = DMatrix::<f64>::zeros(0, 2);
        assert!(matches!(
            prepare(&empty, &DVector::zeros(0), 1.0, true),
            Err(LinRegError::EmptyDesign)
        ));
    }
}
