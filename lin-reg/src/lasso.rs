use nalgebra::{DMatrix, DVector};

use super::{prepare, LinReg, LinRegError, LinearModel, Result};

/// Lasso regression, solved by cyclic coordinate descent.
/// Minimises `1 / (2 * n_samples) * ||y - Xw||^2 + alpha * ||w||_1`,
/// which drives weak coefficients to exactly zero.
///
/// See [Regularization Paths for Generalized Linear Models via Coordinate
/// Descent](http://www.jstatsoft.org/v33/i01/paper)
#[derive(Debug, Clone)]
pub struct Lasso {
    /// Strength of the L1 penalty
    pub alpha: f64,
    /// Upper bound on full passes over the coefficients
    pub max_iterations: usize,
    /// Relative tolerance on coefficient updates and on the duality gap
    pub tolerance: f64,
    /// Center the data and fit an intercept
    pub fit_intercept: bool,
}

impl Lasso {
    /// Lasso with an intercept and the default solver settings
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            max_iterations: 10_000,
            tolerance: 1e-4,
            fit_intercept: true,
        }
    }

    fn check_params(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(LinRegError::InvalidParams(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(LinRegError::InvalidParams(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl LinReg for Lasso {
    fn fit(&self, design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<LinearModel> {
        self.check_params()?;
        let data = prepare(design, targets, self.alpha, self.fit_intercept)?;

        let (coefficients, gap, n_steps, converged) = coordinate_descent(
            &data.design,
            &data.targets,
            self.alpha,
            self.tolerance,
            self.max_iterations,
        );
        if !converged {
            debug!(
                "lasso alpha {} did not converge after {} steps, duality gap: {}",
                self.alpha, n_steps, gap
            );
        }
        let intercept = data.intercept(&coefficients);

        Ok(LinearModel::new(coefficients, intercept, n_steps, converged))
    }
}

/// Returns the coefficients, the final duality gap, the number of passes and
/// whether the gap fell below the tolerance
fn coordinate_descent(
    x: &DMatrix<f64>,
    y: &DVector<f64>,
    alpha: f64,
    tol: f64,
    max_steps: usize,
) -> (DVector<f64>, f64, usize, bool) {
    let n_features = x.ncols();
    let l1_reg = alpha * x.nrows() as f64;
    let mut w = DVector::<f64>::zeros(n_features);
    // residuals `y - X * w`, kept up to date as coefficients change
    let mut r = y.clone();
    let norm_cols_x: Vec<f64> = x.column_iter().map(|col| col.norm_squared()).collect();
    let gap_tol = tol * y.norm_squared();
    let mut gap = gap_tol + 1.0;
    let mut n_steps = 0;

    while n_steps < max_steps {
        let mut w_max = 0.0_f64;
        let mut d_w_max = 0.0_f64;
        for j in 0..n_features {
            if norm_cols_x[j] == 0.0 {
                continue;
            }
            let w_j = w[j];
            let col = x.column(j);
            if w_j != 0.0 {
                r.axpy(w_j, &col, 1.0);
            }
            let rho = col.dot(&r);
            w[j] = soft_threshold(rho, l1_reg) / norm_cols_x[j];
            if w[j] != 0.0 {
                r.axpy(-w[j], &col, 1.0);
            }
            d_w_max = d_w_max.max((w[j] - w_j).abs());
            w_max = w_max.max(w[j].abs());
        }
        n_steps += 1;

        if w_max == 0.0 || d_w_max / w_max < tol || n_steps == max_steps {
            gap = duality_gap(x, y, &w, &r, l1_reg);
            if gap <= gap_tol {
                return (w, gap, n_steps, true);
            }
        }
    }

    (w, gap, n_steps, false)
}

#[inline(always)]
fn soft_threshold(value: f64, threshold: f64) -> f64 {
    value.signum() * (value.abs() - threshold).max(0.0)
}

fn duality_gap(
    x: &DMatrix<f64>,
    y: &DVector<f64>,
    w: &DVector<f64>,
    r: &DVector<f64>,
    l1_reg: f64,
) -> f64 {
    let xtr = x.tr_mul(r);
    let dual_norm_xtr = xtr.amax();
    let r_norm2 = r.norm_squared();

    let (scale, mut gap) = if dual_norm_xtr > l1_reg {
        let scale = l1_reg / dual_norm_xtr;
        (scale, 0.5 * (r_norm2 + r_norm2 * scale * scale))
    } else {
        (1.0, r_norm2)
    };
    gap += l1_reg * w.lp_norm(1) - scale * r.dot(y);
    gap
}

#[cfg(test)]
mod tests {
    use round::round;

    use super::*;

    fn objective(x: &DMatrix<f64>, y: &DVector<f64>, model: &LinearModel, alpha: f64) -> f64 {
        let residuals = y - model.predict(x);
        residuals.norm_squared() / (2.0 * x.nrows() as f64)
            + alpha * model.coefficients().lp_norm(1)
    }

    #[test]
    fn lasso_toy_example() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let x = DMatrix::from_vec(3, 1, vec![-1.0, 0.0, 1.0]);
        let y = DVector::from_vec(vec![-1.0, 0.0, 1.0]);

        for (alpha, expected) in [(0.1, 0.85), (0.5, 0.25), (1.0, 0.0)] {
            let model = Lasso::new(alpha).fit(&x, &y).unwrap();
            info!("alpha: {}, coefficients: {}", alpha, model.coefficients());

            assert!(model.converged());
            assert_eq!(round(model.coefficients()[0], 6), expected);
            assert_eq!(round(model.intercept(), 6), 0.0);
        }
    }

    #[test]
    fn large_penalty_zeroes_everything() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let x = DMatrix::from_vec(
            5,
            2,
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 1.0, 0.0, 1.0, 3.0, 2.0],
        );
        let y = DVector::from_vec(vec![1.0, 2.0, 4.0, 7.0, 8.0]);

        let model = Lasso::new(1000.0).fit(&x, &y).unwrap();
        assert_eq!(model.non_zero_count(), 0);
        assert_eq!(round(model.intercept(), 6), y.mean());
        assert_eq!(model.n_steps(), 1);
    }

    #[test]
    fn small_penalty_approaches_least_squares() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // y = 1 + 2 * x0 - x1
        let x = DMatrix::from_vec(
            6,
            2,
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 1.0, 0.0, 1.0, 3.0, 2.0, 4.0],
        );
        let y = DVector::from_fn(6, |i, _| 1.0 + 2.0 * x[(i, 0)] - x[(i, 1)]);

        let mut lasso = Lasso::new(1e-8);
        lasso.tolerance = 1e-10;
        let model = lasso.fit(&x, &y).unwrap();

        assert_eq!(round(model.coefficients()[0], 4), 2.0);
        assert_eq!(round(model.coefficients()[1], 4), -1.0);
        assert_eq!(round(model.intercept(), 4), 1.0);
    }

    #[test]
    fn coordinate_descent_lowers_objective() {
        let x = DMatrix::from_vec(
            5,
            2,
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 1.0, 0.0, 1.0, 3.0, 2.0],
        );
        let y = DVector::from_vec(vec![1.0, 2.0, 4.0, 7.0, 8.0]);
        let alpha = 0.3;

        let model = Lasso::new(alpha).fit(&x, &y).unwrap();
        let zero = LinearModel::new(DVector::zeros(2), y.mean(), 0, false);

        assert!(objective(&x, &y, &model, alpha) < objective(&x, &y, &zero, alpha));
    }

    #[test]
    fn iteration_cap_is_not_an_error() {
        let x = DMatrix::from_vec(
            4,
            2,
            vec![1.0, 2.0, 3.0, 4.0, 1.1, 1.9, 3.2, 3.9],
        );
        // explained by the second, nearly collinear column, which a single
        // pass cannot reach
        let y = DVector::from_vec(vec![1.1, 1.9, 3.2, 3.9]);

        let mut lasso = Lasso::new(1e-6);
        lasso.max_iterations = 1;
        let model = lasso.fit(&x, &y).unwrap();

        assert_eq!(model.n_steps(), 1);
        assert!(!model.converged());
    }

    #[test]
    fn invalid_solver_settings() {
        let x = DMatrix::from_element(2, 1, 1.0);
        let y = DVector::from_element(2, 1.0);

        let mut lasso = Lasso::new(1.0);
        lasso.max_iterations = 0;
        assert!(matches!(lasso.fit(&x, &y), Err(LinRegError::InvalidParams(_))));

        let mut lasso = Lasso::new(1.0);
        lasso.tolerance = 0.0;
        assert!(matches!(lasso.fit(&x, &y), Err(LinRegError::InvalidParams(_))));
    }
}
