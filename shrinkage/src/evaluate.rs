use nalgebra::DVector;

use crate::{
    metrics::{mean_squared_error, r2_score},
    Family, Result, Split,
};

/// Scores of one family fitted at a single strength
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyMetrics {
    /// Family that was fitted
    pub family: Family,
    /// Mean squared error on the train split
    pub train_mse: f64,
    /// Mean squared error on the test split
    pub test_mse: f64,
    /// R^2 on the train split
    pub train_r2: f64,
    /// R^2 on the test split
    pub test_r2: f64,
    /// Coefficients not exactly equal to zero
    pub non_zero: usize,
    /// The fitted coefficients
    pub coefficients: DVector<f64>,
}

impl FamilyMetrics {
    /// Total number of coefficients
    #[inline(always)]
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }
}

/// Both families scored at the same strength
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The strength both families were fitted with
    pub alpha: f64,
    /// L1 results
    pub lasso: FamilyMetrics,
    /// L2 results
    pub ridge: FamilyMetrics,
}

/// Fit both families at `alpha` on the train split and score them on both splits
pub fn evaluate(split: &Split, alpha: f64) -> Result<Evaluation> {
    Ok(Evaluation {
        alpha,
        lasso: evaluate_family(Family::Lasso, split, alpha)?,
        ridge: evaluate_family(Family::Ridge, split, alpha)?,
    })
}

fn evaluate_family(family: Family, split: &Split, alpha: f64) -> Result<FamilyMetrics> {
    let model = family.fit(alpha, &split.train)?;
    let train_preds = model.predict(&split.train.features);
    let test_preds = model.predict(&split.test.features);

    let metrics = FamilyMetrics {
        family,
        train_mse: mean_squared_error(&split.train.targets, &train_preds),
        test_mse: mean_squared_error(&split.test.targets, &test_preds),
        train_r2: r2_score(&split.train.targets, &train_preds),
        test_r2: r2_score(&split.test.targets, &test_preds),
        non_zero: model.non_zero_count(),
        coefficients: model.coefficients().clone(),
    };
    debug!("{} at alpha {}: {:?}", family, alpha, metrics);
    Ok(metrics)
}
