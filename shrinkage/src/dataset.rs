use std::f64::consts::PI;

use nalgebra::{DMatrix, DVector};
use nanorand::{Rng, WyRand};

use crate::{Params, Result};

/// Scale of the informative ground truth coefficients
const COEF_SCALE: f64 = 100.0;

/// A synthetic linear regression problem with known coefficients
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: DMatrix<f64>,
    targets: DVector<f64>,
    ground_truth: DVector<f64>,
}

impl Dataset {
    /// Generate a dataset where only `n_informative` features drive the targets.
    ///
    /// Features are standard normal, informative coefficients are drawn
    /// uniformly from `[0, 100)` and the targets receive gaussian noise with
    /// standard deviation `noise`. Samples are shuffled and the feature columns
    /// permuted, so the informative features end up in random positions.
    /// The same params always produce the same dataset.
    pub fn generate(params: &Params) -> Result<Self> {
        params.validate()?;
        let mut rng = WyRand::new_seed(params.seed);

        let features = DMatrix::from_fn(params.n_samples, params.n_features, |_, _| {
            standard_normal(&mut rng)
        });
        let ground_truth = DVector::from_fn(params.n_features, |i, _| {
            if i < params.n_informative {
                COEF_SCALE * rng.generate::<f64>()
            } else {
                0.0
            }
        });
        let mut targets = &features * &ground_truth;
        if params.noise > 0.0 {
            targets
                .iter_mut()
                .for_each(|t| *t += params.noise * standard_normal(&mut rng));
        }

        let mut sample_order: Vec<usize> = (0..params.n_samples).collect();
        rng.shuffle(&mut sample_order);
        let mut feature_order: Vec<usize> = (0..params.n_features).collect();
        rng.shuffle(&mut feature_order);

        let features = features
            .select_rows(sample_order.iter())
            .select_columns(feature_order.iter());
        let targets = targets.select_rows(sample_order.iter());
        let ground_truth = ground_truth.select_rows(feature_order.iter());
        debug!(
            "generated {} x {} dataset, ground truth: {}",
            features.nrows(),
            features.ncols(),
            ground_truth.transpose()
        );

        Ok(Self {
            features,
            targets,
            ground_truth,
        })
    }

    /// Feature matrix, one row per sample
    #[inline(always)]
    pub fn features(&self) -> &DMatrix<f64> {
        &self.features
    }

    /// Target vector, one value per sample
    #[inline(always)]
    pub fn targets(&self) -> &DVector<f64> {
        &self.targets
    }

    /// Coefficients the targets were generated with
    #[inline(always)]
    pub fn ground_truth(&self) -> &DVector<f64> {
        &self.ground_truth
    }

    /// Number of samples
    #[inline(always)]
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of features
    #[inline(always)]
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}

/// Box-Muller transform over the uniform output of `rng`
fn standard_normal(rng: &mut WyRand) -> f64 {
    // shifted into (0, 1] so the logarithm stays finite
    let u1 = 1.0 - rng.generate::<f64>();
    let u2 = rng.generate::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
