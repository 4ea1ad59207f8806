use nalgebra::{DMatrix, DVector};
use nanorand::{Rng, WyRand};

use crate::Dataset;

/// Fraction of samples held out for testing
pub const TEST_FRACTION: f64 = 0.2;

/// Rows of a dataset used together for fitting or scoring
#[derive(Debug, Clone, PartialEq)]
pub struct Subset {
    /// Feature rows
    pub features: DMatrix<f64>,
    /// Matching targets
    pub targets: DVector<f64>,
}

impl Subset {
    /// Number of rows
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the subset holds no rows
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Disjoint train and test partitions of a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// Rows the models are fitted on
    pub train: Subset,
    /// Held out rows
    pub test: Subset,
}

impl Split {
    /// Shuffle the samples with `seed` and hold out `ceil(test_fraction * n)`
    /// of them for testing
    pub fn new(dataset: &Dataset, test_fraction: f64, seed: u64) -> Self {
        let n_samples = dataset.n_samples();
        let n_test = ((test_fraction * n_samples as f64).ceil() as usize).min(n_samples);

        let mut rng = WyRand::new_seed(seed);
        let mut order: Vec<usize> = (0..n_samples).collect();
        rng.shuffle(&mut order);
        let (test_idx, train_idx) = order.split_at(n_test);

        Self {
            train: subset(dataset, train_idx),
            test: subset(dataset, test_idx),
        }
    }
}

fn subset(dataset: &Dataset, rows: &[usize]) -> Subset {
    Subset {
        features: dataset.features().select_rows(rows.iter()),
        targets: dataset.targets().select_rows(rows.iter()),
    }
}
