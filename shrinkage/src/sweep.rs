use std::time::Instant;

use nalgebra::DMatrix;

use crate::{Family, Result, Subset};

/// Number of strengths on the sweep grid
pub const GRID_LEN: usize = 100;
/// Base 10 exponent of the smallest grid strength
const GRID_START_EXP: f64 = -4.0;
/// Base 10 exponent of the largest grid strength
const GRID_STOP_EXP: f64 = 4.0;

/// `n` values spaced evenly on a log scale from `10^start` to `10^stop`,
/// both ends included
pub fn log_space(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![10f64.powf(start)],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| 10f64.powf(start + step * i as f64))
                .collect()
        }
    }
}

/// The fixed grid of strengths every sweep runs over
pub fn strength_grid() -> Vec<f64> {
    log_space(GRID_START_EXP, GRID_STOP_EXP, GRID_LEN)
}

/// Coefficients of one family across a grid of strengths
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientPath {
    family: Family,
    alphas: Vec<f64>,
    /// One row per strength, one column per feature
    coefficients: DMatrix<f64>,
}

impl CoefficientPath {
    /// Family the path was fitted with
    #[inline(always)]
    pub fn family(&self) -> Family {
        self.family
    }

    /// The strengths, in ascending order
    #[inline(always)]
    pub fn alphas(&self) -> &[f64] {
        &self.alphas
    }

    /// Matrix of shape (strengths x features)
    #[inline(always)]
    pub fn coefficients(&self) -> &DMatrix<f64> {
        &self.coefficients
    }

    /// Number of features along the path
    #[inline(always)]
    pub fn n_features(&self) -> usize {
        self.coefficients.ncols()
    }

    /// (strength, coefficient) pairs of a single feature
    pub fn feature_series(&self, feature: usize) -> Vec<(f64, f64)> {
        self.alphas
            .iter()
            .zip(self.coefficients.column(feature).iter())
            .map(|(a, c)| (*a, *c))
            .collect()
    }

    /// Count of non-zero coefficients at each strength
    pub fn non_zero_counts(&self) -> Vec<usize> {
        self.coefficients
            .row_iter()
            .map(|row| row.iter().filter(|c| **c != 0.0).count())
            .collect()
    }

    /// Smallest and largest coefficient along the whole path
    pub fn value_range(&self) -> (f64, f64) {
        (self.coefficients.min(), self.coefficients.max())
    }
}

/// Fit `family` once per strength in `alphas` on `train`, each fit starting
/// from scratch
pub fn sweep(family: Family, train: &Subset, alphas: &[f64]) -> Result<CoefficientPath> {
    let t0 = Instant::now();
    let mut coefficients = DMatrix::zeros(alphas.len(), train.features.ncols());
    for (i, alpha) in alphas.iter().enumerate() {
        let model = family.fit(*alpha, train)?;
        coefficients.set_row(i, &model.coefficients().transpose());
    }
    info!(
        "{} sweep over {} strengths took {}ms",
        family,
        alphas.len(),
        t0.elapsed().as_millis()
    );

    Ok(CoefficientPath {
        family,
        alphas: alphas.to_vec(),
        coefficients,
    })
}

#[cfg(test)]
mod tests {
    use round::round;

    use super::*;
    use crate::{Dataset, Params, Split, TEST_FRACTION};

    fn train_subset(params: &Params) -> Subset {
        let ds = Dataset::generate(params).unwrap();
        Split::new(&ds, TEST_FRACTION, params.seed).train
    }

    #[test]
    fn grid_spans_eight_decades() {
        let grid = strength_grid();
        assert_eq!(grid.len(), GRID_LEN);
        assert_eq!(round(grid[0], 8), 1e-4);
        assert_eq!(round(grid[GRID_LEN - 1], 4), 1e4);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));

        // constant ratio between neighbours
        let ratio = grid[1] / grid[0];
        assert!(grid.windows(2).all(|w| (w[1] / w[0] - ratio).abs() < 1e-9));
    }

    #[test]
    fn log_space_edge_cases() {
        assert!(log_space(0.0, 1.0, 0).is_empty());
        assert_eq!(log_space(2.0, 5.0, 1), vec![100.0]);
        assert_eq!(log_space(0.0, 2.0, 3), vec![1.0, 10.0, 100.0]);
    }

    #[test]
    fn path_shape() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let params = Params::default();
        let train = train_subset(&params);
        let grid = strength_grid();

        for family in Family::ALL {
            let path = sweep(family, &train, &grid).unwrap();
            assert_eq!(path.family(), family);
            assert_eq!(path.coefficients().shape(), (GRID_LEN, params.n_features));
            assert_eq!(path.feature_series(3).len(), GRID_LEN);
            assert_eq!(path.feature_series(3)[0].0, grid[0]);
        }
    }

    #[test]
    fn ridge_never_zeroes() {
        let params = Params::default();
        let train = train_subset(&params);
        let path = sweep(Family::Ridge, &train, &strength_grid()).unwrap();

        assert!(path
            .non_zero_counts()
            .iter()
            .all(|n| *n == params.n_features));
    }

    #[test]
    fn lasso_sparsity_grows_with_strength() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let params = Params {
            n_features: 10,
            n_informative: 10,
            ..Default::default()
        };
        let train = train_subset(&params);
        let path = sweep(Family::Lasso, &train, &strength_grid()).unwrap();
        let counts = path.non_zero_counts();
        info!("lasso non-zero counts: {:?}", counts);

        assert_eq!(counts[0], params.n_features);
        assert_eq!(counts[GRID_LEN - 1], 0);
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn shrinkage_towards_zero() {
        let params = Params::default();
        let train = train_subset(&params);
        let grid = strength_grid();

        for family in Family::ALL {
            let path = sweep(family, &train, &grid).unwrap();
            let first = path.coefficients().row(0).norm();
            let last = path.coefficients().row(GRID_LEN - 1).norm();
            assert!(last < first, "{} did not shrink: {} -> {}", family, first, last);
        }
    }
}
