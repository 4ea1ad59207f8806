use std::time::Instant;

use crate::{
    evaluate, strength_grid, sweep, CoefficientPath, Dataset, Evaluation, Family, Params,
    Result, Split, TEST_FRACTION,
};

/// Everything one render pass computes, recomputed from scratch for every
/// change of `Params`
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Parameters the report was computed with
    pub params: Params,
    /// The generated data
    pub dataset: Dataset,
    /// Train / test partition of `dataset`
    pub split: Split,
    /// L1 coefficients across the strength grid
    pub lasso_path: CoefficientPath,
    /// L2 coefficients across the strength grid
    pub ridge_path: CoefficientPath,
    /// Metrics at the selected strength
    pub evaluation: Evaluation,
}

impl Report {
    /// Generate, split, sweep and evaluate
    pub fn compute(params: &Params) -> Result<Self> {
        let t0 = Instant::now();
        let dataset = Dataset::generate(params)?;
        info!(
            "generated {} samples, {} features ({} informative)",
            dataset.n_samples(),
            dataset.n_features(),
            params.n_informative
        );

        let split = Split::new(&dataset, TEST_FRACTION, params.seed);
        let grid = strength_grid();
        let lasso_path = sweep(Family::Lasso, &split.train, &grid)?;
        let ridge_path = sweep(Family::Ridge, &split.train, &grid)?;
        let evaluation = evaluate(&split, params.alpha)?;
        info!("render pass done in {}ms", t0.elapsed().as_millis());

        Ok(Self {
            params: params.clone(),
            dataset,
            split,
            lasso_path,
            ridge_path,
            evaluation,
        })
    }

    /// The path of the given family
    pub fn path(&self, family: Family) -> &CoefficientPath {
        match family {
            Family::Lasso => &self.lasso_path,
            Family::Ridge => &self.ridge_path,
        }
    }
}
