use std::ops::RangeInclusive;

use crate::{Result, ShrinkageError};

/// The parameters of one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    /// Number of generated samples
    pub n_samples: usize,
    /// Number of generated features
    pub n_features: usize,
    /// Number of features with a non-zero ground truth coefficient
    pub n_informative: usize,
    /// Standard deviation of the gaussian noise added to the targets
    pub noise: f64,
    /// Seed for data generation and the train / test split
    pub seed: u64,
    /// Regularization strength for the detailed metrics,
    /// one of `Params::ALPHA_CHOICES`
    pub alpha: f64,
}

impl Params {
    /// Allowed sample counts
    pub const N_SAMPLES_RANGE: RangeInclusive<usize> = 50..=1000;
    /// Sample counts move in steps of this size
    pub const N_SAMPLES_STEP: usize = 50;
    /// Allowed feature counts
    pub const N_FEATURES_RANGE: RangeInclusive<usize> = 2..=50;
    /// Allowed noise levels
    pub const NOISE_RANGE: RangeInclusive<f64> = 0.0..=50.0;
    /// Strengths selectable for the detailed metrics
    pub const ALPHA_CHOICES: [f64; 8] = [0.0001, 0.001, 0.01, 0.1, 1.0, 10.0, 100.0, 1000.0];

    /// Informative feature count used whenever the feature count changes
    #[inline(always)]
    pub fn default_informative(n_features: usize) -> usize {
        (n_features / 2).max(1)
    }

    /// Allowed informative feature counts for the current feature count
    #[inline(always)]
    pub fn informative_range(&self) -> RangeInclusive<usize> {
        1..=self.n_features
    }

    /// Change the feature count and reset the informative count to its default
    pub fn set_n_features(&mut self, n_features: usize) {
        self.n_features = n_features;
        self.n_informative = Self::default_informative(n_features);
    }

    /// Position of `alpha` within `ALPHA_CHOICES`
    pub fn alpha_index(&self) -> Option<usize> {
        Self::ALPHA_CHOICES.iter().position(|a| *a == self.alpha)
    }

    /// Reject combinations the interactive controls would never produce
    pub fn validate(&self) -> Result<()> {
        if !Self::N_SAMPLES_RANGE.contains(&self.n_samples)
            || self.n_samples % Self::N_SAMPLES_STEP != 0
        {
            return Err(ShrinkageError::InvalidParams(format!(
                "n_samples must be a multiple of {} in {:?}, got {}",
                Self::N_SAMPLES_STEP,
                Self::N_SAMPLES_RANGE,
                self.n_samples
            )));
        }
        if !Self::N_FEATURES_RANGE.contains(&self.n_features) {
            return Err(ShrinkageError::InvalidParams(format!(
                "n_features must be in {:?}, got {}",
                Self::N_FEATURES_RANGE,
                self.n_features
            )));
        }
        if !self.informative_range().contains(&self.n_informative) {
            return Err(ShrinkageError::InvalidParams(format!(
                "n_informative must be in {:?}, got {}",
                self.informative_range(),
                self.n_informative
            )));
        }
        if !Self::NOISE_RANGE.contains(&self.noise) {
            return Err(ShrinkageError::InvalidParams(format!(
                "noise must be in {:?}, got {}",
                Self::NOISE_RANGE,
                self.noise
            )));
        }
        if self.alpha_index().is_none() {
            return Err(ShrinkageError::InvalidParams(format!(
                "alpha must be one of {:?}, got {}",
                Self::ALPHA_CHOICES,
                self.alpha
            )));
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        let n_features = 20;
        Self {
            n_samples: 200,
            n_features,
            n_informative: Self::default_informative(n_features),
            noise: 10.0,
            seed: 42,
            alpha: 1.0,
        }
    }
}
