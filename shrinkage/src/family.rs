use std::fmt;

use lin_reg::{Lasso, LinReg, LinearModel, TikhonovRegularization};

use crate::{Result, Subset};

/// The regularization families being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// L1 penalty, drives coefficients to exactly zero
    Lasso,
    /// L2 penalty, shrinks coefficients towards zero
    Ridge,
}

impl Family {
    /// Both families, in display order
    pub const ALL: [Family; 2] = [Family::Lasso, Family::Ridge];

    /// Fit this family with strength `alpha` on `data`
    pub fn fit(&self, alpha: f64, data: &Subset) -> Result<LinearModel> {
        let model = match self {
            Family::Lasso => Lasso::new(alpha).fit(&data.features, &data.targets)?,
            Family::Ridge => {
                TikhonovRegularization::new(alpha).fit(&data.features, &data.targets)?
            }
        };
        Ok(model)
    }

    /// Chart title naming the penalty
    pub fn title(&self) -> &'static str {
        match self {
            Family::Lasso => "Lasso Coefficients (L1)",
            Family::Ridge => "Ridge Coefficients (L2)",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Lasso => write!(f, "Lasso"),
            Family::Ridge => write!(f, "Ridge"),
        }
    }
}
