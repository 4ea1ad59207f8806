//! Regression metrics

use nalgebra::DVector;

/// Mean squared error between targets and predictions
pub fn mean_squared_error(targets: &DVector<f64>, predictions: &DVector<f64>) -> f64 {
    (targets - predictions).norm_squared() / targets.len() as f64
}

/// Coefficient of determination, the proportion of the target variance
/// explained by the predictions. Constant targets score 1.0 when predicted
/// exactly and 0.0 otherwise.
pub fn r2_score(targets: &DVector<f64>, predictions: &DVector<f64>) -> f64 {
    let ss_res = (targets - predictions).norm_squared();
    let ss_tot = targets.add_scalar(-targets.mean()).norm_squared();
    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}
