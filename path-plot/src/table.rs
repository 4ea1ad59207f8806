//! Terminal tables for the metrics at the selected strength

use nalgebra::DVector;
use shrinkage::Evaluation;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table,
};

/// The coefficient comparison shows at most this many features
pub const MAX_COEFFICIENT_ROWS: usize = 20;

/// Builder for rounded box-drawing tables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableBuilder {
    caption: Option<String>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableBuilder {
    /// Creates a table with the given column headers
    pub fn new(headers: &[&str]) -> Self {
        Self {
            caption: None,
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: vec![],
        }
    }

    /// Text printed on its own line above the table
    pub fn set_caption(&mut self, caption: &str) {
        self.caption = Some(caption.to_string());
    }

    /// Adds a data row
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Text shown above the table, if any
    #[inline(always)]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Column headers
    #[inline(always)]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, headers excluded
    #[inline(always)]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows, headers excluded
    #[inline(always)]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render the caption and table
    pub fn build(&self) -> String {
        if self.headers.is_empty() && self.rows.is_empty() {
            return String::new();
        }

        let mut data: Vec<Vec<String>> = Vec::with_capacity(self.rows.len() + 1);
        data.push(self.headers.clone());
        data.extend(self.rows.iter().cloned());

        let table = Table::from_iter(data)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();

        match &self.caption {
            Some(caption) => format!("{}\n{}", caption, table),
            None => table,
        }
    }
}

/// Errors, fit quality and sparsity of both families
pub fn metrics_table(evaluation: &Evaluation) -> TableBuilder {
    let (l, r) = (&evaluation.lasso, &evaluation.ridge);
    let mut table = TableBuilder::new(&["Metric", "Lasso", "Ridge"]);
    let rows = [
        ("Train MSE", l.train_mse, r.train_mse),
        ("Test MSE", l.test_mse, r.test_mse),
        ("Train R2", l.train_r2, r.train_r2),
        ("Test R2", l.test_r2, r.test_r2),
    ];
    for (name, lasso, ridge) in rows {
        table.add_row(vec![
            name.to_string(),
            format!("{:.4}", lasso),
            format!("{:.4}", ridge),
        ]);
    }
    table.add_row(vec![
        "Non-Zero Coeffs".to_string(),
        format!("{}/{}", l.non_zero, l.n_features()),
        format!("{}/{}", r.non_zero, r.n_features()),
    ]);
    table
}

/// Fitted coefficients next to the ground truth, truncated to the first
/// `MAX_COEFFICIENT_ROWS` features
pub fn coefficient_table(ground_truth: &DVector<f64>, evaluation: &Evaluation) -> TableBuilder {
    let mut table =
        TableBuilder::new(&["Feature", "True Data Coeff", "Lasso Coeff", "Ridge Coeff"]);
    let n_features = ground_truth.len();
    if n_features > MAX_COEFFICIENT_ROWS {
        table.set_caption(&format!(
            "Showing first {} coefficients:",
            MAX_COEFFICIENT_ROWS
        ));
    }

    let lasso = &evaluation.lasso.coefficients;
    let ridge = &evaluation.ridge.coefficients;
    for i in 0..n_features.min(MAX_COEFFICIENT_ROWS) {
        table.add_row(vec![
            format!("F{}", i),
            format!("{:.4}", ground_truth[i]),
            format!("{:.4}", lasso[i]),
            format!("{:.4}", ridge[i]),
        ]);
    }
    table
}
