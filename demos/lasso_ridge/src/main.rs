#[macro_use]
extern crate log;

use std::io::{self, IsTerminal};

use path_plot::{coefficient_table, metrics_table, plot_paths};
use shrinkage::{Params, Report};

mod controls;
mod error;

use controls::Action;
use error::Result;

const IMG_PATH: &str = "img/lasso_ridge_paths.png";
const IMG_DIMS: (u32, u32) = (1500, 600);

pub(crate) fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // without a terminal there is nobody to answer prompts
    let interactive = io::stdin().is_terminal();
    let mut params = Params::default();

    loop {
        render(&params)?;
        if !interactive {
            break;
        }
        match controls::next_action(&params)? {
            Action::Quit => break,
            Action::Adjust(control) => controls::adjust(&mut params, control)?,
        }
    }
    Ok(())
}

/// Recompute everything for `params`, print the tables, then draw the chart
fn render(params: &Params) -> Result<()> {
    info!("rendering with {:?}", params);
    let report = Report::compute(params)?;

    print!("{}", summary(&report));

    plot_paths(&report, IMG_PATH, IMG_DIMS)?;
    println!("\nCoefficient Shrinkage Paths: {}", IMG_PATH);

    Ok(())
}

/// Header lines and both tables of a report
fn summary(report: &Report) -> String {
    let params = &report.params;
    let train = &report.split.train;

    let mut out = String::from("\nLasso vs Ridge Regression: Coefficient Shrinkage\n\n");
    out.push_str(&format!(
        "Generated Data: {} samples, {} features ({} informative)\n",
        params.n_samples, params.n_features, params.n_informative
    ));
    out.push_str(&format!(
        "Training shapes: X=({}, {}), y=({},)\n",
        train.features.nrows(),
        train.features.ncols(),
        train.targets.len()
    ));

    out.push_str(&format!(
        "\nModel Performance at Alpha = {:?}\n",
        params.alpha
    ));
    out.push_str(&metrics_table(&report.evaluation).build());
    out.push('\n');

    out.push_str("\nCoefficient Value Comparison\n");
    out.push_str(&coefficient_table(report.dataset.ground_truth(), &report.evaluation).build());
    out.push('\n');
    out
}
