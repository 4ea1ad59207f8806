//! Coefficient path charts

use std::{fmt::Display, fs, path::Path};

use plotters::{coord::Shift, prelude::*};
use shrinkage::{CoefficientPath, Family, Report};

use crate::{PlotError, Result};

/// Number of dashes in the vertical marker at the selected strength
const MARKER_DASHES: usize = 30;

/// Render the Lasso and Ridge coefficient paths side by side into `filename`,
/// with a dashed marker at the selected strength
pub fn plot_paths(report: &Report, filename: &str, dims: (u32, u32)) -> Result<()> {
    if let Some(parent) = Path::new(filename).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let root_area = BitMapBackend::new(filename, dims).into_drawing_area();
    root_area.fill(&WHITE).map_err(drawing)?;
    let root_area = root_area
        .titled("Coefficient Shrinkage Paths", ("sans-serif", 30).into_font())
        .map_err(drawing)?;

    let areas = root_area.split_evenly((1, 2));
    for (area, family) in areas.iter().zip(Family::ALL) {
        draw_path(area, report.path(family), report.params.alpha)?;
    }
    root_area.present().map_err(drawing)?;

    info!("successfully plotted to {}", filename);
    Ok(())
}

fn draw_path<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    path: &CoefficientPath,
    marker: f64,
) -> Result<()> {
    let alphas = path.alphas();
    if alphas.is_empty() || path.n_features() == 0 {
        return Err(PlotError::Empty("coefficient path has no points"));
    }
    let x_min = alphas[0];
    let x_max = alphas[alphas.len() - 1];
    let (y_min, y_max) = padded_range(path.value_range());
    debug!(
        "{}: alpha {}..{}, coefficients {}..{}",
        path.family(),
        x_min,
        x_max,
        y_min,
        y_max
    );

    let mut cc = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .caption(
            path.family().title(),
            ("sans-serif", 24).into_font().with_color(&BLACK),
        )
        .build_cartesian_2d((x_min..x_max).log_scale(), y_min..y_max)
        .map_err(drawing)?;
    cc.configure_mesh()
        .x_desc("Alpha (Log Scale)")
        .y_desc("Coefficients")
        .x_label_formatter(&|v| format!("{:.0e}", v))
        .y_label_formatter(&|v| format!("{:.1}", v))
        .draw()
        .map_err(drawing)?;

    for feature in 0..path.n_features() {
        cc.draw_series(LineSeries::new(
            path.feature_series(feature),
            Palette99::pick(feature).stroke_width(2),
        ))
        .map_err(drawing)?;
    }

    let dash = (y_max - y_min) / (2 * MARKER_DASHES) as f64;
    cc.draw_series((0..MARKER_DASHES).map(|i| {
        let y0 = y_min + 2.0 * dash * i as f64;
        PathElement::new(vec![(marker, y0), (marker, y0 + dash)], BLACK.stroke_width(2))
    }))
    .map_err(drawing)?;

    Ok(())
}

/// Widen a value range by 5% on both sides, always including zero
fn padded_range((lo, hi): (f64, f64)) -> (f64, f64) {
    let lo = lo.min(0.0);
    let hi = hi.max(0.0);
    let span = hi - lo;
    if span == 0.0 {
        return (-1.0, 1.0);
    }
    (lo - 0.05 * span, hi + 0.05 * span)
}

fn drawing<E: Display>(err: E) -> PlotError {
    PlotError::Drawing(err.to_string())
}

#[cfg(test)]
mod tests {
    use shrinkage::{sweep, Params};

    use super::*;

    #[test]
    fn paths_are_written_to_png() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let report = Report::compute(&Params::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        // nested, so the missing parent directories have to be created
        let filename = dir.path().join("img").join("paths").join("lasso_ridge.png");

        plot_paths(&report, filename.to_str().unwrap(), (1500, 600)).unwrap();

        let meta = fs::metadata(&filename).unwrap();
        assert!(meta.is_file());
        assert!(meta.len() > 0);
    }

    #[test]
    fn empty_path_is_rejected() {
        let report = Report::compute(&Params::default()).unwrap();
        let path = sweep(Family::Lasso, &report.split.train, &[]).unwrap();
        assert!(path.alphas().is_empty());

        let (w, h) = (64, 48);
        let mut buf = vec![0u8; (w * h * 3) as usize];
        let area = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();

        assert!(matches!(
            draw_path(&area, &path, 1.0),
            Err(PlotError::Empty(_))
        ));
    }

    #[test]
    fn range_contains_zero_and_is_padded() {
        assert_eq!(padded_range((10.0, 30.0)), (-1.5, 31.5));
        assert_eq!(padded_range((-20.0, -10.0)), (-21.0, 1.0));
        assert_eq!(padded_range((0.0, 0.0)), (-1.0, 1.0));
    }
}
