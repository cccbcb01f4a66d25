// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to plot curves. Drawing is only available with the "plotting"
//! feature, because it doesn't look possible to statically compile the C
//! dependencies needed for plotting.

mod error;

pub use error::PlotError;

use std::path::Path;

use log::warn;

use crate::spectrum::finite_range;

/// What to put around the points of a plot.
#[derive(Debug, Clone, Default)]
pub struct PlotSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// The minimum y-range value. Ignored if larger than all data.
    pub min_y: Option<f64>,
    /// The maximum y-range value. Ignored if smaller than all data.
    pub max_y: Option<f64>,
}

/// Work out the plot limits of some values, taking any user-specified limits
/// into account. Non-finite values are ignored. If no finite values are
/// available, `None` is returned.
pub(crate) fn axis_limits(
    values: &[f64],
    user_min: Option<f64>,
    user_max: Option<f64>,
) -> Option<(f64, f64)> {
    let (data_min, data_max) = finite_range(values)?;

    // Check any user-specified limits. Are they sensible relative to the data?
    let min = match user_min {
        Some(user_min) if user_min > data_max => {
            warn!("User-specified plot minimum {user_min} is larger than all data; ignoring");
            None
        }
        other => other,
    };
    let max = match user_max {
        Some(user_max) if user_max < data_min => {
            warn!("User-specified plot maximum {user_max} is smaller than all data; ignoring");
            None
        }
        other => other,
    };

    // Pad the data range so points don't sit on the axes.
    let pad = if data_max - data_min > f64::EPSILON {
        (data_max - data_min) * 0.05
    } else {
        1.0
    };
    let min = min.unwrap_or(data_min - pad);
    let max = max.unwrap_or(data_max + pad);
    if max > min {
        Some((min, max))
    } else {
        Some((data_min - pad, data_max + pad))
    }
}

/// Check that a plot can be made to `file` before any work is done.
#[cfg(not(feature = "plotting"))]
pub fn check_plot_file(_file: &Path) -> Result<(), PlotError> {
    Err(PlotError::NoPlottingFeature)
}

/// Check that a plot can be made to `file` before any work is done.
#[cfg(feature = "plotting")]
pub fn check_plot_file(file: &Path) -> Result<(), PlotError> {
    match file.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(()),
        _ => Err(PlotError::NotPng(file.to_path_buf())),
    }
}

/// Draw a point series to a PNG file. Only finite points should be supplied;
/// any others are dropped.
#[cfg(not(feature = "plotting"))]
pub fn plot_curve(_file: &Path, _spec: &PlotSpec, _points: &[(f64, f64)]) -> Result<(), PlotError> {
    Err(PlotError::NoPlottingFeature)
}

/// Draw a point series to a PNG file. Only finite points should be supplied;
/// any others are dropped.
#[cfg(feature = "plotting")]
pub fn plot_curve(file: &Path, spec: &PlotSpec, points: &[(f64, f64)]) -> Result<(), PlotError> {
    drawing::plot_curve(file, spec, points)
}

#[cfg(feature = "plotting")]
mod drawing {
    use log::debug;
    use plotters::prelude::*;

    use super::*;

    /// The number of X pixels on the plots.
    const X_PIXELS: u32 = 1600;
    /// The number of Y pixels on the plots.
    const Y_PIXELS: u32 = 1000;

    pub(super) fn plot_curve(
        file: &Path,
        spec: &PlotSpec,
        points: &[(f64, f64)],
    ) -> Result<(), PlotError> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .unzip();
        let (x_min, x_max) = axis_limits(&xs, None, None).ok_or(PlotError::NoFinitePoints)?;
        let (y_min, y_max) =
            axis_limits(&ys, spec.min_y, spec.max_y).ok_or(PlotError::NoFinitePoints)?;
        debug!(
            "Plotting {} points to {} (x: {x_min}..{x_max}, y: {y_min}..{y_max})",
            xs.len(),
            file.display()
        );

        let root_area = BitMapBackend::new(file, (X_PIXELS, Y_PIXELS)).into_drawing_area();
        root_area
            .fill(&WHITE)
            .map_err(|e| PlotError::Plotters(e.to_string()))?;

        let mut cc = ChartBuilder::on(&root_area)
            .caption(&spec.title, ("sans-serif", 40))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| PlotError::Plotters(e.to_string()))?;

        cc.configure_mesh()
            .light_line_style(WHITE)
            .x_desc(&spec.x_label)
            .y_desc(&spec.y_label)
            .axis_desc_style(("sans-serif", 28))
            .label_style(("sans-serif", 22))
            .draw()
            .map_err(|e| PlotError::Plotters(e.to_string()))?;

        cc.draw_series(PointSeries::of_element(
            xs.into_iter().zip(ys),
            2,
            ShapeStyle::from(&BLUE).filled(),
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))
        .map_err(|e| PlotError::Plotters(e.to_string()))?;

        // Finalise the plot.
        root_area
            .present()
            .map_err(|e| PlotError::Plotters(e.to_string()))?;
        Ok(())
    }
}
