// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use log::debug;

use super::CurveError;
use crate::Spectrum;

/// Drop samples with a non-finite time or flux (flagged cadences are NaN in
/// TESS and Kepler light curves), then divide the flux by its median.
pub fn normalise_light_curve(seq: &Spectrum) -> Result<Spectrum, CurveError> {
    let (x, y): (Vec<f64>, Vec<f64>) = seq
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .unzip();
    if x.is_empty() {
        return Err(CurveError::Empty);
    }
    if x.len() != seq.len() {
        debug!(
            "Dropped {} non-finite samples from the light curve",
            seq.len() - x.len()
        );
    }

    let median = median(&y);
    debug!("Light-curve median flux: {median}");
    let y = y.into_iter().map(|f| f / median).collect();

    Ok(Spectrum::new(x, y)
        .expect("x and y were unzipped from the same pairs")
        .with_units(seq.x_unit.clone(), None))
}

/// The median of some finite values. Must not be empty.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
