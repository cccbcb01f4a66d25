// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_mag_to_flux() {
    assert_abs_diff_eq!(mag_to_flux(0.0), 1.0);
    assert_abs_diff_eq!(mag_to_flux(5.0), 0.01, epsilon = 1e-15);
    assert_abs_diff_eq!(mag_to_flux(-2.5), 10.0, epsilon = 1e-12);
}

#[test]
fn test_colour_excess() {
    // A reddened star and an unreddened comparison of similar spectral type.
    let target = Photometry::new(7.55, 6.92);
    let reference = Photometry::new(5.87, 6.05);
    assert_abs_diff_eq!(target.colour(), 0.63, epsilon = 1e-12);
    assert_abs_diff_eq!(reference.colour(), -0.18, epsilon = 1e-12);
    assert_abs_diff_eq!(colour_excess(&target, &reference), 0.81, epsilon = 1e-12);
}

#[test]
fn test_normalisation_from_photometry() {
    let target = Photometry::new(7.55, 6.92);
    let reference = Photometry::new(5.87, 6.05);
    let n = Normalisation::from_photometry(&target, &reference);
    assert_abs_diff_eq!(n.target_norm, mag_to_flux(6.92));
    assert_abs_diff_eq!(n.reference_norm, mag_to_flux(6.05));
    // The flux ratio corresponds to the V magnitude difference.
    assert_abs_diff_eq!(
        -2.5 * (n.target_norm / n.reference_norm).log10(),
        6.92 - 6.05,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(n.norm_difference, 0.81, epsilon = 1e-12);
}
