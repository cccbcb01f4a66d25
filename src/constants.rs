// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision; curves are derived in `f64` and
only ever narrowed (if at all) when drawn.
 */

/// The number of Angstroms in a micron. Dividing this by a wavelength in
/// Angstroms gives inverse microns, the usual abscissa of an extinction curve.
pub const ANGSTROMS_PER_MICRON: f64 = 1e4;

/// The number of nanometres in a micron.
pub const NANOMETRES_PER_MICRON: f64 = 1e3;

/// The magnitude-to-flux scale of Pogson's ratio: F = 10^(-0.4 m).
pub const POGSON_SCALE: f64 = -0.4;

/// The HDU holding a spectrum or light curve when none is specified (the
/// first extension; the primary HDU of MAST products has no table).
pub const DEFAULT_HDU: usize = 1;

/// Default column names for spectra.
pub const DEFAULT_SPECTRUM_X_COLUMN: &str = "WAVELENGTH";
pub const DEFAULT_SPECTRUM_Y_COLUMN: &str = "FLUX";

/// Default column names for light curves (TESS and Kepler LC files).
pub const DEFAULT_LIGHT_CURVE_X_COLUMN: &str = "TIME";
pub const DEFAULT_LIGHT_CURVE_Y_COLUMN: &str = "PDCSAP_FLUX";
