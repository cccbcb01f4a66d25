// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Photometric normalisation of derived curves.
//!
//! Extinction curves are normalised by the V-band flux ratio of the two stars
//! and by their colour excess E(B-V). The magnitudes usually come from a
//! catalogue lookup; here they are simply given.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::constants::POGSON_SCALE;

/// Convert a magnitude into a flux relative to a zero-magnitude source.
pub fn mag_to_flux(mag: f64) -> f64 {
    10_f64.powf(POGSON_SCALE * mag)
}

/// B and V magnitudes of a single source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Photometry {
    pub b: f64,
    pub v: f64,
}

impl Photometry {
    pub fn new(b: f64, v: f64) -> Photometry {
        Photometry { b, v }
    }

    /// The B-V colour.
    pub fn colour(&self) -> f64 {
        self.b - self.v
    }
}

/// The colour excess E(B-V) of a target relative to an unreddened reference.
pub fn colour_excess(target: &Photometry, reference: &Photometry) -> f64 {
    target.colour() - reference.colour()
}

/// The scalar constants a derived curve is normalised with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalisation {
    pub target_norm: f64,
    pub reference_norm: f64,
    pub norm_difference: f64,
}

impl Normalisation {
    /// V-band fluxes as the norms, E(B-V) as the difference.
    pub fn from_photometry(target: &Photometry, reference: &Photometry) -> Normalisation {
        Normalisation {
            target_norm: mag_to_flux(target.v),
            reference_norm: mag_to_flux(reference.v),
            norm_difference: colour_excess(target, reference),
        }
    }
}
