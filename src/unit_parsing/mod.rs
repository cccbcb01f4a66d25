// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to parse wavelength units, e.g. from a FITS `TUNITn` key or the
//! command line.

mod error;

pub use error::UnitParseError;

use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::constants::{ANGSTROMS_PER_MICRON, NANOMETRES_PER_MICRON};

lazy_static::lazy_static! {
    pub(crate) static ref WAVELENGTH_UNITS_COMMA_SEPARATED: String =
        WavelengthUnit::iter().join(", ");
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
pub enum WavelengthUnit {
    #[default]
    #[strum(serialize = "Angstrom")]
    Angstrom,

    #[strum(serialize = "nm")]
    Nanometre,

    #[strum(serialize = "micron")]
    Micron,
}

impl WavelengthUnit {
    /// Dividing this factor by a wavelength in this unit gives inverse
    /// microns.
    pub fn inverse_micron_factor(self) -> f64 {
        match self {
            WavelengthUnit::Angstrom => ANGSTROMS_PER_MICRON,
            WavelengthUnit::Nanometre => NANOMETRES_PER_MICRON,
            WavelengthUnit::Micron => 1.0,
        }
    }

    /// All the spellings we accept for this unit, lowercase.
    fn spellings(self) -> &'static [&'static str] {
        match self {
            WavelengthUnit::Angstrom => &["a", "å", "angstrom", "angstroms", "aa", "0.1 nm"],
            WavelengthUnit::Nanometre => &["nm", "nanometre", "nanometres", "nanometer", "nanometers"],
            WavelengthUnit::Micron => &["um", "µm", "μm", "micron", "microns", "micrometre", "micrometer"],
        }
    }
}

impl FromStr for WavelengthUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        WavelengthUnit::iter()
            .find(|u| u.spellings().contains(&lower.as_str()))
            .ok_or_else(|| UnitParseError::Unknown(s.to_string()))
    }
}
