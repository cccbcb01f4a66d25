// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use super::WAVELENGTH_UNITS_COMMA_SEPARATED;

#[derive(Debug, Error, PartialEq)]
pub enum UnitParseError {
    #[error("Could not parse '{0}' as a wavelength unit. Supported units: {}", *WAVELENGTH_UNITS_COMMA_SEPARATED)]
    Unknown(String),
}
