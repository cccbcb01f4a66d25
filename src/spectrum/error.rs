// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SpectrumError {
    #[error("The independent and dependent arrays have different lengths ({x_len} vs. {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
}
