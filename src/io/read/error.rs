// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from reading sample sequences.

use std::path::PathBuf;

use thiserror::Error;

use super::SPECTRUM_INPUT_EXTENSIONS;

#[derive(Error, Debug)]
pub enum SpectrumReadError {
    #[error("Couldn't work out the type of '{}' from its extension. Supported extensions: {}", .0.display(), *SPECTRUM_INPUT_EXTENSIONS)]
    UnknownFileType(PathBuf),

    #[error("{}: No column named '{column}'. Available columns: {available}", .file.display())]
    MissingColumn {
        file: PathBuf,
        column: String,
        available: String,
    },

    #[error("{} line {line}: Couldn't parse '{value}' in column '{column}' as a number", .file.display())]
    Parse {
        file: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error(transparent)]
    Fits(#[from] super::fits::FitsError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
