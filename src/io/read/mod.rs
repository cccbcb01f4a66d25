// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read sample sequences from FITS tables and delimited text files.

mod delimited;
mod error;
pub(crate) mod fits;

pub use delimited::{read_csv_spectrum, read_text_spectrum};
pub use error::SpectrumReadError;
pub use fits::{read_fits_spectrum, FitsError};

use std::path::Path;

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::{
    constants::{
        DEFAULT_HDU, DEFAULT_LIGHT_CURVE_X_COLUMN, DEFAULT_LIGHT_CURVE_Y_COLUMN,
        DEFAULT_SPECTRUM_X_COLUMN, DEFAULT_SPECTRUM_Y_COLUMN,
    },
    Spectrum,
};

lazy_static::lazy_static! {
    pub(crate) static ref SPECTRUM_INPUT_EXTENSIONS: String = SpectrumInputType::iter()
        .flat_map(|t| t.extensions().iter())
        .join(", ");
}

/// All read-supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum SpectrumInputType {
    #[strum(serialize = "FITS")]
    Fits,

    /// Comma-separated values with a header row.
    #[strum(serialize = "CSV")]
    Csv,

    /// Whitespace-separated values with a header row.
    #[strum(serialize = "text")]
    Text,
}

impl SpectrumInputType {
    fn extensions(self) -> &'static [&'static str] {
        match self {
            SpectrumInputType::Fits => &["fits", "fit", "fts"],
            SpectrumInputType::Csv => &["csv"],
            SpectrumInputType::Text => &["txt", "dat"],
        }
    }

    /// Work out the type of a file from its extension. A trailing `.gz` is
    /// ignored for FITS files, which cfitsio decompresses itself.
    pub fn from_path(file: &Path) -> Option<SpectrumInputType> {
        let name = file.file_name()?.to_str()?.to_lowercase();
        if let Some(stripped) = name.strip_suffix(".gz") {
            let ext = Path::new(stripped).extension()?.to_str()?;
            return SpectrumInputType::Fits
                .extensions()
                .contains(&ext)
                .then_some(SpectrumInputType::Fits);
        }
        let ext = Path::new(&name).extension()?.to_str()?;
        SpectrumInputType::iter().find(|t| t.extensions().contains(&ext))
    }
}

/// Where in a file to find a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpectrumSource {
    /// The (0-indexed) HDU of a FITS file. Ignored for text files.
    pub hdu: usize,

    /// The name of the independent-variable column.
    pub x_column: String,

    /// The name of the dependent-variable column.
    pub y_column: String,
}

impl Default for SpectrumSource {
    fn default() -> Self {
        SpectrumSource {
            hdu: DEFAULT_HDU,
            x_column: DEFAULT_SPECTRUM_X_COLUMN.to_string(),
            y_column: DEFAULT_SPECTRUM_Y_COLUMN.to_string(),
        }
    }
}

impl SpectrumSource {
    /// The columns of a TESS or Kepler light-curve file.
    pub fn light_curve() -> SpectrumSource {
        SpectrumSource {
            hdu: DEFAULT_HDU,
            x_column: DEFAULT_LIGHT_CURVE_X_COLUMN.to_string(),
            y_column: DEFAULT_LIGHT_CURVE_Y_COLUMN.to_string(),
        }
    }
}

/// Read a sequence from a file, choosing the reader from the file's
/// extension.
pub fn read_spectrum(file: &Path, source: &SpectrumSource) -> Result<Spectrum, SpectrumReadError> {
    let input_type = SpectrumInputType::from_path(file)
        .ok_or_else(|| SpectrumReadError::UnknownFileType(file.to_path_buf()))?;
    debug!("Reading {} as a {input_type} file", file.display());

    let spectrum = match input_type {
        SpectrumInputType::Fits => read_fits_spectrum(file, source)?,
        SpectrumInputType::Csv => read_csv_spectrum(file, source)?,
        SpectrumInputType::Text => read_text_spectrum(file, source)?,
    };
    debug!("Read {} samples from {}", spectrum.len(), file.display());
    Ok(spectrum)
}
