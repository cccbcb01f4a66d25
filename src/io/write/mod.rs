// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to write out derived curves.

mod error;

pub use error::WriteError;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use itertools::Itertools;
use log::{debug, trace};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{cli::Warn, DerivedCurve};

/// All write-supported curve formats.
#[derive(Debug, Display, EnumIter, EnumString, Clone, Copy, PartialEq)]
pub enum CurveOutputType {
    #[strum(serialize = "csv")]
    Csv,
    #[strum(serialize = "json")]
    Json,
}

lazy_static::lazy_static! {
    pub(crate) static ref CURVE_OUTPUT_EXTENSIONS: String = CurveOutputType::iter().join(", ");
}

impl CurveOutputType {
    pub fn from_path(file: &Path) -> Result<CurveOutputType, WriteError> {
        file.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| CurveOutputType::from_str(&e.to_lowercase()).ok())
            .ok_or_else(|| WriteError::UnknownFileType(file.to_path_buf()))
    }
}

/// The column names (CSV) or keys (JSON) of a written curve.
#[derive(Debug, Clone, Copy)]
pub struct CurveLabels {
    pub x: &'static str,
    pub y: &'static str,
}

/// Write a curve to a file, with the format determined by the file's
/// extension. Non-finite values are kept: CSV gets `NaN`/`inf`, and JSON gets
/// `null`.
pub fn write_curve(
    file: &Path,
    curve: &DerivedCurve,
    labels: CurveLabels,
) -> Result<(), WriteError> {
    let output_type = CurveOutputType::from_path(file)?;
    debug!(
        "Writing {} samples to {} as {output_type}",
        curve.len(),
        file.display()
    );

    match output_type {
        CurveOutputType::Csv => {
            let mut writer = csv::Writer::from_path(file)?;
            writer.write_record([labels.x, labels.y])?;
            for (x, y) in curve.iter() {
                writer.write_record([x.to_string(), y.to_string()])?;
            }
            writer.flush()?;
        }

        CurveOutputType::Json => {
            let mut map = serde_json::Map::new();
            map.insert(labels.x.to_string(), serde_json::to_value(curve.x())?);
            map.insert(labels.y.to_string(), serde_json::to_value(curve.y())?);
            let mut f = BufWriter::new(File::create(file)?);
            serde_json::to_writer_pretty(&mut f, &serde_json::Value::Object(map))?;
            f.write_all(b"\n")?;
            f.flush()?;
        }
    }

    Ok(())
}

/// Check that we can write to the specified file before doing any work. If the
/// file already exists, warn that it will be overwritten. Missing parent
/// directories are created. This code _doesn't_ alter the file if it exists.
pub(crate) fn can_write_to_file(file: &Path) -> Result<(), WriteError> {
    trace!("Testing whether we can write to {}", file.display());

    if file.is_dir() {
        return Err(WriteError::IsADirectory(file.to_path_buf()));
    }

    let file_exists = file.exists();
    if let Some(p) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !p.exists() {
            std::fs::DirBuilder::new()
                .recursive(true)
                .create(p)
                .map_err(|_| WriteError::NewDirectory(p.to_path_buf()))?;
        }
    }

    match std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(file)
    {
        Ok(_) => {
            if file_exists {
                format!("Will overwrite the existing file '{}'", file.display()).warn();
            } else {
                // Opening created an empty file; we don't want to keep it.
                std::fs::remove_file(file)?;
            }
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(WriteError::FileNotWritable(file.to_path_buf()))
        }
        Err(e) => Err(WriteError::IO(e)),
    }
}
