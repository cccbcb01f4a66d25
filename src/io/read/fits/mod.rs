// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Helper functions for reading FITS files, and reading spectra out of FITS
//! binary tables.
//!
//! MAST products come in two table layouts. Some (e.g. TESS and Kepler light
//! curves) have one sample per row. Others (e.g. IUE MXLO and HST x1d
//! spectra) pack a whole spectrum into vector columns of a single row. Both
//! are handled by [`read_fits_spectrum`]; vector columns spanning several rows
//! are concatenated row by row.

mod error;

pub use error::FitsError;

use std::{fmt::Display, path::Path};

use fitsio::{
    hdu::{DescribesHdu, FitsHdu, HduInfo},
    tables::ConcreteColumnDescription,
    FitsFile,
};
use itertools::Itertools;
use log::{debug, trace};

use super::SpectrumSource;
use crate::Spectrum;

/// Open a fits file.
#[track_caller]
pub(crate) fn fits_open<P: AsRef<Path>>(file: P) -> Result<FitsFile, FitsError> {
    FitsFile::open(file.as_ref()).map_err(|e| {
        let caller = std::panic::Location::caller();
        FitsError::Open {
            fits_error: Box::new(e),
            fits_filename: file.as_ref().to_path_buf().into_boxed_path(),
            source_file: caller.file(),
            source_line: caller.line(),
            source_column: caller.column(),
        }
    })
}

/// Open a fits file's HDU.
#[track_caller]
pub(crate) fn fits_open_hdu<T: DescribesHdu + Display + Copy>(
    fits_fptr: &mut FitsFile,
    hdu_description: T,
) -> Result<FitsHdu, FitsError> {
    fits_fptr.hdu(hdu_description).map_err(|e| {
        let caller = std::panic::Location::caller();
        FitsError::Fitsio {
            fits_error: Box::new(e),
            fits_filename: fits_fptr.file_path().to_path_buf().into_boxed_path(),
            hdu_description: format!("{hdu_description}").into_boxed_str(),
            source_file: caller.file(),
            source_line: caller.line(),
            source_column: caller.column(),
        }
    })
}

/// Given a FITS file pointer, a HDU that belongs to it, and a keyword that may
/// or may not exist, pull out the value of the keyword, parsing it into the
/// desired type.
#[track_caller]
pub(crate) fn fits_get_optional_key<T: std::str::FromStr>(
    fits_fptr: &mut FitsFile,
    hdu: &FitsHdu,
    keyword: &str,
) -> Result<Option<T>, FitsError> {
    let unparsed_value: String = match hdu.read_key(fits_fptr, keyword) {
        Ok(key_value) => key_value,
        Err(e) => {
            // 202 = KEY_NO_EXIST, 204 = VALUE_UNDEFINED
            if let fitsio::errors::Error::Fits(fe) = &e {
                if matches!(fe.status, 202 | 204) {
                    return Ok(None);
                }
            }
            let caller = std::panic::Location::caller();
            return Err(FitsError::Fitsio {
                fits_error: Box::new(e),
                fits_filename: fits_fptr.file_path().to_path_buf().into_boxed_path(),
                hdu_description: format!("{}", hdu.number + 1).into_boxed_str(),
                source_file: caller.file(),
                source_line: caller.line(),
                source_column: caller.column(),
            });
        }
    };

    match unparsed_value.trim().parse() {
        Ok(parsed_value) => Ok(Some(parsed_value)),
        Err(_) => {
            let caller = std::panic::Location::caller();
            Err(FitsError::Parse {
                key: keyword.to_string().into_boxed_str(),
                fits_filename: fits_fptr.file_path().to_path_buf().into_boxed_path(),
                hdu_num: hdu.number + 1,
                source_file: caller.file(),
                source_line: caller.line(),
                source_column: caller.column(),
            })
        }
    }
}

/// Get a column of scalars (one value per row) from a fits file's HDU.
#[track_caller]
pub(crate) fn fits_get_col<T: fitsio::tables::ReadsCol>(
    fits_fptr: &mut FitsFile,
    hdu: &FitsHdu,
    keyword: &str,
) -> Result<Vec<T>, FitsError> {
    hdu.read_col(fits_fptr, keyword).map_err(|e| {
        let caller = std::panic::Location::caller();
        FitsError::Fitsio {
            fits_error: Box::new(e),
            fits_filename: fits_fptr.file_path().to_path_buf().into_boxed_path(),
            hdu_description: format!("{}", hdu.number + 1).into_boxed_str(),
            source_file: caller.file(),
            source_line: caller.line(),
            source_column: caller.column(),
        }
    })
}

/// Read every element of a (possibly vector) double-convertible column,
/// starting from the first element of the first row. `col_num` is 1-indexed.
/// The fitsio crate only reads one element per row, so this calls cfitsio
/// directly.
#[track_caller]
pub(crate) fn fits_get_vector_col(
    fits_fptr: &mut FitsFile,
    hdu: &FitsHdu,
    col_num: usize,
    num_elements: usize,
) -> Result<Vec<f64>, FitsError> {
    let mut buffer = vec![0.0; num_elements];
    let mut status = 0;
    let mut any_null = 0;
    unsafe {
        // ffgcvd = fits_read_col_dbl
        fitsio_sys::ffgcvd(
            fits_fptr.as_raw(),
            col_num as _,
            1,
            1,
            num_elements as _,
            // A null value of 0 turns off null checking; NaNs come through
            // as-is.
            0.0,
            buffer.as_mut_ptr(),
            &mut any_null,
            &mut status,
        );
    }
    fitsio::errors::check_status(status).map_err(|e| {
        let caller = std::panic::Location::caller();
        FitsError::Fitsio {
            fits_error: Box::new(e),
            fits_filename: fits_fptr.file_path().to_path_buf().into_boxed_path(),
            hdu_description: format!("{}", hdu.number + 1).into_boxed_str(),
            source_file: caller.file(),
            source_line: caller.line(),
            source_column: caller.column(),
        }
    })?;
    Ok(buffer)
}

/// Get the column descriptions and number of rows of a table HDU.
#[track_caller]
fn fits_get_table_info<'a>(
    fits_fptr: &FitsFile,
    hdu: &'a FitsHdu,
) -> Result<(&'a [ConcreteColumnDescription], usize), FitsError> {
    match &hdu.info {
        HduInfo::TableInfo {
            column_descriptions,
            num_rows,
        } => Ok((column_descriptions.as_slice(), *num_rows)),
        _ => {
            let caller = std::panic::Location::caller();
            Err(FitsError::NotTable {
                fits_filename: fits_fptr.file_path().to_path_buf().into_boxed_path(),
                hdu_num: hdu.number + 1,
                source_file: caller.file(),
                source_line: caller.line(),
                source_column: caller.column(),
            })
        }
    }
}

/// A column of a table, located by name.
struct Column {
    /// The name as written in the file.
    name: String,
    /// 1-indexed.
    num: usize,
    repeat: usize,
}

fn find_column(
    fits_fptr: &FitsFile,
    hdu: &FitsHdu,
    col_descs: &[ConcreteColumnDescription],
    wanted: &str,
) -> Result<Column, FitsError> {
    col_descs
        .iter()
        .enumerate()
        .find(|(_, cd)| cd.name.eq_ignore_ascii_case(wanted))
        .map(|(i, cd)| Column {
            name: cd.name.clone(),
            num: i + 1,
            repeat: cd.data_type.repeat,
        })
        .ok_or_else(|| FitsError::MissingColumn {
            column: wanted.to_string().into_boxed_str(),
            available: col_descs
                .iter()
                .map(|cd| cd.name.as_str())
                .join(", ")
                .into_boxed_str(),
            fits_filename: fits_fptr.file_path().to_path_buf().into_boxed_path(),
            hdu_num: hdu.number + 1,
        })
}

fn read_column(
    fits_fptr: &mut FitsFile,
    hdu: &FitsHdu,
    col: &Column,
    num_rows: usize,
) -> Result<(Vec<f64>, Option<String>), FitsError> {
    let values = if col.repeat > 1 {
        trace!(
            "Reading vector column {} ({} rows x {} elements)",
            col.name,
            num_rows,
            col.repeat
        );
        fits_get_vector_col(fits_fptr, hdu, col.num, num_rows * col.repeat)?
    } else {
        trace!("Reading scalar column {} ({} rows)", col.name, num_rows);
        fits_get_col(fits_fptr, hdu, &col.name)?
    };
    let unit: Option<String> = fits_get_optional_key(fits_fptr, hdu, &format!("TUNIT{}", col.num))?;
    let unit = unit.filter(|u| !u.is_empty());
    Ok((values, unit))
}

/// Read a spectrum (or any pair of columns) out of a FITS binary table.
///
/// If the two columns have different numbers of elements, the trailing
/// elements of the longer are dropped, the same way paired spectra are
/// aligned.
pub fn read_fits_spectrum(file: &Path, source: &SpectrumSource) -> Result<Spectrum, FitsError> {
    debug!(
        "Reading columns '{}' and '{}' from HDU {} of {}",
        source.x_column,
        source.y_column,
        source.hdu,
        file.display()
    );
    let mut fptr = fits_open(file)?;
    let hdu = fits_open_hdu(&mut fptr, source.hdu)?;
    let (col_descs, num_rows) = fits_get_table_info(&fptr, &hdu)?;
    let x_col = find_column(&fptr, &hdu, col_descs, &source.x_column)?;
    let y_col = find_column(&fptr, &hdu, col_descs, &source.y_column)?;

    let (mut x, x_unit) = read_column(&mut fptr, &hdu, &x_col, num_rows)?;
    let (mut y, y_unit) = read_column(&mut fptr, &hdu, &y_col, num_rows)?;
    if x.len() != y.len() {
        debug!(
            "Columns {} and {} have {} and {} elements; truncating to the shorter",
            x_col.name,
            y_col.name,
            x.len(),
            y.len()
        );
        let n = x.len().min(y.len());
        x.truncate(n);
        y.truncate(n);
    }

    Ok(Spectrum::new(x, y)
        .expect("lengths were equalised above")
        .with_units(x_unit, y_unit))
}
