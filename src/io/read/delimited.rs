// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sequences in delimited text files: CSV, or whitespace-separated columns
//! (as written by e.g. `astropy.io.ascii`). Both need a header row naming the
//! columns; lines starting with `#` are ignored.


use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use itertools::Itertools;
use log::trace;

use super::{SpectrumReadError, SpectrumSource};
use crate::Spectrum;

/// Read a sequence from a CSV file.
pub fn read_csv_spectrum(file: &Path, source: &SpectrumSource) -> Result<Spectrum, SpectrumReadError> {
    let reader = BufReader::new(File::open(file)?);
    read_delimited(reader, file, source)
}

/// Read a sequence from a whitespace-separated text file. Columns may be
/// separated by any amount of whitespace.
pub fn read_text_spectrum(
    file: &Path,
    source: &SpectrumSource,
) -> Result<Spectrum, SpectrumReadError> {
    let mut contents = String::new();
    File::open(file)?.read_to_string(&mut contents)?;
    // Re-delimit each line with commas; keep blank lines so that line numbers
    // in errors match the file.
    let as_csv = contents
        .lines()
        .map(|line| line.split_whitespace().join(","))
        .join("\n");
    read_delimited(as_csv.as_bytes(), file, source)
}

fn read_delimited<R: Read>(
    reader: R,
    file: &Path,
    source: &SpectrumSource,
) -> Result<Spectrum, SpectrumReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let find = |wanted: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SpectrumReadError::MissingColumn {
                file: file.to_path_buf(),
                column: wanted.to_string(),
                available: headers.iter().join(", "),
            })
    };
    let x_index = find(&source.x_column)?;
    let y_index = find(&source.y_column)?;
    trace!(
        "{}: using columns {x_index} and {y_index} of {}",
        file.display(),
        headers.len()
    );

    let mut x = vec![];
    let mut y = vec![];
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let parse = |index: usize, column: &str| -> Result<f64, SpectrumReadError> {
            let value = record.get(index).unwrap_or("");
            value.parse().map_err(|_| SpectrumReadError::Parse {
                file: file.to_path_buf(),
                line,
                column: column.to_string(),
                value: value.to_string(),
            })
        };
        x.push(parse(x_index, &source.x_column)?);
        y.push(parse(y_index, &source.y_column)?);
    }

    Ok(Spectrum::new(x, y).expect("one x and one y are pushed per record"))
}
