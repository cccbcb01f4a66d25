// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to summarise spectrum and light-curve files.

use std::{borrow::Cow, path::PathBuf};

use clap::Parser;
use log::info;

use super::common::{InfoPrinter, SpectrumSourceArgs};
use crate::{
    io::read::{read_spectrum, SpectrumSource},
    MastCurvesError, Spectrum,
};

/// Verify that spectra or light curves can be read, and print a summary of
/// each.
#[derive(Parser, Debug)]
pub(super) struct SpectrumInfoArgs {
    /// Paths to the files to summarise.
    #[clap(name = "FILES", parse(from_os_str))]
    files: Vec<PathBuf>,

    /// Use the light-curve column defaults (TIME and PDCSAP_FLUX) rather than
    /// the spectrum ones.
    #[clap(long)]
    light_curve: bool,

    #[clap(flatten)]
    source_args: SpectrumSourceArgs,
}

impl SpectrumInfoArgs {
    /// Read and print stats out for each input file. If a file couldn't be
    /// read, print the error, and continue trying to read the other files.
    pub(super) fn run(self) -> Result<(), MastCurvesError> {
        let SpectrumInfoArgs {
            files,
            light_curve,
            source_args,
        } = self;
        if files.is_empty() {
            return Err(MastCurvesError::Generic(
                "No files were supplied!".to_string(),
            ));
        }

        let defaults = if light_curve {
            SpectrumSource::light_curve()
        } else {
            SpectrumSource::default()
        };
        let source = source_args.parse(defaults);

        let mut num_failed = 0;
        for file in &files {
            match read_spectrum(file, &source) {
                Ok(spectrum) => {
                    let mut printer = InfoPrinter::new(file.display().to_string().into());
                    printer.push_block(describe(&spectrum));
                    printer.display();
                }
                Err(e) => {
                    info!("{}:", file.display());
                    info!("{}", e);
                    info!("");
                    num_failed += 1;
                }
            }
        }

        if num_failed == files.len() {
            return Err(MastCurvesError::Generic(format!(
                "None of the {} files could be read",
                files.len()
            )));
        }
        Ok(())
    }
}

/// Lines summarising a sequence.
fn describe(spectrum: &Spectrum) -> Vec<Cow<'static, str>> {
    let x_unit = spectrum.x_unit.as_deref().unwrap_or("no unit");
    let y_unit = spectrum.y_unit.as_deref().unwrap_or("no unit");
    let mut lines: Vec<Cow<'static, str>> = vec![format!("{} samples", spectrum.len()).into()];
    lines.push(match spectrum.x_range() {
        Some((min, max)) => format!("x: {min} to {max} ({x_unit})").into(),
        None => format!("x: no finite values ({x_unit})").into(),
    });
    lines.push(match spectrum.y_range() {
        Some((min, max)) => format!("y: {min} to {max} ({y_unit})").into(),
        None => format!("y: no finite values ({y_unit})").into(),
    });
    let num_non_finite = spectrum
        .iter()
        .filter(|(x, y)| !x.is_finite() || !y.is_finite())
        .count();
    if num_non_finite > 0 {
        lines.push(format!("{num_non_finite} samples are not finite").into());
    }
    lines.push(if spectrum.is_monotonic() {
        "x is monotonically increasing".into()
    } else {
        "x is NOT monotonically increasing".into()
    });
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let spectrum = Spectrum::new(vec![1.0, 3.0, 2.0], vec![5.0, f64::NAN, -1.0])
            .unwrap()
            .with_units(Some("Angstrom".to_string()), None);
        let lines = describe(&spectrum);
        assert_eq!(
            lines,
            vec![
                "3 samples",
                "x: 1 to 3 (Angstrom)",
                "y: -1 to 5 (no unit)",
                "1 samples are not finite",
                "x is NOT monotonically increasing",
            ]
        );
    }

    #[test]
    fn test_describe_empty() {
        let lines = describe(&Spectrum::default());
        assert_eq!(
            lines,
            vec![
                "0 samples",
                "x: no finite values (no unit)",
                "y: no finite values (no unit)",
                "x is monotonically increasing",
            ]
        );
    }
}
