// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod extinction_curve;
mod light_curve;
mod no_stderr;
mod spectrum_info;

use std::{
    path::{Path, PathBuf},
    process::Output,
    str::from_utf8,
};

use assert_cmd::{output::OutputError, Command};
use indoc::indoc;

fn mast_curves() -> Command {
    Command::cargo_bin("mast-curves").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

struct Spectra {
    target: PathBuf,
    reference: PathBuf,
}

/// Write a small target and reference spectrum pair into `dir`. The target has
/// a zero flux in its first sample, and the reference has an extra trailing
/// sample.
fn write_spectra(dir: &Path) -> Spectra {
    let target = dir.join("target.csv");
    std::fs::write(
        &target,
        indoc! {"
            # HD 38087
            WAVELENGTH,FLUX
            1000,0.0
            1250,1.0
            2000,2.0
            2500,4.0
        "},
    )
    .unwrap();

    let reference = dir.join("reference.txt");
    std::fs::write(
        &reference,
        indoc! {"
            # HD 37903
            WAVELENGTH  FLUX
            1000        1.0
            1250        2.0
            2000        2.0
            2500        4.0
            3000        8.0
        "},
    )
    .unwrap();

    Spectra { target, reference }
}

/// Write a small light curve with a flagged cadence into `dir`.
fn write_light_curve(dir: &Path) -> PathBuf {
    let file = dir.join("lc.csv");
    std::fs::write(
        &file,
        indoc! {"
            TIME,SAP_FLUX,PDCSAP_FLUX
            1325.29,1.0,10.0
            1325.30,1.0,NaN
            1325.31,1.0,20.0
            1325.32,1.0,30.0
        "},
    )
    .unwrap();
    file
}
