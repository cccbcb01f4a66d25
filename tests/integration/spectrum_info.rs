// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests for summarising input files.

use fitsio::{
    tables::{ColumnDataType, ColumnDescription},
    FitsFile,
};
use tempfile::TempDir;

use crate::*;

#[test]
fn test_spectrum_info_continues_past_bad_files() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let Spectra { target, reference } = write_spectra(tmp_dir.path());
    let missing = tmp_dir.path().join("missing.csv");

    #[rustfmt::skip]
    let cmd = mast_curves()
        .args([
            "spectrum-info",
            &format!("{}", target.display()),
            &format!("{}", missing.display()),
            &format!("{}", reference.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "spectrum-info failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("4 samples"), "{stdout}");
    assert!(stdout.contains("5 samples"), "{stdout}");
    assert!(stdout.contains("missing.csv"), "{stdout}");
}

#[test]
fn test_spectrum_info_fails_if_nothing_is_readable() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let unknown = tmp_dir.path().join("spectrum.xyz");
    std::fs::write(&unknown, "1 2 3").unwrap();

    let cmd = mast_curves()
        .args(["spectrum-info", &format!("{}", unknown.display())])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("None of the 1 files could be read"), "{stderr}");
}

#[test]
fn test_spectrum_info_fits_light_curve() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let file = tmp_dir.path().join("lc.fits");
    {
        let mut fptr = FitsFile::create(&file).open().unwrap();
        let cols = [
            ColumnDescription::new("TIME")
                .with_type(ColumnDataType::Double)
                .create()
                .unwrap(),
            ColumnDescription::new("PDCSAP_FLUX")
                .with_type(ColumnDataType::Double)
                .create()
                .unwrap(),
        ];
        let hdu = fptr.create_table("LIGHTCURVE", &cols).unwrap();
        hdu.write_col(&mut fptr, "TIME", &[1325.29, 1325.30, 1325.31])
            .unwrap();
        hdu.write_col(&mut fptr, "PDCSAP_FLUX", &[1.0e4, f64::NAN, 1.1e4])
            .unwrap();
    }

    let cmd = mast_curves()
        .args([
            "spectrum-info",
            "--light-curve",
            &format!("{}", file.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "spectrum-info failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("3 samples"), "{stdout}");
    assert!(stdout.contains("1 samples are not finite"), "{stdout}");
}
