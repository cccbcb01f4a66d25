// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests for normalising light curves.

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use crate::*;

#[test]
fn test_light_curve_writes_json() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let input = write_light_curve(tmp_dir.path());
    let output = tmp_dir.path().join("normalised.json");

    #[rustfmt::skip]
    let cmd = mast_curves()
        .args([
            "light-curve",
            "--input", &format!("{}", input.display()),
            "--output", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "light-curve failed: {}", cmd.err().unwrap());

    let contents = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let time = value["time"].as_array().unwrap();
    let flux = value["normalised_flux"].as_array().unwrap();
    // The NaN cadence is dropped.
    assert_eq!(time.len(), 3);
    assert_abs_diff_eq!(time[1].as_f64().unwrap(), 1325.31);
    assert_abs_diff_eq!(flux[0].as_f64().unwrap(), 0.5);
    assert_abs_diff_eq!(flux[1].as_f64().unwrap(), 1.0);
    assert_abs_diff_eq!(flux[2].as_f64().unwrap(), 1.5);
}

#[test]
fn test_light_curve_other_column() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let input = write_light_curve(tmp_dir.path());
    let output = tmp_dir.path().join("normalised.csv");

    #[rustfmt::skip]
    let cmd = mast_curves()
        .args([
            "light-curve",
            "-i", &format!("{}", input.display()),
            "-o", &format!("{}", output.display()),
            "--y-column", "sap_flux",
        ])
        .ok();
    assert!(cmd.is_ok(), "light-curve failed: {}", cmd.err().unwrap());

    let contents = std::fs::read_to_string(&output).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("time,normalised_flux"));
    assert_eq!(lines.count(), 4);
}

#[test]
fn test_light_curve_missing_column() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let input = write_light_curve(tmp_dir.path());

    #[rustfmt::skip]
    let cmd = mast_curves()
        .args([
            "light-curve",
            "-i", &format!("{}", input.display()),
            "-o", &format!("{}", tmp_dir.path().join("out.csv").display()),
            "--y-column", "KSPSAP_FLUX",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("KSPSAP_FLUX"), "{stderr}");
    assert!(stderr.contains("PDCSAP_FLUX"), "{stderr}");
}
