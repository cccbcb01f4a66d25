// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests for making extinction curves.

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use crate::*;

/// Read a two-column CSV curve written by mast-curves.
fn read_curve(file: &Path) -> (Vec<String>, Vec<(f64, f64)>) {
    let mut reader = csv::Reader::from_path(file).unwrap();
    let headers = reader.headers().unwrap().iter().map(String::from).collect();
    let rows = reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r[0].parse().unwrap(), r[1].parse().unwrap())
        })
        .collect();
    (headers, rows)
}

#[test]
fn test_extinction_curve_writes_csv() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let Spectra { target, reference } = write_spectra(tmp_dir.path());
    let output = tmp_dir.path().join("curve.csv");

    #[rustfmt::skip]
    let cmd = mast_curves()
        .args([
            "extinction-curve",
            "--target", &format!("{}", target.display()),
            "--reference", &format!("{}", reference.display()),
            "--target-crop", "1", "0",
            "--reference-crop", "1", "0",
            "--target-norm", "1",
            "--reference-norm", "1",
            "--norm-difference", "1",
            "--output", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "extinction-curve failed: {}", cmd.err().unwrap());

    let (headers, rows) = read_curve(&output);
    assert_eq!(headers, ["inverse_wavelength", "extinction"]);
    assert_eq!(rows.len(), 3);
    assert_abs_diff_eq!(rows[0].0, 8.0);
    assert_abs_diff_eq!(rows[1].0, 5.0);
    assert_abs_diff_eq!(rows[2].0, 4.0);
    assert_abs_diff_eq!(rows[0].1, 2.0_f64.ln());
    assert_abs_diff_eq!(rows[1].1, 0.0);
    assert_abs_diff_eq!(rows[2].1, 0.0);
}

#[test]
fn test_extinction_curve_keeps_degenerate_samples() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let Spectra { target, reference } = write_spectra(tmp_dir.path());
    let output = tmp_dir.path().join("curve.csv");

    #[rustfmt::skip]
    let cmd = mast_curves()
        .args([
            "extinction-curve",
            "-t", &format!("{}", target.display()),
            "-r", &format!("{}", reference.display()),
            "--target-bv", "7.5", "6.5",
            "--reference-bv", "5.0", "5.2",
            "-o", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "extinction-curve failed: {}", cmd.err().unwrap());

    let (_, rows) = read_curve(&output);
    assert_eq!(rows.len(), 4);
    assert!(rows[0].1.is_infinite());
    assert!(rows[1..].iter().all(|(x, y)| x.is_finite() && y.is_finite()));
}

#[test]
fn test_extinction_curve_strict_derive_fails_on_zero_flux() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let Spectra { target, reference } = write_spectra(tmp_dir.path());
    // Swap the spectra so that the zero flux is in the reference.
    let output = tmp_dir.path().join("curve.csv");

    #[rustfmt::skip]
    let cmd = mast_curves()
        .args([
            "extinction-curve",
            "-t", &format!("{}", reference.display()),
            "-r", &format!("{}", target.display()),
            "--target-norm", "1",
            "--reference-norm", "1",
            "--norm-difference", "1",
            "--strict-derive",
            "-o", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("reference flux"), "{stderr}");
    assert!(!output.exists());
}

#[test]
fn test_extinction_curve_bad_crop() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let Spectra { target, reference } = write_spectra(tmp_dir.path());

    #[rustfmt::skip]
    let cmd = mast_curves()
        .args([
            "extinction-curve",
            "-t", &format!("{}", target.display()),
            "-r", &format!("{}", reference.display()),
            "--target-crop", "2", "2",
            "--target-norm", "1",
            "--reference-norm", "1",
            "--norm-difference", "1",
            "-o", &format!("{}", tmp_dir.path().join("curve.csv").display()),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.starts_with("Error: Cannot crop 2 samples"), "{stderr}");
}

#[test]
fn test_extinction_curve_save_toml_and_arg_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let Spectra { target, reference } = write_spectra(tmp_dir.path());
    let output = tmp_dir.path().join("curve.json");
    let toml = tmp_dir.path().join("args.toml");

    // Save the arguments without doing any work.
    #[rustfmt::skip]
    let cmd = mast_curves()
        .args([
            "extinction-curve",
            "-t", &format!("{}", target.display()),
            "-r", &format!("{}", reference.display()),
            "--target-crop", "1", "0",
            "--reference-crop", "1", "0",
            "--target-norm", "1",
            "--reference-norm", "1",
            "--norm-difference", "1",
            "-o", &format!("{}", output.display()),
            "--save-toml", &format!("{}", toml.display()),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "extinction-curve failed: {}", cmd.err().unwrap());
    assert!(toml.exists());
    assert!(!output.exists());

    // Now use the saved arguments, overriding the norm. difference.
    #[rustfmt::skip]
    let cmd = mast_curves()
        .args([
            "extinction-curve",
            &format!("{}", toml.display()),
            "--norm-difference", "2",
        ])
        .ok();
    assert!(cmd.is_ok(), "extinction-curve failed: {}", cmd.err().unwrap());

    let contents = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let x = value["inverse_wavelength"].as_array().unwrap();
    let y = value["extinction"].as_array().unwrap();
    assert_eq!(x.len(), 3);
    assert_abs_diff_eq!(x[0].as_f64().unwrap(), 8.0);
    assert_abs_diff_eq!(y[0].as_f64().unwrap(), 2.0_f64.ln() / 2.0);
}
