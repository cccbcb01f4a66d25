// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use tempfile::TempDir;

use crate::*;

#[test]
fn test_extinction_curve_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let Spectra { target, reference } = write_spectra(tmp_dir.path());

    #[rustfmt::skip]
    let cmd = mast_curves()
        .args([
            "extinction-curve",
            "-t", &format!("{}", target.display()),
            "-r", &format!("{}", reference.display()),
            "--target-bv", "7.5", "6.5",
            "--reference-bv", "5.0", "5.2",
            "-o", &format!("{}", tmp_dir.path().join("curve.csv").display()),
        ])
        .ok();
    assert!(
        cmd.is_ok(),
        "extinction-curve failed on simple test data: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_light_curve_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let input = write_light_curve(tmp_dir.path());

    #[rustfmt::skip]
    let cmd = mast_curves()
        .args([
            "light-curve",
            "-i", &format!("{}", input.display()),
            "-o", &format!("{}", tmp_dir.path().join("lc.csv").display()),
            "-vv",
        ])
        .ok();
    assert!(
        cmd.is_ok(),
        "light-curve failed on simple test data: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}
