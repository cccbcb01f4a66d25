// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use super::*;
use crate::{
    curve::{AlignMode, CurveError},
    photometry::Normalisation,
    Spectrum,
};

const LABELS: CurveLabels = CurveLabels { x: "x", y: "y" };

fn extinction_params(output_file: PathBuf) -> ExtinctionCurveParams {
    ExtinctionCurveParams {
        target: Spectrum::new(
            vec![1000.0, 1250.0, 2000.0, 2500.0, 3000.0],
            vec![0.0, 1.0, 2.0, 4.0, 5.0],
        )
        .unwrap(),
        reference: Spectrum::new(
            vec![1000.0, 1250.0, 2000.0, 2500.0],
            vec![1.0, 2.0, 2.0, 4.0],
        )
        .unwrap(),
        target_crop: (1, 0),
        reference_crop: (1, 0),
        align_mode: AlignMode::Truncate,
        strict_derive: false,
        normalisation: Normalisation {
            target_norm: 1.0,
            reference_norm: 1.0,
            norm_difference: 1.0,
        },
        k: 1e4,
        output: OutputCurveParams {
            output_file,
            labels: LABELS,
            plot: None,
        },
    }
}

#[test]
fn test_extinction_curve_pipeline() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output_file = tmp_dir.path().join("curve.csv");
    let params = extinction_params(output_file.clone());

    let curve = params.run().unwrap();
    // Cropping leaves 4 target and 3 reference samples; aligning leaves 3.
    assert_eq!(curve.len(), 3);
    assert_abs_diff_eq!(curve.x()[0], 8.0);
    assert_abs_diff_eq!(curve.x()[1], 5.0);
    assert_abs_diff_eq!(curve.x()[2], 4.0);
    // ln(1 / (1/2)), ln(1 / (2/2)), ln(1 / (4/4))
    assert_abs_diff_eq!(curve.y()[0], 2.0_f64.ln());
    assert_abs_diff_eq!(curve.y()[1], 0.0);
    assert_abs_diff_eq!(curve.y()[2], 0.0);

    let contents = std::fs::read_to_string(&output_file).unwrap();
    assert_eq!(contents.lines().count(), 4);
    assert_eq!(contents.lines().next(), Some("x,y"));
}

#[test]
fn test_extinction_curve_without_cropping_has_degenerate_samples() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let mut params = extinction_params(tmp_dir.path().join("curve.json"));
    params.target_crop = (0, 0);
    params.reference_crop = (0, 0);

    // The target's first flux is 0, so the first sample is infinite.
    let curve = params.derive().unwrap();
    assert_eq!(curve.len(), 4);
    assert!(curve.y()[0].is_infinite());
    assert_eq!(curve.num_non_finite(), 1);
}

#[test]
fn test_extinction_curve_strict_modes() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let mut params = extinction_params(tmp_dir.path().join("curve.csv"));
    params.align_mode = AlignMode::Strict { tolerance: 1e-6 };
    params.strict_derive = true;
    assert!(params.derive().is_ok());

    params.reference = Spectrum::new(
        vec![1000.0, 1250.0, 2001.0, 2500.0],
        vec![1.0, 2.0, 2.0, 4.0],
    )
    .unwrap();
    assert!(matches!(
        params.derive(),
        Err(CurveError::GridMismatch { index: 1, .. })
    ));

    params.align_mode = AlignMode::Truncate;
    params.normalisation.norm_difference = 0.0;
    assert!(matches!(
        params.derive(),
        Err(CurveError::DegenerateInput { index: None, .. })
    ));
}

#[test]
fn test_extinction_curve_bad_crop() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output_file = tmp_dir.path().join("curve.csv");
    let mut params = extinction_params(output_file.clone());
    params.reference_crop = (2, 2);

    let result = params.run();
    assert!(matches!(
        result,
        Err(ExtinctionCurveError::Curve(CurveError::Range {
            start: 2,
            end: 2,
            len: 4
        }))
    ));
    // Nothing should be written if the curve couldn't be made.
    assert!(!output_file.exists());
}

#[test]
fn test_light_curve_pipeline() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output_file = tmp_dir.path().join("light_curve.json");
    let params = LightCurveParams {
        light_curve: Spectrum::new(
            vec![0.0, 1.0, 2.0, f64::NAN, 4.0],
            vec![10.0, f64::NAN, 20.0, 5.0, 30.0],
        )
        .unwrap(),
        output: OutputCurveParams {
            output_file: output_file.clone(),
            labels: LABELS,
            plot: None,
        },
    };

    let curve = params.run().unwrap();
    assert_eq!(curve.x(), &[0.0, 2.0, 4.0]);
    assert_abs_diff_eq!(curve.y()[0], 0.5);
    assert_abs_diff_eq!(curve.y()[1], 1.0);
    assert_abs_diff_eq!(curve.y()[2], 1.5);

    let contents = std::fs::read_to_string(&output_file).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["x"], serde_json::json!([0.0, 2.0, 4.0]));
}

#[test]
fn test_light_curve_all_flagged() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let params = LightCurveParams {
        light_curve: Spectrum::new(vec![0.0, 1.0], vec![f64::NAN, f64::NAN]).unwrap(),
        output: OutputCurveParams {
            output_file: tmp_dir.path().join("light_curve.csv"),
            labels: LABELS,
            plot: None,
        },
    };
    assert!(matches!(
        params.run(),
        Err(LightCurveError::Curve(CurveError::Empty))
    ));
}
