// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parse extinction-curve arguments into parameters.

mod error;

pub(super) use error::ExtinctionCurveArgsError;

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{
    display_warnings, InfoPrinter, PlotArgs, SpectrumSourceArgs, Warn, ARG_FILE_HELP,
    INPUT_FILE_HELP,
};
use crate::{
    curve::AlignMode,
    io::{
        read::{read_spectrum, SpectrumSource},
        write::{can_write_to_file, CurveLabels, CurveOutputType, CURVE_OUTPUT_EXTENSIONS},
    },
    params::{ExtinctionCurveParams, OutputCurveParams},
    photometry::{Normalisation, Photometry},
    plotting::check_plot_file,
    unit_parsing::{WavelengthUnit, WAVELENGTH_UNITS_COMMA_SEPARATED},
    DerivedCurve, MastCurvesError,
};

const DEFAULT_OUTPUT_CURVE_FILENAME: &str = "extinction_curve.csv";

const EXTINCTION_CURVE_LABELS: CurveLabels = CurveLabels {
    x: "inverse_wavelength",
    y: "extinction",
};

lazy_static::lazy_static! {
    static ref OUTPUT_HELP: String =
        format!("Path to the output curve. Supported formats: {}. Default: {}", *CURVE_OUTPUT_EXTENSIONS, DEFAULT_OUTPUT_CURVE_FILENAME);

    static ref TARGET_HELP: String =
        format!("The spectrum of the reddened star. {}", *INPUT_FILE_HELP);

    static ref REFERENCE_HELP: String =
        format!("The spectrum of the unreddened comparison star. {}", *INPUT_FILE_HELP);

    static ref WAVELENGTH_UNIT_HELP: String =
        format!("The unit of the target's wavelengths. Supported units: {}. The default is to use the unit in the target file, or Angstrom if it has none", *WAVELENGTH_UNITS_COMMA_SEPARATED);
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
struct ExtinctionCurveCliArgs {
    #[clap(short, long, parse(from_os_str), help = TARGET_HELP.as_str(), help_heading = "INPUT FILES")]
    target: Option<PathBuf>,

    #[clap(short, long, parse(from_os_str), help = REFERENCE_HELP.as_str(), help_heading = "INPUT FILES")]
    reference: Option<PathBuf>,

    #[clap(short, long, parse(from_os_str), help = OUTPUT_HELP.as_str(), help_heading = "OUTPUT FILES")]
    output: Option<PathBuf>,

    /// The number of samples to drop from the start and end of the target
    /// spectrum, e.g. to discard detector-edge artifacts. Default: 0 0
    #[clap(
        long, help_heading = "CURVE",
        number_of_values = 2,
        value_names = &["START", "END"]
    )]
    target_crop: Option<Vec<usize>>,

    /// The number of samples to drop from the start and end of the reference
    /// spectrum. Default: 0 0
    #[clap(
        long, help_heading = "CURVE",
        number_of_values = 2,
        value_names = &["START", "END"]
    )]
    reference_crop: Option<Vec<usize>>,

    /// After the spectra are truncated to a common length, require their
    /// wavelengths to agree to within this tolerance at every sample. The
    /// default is to not check.
    #[clap(long, value_name = "TOLERANCE", help_heading = "CURVE")]
    strict_alignment: Option<f64>,

    /// Fail rather than produce non-finite curve values when any denominator
    /// is zero: a flux or wavelength, the reference normalisation or the
    /// normalisation difference.
    #[clap(long, help_heading = "CURVE")]
    #[serde(default)]
    strict_derive: bool,

    /// The constant that wavelengths are divided into for the curve's x axis.
    /// Overrides --wavelength-unit. e.g. 10000 turns Angstroms into inverse
    /// microns.
    #[clap(long, help_heading = "CURVE")]
    k: Option<f64>,

    #[clap(long, help = WAVELENGTH_UNIT_HELP.as_str(), help_heading = "CURVE")]
    wavelength_unit: Option<String>,
}

impl ExtinctionCurveCliArgs {
    fn merge(self, other: Self) -> Self {
        Self {
            target: self.target.or(other.target),
            reference: self.reference.or(other.reference),
            output: self.output.or(other.output),
            target_crop: self.target_crop.or(other.target_crop),
            reference_crop: self.reference_crop.or(other.reference_crop),
            strict_alignment: self.strict_alignment.or(other.strict_alignment),
            strict_derive: self.strict_derive || other.strict_derive,
            k: self.k.or(other.k),
            wavelength_unit: self.wavelength_unit.or(other.wavelength_unit),
        }
    }
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
struct NormalisationArgs {
    /// The B and V magnitudes of the target. Used with --reference-bv to get
    /// the normalisation constants.
    #[clap(
        long, help_heading = "NORMALISATION",
        number_of_values = 2,
        allow_hyphen_values = true,
        value_names = &["B", "V"]
    )]
    target_bv: Option<Vec<f64>>,

    /// The B and V magnitudes of the reference.
    #[clap(
        long, help_heading = "NORMALISATION",
        number_of_values = 2,
        allow_hyphen_values = true,
        value_names = &["B", "V"]
    )]
    reference_bv: Option<Vec<f64>>,

    /// The target's normalisation flux. Overrides the value from the target's
    /// V magnitude.
    #[clap(long, allow_hyphen_values = true, help_heading = "NORMALISATION")]
    target_norm: Option<f64>,

    /// The reference's normalisation flux. Overrides the value from the
    /// reference's V magnitude.
    #[clap(long, allow_hyphen_values = true, help_heading = "NORMALISATION")]
    reference_norm: Option<f64>,

    /// The value the curve is divided by. Overrides the colour excess E(B-V)
    /// from the B and V magnitudes.
    #[clap(long, allow_hyphen_values = true, help_heading = "NORMALISATION")]
    norm_difference: Option<f64>,
}

impl NormalisationArgs {
    fn merge(self, other: Self) -> Self {
        Self {
            target_bv: self.target_bv.or(other.target_bv),
            reference_bv: self.reference_bv.or(other.reference_bv),
            target_norm: self.target_norm.or(other.target_norm),
            reference_norm: self.reference_norm.or(other.reference_norm),
            norm_difference: self.norm_difference.or(other.norm_difference),
        }
    }

    fn parse(self) -> Result<Normalisation, ExtinctionCurveArgsError> {
        let NormalisationArgs {
            target_bv,
            reference_bv,
            target_norm,
            reference_norm,
            norm_difference,
        } = self;

        let target_phot = target_bv.map(|v| parse_bv(&v, "target")).transpose()?;
        let reference_phot = reference_bv
            .map(|v| parse_bv(&v, "reference"))
            .transpose()?;
        let from_photometry = match (target_phot, reference_phot) {
            (Some(t), Some(r)) => {
                let n = Normalisation::from_photometry(&t, &r);
                debug!("Normalisation from photometry: {n:?}");
                Some(n)
            }
            (None, None) => None,
            _ => return Err(ExtinctionCurveArgsError::IncompletePhotometry),
        };

        Ok(Normalisation {
            target_norm: pick_norm(
                target_norm,
                from_photometry.map(|n| n.target_norm),
                "target normalisation",
            )?,
            reference_norm: pick_norm(
                reference_norm,
                from_photometry.map(|n| n.reference_norm),
                "reference normalisation",
            )?,
            norm_difference: pick_norm(
                norm_difference,
                from_photometry.map(|n| n.norm_difference),
                "normalisation difference",
            )?,
        })
    }
}

/// Explicitly-given normalisation values take precedence over those from
/// photometry.
fn pick_norm(
    explicit: Option<f64>,
    derived: Option<f64>,
    name: &'static str,
) -> Result<f64, ExtinctionCurveArgsError> {
    match (explicit, derived) {
        (Some(e), Some(d)) => {
            format!("Using the given {name} ({e}) rather than the value from photometry ({d})")
                .warn();
            Ok(e)
        }
        (Some(e), None) => Ok(e),
        (None, Some(d)) => Ok(d),
        (None, None) => Err(ExtinctionCurveArgsError::NoNormalisation(name)),
    }
}

fn parse_bv(values: &[f64], which: &'static str) -> Result<Photometry, ExtinctionCurveArgsError> {
    match values {
        [b, v] => Ok(Photometry::new(*b, *v)),
        _ => Err(ExtinctionCurveArgsError::BadPhotometry {
            which,
            num: values.len(),
        }),
    }
}

fn parse_crop(
    values: Option<Vec<usize>>,
    which: &'static str,
) -> Result<(usize, usize), ExtinctionCurveArgsError> {
    match values.as_deref() {
        None => Ok((0, 0)),
        Some([start, end]) => Ok((*start, *end)),
        Some(v) => Err(ExtinctionCurveArgsError::BadCrop {
            which,
            num: v.len(),
        }),
    }
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct ExtinctionCurveArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "extinction-curve")]
    #[serde(default)]
    curve_args: ExtinctionCurveCliArgs,

    #[clap(flatten)]
    #[serde(rename = "columns")]
    #[serde(default)]
    source_args: SpectrumSourceArgs,

    #[clap(flatten)]
    #[serde(rename = "normalisation")]
    #[serde(default)]
    norm_args: NormalisationArgs,

    #[clap(flatten)]
    #[serde(rename = "plot")]
    #[serde(default)]
    plot_args: PlotArgs,
}

impl ExtinctionCurveArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<ExtinctionCurveArgs, MastCurvesError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let ExtinctionCurveArgs {
                args_file: _,
                curve_args,
                source_args,
                norm_args,
                plot_args,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(ExtinctionCurveArgs {
                args_file: None,
                curve_args: cli_args.curve_args.merge(curve_args),
                source_args: cli_args.source_args.merge(source_args),
                norm_args: cli_args.norm_args.merge(norm_args),
                plot_args: cli_args.plot_args.merge(plot_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    /// Parse the arguments into parameters, reading the spectra along the way.
    fn parse(self) -> Result<ExtinctionCurveParams, ExtinctionCurveArgsError> {
        debug!("{:#?}", self);

        let ExtinctionCurveArgs {
            args_file: _,
            curve_args:
                ExtinctionCurveCliArgs {
                    target,
                    reference,
                    output,
                    target_crop,
                    reference_crop,
                    strict_alignment,
                    strict_derive,
                    k,
                    wavelength_unit,
                },
            source_args,
            norm_args,
            plot_args,
        } = self;

        let target_file = target.ok_or(ExtinctionCurveArgsError::NoTarget)?;
        let reference_file = reference.ok_or(ExtinctionCurveArgsError::NoReference)?;
        let source = source_args.parse(SpectrumSource::default());
        let target = read_spectrum(&target_file, &source)?;
        let reference = read_spectrum(&reference_file, &source)?;

        let mut printer = InfoPrinter::new("Extinction curve set up".into());
        for (name, file, spectrum) in [
            ("Target", &target_file, &target),
            ("Reference", &reference_file, &reference),
        ] {
            let mut block = vec![format!("{name}: {}", file.display()).into()];
            block.push(format!("{} samples", spectrum.len()).into());
            if let Some((min, max)) = spectrum.x_range() {
                let unit = spectrum.x_unit.as_deref().unwrap_or("");
                block.push(format!("x range: {min}..{max} {unit}").into());
            }
            if !spectrum.is_monotonic() {
                format!("{name} wavelengths are not monotonically increasing").warn();
            }
            printer.push_block(block);
        }

        let target_crop = parse_crop(target_crop, "target")?;
        let reference_crop = parse_crop(reference_crop, "reference")?;
        printer.push_line(
            format!(
                "Cropping (start, end): target {target_crop:?}, reference {reference_crop:?}"
            )
            .into(),
        );

        let align_mode = match strict_alignment {
            None => AlignMode::Truncate,
            Some(tolerance) if tolerance >= 0.0 => AlignMode::Strict { tolerance },
            Some(tolerance) => return Err(ExtinctionCurveArgsError::BadTolerance(tolerance)),
        };
        printer.push_line(format!("Alignment: {align_mode:?}").into());

        let k = match (k, wavelength_unit) {
            (Some(k), unit) => {
                if unit.is_some() {
                    "Both k and a wavelength unit were given; using k".warn();
                }
                k
            }
            (None, Some(unit)) => WavelengthUnit::from_str(&unit)?.inverse_micron_factor(),
            (None, None) => unit_from_file(target.x_unit.as_deref()).inverse_micron_factor(),
        };
        printer.push_line(format!("k: {k}").into());

        let normalisation = norm_args.parse()?;
        printer.push_block(vec![
            format!("Target norm.: {}", normalisation.target_norm).into(),
            format!("Reference norm.: {}", normalisation.reference_norm).into(),
            format!("Norm. difference: {}", normalisation.norm_difference).into(),
        ]);
        if strict_derive {
            printer.push_line("Zero denominators are errors".into());
        }

        let output_file = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_CURVE_FILENAME));
        CurveOutputType::from_path(&output_file)?;
        can_write_to_file(&output_file)?;
        let mut block = vec![format!("Curve: {}", output_file.display()).into()];
        let plot = plot_args.parse("Extinction curve", "1/λ (μm⁻¹)", "Extinction");
        if let Some((plot_file, _)) = &plot {
            check_plot_file(plot_file)?;
            can_write_to_file(plot_file)?;
            block.push(format!("Plot: {}", plot_file.display()).into());
        }
        printer.push_block(block);

        printer.display();
        display_warnings();

        Ok(ExtinctionCurveParams {
            target,
            reference,
            target_crop,
            reference_crop,
            align_mode,
            strict_derive,
            normalisation,
            k,
            output: OutputCurveParams {
                output_file,
                labels: EXTINCTION_CURVE_LABELS,
                plot,
            },
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<Option<DerivedCurve>, MastCurvesError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(None);
        }

        let curve = params.run()?;
        Ok(Some(curve))
    }
}

/// Work out the wavelength unit from a table's unit string, falling back to
/// Angstrom.
fn unit_from_file(unit: Option<&str>) -> WavelengthUnit {
    match unit.map(WavelengthUnit::from_str) {
        Some(Ok(unit)) => {
            debug!("Using the target file's wavelength unit ({unit})");
            unit
        }
        Some(Err(e)) => {
            format!("{e}; assuming Angstrom").warn();
            WavelengthUnit::Angstrom
        }
        None => WavelengthUnit::Angstrom,
    }
}
