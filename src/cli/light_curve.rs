// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parse light-curve arguments into parameters.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::common::{
    display_warnings, InfoPrinter, PlotArgs, SpectrumSourceArgs, Warn, ARG_FILE_HELP,
    INPUT_FILE_HELP,
};
use crate::{
    io::{
        read::{read_spectrum, SpectrumReadError, SpectrumSource},
        write::{
            can_write_to_file, CurveLabels, CurveOutputType, WriteError, CURVE_OUTPUT_EXTENSIONS,
        },
    },
    params::{LightCurveParams, OutputCurveParams},
    plotting::{check_plot_file, PlotError},
    DerivedCurve, MastCurvesError,
};

const DEFAULT_OUTPUT_CURVE_FILENAME: &str = "light_curve.csv";

const LIGHT_CURVE_LABELS: CurveLabels = CurveLabels {
    x: "time",
    y: "normalised_flux",
};

lazy_static::lazy_static! {
    static ref INPUT_HELP: String =
        format!("The time series to normalise, e.g. a TESS or Kepler light-curve file. {}", *INPUT_FILE_HELP);

    static ref OUTPUT_HELP: String =
        format!("Path to the output curve. Supported formats: {}. Default: {}", *CURVE_OUTPUT_EXTENSIONS, DEFAULT_OUTPUT_CURVE_FILENAME);
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
struct LightCurveCliArgs {
    #[clap(short, long, parse(from_os_str), help = INPUT_HELP.as_str(), help_heading = "INPUT FILES")]
    input: Option<PathBuf>,

    #[clap(short, long, parse(from_os_str), help = OUTPUT_HELP.as_str(), help_heading = "OUTPUT FILES")]
    output: Option<PathBuf>,
}

impl LightCurveCliArgs {
    fn merge(self, other: Self) -> Self {
        Self {
            input: self.input.or(other.input),
            output: self.output.or(other.output),
        }
    }
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct LightCurveArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "light-curve")]
    #[serde(default)]
    light_curve_args: LightCurveCliArgs,

    #[clap(flatten)]
    #[serde(rename = "columns")]
    #[serde(default)]
    source_args: SpectrumSourceArgs,

    #[clap(flatten)]
    #[serde(rename = "plot")]
    #[serde(default)]
    plot_args: PlotArgs,
}

impl LightCurveArgs {
    /// Consolidate the command-line arguments with those in an argument file,
    /// preferring the command-line arguments.
    pub(super) fn merge(self) -> Result<LightCurveArgs, MastCurvesError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let LightCurveArgs {
                args_file: _,
                light_curve_args,
                source_args,
                plot_args,
            } = unpack_arg_file!(arg_file);

            Ok(LightCurveArgs {
                args_file: None,
                light_curve_args: cli_args.light_curve_args.merge(light_curve_args),
                source_args: cli_args.source_args.merge(source_args),
                plot_args: cli_args.plot_args.merge(plot_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<LightCurveParams, LightCurveArgsError> {
        debug!("{:#?}", self);

        let LightCurveArgs {
            args_file: _,
            light_curve_args: LightCurveCliArgs { input, output },
            source_args,
            plot_args,
        } = self;

        let input = input.ok_or(LightCurveArgsError::NoInput)?;
        let source = source_args.parse(SpectrumSource::light_curve());
        let light_curve = read_spectrum(&input, &source)?;

        let mut printer = InfoPrinter::new("Light curve set up".into());
        let mut block = vec![
            format!("Input: {}", input.display()).into(),
            format!("Columns: {} against {}", source.y_column, source.x_column).into(),
            format!("{} samples", light_curve.len()).into(),
        ];
        if let Some((min, max)) = light_curve.x_range() {
            let unit = light_curve.x_unit.as_deref().unwrap_or("");
            block.push(format!("Time range: {min}..{max} {unit}").into());
        }
        printer.push_block(block);
        if !light_curve.is_monotonic() {
            "Times are not monotonically increasing".warn();
        }

        let output_file = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_CURVE_FILENAME));
        CurveOutputType::from_path(&output_file)?;
        can_write_to_file(&output_file)?;
        let mut block = vec![format!("Curve: {}", output_file.display()).into()];
        let x_label = match light_curve.x_unit.as_deref() {
            Some(unit) => format!("Time ({unit})"),
            None => "Time".to_string(),
        };
        let plot = plot_args.parse("Light curve", &x_label, "Normalised flux");
        if let Some((plot_file, _)) = &plot {
            check_plot_file(plot_file)?;
            can_write_to_file(plot_file)?;
            block.push(format!("Plot: {}", plot_file.display()).into());
        }
        printer.push_block(block);

        printer.display();
        display_warnings();

        Ok(LightCurveParams {
            light_curve,
            output: OutputCurveParams {
                output_file,
                labels: LIGHT_CURVE_LABELS,
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

#[derive(Error, Debug)]
pub(crate) enum LightCurveArgsError {
    #[error("No input light curve was supplied")]
    NoInput,

    #[error(transparent)]
    SpectrumRead(#[from] SpectrumReadError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}
