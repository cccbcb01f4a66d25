// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Arguments shared between `mast-curves` subcommands, e.g. every subcommand
//! that reads a table needs to know which HDU and columns to use.

mod printers;

pub(super) use printers::InfoPrinter;
pub(crate) use printers::{display_warnings, Warn};

use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    constants::DEFAULT_HDU,
    io::read::{SpectrumSource, SPECTRUM_INPUT_EXTENSIONS},
    plotting::PlotSpec,
};

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    pub(super) static ref INPUT_FILE_HELP: String =
        format!("Supported formats: {}", *SPECTRUM_INPUT_EXTENSIONS);

    static ref HDU_HELP: String =
        format!("The HDU of a FITS file containing the table. 0 is the primary HDU. Default: {DEFAULT_HDU}");
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(MastCurvesError::ArgFile(format!(
                            "Couldn't decode toml structure from {}:\n{err}",
                            $arg_file.display()
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(MastCurvesError::ArgFile(format!(
                            "Couldn't decode json structure from {}:\n{err}",
                            $arg_file.display()
                        )))
                    }
                }
            }

            _ => {
                return Err(MastCurvesError::ArgFile(format!(
                    "Argument file '{}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file.display(), *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

/// Where the samples live in an input file.
#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct SpectrumSourceArgs {
    #[clap(long, help = HDU_HELP.as_str(), help_heading = "INPUT COLUMNS")]
    pub(super) hdu: Option<usize>,

    /// The name of the independent-variable column (case insensitive).
    /// Default: WAVELENGTH for spectra, TIME for light curves.
    #[clap(long, help_heading = "INPUT COLUMNS")]
    pub(super) x_column: Option<String>,

    /// The name of the dependent-variable column (case insensitive). Default:
    /// FLUX for spectra, PDCSAP_FLUX for light curves.
    #[clap(long, help_heading = "INPUT COLUMNS")]
    pub(super) y_column: Option<String>,
}

impl SpectrumSourceArgs {
    pub(super) fn merge(self, other: Self) -> Self {
        Self {
            hdu: self.hdu.or(other.hdu),
            x_column: self.x_column.or(other.x_column),
            y_column: self.y_column.or(other.y_column),
        }
    }

    /// Fill in anything unspecified from `defaults`.
    pub(super) fn parse(self, defaults: SpectrumSource) -> SpectrumSource {
        SpectrumSource {
            hdu: self.hdu.unwrap_or(defaults.hdu),
            x_column: self.x_column.unwrap_or(defaults.x_column),
            y_column: self.y_column.unwrap_or(defaults.y_column),
        }
    }
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct PlotArgs {
    /// Also draw the curve to this PNG file. Only available if compiled with
    /// the "plotting" feature.
    #[clap(long, parse(from_os_str), help_heading = "PLOTTING")]
    pub(super) plot: Option<PathBuf>,

    /// The caption of the plot.
    #[clap(long, help_heading = "PLOTTING")]
    pub(super) plot_title: Option<String>,

    /// The minimum y-range value on the plot.
    #[clap(long, allow_hyphen_values = true, help_heading = "PLOTTING")]
    pub(super) plot_min_y: Option<f64>,

    /// The maximum y-range value on the plot.
    #[clap(long, allow_hyphen_values = true, help_heading = "PLOTTING")]
    pub(super) plot_max_y: Option<f64>,
}

impl PlotArgs {
    pub(super) fn merge(self, other: Self) -> Self {
        Self {
            plot: self.plot.or(other.plot),
            plot_title: self.plot_title.or(other.plot_title),
            plot_min_y: self.plot_min_y.or(other.plot_min_y),
            plot_max_y: self.plot_max_y.or(other.plot_max_y),
        }
    }

    /// Turn the arguments into a plot file and a description of what goes on
    /// the plot, if a plot was requested.
    pub(super) fn parse(
        self,
        default_title: &str,
        x_label: &str,
        y_label: &str,
    ) -> Option<(PathBuf, PlotSpec)> {
        let PlotArgs {
            plot,
            plot_title,
            plot_min_y,
            plot_max_y,
        } = self;

        let file = plot?;
        let (min_y, max_y) = match (plot_min_y, plot_max_y) {
            (Some(min), Some(max)) if min >= max => {
                format!("The plot's minimum y value ({min}) isn't smaller than its maximum ({max}); ignoring both").warn();
                (None, None)
            }
            other => other,
        };

        Some((
            file,
            PlotSpec {
                title: plot_title.unwrap_or_else(|| default_title.to_string()),
                x_label: x_label.to_string(),
                y_label: y_label.to_string(),
                min_y,
                max_y,
            },
        ))
    }
}
