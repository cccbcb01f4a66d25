// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use super::CURVE_OUTPUT_EXTENSIONS;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Cannot write a curve to '{}'; supported extensions: {}", .0.display(), *CURVE_OUTPUT_EXTENSIONS)]
    UnknownFileType(PathBuf),

    #[error("Cannot write to '{}'; it is a directory", .0.display())]
    IsADirectory(PathBuf),

    #[error("Cannot write to '{}'", .0.display())]
    FileNotWritable(PathBuf),

    #[error("Couldn't create directory '{}'", .0.display())]
    NewDirectory(PathBuf),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
