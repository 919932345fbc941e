// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for raybind operations.
//!
//! Failures while resolving or extracting the shared library are fatal for the
//! caller: there is no partial success and no retry.

use std::path::PathBuf;

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when resolving or loading raylib.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The bundled resource for the detected platform is not part of the package.
    #[error("Bundled resource not found: {resource}")]
    ResourceNotFound {
        /// Relative resource path that was requested.
        resource: String,
    },

    /// Reading the bundled resource or writing the extracted library failed.
    #[error("Failed to extract library to \"{}\": {source}", .path.display())]
    Extraction {
        /// Destination the library was being extracted to.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The working directory could not be determined.
    #[error("Working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    /// A generic error for failures not covered by the other variants.
    #[error("Other error: {0}")]
    Other(String),

    /// Failed to convert a Rust string to a C-compatible null-terminated string.
    #[error("Null string: {0}")]
    NulString(#[from] std::ffi::NulError),

    /// Failed to load the raylib dynamic library or one of its symbols.
    #[error("Loading library: {0}")]
    LibLoading(#[from] libloading::Error),
}

impl Error {
    /// Wraps an I/O failure that happened while extracting to `path`.
    pub(crate) fn extraction(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Extraction {
            path: path.into(),
            source,
        }
    }
}
