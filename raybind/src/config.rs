// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! Resolver configuration and build-time paths.
//!
//! The resolver never reads process-wide settings itself. Callers populate a
//! [`ResolverConfig`] (usually via [`ResolverConfig::from_env`]) and pass it in.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, platform::host_os_name};

// Build script generates constants.rs with RAYBIND_ASSETS_DIR
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

/// Environment variable naming an already resolvable raylib library path.
pub const LIBRARY_OVERRIDE_ENV: &str = "RAYBIND_LIBRARY";

/// Inputs to [`crate::LibraryResolver::resolve`].
///
/// Can be deserialized from JSON; a missing `os_name` defaults to the host OS.
///
/// ```
/// use raybind::ResolverConfig;
///
/// let config = ResolverConfig::default()
///     .with_os_name("Windows 10")
///     .with_working_dir("/tmp/game");
/// assert!(config.library_override().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Operator-supplied library path. When set and non-empty, it is returned
    /// as-is (made absolute) with no existence check and no extraction.
    #[serde(default)]
    pub library_override: Option<PathBuf>,

    /// OS name used for platform classification.
    #[serde(default = "host_os_name")]
    pub os_name: String,

    /// Directory the library is looked up in and extracted to. `None` means the
    /// process current directory at resolve time.
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            library_override: None,
            os_name: host_os_name(),
            working_dir: None,
        }
    }
}

impl ResolverConfig {
    /// Builds a configuration from the process environment.
    ///
    /// The override comes from [`LIBRARY_OVERRIDE_ENV`]; an unset or empty
    /// variable means no override.
    pub fn from_env() -> Self {
        Self {
            library_override: std::env::var_os(LIBRARY_OVERRIDE_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            ..Self::default()
        }
    }

    /// Sets the library override.
    pub fn with_library_override(mut self, library: impl Into<PathBuf>) -> Self {
        self.library_override = Some(library.into());
        self
    }

    /// Sets the OS name used for classification.
    pub fn with_os_name(mut self, os_name: impl Into<String>) -> Self {
        self.os_name = os_name.into();
        self
    }

    /// Sets the directory to look up and extract the library in.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The override, if present and non-empty.
    pub fn library_override(&self) -> Option<&Path> {
        self.library_override
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Absolute working directory the resolver operates in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkingDir`] if the current directory cannot be read.
    pub fn resolve_working_dir(&self) -> Result<PathBuf> {
        match &self.working_dir {
            Some(dir) => std::path::absolute(dir).map_err(Error::WorkingDir),
            None => std::env::current_dir().map_err(Error::WorkingDir),
        }
    }
}

/// Returns the crate's `assets/` directory as seen at build time.
///
/// Used by [`crate::DirectoryAssets::bundled`] to read platform builds straight
/// from the source tree during development.
pub fn bundled_assets_dir() -> PathBuf {
    PathBuf::from(RAYBIND_ASSETS_DIR)
}
