// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! Native library resolution.
//!
//! This module provides [`LibraryResolver`], which guarantees that a loadable
//! copy of the platform's raylib shared library exists in the working
//! directory before anything tries to load it.

use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{AssetProvider, EmbeddedAssets, Error, Platform, ResolverConfig, Result};

/// Where a [`Resolution`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionSource {
    /// Operator-supplied override, trusted without any check.
    Override,
    /// A file with the platform library name was already present.
    Existing,
    /// The bundled resource was copied into the working directory.
    Extracted,
}

/// Outcome of a single [`LibraryResolver::resolve`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    library_file_name: String,
    absolute_path: PathBuf,
    source: ResolutionSource,
}

impl Resolution {
    /// Platform-specific base name, or the file name of the override.
    pub fn library_file_name(&self) -> &str {
        &self.library_file_name
    }

    /// Absolute path of the library to load.
    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    /// How the path was obtained.
    pub fn source(&self) -> ResolutionSource {
        self.source
    }

    /// Consumes the resolution, keeping only the path handed to the loader.
    pub fn into_path(self) -> PathBuf {
        self.absolute_path
    }
}

impl AsRef<Path> for Resolution {
    fn as_ref(&self) -> &Path {
        &self.absolute_path
    }
}

/// Finds or extracts the raylib shared library.
///
/// Resolution runs in this order:
///
/// 1. A non-empty [`ResolverConfig::library_override`] is returned. An absolute
///    override is used unchanged and a relative one is joined onto the working
///    directory. Nothing is checked or extracted.
/// 2. The OS name is classified into a [`Platform`] bucket.
/// 3. If `<working_dir>/<library file name>` exists it is used untouched, even
///    if stale.
/// 4. Otherwise the bundled resource is copied byte-for-byte to that path.
///
/// # Examples
///
/// ```
/// use raybind::{LibraryResolver, MemoryAssets, ResolutionSource, ResolverConfig};
///
/// # fn main() -> Result<(), raybind::Error> {
/// let dir = tempfile::tempdir().unwrap();
/// let assets = MemoryAssets::new()
///     .with("raylib-5.0_linux_amd64/lib/libraylib.so", b"\x7fELF".to_vec());
/// let config = ResolverConfig::default()
///     .with_os_name("Linux")
///     .with_working_dir(dir.path());
///
/// let resolution = LibraryResolver::new(assets).resolve(&config)?;
/// assert_eq!(resolution.source(), ResolutionSource::Extracted);
/// assert!(resolution.absolute_path().ends_with("libraylib.so"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LibraryResolver<A> {
    assets: A,
}

impl LibraryResolver<EmbeddedAssets> {
    /// Resolver backed by the resources compiled into this binary.
    pub fn embedded() -> Self {
        Self::new(EmbeddedAssets)
    }
}

impl<A: AssetProvider> LibraryResolver<A> {
    /// Resolver extracting from `assets`.
    pub fn new(assets: A) -> Self {
        Self { assets }
    }

    /// The provider bundled resources are read from.
    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// Resolves the absolute path of the raylib shared library.
    ///
    /// # Errors
    ///
    /// - [`Error::WorkingDir`] if the working directory cannot be determined. An
    ///   absolute override never consults it.
    /// - [`Error::ResourceNotFound`] if extraction is needed and the platform's
    ///   resource is not bundled.
    /// - [`Error::Extraction`] if reading the resource or writing the file fails.
    ///
    /// On error no file is left behind under the library name.
    pub fn resolve(&self, config: &ResolverConfig) -> Result<Resolution> {
        if let Some(library) = config.library_override() {
            let absolute_path = if library.is_absolute() {
                library.to_path_buf()
            } else {
                config.resolve_working_dir()?.join(library)
            };
            debug!(path = %absolute_path.display(), "Using library override");
            return Ok(Resolution {
                library_file_name: library
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                absolute_path,
                source: ResolutionSource::Override,
            });
        }

        let platform = Platform::recognise(&config.os_name).unwrap_or_else(|| {
            warn!(
                os_name = %config.os_name,
                "Unrecognised OS name, falling back to the Linux build"
            );
            Platform::Unix
        });
        debug!(os_name = %config.os_name, %platform, "Classified host platform");

        let working_dir = config.resolve_working_dir()?;

        let library = platform.library_file_name();
        let absolute_path = working_dir.join(library);

        let source = if absolute_path.exists() {
            debug!(path = %absolute_path.display(), "Library already present");
            ResolutionSource::Existing
        } else {
            info!("Library not found: {library}");
            let source = self.extract(platform.resource_path(), &working_dir, &absolute_path)?;
            if source == ResolutionSource::Extracted {
                info!("Library copied to working directory: {library}");
            }
            source
        };

        Ok(Resolution {
            library_file_name: library.to_string(),
            absolute_path,
            source,
        })
    }

    /// Copies `resource` to `target` through a temporary file in `working_dir`.
    ///
    /// The temporary file is persisted without clobbering, so a concurrent
    /// process that extracted first keeps its file and this call reports
    /// [`ResolutionSource::Existing`].
    fn extract(
        &self,
        resource: &str,
        working_dir: &Path,
        target: &Path,
    ) -> Result<ResolutionSource> {
        let mut reader = self
            .assets
            .open(resource)
            .map_err(|error| Error::extraction(target, error))?
            .ok_or_else(|| Error::ResourceNotFound {
                resource: resource.to_string(),
            })?;

        let mut staged = tempfile::Builder::new()
            .prefix(".raybind-")
            .suffix(".part")
            .tempfile_in(working_dir)
            .map_err(|error| Error::extraction(target, error))?;
        let copied = io::copy(&mut reader, staged.as_file_mut())
            .and_then(|copied| staged.as_file().sync_all().map(|_| copied))
            .map_err(|error| Error::extraction(target, error))?;
        debug!(resource, bytes = copied, "Staged bundled library");

        // Staged files are owner-only; the library must be loadable by anyone
        #[cfg(unix)]
        {
            use std::{fs::Permissions, os::unix::fs::PermissionsExt};
            staged
                .as_file()
                .set_permissions(Permissions::from_mode(0o644))
                .map_err(|error| Error::extraction(target, error))?;
        }

        match staged.persist_noclobber(target) {
            Ok(_) => Ok(ResolutionSource::Extracted),
            Err(error)
                if error.error.kind() == io::ErrorKind::AlreadyExists && target.exists() =>
            {
                debug!(path = %target.display(), "Library appeared during extraction");
                Ok(ResolutionSource::Existing)
            }
            Err(error) => Err(Error::extraction(target, error.error)),
        }
    }
}

/// Resolves raylib using the process environment and the embedded resources.
///
/// Returns only the absolute path, ready to hand to [`crate::load_api`].
///
/// ```no_run
/// # fn main() -> Result<(), raybind::Error> {
/// let api = raybind::load_api(raybind::resolve_raylib()?)?;
/// # Ok(())
/// # }
/// ```
pub fn resolve_raylib() -> Result<PathBuf> {
    LibraryResolver::embedded()
        .resolve(&ResolverConfig::from_env())
        .map(Resolution::into_path)
}
