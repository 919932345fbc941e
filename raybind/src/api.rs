// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! Loading the raylib shared library.

use std::{ffi::OsStr, sync::Arc};

use tracing::info;

use crate::{AssetProvider, LibraryResolver, Resolution, ResolverConfig, Result};

/// Loaded raylib symbol table.
pub type RaylibApi = raybind_sys::Raylib;

/// Shared handle to the loaded library; symbols stay valid while any clone lives.
pub type RaylibApiHandle = Arc<RaylibApi>;

/// Opens the raylib shared library at `path` and binds every downcall.
///
/// # Errors
///
/// Returns [`crate::Error::LibLoading`] if the library cannot be opened or any
/// declared symbol is missing.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> Result<(), raybind::Error> {
/// let api = raybind::load_api("/opt/lib/libraylib.so")?;
/// unsafe { api.set_target_fps(60) };
/// # Ok(())
/// # }
/// ```
pub fn load_api(path: impl AsRef<OsStr>) -> Result<RaylibApiHandle> {
    // Safety: the library is trusted to be a raylib 5.0 build; its exports are
    // checked against the symbol table before any call can happen.
    let api = unsafe { RaylibApi::new(path.as_ref()) }?;
    info!(
        path = %path.as_ref().to_string_lossy(),
        symbols = RaylibApi::SYMBOLS.len(),
        "Loaded raylib"
    );
    Ok(Arc::new(api))
}

/// Resolves the library with `resolver` and then loads it.
pub fn load_resolved<A: AssetProvider>(
    resolver: &LibraryResolver<A>,
    config: &ResolverConfig,
) -> Result<(RaylibApiHandle, Resolution)> {
    let resolution = resolver.resolve(config)?;
    let api = load_api(resolution.absolute_path())?;
    Ok((api, resolution))
}
