// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! Bundled resource providers.
//!
//! A provider maps a fixed relative path (e.g.
//! `raylib-5.0_linux_amd64/lib/libraylib.so`) to a byte stream. The resolver
//! only ever asks for one path per platform bucket.

use std::{
    borrow::Cow,
    collections::HashMap,
    fs::File,
    io::{self, Cursor, Read},
    path::{Path, PathBuf},
};

// Build script generates embedded_assets.rs with the EMBEDDED table
include!(concat!(env!("OUT_DIR"), "/embedded_assets.rs"));

/// Source of bundled resources, keyed by `/`-separated relative paths.
pub trait AssetProvider: Send + Sync {
    /// Opens the resource at `relative_path` as a byte stream.
    ///
    /// Returns `Ok(None)` if the provider has no such resource, and `Err` if it
    /// exists but could not be opened.
    fn open(&self, relative_path: &str) -> io::Result<Option<Box<dyn Read + '_>>>;
}

impl<A: AssetProvider + ?Sized> AssetProvider for &A {
    fn open(&self, relative_path: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        (**self).open(relative_path)
    }
}

/// Resources compiled into the binary by the build script.
///
/// Every `.so`/`.dylib`/`.dll` under the crate's `assets/` directory at build
/// time is embedded here.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedAssets;

impl EmbeddedAssets {
    /// Relative paths of every embedded resource.
    pub fn paths() -> impl Iterator<Item = &'static str> {
        EMBEDDED.iter().map(|(path, _)| *path)
    }

    /// Raw bytes of an embedded resource.
    pub fn get(relative_path: &str) -> Option<&'static [u8]> {
        EMBEDDED
            .iter()
            .find(|(path, _)| *path == relative_path)
            .map(|(_, bytes)| *bytes)
    }
}

impl AssetProvider for EmbeddedAssets {
    fn open(&self, relative_path: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        Ok(EmbeddedAssets::get(relative_path)
            .map(|bytes| Box::new(bytes) as Box<dyn Read + '_>))
    }
}

/// Resources read from an unpacked bundle directory on disk.
///
/// # Examples
///
/// ```no_run
/// use raybind::{DirectoryAssets, LibraryResolver, ResolverConfig};
///
/// # fn main() -> Result<(), raybind::Error> {
/// let resolver = LibraryResolver::new(DirectoryAssets::new("/opt/mygame/natives"));
/// let resolution = resolver.resolve(&ResolverConfig::from_env())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The crate's own `assets/` directory as seen at build time.
    pub fn bundled() -> Self {
        Self::new(crate::config::bundled_assets_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetProvider for DirectoryAssets {
    fn open(&self, relative_path: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        let path = relative_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment));
        match File::open(&path) {
            Ok(file) if file.metadata()?.is_file() => Ok(Some(Box::new(file) as Box<dyn Read>)),
            Ok(_) => Ok(None),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error),
        }
    }
}

/// In-memory resources, typically used as a test double.
#[derive(Debug, Default, Clone)]
pub struct MemoryAssets {
    assets: HashMap<String, Cow<'static, [u8]>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a resource.
    pub fn insert(
        &mut self,
        relative_path: impl Into<String>,
        bytes: impl Into<Cow<'static, [u8]>>,
    ) -> &mut Self {
        self.assets.insert(relative_path.into(), bytes.into());
        self
    }

    /// Builder-style variant of [`MemoryAssets::insert`].
    pub fn with(
        mut self,
        relative_path: impl Into<String>,
        bytes: impl Into<Cow<'static, [u8]>>,
    ) -> Self {
        self.insert(relative_path, bytes);
        self
    }
}

impl AssetProvider for MemoryAssets {
    fn open(&self, relative_path: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        Ok(self
            .assets
            .get(relative_path)
            .map(|bytes| Box::new(Cursor::new(bytes.as_ref())) as Box<dyn Read + '_>))
    }
}
