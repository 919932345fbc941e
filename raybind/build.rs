// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! Build script for the `raybind` crate.
//!
//! This script generates two files in the build output directory:
//! 1. `constants.rs` with the compile-time path of the bundled `assets/` directory
//! 2. `embedded_assets.rs` with an `include_bytes!` table of every shared library
//!    found under `assets/`, keyed by its `/`-separated relative path
//!
//! Drop the platform builds into `assets/` before building, e.g.
//! `assets/raylib-5.0_linux_amd64/lib/libraylib.so`.

use std::env;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// File extensions recognised as shared libraries.
const LIBRARY_EXTENSIONS: &[&str] = &["so", "dylib", "dll"];

/// Recursively collects shared library files under `dir`.
fn collect_libraries(dir: &Path, found: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_libraries(&path, found);
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| LIBRARY_EXTENSIONS.contains(&ext))
        {
            found.push(path);
        }
    }
}

/// Converts `path` to a `/`-separated key relative to `root`.
fn asset_key(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .expect("asset outside of assets directory")
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("failed to get current directory"));
    let assets_dir = manifest_dir.join("assets");
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("failed to get output directory"));

    // Re-embed whenever a library is added or replaced
    println!("cargo:rerun-if-changed={}", assets_dir.display());

    let constants = format!(
        "pub const RAYBIND_ASSETS_DIR: &str = {:?};\n",
        assets_dir.to_string_lossy()
    );
    std::fs::write(out_dir.join("constants.rs"), constants).expect("Unable to write file");

    let mut libraries = Vec::new();
    collect_libraries(&assets_dir, &mut libraries);
    libraries.sort();

    let mut table = String::from("pub(crate) static EMBEDDED: &[(&str, &[u8])] = &[\n");
    for library in &libraries {
        println!("cargo:rerun-if-changed={}", library.display());
        writeln!(
            table,
            "    ({:?}, include_bytes!({:?}) as &[u8]),",
            asset_key(&assets_dir, library),
            library.to_string_lossy()
        )
        .expect("Unable to format asset table");
    }
    table.push_str("];\n");
    std::fs::write(out_dir.join("embedded_assets.rs"), table).expect("Unable to write file");
}
