// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! Resolves the raylib shared library and prints its absolute path.
//!
//! ```text
//! cargo run --example resolve -- --assets-dir ./natives --load
//! RAYBIND_LIBRARY=/opt/lib/libraylib.so cargo run --example resolve
//! ```

mod common;

use std::path::PathBuf;

use clap::Parser;
use raybind::{
    DirectoryAssets, EmbeddedAssets, LibraryResolver, Resolution, ResolverConfig, config,
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about = "Find or extract the raylib shared library")]
struct Opts {
    /// Library path to use as-is, skipping detection and extraction.
    #[arg(long, env = config::LIBRARY_OVERRIDE_ENV)]
    library: Option<PathBuf>,

    /// OS name to classify instead of the host's (e.g. "Mac OS X").
    #[arg(long)]
    os_name: Option<String>,

    /// Directory to look up and extract the library in.
    #[arg(long)]
    working_dir: Option<PathBuf>,

    /// Read bundled builds from this directory instead of the embedded ones.
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// JSON resolver configuration; command line flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Load the resolved library and bind every symbol.
    #[arg(long)]
    load: bool,
}

impl Opts {
    fn resolver_config(&self) -> Result<ResolverConfig, raybind::Error> {
        let mut resolver_config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|error| {
                    raybind::Error::Other(format!(
                        "Error while reading config from \"{}\": {}",
                        path.display(),
                        error
                    ))
                })?;
                serde_json::from_str(&json)
                    .map_err(|error| raybind::Error::Other(format!("Invalid config: {error}")))?
            }
            None => ResolverConfig::default(),
        };
        if let Some(library) = &self.library {
            resolver_config = resolver_config.with_library_override(library);
        }
        if let Some(os_name) = &self.os_name {
            resolver_config = resolver_config.with_os_name(os_name);
        }
        if let Some(dir) = &self.working_dir {
            resolver_config = resolver_config.with_working_dir(dir);
        }
        Ok(resolver_config)
    }
}

fn run(opts: &Opts) -> Result<Resolution, raybind::Error> {
    let resolver_config = opts.resolver_config()?;
    let resolution = match &opts.assets_dir {
        Some(dir) => LibraryResolver::new(DirectoryAssets::new(dir)).resolve(&resolver_config)?,
        None => LibraryResolver::new(EmbeddedAssets).resolve(&resolver_config)?,
    };
    info!(source = ?resolution.source(), "Resolved raylib");

    if opts.load {
        let api = raybind::load_api(resolution.absolute_path())?;
        info!(?api, "Bound raylib symbols");
    }
    Ok(resolution)
}

fn main() {
    common::setup_logging();
    let opts = Opts::parse();

    match run(&opts) {
        Ok(resolution) => println!("{}", resolution.absolute_path().display()),
        Err(error) => {
            tracing::error!("{error}");
            std::process::exit(1);
        }
    }
}
