// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! # raybind - raylib loader and bindings
//!
//! Locates, extracts and loads the raylib 5.0 shared library, then exposes
//! its C API through the raw symbol table in [`raybind_sys`].
//!
//! ## Overview
//!
//! raylib is not linked at build time. Instead, before the first foreign call,
//! a [`LibraryResolver`] makes sure a loadable copy of the platform's shared
//! library is present in the working directory and returns its absolute path,
//! which [`load_api`] then opens.
//!
//! ### Key Concepts
//!
//! - **Platform bucket**: one of macOS, Windows or generic Unix ([`Platform`]),
//!   chosen by a substring match on the OS name
//! - **Bundled resource**: the platform's library packaged with the binary,
//!   served by an [`AssetProvider`] until it is extracted
//! - **Override**: an operator-supplied library path ([`config::LIBRARY_OVERRIDE_ENV`])
//!   that skips detection and extraction entirely
//! - **Upcall**: raylib calling back into Rust, see the `set_*_handler` functions
//!
//! ## Architecture
//!
//! ```text
//! ResolverConfig ──► LibraryResolver ──► Resolution ──► load_api ──► RaylibApi
//!                          │                                            │
//!                    AssetProvider                             set_*_handler
//!           (Embedded / Directory / Memory)                 (file I/O trampolines)
//! ```
//!
//! ## Examples
//!
//! ```no_run
//! use raybind::{LibraryResolver, ResolverConfig, load_resolved};
//! use std::ffi::CString;
//!
//! # fn main() -> Result<(), raybind::Error> {
//! let (api, resolution) = load_resolved(&LibraryResolver::embedded(), &ResolverConfig::from_env())?;
//! println!("raylib loaded from {}", resolution.absolute_path().display());
//!
//! let title = CString::new("raybind")?;
//! unsafe {
//!     api.init_window(800, 450, title.as_ptr());
//!     api.set_target_fps(60);
//!     while !api.window_should_close() {
//!         api.begin_drawing();
//!         api.clear_background(raybind_sys::RAYWHITE);
//!         api.end_drawing();
//!     }
//!     api.close_window();
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! Resolution is synchronous and meant to run once at startup. The loaded
//! [`RaylibApi`] handle is `Send + Sync`, but raylib itself expects window and
//! drawing calls on the thread that created the window.

mod api;
mod assets;
mod callbacks;
mod error;
mod platform;
mod resolver;

pub mod config;

pub use api::{RaylibApi, RaylibApiHandle, load_api, load_resolved};
pub use assets::{AssetProvider, DirectoryAssets, EmbeddedAssets, MemoryAssets};
pub use callbacks::{
    clear_file_handlers, set_load_file_data_handler, set_load_file_text_handler,
    set_save_file_data_handler, set_save_file_text_handler,
};
pub use config::ResolverConfig;
pub use error::{Error, Result};
pub use platform::{Platform, RAYLIB_VERSION, host_os_name};
pub use resolver::{LibraryResolver, Resolution, ResolutionSource, resolve_raylib};
