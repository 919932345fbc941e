// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! # raybind-sys: Raw FFI bindings to raylib
//!
//! This crate provides low-level, unsafe Rust bindings to raylib 5.0. The
//! shared library is opened at runtime with `libloading` rather than linked,
//! so the same binary can run against whichever copy the resolver in the
//! [`raybind`] crate finds or extracts.
//!
//! ## Overview
//!
//! `raybind-sys` exposes:
//! - `#[repr(C)]` struct layouts (`Color`, `Image`, `Mesh`, `Music`, etc.)
//! - Function-pointer typedefs for native-to-Rust callbacks (`AudioCallback`,
//!   `LoadFileDataCallback`, ...)
//! - [`Raylib`], a symbol table holding one resolved function pointer per
//!   declared downcall
//!
//! ## Usage
//!
//! **Most users should NOT use this crate directly.** Use the [`raybind`]
//! crate instead, which resolves the library path, loads it and offers safe
//! callback registration.
//!
//! ## Safety
//!
//! Every downcall is `unsafe`. raylib is not thread-safe: window, drawing and
//! GPU resource functions must be called from the thread that created the
//! window. Pointers passed in must stay valid for the duration of the call and
//! ownership of returned buffers follows raylib's `Load*`/`Unload*` pairing.
//!
//! [`raybind`]: https://docs.rs/raybind

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::too_many_arguments)]

extern crate libloading;

mod callbacks;
mod library;
mod types;

pub use callbacks::*;
pub use library::Raylib;
pub use types::*;
