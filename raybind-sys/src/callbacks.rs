// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! Function-pointer typedefs raylib calls back into.
//!
//! These mirror the C typedefs one-to-one. `None` is the null pointer, which
//! raylib treats as "restore the built-in behaviour".

use std::os::raw::{c_char, c_int, c_uchar, c_uint, c_void};

/// `void (*AudioCallback)(void *bufferData, unsigned int frames)`
///
/// Used for audio stream callbacks and stream/mixed processors. `bufferData`
/// holds `frames` interleaved frames in the stream's sample format.
pub type AudioCallback = Option<unsafe extern "C" fn(bufferData: *mut c_void, frames: c_uint)>;

/// `unsigned char *(*LoadFileDataCallback)(const char *fileName, int *dataSize)`
///
/// The returned buffer is released by raylib with `MemFree`.
pub type LoadFileDataCallback =
    Option<unsafe extern "C" fn(fileName: *const c_char, dataSize: *mut c_int) -> *mut c_uchar>;

/// `bool (*SaveFileDataCallback)(const char *fileName, void *data, int dataSize)`
pub type SaveFileDataCallback = Option<
    unsafe extern "C" fn(fileName: *const c_char, data: *mut c_void, dataSize: c_int) -> bool,
>;

/// `char *(*LoadFileTextCallback)(const char *fileName)`
///
/// The returned string must be NUL-terminated and is released with `MemFree`.
pub type LoadFileTextCallback =
    Option<unsafe extern "C" fn(fileName: *const c_char) -> *mut c_char>;

/// `bool (*SaveFileTextCallback)(const char *fileName, char *text)`
pub type SaveFileTextCallback =
    Option<unsafe extern "C" fn(fileName: *const c_char, text: *mut c_char) -> bool>;
