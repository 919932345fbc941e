// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! Host platform classification.
//!
//! The package ships exactly one raylib build per platform bucket, so
//! classification only needs to pick the bucket from an OS name string.

use std::fmt;

/// Version of the bundled raylib builds.
pub const RAYLIB_VERSION: &str = raybind_sys::RAYLIB_VERSION;

/// Platform bucket selecting the library file name and bundled resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS (`libraylib.dylib`).
    MacOs,
    /// Windows, 64-bit MSVC build (`raylib.dll`).
    Windows,
    /// Every other host, served by the Linux amd64 build (`libraylib.so`).
    Unix,
}

impl Platform {
    /// Classifies an OS name by case-insensitive substring match.
    ///
    /// Names containing `"Mac OS X"` map to [`Platform::MacOs`], names containing
    /// `"Windows"` map to [`Platform::Windows`] and anything else falls back to
    /// [`Platform::Unix`]. There is no "unsupported" outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use raybind::Platform;
    ///
    /// assert_eq!(Platform::classify("Mac OS X"), Platform::MacOs);
    /// assert_eq!(Platform::classify("Windows 11"), Platform::Windows);
    /// assert_eq!(Platform::classify("FreeBSD"), Platform::Unix);
    /// ```
    pub fn classify(os_name: &str) -> Platform {
        Platform::recognise(os_name).unwrap_or(Platform::Unix)
    }

    /// Like [`Platform::classify`], but returns `None` for names that only
    /// reach [`Platform::Unix`] through the fallback.
    ///
    /// Names containing `"Linux"` are recognised as [`Platform::Unix`].
    ///
    /// ```
    /// use raybind::Platform;
    ///
    /// assert_eq!(Platform::recognise("linux"), Some(Platform::Unix));
    /// assert_eq!(Platform::recognise("FreeBSD"), None);
    /// ```
    pub fn recognise(os_name: &str) -> Option<Platform> {
        let os_name = os_name.to_lowercase();
        if os_name.contains("mac os x") {
            Some(Platform::MacOs)
        } else if os_name.contains("windows") {
            Some(Platform::Windows)
        } else if os_name.contains("linux") {
            Some(Platform::Unix)
        } else {
            None
        }
    }

    /// Classifies the host this process runs on.
    pub fn host() -> Platform {
        Platform::classify(&host_os_name())
    }

    /// Platform-specific file name of the shared library.
    pub fn library_file_name(self) -> &'static str {
        match self {
            Platform::MacOs => "libraylib.dylib",
            Platform::Windows => "raylib.dll",
            Platform::Unix => "libraylib.so",
        }
    }

    /// Relative path of the bundled library inside the package assets.
    pub fn resource_path(self) -> &'static str {
        match self {
            Platform::MacOs => "raylib-5.0_macos/lib/libraylib.dylib",
            Platform::Windows => "raylib-5.0_win64_msvc16/lib/raylib.dll",
            Platform::Unix => "raylib-5.0_linux_amd64/lib/libraylib.so",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Unix => "unix",
        };
        f.write_str(name)
    }
}

/// Returns the conventional name of the host operating system.
///
/// Maps [`std::env::consts::OS`] onto the names classification expects
/// (`"Mac OS X"`, `"Windows"`, `"Linux"`). Other targets are returned verbatim.
pub fn host_os_name() -> String {
    os_name_for(std::env::consts::OS)
}

fn os_name_for(target_os: &str) -> String {
    match target_os {
        "macos" => "Mac OS X".to_string(),
        "windows" => "Windows".to_string(),
        "linux" => "Linux".to_string(),
        other => other.to_string(),
    }
}
