// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! Tests for resolver configuration and the bundled asset providers.

use std::{io::Read, path::Path};

use raybind::{
    AssetProvider, DirectoryAssets, EmbeddedAssets, MemoryAssets, ResolverConfig,
    config::{LIBRARY_OVERRIDE_ENV, bundled_assets_dir},
    host_os_name,
};

fn read_all(provider: &dyn AssetProvider, path: &str) -> Option<Vec<u8>> {
    provider.open(path).unwrap().map(|mut reader| {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).unwrap();
        bytes
    })
}

#[test]
fn default_config_targets_the_host() {
    let config = ResolverConfig::default();
    assert_eq!(config.os_name, host_os_name());
    assert!(config.library_override().is_none());
    assert!(config.working_dir.is_none());
}

#[test]
fn config_parses_from_json() {
    let config: ResolverConfig = serde_json::from_str(
        r#"{ "library_override": "/opt/lib/customraylib.so", "working_dir": "/srv/game" }"#,
    )
    .unwrap();
    assert_eq!(
        config.library_override(),
        Some(Path::new("/opt/lib/customraylib.so"))
    );
    assert_eq!(config.os_name, host_os_name());
    assert_eq!(config.working_dir.as_deref(), Some(Path::new("/srv/game")));

    let config: ResolverConfig = serde_json::from_str(r#"{ "os_name": "Mac OS X" }"#).unwrap();
    assert_eq!(config.os_name, "Mac OS X");
    assert!(config.library_override().is_none());
}

#[test]
fn config_rejects_unknown_fields() {
    let result = serde_json::from_str::<ResolverConfig>(r#"{ "libary_override": "/x.so" }"#);
    assert!(result.is_err());
}

#[test]
fn config_round_trips_through_json() {
    let config = ResolverConfig::default()
        .with_os_name("Windows")
        .with_library_override("raylib.dll");
    let json = serde_json::to_string(&config).unwrap();
    let parsed: ResolverConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn empty_override_counts_as_absent() {
    let config = ResolverConfig::default().with_library_override("");
    assert!(config.library_override().is_none());
}

#[test]
fn explicit_working_dir_is_made_absolute() {
    let config = ResolverConfig::default().with_working_dir("natives");
    let dir = config.resolve_working_dir().unwrap();
    assert!(dir.is_absolute());
    assert!(dir.ends_with("natives"));

    let cwd = ResolverConfig::default().resolve_working_dir().unwrap();
    assert_eq!(cwd, std::env::current_dir().unwrap());
}

#[test]
fn override_variable_name_is_stable() {
    assert_eq!(LIBRARY_OVERRIDE_ENV, "RAYBIND_LIBRARY");
}

#[test]
fn memory_assets_serve_inserted_bytes() {
    let mut assets = MemoryAssets::new();
    assets.insert("a/lib/liba.so", b"first".to_vec());
    assets.insert("a/lib/liba.so", b"second".to_vec());
    assert_eq!(read_all(&assets, "a/lib/liba.so"), Some(b"second".to_vec()));
    assert_eq!(read_all(&assets, "a/lib/libb.so"), None);
}

#[test]
fn directory_assets_ignore_directories_and_missing_files() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(root.path().join("pkg/lib/libraylib.so")).unwrap();
    std::fs::write(root.path().join("pkg/lib/raylib.dll"), b"dll").unwrap();

    let assets = DirectoryAssets::new(root.path());
    assert_eq!(assets.root(), root.path());
    assert_eq!(read_all(&assets, "pkg/lib/raylib.dll"), Some(b"dll".to_vec()));
    assert_eq!(read_all(&assets, "pkg/lib/libraylib.so"), None);
    assert_eq!(read_all(&assets, "pkg/lib/libraylib.dylib"), None);
}

#[test]
fn bundled_directory_points_at_crate_assets() {
    let dir = bundled_assets_dir();
    assert!(dir.ends_with("assets"));
    assert!(dir.is_dir());
    assert_eq!(DirectoryAssets::bundled().root(), dir.as_path());
}

#[test]
fn embedded_assets_match_their_listing() {
    for path in EmbeddedAssets::paths() {
        let expected = EmbeddedAssets::get(path).unwrap();
        assert_eq!(read_all(&EmbeddedAssets, path), Some(expected.to_vec()));
        assert!(
            path.ends_with(".so") || path.ends_with(".dylib") || path.ends_with(".dll"),
            "unexpected embedded asset {path}"
        );
    }
    assert_eq!(read_all(&EmbeddedAssets, "not/bundled/libnothing.so"), None);
}
