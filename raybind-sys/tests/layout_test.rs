// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! Struct layout checks against the sizes and offsets a C compiler produces
//! for `raylib.h` on 64-bit targets.

#![cfg(target_pointer_width = "64")]

use std::mem::{offset_of, size_of};

use raybind_sys::*;

#[test]
fn math_types_are_tightly_packed_floats() {
    assert_eq!(size_of::<Vector2>(), 8);
    assert_eq!(size_of::<Vector3>(), 12);
    assert_eq!(size_of::<Vector4>(), 16);
    assert_eq!(size_of::<Matrix>(), 64);
    assert_eq!(offset_of!(Matrix, m4), 4);
    assert_eq!(offset_of!(Matrix, m1), 16);
    assert_eq!(offset_of!(Matrix, m15), 60);
    assert_eq!(size_of::<Rectangle>(), 16);
    assert_eq!(size_of::<Ray>(), 24);
    assert_eq!(offset_of!(Ray, direction), 12);
    assert_eq!(size_of::<BoundingBox>(), 24);
    assert_eq!(size_of::<Transform>(), 40);
}

#[test]
fn color_is_four_bytes() {
    assert_eq!(size_of::<Color>(), 4);
    assert_eq!(offset_of!(Color, a), 3);
}

#[test]
fn image_and_texture_layouts() {
    assert_eq!(size_of::<Image>(), 24);
    assert_eq!(offset_of!(Image, width), 8);
    assert_eq!(offset_of!(Image, format), 20);
    assert_eq!(size_of::<Texture>(), 20);
    assert_eq!(size_of::<RenderTexture>(), 44);
    assert_eq!(offset_of!(RenderTexture, texture), 4);
    assert_eq!(offset_of!(RenderTexture, depth), 24);
}

#[test]
fn material_layouts() {
    assert_eq!(size_of::<Shader>(), 16);
    assert_eq!(size_of::<MaterialMap>(), 28);
    assert_eq!(offset_of!(MaterialMap, color), 20);
    assert_eq!(size_of::<Material>(), 40);
    assert_eq!(offset_of!(Material, params), 24);
}

#[test]
fn mesh_and_model_layouts() {
    assert_eq!(size_of::<Mesh>(), 112);
    assert_eq!(offset_of!(Mesh, vertices), 8);
    assert_eq!(offset_of!(Mesh, vaoId), 96);
    assert_eq!(offset_of!(Mesh, vboId), 104);
    assert_eq!(size_of::<Model>(), 120);
    assert_eq!(offset_of!(Model, meshes), 72);
    assert_eq!(offset_of!(Model, boneCount), 96);
    assert_eq!(offset_of!(Model, bones), 104);
    assert_eq!(size_of::<BoneInfo>(), 36);
    assert_eq!(size_of::<ModelAnimation>(), 56);
    assert_eq!(offset_of!(ModelAnimation, name), 24);
}

#[test]
fn audio_layouts() {
    assert_eq!(size_of::<Wave>(), 24);
    assert_eq!(offset_of!(Wave, data), 16);
    assert_eq!(size_of::<AudioStream>(), 32);
    assert_eq!(offset_of!(AudioStream, sampleRate), 16);
    assert_eq!(size_of::<Sound>(), 40);
    assert_eq!(offset_of!(Sound, frameCount), 32);
    assert_eq!(size_of::<Music>(), 56);
    assert_eq!(offset_of!(Music, looping), 36);
    assert_eq!(offset_of!(Music, ctxType), 40);
    assert_eq!(offset_of!(Music, ctxData), 48);
}

#[test]
fn vr_stereo_config_offsets() {
    assert_eq!(size_of::<VrStereoConfig>(), 304);
    assert_eq!(offset_of!(VrStereoConfig, viewOffset), 128);
    assert_eq!(offset_of!(VrStereoConfig, leftLensCenter), 256);
    assert_eq!(offset_of!(VrStereoConfig, rightLensCenter), 264);
    assert_eq!(offset_of!(VrStereoConfig, leftScreenCenter), 272);
    assert_eq!(offset_of!(VrStereoConfig, rightScreenCenter), 280);
    assert_eq!(offset_of!(VrStereoConfig, scale), 288);
    assert_eq!(offset_of!(VrStereoConfig, scaleIn), 296);
}

#[test]
fn automation_event_and_vertex_buffer_layouts() {
    assert_eq!(size_of::<AutomationEvent>(), 24);
    assert_eq!(offset_of!(AutomationEvent, params), 8);
    assert_eq!(size_of::<rlVertexBuffer>(), 64);
    assert_eq!(offset_of!(rlVertexBuffer, vertices), 8);
    assert_eq!(offset_of!(rlVertexBuffer, vaoId), 40);
    assert_eq!(offset_of!(rlVertexBuffer, vboId), 44);
}

#[test]
fn pointer_structs_default_to_zero() {
    let mesh = Mesh::default();
    assert_eq!(mesh.vertexCount, 0);
    assert!(mesh.vertices.is_null());
    assert!(mesh.vboId.is_null());

    let music = Music::default();
    assert!(!music.looping);
    assert!(music.stream.buffer.is_null());
    assert!(music.ctxData.is_null());
}

#[test]
fn callback_typedefs_are_nullable_pointers() {
    assert_eq!(size_of::<AudioCallback>(), size_of::<usize>());
    assert_eq!(size_of::<LoadFileDataCallback>(), size_of::<usize>());
    assert_eq!(size_of::<SaveFileDataCallback>(), size_of::<usize>());
    let none: SaveFileTextCallback = None;
    assert!(none.is_none());
}

#[test]
fn symbol_table_names_match_c_exports() {
    assert!(Raylib::SYMBOLS.contains(&"InitWindow"));
    assert!(Raylib::SYMBOLS.contains(&"MemAlloc"));
    assert!(Raylib::SYMBOLS.contains(&"SetLoadFileDataCallback"));
    assert!(Raylib::SYMBOLS.contains(&"UnloadModelAnimations"));
    let mut sorted = Raylib::SYMBOLS.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), Raylib::SYMBOLS.len());
}

#[test]
fn loading_a_missing_library_fails() {
    let result = unsafe { Raylib::new("/nonexistent/dir/libraylib-missing.so") };
    assert!(result.is_err());
}
