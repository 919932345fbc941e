// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! `#[repr(C)]` mirrors of the raylib 5.0 and rlgl structs.
//!
//! Field names and order follow `raylib.h` exactly so values can be passed by
//! value across the boundary. Structs holding raw pointers implement
//! `Default` as all-zero, matching a zero-initialised C struct.

use std::os::raw::{c_char, c_int, c_uchar, c_uint, c_ushort, c_void};

/// raylib version these layouts were taken from.
pub const RAYLIB_VERSION: &str = "5.0";

/// Implements `Default` as the all-zero bit pattern.
macro_rules! zeroed_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Default for $ty {
                fn default() -> Self {
                    // SAFETY: every field is an integer, float, bool, array of those,
                    // or a raw pointer, for which all-zero is a valid value.
                    unsafe { std::mem::zeroed() }
                }
            }
        )*
    };
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

pub type Quaternion = Vector4;

/// 4x4 matrix, OpenGL style: right-handed and column-major in memory.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Matrix {
    pub m0: f32,
    pub m4: f32,
    pub m8: f32,
    pub m12: f32,
    pub m1: f32,
    pub m5: f32,
    pub m9: f32,
    pub m13: f32,
    pub m2: f32,
    pub m6: f32,
    pub m10: f32,
    pub m14: f32,
    pub m3: f32,
    pub m7: f32,
    pub m11: f32,
    pub m15: f32,
}

/// RGBA color, 8 bits per channel.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: c_uchar,
    pub g: c_uchar,
    pub b: c_uchar,
    pub a: c_uchar,
}

pub const LIGHTGRAY: Color = Color { r: 200, g: 200, b: 200, a: 255 };
pub const GRAY: Color = Color { r: 130, g: 130, b: 130, a: 255 };
pub const RED: Color = Color { r: 230, g: 41, b: 55, a: 255 };
pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
pub const BLANK: Color = Color { r: 0, g: 0, b: 0, a: 0 };
pub const RAYWHITE: Color = Color { r: 245, g: 245, b: 245, a: 255 };

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Pixel data in CPU memory.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Image {
    pub data: *mut c_void,
    pub width: c_int,
    pub height: c_int,
    pub mipmaps: c_int,
    /// One of the `PIXELFORMAT_*` constants.
    pub format: c_int,
}

/// Texture in GPU memory.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Texture {
    pub id: c_uint,
    pub width: c_int,
    pub height: c_int,
    pub mipmaps: c_int,
    pub format: c_int,
}

pub type Texture2D = Texture;
pub type TextureCubemap = Texture;

/// Framebuffer object with color and depth attachments.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RenderTexture {
    pub id: c_uint,
    pub texture: Texture,
    pub depth: Texture,
}

pub type RenderTexture2D = RenderTexture;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Shader {
    pub id: c_uint,
    pub locs: *mut c_int,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct MaterialMap {
    pub texture: Texture2D,
    pub color: Color,
    pub value: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Material {
    pub shader: Shader,
    pub maps: *mut MaterialMap,
    pub params: [f32; 4],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vector3,
    pub rotation: Quaternion,
    pub scale: Vector3,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct BoneInfo {
    pub name: [c_char; 32],
    pub parent: c_int,
}

/// Vertex data plus the GPU buffer ids it was uploaded to.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Mesh {
    pub vertexCount: c_int,
    pub triangleCount: c_int,
    pub vertices: *mut f32,
    pub texcoords: *mut f32,
    pub texcoords2: *mut f32,
    pub normals: *mut f32,
    pub tangents: *mut f32,
    pub colors: *mut c_uchar,
    pub indices: *mut c_ushort,
    pub animVertices: *mut f32,
    pub animNormals: *mut f32,
    pub boneIds: *mut c_uchar,
    pub boneWeights: *mut f32,
    pub vaoId: c_uint,
    pub vboId: *mut c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Model {
    pub transform: Matrix,
    pub meshCount: c_int,
    pub materialCount: c_int,
    pub meshes: *mut Mesh,
    pub materials: *mut Material,
    pub meshMaterial: *mut c_int,
    pub boneCount: c_int,
    pub bones: *mut BoneInfo,
    pub bindPose: *mut Transform,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ModelAnimation {
    pub boneCount: c_int,
    pub frameCount: c_int,
    pub bones: *mut BoneInfo,
    pub framePoses: *mut *mut Transform,
    pub name: [c_char; 32],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Ray {
    pub position: Vector3,
    pub direction: Vector3,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

/// Audio samples in CPU memory.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Wave {
    pub frameCount: c_uint,
    pub sampleRate: c_uint,
    /// Bits per sample: 8, 16 or 32.
    pub sampleSize: c_uint,
    pub channels: c_uint,
    pub data: *mut c_void,
}

/// Opaque audio buffer owned by raylib's audio module.
#[repr(C)]
#[derive(Debug)]
pub struct rAudioBuffer {
    _unused: [u8; 0],
}

/// Opaque processor list node owned by raylib's audio module.
#[repr(C)]
#[derive(Debug)]
pub struct rAudioProcessor {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct AudioStream {
    pub buffer: *mut rAudioBuffer,
    pub processor: *mut rAudioProcessor,
    pub sampleRate: c_uint,
    pub sampleSize: c_uint,
    pub channels: c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Sound {
    pub stream: AudioStream,
    pub frameCount: c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Music {
    pub stream: AudioStream,
    pub frameCount: c_uint,
    pub looping: bool,
    pub ctxType: c_int,
    pub ctxData: *mut c_void,
}

/// Per-eye projection and distortion parameters for stereo rendering.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct VrStereoConfig {
    pub projection: [Matrix; 2],
    pub viewOffset: [Matrix; 2],
    pub leftLensCenter: [f32; 2],
    pub rightLensCenter: [f32; 2],
    pub leftScreenCenter: [f32; 2],
    pub rightScreenCenter: [f32; 2],
    pub scale: [f32; 2],
    pub scaleIn: [f32; 2],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct AutomationEvent {
    pub frame: c_uint,
    pub type_: c_uint,
    pub params: [c_int; 4],
}

/// rlgl dynamic vertex buffer used by the internal render batch.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct rlVertexBuffer {
    pub elementCount: c_int,
    pub vertices: *mut f32,
    pub texcoords: *mut f32,
    pub colors: *mut c_uchar,
    pub indices: *mut c_uint,
    pub vaoId: c_uint,
    pub vboId: [c_uint; 4],
}

zeroed_default!(
    Image,
    Shader,
    Material,
    Mesh,
    Model,
    ModelAnimation,
    Wave,
    AudioStream,
    Sound,
    Music,
    rlVertexBuffer,
);

pub const PIXELFORMAT_UNCOMPRESSED_GRAYSCALE: c_int = 1;
pub const PIXELFORMAT_UNCOMPRESSED_GRAY_ALPHA: c_int = 2;
pub const PIXELFORMAT_UNCOMPRESSED_R5G6B5: c_int = 3;
pub const PIXELFORMAT_UNCOMPRESSED_R8G8B8: c_int = 4;
pub const PIXELFORMAT_UNCOMPRESSED_R5G5B5A1: c_int = 5;
pub const PIXELFORMAT_UNCOMPRESSED_R4G4B4A4: c_int = 6;
pub const PIXELFORMAT_UNCOMPRESSED_R8G8B8A8: c_int = 7;

pub const LOG_ALL: c_int = 0;
pub const LOG_TRACE: c_int = 1;
pub const LOG_DEBUG: c_int = 2;
pub const LOG_INFO: c_int = 3;
pub const LOG_WARNING: c_int = 4;
pub const LOG_ERROR: c_int = 5;
pub const LOG_FATAL: c_int = 6;
pub const LOG_NONE: c_int = 7;
