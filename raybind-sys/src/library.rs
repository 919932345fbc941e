// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! Dynamic symbol table for the raylib shared library.
//!
//! [`Raylib`] owns the opened [`libloading::Library`] and one function pointer
//! per declared downcall. All symbols are resolved eagerly when the table is
//! built, so a library missing any of them fails to load instead of failing at
//! first call.

use std::os::raw::{c_char, c_int, c_uchar, c_uint, c_void};

use crate::callbacks::*;
use crate::types::*;

/// Declares the symbol table struct, its loader and one `unsafe` call method
/// per entry. Fields and methods share the snake_case name.
macro_rules! dynamic_library {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                fn $method:ident = $symbol:literal ($($arg:ident: $argty:ty),* $(,)?) $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            __library: ::libloading::Library,
            $(pub $method: unsafe extern "C" fn($($argty),*) $(-> $ret)?,)*
        }

        impl $name {
            /// Opens the shared library at `path` and resolves every symbol.
            ///
            /// # Safety
            ///
            /// Loading a library runs its initialisers. The library must be a
            /// raylib build whose exported signatures match this table.
            pub unsafe fn new<P>(path: P) -> Result<Self, ::libloading::Error>
            where
                P: AsRef<::std::ffi::OsStr>,
            {
                let library = unsafe { ::libloading::Library::new(path) }?;
                unsafe { Self::from_library(library) }
            }

            /// Resolves every symbol from an already opened library.
            ///
            /// # Safety
            ///
            /// Same requirements as [`Self::new`].
            pub unsafe fn from_library<L>(library: L) -> Result<Self, ::libloading::Error>
            where
                L: Into<::libloading::Library>,
            {
                let __library = library.into();
                $(
                    let $method = unsafe {
                        __library.get::<unsafe extern "C" fn($($argty),*) $(-> $ret)?>(
                            concat!($symbol, "\0").as_bytes(),
                        )
                    }
                    .map(|symbol| *symbol)?;
                )*
                Ok(Self {
                    __library,
                    $($method,)*
                })
            }

            /// Names of every C symbol this table resolves, in declaration order.
            pub const SYMBOLS: &'static [&'static str] = &[$($symbol),*];

            $(
                $(#[$fmeta])*
                pub unsafe fn $method(&self, $($arg: $argty),*) $(-> $ret)? {
                    unsafe { (self.$method)($($arg),*) }
                }
            )*
        }
    };
}

dynamic_library! {
    /// Loaded raylib 5.0 shared library.
    pub struct Raylib {
        // Window and drawing
        fn init_window = "InitWindow"(width: c_int, height: c_int, title: *const c_char);
        fn close_window = "CloseWindow"();
        fn window_should_close = "WindowShouldClose"() -> bool;
        fn is_window_ready = "IsWindowReady"() -> bool;
        fn set_target_fps = "SetTargetFPS"(fps: c_int);
        fn get_frame_time = "GetFrameTime"() -> f32;
        fn get_time = "GetTime"() -> f64;
        fn begin_drawing = "BeginDrawing"();
        fn end_drawing = "EndDrawing"();
        fn clear_background = "ClearBackground"(color: Color);
        fn draw_text = "DrawText"(
            text: *const c_char,
            pos_x: c_int,
            pos_y: c_int,
            font_size: c_int,
            color: Color,
        );
        fn set_trace_log_level = "SetTraceLogLevel"(log_level: c_int);

        // Memory
        /// Allocates with raylib's allocator (`RL_CALLOC`).
        fn mem_alloc = "MemAlloc"(size: c_uint) -> *mut c_void;
        fn mem_free = "MemFree"(ptr: *mut c_void);

        // File system and file callbacks
        fn set_load_file_data_callback = "SetLoadFileDataCallback"(callback: LoadFileDataCallback);
        fn set_save_file_data_callback = "SetSaveFileDataCallback"(callback: SaveFileDataCallback);
        fn set_load_file_text_callback = "SetLoadFileTextCallback"(callback: LoadFileTextCallback);
        fn set_save_file_text_callback = "SetSaveFileTextCallback"(callback: SaveFileTextCallback);
        fn load_file_data = "LoadFileData"(file_name: *const c_char, data_size: *mut c_int) -> *mut c_uchar;
        fn unload_file_data = "UnloadFileData"(data: *mut c_uchar);
        fn save_file_data = "SaveFileData"(file_name: *const c_char, data: *mut c_void, data_size: c_int) -> bool;

        // Images and textures
        fn load_image = "LoadImage"(file_name: *const c_char) -> Image;
        fn gen_image_color = "GenImageColor"(width: c_int, height: c_int, color: Color) -> Image;
        fn unload_image = "UnloadImage"(image: Image);
        fn load_texture_from_image = "LoadTextureFromImage"(image: Image) -> Texture2D;
        fn unload_texture = "UnloadTexture"(texture: Texture2D);
        fn load_render_texture = "LoadRenderTexture"(width: c_int, height: c_int) -> RenderTexture2D;
        fn unload_render_texture = "UnloadRenderTexture"(target: RenderTexture2D);
        fn set_shapes_texture = "SetShapesTexture"(texture: Texture2D, source: Rectangle);

        // Meshes, models and animations
        fn upload_mesh = "UploadMesh"(mesh: *mut Mesh, dynamic: bool);
        fn unload_mesh = "UnloadMesh"(mesh: Mesh);
        fn gen_mesh_cone = "GenMeshCone"(radius: f32, height: f32, slices: c_int) -> Mesh;
        fn gen_mesh_torus = "GenMeshTorus"(radius: f32, size: f32, rad_seg: c_int, sides: c_int) -> Mesh;
        fn gen_mesh_knot = "GenMeshKnot"(radius: f32, size: f32, rad_seg: c_int, sides: c_int) -> Mesh;
        fn get_mesh_bounding_box = "GetMeshBoundingBox"(mesh: Mesh) -> BoundingBox;
        fn load_model = "LoadModel"(file_name: *const c_char) -> Model;
        fn load_model_from_mesh = "LoadModelFromMesh"(mesh: Mesh) -> Model;
        fn unload_model = "UnloadModel"(model: Model);
        fn load_model_animations = "LoadModelAnimations"(file_name: *const c_char, anim_count: *mut c_int) -> *mut ModelAnimation;
        fn update_model_animation = "UpdateModelAnimation"(model: Model, anim: ModelAnimation, frame: c_int);
        fn unload_model_animation = "UnloadModelAnimation"(anim: ModelAnimation);
        fn unload_model_animations = "UnloadModelAnimations"(animations: *mut ModelAnimation, anim_count: c_int);
        fn unload_vr_stereo_config = "UnloadVrStereoConfig"(config: VrStereoConfig);

        // Audio device, waves and sounds
        fn init_audio_device = "InitAudioDevice"();
        fn close_audio_device = "CloseAudioDevice"();
        fn is_audio_device_ready = "IsAudioDeviceReady"() -> bool;
        fn set_master_volume = "SetMasterVolume"(volume: f32);
        fn load_wave = "LoadWave"(file_name: *const c_char) -> Wave;
        fn unload_wave = "UnloadWave"(wave: Wave);
        fn load_sound = "LoadSound"(file_name: *const c_char) -> Sound;
        fn load_sound_from_wave = "LoadSoundFromWave"(wave: Wave) -> Sound;
        /// Shares the source's sample data; unload with `unload_sound_alias`.
        fn load_sound_alias = "LoadSoundAlias"(source: Sound) -> Sound;
        fn unload_sound = "UnloadSound"(sound: Sound);
        fn unload_sound_alias = "UnloadSoundAlias"(alias: Sound);
        fn play_sound = "PlaySound"(sound: Sound);
        fn stop_sound = "StopSound"(sound: Sound);
        fn is_sound_playing = "IsSoundPlaying"(sound: Sound) -> bool;

        // Music streams
        fn load_music_stream = "LoadMusicStream"(file_name: *const c_char) -> Music;
        fn unload_music_stream = "UnloadMusicStream"(music: Music);
        fn play_music_stream = "PlayMusicStream"(music: Music);
        fn is_music_stream_playing = "IsMusicStreamPlaying"(music: Music) -> bool;
        fn update_music_stream = "UpdateMusicStream"(music: Music);
        fn stop_music_stream = "StopMusicStream"(music: Music);

        // Raw audio streams and processors
        fn load_audio_stream = "LoadAudioStream"(sample_rate: c_uint, sample_size: c_uint, channels: c_uint) -> AudioStream;
        fn unload_audio_stream = "UnloadAudioStream"(stream: AudioStream);
        fn set_audio_stream_callback = "SetAudioStreamCallback"(stream: AudioStream, callback: AudioCallback);
        fn attach_audio_stream_processor = "AttachAudioStreamProcessor"(stream: AudioStream, processor: AudioCallback);
        fn detach_audio_stream_processor = "DetachAudioStreamProcessor"(stream: AudioStream, processor: AudioCallback);
        fn attach_audio_mixed_processor = "AttachAudioMixedProcessor"(processor: AudioCallback);
        fn detach_audio_mixed_processor = "DetachAudioMixedProcessor"(processor: AudioCallback);
    }
}

impl std::fmt::Debug for Raylib {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raylib")
            .field("library", &self.__library)
            .field("symbols", &Self::SYMBOLS.len())
            .finish()
    }
}
