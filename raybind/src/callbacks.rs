// SPDX-FileCopyrightText: 2025 Contributors to the raybind project.
// SPDX-License-Identifier: Apache-2.0

//! Rust handlers for raylib's file I/O callbacks.
//!
//! raylib's callback typedefs carry no user-data pointer, so each callback
//! kind has one process-wide slot. A fixed `extern "C"` trampoline per kind is
//! installed into raylib; it converts the C arguments, dispatches to the
//! registered closure and converts the result back.
//!
//! Buffers returned to raylib are allocated with its own `MemAlloc` because
//! raylib releases them with `MemFree`. A handler that panics is reported to
//! raylib as a failed load or save.

use std::{
    ffi::CStr,
    os::raw::{c_char, c_int, c_uchar, c_uint, c_void},
    panic::{AssertUnwindSafe, catch_unwind},
    path::{Path, PathBuf},
    ptr,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::{trace, warn};

use crate::RaylibApiHandle;

/// Matches raylib's `MemAlloc`.
type Allocator = unsafe extern "C" fn(size: c_uint) -> *mut c_void;

type LoadFileDataHandler = dyn Fn(&Path) -> Option<Vec<u8>> + Send + Sync;
type SaveFileDataHandler = dyn Fn(&Path, &[u8]) -> bool + Send + Sync;
type LoadFileTextHandler = dyn Fn(&Path) -> Option<String> + Send + Sync;
type SaveFileTextHandler = dyn Fn(&Path, &str) -> bool + Send + Sync;

struct Registration<H: ?Sized> {
    handler: Arc<H>,
    alloc: Allocator,
    // Keeps the library (and so `alloc`) mapped while the handler is installed
    _api: Option<RaylibApiHandle>,
}

type Slot<H> = RwLock<Option<Registration<H>>>;

static LOAD_FILE_DATA: Slot<LoadFileDataHandler> = RwLock::new(None);
static SAVE_FILE_DATA: Slot<SaveFileDataHandler> = RwLock::new(None);
static LOAD_FILE_TEXT: Slot<LoadFileTextHandler> = RwLock::new(None);
static SAVE_FILE_TEXT: Slot<SaveFileTextHandler> = RwLock::new(None);

fn store<H: ?Sized>(slot: &Slot<H>, registration: Option<Registration<H>>) {
    *slot.write().unwrap_or_else(PoisonError::into_inner) = registration;
}

fn registered<H: ?Sized>(slot: &Slot<H>) -> Option<(Arc<H>, Allocator)> {
    slot.read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(|registration| (registration.handler.clone(), registration.alloc))
}

fn registration<H: ?Sized>(api: &RaylibApiHandle, handler: Arc<H>) -> Option<Registration<H>> {
    Some(Registration {
        handler,
        alloc: api.mem_alloc,
        _api: Some(api.clone()),
    })
}

/// Routes raylib's `LoadFileData` through `handler`.
///
/// Returning `None` makes the load fail.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> Result<(), raybind::Error> {
/// let api = raybind::load_api(raybind::resolve_raylib()?)?;
/// raybind::set_load_file_data_handler(&api, |path| std::fs::read(path).ok());
/// # Ok(())
/// # }
/// ```
pub fn set_load_file_data_handler<F>(api: &RaylibApiHandle, handler: F)
where
    F: Fn(&Path) -> Option<Vec<u8>> + Send + Sync + 'static,
{
    let handler: Arc<LoadFileDataHandler> = Arc::new(handler);
    store(&LOAD_FILE_DATA, registration(api, handler));
    unsafe { api.set_load_file_data_callback(Some(load_file_data_trampoline)) };
}

/// Routes raylib's `SaveFileData` through `handler`.
pub fn set_save_file_data_handler<F>(api: &RaylibApiHandle, handler: F)
where
    F: Fn(&Path, &[u8]) -> bool + Send + Sync + 'static,
{
    let handler: Arc<SaveFileDataHandler> = Arc::new(handler);
    store(&SAVE_FILE_DATA, registration(api, handler));
    unsafe { api.set_save_file_data_callback(Some(save_file_data_trampoline)) };
}

/// Routes raylib's `LoadFileText` through `handler`.
///
/// Text containing an interior NUL byte cannot be handed to C and fails the load.
pub fn set_load_file_text_handler<F>(api: &RaylibApiHandle, handler: F)
where
    F: Fn(&Path) -> Option<String> + Send + Sync + 'static,
{
    let handler: Arc<LoadFileTextHandler> = Arc::new(handler);
    store(&LOAD_FILE_TEXT, registration(api, handler));
    unsafe { api.set_load_file_text_callback(Some(load_file_text_trampoline)) };
}

/// Routes raylib's `SaveFileText` through `handler`.
pub fn set_save_file_text_handler<F>(api: &RaylibApiHandle, handler: F)
where
    F: Fn(&Path, &str) -> bool + Send + Sync + 'static,
{
    let handler: Arc<SaveFileTextHandler> = Arc::new(handler);
    store(&SAVE_FILE_TEXT, registration(api, handler));
    unsafe { api.set_save_file_text_callback(Some(save_file_text_trampoline)) };
}

/// Restores raylib's built-in file I/O and drops every registered handler.
pub fn clear_file_handlers(api: &RaylibApiHandle) {
    unsafe {
        api.set_load_file_data_callback(None);
        api.set_save_file_data_callback(None);
        api.set_load_file_text_callback(None);
        api.set_save_file_text_callback(None);
    }
    store(&LOAD_FILE_DATA, None);
    store(&SAVE_FILE_DATA, None);
    store(&LOAD_FILE_TEXT, None);
    store(&SAVE_FILE_TEXT, None);
}

/// Converts a C file name into a path, lossily for non UTF-8 names.
unsafe fn path_from_c(file_name: *const c_char) -> Option<PathBuf> {
    if file_name.is_null() {
        return None;
    }
    let file_name = unsafe { CStr::from_ptr(file_name) };
    Some(PathBuf::from(file_name.to_string_lossy().into_owned()))
}

/// Copies `bytes` into a buffer from `alloc`, optionally NUL-terminated.
///
/// Returns null if the size does not fit in `c_uint` or allocation fails.
unsafe fn copy_to_native(alloc: Allocator, bytes: &[u8], nul_terminate: bool) -> *mut u8 {
    let len = bytes.len() + usize::from(nul_terminate);
    let Ok(size) = c_uint::try_from(len.max(1)) else {
        return ptr::null_mut();
    };
    let buffer = unsafe { alloc(size) }.cast::<u8>();
    if buffer.is_null() {
        return buffer;
    }
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr(), buffer, bytes.len());
        if nul_terminate {
            *buffer.add(bytes.len()) = 0;
        }
    }
    buffer
}

/// Runs `f`, turning a panic into `None`.
fn guarded<T>(kind: &str, f: impl FnOnce() -> T) -> Option<T> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(kind, "File handler panicked, reporting failure to raylib");
            None
        }
    }
}

unsafe extern "C" fn load_file_data_trampoline(
    file_name: *const c_char,
    data_size: *mut c_int,
) -> *mut c_uchar {
    if !data_size.is_null() {
        unsafe { *data_size = 0 };
    }
    let Some((handler, alloc)) = registered(&LOAD_FILE_DATA) else {
        return ptr::null_mut();
    };
    let Some(path) = (unsafe { path_from_c(file_name) }) else {
        return ptr::null_mut();
    };
    trace!(path = %path.display(), "LoadFileData callback");
    let Some(Some(bytes)) = guarded("load_file_data", || handler(&path)) else {
        return ptr::null_mut();
    };
    let Ok(len) = c_int::try_from(bytes.len()) else {
        warn!(path = %path.display(), len = bytes.len(), "File data too large for raylib");
        return ptr::null_mut();
    };
    let buffer = unsafe { copy_to_native(alloc, &bytes, false) };
    if !buffer.is_null() && !data_size.is_null() {
        unsafe { *data_size = len };
    }
    buffer
}

unsafe extern "C" fn save_file_data_trampoline(
    file_name: *const c_char,
    data: *mut c_void,
    data_size: c_int,
) -> bool {
    let Some((handler, _)) = registered(&SAVE_FILE_DATA) else {
        return false;
    };
    let Some(path) = (unsafe { path_from_c(file_name) }) else {
        return false;
    };
    let Ok(len) = usize::try_from(data_size) else {
        return false;
    };
    let bytes: &[u8] = if len == 0 {
        &[]
    } else if data.is_null() {
        return false;
    } else {
        unsafe { std::slice::from_raw_parts(data.cast::<u8>(), len) }
    };
    trace!(path = %path.display(), len, "SaveFileData callback");
    guarded("save_file_data", || handler(&path, bytes)).unwrap_or(false)
}

unsafe extern "C" fn load_file_text_trampoline(file_name: *const c_char) -> *mut c_char {
    let Some((handler, alloc)) = registered(&LOAD_FILE_TEXT) else {
        return ptr::null_mut();
    };
    let Some(path) = (unsafe { path_from_c(file_name) }) else {
        return ptr::null_mut();
    };
    trace!(path = %path.display(), "LoadFileText callback");
    let Some(Some(text)) = guarded("load_file_text", || handler(&path)) else {
        return ptr::null_mut();
    };
    if text.as_bytes().contains(&0) {
        warn!(path = %path.display(), "File text contains a NUL byte");
        return ptr::null_mut();
    }
    unsafe { copy_to_native(alloc, text.as_bytes(), true) }.cast::<c_char>()
}

unsafe extern "C" fn save_file_text_trampoline(file_name: *const c_char, text: *mut c_char) -> bool {
    let Some((handler, _)) = registered(&SAVE_FILE_TEXT) else {
        return false;
    };
    let Some(path) = (unsafe { path_from_c(file_name) }) else {
        return false;
    };
    if text.is_null() {
        return false;
    }
    let text = unsafe { CStr::from_ptr(text) }.to_string_lossy();
    trace!(path = %path.display(), "SaveFileText callback");
    guarded("save_file_text", || handler(&path, &text)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::{
        ffi::CString,
        sync::{Mutex, MutexGuard},
    };

    use super::*;

    // The slots are process-wide; tests touching them run one at a time
    static SERIAL: Mutex<()> = Mutex::new(());

    fn serial() -> MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stand-in for `MemAlloc`; leaks, which is fine for tests.
    unsafe extern "C" fn test_alloc(size: c_uint) -> *mut c_void {
        let buffer = vec![0xAAu8; size as usize].into_boxed_slice();
        Box::into_raw(buffer).cast::<c_void>()
    }

    unsafe extern "C" fn failing_alloc(_size: c_uint) -> *mut c_void {
        ptr::null_mut()
    }

    fn install<H: ?Sized>(slot: &Slot<H>, handler: Arc<H>, alloc: Allocator) {
        store(
            slot,
            Some(Registration {
                handler,
                alloc,
                _api: None,
            }),
        );
    }

    #[test]
    fn load_file_data_copies_handler_bytes() {
        let _guard = serial();
        install(
            &LOAD_FILE_DATA,
            Arc::new(|path: &Path| {
                (path == Path::new("levels/one.bin")).then(|| vec![1u8, 2, 3, 4, 5])
            }) as Arc<LoadFileDataHandler>,
            test_alloc,
        );

        let name = CString::new("levels/one.bin").unwrap();
        let mut size: c_int = -1;
        let buffer = unsafe { load_file_data_trampoline(name.as_ptr(), &mut size) };
        assert!(!buffer.is_null());
        assert_eq!(size, 5);
        let data = unsafe { std::slice::from_raw_parts(buffer, size as usize) };
        assert_eq!(data, &[1, 2, 3, 4, 5]);

        let other = CString::new("levels/two.bin").unwrap();
        let buffer = unsafe { load_file_data_trampoline(other.as_ptr(), &mut size) };
        assert!(buffer.is_null());
        assert_eq!(size, 0);
        store(&LOAD_FILE_DATA, None);
    }

    #[test]
    fn load_file_data_fails_without_handler_or_memory() {
        let _guard = serial();
        store(&LOAD_FILE_DATA, None);
        let name = CString::new("a.bin").unwrap();
        let mut size: c_int = 7;
        assert!(unsafe { load_file_data_trampoline(name.as_ptr(), &mut size) }.is_null());
        assert_eq!(size, 0);

        install(
            &LOAD_FILE_DATA,
            Arc::new(|_: &Path| Some(vec![9u8; 16])) as Arc<LoadFileDataHandler>,
            failing_alloc,
        );
        let mut size: c_int = 7;
        assert!(unsafe { load_file_data_trampoline(name.as_ptr(), &mut size) }.is_null());
        assert_eq!(size, 0);
        store(&LOAD_FILE_DATA, None);
    }

    #[test]
    fn panicking_handler_reports_failure() {
        let _guard = serial();
        install(
            &SAVE_FILE_DATA,
            Arc::new(|_: &Path, _: &[u8]| -> bool { panic!("disk on fire") })
                as Arc<SaveFileDataHandler>,
            test_alloc,
        );
        let name = CString::new("save.dat").unwrap();
        let mut payload = [1u8, 2, 3];
        let saved = unsafe {
            save_file_data_trampoline(
                name.as_ptr(),
                payload.as_mut_ptr().cast::<c_void>(),
                payload.len() as c_int,
            )
        };
        assert!(!saved);
        store(&SAVE_FILE_DATA, None);
    }

    #[test]
    fn save_file_data_passes_bytes_through() {
        let _guard = serial();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        install(
            &SAVE_FILE_DATA,
            Arc::new(move |path: &Path, bytes: &[u8]| {
                sink.lock().unwrap().push((path.to_path_buf(), bytes.to_vec()));
                true
            }) as Arc<SaveFileDataHandler>,
            test_alloc,
        );
        let name = CString::new("save.dat").unwrap();
        let mut payload = *b"state";
        let saved = unsafe {
            save_file_data_trampoline(
                name.as_ptr(),
                payload.as_mut_ptr().cast::<c_void>(),
                payload.len() as c_int,
            )
        };
        assert!(saved);
        assert!(!unsafe { save_file_data_trampoline(name.as_ptr(), ptr::null_mut(), 4) });
        assert!(!unsafe { save_file_data_trampoline(name.as_ptr(), ptr::null_mut(), -1) });
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(PathBuf::from("save.dat"), b"state".to_vec())]
        );
        store(&SAVE_FILE_DATA, None);
    }

    #[test]
    fn load_file_text_is_nul_terminated() {
        let _guard = serial();
        install(
            &LOAD_FILE_TEXT,
            Arc::new(|path: &Path| match path.to_str() {
                Some("shader.fs") => Some("void main() {}".to_string()),
                Some("broken.fs") => Some("a\0b".to_string()),
                _ => None,
            }) as Arc<LoadFileTextHandler>,
            test_alloc,
        );
        let name = CString::new("shader.fs").unwrap();
        let text = unsafe { load_file_text_trampoline(name.as_ptr()) };
        assert!(!text.is_null());
        assert_eq!(
            unsafe { CStr::from_ptr(text) }.to_str().unwrap(),
            "void main() {}"
        );

        let broken = CString::new("broken.fs").unwrap();
        assert!(unsafe { load_file_text_trampoline(broken.as_ptr()) }.is_null());
        assert!(unsafe { load_file_text_trampoline(ptr::null()) }.is_null());
        store(&LOAD_FILE_TEXT, None);
    }

    #[test]
    fn save_file_text_receives_string() {
        let _guard = serial();
        install(
            &SAVE_FILE_TEXT,
            Arc::new(|path: &Path, text: &str| path == Path::new("notes.txt") && text == "hello")
                as Arc<SaveFileTextHandler>,
            test_alloc,
        );
        let name = CString::new("notes.txt").unwrap();
        let text = CString::new("hello").unwrap();
        assert!(unsafe { save_file_text_trampoline(name.as_ptr(), text.as_ptr().cast_mut()) });
        assert!(!unsafe { save_file_text_trampoline(name.as_ptr(), ptr::null_mut()) });
        store(&SAVE_FILE_TEXT, None);
        assert!(!unsafe { save_file_text_trampoline(name.as_ptr(), text.as_ptr().cast_mut()) });
    }
}
