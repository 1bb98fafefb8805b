use std::ffi::CString;
use std::os::raw::c_char;

use obs_sys as obs;

pub(crate) fn cstr(bytes: &'static [u8]) -> *const c_char {
    debug_assert!(
        bytes.last() == Some(&0),
        "C string must be NUL-terminated"
    );
    bytes.as_ptr().cast()
}

/// Writes `msg` to the OBS log, prefixed with the module name.
pub(crate) fn log(level: u32, msg: &str) {
    let Ok(s) = CString::new(msg) else {
        return;
    };
    unsafe {
        obs::blog(level as i32, cstr(b"Inverter: %s\n\0"), s.as_ptr());
    }
}
