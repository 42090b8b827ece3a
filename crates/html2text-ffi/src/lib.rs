//! C ABI for the extractor.
//!
//! Every buffer handed out here is owned by the caller until it is passed
//! back to the matching `html2text_free*` function. See `include/html2text.h`.
use html2text::extract_text;
use std::ffi::{c_char, CStr, CString};
use std::ptr;
use tracing::warn;

/// Extracts the readable text of a NUL-terminated HTML string.
///
/// Returns NULL when `html` is NULL or the output cannot be allocated.
///
/// # Safety
///
/// `html` must be NULL or point to a NUL-terminated string that stays valid
/// for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn html2text_c(html: *const c_char) -> *mut c_char {
    if html.is_null() {
        return ptr::null_mut();
    }

    let html = CStr::from_ptr(html).to_bytes();
    let text = match extract_text(html) {
        Ok(text) => text,
        Err(err) => {
            warn!(%err, "html2text_c: extraction failed");
            return ptr::null_mut();
        }
    };

    // The output buffer was sized with room for the terminator, and the
    // input held no NUL, so neither can fail in practice.
    match CString::new(text) {
        Ok(text) => text.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Releases a string returned by [`html2text_c`].
///
/// # Safety
///
/// `text` must be NULL or a pointer returned by [`html2text_c`] that has not
/// been released yet.
#[no_mangle]
pub unsafe extern "C" fn html2text_free(text: *mut c_char) {
    if text.is_null() {
        return;
    }
    drop(CString::from_raw(text));
}

/// Extracts the readable text of `len` bytes of HTML at `html`.
///
/// On success the text length is stored in `*out_len`. The text is not
/// NUL-terminated.
///
/// # Safety
///
/// `html` must point to `len` readable bytes and `out_len` must be valid for
/// writes. Either being NULL yields NULL.
#[no_mangle]
pub unsafe extern "C" fn html2text_extract(
    html: *const u8,
    len: usize,
    out_len: *mut usize,
) -> *mut u8 {
    if html.is_null() || out_len.is_null() {
        return ptr::null_mut();
    }

    let html = std::slice::from_raw_parts(html, len);
    match extract_text(html) {
        Ok(text) => {
            let text = text.into_boxed_slice();
            *out_len = text.len();
            Box::into_raw(text) as *mut u8
        }
        Err(err) => {
            warn!(%err, "html2text_extract: extraction failed");
            *out_len = 0;
            ptr::null_mut()
        }
    }
}

/// Releases a buffer returned by [`html2text_extract`].
///
/// # Safety
///
/// `text` must be NULL or a pointer returned by [`html2text_extract`] that
/// has not been released yet, and `len` the length reported with it.
#[no_mangle]
pub unsafe extern "C" fn html2text_free_bytes(text: *mut u8, len: usize) {
    if text.is_null() {
        return;
    }
    drop(Box::from_raw(ptr::slice_from_raw_parts_mut(text, len)));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_html2text_c() {
        let html = CString::new("<p>Hello <b>C</b> caller</p>").unwrap();
        unsafe {
            let text = html2text_c(html.as_ptr());
            assert!(!text.is_null());
            assert_eq!(CStr::from_ptr(text).to_bytes(), b"hello C caller");
            html2text_free(text);
        }
    }

    #[test]
    fn test_null_arguments() {
        unsafe {
            assert!(html2text_c(ptr::null()).is_null());
            html2text_free(ptr::null_mut());

            let mut out_len = 7;
            assert!(html2text_extract(ptr::null(), 0, &mut out_len).is_null());
            assert!(html2text_extract(b"x".as_ptr(), 1, ptr::null_mut()).is_null());
            html2text_free_bytes(ptr::null_mut(), 0);
        }
    }

    #[test]
    fn test_html2text_extract_with_nul_bytes() {
        let html = b"<i>one\0two</i> three";
        let mut out_len = 0;
        unsafe {
            let text = html2text_extract(html.as_ptr(), html.len(), &mut out_len);
            assert!(!text.is_null());
            assert_eq!(std::slice::from_raw_parts(text, out_len), b"one\0two three");
            html2text_free_bytes(text, out_len);
        }
    }

    #[test]
    fn test_html2text_extract_empty() {
        let html = b"<br>";
        let mut out_len = 7;
        unsafe {
            let text = html2text_extract(html.as_ptr(), html.len(), &mut out_len);
            assert!(!text.is_null());
            assert_eq!(out_len, 0);
            html2text_free_bytes(text, out_len);
        }
    }
}
