extern crate wasm_bindgen;
use ::html2text::{CaseFold, ExtractOptions, StreamExtractor};

use wasm_bindgen::prelude::*;

fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_case_fold(case_fold: Option<String>) -> Result<CaseFold, JsValue> {
    match case_fold {
        Some(name) => name.parse().map_err(|err: String| JsValue::from_str(&err)),
        None => Ok(CaseFold::default()),
    }
}

/// Extracts the readable text of an HTML document.
///
/// Throws the error code string, e.g. `"allocation-failed"`, on failure.
#[wasm_bindgen(js_name = extractText)]
pub fn extract_text(html: &[u8], case_fold: Option<String>) -> Result<Box<[u8]>, JsValue> {
    set_panic_hook();
    let options = ExtractOptions::default().with_case_fold(parse_case_fold(case_fold)?);

    ::html2text::extract_text_with(html, &options)
        .map(Vec::into_boxed_slice)
        .map_err(|err| {
            let code: &str = err.into();
            JsValue::from_str(code)
        })
}

/// String variant of [`extract_text`]; yields an empty string on failure.
#[wasm_bindgen]
pub fn html2text(html: String) -> String {
    set_panic_hook();
    ::html2text::html2text(&html)
}

#[wasm_bindgen(js_name = StreamExtractor)]
pub struct WasmStreamExtractor {
    extractor: StreamExtractor,
}

#[wasm_bindgen(js_class = StreamExtractor)]
impl WasmStreamExtractor {
    #[wasm_bindgen(constructor)]
    pub fn new(case_fold: Option<String>) -> Result<WasmStreamExtractor, JsValue> {
        set_panic_hook();
        let options = ExtractOptions::default().with_case_fold(parse_case_fold(case_fold)?);
        Ok(Self {
            extractor: StreamExtractor::new(options),
        })
    }

    pub fn push(&mut self, chunk: &[u8]) {
        self.extractor.push(chunk);
    }

    #[wasm_bindgen(js_name = takeOutput)]
    pub fn take_output(&mut self) -> Box<[u8]> {
        self.extractor.take_output().into_boxed_slice()
    }

    /// Ends the document and returns the remaining text. The extractor
    /// cannot be used afterwards.
    pub fn finish(self) -> Box<[u8]> {
        self.extractor.finish().0.into_boxed_slice()
    }
}
