use tracing::{debug, trace};

use crate::errors::ExtractionError;
use crate::options::ExtractOptions;
use crate::tag_scanner::{TagMode, TagScanner, TagSkip};
use crate::word::{fold_first, separator_run, trim_token, word_run};

/// Counters describing one extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Words written to the output.
    pub words_emitted: usize,

    /// Raw runs at or over the word length limit, dropped whole.
    pub words_dropped: usize,

    /// Complete tags skipped, adjacent tags counted individually.
    pub tags_skipped: usize,

    /// Whether the input ended inside a tag.
    pub unterminated_tag: bool,
}

/// Scan state shared by the one-shot functions and [`crate::StreamExtractor`].
pub(crate) struct Extractor {
    options: ExtractOptions,
    tags: TagScanner,
    output: Vec<u8>,
    stats: ExtractStats,
}

impl Extractor {
    pub(crate) fn new(options: ExtractOptions, output: Vec<u8>) -> Self {
        Self {
            options,
            tags: TagScanner::new(),
            output,
            stats: ExtractStats::default(),
        }
    }

    pub(crate) fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Scans `html` starting at `at`.
    ///
    /// When `at_eof` is false the end of `html` is not the end of the
    /// document, so a raw run touching it may continue in the next buffer.
    /// Its start offset is returned and nothing is emitted for it.
    pub(crate) fn scan(&mut self, html: &[u8], at: usize, at_eof: bool) -> Option<usize> {
        let mut at = at;

        while at < html.len() {
            if self.tags.mode() == TagMode::InTag || html[at] == b'<' {
                match self.tags.skip(html, at) {
                    TagSkip::Resume(next) => {
                        at = next;
                        continue;
                    }
                    TagSkip::Unterminated | TagSkip::EndOfInput => break,
                }
            }

            let run = word_run(html, at);
            if !at_eof && at + run == html.len() {
                return Some(at);
            }

            self.word(&html[at..at + run]);
            at += run;
            at += separator_run(html, at);
        }

        None
    }

    /// Considers one raw run for output.
    pub(crate) fn word(&mut self, raw: &[u8]) {
        if raw.is_empty() {
            return;
        }

        if raw.len() >= self.options.max_word_length {
            self.drop_word(raw.len());
            return;
        }

        let word = trim_token(raw);
        if word.is_empty() {
            return;
        }

        if self.stats.words_emitted > 0 {
            self.output.push(b' ');
        }
        let starts_at = self.output.len();
        self.output.extend_from_slice(word);
        if self.options.case_fold.applies_to(self.stats.words_emitted) {
            fold_first(&mut self.output[starts_at..]);
        }
        self.stats.words_emitted += 1;
    }

    /// Records a raw run of `length` bytes that was too long to keep.
    pub(crate) fn drop_word(&mut self, length: usize) {
        trace!(
            length,
            limit = self.options.max_word_length,
            "dropping oversize word"
        );
        self.stats.words_dropped += 1;
    }

    /// Removes and returns the text produced so far.
    pub(crate) fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }

    pub(crate) fn finish(mut self) -> (Vec<u8>, ExtractStats) {
        self.stats.tags_skipped = self.tags.tags_skipped();
        self.stats.unterminated_tag = self.tags.mode() == TagMode::InTag;
        (self.output, self.stats)
    }
}

/// Obtains the output buffer for an input of `input_length` bytes.
///
/// No extracted text is longer than its input: tags vanish, and each
/// separator is paid for by the space or `<` that ended the word before it.
/// The one spare byte keeps room for a terminator.
fn output_buffer(input_length: usize) -> Result<Vec<u8>, ExtractionError> {
    let requested = input_length.saturating_add(1);
    let mut output = Vec::new();
    output
        .try_reserve_exact(requested)
        .map_err(|_| ExtractionError::AllocationFailed { requested })?;

    Ok(output)
}

/// Extracts readable text from `html` with the default options.
///
/// The returned buffer belongs to the caller alone. On error no text is
/// produced at all.
///
/// ```
/// let text = html2text::extract_text(b"<p>Hello <b>big</b> world</p>").unwrap();
/// assert_eq!(text, b"hello big world");
/// ```
pub fn extract_text(html: &[u8]) -> Result<Vec<u8>, ExtractionError> {
    extract_text_with(html, &ExtractOptions::default())
}

/// Extracts readable text from `html`.
pub fn extract_text_with(html: &[u8], options: &ExtractOptions) -> Result<Vec<u8>, ExtractionError> {
    extract_text_stats(html, options).map(|(text, _)| text)
}

/// Extracts readable text from `html`, also reporting what the scan saw.
pub fn extract_text_stats(
    html: &[u8],
    options: &ExtractOptions,
) -> Result<(Vec<u8>, ExtractStats), ExtractionError> {
    let output = output_buffer(html.len())?;
    let capacity = output.capacity();

    let mut extractor = Extractor::new(*options, output);
    extractor.scan(html, 0, true);
    let (text, stats) = extractor.finish();

    debug_assert!(text.len() <= html.len());
    debug_assert_eq!(text.capacity(), capacity, "output buffer grew");
    debug!(
        input_length = html.len(),
        output_length = text.len(),
        ?stats,
        "extracted text"
    );

    Ok((text, stats))
}

/// String convenience wrapper around [`extract_text`].
///
/// Invalid UTF-8 in the result is replaced with U+FFFD, and a failed
/// extraction yields an empty string.
pub fn html2text(html: &str) -> String {
    match extract_text(html.as_bytes()) {
        Ok(text) => String::from_utf8(text)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()),
        Err(err) => {
            debug!(%err, "extraction failed");
            String::new()
        }
    }
}
