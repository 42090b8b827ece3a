use crate::extractor::{ExtractStats, Extractor};
use crate::options::ExtractOptions;
use crate::word::word_run;

/// Extracts text from a document that arrives in pieces.
///
/// Feeding every piece of a document through [`StreamExtractor::push`] and
/// calling [`StreamExtractor::finish`] yields exactly what
/// [`crate::extract_text_with`] yields for the whole document, wherever the
/// pieces were cut. A tag or word cut in half is completed by the next
/// piece.
///
/// Memory held between pieces is bounded by the word length limit: a word
/// that grows past it is dropped as soon as that is known.
pub struct StreamExtractor {
    extractor: Extractor,

    /// Start of a raw run that reached the end of the previous piece.
    pending: Vec<u8>,

    /// The pending run already reached the word length limit.
    pending_oversize: bool,

    pending_length: usize,
}

impl StreamExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            extractor: Extractor::new(options, Vec::new()),
            pending: Vec::new(),
            pending_oversize: false,
            pending_length: 0,
        }
    }

    /// Scans the next piece of the document.
    pub fn push(&mut self, chunk: &[u8]) {
        let mut at = 0;

        if self.has_pending_word() {
            let run = word_run(chunk, 0);
            self.extend_pending(&chunk[..run]);
            if run == chunk.len() {
                return;
            }
            self.flush_pending();
            at = run;
        }

        if let Some(run_starts_at) = self.extractor.scan(chunk, at, false) {
            self.extend_pending(&chunk[run_starts_at..]);
        }
    }

    /// Takes the text completed so far, leaving it out of the final result.
    ///
    /// Concatenating every taken piece with the result of
    /// [`StreamExtractor::finish`] gives the full text.
    pub fn take_output(&mut self) -> Vec<u8> {
        self.extractor.take_output()
    }

    /// Ends the document and returns the remaining text.
    pub fn finish(mut self) -> (Vec<u8>, ExtractStats) {
        if self.has_pending_word() {
            self.flush_pending();
        }

        self.extractor.finish()
    }

    fn has_pending_word(&self) -> bool {
        self.pending_length > 0
    }

    fn extend_pending(&mut self, bytes: &[u8]) {
        self.pending_length += bytes.len();
        if self.pending_oversize {
            return;
        }

        if self.pending_length >= self.extractor.options().max_word_length {
            self.pending_oversize = true;
            self.pending.clear();
        } else {
            self.pending.extend_from_slice(bytes);
        }
    }

    fn flush_pending(&mut self) {
        if self.pending_oversize {
            self.extractor.drop_word(self.pending_length);
        } else {
            self.extractor.word(&self.pending);
        }

        self.pending.clear();
        self.pending_oversize = false;
        self.pending_length = 0;
    }
}

impl Default for StreamExtractor {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}
