use memchr::memchr;
use tracing::trace;

/// Where the scanner stands relative to tag markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagMode {
    /// Top level. A tag starts at the `<` under the cursor.
    #[default]
    Text,

    /// Inside a tag whose `<` was left behind in an earlier buffer; only a
    /// `>` ends it.
    InTag,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagSkip {
    /// Text resumes at this offset, which may equal the buffer length.
    Resume(usize),

    /// The buffer ended before the tag closed. The scanner is now in
    /// [`TagMode::InTag`].
    Unterminated,

    /// The cursor was already at or past the end of the buffer.
    EndOfInput,
}

/// Skips tag markup, collapsing runs of adjacent tags like `</b><i>` into a
/// single step.
///
/// Tag contents are not interpreted: everything from `<` up to the first
/// following `>` is markup, including quotes and further `<` bytes.
#[derive(Clone, Debug, Default)]
pub struct TagScanner {
    mode: TagMode,
    tags_skipped: usize,
}

impl TagScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> TagMode {
        self.mode
    }

    /// Number of complete tags skipped so far.
    pub fn tags_skipped(&self) -> usize {
        self.tags_skipped
    }

    /// Advances past the tag at `at` and any tags directly following it.
    ///
    /// In [`TagMode::Text`] the byte at `at` must be `<`. In
    /// [`TagMode::InTag`] scanning starts at `at` itself.
    pub fn skip(&mut self, html: &[u8], at: usize) -> TagSkip {
        if at >= html.len() {
            return TagSkip::EndOfInput;
        }

        let was_at = at;
        let mut at = at;
        let mut chained = 0usize;

        // Each pass consumes at least the closing `>`, so this runs at most
        // `html.len() - at` times however many empty tags are chained.
        loop {
            let search_from = match self.mode {
                TagMode::Text => {
                    debug_assert_eq!(html[at], b'<', "tag scan must start on '<'");
                    at + 1
                }
                TagMode::InTag => at,
            };

            let closer = match memchr(b'>', &html[search_from..]) {
                Some(offset) => search_from + offset,
                None => {
                    self.mode = TagMode::InTag;
                    trace!(at = was_at, chained, "tag still open at end of buffer");
                    return TagSkip::Unterminated;
                }
            };

            self.mode = TagMode::Text;
            self.tags_skipped += 1;
            chained += 1;
            at = closer + 1;

            if html.get(at) != Some(&b'<') {
                if chained > 1 {
                    trace!(at = was_at, chained, "skipped adjacent tags");
                }
                return TagSkip::Resume(at);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_skip_single_tag() {
        let mut scanner = TagScanner::new();
        assert_eq!(scanner.skip(b"<b>bold", 0), TagSkip::Resume(3));
        assert_eq!(scanner.mode(), TagMode::Text);
        assert_eq!(scanner.tags_skipped(), 1);
    }

    #[test]
    fn test_skip_adjacent_tags_in_one_step() {
        let mut scanner = TagScanner::new();
        assert_eq!(scanner.skip(b"</b><i>x", 0), TagSkip::Resume(7));
        assert_eq!(scanner.tags_skipped(), 2);
    }

    #[test]
    fn test_skip_stops_before_text_between_tags() {
        let mut scanner = TagScanner::new();
        assert_eq!(scanner.skip(b"<a> <b>", 0), TagSkip::Resume(3));
    }

    #[test]
    fn test_skip_tag_at_end_of_buffer() {
        let mut scanner = TagScanner::new();
        assert_eq!(scanner.skip(b"<span>", 0), TagSkip::Resume(6));
        assert_eq!(scanner.mode(), TagMode::Text);
    }

    #[test]
    fn test_empty_tag() {
        let mut scanner = TagScanner::new();
        assert_eq!(scanner.skip(b"<>x", 0), TagSkip::Resume(2));
    }

    #[test]
    fn test_tag_contents_are_not_interpreted() {
        let mut scanner = TagScanner::new();
        assert_eq!(scanner.skip(b"<<a>b", 0), TagSkip::Resume(4));
        assert_eq!(scanner.tags_skipped(), 1);

        let mut scanner = TagScanner::new();
        assert_eq!(
            scanner.skip(br#"<a title="x>y">z"#, 0),
            TagSkip::Resume(12)
        );
    }

    #[test]
    fn test_unterminated_tag_switches_mode() {
        let mut scanner = TagScanner::new();
        assert_eq!(scanner.skip(b"<sp", 0), TagSkip::Unterminated);
        assert_eq!(scanner.mode(), TagMode::InTag);
        assert_eq!(scanner.tags_skipped(), 0);

        assert_eq!(scanner.skip(b"an>text", 0), TagSkip::Resume(3));
        assert_eq!(scanner.mode(), TagMode::Text);
        assert_eq!(scanner.tags_skipped(), 1);
    }

    #[test]
    fn test_unterminated_after_chain() {
        let mut scanner = TagScanner::new();
        assert_eq!(scanner.skip(b"<a><b", 0), TagSkip::Unterminated);
        assert_eq!(scanner.tags_skipped(), 1);
        assert_eq!(scanner.mode(), TagMode::InTag);
    }

    #[test]
    fn test_lone_open_bracket_at_end() {
        let mut scanner = TagScanner::new();
        assert_eq!(scanner.skip(b"<", 0), TagSkip::Unterminated);
    }

    #[test]
    fn test_end_of_input() {
        let mut scanner = TagScanner::new();
        assert_eq!(scanner.skip(b"<b>", 3), TagSkip::EndOfInput);
        assert_eq!(scanner.skip(b"", 0), TagSkip::EndOfInput);
        assert_eq!(scanner.mode(), TagMode::Text);
    }

    #[test]
    fn test_many_adjacent_empty_tags() {
        let html = "<>".repeat(500_000);
        let mut scanner = TagScanner::new();
        assert_eq!(
            scanner.skip(html.as_bytes(), 0),
            TagSkip::Resume(html.len())
        );
        assert_eq!(scanner.tags_skipped(), 500_000);
    }
}
