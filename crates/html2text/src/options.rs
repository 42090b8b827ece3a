use std::str::FromStr;

/// Capacity of the word staging area.
///
/// A raw text run of this many bytes or more is dropped whole, never
/// truncated.
pub const MAX_WORD_LENGTH: usize = 100;

/// Which extracted words get their first letter lowercased.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaseFold {
    /// Only the first word emitted for the whole document.
    #[default]
    FirstToken,

    /// Every emitted word.
    EveryToken,

    /// Words are copied verbatim.
    Preserve,
}
impl CaseFold {
    /// Whether the word about to be emitted, preceded by `emitted` others,
    /// has its first letter folded.
    pub(crate) fn applies_to(self, emitted: usize) -> bool {
        match self {
            CaseFold::FirstToken => emitted == 0,
            CaseFold::EveryToken => true,
            CaseFold::Preserve => false,
        }
    }
}
impl From<&CaseFold> for &str {
    fn from(val: &CaseFold) -> Self {
        match val {
            CaseFold::FirstToken => "first-token",
            CaseFold::EveryToken => "every-token",
            CaseFold::Preserve => "preserve",
        }
    }
}
impl std::fmt::Display for CaseFold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.into())
    }
}
impl FromStr for CaseFold {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-token" => Ok(CaseFold::FirstToken),
            "every-token" => Ok(CaseFold::EveryToken),
            "preserve" => Ok(CaseFold::Preserve),
            _ => Err(format!(
                "unknown case fold \"{s}\", expected one of: first-token, every-token, preserve"
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub case_fold: CaseFold,

    /// Raw runs of at least this many bytes are dropped.
    pub max_word_length: usize,
}
impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            case_fold: CaseFold::default(),
            max_word_length: MAX_WORD_LENGTH,
        }
    }
}
impl ExtractOptions {
    pub fn with_case_fold(mut self, case_fold: CaseFold) -> Self {
        self.case_fold = case_fold;
        self
    }

    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = max_word_length;
        self
    }
}
