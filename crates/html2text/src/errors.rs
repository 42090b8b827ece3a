#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractionError {
    /// The output buffer for an input of `requested - 1` bytes could not be
    /// obtained. No partial output exists when this is returned.
    AllocationFailed { requested: usize },
}
impl std::error::Error for ExtractionError {}
impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionError::AllocationFailed { requested } => write!(
                f,
                "Cannot allocate {requested} bytes for the extracted text."
            ),
        }
    }
}
impl From<ExtractionError> for &'static str {
    fn from(val: ExtractionError) -> Self {
        match val {
            ExtractionError::AllocationFailed { .. } => "allocation-failed",
        }
    }
}
impl From<&ExtractionError> for &'static str {
    fn from(val: &ExtractionError) -> Self {
        (*val).into()
    }
}
