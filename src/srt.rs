use serde::Serialize;

/// One parsed subtitle block. The timestamps are kept verbatim as they
/// appeared in the source file, and the field order here is also the key
/// order in the JSON output.
#[derive(Debug, PartialEq, Serialize)]
pub struct Subtitle {
    pub(crate) index: u64,
    pub(crate) start: String,
    pub(crate) end: String,
    pub(crate) text: String,
}
