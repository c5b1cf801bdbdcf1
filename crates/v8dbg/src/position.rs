//! Source positions as the editor sees them.

/// A zero-based (line, column) location in a named source file.
///
/// Line 0 is special on the wire: the engine wraps the first line of every
/// module in a synthetic prologue, so column offsets on line 0 are shifted
/// before they reach the engine (see [`crate::column_to_engine`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePosition {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl FilePosition {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}
