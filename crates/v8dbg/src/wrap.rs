//! Module wrap-prologue column correction.
//!
//! Before compiling a script loaded via `require`, the engine wraps the user
//! source in a function expression. Everything on line 0 is therefore offset
//! by the prologue length from the engine's point of view, and (line 0,
//! column 0) would land inside the wrapper rather than on user code. Columns
//! are corrected here in both directions so the rest of the crate only ever
//! sees editor coordinates.

/// The synthetic prologue the engine prepends to every wrapped module.
pub const SCRIPT_WRAP_BEGIN: &str =
    "(function (exports, require, module, __filename, __dirname) { ";

/// Converts an editor column to an engine column.
#[must_use]
pub fn column_to_engine(line: u32, column: u32) -> u32 {
    if line == 0 {
        column + SCRIPT_WRAP_BEGIN.len() as u32
    } else {
        column
    }
}

/// Converts an engine column back to an editor column.
///
/// Saturates at 0 if the engine reports a line-0 column inside the prologue,
/// which a well-behaved engine never does.
#[must_use]
pub fn column_from_engine(line: u32, column: u32) -> u32 {
    if line == 0 {
        column.saturating_sub(SCRIPT_WRAP_BEGIN.len() as u32)
    } else {
        column
    }
}
