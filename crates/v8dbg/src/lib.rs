//! Typed command layer for the legacy V8 (Node.js) debugger protocol.
//!
//! The engine speaks JSON request/response messages framed with
//! `Content-Length` headers over TCP. Each debugger operation is a typed
//! command: it builds a named argument payload and parses the matching
//! response body back into an application-usable result. The intricate one
//! is `setbreakpoint`, which corrects for the module wrap prologue on line 0
//! and picks between three script-targeting strategies.

mod breakpoint;
mod client;
mod commands;
mod error;
mod position;
mod protocol;
mod target;
mod wrap;

pub use breakpoint::{BreakOn, BreakpointDefinition, ScriptModule};
pub use client::{read_message, write_message, DebuggerClient};
pub use commands::{
    ChangeBreakpointArguments, ChangeBreakpointCommand, ClearBreakpointCommand, DebuggerCommand,
    SetBreakpointArguments, SetBreakpointCommand, SetBreakpointResult,
};
pub use error::ProtocolError;
pub use position::FilePosition;
pub use protocol::{Event, MessageType, Request, Response};
pub use target::{case_insensitive_file_pattern, ScriptTarget, TargetKind, TargetValue};
pub use wrap::{column_from_engine, column_to_engine, SCRIPT_WRAP_BEGIN};
