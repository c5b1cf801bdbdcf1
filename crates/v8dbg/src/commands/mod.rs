//! Typed debugger commands.
//!
//! A command is a capability pair: it builds the named argument payload for
//! one wire command and parses the matching response body into a typed
//! result. Commands are immutable once constructed and are used for exactly
//! one request/response round trip; a retry constructs a fresh instance.

mod change_breakpoint;
mod clear_breakpoint;
mod set_breakpoint;

pub use change_breakpoint::{ChangeBreakpointArguments, ChangeBreakpointCommand};
pub use clear_breakpoint::ClearBreakpointCommand;
pub use set_breakpoint::{SetBreakpointArguments, SetBreakpointCommand, SetBreakpointResult};

use serde_json::Value;

use crate::error::ProtocolError;

/// One wire command: argument construction plus response-body parsing.
pub trait DebuggerCommand {
    /// Typed result recovered from the response body.
    type Response;

    /// Wire command name (`setbreakpoint`, `clearbreakpoint`, ...).
    fn name(&self) -> &'static str;

    /// Argument payload, or `None` for argumentless commands.
    fn arguments(&self) -> Option<Value>;

    /// Parses the `body` field of a successful response.
    ///
    /// Returns a fresh result record rather than mutating the command, so a
    /// command stays inspectable after parsing.
    fn parse_body(&self, body: &Value) -> Result<Self::Response, ProtocolError>;
}
