//! The `clearbreakpoint` command.

use serde_json::{json, Value};

use crate::commands::DebuggerCommand;
use crate::error::ProtocolError;

/// Removes one engine breakpoint by id. No response body of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearBreakpointCommand {
    breakpoint_id: u32,
}

impl ClearBreakpointCommand {
    #[must_use]
    pub fn new(breakpoint_id: u32) -> Self {
        Self { breakpoint_id }
    }
}

impl DebuggerCommand for ClearBreakpointCommand {
    type Response = ();

    fn name(&self) -> &'static str {
        "clearbreakpoint"
    }

    fn arguments(&self) -> Option<Value> {
        Some(json!({ "breakpoint": self.breakpoint_id }))
    }

    fn parse_body(&self, _body: &Value) -> Result<(), ProtocolError> {
        Ok(())
    }
}
