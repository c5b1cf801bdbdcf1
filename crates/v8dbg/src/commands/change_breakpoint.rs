//! The `changebreakpoint` command.
//!
//! Updates the enable flag, condition, or ignore count of an existing engine
//! breakpoint. Carries none of the targeting or offset logic; fields are
//! sent only when the caller wants them changed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::commands::DebuggerCommand;
use crate::error::ProtocolError;

/// Wire arguments for `changebreakpoint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeBreakpointArguments {
    pub breakpoint: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_count: Option<u32>,
}

/// Adjusts an existing engine breakpoint. No response body of interest.
#[derive(Debug, Clone)]
pub struct ChangeBreakpointCommand {
    arguments: ChangeBreakpointArguments,
}

impl ChangeBreakpointCommand {
    #[must_use]
    pub fn new(
        breakpoint_id: u32,
        enabled: Option<bool>,
        condition: Option<String>,
        ignore_count: Option<u32>,
    ) -> Self {
        Self {
            arguments: ChangeBreakpointArguments {
                breakpoint: breakpoint_id,
                enabled,
                condition,
                ignore_count,
            },
        }
    }
}

impl DebuggerCommand for ChangeBreakpointCommand {
    type Response = ();

    fn name(&self) -> &'static str {
        "changebreakpoint"
    }

    fn arguments(&self) -> Option<Value> {
        serde_json::to_value(&self.arguments).ok()
    }

    fn parse_body(&self, _body: &Value) -> Result<(), ProtocolError> {
        Ok(())
    }
}
