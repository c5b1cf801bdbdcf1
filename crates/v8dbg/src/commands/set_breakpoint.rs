//! The `setbreakpoint` command.
//!
//! The one command in the family with real encoding logic: wrap-prologue
//! column correction on line 0, three-way script targeting, and actual-bind
//! location fixup on the way back.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::breakpoint::{BreakpointDefinition, ScriptModule};
use crate::commands::DebuggerCommand;
use crate::error::ProtocolError;
use crate::position::FilePosition;
use crate::target::{ScriptTarget, TargetKind, TargetValue};
use crate::wrap::{column_from_engine, column_to_engine};

/// Wire arguments for `setbreakpoint`.
///
/// Optional fields are omitted, not defaulted: the engine's defaults are
/// enabled=true, ignoreCount=0, no condition, and omission is how "use the
/// default" is expressed on this wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBreakpointArguments {
    pub line: u32,
    pub column: u32,
    #[serde(rename = "type")]
    pub kind: TargetKind,
    pub target: TargetValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// Typed result of a successful `setbreakpoint` round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBreakpointResult {
    /// Engine-assigned breakpoint id.
    pub breakpoint_id: u32,
    /// Resolved script id; `None` until the engine reports one (regex and
    /// literal-name targets may bind before the script is loaded).
    pub script_id: Option<u32>,
    /// Actual bind line, in editor coordinates.
    pub line: u32,
    /// Actual bind column, in editor coordinates.
    pub column: u32,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    breakpoint: u32,
    #[serde(default)]
    script_id: Option<u32>,
    #[serde(default)]
    actual_locations: Vec<ActualLocation>,
}

#[derive(Debug, Deserialize)]
struct ActualLocation {
    line: u32,
    column: u32,
}

/// Places one breakpoint. Built per attempt; a retry builds a fresh command.
#[derive(Debug, Clone)]
pub struct SetBreakpointCommand {
    requested: FilePosition,
    module_id: Option<u32>,
    arguments: SetBreakpointArguments,
}

impl SetBreakpointCommand {
    /// Builds the request payload eagerly.
    ///
    /// `without_predicate` asks for a bare breakpoint: ignore count and
    /// condition stay off the wire even when the definition carries them
    /// (used when the debugger evaluates predicates client-side). `remote`
    /// switches unresolved scripts to regex targeting, since local paths are
    /// not trustworthy on a remote engine host.
    #[must_use]
    pub fn new(
        breakpoint: &BreakpointDefinition,
        module: Option<&ScriptModule>,
        without_predicate: bool,
        remote: bool,
    ) -> Self {
        let line = breakpoint.position.line;
        // (line 0, column 0) would land inside the module wrap prologue.
        let column = column_to_engine(line, breakpoint.position.column);

        let target = ScriptTarget::select(module, remote, &breakpoint.position.file);

        let enabled = if breakpoint.break_on.engine_enabled(breakpoint.enabled, 0) {
            None
        } else {
            Some(false)
        };

        let (ignore_count, condition) = if without_predicate {
            (None, None)
        } else {
            let ignore_count = match breakpoint.break_on.engine_ignore_count(0) {
                0 => None,
                count => Some(count),
            };
            let condition = breakpoint
                .condition
                .clone()
                .filter(|condition| !condition.is_empty());
            (ignore_count, condition)
        };

        Self {
            requested: breakpoint.position.clone(),
            module_id: module.map(|module| module.id),
            arguments: SetBreakpointArguments {
                line,
                column,
                kind: target.kind(),
                target: target.value(),
                enabled,
                ignore_count,
                condition,
            },
        }
    }

    /// The request payload this command will send.
    #[must_use]
    pub fn request(&self) -> &SetBreakpointArguments {
        &self.arguments
    }
}

impl DebuggerCommand for SetBreakpointCommand {
    type Response = SetBreakpointResult;

    fn name(&self) -> &'static str {
        "setbreakpoint"
    }

    fn arguments(&self) -> Option<Value> {
        serde_json::to_value(&self.arguments).ok()
    }

    fn parse_body(&self, body: &Value) -> Result<SetBreakpointResult, ProtocolError> {
        let body =
            ResponseBody::deserialize(body).map_err(|source| ProtocolError::MalformedResponse {
                command: self.name(),
                source,
            })?;

        let script_id = body.script_id.or(self.module_id);

        // The engine may bind somewhere else than requested, e.g. when the
        // requested line has no executable statement. An empty list means no
        // refinement was reported; assume the request bound as asked.
        let (line, column) = match body.actual_locations.first() {
            Some(location) => (
                location.line,
                column_from_engine(location.line, location.column),
            ),
            None => (self.requested.line, self.requested.column),
        };

        Ok(SetBreakpointResult {
            breakpoint_id: body.breakpoint,
            script_id,
            line,
            column,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::BreakOn;
    use serde_json::json;

    fn definition(file: &str, line: u32, column: u32) -> BreakpointDefinition {
        BreakpointDefinition::new(FilePosition::new(file, line, column))
    }

    #[test]
    fn known_module_without_predicate_is_minimal() {
        let breakpoint = definition("app.js", 5, 3);
        let module = ScriptModule { id: 17 };
        let command = SetBreakpointCommand::new(&breakpoint, Some(&module), true, false);

        assert_eq!(
            command.arguments().unwrap(),
            json!({"line": 5, "column": 3, "type": "scriptId", "target": 17})
        );
    }

    #[test]
    fn line_zero_column_is_wrap_corrected() {
        let breakpoint = definition("app.js", 0, 0);
        let command = SetBreakpointCommand::new(&breakpoint, None, true, false);

        assert_eq!(command.request().column, 62);
        assert_eq!(
            command.arguments().unwrap(),
            json!({"line": 0, "column": 62, "type": "script", "target": "app.js"})
        );
    }

    #[test]
    fn remote_target_uses_regex() {
        let breakpoint = definition(r"C:\proj\Server.js", 2, 0);
        let command = SetBreakpointCommand::new(&breakpoint, None, true, true);

        let arguments = command.arguments().unwrap();
        assert_eq!(arguments["type"], json!("scriptRegExp"));
        let pattern = arguments["target"].as_str().unwrap();
        assert!(regex::Regex::new(pattern).unwrap().is_match("/opt/server.js"));
    }

    #[test]
    fn predicate_fields_follow_the_definition() {
        let mut breakpoint = definition("app.js", 1, 0);
        breakpoint.break_on = BreakOn::GreaterOrEqual(4);
        breakpoint.condition = Some("x > 2".to_string());
        let command = SetBreakpointCommand::new(&breakpoint, None, false, false);

        let arguments = command.arguments().unwrap();
        assert_eq!(arguments["ignoreCount"], json!(3));
        assert_eq!(arguments["condition"], json!("x > 2"));
        assert!(arguments.get("enabled").is_none());
    }

    #[test]
    fn without_predicate_suppresses_condition_and_count() {
        let mut breakpoint = definition("app.js", 1, 0);
        breakpoint.break_on = BreakOn::GreaterOrEqual(4);
        breakpoint.condition = Some("x > 2".to_string());
        let command = SetBreakpointCommand::new(&breakpoint, None, true, false);

        let arguments = command.arguments().unwrap();
        assert!(arguments.get("ignoreCount").is_none());
        assert!(arguments.get("condition").is_none());
    }

    #[test]
    fn disabled_breakpoint_is_sent_disabled() {
        let mut breakpoint = definition("app.js", 1, 0);
        breakpoint.enabled = false;
        let command = SetBreakpointCommand::new(&breakpoint, None, true, false);

        assert_eq!(command.arguments().unwrap()["enabled"], json!(false));
    }

    #[test]
    fn empty_condition_stays_off_the_wire() {
        let mut breakpoint = definition("app.js", 1, 0);
        breakpoint.condition = Some(String::new());
        let command = SetBreakpointCommand::new(&breakpoint, None, false, false);

        assert!(command.arguments().unwrap().get("condition").is_none());
    }

    #[test]
    fn actual_location_on_line_zero_is_corrected_back() {
        let breakpoint = definition("app.js", 0, 0);
        let command = SetBreakpointCommand::new(&breakpoint, None, true, false);

        let result = command
            .parse_body(&json!({
                "breakpoint": 4,
                "script_id": 33,
                "actual_locations": [{"line": 0, "column": 62, "script_id": 33}],
            }))
            .unwrap();

        assert_eq!(result.breakpoint_id, 4);
        assert_eq!(result.script_id, Some(33));
        assert_eq!((result.line, result.column), (0, 0));
    }

    #[test]
    fn missing_actual_locations_falls_back_to_requested_position() {
        let breakpoint = definition("app.js", 7, 2);
        let command = SetBreakpointCommand::new(&breakpoint, None, true, false);

        let result = command.parse_body(&json!({"breakpoint": 12})).unwrap();
        assert_eq!((result.line, result.column), (7, 2));
        assert_eq!(result.script_id, None);
    }

    #[test]
    fn missing_script_id_falls_back_to_known_module() {
        let breakpoint = definition("app.js", 1, 0);
        let module = ScriptModule { id: 9 };
        let command = SetBreakpointCommand::new(&breakpoint, Some(&module), true, false);

        let result = command
            .parse_body(&json!({
                "breakpoint": 2,
                "actual_locations": [{"line": 3, "column": 1}],
            }))
            .unwrap();
        assert_eq!(result.script_id, Some(9));
        assert_eq!((result.line, result.column), (3, 1));
    }

    #[test]
    fn missing_breakpoint_id_is_a_protocol_error() {
        let breakpoint = definition("app.js", 1, 0);
        let command = SetBreakpointCommand::new(&breakpoint, None, true, false);

        let error = command.parse_body(&json!({"script_id": 5})).unwrap_err();
        assert!(matches!(
            error,
            ProtocolError::MalformedResponse {
                command: "setbreakpoint",
                ..
            }
        ));

        let error = command
            .parse_body(&json!({"breakpoint": "four"}))
            .unwrap_err();
        assert!(matches!(error, ProtocolError::MalformedResponse { .. }));
    }

    #[test]
    fn identical_inputs_build_identical_payloads() {
        let breakpoint = definition("app.js", 4, 1);
        let first = SetBreakpointCommand::new(&breakpoint, None, false, true);
        let second = SetBreakpointCommand::new(&breakpoint, None, false, true);

        assert_eq!(
            serde_json::to_string(&first.arguments().unwrap()).unwrap(),
            serde_json::to_string(&second.arguments().unwrap()).unwrap()
        );
    }
}
