//! V8 debug protocol envelope types.
//!
//! Every message carries a sequence number and a `type` tag; responses echo
//! the request's sequence in `request_seq` (snake_case on this wire, unlike
//! the argument payloads, which are camelCase). The envelope is generic over
//! the argument/body type so commands can plug in their own payloads.

use serde::{Deserialize, Serialize};

/// Envelope message types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Request,
    Response,
    Event,
}

/// Generic request message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request<T> {
    pub seq: u32,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<T>,
}

impl<T> Request<T> {
    pub fn new(seq: u32, command: impl Into<String>, arguments: Option<T>) -> Self {
        Self {
            seq,
            message_type: MessageType::Request,
            command: command.into(),
            arguments,
        }
    }
}

/// Generic response message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    pub seq: u32,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub request_seq: u32,
    pub command: String,
    pub success: bool,
    /// Engine-supplied failure description when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Whether the debuggee kept running after handling the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<T>,
}

/// Generic event message (`break`, `afterCompile`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event<T> {
    pub seq: u32,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn request_carries_type_tag() {
        let request = Request::new(3, "setbreakpoint", Some(json!({"line": 1})));
        let serialized = serde_json::to_value(request).expect("serialize request");
        assert_eq!(serialized.get("type"), Some(&json!("request")));
        assert_eq!(serialized.get("seq"), Some(&json!(3)));
        assert_eq!(serialized.get("command"), Some(&json!("setbreakpoint")));
    }

    #[test]
    fn argumentless_request_omits_the_field() {
        let request: Request<Value> = Request::new(1, "disconnect", None);
        let serialized = serde_json::to_value(request).expect("serialize request");
        assert!(serialized.get("arguments").is_none());
    }

    #[test]
    fn response_keeps_request_seq_snake_case() {
        let raw = json!({
            "seq": 12,
            "type": "response",
            "request_seq": 11,
            "command": "setbreakpoint",
            "success": true,
            "running": false,
            "body": {"breakpoint": 1},
        });
        let response: Response<Value> = serde_json::from_value(raw).expect("parse response");
        assert_eq!(response.request_seq, 11);
        assert_eq!(response.running, Some(false));
        assert!(response.success);
    }
}
