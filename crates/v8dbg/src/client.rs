//! Wire framing and a blocking request/response client.
//!
//! Messages travel as a small header block terminated by a blank line, with
//! `Content-Length` giving the JSON payload size. The engine's connect
//! greeting is a header block with a zero-length payload (`Type: connect`,
//! `V8-Version`, ...); other headers are tolerated and ignored.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpStream, ToSocketAddrs};

use serde_json::Value;
use tracing::{debug, trace};

use crate::commands::DebuggerCommand;
use crate::error::ProtocolError;
use crate::protocol::{Request, Response};

const CONTENT_LENGTH: &str = "Content-Length";

/// Reads one framed payload; `None` on a clean end of stream.
pub fn read_message<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut content_length = None;
    let mut line = String::new();

    loop {
        line.clear();
        let bytes = reader.read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            break;
        }
        if let Some((name, value)) = trimmed.split_once(':') {
            if name.trim().eq_ignore_ascii_case(CONTENT_LENGTH) {
                if let Ok(length) = value.trim().parse::<usize>() {
                    content_length = Some(length);
                }
            }
        }
    }

    let length = content_length.ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "missing Content-Length header")
    })?;

    let mut buffer = vec![0u8; length];
    reader.read_exact(&mut buffer)?;
    let payload = String::from_utf8(buffer)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "invalid utf-8 payload"))?;
    Ok(Some(payload))
}

/// Writes one framed payload.
pub fn write_message<W: Write>(writer: &mut W, payload: &str) -> io::Result<()> {
    let length = payload.len();
    write!(writer, "{CONTENT_LENGTH}: {length}\r\n\r\n")?;
    writer.write_all(payload.as_bytes())?;
    writer.flush()
}

/// Blocking client for one engine connection.
///
/// Owns the request sequence counter and correlates each response by
/// `request_seq`. One request is in flight at a time; call sites that want
/// parallel requests open independent connections.
#[derive(Debug)]
pub struct DebuggerClient<R, W> {
    reader: R,
    writer: W,
    seq: u32,
}

impl DebuggerClient<BufReader<TcpStream>, TcpStream> {
    /// Connects over TCP (the engine listens on port 5858 by default).
    pub fn connect(addr: impl ToSocketAddrs) -> io::Result<Self> {
        let stream = TcpStream::connect(addr)?;
        let reader = BufReader::new(stream.try_clone()?);
        Ok(Self::new(reader, stream))
    }
}

impl<R: BufRead, W: Write> DebuggerClient<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            seq: 0,
        }
    }

    /// Sends one command and parses its correlated response.
    ///
    /// Events and stale responses arriving in between are skipped. An engine
    /// `success: false` surfaces as [`ProtocolError::CommandFailed`] with the
    /// engine's message.
    pub fn send<C: DebuggerCommand>(&mut self, command: &C) -> Result<C::Response, ProtocolError> {
        self.seq += 1;
        let request = Request::new(self.seq, command.name(), command.arguments());
        let payload = serde_json::to_string(&request).map_err(ProtocolError::InvalidMessage)?;
        debug!(command = command.name(), seq = self.seq, "sending request");
        write_message(&mut self.writer, &payload)?;

        loop {
            let Some(payload) = read_message(&mut self.reader)? else {
                return Err(ProtocolError::Disconnected);
            };
            // Connect greeting: headers only, nothing to parse.
            if payload.is_empty() {
                continue;
            }
            let message: Value =
                serde_json::from_str(&payload).map_err(ProtocolError::InvalidMessage)?;
            if message.get("type").and_then(Value::as_str) != Some("response") {
                trace!(payload = %payload, "skipping non-response message");
                continue;
            }
            let response: Response<Value> =
                serde_json::from_value(message).map_err(ProtocolError::InvalidMessage)?;
            if response.request_seq != self.seq {
                trace!(
                    request_seq = response.request_seq,
                    "skipping stale response"
                );
                continue;
            }
            if !response.success {
                return Err(ProtocolError::CommandFailed {
                    command: command.name(),
                    message: response
                        .message
                        .unwrap_or_else(|| "unspecified engine failure".to_string()),
                });
            }
            let body = response.body.unwrap_or(Value::Null);
            return command.parse_body(&body);
        }
    }
}
