//! Text framing for the realtime channel: Socket.IO v5 packets carried in
//! Engine.IO v4 frames over a WebSocket.
//!
//! Only what a listening client needs is modelled. Binary attachments are
//! recognised and rejected; the server broadcasts plain JSON.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;
use crate::models::VoteRecord;

pub const SOCKET_PATH: &str = "/socket.io/?EIO=4&transport=websocket";

pub const EVENT_VOTES_UPDATED: &str = "votes_updated";
pub const EVENT_DEPARTMENTS_UPDATED: &str = "departments_updated";
pub const EVENT_VOTES_CLEARED: &str = "votes_cleared";

#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    #[error("empty frame")]
    Empty,
    #[error("unknown engine packet type {0:?}")]
    UnknownEngineType(char),
    #[error("unknown socket packet type {0:?}")]
    UnknownSocketType(char),
    #[error("binary packets are not supported")]
    Binary,
    #[error("malformed payload: {0}")]
    Payload(String),
    #[error("unsupported socket url {0:?}")]
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handshake {
    pub sid: String,
    #[serde(default)]
    pub upgrades: Vec<String>,
    pub ping_interval: u64,
    pub ping_timeout: u64,
    #[serde(default)]
    pub max_payload: Option<u64>,
}

/// Liveness window used until the server's handshake says otherwise.
pub const DEFAULT_LIVENESS_MS: u32 = 45_000;

impl Handshake {
    /// How long the session may stay silent before it is considered dead:
    /// one ping interval plus the server's ping timeout.
    pub fn liveness_ms(&self) -> u32 {
        let window = self.ping_interval.saturating_add(self.ping_timeout);
        u32::try_from(window).unwrap_or(u32::MAX)
    }
}

/// Engine.IO frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Open(Handshake),
    Close,
    Ping,
    Pong,
    Message(Packet),
    Upgrade,
    Noop,
}

/// Socket.IO packet, namespace and ack id stripped.
#[derive(Debug, Clone, PartialEq)]
pub enum Packet {
    Connect,
    Disconnect,
    Event { name: String, args: Vec<Value> },
    Ack,
    ConnectError(Option<String>),
}

impl Frame {
    pub fn decode(text: &str) -> Result<Self, FrameError> {
        let mut chars = text.chars();
        let kind = chars.next().ok_or(FrameError::Empty)?;
        let rest = chars.as_str();

        match kind {
            '0' => serde_json::from_str(rest)
                .map(Frame::Open)
                .map_err(|e| FrameError::Payload(e.to_string())),
            '1' => Ok(Frame::Close),
            '2' => Ok(Frame::Ping),
            '3' => Ok(Frame::Pong),
            '4' => Packet::decode(rest).map(Frame::Message),
            '5' => Ok(Frame::Upgrade),
            '6' => Ok(Frame::Noop),
            other => Err(FrameError::UnknownEngineType(other)),
        }
    }

    /// Encodes the frames a client sends. Server-only frames encode as their
    /// bare type digit.
    pub fn encode(&self) -> String {
        match self {
            Frame::Open(_) => "0".into(),
            Frame::Close => "1".into(),
            Frame::Ping => "2".into(),
            Frame::Pong => "3".into(),
            Frame::Message(packet) => format!("4{}", packet.encode()),
            Frame::Upgrade => "5".into(),
            Frame::Noop => "6".into(),
        }
    }
}

impl Packet {
    pub fn decode(text: &str) -> Result<Self, FrameError> {
        let mut chars = text.chars();
        let kind = chars.next().ok_or(FrameError::Empty)?;
        let body = strip_ack_id(strip_namespace(chars.as_str()));

        match kind {
            '0' => Ok(Packet::Connect),
            '1' => Ok(Packet::Disconnect),
            '2' => decode_event(body),
            '3' => Ok(Packet::Ack),
            '4' => Ok(Packet::ConnectError(connect_error_message(body))),
            '5' | '6' => Err(FrameError::Binary),
            other => Err(FrameError::UnknownSocketType(other)),
        }
    }

    pub fn encode(&self) -> String {
        match self {
            Packet::Connect => "0".into(),
            Packet::Disconnect => "1".into(),
            Packet::Event { name, args } => {
                let mut array = Vec::with_capacity(args.len() + 1);
                array.push(Value::String(name.clone()));
                array.extend(args.iter().cloned());
                format!("2{}", Value::Array(array))
            }
            Packet::Ack => "3".into(),
            Packet::ConnectError(_) => "4".into(),
        }
    }
}

fn strip_namespace(text: &str) -> &str {
    if text.starts_with('/') {
        text.split_once(',').map(|(_, rest)| rest).unwrap_or("")
    } else {
        text
    }
}

fn strip_ack_id(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_ascii_digit())
}

fn decode_event(body: &str) -> Result<Packet, FrameError> {
    let mut items = match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => items.into_iter(),
        Ok(_) => return Err(FrameError::Payload("event is not an array".into())),
        Err(e) => return Err(FrameError::Payload(e.to_string())),
    };
    match items.next() {
        Some(Value::String(name)) => Ok(Packet::Event { name, args: items.collect() }),
        _ => Err(FrameError::Payload("event has no name".into())),
    }
}

fn connect_error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body).ok()? {
        Value::Object(map) => map.get("message").and_then(Value::as_str).map(str::to_string),
        Value::String(message) => Some(message),
        _ => None,
    }
}

/// Broadcasts the voting server pushes to every client.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    VotesUpdated(Vec<VoteRecord>),
    DepartmentsUpdated(Vec<String>),
    VotesCleared,
}

impl ServerEvent {
    /// Maps a decoded event to a broadcast. Unknown event names and empty
    /// department lists yield `Ok(None)`.
    pub fn from_event(name: &str, args: &[Value]) -> Result<Option<Self>, FrameError> {
        let first = args.first().cloned().unwrap_or(Value::Null);
        let event = match name {
            EVENT_VOTES_UPDATED => serde_json::from_value::<Option<Vec<VoteRecord>>>(first)
                .map(|list| ServerEvent::VotesUpdated(list.unwrap_or_default()))
                .map_err(|e| FrameError::Payload(e.to_string()))?,
            EVENT_DEPARTMENTS_UPDATED => {
                let departments = serde_json::from_value::<Vec<String>>(first)
                    .map_err(|e| FrameError::Payload(e.to_string()))?;
                if departments.is_empty() {
                    warn!("ignoring empty department list");
                    return Ok(None);
                }
                ServerEvent::DepartmentsUpdated(departments)
            }
            EVENT_VOTES_CLEARED => ServerEvent::VotesCleared,
            other => {
                warn!("ignoring unknown realtime event {}", other);
                return Ok(None);
            }
        };
        Ok(Some(event))
    }
}

/// Builds the WebSocket URL for a realtime server root such as
/// `https://host`. An empty root resolves against `origin`.
pub fn socket_endpoint(root: &str, origin: &str) -> Result<String, FrameError> {
    let root = if root.trim().is_empty() { origin } else { root.trim() };
    let root = root.trim_end_matches('/');

    let ws_root = if let Some(rest) = root.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = root.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else if root.starts_with("wss://") || root.starts_with("ws://") {
        root.to_string()
    } else {
        return Err(FrameError::Url(root.to_string()));
    };
    Ok(format!("{}{}", ws_root, SOCKET_PATH))
}

/// Fixed-delay reconnect budget. The counter resets on every successful
/// connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    pub delay_ms: u32,
    pub max_attempts: u32,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            delay_ms: 1_000,
            max_attempts: 5,
        }
    }
}

impl ReconnectPolicy {
    /// Delay before reconnect attempt `attempt` (1-based), or `None` once the
    /// budget is spent.
    pub fn delay_for(&self, attempt: u32) -> Option<u32> {
        (attempt >= 1 && attempt <= self.max_attempts).then_some(self.delay_ms)
    }
}
