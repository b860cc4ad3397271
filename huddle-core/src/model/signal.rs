use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The message kinds the relay forwards.
///
/// Anything else on the wire is dropped without an error reply, so a
/// stale or misbehaving client cannot take the connection down.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum SignalKind {
    Offer,
    Answer,
    Candidate,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Offer => "offer",
            SignalKind::Answer => "answer",
            SignalKind::Candidate => "candidate",
        }
    }

    /// Classifies one inbound text frame.
    ///
    /// Only the top-level `"type"` field is inspected; the rest of the
    /// object is opaque payload that the caller forwards untouched.
    /// `{"type": "offer"}` with no sdp is still an offer here.
    pub fn classify(frame: &str) -> Result<SignalKind, SignalParseError> {
        let value: Value = serde_json::from_str(frame)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(SignalParseError::MissingKind)?;

        match kind {
            "offer" => Ok(SignalKind::Offer),
            "answer" => Ok(SignalKind::Answer),
            "candidate" => Ok(SignalKind::Candidate),
            other => Err(SignalParseError::UnknownKind(other.to_owned())),
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an inbound frame was not forwarded.
#[derive(Debug, Error)]
pub enum SignalParseError {
    #[error("frame is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("frame has no string \"type\" field")]
    MissingKind,
    #[error("unrecognized message type {0:?}")]
    UnknownKind(String),
}

/// A well-formed signaling message, for clients that build frames in Rust.
///
/// The relay itself never constructs these; it classifies with
/// [`SignalKind::classify`] and forwards the original bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SignalMessage {
    Offer { sdp: String },
    Answer { sdp: String },
    Candidate { candidate: Value },
}

impl SignalMessage {
    pub fn offer(sdp: impl Into<String>) -> Self {
        SignalMessage::Offer { sdp: sdp.into() }
    }

    pub fn answer(sdp: impl Into<String>) -> Self {
        SignalMessage::Answer { sdp: sdp.into() }
    }

    pub fn candidate(candidate: impl Into<Value>) -> Self {
        SignalMessage::Candidate {
            candidate: candidate.into(),
        }
    }

    pub fn kind(&self) -> SignalKind {
        match self {
            SignalMessage::Offer { .. } => SignalKind::Offer,
            SignalMessage::Answer { .. } => SignalKind::Answer,
            SignalMessage::Candidate { .. } => SignalKind::Candidate,
        }
    }
}
