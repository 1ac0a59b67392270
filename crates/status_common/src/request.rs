//! Inbound voice-platform event model.
//!
//! The platform posts one JSON event per user interaction. Only the fields
//! the skill actually reads are modeled; everything else in the payload is
//! ignored on parse.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A complete inbound event: session context plus the typed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRequest {
    #[serde(default)]
    pub version: Option<String>,
    pub session: Session,
    pub request: RequestBody,
}

/// Session context carried on every event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// True on the first event of a session.
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    pub application: Application,
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
}

/// Identifies which skill the platform believes it is calling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// The typed request, discriminated by the wire `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RequestBody {
    #[serde(rename_all = "camelCase")]
    LaunchRequest { request_id: String },
    #[serde(rename_all = "camelCase")]
    IntentRequest { request_id: String, intent: Intent },
    #[serde(rename_all = "camelCase")]
    SessionEndedRequest {
        request_id: String,
        #[serde(default)]
        reason: Option<String>,
    },
}

impl RequestBody {
    /// The platform-assigned request id, for log correlation.
    pub fn request_id(&self) -> &str {
        match self {
            RequestBody::LaunchRequest { request_id }
            | RequestBody::IntentRequest { request_id, .. }
            | RequestBody::SessionEndedRequest { request_id, .. } => request_id,
        }
    }
}

/// A resolved intent with any slot values the platform filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}
