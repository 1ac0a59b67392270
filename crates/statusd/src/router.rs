//! Request dispatch.
//!
//! The application id guard runs before any handler. Handlers either
//! produce an envelope or, for session-ended notifications, nothing at
//! all.

use crate::handlers;
use crate::server::AppState;
use status_common::{RequestBody, SkillError, SkillRequest, SkillResponse};
use tracing::{info, warn};

/// Intent names that trigger the status briefing.
pub const STATUS_INTENTS: [&str; 2] = ["GetStatus", "GetBriefing"];

pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

/// What dispatch produced for one inbound event.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// An envelope to return to the platform.
    Respond(SkillResponse),
    /// Nothing to say. Session-ended notifications get an empty reply.
    NoResponse,
}

/// Guard and dispatch one inbound event.
pub async fn dispatch(
    event: &SkillRequest,
    state: &AppState,
) -> Result<RouteOutcome, SkillError> {
    if event.session.application.application_id != state.config.application_id {
        warn!(
            "Rejecting event from unknown application id {}",
            event.session.application.application_id
        );
        return Err(SkillError::UnauthorizedCaller);
    }

    if event.session.new {
        info!(
            "Session started: sessionId={} requestId={}",
            event.session.session_id,
            event.request.request_id()
        );
    }

    match &event.request {
        RequestBody::LaunchRequest { .. } => Ok(RouteOutcome::Respond(
            handlers::status_briefing(&state.feed).await,
        )),
        RequestBody::IntentRequest { intent, .. } => route_intent(&intent.name, state).await,
        RequestBody::SessionEndedRequest { request_id, reason } => {
            info!(
                "Session ended: requestId={} reason={}",
                request_id,
                reason.as_deref().unwrap_or("unspecified")
            );
            Ok(RouteOutcome::NoResponse)
        }
    }
}

async fn route_intent(name: &str, state: &AppState) -> Result<RouteOutcome, SkillError> {
    if STATUS_INTENTS.contains(&name) {
        return Ok(RouteOutcome::Respond(
            handlers::status_briefing(&state.feed).await,
        ));
    }

    match name {
        HELP_INTENT => Ok(RouteOutcome::Respond(handlers::help_response())),
        CANCEL_INTENT | STOP_INTENT => Ok(RouteOutcome::Respond(handlers::goodbye_response())),
        other => Err(SkillError::UnrecognizedIntent(other.to_string())),
    }
}
