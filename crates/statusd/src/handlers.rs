//! Skill handlers.
//!
//! Each handler produces a complete response envelope. Feed trouble is
//! absorbed here: whatever happens upstream, the caller gets something
//! speakable back.

use crate::feed::StatusFeedClient;
use chrono::Utc;
use status_common::ssml;
use status_common::summary::STATUS_SITE;
use status_common::{summarize, SkillError, SkillResponse, Speechlet, StatusSummary};
use tracing::warn;

const STATUS_CARD_TITLE: &str = "Meridian Platform Status";
const HELP_CARD_TITLE: &str = "Meridian Help";
const GOODBYE_CARD_TITLE: &str = "Session Ended";

/// Fetch the feed and speak the briefing. Feed errors become a spoken
/// apology, never an invocation failure.
pub async fn status_briefing(feed: &StatusFeedClient) -> SkillResponse {
    match feed.fetch().await {
        Ok(components) => briefing_response(&summarize(&components, Utc::now())),
        Err(e) => {
            warn!("Status feed unavailable, apologizing: {}", e);
            feed_trouble_response(&e)
        }
    }
}

fn briefing_response(summary: &StatusSummary) -> SkillResponse {
    Speechlet::new(
        STATUS_CARD_TITLE,
        summary.narrative.as_str(),
        summary.display.as_str(),
    )
    .end_session(true)
    .into_envelope()
}

/// Spoken fallback when the feed cannot be fetched or parsed.
fn feed_trouble_response(error: &SkillError) -> SkillResponse {
    let speech = format!(
        "Sorry, I could not reach the Meridian status page right now.{}Please try again in a moment, or visit {}",
        ssml::pause(),
        STATUS_SITE
    );
    let card = format!("Status feed error: {}\nPlease visit {}", error, STATUS_SITE);

    Speechlet::new(STATUS_CARD_TITLE, speech, card)
        .end_session(true)
        .into_envelope()
}

/// Static help text. Keeps the session open for a follow-up question.
pub fn help_response() -> SkillResponse {
    let speech = format!(
        "To request information about Meridian Platform Status, say status report{}What can I help you with?",
        ssml::pause()
    );
    let card = "To request information about Meridian Platform Status, say status report";

    Speechlet::new(HELP_CARD_TITLE, speech, card)
        .with_reprompt("What can I help you with?")
        .end_session(false)
        .into_envelope()
}

/// Closing response for cancel and stop.
pub fn goodbye_response() -> SkillResponse {
    Speechlet::new(GOODBYE_CARD_TITLE, "Thank you.", "Thank you.")
        .end_session(true)
        .into_envelope()
}
