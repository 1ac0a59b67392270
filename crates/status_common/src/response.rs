//! Outbound voice-platform envelope.
//!
//! Shapes are dictated by the platform: camelCase field names, SSML output
//! speech, a card, a reprompt that is always present, and the
//! end-of-session flag. [`Speechlet`] is the builder handlers use so none
//! of them assemble envelopes by hand.

use crate::ssml;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Envelope schema version the platform expects.
pub const ENVELOPE_VERSION: &str = "1.0";

/// Top-level response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub version: String,
    /// Always empty: the skill keeps no multi-turn state.
    pub session_attributes: HashMap<String, serde_json::Value>,
    pub response: ResponseBody,
}

impl SkillResponse {
    pub fn new(response: ResponseBody) -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            session_attributes: HashMap::new(),
            response,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    pub card: Card,
    pub reprompt: Reprompt,
    pub should_end_session: bool,
}

/// SSML speech block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub ssml: String,
}

impl OutputSpeech {
    /// Wrap narrative text in the speak root. The text may already contain
    /// pause and say-as markers.
    pub fn ssml(text: &str) -> Self {
        Self {
            kind: "SSML".to_string(),
            ssml: ssml::speak(text),
        }
    }
}

/// Reprompt spoken when the user stays silent. The platform requires the
/// object even when the text is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Companion-app card. Simple carries plain text; Standard adds an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple {
        title: String,
        content: String,
    },
    Standard {
        title: String,
        text: String,
        image: CardImage,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_image_url: Option<String>,
}

/// Builder for one spoken response.
///
/// Defaults: no reprompt text, no card image, session stays open. The card
/// switches from Simple to Standard as soon as any image URL is set.
#[derive(Debug, Clone)]
pub struct Speechlet {
    title: String,
    speech: String,
    card_text: String,
    reprompt: String,
    small_image_url: Option<String>,
    large_image_url: Option<String>,
    end_session: bool,
}

impl Speechlet {
    pub fn new(
        title: impl Into<String>,
        speech: impl Into<String>,
        card_text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            speech: speech.into(),
            card_text: card_text.into(),
            reprompt: String::new(),
            small_image_url: None,
            large_image_url: None,
            end_session: false,
        }
    }

    pub fn with_reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt = text.into();
        self
    }

    pub fn with_card_images(
        mut self,
        small_image_url: Option<String>,
        large_image_url: Option<String>,
    ) -> Self {
        self.small_image_url = small_image_url;
        self.large_image_url = large_image_url;
        self
    }

    pub fn end_session(mut self, end: bool) -> Self {
        self.end_session = end;
        self
    }

    pub fn into_body(self) -> ResponseBody {
        let card = if self.small_image_url.is_some() || self.large_image_url.is_some() {
            Card::Standard {
                title: self.title,
                text: self.card_text,
                image: CardImage {
                    small_image_url: self.small_image_url,
                    large_image_url: self.large_image_url,
                },
            }
        } else {
            Card::Simple {
                title: self.title,
                content: self.card_text,
            }
        };

        ResponseBody {
            output_speech: OutputSpeech::ssml(&self.speech),
            card,
            reprompt: Reprompt {
                output_speech: OutputSpeech::ssml(&self.reprompt),
            },
            should_end_session: self.end_session,
        }
    }

    pub fn into_envelope(self) -> SkillResponse {
        SkillResponse::new(self.into_body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_wire_shape() {
        let envelope = Speechlet::new("Title", "hello", "hello card")
            .end_session(true)
            .into_envelope();

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["version"], "1.0");
        assert_eq!(value["sessionAttributes"], serde_json::json!({}));
        assert_eq!(value["response"]["outputSpeech"]["type"], "SSML");
        assert_eq!(
            value["response"]["outputSpeech"]["ssml"],
            "<speak>hello</speak>"
        );
        assert_eq!(value["response"]["shouldEndSession"], true);
    }

    #[test]
    fn test_simple_card_by_default() {
        let body = Speechlet::new("Title", "speech", "card body").into_body();

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["card"]["type"], "Simple");
        assert_eq!(value["card"]["title"], "Title");
        assert_eq!(value["card"]["content"], "card body");
        assert!(value["card"].get("text").is_none());
    }

    #[test]
    fn test_standard_card_when_image_present() {
        let body = Speechlet::new("Title", "speech", "card body")
            .with_card_images(Some("https://cdn.meridian.com/small.png".to_string()), None)
            .into_body();

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["card"]["type"], "Standard");
        assert_eq!(value["card"]["text"], "card body");
        assert_eq!(
            value["card"]["image"]["smallImageUrl"],
            "https://cdn.meridian.com/small.png"
        );
        assert!(value["card"]["image"].get("largeImageUrl").is_none());
    }

    #[test]
    fn test_reprompt_always_present() {
        let body = Speechlet::new("Title", "speech", "card").into_body();

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["reprompt"]["outputSpeech"]["ssml"], "<speak></speak>");

        let with_text = Speechlet::new("Title", "speech", "card")
            .with_reprompt("Still there?")
            .into_body();
        let value = serde_json::to_value(&with_text).unwrap();
        assert_eq!(
            value["reprompt"]["outputSpeech"]["ssml"],
            "<speak>Still there?</speak>"
        );
    }

    #[test]
    fn test_session_stays_open_by_default() {
        let body = Speechlet::new("Title", "speech", "card").into_body();
        assert!(!body.should_end_session);
    }
}
