//! Status feed client.
//!
//! One GET against the status page summary endpoint per briefing. No
//! retries and no caching: a failure propagates immediately so the handler
//! can apologize inside the same webhook call.

use crate::config::{Config, FEED_TIMEOUT};
use anyhow::{Context, Result};
use serde::Deserialize;
use status_common::{Component, SkillError};
use tracing::debug;

/// Shape of the summary feed body. Only `components` is read; the feed
/// carries plenty more that the skill never looks at.
#[derive(Debug, Deserialize)]
struct SummaryFeed {
    components: Vec<Component>,
}

/// HTTP client for the status page summary feed.
pub struct StatusFeedClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl StatusFeedClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(FEED_TIMEOUT)
            .user_agent(format!(
                "meridian-status-skill/{}",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to build status feed HTTP client")?;

        Ok(Self {
            http,
            url: config.status_page_url.clone(),
            api_key: config.status_page_api_key.clone(),
        })
    }

    /// Fetch the current component list.
    pub async fn fetch(&self) -> Result<Vec<Component>, SkillError> {
        let mut request = self.http.get(&self.url);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("OAuth {}", key));
        }

        let response = request
            .send()
            .await
            .map_err(|e| SkillError::FeedUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SkillError::FeedMalformed(format!(
                "status feed returned HTTP {}",
                status
            )));
        }

        let feed: SummaryFeed = response
            .json()
            .await
            .map_err(|e| SkillError::FeedMalformed(e.to_string()))?;

        debug!("Status feed returned {} components", feed.components.len());
        Ok(feed.components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use status_common::ComponentStatus;

    #[test]
    fn test_parse_summary_feed() {
        let raw = r#"{
            "page": { "id": "abc", "name": "Meridian" },
            "components": [
                {
                    "id": "grp1",
                    "name": "Core",
                    "status": "operational",
                    "created_at": "2016-10-21T14:20:42.069Z",
                    "position": 1,
                    "group": true,
                    "group_id": null,
                    "showcase": false
                },
                {
                    "id": "c1",
                    "name": "API",
                    "status": "degraded_performance",
                    "group": false,
                    "group_id": "grp1",
                    "only_show_if_degraded": false
                }
            ],
            "incidents": []
        }"#;

        let feed: SummaryFeed = serde_json::from_str(raw).unwrap();
        assert_eq!(feed.components.len(), 2);
        assert!(feed.components[0].group);
        assert_eq!(
            feed.components[1].status,
            ComponentStatus::DegradedPerformance
        );
        assert_eq!(feed.components[1].group_id.as_deref(), Some("grp1"));
    }

    #[test]
    fn test_missing_components_key_is_an_error() {
        let raw = r#"{ "page": { "id": "abc" }, "incidents": [] }"#;
        assert!(serde_json::from_str::<SummaryFeed>(raw).is_err());
    }

    #[test]
    fn test_empty_components_is_valid() {
        let feed: SummaryFeed = serde_json::from_str(r#"{ "components": [] }"#).unwrap();
        assert!(feed.components.is_empty());
    }
}
