//! Status-page component model.
//!
//! Mirrors the `components` array of the status page summary feed. Status
//! codes the feed may grow in the future are carried through verbatim via
//! [`ComponentStatus::Other`] rather than rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health state of a single status-page component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentStatus {
    Operational,
    DegradedPerformance,
    PartialOutage,
    MajorOutage,
    UnderMaintenance,
    /// Any code this build does not know. Kept verbatim so it can still be
    /// spoken and displayed.
    Other(String),
}

impl ComponentStatus {
    /// The wire code, exactly as the feed spells it.
    pub fn as_code(&self) -> &str {
        match self {
            ComponentStatus::Operational => "operational",
            ComponentStatus::DegradedPerformance => "degraded_performance",
            ComponentStatus::PartialOutage => "partial_outage",
            ComponentStatus::MajorOutage => "major_outage",
            ComponentStatus::UnderMaintenance => "under_maintenance",
            ComponentStatus::Other(code) => code,
        }
    }

    /// Speakable form of the code. Known codes get a spaced spelling; any
    /// other code is spoken exactly as the feed sent it.
    pub fn human_label(&self) -> String {
        match self {
            ComponentStatus::Operational => "operational".to_string(),
            ComponentStatus::DegradedPerformance => "degraded performance".to_string(),
            ComponentStatus::PartialOutage => "partial outage".to_string(),
            ComponentStatus::MajorOutage => "major outage".to_string(),
            ComponentStatus::UnderMaintenance => "under maintenance".to_string(),
            ComponentStatus::Other(code) => code.clone(),
        }
    }

    /// True only for the exact `operational` code.
    pub fn is_operational(&self) -> bool {
        matches!(self, ComponentStatus::Operational)
    }
}

impl From<String> for ComponentStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "operational" => ComponentStatus::Operational,
            "degraded_performance" => ComponentStatus::DegradedPerformance,
            "partial_outage" => ComponentStatus::PartialOutage,
            "major_outage" => ComponentStatus::MajorOutage,
            "under_maintenance" => ComponentStatus::UnderMaintenance,
            _ => ComponentStatus::Other(code),
        }
    }
}

impl From<ComponentStatus> for String {
    fn from(status: ComponentStatus) -> Self {
        status.as_code().to_string()
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// One entry of the feed's `components` array.
///
/// Group records describe a heading; leaf records describe an actual
/// service and may point at their group via `group_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub status: ComponentStatus,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub group: bool,
}
