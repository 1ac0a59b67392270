//! Status summarization.
//!
//! Turns a flat status-page component list into named services, partitions
//! them into healthy and unhealthy, and builds both the spoken narrative
//! and the card text. Pure: callers supply the clock.

use crate::component::{Component, ComponentStatus};
use crate::ssml;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Human-readable status page, spoken and printed as the pointer of last
/// resort.
pub const STATUS_SITE: &str = "status.meridian.com";

const REPORT_TITLE: &str = "Current Meridian Platform Status report";

/// One named service with its current status.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceStatus {
    pub name: String,
    pub status: ComponentStatus,
}

/// Everything a handler needs to speak and display platform health.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSummary {
    /// Number of services the feed reported. Group headings are not
    /// services and are not counted.
    pub service_count: usize,
    /// Services that are not operational, in feed order.
    pub problems: Vec<ServiceStatus>,
    /// Spoken narrative with pause markers, feed text already escaped,
    /// ready for the speak wrapper.
    pub narrative: String,
    /// Card text, one line per service.
    pub display: String,
}

impl StatusSummary {
    pub fn all_operational(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Summarize a status feed snapshot as of `now`.
///
/// An empty feed is not an error: it summarizes to zero services and an
/// all-normal narrative.
pub fn summarize(components: &[Component], now: DateTime<Utc>) -> StatusSummary {
    let services = name_services(components);
    let problems: Vec<ServiceStatus> = services
        .iter()
        .filter(|service| !service.status.is_operational())
        .cloned()
        .collect();

    let narrative = build_narrative(services.len(), &problems, now);
    let display = build_display(&services, now);

    StatusSummary {
        service_count: services.len(),
        problems,
        narrative,
        display,
    }
}

/// Resolve display names in feed order.
///
/// A leaf inside a group is shown as `<group name> <leaf name>`. Leaves
/// outside any group, including leaves whose `group_id` points at a record
/// the feed never sent, keep their bare name.
fn name_services(components: &[Component]) -> Vec<ServiceStatus> {
    let groups: HashMap<&str, &str> = components
        .iter()
        .filter(|component| component.group)
        .map(|component| (component.id.as_str(), component.name.as_str()))
        .collect();

    components
        .iter()
        .filter(|component| !component.group)
        .map(|leaf| {
            let name = match leaf
                .group_id
                .as_deref()
                .and_then(|id| groups.get(id).copied())
            {
                Some(group_name) => format!("{} {}", group_name, leaf.name),
                None => leaf.name.clone(),
            };
            ServiceStatus {
                name,
                status: leaf.status.clone(),
            }
        })
        .collect()
}

fn build_narrative(
    service_count: usize,
    problems: &[ServiceStatus],
    now: DateTime<Utc>,
) -> String {
    let mut narrative = format!(
        "{} for {}{}",
        REPORT_TITLE,
        now.format("%A %B %d %Y"),
        ssml::pause()
    );

    if problems.is_empty() {
        narrative.push_str("All services operating normally");
        return narrative;
    }

    for problem in problems {
        narrative.push_str(&format!(
            "{} has a status of {}{}",
            ssml::escape(&problem.name),
            ssml::escape(&problem.status.human_label()),
            ssml::pause()
        ));
    }
    if problems.len() < service_count {
        narrative.push_str(&format!(
            "All other services are operating normally{}",
            ssml::pause()
        ));
    }
    narrative.push_str(&format!(
        "For more information, please visit {}",
        STATUS_SITE
    ));

    narrative
}

fn build_display(services: &[ServiceStatus], now: DateTime<Utc>) -> String {
    let mut display = format!(
        "{} for {} at {} UTC\n",
        REPORT_TITLE,
        now.format("%A %B %d %Y"),
        now.format("%H:%M:%S")
    );
    for service in services {
        display.push_str(&format!(
            "{}: {}\n",
            service.name,
            service.status.as_code()
        ));
    }
    display.push_str(&format!(
        "For more information, please visit {}",
        STATUS_SITE
    ));
    display
}
