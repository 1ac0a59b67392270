//! Status Common - shared types for the Meridian status skill.
//!
//! Envelope schemas for the voice platform, speech markup helpers, the
//! status-page component model, and the status summarizer. Everything in
//! this crate is pure: no I/O, no clocks of its own.

pub mod component;
pub mod error;
pub mod request;
pub mod response;
pub mod ssml;
pub mod summary;

pub use component::{Component, ComponentStatus};
pub use error::SkillError;
pub use request::{Application, Intent, RequestBody, Session, SkillRequest};
pub use response::{SkillResponse, Speechlet};
pub use summary::{summarize, ServiceStatus, StatusSummary};
