//! Status Daemon - webhook server for the Meridian status skill.
//!
//! Receives voice-platform events over HTTP, guards them by application id,
//! fetches the status-page summary feed, and answers with spoken briefings.

pub mod config;
pub mod feed;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod server;
