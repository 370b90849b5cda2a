//! Feedback Portal - Patient feedback about healthcare providers
//!
//! Members submit one rating per provider. Accepted submissions are stored
//! durably, then announced on an event channel on a best-effort basis.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
