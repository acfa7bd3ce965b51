//! Shared data model for the learning-analytics service.
//!
//! `model` holds the decoded CSV tables and the summary shapes the backend serializes
//! for dashboards; `requests` holds the query payloads the backend accepts.

pub mod model;
pub mod requests;
