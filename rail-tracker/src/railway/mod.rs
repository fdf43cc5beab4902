//! Railway information API client.
//!
//! This module provides an HTTP client for the local railway-information
//! service, which exposes train schedules, PNR status, live station
//! boards, train tracking and route search.
//!
//! Key characteristics of the API:
//! - All endpoints live under a single base path (`/api/train`)
//! - Lookups are GET requests with query parameters; tracking and route
//!   search are POST requests with JSON bodies
//! - Responses are JSON documents with no fixed schema, so they are
//!   returned to callers as raw `serde_json::Value`s
//! - Some endpoint paths carry a trailing slash and some do not; the
//!   backend router treats them as distinct

mod client;
mod error;
mod observer;
mod request;

pub use client::{RailwayClient, RailwayConfig};
pub use error::RailwayError;
pub use observer::{CallObserver, CallRecord, ConsoleObserver, pretty_json};
pub use request::{ApiRequest, Method};
