//! Indian railway information client.
//!
//! A thin async client for a local railway-information service,
//! answering questions like "where is this train right now?" and
//! "which trains run between these two stations?"

pub mod domain;
pub mod railway;
