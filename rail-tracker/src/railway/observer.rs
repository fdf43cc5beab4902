//! Call observation and console logging.
//!
//! The client reports every completed call, success or failure, to a
//! [`CallObserver`]. The default [`ConsoleObserver`] prints the service's
//! traditional console block; tests substitute a recording observer and
//! assert on the structured records instead of captured stdout.

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::error::RailwayError;
use super::request::{ApiRequest, Method};

/// Timestamp format used in console output.
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// A structured record of one API call.
#[derive(Debug, Clone)]
pub struct CallRecord {
    /// Endpoint path, relative to the base URL
    pub endpoint: String,
    /// HTTP method used
    pub method: Method,
    /// Query parameters sent (GET requests)
    pub query: Vec<(String, String)>,
    /// JSON body sent (POST requests)
    pub body: Option<Value>,
    /// Local time at which the call was started
    pub started_at: DateTime<Local>,
}

impl CallRecord {
    /// Snapshot a request descriptor at call time.
    pub(crate) fn new(request: &ApiRequest, started_at: DateTime<Local>) -> Self {
        CallRecord {
            endpoint: request.endpoint.clone(),
            method: request.method,
            query: request.query.clone(),
            body: request.body.clone(),
            started_at,
        }
    }
}

/// Observer notified of every completed API call.
pub trait CallObserver: Send + Sync {
    /// Called after a successful request with the decoded response.
    fn on_success(&self, record: &CallRecord, response: &Value);

    /// Called after a failed request with the error about to be returned.
    fn on_failure(&self, record: &CallRecord, error: &RailwayError);
}

/// Default observer: prints each call as a labeled console block.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl CallObserver for ConsoleObserver {
    fn on_success(&self, record: &CallRecord, response: &Value) {
        println!("\n===== API CALL =====");
        println!("Endpoint     : {}", record.endpoint);
        println!("Method       : {}", record.method);
        println!("Params       : {}", format_query(&record.query));
        println!("Payload      : {}", format_body(record.body.as_ref()));
        println!(
            "Timestamp    : {}",
            record.started_at.format(TIMESTAMP_FORMAT)
        );
        println!("\n--- RAW RESPONSE ---");
        println!("{}", pretty_json(response));
    }

    fn on_failure(&self, record: &CallRecord, error: &RailwayError) {
        println!("Error calling API {}: {}", record.endpoint, error);
    }
}

fn format_query(query: &[(String, String)]) -> String {
    if query.is_empty() {
        return "-".to_string();
    }
    let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
    pairs.join("&")
}

fn format_body(body: Option<&Value>) -> String {
    match body {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

/// Pretty-print a JSON value with 4-space indentation.
///
/// `serde_json`'s default pretty printer indents by 2; the console block
/// has always used 4.
pub fn pretty_json(value: &Value) -> String {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    if value.serialize(&mut ser).is_err() {
        return value.to_string();
    }
    String::from_utf8(out).unwrap_or_else(|_| value.to_string())
}
