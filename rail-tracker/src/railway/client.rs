//! Railway information HTTP client.
//!
//! Provides async methods for the local railway-information API:
//! train info, PNR status, live station boards, train tracking and
//! route search between stations.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{Pnr, StationCode, TrainNumber, TravelDate};

use super::error::RailwayError;
use super::observer::{CallObserver, CallRecord, ConsoleObserver};
use super::request::{ApiRequest, Method};

/// Default base URL for the railway-information service.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3001/api/train";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Endpoint paths, relative to the base URL.
///
/// `trainInfo` and `checkPNRStatus` are routed with a trailing slash on
/// the backend; the other three are not. The strings must match exactly.
const TRAIN_INFO: &str = "trainInfo/";
const CHECK_PNR_STATUS: &str = "checkPNRStatus/";
const LIVE_AT_STATION: &str = "liveAtStation";
const TRACK_TRAIN: &str = "trackTrain";
const SEARCH_TRAIN_BETWEEN_STATIONS: &str = "searchTrainBetweenStations";

/// Configuration for the railway client.
#[derive(Debug, Clone)]
pub struct RailwayConfig {
    /// Base URL for the API (defaults to the local service)
    pub base_url: String,
    /// Default request timeout in seconds
    pub timeout_secs: u64,
}

impl RailwayConfig {
    /// Create a config pointing at the local railway service.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the default request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RailwayConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Railway information API client.
///
/// One `reqwest::Client` is built at construction and reused across calls
/// for connection pooling; no behavioral contract is attached to the
/// reuse. Every call is a single attempt with no retries, and every
/// completed call is reported to the configured [`CallObserver`].
#[derive(Clone)]
pub struct RailwayClient {
    http: reqwest::Client,
    base_url: String,
    observer: Arc<dyn CallObserver>,
}

impl RailwayClient {
    /// Create a new client that logs calls to the console.
    pub fn new(config: RailwayConfig) -> Result<Self, RailwayError> {
        Self::with_observer(config, Arc::new(ConsoleObserver))
    }

    /// Create a new client with a custom call observer.
    pub fn with_observer(
        config: RailwayConfig,
        observer: Arc<dyn CallObserver>,
    ) -> Result<Self, RailwayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            observer,
        })
    }

    /// Issue the single request described by `request`.
    ///
    /// The outcome, success or failure, is reported to the call observer
    /// before being returned. Each call is one attempt; callers wanting
    /// retries must loop themselves.
    pub async fn call(&self, request: &ApiRequest) -> Result<Value, RailwayError> {
        let record = CallRecord::new(request, Local::now());
        let result = self.dispatch(request).await;

        match &result {
            Ok(value) => {
                debug!(
                    endpoint = %request.endpoint(),
                    method = %request.method(),
                    "API call succeeded"
                );
                self.observer.on_success(&record, value);
            }
            Err(err) => {
                warn!(
                    endpoint = %request.endpoint(),
                    method = %request.method(),
                    error = %err,
                    "API call failed"
                );
                self.observer.on_failure(&record, err);
            }
        }

        result
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<Value, RailwayError> {
        let url = format!("{}/{}", self.base_url, request.endpoint());

        let mut builder = match request.method() {
            Method::Get => self.http.get(&url).query(&request.query),
            Method::Post => match &request.body {
                Some(body) => self.http.post(&url).json(body),
                None => self.http.post(&url),
            },
        };

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RailwayError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| RailwayError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// Get schedule and composition information for a train.
    pub async fn train_info(&self, train: &TrainNumber) -> Result<Value, RailwayError> {
        let request = ApiRequest::get(TRAIN_INFO).query("trainNumber", train.as_str());
        self.call(&request).await
    }

    /// Check the booking status for a PNR.
    pub async fn pnr_status(&self, pnr: &Pnr) -> Result<Value, RailwayError> {
        let request = ApiRequest::get(CHECK_PNR_STATUS).query("pnr", pnr.as_str());
        self.call(&request).await
    }

    /// Get the live arrivals/departures board for a station.
    pub async fn live_at_station(&self, station: &StationCode) -> Result<Value, RailwayError> {
        let request = ApiRequest::get(LIVE_AT_STATION).query("stnCode", station.as_str());
        self.call(&request).await
    }

    /// Track a train's position on a given running date.
    pub async fn track_train(
        &self,
        train: &TrainNumber,
        date: TravelDate,
    ) -> Result<Value, RailwayError> {
        let body = encode_body(&TrackTrainBody {
            train_number: train.as_str(),
            date: date.to_string(),
        })?;
        let request = ApiRequest::post(TRACK_TRAIN).json(body);
        self.call(&request).await
    }

    /// Search trains running between two stations.
    pub async fn search_trains_between(
        &self,
        from: &StationCode,
        to: &StationCode,
    ) -> Result<Value, RailwayError> {
        let body = encode_body(&SearchTrainsBody {
            from_stn_code: from.as_str(),
            to_stn_code: to.as_str(),
        })?;
        let request = ApiRequest::post(SEARCH_TRAIN_BETWEEN_STATIONS).json(body);
        self.call(&request).await
    }
}

impl fmt::Debug for RailwayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RailwayClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Body for the `trackTrain` endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TrackTrainBody<'a> {
    train_number: &'a str,
    date: String,
}

/// Body for the `searchTrainBetweenStations` endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchTrainsBody<'a> {
    from_stn_code: &'a str,
    to_stn_code: &'a str,
}

fn encode_body<T: Serialize>(body: &T) -> Result<Value, RailwayError> {
    serde_json::to_value(body).map_err(|e| RailwayError::Json {
        message: e.to_string(),
        body: None,
    })
}
