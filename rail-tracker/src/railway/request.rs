//! Request descriptors for the railway API.

use std::fmt;
use std::time::Duration;

use serde_json::Value;

use super::error::RailwayError;

/// HTTP methods the railway API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Parse a method name, case-insensitively.
    ///
    /// The railway API only ever uses GET and POST. Anything else is a
    /// programming error on the caller's side and fails here, before a
    /// request descriptor can even be built.
    pub fn parse(s: &str) -> Result<Self, RailwayError> {
        if s.eq_ignore_ascii_case("GET") {
            Ok(Method::Get)
        } else if s.eq_ignore_ascii_case("POST") {
            Ok(Method::Post)
        } else {
            Err(RailwayError::UnsupportedMethod {
                method: s.to_string(),
            })
        }
    }

    /// Returns the canonical method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request to the railway API.
///
/// Descriptors are built fresh per call and carry everything
/// [`RailwayClient::call`](super::RailwayClient::call) needs: the endpoint
/// path, the method, and the parameters. Query parameters are applied to
/// GET requests and the JSON body to POST requests; the unused mode is
/// never sent.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) endpoint: String,
    pub(crate) method: Method,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<Value>,
    pub(crate) timeout: Option<Duration>,
}

impl ApiRequest {
    fn new(endpoint: impl Into<String>, method: Method) -> Self {
        ApiRequest {
            endpoint: endpoint.into(),
            method,
            query: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// A GET request for the given endpoint.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, Method::Get)
    }

    /// A POST request for the given endpoint.
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, Method::Post)
    }

    /// Add a query parameter (sent for GET requests only).
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the JSON body (sent for POST requests only).
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Override the client's default timeout for this request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the endpoint path, relative to the base URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_get_and_post() {
        assert_eq!(Method::parse("GET").unwrap(), Method::Get);
        assert_eq!(Method::parse("POST").unwrap(), Method::Post);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Method::parse("get").unwrap(), Method::Get);
        assert_eq!(Method::parse("Get").unwrap(), Method::Get);
        assert_eq!(Method::parse("post").unwrap(), Method::Post);
        assert_eq!(Method::parse("pOsT").unwrap(), Method::Post);
    }

    #[test]
    fn parse_rejects_other_methods() {
        for method in ["DELETE", "PUT", "PATCH", "HEAD", "OPTIONS", "", "GETT"] {
            match Method::parse(method) {
                Err(RailwayError::UnsupportedMethod { method: m }) => {
                    assert_eq!(m, method);
                }
                other => panic!("expected UnsupportedMethod for {method:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn get_request_builder() {
        let request = ApiRequest::get("trainInfo/")
            .query("trainNumber", "22177")
            .timeout(Duration::from_secs(5));

        assert_eq!(request.endpoint(), "trainInfo/");
        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.query, vec![("trainNumber".into(), "22177".into())]);
        assert_eq!(request.body, None);
        assert_eq!(request.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn post_request_builder() {
        let body = json!({"trainNumber": "22177", "date": "13-08-2025"});
        let request = ApiRequest::post("trackTrain").json(body.clone());

        assert_eq!(request.endpoint(), "trackTrain");
        assert_eq!(request.method(), Method::Post);
        assert!(request.query.is_empty());
        assert_eq!(request.body, Some(body));
        assert_eq!(request.timeout, None);
    }
}
