use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use uitdb_core::error::SearchError;
use uitdb_core::normalize::Envelope;
use uitdb_core::query::Resource;

/// Every Search API call is aborted after this long
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Thin HTTP client for the Search API
///
/// Performs exactly one GET per call and never retries. Cloning is cheap and
/// the underlying connection pool is safe to share between concurrent calls.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Fetch `{base}/{resource}` and return the decoded JSON object
    pub async fn fetch(
        &self,
        resource: Resource,
        params: &BTreeMap<String, String>,
        headers: &BTreeMap<String, String>,
    ) -> Result<Envelope, SearchError> {
        let url = format!("{}/{}", self.base_url, resource);
        let header_map = to_header_map(headers)?;

        log::debug!("GET {url} params={:?}", redacted(params));

        let response = self
            .http
            .get(&url)
            .query(params)
            .headers(header_map)
            .send()
            .await
            .map_err(|e| transport_error(&url, self.timeout, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&url, self.timeout, e))?;

        log::debug!("GET {url} -> {status} ({} bytes)", body.len());

        if !status.is_success() {
            return Err(SearchError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        parse_envelope(&body)
    }
}

fn transport_error(url: &str, timeout: Duration, err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        SearchError::Transport(format!("Request to {url} timed out after {timeout:?}"))
    } else {
        SearchError::Transport(format!("Failed to send request to {url}: {err}"))
    }
}

fn to_header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, SearchError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| SearchError::Transport(format!("Invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            SearchError::Transport(format!("Invalid header value for {}: {e}", name.as_str()))
        })?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Credentials are masked in debug logs
fn redacted(params: &BTreeMap<String, String>) -> BTreeMap<&str, &str> {
    params
        .iter()
        .map(|(k, v)| match k.as_str() {
            "apiKey" | "clientId" => (k.as_str(), "***"),
            _ => (k.as_str(), v.as_str()),
        })
        .collect()
}

/// A 2xx body must be a JSON object
pub fn parse_envelope(body: &str) -> Result<Envelope, SearchError> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(other) => Err(SearchError::Decode(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(SearchError::Decode(e.to_string())),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_envelope_object() {
        let envelope = parse_envelope(r#"{"member": [], "totalItems": 0}"#).unwrap();
        assert_eq!(envelope.len(), 2);
    }

    #[test]
    fn test_parse_envelope_rejects_non_object() {
        assert_eq!(
            parse_envelope("[1, 2]"),
            Err(SearchError::Decode(
                "expected a JSON object, got an array".to_string()
            ))
        );
        assert!(matches!(
            parse_envelope("<html>oops</html>"),
            Err(SearchError::Decode(_))
        ));
    }

    #[test]
    fn test_redacted_masks_credentials() {
        let params = map(&[("clientId", "secret"), ("q", "jazz")]);
        let masked = redacted(&params);
        assert_eq!(masked["clientId"], "***");
        assert_eq!(masked["q"], "jazz");
    }

    #[tokio::test]
    async fn test_fetch_sends_params_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/events"))
            .and(query_param("clientId", "client-1"))
            .and(query_param("embed", "true"))
            .and(header("x-client-id", "client-1"))
            .and(header("accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"member": [], "totalItems": 0})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = UpstreamClient::new(&format!("{}/", server.uri())).unwrap();
        let envelope = client
            .fetch(
                Resource::Events,
                &map(&[("clientId", "client-1"), ("embed", "true")]),
                &map(&[("Accept", "application/json"), ("x-client-id", "client-1")]),
            )
            .await
            .unwrap();

        assert_eq!(envelope["totalItems"], json!(0));
    }

    #[tokio::test]
    async fn test_fetch_status_error_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/places"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized client"))
            .mount(&server)
            .await;

        let client = UpstreamClient::new(&server.uri()).unwrap();
        let err = client
            .fetch(Resource::Places, &BTreeMap::new(), &BTreeMap::new())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SearchError::UpstreamStatus {
                status: 401,
                body: "Unauthorized client".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/organizers"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = UpstreamClient::new(&server.uri()).unwrap();
        let err = client
            .fetch(Resource::Organizers, &BTreeMap::new(), &BTreeMap::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "decode");
    }

    #[tokio::test]
    async fn test_fetch_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/events"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"member": []}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client =
            UpstreamClient::with_timeout(&server.uri(), Duration::from_millis(50)).unwrap();
        let err = client
            .fetch(Resource::Events, &BTreeMap::new(), &BTreeMap::new())
            .await
            .unwrap_err();

        match err {
            SearchError::Transport(message) => {
                assert!(message.contains("timed out after 50ms"), "{message}");
            }
            other => panic!("expected a transport error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_header_value_is_transport_error() {
        let headers = map(&[("x-client-id", "bad\nvalue")]);

        let err = to_header_map(&headers).unwrap_err();

        assert_eq!(err.kind(), "transport");
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_transport_error() {
        let client = UpstreamClient::new("http://127.0.0.1:1").unwrap();
        let err = client
            .fetch(Resource::Events, &BTreeMap::new(), &BTreeMap::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "transport");
    }
}
