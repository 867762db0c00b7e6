//! Single-shot JSON requests against the Hectane API.
//!
//! Every call issues exactly one HTTP request and settles once: a 2xx response
//! resolves with its parsed JSON body, anything else rejects with the raw
//! response text. There is no retry and, unless configured, no timeout.

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Shared HTTP handle. Cloning is cheap and clones share the cookie jar, so
/// the session cookie set by login is sent by every adapter.
#[derive(Debug, Clone)]
pub struct Ajax {
    http: reqwest::Client,
    base_url: Url,
}

/// A request that has been validated but not yet sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<String>,
}

impl Ajax {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Validate `url` and pick the method for `payload`. Does no I/O, so a bad
    /// url fails here before anything reaches the network.
    ///
    /// A JSON object payload produces a POST carrying it as the body; any other
    /// payload, or none, produces a body-less GET.
    pub fn prepare(&self, url: &str, payload: Option<Value>) -> Result<PreparedRequest> {
        let url = self.resolve(url)?;
        let method = method_for(payload.as_ref());
        let body = match payload {
            Some(object @ Value::Object(_)) => Some(object.to_string()),
            _ => None,
        };
        Ok(PreparedRequest { method, url, body })
    }

    /// GET when `payload` is absent, POST with a JSON body when it is an object.
    pub async fn request(&self, url: &str, payload: Option<Value>) -> Result<Value> {
        let prepared = self.prepare(url, payload)?;
        self.send(prepared).await
    }

    pub async fn get(&self, url: &str) -> Result<Value> {
        self.request(url, None).await
    }

    /// POST without a body, as used by logout and the delete endpoints.
    pub async fn post_empty(&self, url: &str) -> Result<Value> {
        let prepared = PreparedRequest {
            method: Method::POST,
            url: self.resolve(url)?,
            body: None,
        };
        self.send(prepared).await
    }

    pub async fn send(&self, request: PreparedRequest) -> Result<Value> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut builder = self
            .http
            .request(request.method.clone(), request.url.clone())
            .header(ACCEPT, "application/json");
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(%status, url = %request.url, "request rejected");
            return Err(Error::Rejected { status, body: text });
        }
        parse_body(text)
    }

    fn resolve(&self, url: &str) -> Result<Url> {
        let invalid = |reason: &str| Error::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };

        if url.trim().is_empty() {
            return Err(invalid("url is empty"));
        }
        if url.starts_with('/') {
            if url.starts_with("//") {
                return Err(invalid("scheme-relative urls are not allowed"));
            }
            return self
                .base_url
                .join(url)
                .map_err(|e| invalid(&e.to_string()));
        }
        match Url::parse(url) {
            Ok(absolute) if matches!(absolute.scheme(), "http" | "https") => Ok(absolute),
            Ok(_) => Err(invalid("only http and https urls are supported")),
            Err(_) => Err(invalid("expected an absolute path or an http(s) url")),
        }
    }
}

pub fn method_for(payload: Option<&Value>) -> Method {
    match payload {
        Some(Value::Object(_)) => Method::POST,
        _ => Method::GET,
    }
}

/// Serialize a record into the payload handed to [`Ajax::request`].
pub fn to_payload<T: Serialize + ?Sized>(record: &T) -> Result<Value> {
    serde_json::to_value(record).map_err(Error::Encode)
}

/// Decode a settled response body into a typed record.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    let body = value.to_string();
    serde_json::from_value(value).map_err(|source| Error::Decode { source, body })
}

fn parse_body(text: String) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(source) => Err(Error::Decode { source, body: text }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ajax() -> Ajax {
        let config = ClientConfig::new(Url::parse("http://mail.example.com:8000").unwrap());
        Ajax::new(&config).unwrap()
    }

    #[test]
    fn only_object_payloads_are_posted() {
        let cases = [
            (None, Method::GET),
            (Some(Value::Null), Method::GET),
            (Some(json!("name")), Method::GET),
            (Some(json!(42)), Method::GET),
            (Some(json!(["a", "b"])), Method::GET),
            (Some(json!({})), Method::POST),
            (Some(json!({"name": "Invoices"})), Method::POST),
        ];
        for (payload, expected) in cases {
            let prepared = ajax().prepare("/api/folders", payload.clone()).unwrap();
            assert_eq!(prepared.method, expected, "payload {payload:?}");
            assert_eq!(prepared.body.is_some(), expected == Method::POST);
        }
    }

    #[test]
    fn post_body_is_compact_json() {
        let prepared = ajax()
            .prepare("/api/folders/new", Some(json!({"name": "Invoices"})))
            .unwrap();
        assert_eq!(prepared.body.as_deref(), Some(r#"{"name":"Invoices"}"#));
        assert_eq!(
            prepared.url.as_str(),
            "http://mail.example.com:8000/api/folders/new"
        );
    }

    #[test]
    fn unusable_urls_fail_before_sending() {
        for url in ["", "   ", "api/folders", "//evil.example.com/x", "ftp://x/y"] {
            let err = ajax().prepare(url, None).unwrap_err();
            assert!(matches!(err, Error::InvalidUrl { .. }), "url {url:?}");
        }
    }

    #[test]
    fn absolute_http_urls_are_accepted() {
        let prepared = ajax()
            .prepare("https://other.example.com/api/folders", None)
            .unwrap();
        assert_eq!(prepared.url.host_str(), Some("other.example.com"));
    }

    #[test]
    fn empty_body_parses_as_null() {
        assert_eq!(parse_body(String::new()).unwrap(), Value::Null);
        assert_eq!(parse_body("null".into()).unwrap(), Value::Null);
    }

    #[test]
    fn non_json_success_body_is_a_decode_error() {
        match parse_body("<html>".into()) {
            Err(Error::Decode { body, .. }) => assert_eq!(body, "<html>"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
