//! Request preparation and response decoding.
//!
//! [`RequestBuilder`] turns a service call into a [`PreparedRequest`]: the
//! fully resolved URL with the `version` query parameter, SDK and
//! authentication headers, and a compact JSON body built from models. Sending
//! it is left to whatever HTTP client the application uses; the raw reply
//! comes back as a [`DetailedResponse`] whose [`result`](DetailedResponse::result)
//! decodes the body into a model.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Display;
use url::Url;

use crate::auth::Authenticator;
use crate::codec;
use crate::config::ServiceConfig;
use crate::errors::{WatsonError, WatsonResult};
use crate::model::{JsonMap, Model};
use crate::observability::redact;

/// `User-Agent` value sent with every request.
pub const USER_AGENT: &str = concat!("watson-apis-rust-sdk-", env!("CARGO_PKG_VERSION"));

/// Header carrying the SDK analytics tuple.
pub const ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request.
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// DELETE request.
    Delete,
}

impl HttpMethod {
    /// Returns the method name.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for one service request.
#[derive(Debug)]
#[must_use]
pub struct RequestBuilder<'a> {
    config: &'a ServiceConfig,
    method: HttpMethod,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl<'a> RequestBuilder<'a> {
    /// Starts a request to the path formed by `segments` below the service URL.
    ///
    /// Each segment is percent-encoded on its own, so identifiers containing
    /// `/` or spaces stay a single path segment.
    pub fn new<S: AsRef<str>>(config: &'a ServiceConfig, method: HttpMethod, segments: &[S]) -> Self {
        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), USER_AGENT.to_string());

        Self {
            config,
            method,
            segments: segments.iter().map(|s| s.as_ref().to_string()).collect(),
            query: Vec::new(),
            headers,
            body: None,
        }
    }

    /// Tags the request with the analytics header for an operation.
    pub fn operation(self, service_version: &str, operation_id: &str) -> Self {
        let value = format!(
            "service_name={};service_version={};operation_id={}",
            self.config.service_name, service_version, operation_id
        );
        self.header(ANALYTICS_HEADER, value)
    }

    /// Sets a header, replacing any header of the same name in any case.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }

    /// Asks for a JSON response.
    pub fn accept_json(self) -> Self {
        self.header("Accept", mime::APPLICATION_JSON.as_ref())
    }

    /// Adds a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Adds a query parameter when it is set.
    pub fn optional_query<T: Display>(self, key: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Sends a model as the JSON body.
    pub fn json_body<M: Model>(self, model: &M) -> WatsonResult<Self> {
        self.json_field_body(model.to_dict())
    }

    /// Sends a JSON object assembled from several fields as the body.
    ///
    /// Build `body` with a [`DictWriter`](crate::model::DictWriter) so absent
    /// models are left out.
    pub fn json_field_body(mut self, body: JsonMap) -> WatsonResult<Self> {
        self.body = Some(serde_json::to_vec(&body)?);
        Ok(self.header("Content-Type", mime::APPLICATION_JSON.as_ref()))
    }

    /// Resolves the URL and applies custom and authentication headers.
    pub fn build(self, authenticator: &dyn Authenticator) -> WatsonResult<PreparedRequest> {
        let mut url = Url::parse(&self.config.service_url)?;
        url.path_segments_mut()
            .map_err(|()| {
                WatsonError::configuration(format!(
                    "Service URL cannot be a base: {}",
                    self.config.service_url
                ))
            })?
            .pop_if_empty()
            .extend(&self.segments);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("version", &self.config.version);
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }

        let mut headers = self.headers;
        for (name, value) in &self.config.custom_headers {
            set_header(&mut headers, name.clone(), value.clone());
        }

        let mut auth_headers = HashMap::new();
        authenticator.authenticate(&mut auth_headers);
        for (name, value) in auth_headers {
            set_header(&mut headers, name, value);
        }

        let request = PreparedRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
            disable_ssl_verification: self.config.disable_ssl_verification,
        };

        tracing::trace!(
            method = %request.method,
            url = %request.url,
            auth_type = authenticator.auth_type(),
            "Prepared service request"
        );

        Ok(request)
    }
}

/// A request ready to hand to an HTTP client.
#[derive(Clone)]
pub struct PreparedRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Full URL, including the query string.
    pub url: Url,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: Option<Vec<u8>>,
    /// Whether the client should skip TLS certificate verification.
    pub disable_ssl_verification: bool,
}

impl PreparedRequest {
    /// Returns a header value, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Parses the body as JSON.
    pub fn json(&self) -> WatsonResult<Option<Value>> {
        self.body
            .as_deref()
            .map(serde_json::from_slice)
            .transpose()
            .map_err(WatsonError::from)
    }
}

impl std::fmt::Debug for PreparedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut headers: Vec<(&str, String)> = self
            .headers
            .iter()
            .map(|(name, value)| (name.as_str(), redact(value)))
            .collect();
        headers.sort();

        f.debug_struct("PreparedRequest")
            .field("method", &self.method)
            .field("url", &redact(self.url.as_str()))
            .field("headers", &headers)
            .field("body", &self.body.as_deref().map(String::from_utf8_lossy))
            .field("disable_ssl_verification", &self.disable_ssl_verification)
            .finish()
    }
}

fn set_header(headers: &mut HashMap<String, String>, name: String, value: String) {
    headers.retain(|key, _| !key.eq_ignore_ascii_case(&name));
    headers.insert(name, value);
}

fn find_header<'h>(headers: &'h HashMap<String, String>, name: &str) -> Option<&'h str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// A raw service response.
#[derive(Debug, Clone)]
pub struct DetailedResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl DetailedResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Returns true if the status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns a header value, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Decodes the body into a model.
    ///
    /// Non-2xx statuses become [`WatsonError::Api`]. A body the model cannot
    /// accept becomes [`WatsonError::ResponseShape`].
    pub fn result<M: Model>(&self) -> WatsonResult<M> {
        if !self.is_success() {
            return Err(self.api_error());
        }
        codec::from_slice(&self.body)
    }

    /// Builds the API error for a failed response.
    pub fn api_error(&self) -> WatsonError {
        let parsed: Option<JsonMap> = serde_json::from_slice(&self.body).ok();

        let message = parsed
            .as_ref()
            .and_then(|body| {
                ["error", "message", "errorMessage"]
                    .iter()
                    .find_map(|key| body.get(*key).and_then(Value::as_str))
            })
            .map(str::to_string)
            .or_else(|| {
                let text = String::from_utf8_lossy(&self.body).trim().to_string();
                (!text.is_empty() && parsed.is_none()).then_some(text)
            })
            .unwrap_or_else(|| "Unknown error".to_string());

        let code = parsed
            .as_ref()
            .and_then(|body| body.get("code"))
            .and_then(|code| match code {
                Value::String(code) => Some(code.clone()),
                Value::Number(code) => Some(code.to_string()),
                _ => None,
            });

        tracing::debug!(status = self.status, %message, "Service returned an error");

        WatsonError::Api {
            status: self.status,
            message,
            code,
        }
    }
}
