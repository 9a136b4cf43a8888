//! Service configuration.
//!
//! Every Watson service is addressed by a base URL and a `version` date that
//! pins the API behaviour. Both can come from a builder or from the
//! environment, using the service name as a variable prefix.

use chrono::NaiveDate;
use url::Url;

use crate::errors::{WatsonError, WatsonResult};

/// Default base URL for Watson Assistant.
pub const ASSISTANT_DEFAULT_URL: &str = "https://gateway.watsonplatform.net/assistant/api";

/// Default base URL for Visual Recognition.
pub const VISUAL_RECOGNITION_DEFAULT_URL: &str =
    "https://gateway.watsonplatform.net/visual-recognition/api";

/// Configuration for one Watson service.
#[derive(Clone)]
pub struct ServiceConfig {
    /// Service name, used as the environment prefix and in SDK headers.
    pub service_name: String,
    /// Base URL, without a trailing slash.
    pub service_url: String,
    /// API version date, `YYYY-MM-DD`.
    pub version: String,
    /// Skip TLS certificate verification. For self-signed test deployments only.
    pub disable_ssl_verification: bool,
    /// Custom headers to include in requests.
    pub custom_headers: Vec<(String, String)>,
}

impl ServiceConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// With `NAME` being `service_name` upper-cased and `-` replaced by `_`:
    ///
    /// - `{NAME}_VERSION` (required): API version date
    /// - `{NAME}_URL` (optional): Custom service URL
    /// - `{NAME}_DISABLE_SSL` (optional): `true` to skip TLS verification
    pub fn from_env(service_name: &str) -> WatsonResult<Self> {
        Self::from_lookup(service_name, |name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        service_name: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> WatsonResult<Self> {
        let prefix = env_prefix(service_name);
        let version_var = format!("{prefix}_VERSION");
        let version = lookup(&version_var).ok_or_else(|| {
            WatsonError::configuration(format!("{version_var} environment variable not set"))
        })?;

        let mut builder = ServiceConfigBuilder::new()
            .service_name(service_name)
            .version(version);

        if let Some(url) = lookup(&format!("{prefix}_URL")) {
            builder = builder.service_url(url);
        }

        if let Some(disable) = lookup(&format!("{prefix}_DISABLE_SSL")) {
            builder = builder.disable_ssl_verification(disable.eq_ignore_ascii_case("true"));
        }

        builder.build()
    }

    /// Returns the full URL for an already-encoded path.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.service_url, path.trim_start_matches('/'))
    }
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<&str> = self
            .custom_headers
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();

        f.debug_struct("ServiceConfig")
            .field("service_name", &self.service_name)
            .field("service_url", &self.service_url)
            .field("version", &self.version)
            .field("disable_ssl_verification", &self.disable_ssl_verification)
            .field("custom_headers", &headers)
            .finish()
    }
}

/// Environment variable prefix for a service name.
pub(crate) fn env_prefix(service_name: &str) -> String {
    service_name.to_ascii_uppercase().replace('-', "_")
}

fn default_url(service_name: &str) -> Option<&'static str> {
    match service_name {
        "assistant" | "conversation" => Some(ASSISTANT_DEFAULT_URL),
        "visual_recognition" | "visual-recognition" => Some(VISUAL_RECOGNITION_DEFAULT_URL),
        _ => None,
    }
}

/// Builder for `ServiceConfig`.
#[derive(Debug, Default)]
pub struct ServiceConfigBuilder {
    service_name: Option<String>,
    service_url: Option<String>,
    version: Option<String>,
    disable_ssl_verification: bool,
    custom_headers: Vec<(String, String)>,
}

impl ServiceConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service name.
    pub fn service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    /// Sets the service URL.
    pub fn service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = Some(service_url.into());
        self
    }

    /// Sets the API version date.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Skips TLS certificate verification.
    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    /// Adds a custom header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> WatsonResult<ServiceConfig> {
        let service_name = self
            .service_name
            .ok_or_else(|| WatsonError::configuration("Service name is required"))?;

        if service_name.is_empty() {
            return Err(WatsonError::configuration("Service name cannot be empty"));
        }

        let version = self
            .version
            .ok_or_else(|| WatsonError::configuration("Version date is required"))?;

        NaiveDate::parse_from_str(&version, "%Y-%m-%d").map_err(|_| {
            WatsonError::configuration(format!(
                "Version must be a date in YYYY-MM-DD format, got '{version}'"
            ))
        })?;

        let service_url = self
            .service_url
            .or_else(|| default_url(&service_name).map(str::to_string))
            .ok_or_else(|| {
                WatsonError::configuration(format!("No service URL configured for {service_name}"))
            })?
            .trim_end_matches('/')
            .to_string();

        Url::parse(&service_url)?;

        if self.disable_ssl_verification {
            tracing::warn!(
                service = %service_name,
                "TLS certificate verification is disabled"
            );
        }

        Ok(ServiceConfig {
            service_name,
            service_url,
            version,
            disable_ssl_verification: self.disable_ssl_verification,
            custom_headers: self.custom_headers,
        })
    }
}
