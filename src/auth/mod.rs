//! Authentication for Watson services.
//!
//! Authenticators add an `Authorization` header to outgoing requests.
//! Credentials are held in [`secrecy`] wrappers and never printed.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

use crate::config::env_prefix;
use crate::errors::{WatsonError, WatsonResult};

/// Auth type name for [`BasicAuthenticator`].
pub const AUTH_TYPE_BASIC: &str = "basic";
/// Auth type name for [`BearerTokenAuthenticator`].
pub const AUTH_TYPE_BEARER_TOKEN: &str = "bearerToken";
/// Auth type name for [`NoAuthAuthenticator`].
pub const AUTH_TYPE_NO_AUTH: &str = "noAuth";

/// Authentication provider trait.
///
/// Implementations of this trait provide authentication credentials
/// for service requests.
pub trait Authenticator: Send + Sync + std::fmt::Debug {
    /// Apply authentication to request headers.
    fn authenticate(&self, headers: &mut HashMap<String, String>);

    /// Get the authentication type name.
    fn auth_type(&self) -> &'static str;

    /// Validate the credentials.
    fn validate(&self) -> WatsonResult<()>;
}

/// Credentials copied from the service dashboard sometimes keep their
/// surrounding braces or quotes.
fn has_bad_first_or_last_char(value: &str) -> bool {
    value.starts_with(['{', '"']) || value.ends_with(['}', '"'])
}

/// Returns a hint of a secret for debugging (last 4 characters).
fn secret_hint(secret: &SecretString) -> String {
    let secret = secret.expose_secret();
    match secret.char_indices().rev().nth(3) {
        Some((start, _)) if start > 0 => format!("...{}", &secret[start..]),
        _ => "****".to_string(),
    }
}

/// HTTP basic authentication with a username and password.
///
/// IBM Cloud API keys are sent as username `apikey` with the key as
/// password.
pub struct BasicAuthenticator {
    username: String,
    password: SecretString,
}

impl BasicAuthenticator {
    /// Creates a basic authenticator and validates the credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> WatsonResult<Self> {
        let auth = Self {
            username: username.into(),
            password: SecretString::new(password.into()),
        };
        auth.validate()?;
        Ok(auth)
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl Authenticator for BasicAuthenticator {
    fn authenticate(&self, headers: &mut HashMap<String, String>) {
        let credentials = format!("{}:{}", self.username, self.password.expose_secret());
        headers.insert(
            "Authorization".to_string(),
            format!("Basic {}", STANDARD.encode(credentials)),
        );
    }

    fn auth_type(&self) -> &'static str {
        AUTH_TYPE_BASIC
    }

    fn validate(&self) -> WatsonResult<()> {
        let password = self.password.expose_secret();

        if self.username.is_empty() || password.is_empty() {
            return Err(WatsonError::authentication(
                "The username and password shouldn't be empty",
            ));
        }

        if has_bad_first_or_last_char(&self.username) || has_bad_first_or_last_char(password) {
            return Err(WatsonError::authentication(
                "The username and password shouldn't start or end with curly brackets or quotes. \
                 Please remove any surrounding {, }, or \" characters.",
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Bearer token authentication with a caller-managed access token.
///
/// The token is sent as is; refreshing it is up to the caller.
pub struct BearerTokenAuthenticator {
    token: SecretString,
}

impl BearerTokenAuthenticator {
    /// Creates a bearer token authenticator and validates the token.
    pub fn new(token: impl Into<String>) -> WatsonResult<Self> {
        let auth = Self {
            token: SecretString::new(token.into()),
        };
        auth.validate()?;
        Ok(auth)
    }

    /// Replaces the access token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = SecretString::new(token.into());
    }

    /// Gets a hint of the token for debugging (last 4 characters).
    pub fn token_hint(&self) -> String {
        secret_hint(&self.token)
    }
}

impl Authenticator for BearerTokenAuthenticator {
    fn authenticate(&self, headers: &mut HashMap<String, String>) {
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.token.expose_secret()),
        );
    }

    fn auth_type(&self) -> &'static str {
        AUTH_TYPE_BEARER_TOKEN
    }

    fn validate(&self) -> WatsonResult<()> {
        if self.token.expose_secret().is_empty() {
            return Err(WatsonError::authentication("The bearer token shouldn't be empty"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("token", &"[REDACTED]")
            .field("token_hint", &self.token_hint())
            .finish()
    }
}

/// Sends requests without credentials, for services behind a trusted proxy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthAuthenticator;

impl Authenticator for NoAuthAuthenticator {
    fn authenticate(&self, _headers: &mut HashMap<String, String>) {}

    fn auth_type(&self) -> &'static str {
        AUTH_TYPE_NO_AUTH
    }

    fn validate(&self) -> WatsonResult<()> {
        Ok(())
    }
}

/// Builds an authenticator from environment variables.
///
/// # Environment Variables
///
/// With `NAME` being `service_name` upper-cased and `-` replaced by `_`:
///
/// - `{NAME}_AUTH_TYPE`: `basic`, `bearerToken` or `noAuth` (case-insensitive)
/// - `{NAME}_USERNAME` / `{NAME}_PASSWORD`: for `basic`
/// - `{NAME}_BEARER_TOKEN`: for `bearerToken`
///
/// When `{NAME}_AUTH_TYPE` is unset, `basic` is assumed if a username is
/// present and `bearerToken` if a token is present.
pub fn authenticator_from_env(service_name: &str) -> WatsonResult<Box<dyn Authenticator>> {
    authenticator_from_lookup(service_name, |name| std::env::var(name).ok())
}

pub(crate) fn authenticator_from_lookup(
    service_name: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> WatsonResult<Box<dyn Authenticator>> {
    let prefix = env_prefix(service_name);
    let var = |suffix: &str| lookup(&format!("{prefix}_{suffix}"));

    let auth_type = match var("AUTH_TYPE") {
        Some(auth_type) => auth_type,
        None if var("USERNAME").is_some() => AUTH_TYPE_BASIC.to_string(),
        None if var("BEARER_TOKEN").is_some() => AUTH_TYPE_BEARER_TOKEN.to_string(),
        None => {
            return Err(WatsonError::authentication(format!(
                "No credentials found in the environment for {service_name}"
            )))
        }
    };

    let missing = |suffix: &str| {
        WatsonError::authentication(format!("{prefix}_{suffix} environment variable not set"))
    };

    if auth_type.eq_ignore_ascii_case(AUTH_TYPE_BASIC) {
        let username = var("USERNAME").ok_or_else(|| missing("USERNAME"))?;
        let password = var("PASSWORD").ok_or_else(|| missing("PASSWORD"))?;
        Ok(Box::new(BasicAuthenticator::new(username, password)?))
    } else if auth_type.eq_ignore_ascii_case(AUTH_TYPE_BEARER_TOKEN) {
        let token = var("BEARER_TOKEN").ok_or_else(|| missing("BEARER_TOKEN"))?;
        Ok(Box::new(BearerTokenAuthenticator::new(token)?))
    } else if auth_type.eq_ignore_ascii_case(AUTH_TYPE_NO_AUTH) {
        Ok(Box::new(NoAuthAuthenticator))
    } else {
        Err(WatsonError::authentication(format!(
            "Unsupported authentication type: {auth_type}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_basic_auth_apply() {
        let auth = BasicAuthenticator::new("apikey", "secret").unwrap();
        let mut headers = HashMap::new();

        auth.authenticate(&mut headers);

        assert_eq!(
            headers.get("Authorization"),
            Some(&"Basic YXBpa2V5OnNlY3JldA==".to_string())
        );
        assert_eq!(auth.auth_type(), AUTH_TYPE_BASIC);
    }

    #[test_case("", "secret" ; "empty username")]
    #[test_case("apikey", "" ; "empty password")]
    #[test_case("{apikey}", "secret" ; "braced username")]
    #[test_case("apikey", "\"secret\"" ; "quoted password")]
    fn test_basic_auth_rejects(username: &str, password: &str) {
        let result = BasicAuthenticator::new(username, password);
        assert!(matches!(result, Err(WatsonError::Authentication { .. })));
    }

    #[test]
    fn test_bearer_auth_apply() {
        let mut auth = BearerTokenAuthenticator::new("token-1").unwrap();
        auth.set_token("token-2");
        let mut headers = HashMap::new();

        auth.authenticate(&mut headers);

        assert_eq!(
            headers.get("Authorization"),
            Some(&"Bearer token-2".to_string())
        );
    }

    #[test]
    fn test_bearer_auth_validate_empty() {
        assert!(BearerTokenAuthenticator::new("").is_err());
    }

    #[test]
    fn test_token_hint() {
        let auth = BearerTokenAuthenticator::new("eyJhbGciOi_abcd").unwrap();
        assert_eq!(auth.token_hint(), "...abcd");
        let short = BearerTokenAuthenticator::new("abc").unwrap();
        assert_eq!(short.token_hint(), "****");
    }

    #[test]
    fn test_token_hint_counts_characters() {
        let four_chars = BearerTokenAuthenticator::new("ééé1").unwrap();
        assert_eq!(four_chars.token_hint(), "****");
        let five_chars = BearerTokenAuthenticator::new("xééé1").unwrap();
        assert_eq!(five_chars.token_hint(), "...ééé1");
    }

    #[test]
    fn test_no_auth_leaves_headers() {
        let mut headers = HashMap::new();
        NoAuthAuthenticator.authenticate(&mut headers);
        assert!(headers.is_empty());
        assert!(NoAuthAuthenticator.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let basic = BasicAuthenticator::new("apikey", "super-secret").unwrap();
        let bearer = BearerTokenAuthenticator::new("super-secret-token").unwrap();

        for debug_str in [format!("{basic:?}"), format!("{bearer:?}")] {
            assert!(debug_str.contains("[REDACTED]"));
            assert!(!debug_str.contains("super-secret"));
        }
    }

    #[test_case(&[("ASSISTANT_AUTH_TYPE", "basic"), ("ASSISTANT_USERNAME", "u"), ("ASSISTANT_PASSWORD", "p")], AUTH_TYPE_BASIC ; "explicit basic")]
    #[test_case(&[("ASSISTANT_AUTH_TYPE", "BEARERTOKEN"), ("ASSISTANT_BEARER_TOKEN", "t")], AUTH_TYPE_BEARER_TOKEN ; "explicit bearer")]
    #[test_case(&[("ASSISTANT_AUTH_TYPE", "noauth")], AUTH_TYPE_NO_AUTH ; "explicit none")]
    #[test_case(&[("ASSISTANT_USERNAME", "u"), ("ASSISTANT_PASSWORD", "p")], AUTH_TYPE_BASIC ; "inferred basic")]
    #[test_case(&[("ASSISTANT_BEARER_TOKEN", "t")], AUTH_TYPE_BEARER_TOKEN ; "inferred bearer")]
    fn test_authenticator_from_lookup(vars: &[(&str, &str)], expected: &str) {
        let auth = authenticator_from_lookup("assistant", lookup(vars)).unwrap();
        assert_eq!(auth.auth_type(), expected);
    }

    #[test]
    fn test_authenticator_from_lookup_errors() {
        assert!(authenticator_from_lookup("assistant", lookup(&[])).is_err());
        assert!(authenticator_from_lookup(
            "assistant",
            lookup(&[("ASSISTANT_AUTH_TYPE", "iam")])
        )
        .is_err());
        assert!(authenticator_from_lookup(
            "assistant",
            lookup(&[("ASSISTANT_AUTH_TYPE", "basic"), ("ASSISTANT_USERNAME", "u")])
        )
        .is_err());
    }
}
