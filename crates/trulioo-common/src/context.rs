use std::env;
use std::fmt;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::HeaderValue;
use url::Url;

use crate::error::AuthError;

/// Host used when none is configured.
pub const DEFAULT_HOST: &str = "https://api.globaldatacompany.com";

/// `User-Agent` sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("trulioo-rs/", env!("CARGO_PKG_VERSION"));

/// Errors raised while assembling a [`Context`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("missing required environment variable {0}")]
    #[diagnostic(code(trulioo::config::missing))]
    Missing(&'static str),

    /// The host could not be parsed as an absolute http(s) URL
    #[error("invalid host '{value}': {reason}")]
    #[diagnostic(
        code(trulioo::config::host),
        help("use a full URL such as https://api.globaldatacompany.com")
    )]
    InvalidHost {
        /// The rejected value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The timeout was not a whole number of seconds
    #[error("invalid timeout '{0}': expected whole seconds")]
    #[diagnostic(code(trulioo::config::timeout))]
    InvalidTimeout(String),
}

/// Username and password for the service's basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API username
    pub username: String,
    /// API password
    pub password: String,
}

impl Credentials {
    /// Create credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Render the `Authorization: Basic ...` header value.
    pub fn header_value(&self) -> Result<HeaderValue, AuthError> {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Everything a client needs to reach the service: who it is, where it goes,
/// and how long it is prepared to wait.
#[derive(Debug, Clone)]
pub struct Context {
    /// Basic-auth credentials sent on every call
    pub credentials: Credentials,
    /// Base URL of the API host
    pub host: Url,
    /// Whole-request timeout, if any
    pub timeout: Option<Duration>,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl Context {
    /// Context for the default host with no timeout.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            host: default_host(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Point the context at a different host.
    pub fn with_host(mut self, host: &str) -> Result<Self, ConfigError> {
        self.host = parse_host(host)?;
        Ok(self)
    }

    /// Set the whole-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a context from `TRULIOO_USERNAME`, `TRULIOO_PASSWORD`, and the
    /// optional `TRULIOO_HOST` and `TRULIOO_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = required_var("TRULIOO_USERNAME")?;
        let password = required_var("TRULIOO_PASSWORD")?;
        let mut context = Self::new(username, password);

        if let Some(host) = optional_var("TRULIOO_HOST") {
            context = context.with_host(&host)?;
        }
        if let Some(secs) = optional_var("TRULIOO_TIMEOUT_SECS") {
            context = context.with_timeout(parse_timeout(&secs)?);
        }
        Ok(context)
    }
}

fn default_host() -> Url {
    Url::parse(DEFAULT_HOST).expect("default host is a valid URL")
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    optional_var(name).ok_or(ConfigError::Missing(name))
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Parse a host string into a base URL.
pub fn parse_host(host: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidHost {
        value: host.to_owned(),
        reason,
    };
    let url = Url::parse(host.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host name".to_owned()));
    }
    Ok(url)
}

/// Parse a timeout given in whole seconds.
pub fn parse_timeout(secs: &str) -> Result<Duration, ConfigError> {
    secs.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidTimeout(secs.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_header_encodes_username_and_password() {
        let creds = Credentials::new("Aladdin", "open sesame");
        let value = creds.header_value().unwrap();
        assert_eq!(value.to_str().unwrap(), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
        assert!(value.is_sensitive());
    }

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("user", "hunter2");
        let shown = format!("{creds:?}");
        assert!(shown.contains("user"));
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn default_context_targets_public_host() {
        let context = Context::new("user", "pass");
        assert_eq!(context.host.as_str(), "https://api.globaldatacompany.com/");
        assert!(context.timeout.is_none());
        assert!(context.user_agent.starts_with("trulioo-rs/"));
    }

    #[test]
    fn host_must_be_absolute_http() {
        assert!(parse_host("https://gateway.trulioo.com/").is_ok());
        assert!(matches!(
            parse_host("gateway.trulioo.com"),
            Err(ConfigError::InvalidHost { .. })
        ));
        assert!(matches!(
            parse_host("ftp://gateway.trulioo.com"),
            Err(ConfigError::InvalidHost { .. })
        ));
    }

    #[test]
    fn timeout_parses_whole_seconds() {
        assert_eq!(parse_timeout(" 30 ").unwrap(), Duration::from_secs(30));
        assert!(matches!(
            parse_timeout("1.5"),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }
}
