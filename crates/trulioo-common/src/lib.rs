//! Common plumbing for the Trulioo client crates.
//!
//! This crate holds everything that is not tied to a particular endpoint: the
//! [`HttpClient`](http_client::HttpClient) abstraction, credentials and host
//! configuration, the [`ApiRequest`](endpoint::ApiRequest) trait that generated
//! endpoint types implement, and the error types every call can return.

#![warn(missing_docs)]
pub use url;

/// Credentials, host and timeout configuration.
pub mod context;
/// Endpoint traits, request building and response handling.
pub mod endpoint;
pub mod error;
/// HTTP client abstraction used by the Trulioo crates.
pub mod http_client;

pub use context::{ConfigError, Context, Credentials};
pub use endpoint::{ApiExt, ApiMethod, ApiRequest, CallOptions, Response, Service};
pub use error::{ClientError, TruliooResult};
