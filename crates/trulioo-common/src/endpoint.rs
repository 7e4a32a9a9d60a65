//! # Stateless request/response mapping
//!
//! Every remote operation lives under `/{service}/v1/...` on the configured
//! host. Mapping overview:
//! - Success (2xx): keep the body and parse it into the endpoint's typed output.
//! - 401: `ClientError::Auth(AuthError::Unauthorized)`, body kept for inspection.
//! - Anything else: `ClientError::Http` with the status and raw body.
//!
//! Nothing here retries; the first failure is the one the caller sees.

use std::marker::PhantomData;

use bytes::Bytes;
use http::{
    HeaderName, HeaderValue, Request, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::context::Credentials;
use crate::error::{
    AuthError, ClientError, DecodeError, EncodeError, HttpError, TransportError, TruliooResult,
};
use crate::http_client::HttpClient;

/// API version segment shared by every service.
pub const API_VERSION: &str = "v1";

/// JSON media type, used for request bodies and most responses.
pub const JSON: &str = "application/json";

/// Top-level service an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Connectivity and credential checks
    Connection,
    /// Account configuration: countries, fields, consents, datasources
    Configuration,
    /// Verification submission and transaction lookups
    Verifications,
}

impl Service {
    /// Path segment for this service.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::Configuration => "configuration",
            Self::Verifications => "verifications",
        }
    }
}

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    /// HTTP GET, no body
    Get,
    /// HTTP POST with the given body content type
    Post(&'static str),
}

impl ApiMethod {
    /// Get the HTTP method string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post(_) => "POST",
        }
    }

    /// Get the body content type (POST only)
    pub const fn body_encoding(&self) -> Option<&'static str> {
        match self {
            Self::Get => None,
            Self::Post(enc) => Some(enc),
        }
    }
}

/// Trait for typed API requests.
///
/// Implemented on the request type itself; it carries the route, method and
/// output type of one remote endpoint.
pub trait ApiRequest {
    /// Service this endpoint lives under
    const SERVICE: Service;

    /// HTTP method
    const METHOD: ApiMethod;

    /// Value of the `Accept` header
    const ACCEPT: &'static str = JSON;

    /// Parsed response type
    type Output;

    /// Path segments after `/{service}/v1/`, unescaped.
    fn segments(&self) -> Vec<&str>;

    /// Encode the request body. Endpoints without a body keep the default.
    fn encode_body(&self) -> Result<Option<Vec<u8>>, EncodeError> {
        Ok(None)
    }

    /// Decode a successful response body.
    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError>;
}

/// Decode a JSON response body.
pub fn json_output<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

/// Decode a plain-text response body.
///
/// Some hosts wrap text answers in a JSON string; the quotes are removed in
/// that case.
pub fn text_output(body: &[u8]) -> Result<String, DecodeError> {
    let text = std::str::from_utf8(body)?.trim();
    if text.starts_with('"') {
        if let Ok(unquoted) = serde_json::from_str::<String>(text) {
            return Ok(unquoted);
        }
    }
    Ok(text.to_owned())
}

/// Per-request options.
#[derive(Debug, Default, Clone)]
pub struct CallOptions {
    /// Basic-auth credentials to apply.
    pub credentials: Option<Credentials>,
    /// `User-Agent` header value.
    pub user_agent: Option<String>,
    /// Extra headers to attach to this request.
    pub extra_headers: Vec<(HeaderName, HeaderValue)>,
}

/// Extension for stateless API calls on any `HttpClient`.
///
/// Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use trulioo_common::{ApiExt, Credentials};
///
/// let http = reqwest::Client::new();
/// let base = url::Url::parse("https://api.globaldatacompany.com")?;
/// let call = http.api(base).credentials(Credentials::new("user", "pass"));
/// // let resp = call.send(&request).await?;
/// # Ok(())
/// # }
/// ```
pub trait ApiExt: HttpClient {
    /// Start building a call against the given base URL.
    fn api<'a>(&'a self, base: Url) -> ApiCall<'a, Self>
    where
        Self: Sized,
    {
        ApiCall {
            client: self,
            base,
            opts: CallOptions::default(),
        }
    }
}

impl<T: HttpClient> ApiExt for T {}

/// Stateless call builder.
pub struct ApiCall<'a, C: HttpClient> {
    pub(crate) client: &'a C,
    pub(crate) base: Url,
    pub(crate) opts: CallOptions,
}

impl<'a, C: HttpClient> ApiCall<'a, C> {
    /// Authenticate this call with the given credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.opts.credentials = Some(credentials);
        self
    }
    /// Set the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = Some(user_agent.into());
        self
    }
    /// Add an extra header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.opts.extra_headers.push((name, value));
        self
    }
    /// Replace the builder's options entirely.
    pub fn with_options(mut self, opts: CallOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Send the given typed request and return a response wrapper.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self, request), fields(service = R::SERVICE.as_str(), method = R::METHOD.as_str())))]
    pub async fn send<R>(self, request: &R) -> TruliooResult<Response<R>>
    where
        R: ApiRequest,
    {
        let http_request = build_http_request(&self.base, request, &self.opts)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(uri = %http_request.uri(), "sending request");

        let http_response = self
            .client
            .send_http(http_request)
            .await
            .map_err(into_transport_error)?;

        process_response(http_response)
    }
}

/// Keep a client's own `TransportError` as-is, box anything else.
fn into_transport_error<E>(e: E) -> TransportError
where
    E: std::error::Error + Send + Sync + 'static,
{
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(e);
    match boxed.downcast::<TransportError>() {
        Ok(transport) => *transport,
        Err(other) => TransportError::Other(other),
    }
}

/// Build the URL of an endpoint relative to the given base.
pub fn endpoint_url<R: ApiRequest>(base: &Url, req: &R) -> Result<Url, TransportError> {
    let mut url = base.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            TransportError::InvalidRequest(format!("base URL '{base}' cannot carry a path"))
        })?;
        segments.pop_if_empty();
        segments.push(R::SERVICE.as_str());
        segments.push(API_VERSION);
        for segment in req.segments() {
            segments.push(segment);
        }
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Build an HTTP request for a call given base URL and options
pub fn build_http_request<R>(
    base: &Url,
    req: &R,
    opts: &CallOptions,
) -> Result<Request<Vec<u8>>, ClientError>
where
    R: ApiRequest,
{
    let url = endpoint_url(base, req)?;

    let method = match R::METHOD {
        ApiMethod::Get => http::Method::GET,
        ApiMethod::Post(_) => http::Method::POST,
    };

    let mut builder = Request::builder()
        .method(method)
        .uri(url.as_str())
        .header(ACCEPT, R::ACCEPT);

    if let Some(encoding) = R::METHOD.body_encoding() {
        builder = builder.header(CONTENT_TYPE, encoding);
    }

    if let Some(credentials) = &opts.credentials {
        builder = builder.header(AUTHORIZATION, credentials.header_value()?);
    }

    if let Some(agent) = &opts.user_agent {
        let value = HeaderValue::from_str(agent)
            .map_err(|e| TransportError::InvalidRequest(format!("Invalid user agent: {}", e)))?;
        builder = builder.header(USER_AGENT, value);
    }

    for (name, value) in &opts.extra_headers {
        builder = builder.header(name, value);
    }

    let body = match R::METHOD {
        ApiMethod::Post(_) => req.encode_body()?.unwrap_or_default(),
        ApiMethod::Get => Vec::new(),
    };

    Ok(builder.body(body).map_err(TransportError::from)?)
}

/// Turn a raw HTTP response into a typed one, or the matching error.
///
/// Exposed to make things more easily pluggable
#[inline]
pub fn process_response<R>(http_response: http::Response<Vec<u8>>) -> TruliooResult<Response<R>>
where
    R: ApiRequest,
{
    let status = http_response.status();
    let content_type = http_response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let buffer = Bytes::from(http_response.into_body());

    if status == StatusCode::UNAUTHORIZED {
        let body = (!buffer.is_empty()).then_some(buffer);
        return Err(AuthError::Unauthorized { body }.into());
    }

    if !status.is_success() {
        #[cfg(feature = "tracing")]
        tracing::warn!(status = %status, service = R::SERVICE.as_str(), "request failed");
        return Err(HttpError {
            status,
            body: Some(buffer),
        }
        .into());
    }

    Ok(Response::new(buffer, status, content_type))
}

/// Successful response that owns its body.
///
/// Generic over the request type so that parsing yields that endpoint's output.
pub struct Response<R: ApiRequest> {
    _marker: PhantomData<fn() -> R>,
    buffer: Bytes,
    status: StatusCode,
    content_type: Option<String>,
}

impl<R: ApiRequest> Response<R> {
    /// Create a new response from a buffer, status code and content type
    pub fn new(buffer: Bytes, status: StatusCode, content_type: Option<String>) -> Self {
        Self {
            buffer,
            status,
            content_type,
            _marker: PhantomData,
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the raw buffer
    pub fn buffer(&self) -> &Bytes {
        &self.buffer
    }

    /// `Content-Type` reported by the server, if any
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Parse the body into the endpoint's output
    pub fn parse(&self) -> Result<R::Output, DecodeError> {
        R::decode_output(&self.buffer)
    }

    /// Parse the body, consuming the response
    pub fn into_output(self) -> Result<R::Output, DecodeError> {
        R::decode_output(&self.buffer)
    }

    /// Take the raw body and content type
    pub fn into_parts(self) -> (Bytes, Option<String>) {
        (self.buffer, self.content_type)
    }
}

impl<R: ApiRequest> std::fmt::Debug for Response<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .field("len", &self.buffer.len())
            .finish()
    }
}
