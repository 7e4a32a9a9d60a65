//! Stateful client for the Trulioo API.
//!
//! [`TruliooApiClient`] pairs an [`HttpClient`] with a [`Context`] and hands
//! out borrowed namespaces for each service:
//! [`connection`](TruliooApiClient::connection),
//! [`configuration`](TruliooApiClient::configuration) and
//! [`verification`](TruliooApiClient::verification).

mod configuration;
mod connection;
mod verification;

pub use configuration::ConfigurationApi;
pub use connection::ConnectionApi;
pub use verification::VerificationApi;

use trulioo_common::{
    context::Context,
    endpoint::{ApiExt, ApiRequest, CallOptions, Response},
    error::{TransportError, TruliooResult},
    http_client::HttpClient,
};
use url::Url;

/// Client for the Trulioo API.
///
/// Holds no per-call state; every method issues exactly one request and can
/// be called concurrently from several tasks.
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> miette::Result<()> {
/// use trulioo::client::TruliooApiClient;
/// use trulioo::Context;
///
/// let context = Context::new("username", "password")
///     .with_host("https://gateway.trulioo.com")?;
/// let client = TruliooApiClient::new(context)?;
/// let status = client
///     .verification()
///     .get_transaction_status("transaction-id")
///     .await?;
/// println!("{} timed out: {}", status.status, status.is_timed_out);
/// # Ok(())
/// # }
/// ```
pub struct TruliooApiClient<C: HttpClient = reqwest::Client> {
    http: C,
    context: Context,
}

impl TruliooApiClient<reqwest::Client> {
    /// Create a client backed by `reqwest`, honouring the context's timeout
    /// and user agent.
    pub fn new(context: Context) -> TruliooResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(context.user_agent.as_str());
        if let Some(timeout) = context.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(TransportError::from)?;
        Ok(Self { http, context })
    }

    /// Create a client from `TRULIOO_*` environment variables.
    pub fn from_env() -> TruliooResult<Self> {
        Self::new(Context::from_env()?)
    }
}

impl<C: HttpClient + Sync> TruliooApiClient<C> {
    /// Create a client over any transport.
    pub fn with_http_client(context: Context, http: C) -> Self {
        Self { http, context }
    }

    /// The context this client sends with.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Base URL of the API host.
    pub fn host(&self) -> &Url {
        &self.context.host
    }

    /// Access the underlying transport.
    pub fn http_client(&self) -> &C {
        &self.http
    }

    /// Options applied to every call: credentials and user agent.
    pub fn call_options(&self) -> CallOptions {
        CallOptions {
            credentials: Some(self.context.credentials.clone()),
            user_agent: Some(self.context.user_agent.clone()),
            extra_headers: Vec::new(),
        }
    }

    /// Send a typed request and return the raw response wrapper.
    pub async fn send<R>(&self, request: &R) -> TruliooResult<Response<R>>
    where
        R: ApiRequest + Sync,
    {
        self.http
            .api(self.context.host.clone())
            .with_options(self.call_options())
            .send(request)
            .await
    }

    /// Send a typed request and parse its output.
    pub async fn call<R>(&self, request: &R) -> TruliooResult<R::Output>
    where
        R: ApiRequest + Sync,
    {
        Ok(self.send(request).await?.into_output()?)
    }

    /// Connectivity and credential checks.
    pub fn connection(&self) -> ConnectionApi<'_, C> {
        ConnectionApi::new(self)
    }

    /// Account configuration lookups.
    pub fn configuration(&self) -> ConfigurationApi<'_, C> {
        ConfigurationApi::new(self)
    }

    /// Verification submission and transaction lookups.
    pub fn verification(&self) -> VerificationApi<'_, C> {
        VerificationApi::new(self)
    }
}

impl<C: HttpClient> std::fmt::Debug for TruliooApiClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TruliooApiClient")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
