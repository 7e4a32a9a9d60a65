use trulioo_api::connection::{SayHello, TestAuthentication};
use trulioo_common::{error::TruliooResult, http_client::HttpClient};

use super::TruliooApiClient;

/// Connectivity checks, under `/connection/v1/`.
pub struct ConnectionApi<'a, C: HttpClient> {
    client: &'a TruliooApiClient<C>,
}

impl<'a, C: HttpClient + Sync> ConnectionApi<'a, C> {
    pub(crate) fn new(client: &'a TruliooApiClient<C>) -> Self {
        Self { client }
    }

    /// Echo `Hello {name}`; succeeds whenever the host is reachable.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn say_hello(&self, name: &str) -> TruliooResult<String> {
        self.client.call(&SayHello::new().name(name).build()).await
    }

    /// Check the context's credentials; answers `Hello {username}`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn test_authentication(&self) -> TruliooResult<String> {
        self.client.call(&TestAuthentication).await
    }
}
