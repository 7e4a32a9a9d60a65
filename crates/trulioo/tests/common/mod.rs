#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use http::{Response as HttpResponse, StatusCode, header::CONTENT_TYPE};
use tokio::sync::Mutex;
use trulioo::Context;
use trulioo::client::TruliooApiClient;
use trulioo_common::http_client::HttpClient;

pub const USERNAME: &str = "alice";
pub const PASSWORD: &str = "secret";
/// base64("alice:secret")
pub const BASIC_AUTH: &str = "Basic YWxpY2U6c2VjcmV0";
pub const HOST: &str = "https://api.globaldatacompany.com";

#[derive(Clone, Default)]
pub struct MockClient {
    // Queue of HTTP responses to pop for each send_http call
    queue: Arc<Mutex<VecDeque<HttpResponse<Vec<u8>>>>>,
    // Capture requests for assertions
    log: Arc<Mutex<Vec<http::Request<Vec<u8>>>>>,
}

impl MockClient {
    pub async fn push(&self, resp: HttpResponse<Vec<u8>>) {
        self.queue.lock().await.push_back(resp);
    }

    pub async fn take_log(&self) -> Vec<http::Request<Vec<u8>>> {
        let mut log = self.log.lock().await;
        let out = log.clone();
        log.clear();
        out
    }
}

impl HttpClient for MockClient {
    type Error = std::convert::Infallible;

    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl core::future::Future<
        Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>,
    > + Send {
        let log = self.log.clone();
        let queue = self.queue.clone();
        async move {
            log.lock().await.push(request);
            Ok(queue.lock().await.pop_front().expect("no queued response"))
        }
    }
}

pub fn client(mock: &MockClient) -> TruliooApiClient<MockClient> {
    let context = Context::new(USERNAME, PASSWORD)
        .with_host(HOST)
        .expect("valid host");
    TruliooApiClient::with_http_client(context, mock.clone())
}

pub fn json_response(status: StatusCode, body: serde_json::Value) -> HttpResponse<Vec<u8>> {
    HttpResponse::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json; charset=utf-8")
        .body(serde_json::to_vec(&body).unwrap())
        .unwrap()
}

pub fn raw_response(
    status: StatusCode,
    content_type: &str,
    body: impl Into<Vec<u8>>,
) -> HttpResponse<Vec<u8>> {
    HttpResponse::builder()
        .status(status)
        .header(CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}
