//! Connectivity checks: `/connection/v1/`.

use trulioo_common::endpoint::{ApiMethod, ApiRequest, Service, text_output};
use trulioo_common::error::DecodeError;

/// Echo endpoint; needs no valid credentials. Answers `Hello {name}`.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct SayHello {
    #[builder(into)]
    pub name: String,
}

impl ApiRequest for SayHello {
    const SERVICE: Service = Service::Connection;
    const METHOD: ApiMethod = ApiMethod::Get;
    const ACCEPT: &'static str = "text/plain, application/json";
    type Output = String;

    fn segments(&self) -> Vec<&str> {
        vec!["sayhello", self.name.as_str()]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        text_output(body)
    }
}

/// Credential check. Answers `Hello {username}` when the credentials are
/// accepted; rejected credentials surface as an authentication error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestAuthentication;

impl ApiRequest for TestAuthentication {
    const SERVICE: Service = Service::Connection;
    const METHOD: ApiMethod = ApiMethod::Get;
    const ACCEPT: &'static str = "text/plain, application/json";
    type Output = String;

    fn segments(&self) -> Vec<&str> {
        vec!["testauthentication"]
    }

    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        text_output(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes() {
        assert_eq!(SayHello::new().name("Joe").build().segments(), ["sayhello", "Joe"]);
        assert_eq!(TestAuthentication.segments(), ["testauthentication"]);
    }

    #[test]
    fn hello_is_plain_text() {
        assert_eq!(SayHello::decode_output(b"Hello Joe").unwrap(), "Hello Joe");
    }
}
