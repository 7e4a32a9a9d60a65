//! Calls against a real Trulioo account.
//!
//! Run with `TRULIOO_USERNAME`, `TRULIOO_PASSWORD` (and optionally
//! `TRULIOO_HOST`) set:
//!
//! ```sh
//! TRULIOO_RECORD_ID=... TRULIOO_TRANSACTION_ID=... TRULIOO_DOCUMENT_FIELD=... \
//!     cargo test -p trulioo --test live_api -- --ignored
//! ```
//!
//! The watch-list test needs an account with a watch-list datasource
//! configured for Germany.

use trulioo::api::DataFields;
use trulioo::api::configuration::IDENTITY_VERIFICATION;
use trulioo::api::data_fields::PersonInfo;
use trulioo::api::verification::VerifyRequest;
use trulioo::client::TruliooApiClient;

fn live_client() -> TruliooApiClient {
    dotenvy::dotenv().ok();
    TruliooApiClient::from_env().expect("TRULIOO_USERNAME and TRULIOO_PASSWORD must be set")
}

fn required_var(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set"))
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "calls the live API"]
async fn live_test_authentication() {
    let reply = live_client()
        .connection()
        .test_authentication()
        .await
        .unwrap();
    assert!(reply.starts_with("Hello"));
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "calls the live API"]
async fn live_country_codes() {
    let codes = live_client()
        .configuration()
        .get_country_codes(IDENTITY_VERIFICATION)
        .await
        .unwrap();
    assert!(!codes.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "calls the live API"]
async fn live_transaction_record_verbose() {
    let record_id = required_var("TRULIOO_RECORD_ID");
    let record = live_client()
        .verification()
        .get_transaction_record_verbose(&record_id)
        .await
        .unwrap();
    assert_eq!(record.record.transaction_record_id, record_id);
    assert!(!record.input_fields.is_empty());
    for field in &record.input_fields {
        assert!(!field.field_name.is_empty());
    }
    for source in &record.record.datasource_results {
        assert!(!source.datasource_name.is_empty());
    }
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "calls the live API"]
async fn live_transaction_status() {
    let transaction_id = required_var("TRULIOO_TRANSACTION_ID");
    let status = live_client()
        .verification()
        .get_transaction_status(&transaction_id)
        .await
        .unwrap();
    assert_eq!(status.transaction_id, transaction_id);
    assert!(!status.status.is_empty());
    if status.is_completed() {
        assert!(!status.transaction_record_id.is_empty());
        assert!(!status.is_timed_out);
    }
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "calls the live API"]
async fn live_verify_with_watchlist_details() {
    let request = VerifyRequest::new()
        .accept_trulioo_terms_and_conditions(true)
        .verbose_mode(true)
        .demo(false)
        .configuration_name(IDENTITY_VERIFICATION)
        .country_code("DE")
        .data_fields(
            DataFields::new()
                .person_info(
                    PersonInfo::new()
                        .first_given_name("test")
                        .first_sur_name("test")
                        .year_of_birth(1980)
                        .build(),
                )
                .build(),
        )
        .build();

    // Structured watch-list data in AppendedFields must not break decoding.
    let result = live_client().verification().verify(&request).await.unwrap();
    assert!(!result.transaction_id.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "calls the live API"]
async fn live_document_download() {
    let record_id = required_var("TRULIOO_RECORD_ID");
    let field_name = required_var("TRULIOO_DOCUMENT_FIELD");
    let document = live_client()
        .verification()
        .get_document_download(&record_id, &field_name)
        .await
        .unwrap();
    assert!(!document.is_empty());
}
