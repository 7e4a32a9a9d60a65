//! # Trulioo
//!
//! Async client for the Trulioo identity verification API.
//!
//! Calls are grouped the way the service groups them: connection checks,
//! account configuration, and verification. Each method sends one HTTP
//! request with the context's basic-auth credentials and returns the typed
//! response; failures come back as [`ClientError`] without retries.
//!
//! ## Example
//!
//! Submit a verification and look up the verbose record it produced.
//!
//! ```no_run
//! use trulioo::api::data_fields::PersonInfo;
//! use trulioo::api::verification::VerifyRequest;
//! use trulioo::api::DataFields;
//! use trulioo::client::TruliooApiClient;
//! use trulioo::Context;
//!
//! #[tokio::main]
//! async fn main() -> miette::Result<()> {
//!     let client = TruliooApiClient::new(Context::from_env()?)?;
//!
//!     let request = VerifyRequest::new()
//!         .accept_trulioo_terms_and_conditions(true)
//!         .verbose_mode(true)
//!         .configuration_name("Identity Verification")
//!         .country_code("DE")
//!         .data_fields(
//!             DataFields::new()
//!                 .person_info(
//!                     PersonInfo::new()
//!                         .first_given_name("test")
//!                         .first_sur_name("test")
//!                         .year_of_birth(1980)
//!                         .build(),
//!                 )
//!                 .build(),
//!         )
//!         .build();
//!
//!     let result = client.verification().verify(&request).await?;
//!     println!("{} -> {}", result.transaction_id, result.record.record_status);
//!
//!     let record = client
//!         .verification()
//!         .get_transaction_record_verbose(&result.record.transaction_record_id)
//!         .await?;
//!     for source in &record.record.datasource_results {
//!         println!("{}: {} fields", source.datasource_name, source.datasource_fields.len());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// The client and its per-service namespaces
pub mod client;

/// Re-export of the request and model bindings
pub use trulioo_api as api;
pub use trulioo_common::*;
