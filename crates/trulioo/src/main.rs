use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, WrapErr};
use serde::Serialize;
use trulioo::Context;
use trulioo::api::DataFields;
use trulioo::api::configuration::IDENTITY_VERIFICATION;
use trulioo::api::data_fields::PersonInfo;
use trulioo::api::verification::VerifyRequest;
use trulioo::client::TruliooApiClient;
use trulioo::context::DEFAULT_HOST;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Trulioo identity verification client")]
struct Args {
    /// API username
    #[arg(short, long, env = "TRULIOO_USERNAME")]
    username: String,

    /// API password
    #[arg(short, long, env = "TRULIOO_PASSWORD", hide_env_values = true)]
    password: String,

    /// API host
    #[arg(long, env = "TRULIOO_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Request timeout in seconds
    #[arg(long, env = "TRULIOO_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the host is reachable
    Hello { name: String },
    /// Check the credentials are accepted
    TestAuth,
    /// List countries enabled for a configuration
    CountryCodes {
        #[arg(default_value = IDENTITY_VERIFICATION)]
        configuration: String,
    },
    /// Show the processing status of a transaction
    Status { transaction_id: String },
    /// Show a stored transaction record
    Record {
        transaction_record_id: String,
        /// Include per-field datasource statuses
        #[arg(long)]
        verbose: bool,
    },
    /// Submit a person for verification
    Verify {
        /// ISO 3166-1 alpha-2 country code
        #[arg(long)]
        country: String,
        #[arg(long = "config", default_value = IDENTITY_VERIFICATION)]
        configuration: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        year_of_birth: Option<i32>,
        /// Run against test entities
        #[arg(long)]
        demo: bool,
    },
    /// Save a document attached to a transaction record
    Download {
        transaction_record_id: String,
        field_name: String,
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn init_tracing(log_level: &str) -> miette::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)
            .into_diagnostic()
            .wrap_err_with(|| format!("invalid log level/filter '{log_level}'"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| miette::miette!("telemetry error: {e}"))
}

fn print_json<T: Serialize>(value: &T) -> miette::Result<()> {
    println!("{}", serde_json::to_string_pretty(value).into_diagnostic()?);
    Ok(())
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let mut context = Context::new(args.username, args.password).with_host(&args.host)?;
    if let Some(secs) = args.timeout {
        context = context.with_timeout(Duration::from_secs(secs));
    }
    let client = TruliooApiClient::new(context)?;

    match args.command {
        Command::Hello { name } => {
            println!("{}", client.connection().say_hello(&name).await?);
        }
        Command::TestAuth => {
            println!("{}", client.connection().test_authentication().await?);
        }
        Command::CountryCodes { configuration } => {
            let codes = client
                .configuration()
                .get_country_codes(&configuration)
                .await?;
            println!("{}", codes.join("\n"));
        }
        Command::Status { transaction_id } => {
            let status = client
                .verification()
                .get_transaction_status(&transaction_id)
                .await?;
            print_json(&status)?;
        }
        Command::Record {
            transaction_record_id,
            verbose,
        } => {
            let verification = client.verification();
            let record = if verbose {
                verification
                    .get_transaction_record_verbose(&transaction_record_id)
                    .await?
            } else {
                verification
                    .get_transaction_record(&transaction_record_id)
                    .await?
            };
            print_json(&record)?;
        }
        Command::Verify {
            country,
            configuration,
            first_name,
            last_name,
            year_of_birth,
            demo,
        } => {
            let person = PersonInfo::new()
                .first_given_name(first_name)
                .first_sur_name(last_name)
                .maybe_year_of_birth(year_of_birth)
                .build();
            let request = VerifyRequest::new()
                .accept_trulioo_terms_and_conditions(true)
                .demo(demo)
                .configuration_name(configuration)
                .country_code(country)
                .data_fields(DataFields::new().person_info(person).build())
                .build();
            let result = client.verification().verify(&request).await?;
            print_json(&result)?;
        }
        Command::Download {
            transaction_record_id,
            field_name,
            out,
        } => {
            let document = client
                .verification()
                .get_document_download(&transaction_record_id, &field_name)
                .await?;
            tokio::fs::write(&out, &document.bytes)
                .await
                .into_diagnostic()
                .wrap_err_with(|| format!("writing {}", out.display()))?;
            println!(
                "wrote {} bytes ({}) to {}",
                document.bytes.len(),
                document.content_type.as_deref().unwrap_or("unknown type"),
                out.display()
            );
        }
    }

    Ok(())
}
