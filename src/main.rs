use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use upload_verify::config::AppConfig;
use upload_verify::infrastructure::storage;
use upload_verify::services::report::create_reporter;
use upload_verify::{TerminalState, UploadCoordinator, UploadOutcome, VerifyError};

#[derive(Parser, Debug)]
#[command(author, version, about = "Upload a file to S3 and verify its SHA-256 checksum", long_about = None)]
struct Args {
    /// Destination bucket
    bucket: String,

    /// Object key inside the bucket
    key: String,

    /// Local file to upload
    file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "upload_verify=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env();
    info!(
        "🚀 Uploading {} to {}:{}",
        args.file.display(),
        args.bucket,
        args.key
    );

    let storage_service = storage::setup_storage(&config).await;
    let reporter = create_reporter(&config.report_style);
    let coordinator = UploadCoordinator::new(storage_service, reporter);

    let result = coordinator.run(&args.bucket, &args.key, args.file).await;
    Ok(ExitCode::from(exit_status(&result)))
}

/// Maps a run to the process exit status. Errors are logged here and only here.
fn exit_status(result: &Result<UploadOutcome, VerifyError>) -> u8 {
    match result {
        Ok(outcome) => match outcome.state() {
            TerminalState::ChecksumsMatch => 0,
            TerminalState::ChecksumsMismatch => 2,
            TerminalState::UploadFailed => 1,
        },
        Err(e) => {
            error!("❌ Verification failed: {}", e);
            1
        }
    }
}
