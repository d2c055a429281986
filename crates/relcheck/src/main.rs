mod cli;
mod error;
mod logging;
mod output;
mod settings;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::debug;
use relcheck_core::{HttpReleaseSource, check_latest_release};

use crate::cli::{CheckRequest, Cli};
use crate::error::CliError;
use crate::settings::Settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    logging::init_logging(
        cli.verbose || settings.debug_logging,
        settings.log_to_file,
        settings.max_log_size_bytes,
    );

    match run(&cli, &settings) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", output::failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, settings: &Settings) -> Result<String, CliError> {
    let request = CheckRequest::resolve(cli, settings)?;
    debug!(
        "Checking {} against running version {}",
        request.release_url, request.current_tag
    );

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(request.http_timeout_secs))
        .build()
        .map_err(CliError::ClientBuild)?;
    let source = HttpReleaseSource::new(client);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let outcome = runtime.block_on(check_latest_release(
        &source,
        &request.release_url,
        &request.current_tag,
        request.platform,
    ))?;

    output::render(
        outcome.as_ref(),
        &request.current_tag,
        request.platform,
        cli.json,
    )
}
