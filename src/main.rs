mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;

use std::process::ExitCode;

use clap::Parser;
use dioxus_logger::tracing;

use crate::{
    bot::lifecycle::BotState,
    config::{Cli, Config},
    error::AppError,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    if let Err(e) = startup::init_logging() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    BotState::Unauthenticated.log();
    let config = Config::from_cli(cli)?;

    tracing::info!(
        "Resolving public IP via {} provider(s): {}",
        config.ip_providers.len(),
        config.ip_providers.join(", ")
    );

    let http_client = startup::setup_reqwest_client()?;
    let client = bot::start::init_bot(&config, http_client).await?;

    bot::start::run_bot(client).await
}
