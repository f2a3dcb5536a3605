//! S3 FileLink CLI - terminal settings page for per-account S3 storage
//!
//! Loads, checks, and saves the S3-compatible storage settings of a mail
//! account, then marks the account configured.

mod cli;
mod cli_config;
mod commands;
mod error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::cli_config::CliConfig;
use crate::commands::check::run_check;
use crate::commands::common::{explicit_account, Context};
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::save::run_save;
use crate::commands::show::run_show;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { json } => {
            let context = resolve_context(cli.account, cli.page_url, cli.db_path, cli.messages)?;
            run_show(&context, json).await?;
        }
        Commands::Save(args) => {
            let context = resolve_context(cli.account, cli.page_url, cli.db_path, cli.messages)?;
            run_save(&context, args).await?;
        }
        Commands::Check { field, value } => run_check(field, &value)?,
        Commands::Config { command } => run_config(command)?,
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}

fn resolve_context(
    account: Option<String>,
    page_url: Option<String>,
    db_path: Option<std::path::PathBuf>,
    messages: Option<std::path::PathBuf>,
) -> Result<Context, CliError> {
    let account = explicit_account(account, page_url.as_deref())?;
    let config = CliConfig::load().map_err(CliError::Config)?;
    Ok(Context::resolve(
        &config,
        account,
        db_path,
        messages,
        |key| std::env::var(key).ok(),
    ))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,filelink=info,filelink_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
