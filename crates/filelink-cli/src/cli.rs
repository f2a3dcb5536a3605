use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "filelink")]
#[command(about = "Configure S3-compatible storage for mail accounts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Account identifier whose settings are edited
    #[arg(long, global = true, value_name = "ID")]
    pub account: Option<String>,

    /// Settings page URL; its `accountId` query parameter takes precedence over --account
    #[arg(long, global = true, value_name = "URL")]
    pub page_url: Option<String>,

    /// Optional path to local settings database
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Optional messages.json catalog used for UI text
    #[arg(long, global = true, value_name = "PATH")]
    pub messages: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the stored storage settings for the account
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit and save the account's storage settings
    Save(SaveArgs),
    /// Check a single field value without saving
    Check {
        /// Field to check
        #[arg(value_enum)]
        field: CheckField,
        /// Value to check
        value: String,
    },
    /// Configure CLI defaults
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

/// Field edits applied on top of the stored settings before saving.
#[derive(clap::Args, Debug, Default)]
pub struct SaveArgs {
    /// Hostname of the S3-compatible service (a leading http:// or https:// is dropped)
    #[arg(long, value_name = "HOST")]
    pub endpoint: Option<String>,
    /// Region identifier
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,
    /// Bucket name
    #[arg(long, value_name = "NAME")]
    pub bucket: Option<String>,
    /// Object key prefix
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,
    /// Access key id
    #[arg(long, value_name = "KEY")]
    pub access_key: Option<String>,
    /// Secret access key
    #[arg(long, value_name = "SECRET")]
    pub secret_key: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CheckField {
    Endpoint,
    Bucket,
    Prefix,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize or update the CLI config file
    Init {
        /// Settings database path
        #[arg(long, value_name = "PATH")]
        database_path: Option<String>,
        /// Account used when --account is omitted
        #[arg(long, value_name = "ID")]
        default_account: Option<String>,
        /// messages.json catalog path
        #[arg(long, value_name = "PATH")]
        messages_path: Option<String>,
    },
}
