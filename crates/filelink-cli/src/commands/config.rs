use filelink_core::util::normalize_text_option;
use filelink_core::AccountId;

use crate::cli::ConfigCommands;
use crate::cli_config::CliConfig;
use crate::error::CliError;

pub fn run_config(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init {
            database_path,
            default_account,
            messages_path,
        } => run_config_init(database_path, default_account, messages_path),
    }
}

pub fn run_config_init(
    database_path: Option<String>,
    default_account: Option<String>,
    messages_path: Option<String>,
) -> Result<(), CliError> {
    let mut config = CliConfig::load().map_err(CliError::Config)?;
    merge_config(&mut config, database_path, default_account, messages_path)?;

    let path = config.save().map_err(CliError::Config)?;
    println!("Config written to {}", path.display());
    if config.default_account.is_none() {
        println!("No default account set. Pass --account or set FILELINK_ACCOUNT.");
    }
    Ok(())
}

/// Apply explicitly given values, keeping existing ones otherwise.
pub fn merge_config(
    config: &mut CliConfig,
    database_path: Option<String>,
    default_account: Option<String>,
    messages_path: Option<String>,
) -> Result<(), CliError> {
    if let Some(value) = normalize_text_option(database_path) {
        config.database_path = Some(value);
    }
    if let Some(value) = normalize_text_option(default_account) {
        config.default_account = Some(AccountId::new(value)?.to_string());
    }
    if let Some(value) = normalize_text_option(messages_path) {
        config.messages_path = Some(value);
    }
    Ok(())
}
