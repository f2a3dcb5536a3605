use crate::commands::common::{
    format_field_lines, format_status_line, load_localizer, open_database, open_form,
    settings_view, Context,
};
use crate::error::CliError;

pub async fn run_show(context: &Context, as_json: bool) -> Result<(), CliError> {
    let account_id = context.account_id()?;
    let localizer = load_localizer(context.messages_path.as_deref())?;
    let db = open_database(&context.db_path).await?;
    let mut form = open_form(&db, account_id, localizer);

    let status = form.load().await;
    if status.is_error() {
        return Err(CliError::LoadFailed(status.text));
    }
    let configured = form.host().is_configured(form.account_id()).await?;

    if as_json {
        let view = settings_view(form.account_id(), configured, status, form.fields());
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let state = if configured {
        "configured"
    } else {
        "not configured"
    };
    println!("Account: {} ({state})", form.account_id());
    println!("{}", format_status_line(&status));
    for line in format_field_lines(form.fields(), form.localizer()) {
        println!("{line}");
    }
    Ok(())
}
