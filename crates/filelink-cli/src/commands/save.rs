use filelink_core::Field;

use crate::cli::SaveArgs;
use crate::commands::common::{
    format_status_line, load_localizer, open_database, open_form, CliForm, Context,
};
use crate::error::CliError;

pub async fn run_save(context: &Context, args: SaveArgs) -> Result<(), CliError> {
    let account_id = context.account_id()?;
    let localizer = load_localizer(context.messages_path.as_deref())?;
    let db = open_database(&context.db_path).await?;
    let mut form = open_form(&db, account_id, localizer);

    let loaded = form.load().await;
    if loaded.is_error() {
        return Err(CliError::LoadFailed(loaded.text));
    }

    apply_edits(&mut form, args);

    let config = form
        .begin_save()
        .map_err(|status| CliError::SaveFailed(status.text))?;
    if let Some(saving) = form.status() {
        eprintln!("{}", format_status_line(saving));
    }

    let result = form.persist(&config).await;
    let status = form.finish_save(result);
    if status.is_error() {
        return Err(CliError::SaveFailed(status.text));
    }

    println!("{}", format_status_line(&status));
    Ok(())
}

/// Field edits in form order, skipping fields that were not given.
pub fn field_edits(args: SaveArgs) -> Vec<(Field, String)> {
    [
        (Field::Endpoint, args.endpoint),
        (Field::Region, args.region),
        (Field::Bucket, args.bucket),
        (Field::Prefix, args.prefix),
        (Field::AccessKey, args.access_key),
        (Field::SecretKey, args.secret_key),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|value| (field, value)))
    .collect()
}

fn apply_edits(form: &mut CliForm<'_>, args: SaveArgs) {
    for (field, value) in field_edits(args) {
        form.set_field(field, value);
        if let Some(warning) = form.blur(field) {
            eprintln!("{}", format_status_line(&warning));
        }
    }
}
