//! Status command: has a participant already uploaded?

use anyhow::Result;

use xdetex::domain::ports::UploadGateway;
use xdetex::domain::value_objects::UploadDate;
use xdetex::presentation::factory;

use super::RunContext;

pub fn cmd_status(ctx: &RunContext, email: &str) -> Result<()> {
    let client = factory::create_portal_client(&ctx.config)?;
    let check = client.check_upload(email)?;
    let display_date = check
        .last_uploaded_date
        .as_deref()
        .map(|d| UploadDate::parse(d).display_date());

    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "status",
            "command": "status",
            "participant": email,
            "uploaded": check.uploaded,
            "last_uploaded_date": check.last_uploaded_date,
            "display_date": display_date,
        }))?;
        return Ok(());
    }

    match (check.uploaded, display_date) {
        (true, Some(date)) => println!("{} uploaded their files on {}.", email, date),
        (true, None) => println!("{} has already uploaded their files.", email),
        (false, _) => println!("No upload recorded for {}.", email),
    }
    Ok(())
}
