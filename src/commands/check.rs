//! Check command: reconcile a selection locally, without uploading

use std::path::PathBuf;

use anyhow::Result;

use xdetex::infrastructure::LocalFs;
use xdetex::presentation::factory;
use xdetex::presentation::output::intake_summary_json;
use xdetex::XdetexError;

use super::RunContext;

/// Returns whether every required file was found
pub fn cmd_check(ctx: &RunContext, paths: &[PathBuf]) -> Result<bool> {
    let manifest = ctx.manifest()?;
    let events = factory::create_event_sink(ctx.ui.json, ctx.ui.verbose);
    let mut intake = factory::create_local_intake(manifest, events);

    let offer = LocalFs::new().read_selection(paths)?;
    match intake.offer(offer) {
        Ok(_) | Err(XdetexError::CorruptArchive { .. }) => {}
        Err(e) => return Err(e.into()),
    }

    let progress = intake.progress();
    if ctx.ui.json {
        crate::ui::json::emit(intake_summary_json(
            "check",
            intake.session(),
            intake.status(),
            &progress,
        ))?;
    } else {
        let renderer = ctx.ui.renderer();
        print!(
            "{}",
            renderer.render_intake(intake.session(), intake.status(), &progress)
        );
        if ctx.ui.verbose > 0 {
            print!("{}", renderer.render_file_details(intake.session()));
        }
    }

    Ok(intake.session().ready_to_submit())
}
