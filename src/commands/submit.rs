//! Submit command: reconcile a selection and upload it

use std::path::PathBuf;

use anyhow::Result;

use xdetex::infrastructure::LocalFs;
use xdetex::presentation::factory::{self, ConcreteIntakeUseCase};
use xdetex::presentation::output::intake_summary_json;
use xdetex::XdetexError;

use super::RunContext;

/// Returns whether the upload was accepted (or, with `dry_run`, would be
/// attempted)
pub fn cmd_submit(ctx: &RunContext, email: &str, paths: &[PathBuf], dry_run: bool) -> Result<bool> {
    let client = factory::create_portal_client(&ctx.config)?;
    let manifest = ctx.manifest()?;
    let events = factory::create_event_sink(ctx.ui.json, ctx.ui.verbose);
    let mut intake = factory::create_intake_use_case(&client, email, manifest, events);

    if intake.session().is_locked() {
        report(ctx, &intake)?;
        return Ok(false);
    }

    let offer = LocalFs::new().read_selection(paths)?;
    match intake.offer(offer) {
        Ok(_) => {}
        Err(XdetexError::CorruptArchive { .. }) => {
            report(ctx, &intake)?;
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    }

    if !ctx.ui.json {
        let renderer = ctx.ui.renderer();
        print!(
            "{}",
            renderer.render_intake(intake.session(), intake.status(), &intake.progress())
        );
        if ctx.ui.verbose > 0 {
            print!("{}", renderer.render_file_details(intake.session()));
        }
    }

    if dry_run {
        if ctx.ui.json {
            report(ctx, &intake)?;
        } else if intake.session().ready_to_submit() {
            println!("Dry run: {} files would be uploaded.", intake.session().accepted().len());
        }
        return Ok(intake.session().ready_to_submit());
    }

    let outcome = intake.submit(&client);

    if ctx.ui.json {
        report(ctx, &intake)?;
    } else {
        println!("{}", ctx.ui.renderer().render_status(intake.status()));
    }

    match outcome {
        Ok(_) => Ok(true),
        Err(XdetexError::IncompleteSubmission { .. }) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn report(ctx: &RunContext, intake: &ConcreteIntakeUseCase) -> Result<()> {
    let progress = intake.progress();
    if ctx.ui.json {
        crate::ui::json::emit(intake_summary_json(
            "submit",
            intake.session(),
            intake.status(),
            &progress,
        ))?;
    } else {
        print!(
            "{}",
            ctx.ui
                .renderer()
                .render_intake(intake.session(), intake.status(), &progress)
        );
    }
    Ok(())
}
