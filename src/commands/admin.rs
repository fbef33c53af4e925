//! Admin console commands

use std::path::Path;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use is_terminal::IsTerminal;

use xdetex::application::DeleteOutcome;
use xdetex::domain::ports::{EmailRound, ParticipantQuery};
use xdetex::infrastructure::LocalFs;
use xdetex::presentation::factory;
use xdetex::presentation::output::participants_json;
use xdetex::presentation::AdminCommands;

use super::RunContext;

pub fn cmd_admin(ctx: &RunContext, command: &AdminCommands) -> Result<()> {
    let admin = factory::create_admin_use_case(&ctx.config)?;
    let renderer = ctx.ui.renderer();

    match command {
        AdminCommands::Participants {
            page,
            page_size,
            sort_by_status,
        } => {
            let listing = admin.participants(ParticipantQuery {
                page: *page,
                page_size: page_size.unwrap_or(ctx.config.admin.page_size),
                sort_by_status: *sort_by_status,
            })?;
            if ctx.ui.json {
                crate::ui::json::emit(participants_json(&listing))?;
            } else {
                print!("{}", renderer.render_participants(&listing));
            }
        }

        AdminCommands::Files { email } => {
            let files = admin.files(email)?;
            if ctx.ui.json {
                crate::ui::json::emit(serde_json::json!({
                    "event": "files",
                    "command": "admin",
                    "email": email,
                    "files": files.uploaded_files,
                }))?;
            } else {
                print!("{}", renderer.render_files(&files));
            }
        }

        AdminCommands::Delete { email, file, yes } => {
            let target = match file {
                Some(name) => format!("{} from {}", name, email),
                None => format!("all files of {}", email),
            };
            if !yes && !confirm_delete(ctx, &target)? {
                println!("Aborted.");
                return Ok(());
            }

            let outcome = match file {
                Some(name) => admin.delete_file(email, name)?,
                None => admin.delete_all(email)?,
            };
            print_delete(ctx, email, &target, &outcome)?;
        }

        AdminCommands::Download { output } => {
            let bytes = admin.download()?;
            LocalFs::new().write_atomic(output, &bytes)?;
            print_download(ctx, output, bytes.len())?;
        }

        AdminCommands::SendRound { round } => {
            let response = admin.send_round(*round)?;
            print_round(ctx, *round, &response)?;
        }
    }

    Ok(())
}

fn confirm_delete(ctx: &RunContext, target: &str) -> Result<bool> {
    if ctx.ui.json || !std::io::stdin().is_terminal() {
        bail!("refusing to delete {} without --yes", target);
    }
    Ok(Confirm::new()
        .with_prompt(format!("Delete {}?", target))
        .default(false)
        .interact()?)
}

fn print_delete(ctx: &RunContext, email: &str, target: &str, outcome: &DeleteOutcome) -> Result<()> {
    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "deleted",
            "command": "admin",
            "email": email,
            "response": outcome.response,
            "remaining": outcome.remaining.uploaded_files,
        }))?;
        return Ok(());
    }

    println!("Deleted {}.", target);
    print!("{}", ctx.ui.renderer().render_files(&outcome.remaining));
    Ok(())
}

fn print_download(ctx: &RunContext, output: &Path, size: usize) -> Result<()> {
    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "downloaded",
            "command": "admin",
            "path": output.display().to_string(),
            "bytes": size,
        }))?;
    } else {
        println!("Saved {} bytes to {}", size, output.display());
    }
    Ok(())
}

fn print_round(ctx: &RunContext, round: EmailRound, response: &serde_json::Value) -> Result<()> {
    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "email_sent",
            "command": "admin",
            "round": round.to_string(),
            "response": response,
        }))?;
        return Ok(());
    }

    match response.get("message").and_then(|m| m.as_str()) {
        Some(message) => println!("Sent {}: {}", round, message),
        None => println!("Sent {}.", round),
    }
    Ok(())
}
