//! Interactive intake: add, review and submit files from a menu

use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use is_terminal::IsTerminal;

use xdetex::infrastructure::LocalFs;
use xdetex::presentation::factory;
use xdetex::XdetexError;

use super::RunContext;

pub fn cmd_interactive(ctx: &RunContext, email: &str) -> Result<()> {
    if ctx.ui.json || !std::io::stdin().is_terminal() {
        bail!("interactive mode needs a terminal; use `xdetex submit` instead");
    }

    let client = factory::create_portal_client(&ctx.config)?;
    let manifest = ctx.manifest()?;
    let events = factory::create_event_sink(false, ctx.ui.verbose);
    let mut intake = factory::create_intake_use_case(&client, email, manifest, events);
    let renderer = ctx.ui.renderer();

    println!("Signed in as {}\n", email);
    if intake.session().is_locked() {
        println!("{}", renderer.render_status(intake.status()));
        return Ok(());
    }

    let items = [
        "[1] Add files (JSON or ZIP)",
        "[2] Remove a file",
        "[3] Show status",
        "[4] Submit",
        "[5] Quit",
    ];

    loop {
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let input: String = Input::new()
                    .with_prompt("Paths (separated by spaces)")
                    .interact_text()?;
                let paths: Vec<&str> = input.split_whitespace().collect();
                if paths.is_empty() {
                    continue;
                }
                let offer = match LocalFs::new().read_selection(&paths) {
                    Ok(offer) => offer,
                    Err(e) => {
                        eprintln!("[WARN] {}", e);
                        continue;
                    }
                };
                match intake.offer(offer) {
                    Ok(_) | Err(XdetexError::CorruptArchive { .. }) => {}
                    Err(e) => return Err(e.into()),
                }
                print!(
                    "{}",
                    renderer.render_intake(intake.session(), intake.status(), &intake.progress())
                );
            }
            1 => {
                let names: Vec<String> = intake
                    .session()
                    .accepted()
                    .iter()
                    .map(|f| f.name().to_string())
                    .collect();
                if names.is_empty() {
                    println!("No files selected yet.");
                    continue;
                }
                let index = Select::new()
                    .with_prompt("Remove which file?")
                    .items(&names)
                    .default(0)
                    .interact()?;
                intake.remove(&names[index])?;
                println!("{}", intake.progress());
            }
            2 => {
                print!(
                    "{}",
                    renderer.render_intake(intake.session(), intake.status(), &intake.progress())
                );
            }
            3 => {
                let outcome = intake.submit(&client);
                println!("{}", renderer.render_status(intake.status()));
                match outcome {
                    Ok(_) => return Ok(()),
                    Err(e) if e.is_retryable() => eprint!("{}", crate::ui::error::format_xdetex_error(&e)),
                    Err(XdetexError::IncompleteSubmission { .. }) => {}
                    Err(e) => return Err(e.into()),
                }
            }
            _ => return Ok(()),
        }
    }
}
