//! Guide command: how to export the required files

use anyhow::Result;

use super::RunContext;

pub fn cmd_guide(ctx: &RunContext) -> Result<()> {
    let manifest = ctx.manifest()?;

    if ctx.ui.json {
        let files: Vec<serde_json::Value> = manifest
            .files()
            .iter()
            .map(|f| {
                serde_json::json!({
                    "name": f.name(),
                    "location": f.location(),
                })
            })
            .collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "guide",
            "command": "guide",
            "required": files,
            "video_url": ctx.config.guide.video_url,
            "pdf_url": ctx.config.guide.pdf_url,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        ctx.ui.renderer().render_guide(&manifest, &ctx.config.guide)
    );
    Ok(())
}
