//! Output Rendering
//!
//! Text and JSON renderings of intake sessions and admin listings. Text
//! renderers return strings; the binary decides where they go.

use crossterm::style::{Color, Stylize};
use serde_json::json;
use unicode_width::UnicodeWidthStr;

use crate::application::{IntakeStatus, ParticipantListing};
use crate::config::GuideConfig;
use crate::domain::entities::IntakeSession;
use crate::domain::ports::UserFiles;
use crate::domain::value_objects::{RequiredManifest, UploadDate};

/// Extra file names listed before collapsing into "and N more"
pub const EXTRAS_PREVIEW: usize = 5;

/// Export walkthrough, one titled group of steps per stage
pub const GUIDE_STEPS: &[(&str, &[&str])] = &[
    (
        "Step 1 - Go to Facebook Data Settings",
        &[
            "Open Settings & Privacy in your Facebook account.",
            "Search and open 'Download your information'.",
            "Choose 'Export your information' option.",
        ],
    ),
    (
        "Step 2 - Create and Customize Export",
        &[
            "Click 'Create Export' and choose your Facebook profile.",
            "Select 'Export to device'.",
            "Pick required Custom information categories.",
            "Set Date Range: Last Year, Format: JSON, Quality: High.",
            "Start export and confirm with your password.",
        ],
    ),
    (
        "Step 3 - Download and Upload Files",
        &[
            "Wait for the export to be ready and download the ZIP file.",
            "Upload the ZIP as-is, or extract it and upload the required JSON files.",
        ],
    ),
];

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    bullet: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            bullet: "•",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[MISSING]",
            bullet: "-",
        }
    }
}

/// The first `EXTRAS_PREVIEW` extras and how many were left out
pub fn extras_preview(extra: &[String]) -> (&[String], usize) {
    let shown = extra.len().min(EXTRAS_PREVIEW);
    (&extra[..shown], extra.len() - shown)
}

/// Text renderer for terminal output
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: false,
            unicode: true,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.bold())
        } else {
            text.to_string()
        }
    }

    /// Export steps, required files with their export locations, and links
    pub fn render_guide(&self, manifest: &RequiredManifest, guide: &GuideConfig) -> String {
        let icons = self.icons();
        let mut out = String::new();

        for (title, steps) in GUIDE_STEPS {
            out.push_str(&self.heading(title));
            out.push('\n');
            for step in *steps {
                out.push_str(&format!("  {} {}\n", icons.bullet, step));
            }
            out.push('\n');
        }

        out.push_str(&self.heading(&format!("Required files ({})", manifest.len())));
        out.push('\n');
        for file in manifest.files() {
            out.push_str(&format!("  {} {}\n", icons.bullet, file.name()));
            if let Some(location) = file.location() {
                out.push_str(&format!(
                    "      {}\n",
                    self.paint(&format!("found in {}/", location), Color::DarkGrey)
                ));
            }
        }

        let links: Vec<(&str, &str)> = [
            ("Video guide", guide.video_url.as_deref()),
            ("PDF guide", guide.pdf_url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect();
        if !links.is_empty() {
            out.push('\n');
            for (label, url) in links {
                out.push_str(&format!("{}: {}\n", label, url));
            }
        }

        out
    }

    /// Selected, missing and extra files, then progress and status
    pub fn render_intake(
        &self,
        session: &IntakeSession,
        status: &IntakeStatus,
        progress: &str,
    ) -> String {
        let icons = self.icons();
        let mut out = String::new();

        if !session.accepted().is_empty() {
            out.push_str(&self.heading("Selected files:"));
            out.push('\n');
            for file in session.accepted() {
                out.push_str(&format!(
                    "  {} {}\n",
                    self.paint(icons.check, Color::Green),
                    file.name()
                ));
            }
        }

        if !session.missing().is_empty() && !session.is_locked() {
            out.push_str(&self.heading("Missing files:"));
            out.push('\n');
            for name in session.missing() {
                out.push_str(&format!(
                    "  {} {}\n",
                    self.paint(icons.cross, Color::Red),
                    name
                ));
            }
        }

        if !session.extra().is_empty() {
            let (shown, hidden) = extras_preview(session.extra());
            out.push_str(&self.heading("Extra files (not required):"));
            out.push('\n');
            for name in shown {
                out.push_str(&format!(
                    "  {} {}\n",
                    icons.bullet,
                    self.paint(name, Color::DarkGrey)
                ));
            }
            if hidden > 0 {
                out.push_str(&format!("  ... and {} more\n", hidden));
            }
        }

        if !session.is_locked() {
            out.push_str(progress);
            out.push('\n');
        }
        let line = self.render_status(status);
        if !line.is_empty() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Size and content fingerprint of each staged file
    pub fn render_file_details(&self, session: &IntakeSession) -> String {
        let width = session
            .accepted()
            .iter()
            .map(|f| f.name().width())
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for file in session.accepted() {
            let pad = width - file.name().width();
            out.push_str(&format!(
                "  {}{}  {}\n",
                file.name(),
                " ".repeat(pad),
                self.paint(
                    &format!("{} bytes  {}", file.size(), file.fingerprint().short()),
                    Color::DarkGrey
                )
            ));
        }
        out
    }

    /// Status message colored by outcome
    pub fn render_status(&self, status: &IntakeStatus) -> String {
        let message = status.message();
        if message.is_empty() {
            return message;
        }
        let color = match status {
            _ if status.is_problem() => Color::Red,
            IntakeStatus::NothingNew | IntakeStatus::AlreadySubmitted { .. } => Color::Yellow,
            IntakeStatus::Uploading => Color::Cyan,
            _ => Color::Green,
        };
        self.paint(&message, color)
    }

    /// Participants table with pagination footer
    pub fn render_participants(&self, listing: &ParticipantListing) -> String {
        let headers = ["ID", "Email", "Uploaded", "Mail 1", "Mail 2", "Upload date"];
        let yes_no = |b: bool| (if b { "yes" } else { "no" }).to_string();
        let rows: Vec<[String; 6]> = listing
            .page
            .participants
            .iter()
            .map(|p| {
                [
                    p.id.to_string(),
                    p.email.clone(),
                    yes_no(p.file_status),
                    yes_no(p.send_mail_01),
                    yes_no(p.send_mail_02),
                    p.date_uploaded
                        .as_deref()
                        .map(|d| UploadDate::parse(d).display_date())
                        .unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        let mut out = String::new();
        let header_line = join_padded(headers.iter().copied(), &widths);
        out.push_str(&self.heading(&header_line));
        out.push('\n');
        for row in &rows {
            out.push_str(&join_padded(row.iter().map(String::as_str), &widths));
            out.push('\n');
        }
        if rows.is_empty() {
            out.push_str("No participants found.\n");
        }
        out.push_str(&self.paint(
            &format!(
                "Page {} of {} ({} participants)",
                listing.page_number, listing.page_count, listing.page.total
            ),
            Color::DarkGrey,
        ));
        out.push('\n');
        out
    }

    /// One participant's stored files
    pub fn render_files(&self, files: &UserFiles) -> String {
        let icons = self.icons();
        if files.uploaded_files.is_empty() {
            return "No files uploaded.\n".to_string();
        }
        let mut out = String::new();
        out.push_str(&self.heading(&format!(
            "Uploaded files ({}):",
            files.uploaded_files.len()
        )));
        out.push('\n');
        for name in &files.uploaded_files {
            out.push_str(&format!("  {} {}\n", icons.bullet, name));
        }
        out
    }
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = widths[i].saturating_sub(cell.width());
        if i + 1 < widths.len() {
            line.push_str(&" ".repeat(pad));
        }
    }
    line
}

/// Session summary as a JSON event
pub fn intake_summary_json(
    command: &str,
    session: &IntakeSession,
    status: &IntakeStatus,
    progress: &str,
) -> serde_json::Value {
    json!({
        "event": "summary",
        "command": command,
        "participant": session.participant(),
        "state": session.state().as_str(),
        "selected": session.accepted().iter().map(|f| f.name()).collect::<Vec<_>>(),
        "missing": session.missing(),
        "extra": session.extra(),
        "found": session.found_count(),
        "total": session.manifest().len(),
        "progress": progress,
        "status": status.code(),
        "message": status.message(),
    })
}

/// Participant listing as a JSON event
pub fn participants_json(listing: &ParticipantListing) -> serde_json::Value {
    json!({
        "event": "participants",
        "command": "admin",
        "page": listing.page_number,
        "page_count": listing.page_count,
        "total": listing.page.total,
        "participants": listing.page.participants,
    })
}
