use xdetex::XdetexError;

/// Follow-up hint for errors the user can act on
fn hint(err: &XdetexError) -> Option<&'static str> {
    match err {
        XdetexError::CorruptArchive { .. } => {
            Some("Download the export again, or extract it and select the JSON files directly.")
        }
        XdetexError::IncompleteSubmission { .. } => {
            Some("Run 'xdetex guide' to see where each required file is in the export.")
        }
        XdetexError::UploadFailed { .. } | XdetexError::Http(_) => Some(
            "Your files were kept. Check [api] base_url (or XDETEX_API_BASE_URL) and try again.",
        ),
        XdetexError::InvalidBaseUrl { .. } => {
            Some("Set [api] base_url or XDETEX_API_BASE_URL to an http(s) URL.")
        }
        XdetexError::InvalidConfig { .. } => Some("Fix the config file and try again."),
        _ => None,
    }
}

pub fn format_xdetex_error(err: &XdetexError) -> String {
    match hint(err) {
        Some(h) => format!("[ERROR] {}\n  {}\n", err, h),
        None => format!("[ERROR] {}\n", err),
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(xdetex) = err.downcast_ref::<XdetexError>() {
        return format_xdetex_error(xdetex);
    }

    format!("[ERROR] {}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_submission_points_to_guide() {
        let err = anyhow::Error::new(XdetexError::IncompleteSubmission {
            found: 4,
            total: 5,
            missing: vec!["a.json".to_string()],
        });
        let text = format_error(&err);
        assert!(text.starts_with("[ERROR] cannot submit: 4/5"));
        assert!(text.contains("xdetex guide"));
    }

    #[test]
    fn plain_errors_have_no_hint() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(format_error(&err), "[ERROR] something else\n");
    }
}
