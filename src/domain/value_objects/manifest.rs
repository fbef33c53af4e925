//! Required File Manifest
//!
//! The fixed list of file names a participant must supply. Loaded once at
//! startup and never mutated afterwards.

/// Default required file names and where the export stores each one.
///
/// The second column is informational only; matching uses the file name.
pub const FACEBOOK_EXPORT: &[(&str, &str)] = &[
    (
        "time_spent_on_facebook.json",
        "Your_facebook_activity/other_activity",
    ),
    (
        "your_comment_active_days.json",
        "Your_facebook_activity/comments_and_reactions",
    ),
    (
        "facebook_reels_usage_information.json",
        "Logged_information/other_logged_information",
    ),
    (
        "your_notifications_tab_activity.json",
        "Logged_information/notifications",
    ),
    (
        "your_facebook_watch_activity_in_the_last_28_days.json",
        "Logged_information/other_logged_information",
    ),
];

/// One required file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFile {
    name: String,
    location: Option<String>,
}

impl RequiredFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Folder inside the export archive that normally holds this file
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// `location/name`, or just the name when no location is known
    pub fn export_path(&self) -> String {
        match &self.location {
            Some(location) => format!("{}/{}", location, self.name),
            None => self.name.clone(),
        }
    }
}

/// Ordered, duplicate-free set of required file names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredManifest {
    files: Vec<RequiredFile>,
}

impl RequiredManifest {
    /// Build a manifest from names, keeping the first occurrence of duplicates.
    ///
    /// Returns `None` when no non-blank name remains.
    pub fn from_names<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut files: Vec<RequiredFile> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || files.iter().any(|f| f.name == name) {
                continue;
            }
            let location = FACEBOOK_EXPORT
                .iter()
                .find(|(known, _)| *known == name)
                .map(|(_, location)| location.to_string());
            files.push(RequiredFile {
                name: name.to_string(),
                location,
            });
        }

        if files.is_empty() {
            None
        } else {
            Some(Self { files })
        }
    }

    /// The five files requested from a Facebook "Download your information" export
    pub fn facebook_export() -> Self {
        Self {
            files: FACEBOOK_EXPORT
                .iter()
                .map(|(name, location)| RequiredFile {
                    name: name.to_string(),
                    location: Some(location.to_string()),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[RequiredFile] {
        &self.files
    }

    /// Names in manifest order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.name.as_str())
    }

    /// Exact name membership
    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f.name == name)
    }

    /// First manifest name that `path` ends with.
    ///
    /// Plain string suffix, so any containing folder structure is tolerated.
    pub fn match_suffix(&self, path: &str) -> Option<&str> {
        self.names().find(|name| path.ends_with(name))
    }
}

impl Default for RequiredManifest {
    fn default() -> Self {
        Self::facebook_export()
    }
}
