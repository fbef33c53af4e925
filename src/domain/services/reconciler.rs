//! Reconciliation Engine
//!
//! Merges newly offered files into the accepted set and derives which
//! required names are still missing and which names are unexpected.
//!
//! Merge policy is first-seen-wins: an offered file whose name is already
//! accepted (or already offered earlier in the same batch) is dropped, never
//! substituted. Re-offering the same files is therefore idempotent.

use std::collections::HashSet;

use crate::domain::entities::{AcceptedFile, OfferedFile};
use crate::domain::value_objects::RequiredManifest;

/// Result of merging one batch of offered files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Accepted files after the merge, previous entries first
    pub merged: Vec<AcceptedFile>,
    /// Required names not present in `merged`, manifest order
    pub missing: Vec<String>,
    /// Names not in the manifest, de-duplicated, first appearance order
    pub extra: Vec<String>,
    /// Number of required names present in `merged`
    pub found_count: usize,
    /// Names newly added by this batch
    pub added: Vec<String>,
}

impl Reconciliation {
    /// True when the batch contributed no new file.
    pub fn added_nothing(&self) -> bool {
        self.added.is_empty()
    }
}

/// Merge `offered` into `accepted` and recompute derived state.
pub fn reconcile(
    manifest: &RequiredManifest,
    accepted: &[AcceptedFile],
    offered: Vec<OfferedFile>,
) -> Reconciliation {
    let mut seen: HashSet<String> = accepted.iter().map(|f| f.name().to_string()).collect();
    let mut merged: Vec<AcceptedFile> = accepted.to_vec();
    let mut added = Vec::new();

    for file in offered {
        if seen.insert(file.name().to_string()) {
            added.push(file.name().to_string());
            merged.push(AcceptedFile::from(file));
        }
    }

    let (missing, extra) = derive_status(manifest, &merged);
    let found_count = manifest.len() - missing.len();

    Reconciliation {
        merged,
        missing,
        extra,
        found_count,
        added,
    }
}

/// Missing and extra lists for an accepted set
pub fn derive_status(
    manifest: &RequiredManifest,
    accepted: &[AcceptedFile],
) -> (Vec<String>, Vec<String>) {
    let missing = manifest
        .names()
        .filter(|required| !accepted.iter().any(|f| f.name() == *required))
        .map(str::to_string)
        .collect();

    let mut extra = Vec::new();
    for file in accepted {
        push_unique_extra(&mut extra, manifest, file.name());
    }

    (missing, extra)
}

fn push_unique_extra(extra: &mut Vec<String>, manifest: &RequiredManifest, name: &str) {
    if !manifest.contains(name) && !extra.iter().any(|e| e == name) {
        extra.push(name.to_string());
    }
}
