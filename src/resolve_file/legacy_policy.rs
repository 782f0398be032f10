use super::{SEPARATOR_MARKER, START_MARKER};
use std::path::Path;

/// Extra repair step for files whose conflict markers are broken in a way the
/// general pattern can't match.
pub trait MalformedConflictPolicy {
    /// Whether `path` needs this repair at all.
    fn applies_to(&self, path: &Path) -> bool;

    /// Returns the repaired text, or `None` when `text` doesn't show the defect.
    fn repair(&self, text: &str) -> Option<String>;

    fn name(&self) -> &str;
}

/// A conflict that lost its `<<<<<<< HEAD` line: everything from the first
/// separator on is dropped and the remaining statement gets closed again.
#[derive(Debug, Clone)]
pub struct MissingStartMarker {
    pub file_name: String,
    pub closing_token: String,
}

impl Default for MissingStartMarker {
    fn default() -> Self {
        MissingStartMarker {
            file_name: "Icons.js".to_owned(),
            closing_token: ");".to_owned(),
        }
    }
}

impl MalformedConflictPolicy for MissingStartMarker {
    fn applies_to(&self, path: &Path) -> bool {
        path.to_string_lossy().contains(self.file_name.as_str())
    }

    fn repair(&self, text: &str) -> Option<String> {
        if !text.contains(SEPARATOR_MARKER) || text.contains(START_MARKER) {
            return None;
        }

        let head = text.split(SEPARATOR_MARKER).next().unwrap_or("");
        if head.trim().ends_with(self.closing_token.as_str()) {
            Some(head.to_owned())
        } else {
            Some(format!("{}\n{}\n", head.trim_end(), self.closing_token))
        }
    }

    fn name(&self) -> &str {
        &self.file_name
    }
}
