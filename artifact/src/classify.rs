#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::{LEGACY_CAPTION, MARKER_PREFIX};

/// `#SLIDE_ID:` followed by a lowercase hex identifier.
static MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("{}([0-9a-f]+)", regex::escape(MARKER_PREFIX))).unwrap());

/// Reference to a persisted artifact found inside assistant text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArtifactId {
    /// Hex identifier carried by a marker; resolvable against the artifact
    /// history endpoint.
    Generated(String),
    /// Pre-marker history record: the legacy caption with no identifier.
    /// Kept as its own variant since there is nothing to look up.
    Legacy,
}

/// What a persisted message body looks like before resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Label {
    Text,
    Artifact(ArtifactId),
}

/// Result of classifying one persisted message body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub label: Label,
    /// Display text with any marker stripped and surrounding space trimmed.
    pub cleaned: String,
}

/// Classify raw assistant text. Pure: resolution of the identifier (and the
/// validity check on whatever it resolves to) happens in the caller.
#[must_use]
pub fn classify(raw: &str) -> Classification {
    if let Some(found) = MARKER.captures(raw) {
        if let (Some(whole), Some(id)) = (found.get(0), found.get(1)) {
            let mut cleaned = String::with_capacity(raw.len());
            cleaned.push_str(&raw[..whole.start()]);
            cleaned.push_str(&raw[whole.end()..]);
            return Classification {
                label: Label::Artifact(ArtifactId::Generated(id.as_str().to_owned())),
                cleaned: cleaned.trim().to_owned(),
            };
        }
    }

    if raw.contains(LEGACY_CAPTION) {
        return Classification {
            label: Label::Artifact(ArtifactId::Legacy),
            cleaned: raw.to_owned(),
        };
    }

    Classification {
        label: Label::Text,
        cleaned: raw.to_owned(),
    }
}

/// True when the text carries a resolvable artifact marker. Convenience for
/// callers that only need to decide whether a lookup is required.
#[must_use]
pub fn has_marker(raw: &str) -> bool {
    MARKER.is_match(raw)
}
