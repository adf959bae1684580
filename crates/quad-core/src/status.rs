//! Search lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of the current search session.
///
/// ```text
/// idle → loading → success
///                → error
/// ```
///
/// Any state may return to `idle` via a session reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SearchStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_serialization() {
        assert_eq!(serde_json::to_string(&SearchStatus::Loading).unwrap(), "\"loading\"");
        let status: SearchStatus = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(status, SearchStatus::Error);
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(SearchStatus::default(), SearchStatus::Idle);
        assert_eq!(SearchStatus::default().as_str(), "idle");
    }
}
