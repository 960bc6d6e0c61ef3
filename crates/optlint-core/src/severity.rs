use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity a rule reports at, as written in `[lint.severity]`.
///
/// `None` turns the rule off entirely. `Silent` still counts as an active
/// rule: it produces diagnostics, they are just not meant to be shown by
/// default in editors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Silent,
    Suggestion,
    #[default]
    Warning,
    Error,
}

impl Severity {
    pub fn is_enabled(self) -> bool {
        self != Severity::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Silent => "silent",
            Severity::Suggestion => "suggestion",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
