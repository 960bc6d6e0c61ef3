use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::registry::LegacyOption;
use crate::rule_set::Rule;
use crate::severity::Severity;

/// 1-based position in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

impl Location {
    /// Diagnostics that concern the whole file are reported here.
    pub const TOP_LEVEL: Location = Location { row: 1, column: 1 };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ViolationData {
    pub name: String,
    pub body: String,
    pub suggestion: Option<String>,
}

impl ViolationData {
    pub fn new(name: String, body: String, suggestion: Option<String>) -> Self {
        Self { name, body, suggestion }
    }
}

/// The obsolete option a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ObsoleteOption {
    pub legacy_key: String,
    pub current_key: String,
    pub recommended_value: String,
    /// The rule configured by the current option.
    pub rule: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: ViolationData,
    pub filename: PathBuf,
    pub location: Location,
    pub severity: Severity,
    pub option: ObsoleteOption,
}

impl Diagnostic {
    pub fn obsolete_option(
        legacy: &LegacyOption,
        recommended_value: &str,
        filename: PathBuf,
        severity: Severity,
    ) -> Self {
        let current = legacy.current_option();
        let body = format!(
            "Option '{}' is obsolete. Use option '{}' with value '{}' instead.",
            legacy.key, current.key, recommended_value
        );
        let suggestion = format!("{} = {}", current.key, recommended_value);

        Self {
            message: ViolationData::new(Rule::ObsoleteOption.name().to_string(), body, Some(suggestion)),
            filename,
            location: Location::TOP_LEVEL,
            severity,
            option: ObsoleteOption {
                legacy_key: legacy.key.to_string(),
                current_key: current.key.to_string(),
                recommended_value: recommended_value.to_string(),
                rule: current.rule.name().to_string(),
            },
        }
    }
}

impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.filename
            .cmp(&other.filename)
            .then_with(|| self.location.cmp(&other.location))
            .then_with(|| self.option.legacy_key.cmp(&other.option.legacy_key))
            .then_with(|| self.message.body.cmp(&other.message.body))
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{}:{}] {} {}",
            self.filename.to_string_lossy().white().bold(),
            self.location.row,
            self.location.column,
            self.message.name.red().bold(),
            self.message.body
        )
    }
}

/// Receives the diagnostics produced while validating a file.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
