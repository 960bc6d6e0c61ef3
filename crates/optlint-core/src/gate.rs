//! Whether a rule is switched on for a given file.

use rustc_hash::FxHashMap;

use crate::file_matcher::FileMatcher;
use crate::rule_set::{Rule, RuleSet};
use crate::severity::Severity;
use crate::unit::SourceUnit;

/// Answers "would this rule report anything in this file?".
///
/// Implementations must be pure: the same rule and unit always give the same
/// answer, and nothing is mutated. Files of a run are validated in parallel
/// against a single shared gate.
pub trait RuleGate {
    /// The severity `rule` reports at in `unit`, or `None` if the rule is not
    /// effective there.
    fn effective_severity(&self, rule: Rule, unit: &SourceUnit) -> Option<Severity>;

    fn is_effective(&self, rule: Rule, unit: &SourceUnit) -> bool {
        self.effective_severity(rule, unit).is_some()
    }
}

impl<F> RuleGate for F
where
    F: Fn(Rule, &SourceUnit) -> Option<Severity>,
{
    fn effective_severity(&self, rule: Rule, unit: &SourceUnit) -> Option<Severity> {
        self(rule, unit)
    }
}

/// Severities that only apply to the files matched by an `[[overrides]]`
/// section.
#[derive(Debug, Clone)]
pub struct SeverityOverride {
    pub files: FileMatcher,
    pub severities: FxHashMap<Rule, Severity>,
}

/// Run-wide settings deciding which rules are effective.
#[derive(Debug, Clone)]
pub struct CompilationSettings {
    /// Rules selected for the run. Unselected rules are never effective.
    pub rules: RuleSet,
    /// Severities from `[lint.severity]`.
    pub severities: FxHashMap<Rule, Severity>,
    /// Per-path severities, in declaration order. Later sections win.
    pub overrides: Vec<SeverityOverride>,
    /// When `false`, no rule is effective in generated code.
    pub analyze_generated: bool,
}

impl Default for CompilationSettings {
    fn default() -> Self {
        Self {
            rules: RuleSet::all(),
            severities: FxHashMap::default(),
            overrides: Vec::new(),
            analyze_generated: false,
        }
    }
}

impl CompilationSettings {
    /// The configured severity of `rule` for `unit`, before selection and
    /// generated code are taken into account.
    pub fn configured_severity(&self, rule: Rule, unit: &SourceUnit) -> Severity {
        self.overrides
            .iter()
            .rev()
            .filter(|section| section.severities.contains_key(&rule))
            .find(|section| section.files.matches(&unit.path))
            .and_then(|section| section.severities.get(&rule))
            .or_else(|| self.severities.get(&rule))
            .copied()
            .unwrap_or_else(|| rule.default_severity())
    }
}

impl RuleGate for CompilationSettings {
    fn effective_severity(&self, rule: Rule, unit: &SourceUnit) -> Option<Severity> {
        if !self.rules.contains(&rule) {
            return None;
        }
        if unit.is_generated && !self.analyze_generated {
            return None;
        }
        Some(self.configured_severity(rule, unit)).filter(|severity| severity.is_enabled())
    }
}
