use std::path::Path;

use rustc_hash::FxHashMap;

use crate::file_matcher::FileMatcher;
use crate::gate::SeverityOverride;
use crate::options::ResolvedConfig;
use crate::rule_set::Rule;
use crate::severity::Severity;

/// Resolved configuration settings used within optlint
#[derive(Debug, Default)]
pub struct Settings {
    pub linter: LinterSettings,
    pub options: OptionSettings,
}

#[derive(Debug, Default)]
pub struct LinterSettings {
    /// Rule names as written in `optlint.toml`. Validated when the run
    /// configuration is built, together with the command line ones.
    pub select: Option<Vec<String>>,
    pub extend_select: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
    pub analyze_generated: bool,
    pub severities: FxHashMap<Rule, Severity>,
    pub overrides: Vec<SeverityOverride>,
}

/// Analyzer options from `[options]` and the `options` of `[[overrides]]`.
#[derive(Debug, Default)]
pub struct OptionSettings {
    pub global: Vec<(String, String)>,
    pub overrides: Vec<OptionOverride>,
}

#[derive(Debug, Clone)]
pub struct OptionOverride {
    pub files: FileMatcher,
    pub values: Vec<(String, String)>,
}

impl OptionSettings {
    /// The options that apply to `path`: the global ones, then every
    /// matching override in declaration order, later values replacing
    /// earlier ones.
    pub fn resolve(&self, path: &Path) -> ResolvedConfig {
        let mut resolved: ResolvedConfig = self
            .global
            .iter()
            .map(|(key, value)| (key, value.clone()))
            .collect();

        for section in &self.overrides {
            if section.files.matches(path) {
                resolved.extend(section.values.iter().map(|(key, value)| (key, value.clone())));
            }
        }

        resolved
    }
}
