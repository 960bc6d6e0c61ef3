use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::error::{Origin, ParseTomlError, SettingsError};
use crate::file_matcher::FileMatcher;
use crate::gate::SeverityOverride;
use crate::rule_set::Rule;
use crate::settings::{LinterSettings, OptionOverride, OptionSettings, Settings};
use crate::severity::Severity;

pub const CONFIG_FILE_NAME: &str = "optlint.toml";

pub fn parse_optlint_toml(path: &Path) -> Result<TomlOptions, ParseTomlError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ParseTomlError::Read(path.to_path_buf(), err))?;
    parse_optlint_toml_str(&contents, path)
}

pub fn parse_optlint_toml_str(contents: &str, path: &Path) -> Result<TomlOptions, ParseTomlError> {
    toml::from_str(contents).map_err(|err| ParseTomlError::Deserialize(path.to_path_buf(), err))
}

#[derive(Clone, Debug, PartialEq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TomlOptions {
    pub lint: Option<LintTomlOptions>,
    /// Analyzer options applied to every file.
    pub options: Option<BTreeMap<String, toml::Value>>,
    pub overrides: Option<Vec<OverrideTomlOptions>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LintTomlOptions {
    pub select: Option<Vec<String>>,
    pub extend_select: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
    pub analyze_generated: Option<bool>,
    pub severity: Option<BTreeMap<String, Severity>>,
}

/// An `[[overrides]]` section: options and severities for a subset of files.
#[derive(Clone, Debug, PartialEq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct OverrideTomlOptions {
    pub files: Vec<String>,
    pub options: Option<BTreeMap<String, toml::Value>>,
    pub severity: Option<BTreeMap<String, Severity>>,
}

impl TomlOptions {
    /// Resolve the options against `root`, the directory containing the
    /// `optlint.toml`.
    pub fn into_settings(self, root: &Path) -> Result<Settings, SettingsError> {
        let lint = self.lint.unwrap_or_default();

        let linter = LinterSettings {
            select: lint.select,
            extend_select: lint.extend_select,
            ignore: lint.ignore,
            analyze_generated: lint.analyze_generated.unwrap_or(false),
            severities: resolve_severities(lint.severity)?,
            overrides: Vec::new(),
        };

        let mut settings = Settings {
            linter,
            options: OptionSettings {
                global: option_values(self.options),
                overrides: Vec::new(),
            },
        };

        for section in self.overrides.unwrap_or_default() {
            let files = FileMatcher::new(root, &section.files)?;

            if section.severity.is_some() {
                settings.linter.overrides.push(SeverityOverride {
                    files: files.clone(),
                    severities: resolve_severities(section.severity)?,
                });
            }
            if section.options.is_some() {
                settings.options.overrides.push(OptionOverride {
                    files,
                    values: option_values(section.options),
                });
            }
        }

        Ok(settings)
    }
}

fn resolve_severities(
    severities: Option<BTreeMap<String, Severity>>,
) -> Result<FxHashMap<Rule, Severity>, SettingsError> {
    severities
        .unwrap_or_default()
        .into_iter()
        .map(|(name, severity)| match Rule::from_name(&name) {
            Some(rule) => Ok((rule, severity)),
            None => Err(SettingsError::UnknownRule { name, origin: Origin::Toml }),
        })
        .collect()
}

/// Convert TOML values to the string values analyzers read. Arrays and
/// tables can't be option values and are dropped.
fn option_values(values: Option<BTreeMap<String, toml::Value>>) -> Vec<(String, String)> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| {
            let value = match value {
                toml::Value::String(value) => value,
                toml::Value::Boolean(value) => value.to_string(),
                toml::Value::Integer(value) => value.to_string(),
                toml::Value::Float(value) => value.to_string(),
                toml::Value::Datetime(value) => value.to_string(),
                toml::Value::Array(_) | toml::Value::Table(_) => {
                    warn!("Ignoring option `{key}`: its value must be a string, a boolean or a number");
                    return None;
                }
            };
            Some((key, value))
        })
        .collect()
}
