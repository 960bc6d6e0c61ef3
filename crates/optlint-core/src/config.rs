use std::path::PathBuf;

use crate::cancellation::CancellationToken;
use crate::error::{Origin, SettingsError};
use crate::gate::CompilationSettings;
use crate::rule_set::{Rule, RuleSet};
use crate::settings::{OptionSettings, Settings};

/// Keyword selecting every rule in `select` and `extend-select`.
const ALL_RULES: &str = "ALL";

/// Arguments provided in the CLI.
#[derive(Clone, Debug, Default)]
pub struct ArgsConfig {
    /// Comma-separated rule names. Empty when not provided.
    pub select: String,
    pub extend_select: String,
    pub ignore: String,
}

/// Everything needed to check a group of files sharing one `optlint.toml`.
#[derive(Debug, Default)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub compilation: CompilationSettings,
    pub options: OptionSettings,
    pub cancellation: CancellationToken,
}

/// Combine the CLI arguments with the settings of the nearest
/// `optlint.toml` (if any).
///
/// `--select` replaces `select` from the TOML, while `extend-select` and
/// `ignore` from both sources add up. `obsolete_option` is always selected
/// unless it is explicitly ignored.
pub fn build_config(
    args: &ArgsConfig,
    settings: Option<Settings>,
    paths: Vec<PathBuf>,
) -> anyhow::Result<Config> {
    let Settings { linter, options } = settings.unwrap_or_default();

    let cli_select = parse_rules_cli(&args.select, Origin::Cli)?;
    let cli_extend_select = parse_rules_cli(&args.extend_select, Origin::Cli)?;
    let cli_ignore = parse_rules_cli(&args.ignore, Origin::Cli)?;

    let toml_select = linter.select.as_deref().map(parse_rules_toml).transpose()?;
    let toml_extend_select = linter.extend_select.as_deref().map(parse_rules_toml).transpose()?;
    let toml_ignore = linter.ignore.as_deref().map(parse_rules_toml).transpose()?;

    let mut rules = match (cli_select, toml_select) {
        (Some(cli), _) => cli,
        (None, Some(toml)) => toml,
        (None, None) => RuleSet::all(),
    };
    for rule in cli_extend_select.iter().chain(toml_extend_select.iter()).flat_map(|set| set.iter()) {
        rules.insert(rule);
    }
    rules.insert(Rule::ObsoleteOption);
    for rule in cli_ignore.iter().chain(toml_ignore.iter()).flat_map(|set| set.iter()) {
        rules.remove(rule);
    }

    tracing::debug!(
        rules = ?rules.iter().map(Rule::name).collect::<Vec<_>>(),
        "selected rules"
    );

    Ok(Config {
        paths,
        compilation: CompilationSettings {
            rules,
            severities: linter.severities,
            overrides: linter.overrides,
            analyze_generated: linter.analyze_generated,
        },
        options,
        cancellation: CancellationToken::new(),
    })
}

/// Parse a comma-separated list of rule names. Returns `None` when no rule
/// was passed, so that the TOML value can apply instead.
pub fn parse_rules_cli(rules: &str, origin: Origin) -> Result<Option<RuleSet>, SettingsError> {
    let names: Vec<&str> = rules
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        return Ok(None);
    }

    parse_rule_names(&names, origin).map(Some)
}

/// Unlike on the command line, an empty list in the TOML is meaningful:
/// `select = []` selects no rule.
fn parse_rules_toml(names: &[String]) -> Result<RuleSet, SettingsError> {
    let names: Vec<&str> = names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect();
    parse_rule_names(&names, Origin::Toml)
}

fn parse_rule_names(names: &[&str], origin: Origin) -> Result<RuleSet, SettingsError> {
    let mut set = RuleSet::empty();
    for name in names {
        if *name == ALL_RULES {
            return Ok(RuleSet::all());
        }
        match Rule::from_name(name) {
            Some(rule) => set.insert(rule),
            None => {
                return Err(SettingsError::UnknownRule { name: name.to_string(), origin });
            }
        }
    }
    Ok(set)
}
