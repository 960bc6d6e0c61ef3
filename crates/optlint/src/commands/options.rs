use anyhow::Result;
use colored::Colorize;
use optlint_core::registry::{LEGACY_OPTIONS, LegacyOption, Recommendation, Trigger};
use serde::Serialize;

use crate::args::OptionsCommand;
use crate::status::ExitStatus;

const WHEN_ENABLED: &[&str] = &["true"];
const WHEN_SET: &[&str] = &["true", "false"];

#[derive(Serialize)]
struct OptionEntry {
    legacy_key: &'static str,
    /// Values of the legacy option that make it reported.
    reported_values: &'static [&'static str],
    current_key: &'static str,
    /// `None` when the current option takes the value of the legacy one.
    recommended_value: Option<&'static str>,
    rule: &'static str,
}

impl From<&LegacyOption> for OptionEntry {
    fn from(legacy: &LegacyOption) -> Self {
        Self {
            legacy_key: legacy.key,
            reported_values: match legacy.trigger {
                Trigger::Enabled => WHEN_ENABLED,
                Trigger::Set => WHEN_SET,
            },
            current_key: legacy.current_key,
            recommended_value: match legacy.recommendation {
                Recommendation::Value(value) => Some(value),
                Recommendation::Carry => None,
            },
            rule: legacy.rule().name(),
        }
    }
}

pub fn options(command: OptionsCommand) -> Result<ExitStatus> {
    let entries: Vec<OptionEntry> = LEGACY_OPTIONS.iter().map(OptionEntry::from).collect();

    if command.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(ExitStatus::Success);
    }

    for entry in &entries {
        println!("{}", format_entry(entry));
    }

    Ok(ExitStatus::Success)
}

fn format_entry(entry: &OptionEntry) -> String {
    let value = entry.recommended_value.unwrap_or("<same value>");
    format!(
        "{} = {} -> {} = {} ({})",
        entry.legacy_key.bold(),
        entry.reported_values.join("|"),
        entry.current_key.green(),
        value,
        entry.rule
    )
}
