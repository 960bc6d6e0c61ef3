use optlint_core::discovery::{discover_settings, discover_source_files, nearest_settings};
use optlint_core::{config::ArgsConfig, config::build_config, diagnostic::Diagnostic, settings::Settings};

use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::args::CheckCommand;
use crate::output_format::{self, GithubEmitter, print_notes, print_summary};
use crate::statistics::print_statistics;
use crate::status::ExitStatus;

use output_format::{ConciseEmitter, Emitter, JsonEmitter, OutputFormat};

pub fn check(args: CheckCommand) -> Result<ExitStatus> {
    let start = if args.with_timing {
        Some(Instant::now())
    } else {
        None
    };

    let discovered = discover_settings(&args.files)?;

    // Track if we're using a config from a parent directory
    let mut parent_config_path: Option<PathBuf> = None;
    if let ([ds], Ok(current_dir)) = (discovered.as_slice(), env::current_dir())
        && ds.directory != current_dir
    {
        parent_config_path = Some(ds.config_path.clone());
    }

    let mut all_errors = Vec::new();
    let mut paths = Vec::new();
    for entry in discover_source_files(&args.files) {
        match entry {
            Ok(path) => paths.push(path),
            Err(err) => all_errors.push((String::new(), anyhow::Error::new(err))),
        }
    }

    if paths.is_empty() && all_errors.is_empty() {
        println!(
            "{}: {}",
            "Warning".yellow().bold(),
            "No C# files found under the given path(s).".white().bold()
        );
        return Ok(ExitStatus::Success);
    }

    let check_config = ArgsConfig {
        select: args.select.clone(),
        extend_select: args.extend_select.clone(),
        ignore: args.ignore.clone(),
    };

    // Group paths by their closest configuration, so each file is checked
    // with the settings from the nearest optlint.toml.
    let mut groups: BTreeMap<Option<PathBuf>, Vec<PathBuf>> = BTreeMap::new();
    for path in paths {
        let key = nearest_settings(&path, &discovered).map(|ds| ds.directory.clone());
        groups.entry(key).or_default().push(path);
    }

    for (directory, group_paths) in &groups {
        tracing::debug!(
            config = ?directory.as_ref().map(|directory| directory.display().to_string()),
            files = group_paths.len(),
            "grouped files by configuration"
        );
    }

    let mut settings_by_directory: HashMap<PathBuf, Settings> = discovered
        .into_iter()
        .map(|ds| (ds.directory, ds.settings))
        .collect();

    let mut file_results = Vec::new();
    for (directory, group_paths) in groups {
        let settings = directory
            .as_ref()
            .and_then(|directory| settings_by_directory.remove(directory));
        let config = build_config(&check_config, settings, group_paths)?;
        file_results.extend(optlint_core::check::check(config));
    }

    let mut all_diagnostics = Vec::new();

    for (path, result) in file_results {
        match result {
            Ok(diagnostics) => {
                if !diagnostics.is_empty() {
                    all_diagnostics.push((path, diagnostics));
                }
            }
            Err(e) => {
                all_errors.push((path, e));
            }
        }
    }

    // Flatten all diagnostics into a single vector and sort globally
    let mut all_diagnostics_flat: Vec<&Diagnostic> = all_diagnostics
        .iter()
        .flat_map(|(_path, diagnostics)| diagnostics.iter())
        .collect();

    all_diagnostics_flat.sort();

    if args.statistics {
        print_statistics(&all_diagnostics_flat);
    } else {
        let mut stdout = std::io::stdout();

        match args.output_format {
            OutputFormat::Concise => {
                ConciseEmitter.emit(&mut stdout, &all_diagnostics_flat, &all_errors)?;
            }
            OutputFormat::Json => {
                JsonEmitter.emit(&mut stdout, &all_diagnostics_flat, &all_errors)?;
            }
            OutputFormat::Github => {
                GithubEmitter.emit(&mut stdout, &all_diagnostics_flat, &all_errors)?;
            }
        }

        if args.output_format.is_human_readable() {
            print_summary(&all_diagnostics_flat, !all_errors.is_empty());

            let mut notes: Vec<String> = Vec::new();

            if let Some(start) = start {
                let duration = start.elapsed();
                notes.push(format!("Checked files in: {duration:?}"));
            }

            if let Some(config_path) = parent_config_path {
                notes.push(format!("Used '{}'", config_path.display()));
            }

            print_notes(&notes);
        }
    }

    if !all_errors.is_empty() {
        return Ok(ExitStatus::Error);
    }

    if all_diagnostics.is_empty() {
        return Ok(ExitStatus::Success);
    }

    Ok(ExitStatus::Failure)
}
