use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use ignore::WalkBuilder;
use path_absolutize::Absolutize;
use rustc_hash::FxHashSet;

use crate::fs::has_cs_extension;
use crate::settings::Settings;
use crate::toml::{CONFIG_FILE_NAME, parse_optlint_toml};

/// Settings loaded from one `optlint.toml`.
#[derive(Debug)]
pub struct DiscoveredSettings {
    /// The directory containing the configuration file. Files below it use
    /// these settings unless a nearer configuration exists.
    pub directory: PathBuf,
    pub settings: Settings,
    pub config_path: PathBuf,
}

/// Find the configuration files that apply to `paths`.
///
/// For each path, this is the nearest `optlint.toml` in the path itself or
/// one of its ancestors. Directories are also searched for nested
/// configurations, which take over for the files below them.
pub fn discover_settings<P: AsRef<Path>>(paths: &[P]) -> anyhow::Result<Vec<DiscoveredSettings>> {
    let mut config_paths: BTreeSet<PathBuf> = BTreeSet::new();

    for path in paths {
        let path = absolute(path.as_ref());

        let start = if path.is_dir() { path.as_path() } else { path.parent().unwrap_or(&path) };
        if let Some(config_path) = start
            .ancestors()
            .map(|directory| directory.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
        {
            config_paths.insert(config_path);
        }

        if path.is_dir() {
            config_paths.extend(
                WalkBuilder::new(&path)
                    .build()
                    .filter_map(Result::ok)
                    .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
                    .filter(|entry| entry.file_name() == CONFIG_FILE_NAME)
                    .map(|entry| entry.into_path()),
            );
        }
    }

    config_paths
        .into_iter()
        .map(|config_path| -> anyhow::Result<DiscoveredSettings> {
            let directory = config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();

            let settings = parse_optlint_toml(&config_path)?
                .into_settings(&directory)
                .with_context(|| format!("Invalid settings in {}", config_path.display()))?;

            tracing::debug!(path = %config_path.display(), "loaded configuration");

            Ok(DiscoveredSettings { directory, settings, config_path })
        })
        .collect()
}

/// The settings of the nearest configuration above `path`, if any.
pub fn nearest_settings<'a>(
    path: &Path,
    discovered: &'a [DiscoveredSettings],
) -> Option<&'a DiscoveredSettings> {
    let path = absolute(path);
    discovered
        .iter()
        .filter(|ds| path.starts_with(&ds.directory))
        .max_by_key(|ds| ds.directory.components().count())
}

/// Collect the C# files below `paths`, honoring `.gitignore` and friends.
///
/// Files passed explicitly are always kept, whatever their extension.
pub fn discover_source_files<P: AsRef<Path>>(paths: &[P]) -> Vec<Result<PathBuf, ignore::Error>> {
    let Some((first, rest)) = paths.split_first() else {
        return Vec::new();
    };

    let mut builder = WalkBuilder::new(first);
    for path in rest {
        builder.add(path);
    }

    let mut seen: FxHashSet<PathBuf> = FxHashSet::default();
    let mut files = Vec::new();

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                files.push(Err(err));
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if entry.depth() > 0 && !has_cs_extension(entry.path()) {
            continue;
        }
        if seen.insert(absolute(entry.path())) {
            files.push(Ok(entry.into_path()));
        }
    }

    files
}

fn absolute(path: &Path) -> PathBuf {
    path.absolutize()
        .map(|path| path.into_owned())
        .unwrap_or_else(|_| path.to_path_buf())
}
