use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::fs::relativize_path;
use crate::unit::SourceUnit;
use crate::validator::validate;

/// Check every file of `config` in parallel. Each file gets its own result,
/// so that a file that can't be read doesn't prevent checking the others.
pub fn check(config: Config) -> Vec<(String, Result<Vec<Diagnostic>, anyhow::Error>)> {
    let config = Arc::new(config);

    config
        .paths
        .par_iter()
        .map(|file| {
            let res = check_path(file, Arc::clone(&config));
            (relativize_path(file), res)
        })
        .collect()
}

pub fn check_path(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    let path = relativize_path(path);

    if config.cancellation.is_cancelled() {
        tracing::trace!(path = %path, "skipped, check was cancelled");
        return Ok(Vec::new());
    }

    // Only the header of the file matters here, don't fail on encodings
    // other than UTF-8.
    let bytes = fs::read(Path::new(&path)).with_context(|| format!("Failed to read file: {path}"))?;
    let contents = String::from_utf8_lossy(&bytes);

    Ok(get_checks(&contents, Path::new(&path), &config))
}

/// Resolve the options of `file` and report the obsolete ones. Never fails:
/// a file without any option is simply clean.
pub fn get_checks(contents: &str, file: &Path, config: &Config) -> Vec<Diagnostic> {
    let options = config.options.resolve(file);
    let unit = SourceUnit::classify(file, contents, &options);

    tracing::trace!(
        path = %file.display(),
        options = options.len(),
        generated = unit.is_generated,
        "checking unit"
    );

    let mut diagnostics = Vec::new();
    validate(
        &unit,
        &options,
        &config.compilation,
        &config.cancellation,
        &mut diagnostics,
    );
    diagnostics.sort();
    diagnostics
}
