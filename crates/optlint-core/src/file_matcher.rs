use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use path_absolutize::Absolutize;

use crate::error::SettingsError;

/// Glob patterns matched against paths relative to the directory of the
/// `optlint.toml` that declared them.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    root: PathBuf,
    patterns: Vec<String>,
    set: GlobSet,
}

impl FileMatcher {
    pub fn new(root: &Path, patterns: &[String]) -> Result<Self, SettingsError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|err| SettingsError::InvalidGlob {
                pattern: pattern.clone(),
                message: err.kind().to_string(),
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|err| SettingsError::InvalidGlob {
            pattern: patterns.join(", "),
            message: err.kind().to_string(),
        })?;

        Ok(Self {
            root: absolute(root),
            patterns: patterns.to_vec(),
            set,
        })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Paths outside of the root never match.
    pub fn matches(&self, path: &Path) -> bool {
        let path = absolute(path);
        match path.strip_prefix(&self.root) {
            Ok(relative) => self.set.is_match(relative),
            Err(_) => false,
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    path.absolutize()
        .map(|path| path.into_owned())
        .unwrap_or_else(|_| path.to_path_buf())
}
