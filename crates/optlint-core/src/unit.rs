use std::path::{Path, PathBuf};

use crate::options::{ConfigOptions, parse_bool};

/// Option that forces a file to be treated (or not) as generated code.
pub const GENERATED_CODE_OPTION: &str = "generated_code";

/// One analyzed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub is_generated: bool,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, is_generated: bool) -> Self {
        Self { path: path.into(), is_generated }
    }

    /// Build a unit from the file contents and the options resolved for it.
    ///
    /// A `generated_code` option holding a boolean takes precedence over the
    /// file name and header heuristics.
    pub fn classify(path: &Path, contents: &str, options: &impl ConfigOptions) -> Self {
        let is_generated = options
            .get(GENERATED_CODE_OPTION)
            .and_then(parse_bool)
            .unwrap_or_else(|| {
                is_generated_file_name(path) || has_auto_generated_header(contents)
            });

        Self::new(path, is_generated)
    }
}

const GENERATED_SUFFIXES: &[&str] = &[".designer.cs", ".generated.cs", ".g.cs", ".g.i.cs"];

pub fn is_generated_file_name(path: &Path) -> bool {
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    if file_name.starts_with("TemporaryGeneratedFile_") {
        return true;
    }

    let file_name = file_name.to_ascii_lowercase();
    GENERATED_SUFFIXES
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
}

/// Whether the leading comments of the file carry an `<auto-generated>` (or
/// `<autogenerated>`) marker.
///
/// Only the comment block at the top of the file is inspected: the scan
/// stops at the first line that is neither blank nor a comment.
pub fn has_auto_generated_header(contents: &str) -> bool {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut in_block_comment = false;

    for line in contents.lines() {
        let line = line.trim();

        let comment = if in_block_comment {
            if line.contains("*/") {
                in_block_comment = false;
            }
            line
        } else if line.is_empty() {
            continue;
        } else if let Some(rest) = line.strip_prefix("//") {
            rest
        } else if let Some(rest) = line.strip_prefix("/*") {
            in_block_comment = !rest.contains("*/");
            rest
        } else {
            break;
        };

        let comment = comment.to_ascii_lowercase();
        if comment.contains("<auto-generated") || comment.contains("<autogenerated") {
            return true;
        }
    }

    false
}
