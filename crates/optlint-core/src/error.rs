use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to load an `optlint.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ParseTomlError {
    #[error("Failed to read {}: {}", .0.display(), .1)]
    Read(PathBuf, #[source] io::Error),
    #[error("Failed to parse {}:\n{}", .0.display(), .1)]
    Deserialize(PathBuf, #[source] toml::de::Error),
}

/// Settings that deserialized fine but don't make sense.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Unknown rule `{name}` in {origin}.")]
    UnknownRule { name: String, origin: Origin },
    #[error("Invalid glob `{pattern}`: {message}")]
    InvalidGlob { pattern: String, message: String },
}

/// Where a rule name was written, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cli,
    Toml,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Cli => f.write_str("the command line arguments"),
            Origin::Toml => f.write_str("`optlint.toml`"),
        }
    }
}
