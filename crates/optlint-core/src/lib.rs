//! Core functionality of optlint
//!
//! optlint reports analyzer options that are obsolete and names the option
//! (and value) that replaces them. This crate provides:
//! - the table of obsolete options
//! - the per-file validation, gated by rule selection and severities
//! - configuration loading from `optlint.toml`
//! - file discovery and parallel checking

pub mod cancellation;
pub mod category_set;
pub mod check;
pub mod config;
pub mod diagnostic;
pub mod discovery;
pub mod error;
pub mod file_matcher;
pub mod fs;
pub mod gate;
pub mod options;
pub mod registry;
pub mod rule_set;
pub mod settings;
pub mod severity;
pub mod toml;
pub mod unit;
pub mod validator;


// Re-export commonly used types for convenience
pub use cancellation::CancellationToken;
pub use check::check;
pub use config::{ArgsConfig, Config, build_config};
pub use diagnostic::{Diagnostic, DiagnosticSink, Location};
pub use discovery::{DiscoveredSettings, discover_settings, discover_source_files};
pub use gate::{CompilationSettings, RuleGate};
pub use options::{ConfigOptions, ResolvedConfig};
pub use registry::{LEGACY_OPTIONS, LegacyOption};
pub use rule_set::{Rule, RuleSet};
pub use settings::Settings;
pub use severity::Severity;
pub use unit::SourceUnit;
pub use validator::validate;
