use std::io::Write;

use colored::Colorize;
use optlint_core::diagnostic::Diagnostic;
use optlint_core::severity::Severity;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per diagnostic.
    #[default]
    Concise,
    /// A pretty-printed JSON array of diagnostics.
    Json,
    /// GitHub Actions workflow commands, shown as annotations on pull
    /// requests.
    Github,
}

impl OutputFormat {
    /// Whether the output is meant to be read by a person, in which case
    /// summaries and notes are printed after the diagnostics.
    pub fn is_human_readable(self) -> bool {
        matches!(self, OutputFormat::Concise)
    }
}

pub trait Emitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()>;
}

pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()> {
        for (_path, err) in errors {
            writeln!(writer, "{}: {}", "Error".red().bold(), err)?;
        }
        for diagnostic in diagnostics {
            writeln!(writer, "{diagnostic}")?;
        }
        Ok(())
    }
}

pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()> {
        // Errors go to stderr to keep stdout parseable.
        for (_path, err) in errors {
            eprintln!("{}: {}", "Error".red().bold(), err);
        }
        serde_json::to_writer_pretty(&mut *writer, diagnostics)?;
        writeln!(writer)?;
        Ok(())
    }
}

pub struct GithubEmitter;

impl Emitter for GithubEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()> {
        for (path, err) in errors {
            if path.is_empty() {
                writeln!(writer, "::error title=optlint::{}", escape_data(&err.to_string()))?;
            } else {
                writeln!(
                    writer,
                    "::error title=optlint,file={}::{}",
                    escape_property(path),
                    escape_data(&err.to_string())
                )?;
            }
        }
        for diagnostic in diagnostics {
            writeln!(
                writer,
                "::{} title={},file={},line={},col={}::{}",
                github_level(diagnostic.severity),
                escape_property(&format!("optlint ({})", diagnostic.message.name)),
                escape_property(&diagnostic.filename.to_string_lossy()),
                diagnostic.location.row,
                diagnostic.location.column,
                escape_data(&diagnostic.message.body)
            )?;
        }
        Ok(())
    }
}

fn github_level(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Suggestion | Severity::Silent | Severity::None => "notice",
    }
}

// https://github.com/actions/toolkit/blob/main/packages/core/src/command.ts
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

pub fn print_summary(diagnostics: &[&Diagnostic], has_errors: bool) {
    match diagnostics.len() {
        0 if has_errors => {}
        0 => println!("All checks passed!"),
        1 => println!("\nFound 1 error."),
        n => println!("\nFound {n} errors."),
    }
}

pub fn print_notes(notes: &[String]) {
    if notes.is_empty() {
        return;
    }
    println!();
    for note in notes {
        println!("{note}");
    }
}
