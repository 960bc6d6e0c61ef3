use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use optlint::args::Args;
use optlint::run;
use optlint::status::ExitStatus;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            let mut stderr = std::io::stderr().lock();
            // Nothing left to do if stderr is gone.
            let _ = writeln!(stderr, "{}: {}", "error".red().bold(), err);
            for cause in err.chain().skip(1) {
                let _ = writeln!(stderr, "  {}: {}", "Caused by".bold(), cause);
            }
            ExitStatus::Error.into()
        }
    }
}
