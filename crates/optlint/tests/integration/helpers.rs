use std::path::PathBuf;
use std::process::Command;

pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_optlint"))
}

/// Output of a finished command, formatted for snapshots.
pub struct RunOutput(String);

impl RunOutput {
    pub fn normalize_os_executable_name(self) -> String {
        self.0.replace("optlint.exe", "optlint")
    }
}

pub trait CommandExt {
    /// Run the command without colors and capture everything it printed.
    fn run(&mut self) -> RunOutput;
}

impl CommandExt for Command {
    fn run(&mut self) -> RunOutput {
        let output = self
            .env("NO_COLOR", "1")
            .env_remove("OPTLINT_LOG")
            .output()
            .expect("Failed to execute the optlint binary");

        RunOutput(format!(
            "success: {}\nexit_code: {}\n----- stdout -----\n{}\n----- stderr -----\n{}",
            output.status.success(),
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        ))
    }
}
