//! Shared utilities for tests that drive the `splitlog` binary.

use std::process::{Command, Output};

/// Captured result of one `splitlog` run.
pub struct Run {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl Run {
    /// Record lines (stack trace lines start without a timestamp column).
    #[allow(dead_code)]
    pub fn stdout_records(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| l.contains('\t')).collect()
    }

    #[allow(dead_code)]
    pub fn stderr_records(&self) -> Vec<&str> {
        self.stderr.lines().filter(|l| l.contains('\t')).collect()
    }
}

impl From<Output> for Run {
    fn from(output: Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Run the binary with `LOG_LEVEL` set to `level`, or removed when `None`.
pub fn run_splitlog(level: Option<&str>, args: &[&str]) -> Run {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_splitlog"));
    cmd.args(args).env_remove("RUST_BACKTRACE");
    match level {
        Some(level) => cmd.env("LOG_LEVEL", level),
        None => cmd.env_remove("LOG_LEVEL"),
    };
    cmd.output().expect("failed to run splitlog").into()
}
