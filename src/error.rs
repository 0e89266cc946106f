use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to run ioreg: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("ioreg exited with {status}{}", stderr_suffix(.stderr))]
    CommandFailed { status: ExitStatus, stderr: String },

    #[error("no AppleSmartBattery entry in ioreg output (is this machine battery powered?)")]
    NoBattery,

    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
