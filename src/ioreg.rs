use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

const IOREG: &str = "ioreg";
const IOREG_ARGS: [&str; 5] = ["-w", "0", "-r", "-c", "AppleSmartBattery"];

/// Dumps the `AppleSmartBattery` node of the I/O Registry.
///
/// Blocks until ioreg exits. A spawn failure or a non-zero exit is an error;
/// stdout is decoded lossily.
pub fn query() -> Result<String> {
    debug!(command = IOREG, args = ?IOREG_ARGS, "querying battery registry");
    let output = Command::new(IOREG)
        .args(IOREG_ARGS)
        .output()
        .map_err(Error::Spawn)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::CommandFailed {
            status: output.status,
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
