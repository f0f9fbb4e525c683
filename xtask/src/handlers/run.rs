use std::process::Command;

use anyhow::{Context, Result, bail};

use crate::services::utils::normalize_project_name;

/// Builds and runs one binary crate via `cargo run`.
///
/// # Errors
/// Returns an error if the build fails or the binary exits unsuccessfully.
pub fn run_project(project: &str) -> Result<()> {
    let package = normalize_project_name(project);
    println!("🚀 Running {package}...");

    let status = Command::new("cargo")
        .args(["run", "-p", &package])
        .status()
        .context("Failed to execute cargo run")?;
    if !status.success() {
        bail!("{package} exited with status {}", status.code().unwrap_or(-1));
    }

    Ok(())
}
