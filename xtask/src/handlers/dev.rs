use crate::services::utils::get_project_root;
use anyhow::{Context, Result, bail};

/// Serves the web app with hot reload through the Dioxus CLI.
///
/// # Result
/// Returns `Ok(())` when the dev server exits cleanly.
///
/// # Errors
/// Returns an error if `dx` is not installed or exits with a failure status.
pub fn serve_web() -> Result<()> {
    println!("🌐 Serving folio-web with hot reload...");

    let status = std::process::Command::new("dx")
        .arg("serve")
        .current_dir(get_project_root()?.join("apps/web"))
        .status()
        .context("Failed to launch 'dx'. Install it with: cargo install dioxus-cli")?;

    if !status.success() {
        bail!("dx serve exited with non-zero status: {}", status.code().unwrap_or(-1));
    }

    Ok(())
}
