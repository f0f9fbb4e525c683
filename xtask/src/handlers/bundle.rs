use crate::services::utils::get_project_root;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Builds the release web bundle and stages it where `folio-server` expects it.
///
/// # Result
/// Returns `Ok(())` with the bundle copied into `dist/` at the workspace root.
///
/// # Errors
/// Returns an error if `dx bundle` fails or the produced bundle cannot be
/// located or copied.
pub fn bundle_web() -> Result<()> {
    println!("📦 Building release bundle...");

    let root = get_project_root()?;
    let status = std::process::Command::new("dx")
        .args(["bundle", "--release"])
        .current_dir(root.join("apps/web"))
        .status()
        .context("Failed to launch 'dx'. Install it with: cargo install dioxus-cli")?;

    if !status.success() {
        bail!("dx bundle exited with non-zero status: {}", status.code().unwrap_or(-1));
    }

    let bundle = root.join("target/dx/folio-web/release/web/public");
    if !bundle.is_dir() {
        bail!("Bundle output not found at {}", bundle.display());
    }

    let dist = root.join("dist");
    if dist.exists() {
        fs::remove_dir_all(&dist).context("Failed to clear previous dist/")?;
    }
    copy_tree(&bundle, &dist)?;

    println!("✨ Bundle staged at {}", dist.display());
    Ok(())
}

fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    for entry in WalkDir::new(from) {
        let entry = entry.context("Failed to walk bundle output")?;
        let relative = entry.path().strip_prefix(from)?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", relative.display()))?;
        }
    }
    Ok(())
}
