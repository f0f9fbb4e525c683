use anyhow::{Result, bail};

/// Formats the workspace, or verifies formatting when `check` is set.
///
/// # Errors
/// Returns an error if `cargo fmt` fails, or if `check` is set and any file
/// is not formatted.
pub fn format_workspace(check: bool) -> Result<()> {
    let mut args = vec!["fmt", "--all"];
    if check {
        args.extend(["--", "--check"]);
        println!("🔍 Checking formatting...");
    } else {
        println!("🧹 Formatting workspace...");
    }

    let status = std::process::Command::new("cargo").args(args).status()?;
    if !status.success() {
        bail!("Formatting {}", if check { "differences found" } else { "failed" });
    }

    Ok(())
}
