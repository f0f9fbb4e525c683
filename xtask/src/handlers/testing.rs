use crate::services::utils::normalize_project_name;
use anyhow::{Result, bail};

/// Runs unit and integration tests, preferring `cargo-nextest` when installed.
///
/// # Result
/// Returns an `anyhow::Result<()>` indicating success or failure of the test run.
///
/// # Errors
/// Returns an error if the selected test runner exits unsuccessfully.
pub fn run_tests(project: Option<&str>) -> Result<()> {
    let nextest = std::process::Command::new("cargo-nextest")
        .arg("--version")
        .output()
        .is_ok_and(|out| out.status.success());

    let mut args: Vec<String> = if nextest {
        ["nextest", "run"].map(String::from).to_vec()
    } else {
        vec!["test".to_owned()]
    };
    args.extend(target_args(project));
    args.push("--all-features".to_owned());
    if nextest {
        args.extend(["--status-level", "skip", "--success-output", "never"].map(String::from));
    }

    println!("🧪 Running tests via '{}'...", if nextest { "nextest" } else { "cargo test" });
    let status = std::process::Command::new("cargo").args(args).status()?;
    if !status.success() {
        bail!("Tests failed!");
    }

    Ok(())
}

/// Runs doc tests, which nextest still does not execute.
///
/// # Errors
/// Returns an error if `cargo test --doc` exits unsuccessfully.
pub fn run_doctests(project: Option<&str>) -> Result<()> {
    let mut args: Vec<String> = ["test", "--doc"].map(String::from).to_vec();
    args.extend(target_args(project));
    args.push("--all-features".to_owned());

    println!("📚 Running doc tests...");
    let status = std::process::Command::new("cargo").args(args).status()?;
    if !status.success() {
        bail!("Doc tests failed!");
    }

    Ok(())
}

/// Scope flags: the whole workspace by default, one crate when named.
fn target_args(project: Option<&str>) -> Vec<String> {
    match project {
        None | Some("all") => vec!["--workspace".to_owned()],
        Some(name) => vec!["-p".to_owned(), normalize_project_name(name)],
    }
}
