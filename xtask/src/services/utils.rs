use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Workspace root, derived from this crate's manifest directory.
///
/// # Errors
/// Returns an error if the manifest directory has no parent.
pub fn get_project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask manifest has no parent directory")
}

/// Expands a short crate name ('server') to its package name ('folio-server').
#[must_use]
pub fn normalize_project_name(project: &str) -> String {
    if project.starts_with("folio-") || project == "xtask" {
        project.to_owned()
    } else {
        format!("folio-{project}")
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_project_name;

    #[test]
    fn short_names_gain_the_workspace_prefix() {
        assert_eq!(normalize_project_name("server"), "folio-server");
        assert_eq!(normalize_project_name("folio-web"), "folio-web");
        assert_eq!(normalize_project_name("xtask"), "xtask");
    }
}
