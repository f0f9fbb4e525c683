//! Command-line surface of the developer toolkit, parsed with `clap` derive.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "cargo xtask",
    version = env!("CARGO_PKG_VERSION"),
    about = "Developer toolkit for the Folio workspace",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Serve the web app with hot reload (wraps `dx serve`)
    Dev {},
    /// Build the release web bundle and stage it under `dist/`
    Bundle {},
    /// Run tests (workspace by default)
    Test {
        /// Run tests for a specific crate (auto-prefixes with 'folio-' if missing)
        project: Option<String>,
    },
    /// Run doc tests (workspace by default)
    Doctest {
        /// Run doc tests for a specific crate (auto-prefixes with 'folio-' if missing)
        project: Option<String>,
    },
    /// Run a project
    Run {
        /// Run a specific crate (auto-prefixes with 'folio-' if missing)
        project: String,
    },
    /// Format the workspace
    Fmt {
        /// Verify formatting without rewriting files
        #[arg(long)]
        check: bool,
    },
}
