#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{bundle, dev, fmt, run, testing};
use crate::models::args::{AppCommands, Cli};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        AppCommands::Dev {} => dev::serve_web()?,
        AppCommands::Bundle {} => bundle::bundle_web()?,
        AppCommands::Test { project } => testing::run_tests(project.as_deref())?,
        AppCommands::Doctest { project } => testing::run_doctests(project.as_deref())?,
        AppCommands::Run { project } => run::run_project(&project)?,
        AppCommands::Fmt { check } => fmt::format_workspace(check)?,
    }

    Ok(())
}
