//! pwakit - installable web app toolkit
//!
//! A command line tool that discovers the web manifest and service worker
//! of a project tree, validates the manifest against the installability
//! rule catalog, and materializes inline icon payloads into real files
//! wired back into the manifest.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod diagnostics;
mod domain;
mod error;
mod html;
mod icons;
mod locator;
mod manifest;
mod path_utils;
mod rules;
mod validation;
mod worker;

#[cfg(test)]
mod temp;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate(args) => commands::validate::run(cli.project, args, cli.verbose),
        Commands::Report(args) => commands::report::run(cli.project, args),
        Commands::Locate(args) => commands::locate::run(cli.project, args),
        Commands::Icons(args) => commands::icons::run(cli.project, args),
        Commands::Sw(args) => commands::sw::run(cli.project, args),
        Commands::Link(args) => commands::link::run(cli.project, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
