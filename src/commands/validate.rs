//! Validate command implementation
//!
//! Locates the web manifest (or installs an explicitly chosen path into
//! the cache), runs the rule catalog, and renders the categorized
//! results. Exits non-zero when installability fails, so the command can
//! gate CI.

use console::Style;
use std::path::PathBuf;

use crate::cli::ValidateArgs;
use crate::diagnostics;
use crate::domain::ResourceKind;
use crate::error::{Result, io_error};
use crate::locator::{DiscoveryCache, Locator};
use crate::path_utils;
use crate::rules::Category;
use crate::validation::{self, Summary, ValidationResult};

/// Run validate command
pub fn run(project: Option<PathBuf>, args: ValidateArgs, verbose: bool) -> Result<()> {
    let root = super::helpers::project_root(project)?;
    let cache = DiscoveryCache::new();
    if verbose {
        cache.subscribe(|event| {
            println!(
                "{}",
                Style::new().dim().apply_to(format!(
                    "Resolved {} at {}",
                    event.kind.label(),
                    event.path.display()
                ))
            );
        });
    }
    let locator = Locator::new(&root, &cache);

    let handle = match &args.manifest {
        Some(path) => Some(locator.install(ResourceKind::Manifest, path)?),
        None => locator.locate(ResourceKind::Manifest)?,
    };

    let Some(handle) = handle else {
        println!("No web manifest found in this project.");
        println!("Point pwakit at one with --manifest, or generate one first.");
        return Ok(());
    };

    let origin = path_utils::relative_to_root(&handle.path, &root);
    let results = validation::validate_source(&handle.text, &origin)?;
    let summary = validation::summarize(&results);

    if args.json {
        let payload = serde_json::json!({
            "manifest": origin,
            "results": results,
            "summary": summary,
        });
        let text =
            serde_json::to_string_pretty(&payload).map_err(|e| io_error(e.to_string()))?;
        println!("{text}");
    } else {
        render_results(&origin, &handle.text, &results, verbose);
        render_verdict(&summary);
    }

    if !summary.installable {
        std::process::exit(1);
    }
    Ok(())
}

fn render_results(
    origin: &str,
    manifest_text: &str,
    results: &[ValidationResult],
    verbose: bool,
) {
    println!("{} {}", Style::new().bold().apply_to("Web Manifest"), origin);

    let diagnostics = diagnostics::from_results(manifest_text, results);

    for category in [Category::Required, Category::Recommended, Category::Optional] {
        println!();
        println!("{}:", Style::new().bold().apply_to(category.label()));

        for result in results.iter().filter(|r| r.category == category) {
            let mark = if result.passed {
                Style::new().green().apply_to("✓")
            } else if category == Category::Required {
                Style::new().red().apply_to("✗")
            } else {
                Style::new().yellow().apply_to("✗")
            };
            println!("  {} {}", mark, result.info);

            if verbose {
                println!("      {}", Style::new().dim().apply_to(result.docs));
                if !result.passed {
                    if let Some(diagnostic) =
                        diagnostics.iter().find(|d| d.code == result.code)
                    {
                        let style = match diagnostic.severity() {
                            miette::Severity::Error => Style::new().red(),
                            _ => Style::new().yellow(),
                        };
                        println!(
                            "      {}",
                            style.apply_to(format!(
                                "at {}:{}:{}",
                                origin,
                                diagnostic.position.line,
                                diagnostic.position.column
                            ))
                        );
                    }
                    if let Some(fix) = diagnostics::fix_for(result.code) {
                        println!(
                            "      {} {}  {}",
                            Style::new().bold().apply_to("fix:"),
                            fix.summary,
                            Style::new().dim().apply_to(fix.snippet)
                        );
                    }
                }
            }
        }
    }
    println!();
}

fn render_verdict(summary: &Summary) {
    if summary.installable {
        println!(
            "{}",
            Style::new()
                .green()
                .bold()
                .apply_to("Installable: all required checks pass")
        );
    } else {
        let failing = summary.required.total - summary.required.passed;
        println!(
            "{}",
            Style::new().red().bold().apply_to(format!(
                "Not installable: {failing} of {} required checks failing",
                summary.required.total
            ))
        );
    }
}
