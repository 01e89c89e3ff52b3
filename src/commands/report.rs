//! Report command implementation
//!
//! Renders the derived summary view: per-category pass counts plus the
//! installability verdict. Informational only; the exit code stays zero.

use console::Style;
use std::path::PathBuf;

use crate::cli::ReportArgs;
use crate::domain::ResourceKind;
use crate::error::{Result, io_error};
use crate::locator::{DiscoveryCache, Locator};
use crate::path_utils;
use crate::validation::{self, CategoryCount};

/// Run report command
pub fn run(project: Option<PathBuf>, args: ReportArgs) -> Result<()> {
    let root = super::helpers::project_root(project)?;
    let cache = DiscoveryCache::new();
    let locator = Locator::new(&root, &cache);

    let handle = match &args.manifest {
        Some(path) => Some(locator.install(ResourceKind::Manifest, path)?),
        None => locator.locate(ResourceKind::Manifest)?,
    };

    let Some(handle) = handle else {
        println!("No web manifest found in this project.");
        return Ok(());
    };

    let origin = path_utils::relative_to_root(&handle.path, &root);
    let results = validation::validate_source(&handle.text, &origin)?;
    let summary = validation::summarize(&results);

    if args.json {
        let payload = serde_json::json!({ "manifest": origin, "summary": summary });
        let text =
            serde_json::to_string_pretty(&payload).map_err(|e| io_error(e.to_string()))?;
        println!("{text}");
        return Ok(());
    }

    println!("{} {}", Style::new().bold().apply_to("Web Manifest"), origin);
    println!();
    print_count("Required", summary.required);
    print_count("Recommended", summary.recommended);
    print_count("Optional", summary.optional);
    println!();

    if summary.installable {
        println!("{}", Style::new().green().bold().apply_to("Installable"));
    } else {
        println!("{}", Style::new().red().bold().apply_to("Not installable"));
    }

    Ok(())
}

fn print_count(label: &str, count: CategoryCount) {
    let style = if count.passed == count.total {
        Style::new().green()
    } else {
        Style::new().yellow()
    };
    println!(
        "  {:<12} {}",
        format!("{label}:"),
        style.apply_to(format!("{}/{}", count.passed, count.total))
    );
}
