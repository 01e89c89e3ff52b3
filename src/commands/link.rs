//! Link command implementation
//!
//! Computes the `<link rel="manifest">` markup for the discovered
//! manifest and, with --write, splices it into the index document's
//! head.

use console::Style;
use std::path::PathBuf;

use crate::cli::LinkArgs;
use crate::common;
use crate::domain::ResourceKind;
use crate::error::{Result, file_not_found, head_missing};
use crate::html;
use crate::locator::{DiscoveryCache, Locator, patterns, search};
use crate::path_utils;

/// Run link command
pub fn run(project: Option<PathBuf>, args: LinkArgs) -> Result<()> {
    let root = super::helpers::project_root(project)?;
    let cache = DiscoveryCache::new();
    let locator = Locator::new(&root, &cache);

    let Some(manifest) = locator.locate(ResourceKind::Manifest)? else {
        println!("No web manifest found in this project; nothing to link.");
        return Ok(());
    };

    let rel = path_utils::relative_to_root(&manifest.path, &root);
    let tag = html::manifest_link_tag(&rel);

    let index = search::find_by_pattern(&root, patterns::INDEX_DOCUMENT)
        .into_iter()
        .next();

    if !args.write {
        println!("{tag}");
        if let Some(path) = &index {
            let text = common::fs::read_to_string(path)?;
            if html::has_manifest_link(&text) {
                println!(
                    "{}",
                    Style::new()
                        .dim()
                        .apply_to("The index document already links a manifest.")
                );
            }
        }
        return Ok(());
    }

    let Some(index) = index else {
        return Err(file_not_found(patterns::INDEX_DOCUMENT));
    };
    let index_rel = path_utils::relative_to_root(&index, &root);
    let text = common::fs::read_to_string(&index)?;

    if html::has_manifest_link(&text) {
        println!("{index_rel} already links a manifest; nothing to do.");
        return Ok(());
    }

    let edited =
        html::insert_manifest_link(&text, &tag).ok_or_else(|| head_missing(&index_rel))?;
    common::fs::write(&index, edited)?;
    println!("Linked {rel} from {index_rel}");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_temp_dir, create_test_files, create_web_project};

    #[test]
    fn test_link_without_manifest_is_informational() {
        let temp = create_temp_dir();
        let args = LinkArgs { write: false };
        assert!(run(Some(temp.path().to_path_buf()), args).is_ok());
    }

    #[test]
    fn test_link_print_only_leaves_index_alone() {
        let temp = create_web_project();
        let before = std::fs::read_to_string(temp.path().join("index.html")).expect("read");

        let args = LinkArgs { write: false };
        run(Some(temp.path().to_path_buf()), args).expect("run");

        let after = std::fs::read_to_string(temp.path().join("index.html")).expect("read");
        assert_eq!(before, after);
    }

    #[test]
    fn test_link_write_splices_into_head() {
        let temp = create_web_project();
        let args = LinkArgs { write: true };
        run(Some(temp.path().to_path_buf()), args).expect("run");

        let index = std::fs::read_to_string(temp.path().join("index.html")).expect("read");
        assert!(index.contains(r#"<link rel="manifest" href="public/manifest.json">"#));
    }

    #[test]
    fn test_link_write_is_idempotent() {
        let temp = create_web_project();
        run(Some(temp.path().to_path_buf()), LinkArgs { write: true }).expect("first run");
        let once = std::fs::read_to_string(temp.path().join("index.html")).expect("read");

        run(Some(temp.path().to_path_buf()), LinkArgs { write: true }).expect("second run");
        let twice = std::fs::read_to_string(temp.path().join("index.html")).expect("read");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_link_write_without_head_fails() {
        let temp = create_temp_dir();
        create_test_files(
            &temp,
            &[
                ("manifest.json", r#"{"name":"App"}"#),
                ("index.html", "<html><body></body></html>"),
            ],
        );

        let result = run(Some(temp.path().to_path_buf()), LinkArgs { write: true });
        assert!(result.is_err());
    }
}
