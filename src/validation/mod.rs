//! Manifest validation engine
//!
//! Runs the rule catalog against manifest text and emits one result per
//! rule, in catalog order. The engine performs no file or network I/O;
//! it operates purely on the supplied text. Unparsable text is an error,
//! never a list of failing results, so callers cannot conflate "no
//! manifest" with "unparsable manifest".

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, manifest_malformed};
use crate::rules::{self, Category};

/// Outcome of a single rule, in catalog order
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub code: &'static str,
    pub member: &'static str,
    pub info: &'static str,
    pub docs: &'static str,
    pub category: Category,
    pub passed: bool,
}

/// Validate manifest text against the full rule catalog.
///
/// Returns one result per catalog rule, preserving catalog order.
#[allow(dead_code)]
pub fn validate(manifest_text: &str) -> Result<Vec<ValidationResult>> {
    validate_source(manifest_text, "manifest")
}

/// Validate manifest text, labeling parse failures with `origin`
/// (typically the manifest's path).
pub fn validate_source(manifest_text: &str, origin: &str) -> Result<Vec<ValidationResult>> {
    let manifest = parse_object(manifest_text, origin)?;

    Ok(rules::catalog()
        .iter()
        .map(|rule| ValidationResult {
            code: rule.code,
            member: rule.member,
            info: rule.info,
            docs: rule.docs,
            category: rule.category,
            passed: rule.check(&manifest),
        })
        .collect())
}

fn parse_object(manifest_text: &str, origin: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(manifest_text)
        .map_err(|e| manifest_malformed(origin, e.to_string()))?;

    if !value.is_object() {
        return Err(manifest_malformed(origin, "top level is not a JSON object"));
    }

    Ok(value)
}

/// Per-category pass counts
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryCount {
    pub passed: usize,
    pub total: usize,
}

/// Derived summary view over a result list. Pure projection, not stored state.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Summary {
    pub required: CategoryCount,
    pub recommended: CategoryCount,
    pub optional: CategoryCount,
    /// True iff every required rule passed
    pub installable: bool,
}

/// Partition results by category and derive the installability verdict
pub fn summarize(results: &[ValidationResult]) -> Summary {
    let count = |category: Category| {
        let of_category = results.iter().filter(|r| r.category == category);
        CategoryCount {
            passed: of_category.clone().filter(|r| r.passed).count(),
            total: of_category.count(),
        }
    };

    let required = count(Category::Required);
    Summary {
        required,
        recommended: count(Category::Recommended),
        optional: count(Category::Optional),
        installable: required.passed == required.total,
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::PwakitError;

    /// Manifest satisfying every required rule
    const COMPLETE: &str = r##"{
        "name": "Example App",
        "short_name": "Example",
        "start_url": "/",
        "display": "standalone",
        "background_color": "#ffffff",
        "theme_color": "#2f3d58",
        "icons": [
            {"sizes": "192x192", "type": "image/png", "src": "icons/192x192-icon.png"},
            {"sizes": "512x512", "type": "image/png", "src": "icons/512x512-icon.png"}
        ]
    }"##;

    fn result<'a>(results: &'a [ValidationResult], code: &str) -> &'a ValidationResult {
        results
            .iter()
            .find(|r| r.code == code)
            .expect("result should exist")
    }

    #[test]
    fn test_complete_manifest_passes_all_required() {
        let results = validate(COMPLETE).expect("should validate");
        assert!(
            results
                .iter()
                .filter(|r| r.category == Category::Required)
                .all(|r| r.passed)
        );
        assert!(summarize(&results).installable);
    }

    #[test]
    fn test_one_result_per_catalog_rule() {
        let results = validate(COMPLETE).expect("should validate");
        assert_eq!(results.len(), rules::catalog().len());
    }

    #[test]
    fn test_result_order_matches_catalog_order() {
        let results = validate(COMPLETE).expect("should validate");
        for (result, rule) in results.iter().zip(rules::catalog()) {
            assert_eq!(result.code, rule.code);
        }
    }

    #[test]
    fn test_validate_is_idempotent() {
        let first = validate(COMPLETE).expect("should validate");
        let second = validate(COMPLETE).expect("should validate");
        let flags = |rs: &[ValidationResult]| {
            rs.iter().map(|r| (r.code, r.passed)).collect::<Vec<_>>()
        };
        assert_eq!(flags(&first), flags(&second));
    }

    #[test]
    fn test_missing_required_member_fails_only_its_rule() {
        let missing_short_name = COMPLETE.replace("\"short_name\": \"Example\",", "");
        let results = validate(&missing_short_name).expect("should validate");

        assert!(!result(&results, "pwakit::manifest::short_name").passed);
        for r in results.iter().filter(|r| r.category == Category::Required) {
            if r.code != "pwakit::manifest::short_name" {
                assert!(r.passed, "{} should be unaffected", r.code);
            }
        }
        assert!(!summarize(&results).installable);
    }

    #[test]
    fn test_unrelated_optional_member_does_not_affect_required() {
        let base = validate(COMPLETE).expect("should validate");
        let with_lang = COMPLETE.replacen('{', "{\"lang\": \"en\",", 1);
        let enriched = validate(&with_lang).expect("should validate");

        for (a, b) in base
            .iter()
            .zip(&enriched)
            .filter(|(a, _)| a.category == Category::Required)
        {
            assert_eq!(a.passed, b.passed, "{}", a.code);
        }
    }

    #[test]
    fn test_empty_icon_set_scenario() {
        let text = r#"{"name":"App","start_url":"/","display":"standalone","icons":[]}"#;
        let results = validate(text).expect("should validate");

        assert!(!result(&results, "pwakit::manifest::icons").passed);
        assert!(result(&results, "pwakit::manifest::start_url").passed);
        assert!(!result(&results, "pwakit::manifest::short_name").passed);
    }

    #[test]
    fn test_malformed_manifest_is_an_error() {
        let err = validate("{not json").expect_err("should fail");
        assert!(matches!(err, PwakitError::ManifestMalformed { .. }));
    }

    #[test]
    fn test_non_object_top_level_is_an_error() {
        let err = validate("[1, 2]").expect_err("should fail");
        assert!(matches!(err, PwakitError::ManifestMalformed { .. }));
    }

    #[test]
    fn test_validate_source_labels_origin() {
        let err = validate_source("{not json", "public/manifest.json").expect_err("should fail");
        assert!(err.to_string().contains("public/manifest.json"));
    }

    #[test]
    fn test_summary_counts() {
        let results = validate(COMPLETE).expect("should validate");
        let summary = summarize(&results);

        assert_eq!(summary.required.total, 7);
        assert_eq!(summary.required.passed, 7);
        assert!(summary.recommended.passed < summary.recommended.total);
    }
}
