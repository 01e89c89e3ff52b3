//! Web manifest validation rules
//!
//! The catalog is a fixed, declarative table. Each rule is pure: given a
//! parsed manifest object it returns a boolean, never errors, and never
//! panics on a missing member (absence is a failing check). Rule codes are
//! stable identifiers that external consumers persist and match on; a code
//! is never reused for a different semantic check across revisions.

use serde::Serialize;
use serde_json::Value;

/// Severity tier of a validation check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Required,
    Recommended,
    Optional,
}

impl Category {
    /// Section label used in reports
    pub fn label(self) -> &'static str {
        match self {
            Category::Required => "Required",
            Category::Recommended => "Recommended",
            Category::Optional => "Optional",
        }
    }

    /// Severity used by the diagnostic bridge
    pub fn severity(self) -> miette::Severity {
        match self {
            Category::Required => miette::Severity::Error,
            Category::Recommended => miette::Severity::Warning,
            Category::Optional => miette::Severity::Advice,
        }
    }
}

/// One entry of the validation catalog
pub struct Rule {
    /// Stable diagnostic code, e.g. `pwakit::manifest::short_name`
    pub code: &'static str,
    /// Manifest member the check anchors to
    pub member: &'static str,
    pub category: Category,
    /// Human-readable description of what passing means
    pub info: &'static str,
    /// Documentation link rendered alongside the result
    pub docs: &'static str,
    check: fn(&Value) -> bool,
}

impl Rule {
    /// Apply the rule's predicate to a parsed manifest object
    pub fn check(&self, manifest: &Value) -> bool {
        (self.check)(manifest)
    }
}

/// The fixed rule catalog, in result order
pub fn catalog() -> &'static [Rule] {
    CATALOG
}

static CATALOG: &[Rule] = &[
    Rule {
        code: "pwakit::manifest::name",
        member: "name",
        category: Category::Required,
        info: "Includes a name",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/name",
        check: checks::name,
    },
    Rule {
        code: "pwakit::manifest::short_name",
        member: "short_name",
        category: Category::Required,
        info: "Includes a short_name",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/short_name",
        check: checks::short_name,
    },
    Rule {
        code: "pwakit::manifest::start_url",
        member: "start_url",
        category: Category::Required,
        info: "Specifies a start_url",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/start_url",
        check: checks::start_url,
    },
    Rule {
        code: "pwakit::manifest::display",
        member: "display",
        category: Category::Required,
        info: "Specifies a display mode",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/display",
        check: checks::display,
    },
    Rule {
        code: "pwakit::manifest::icons",
        member: "icons",
        category: Category::Required,
        info: "Lists an icon of at least 192x192",
        docs: "https://web.dev/articles/install-criteria",
        check: checks::installable_icon,
    },
    Rule {
        code: "pwakit::manifest::background_color",
        member: "background_color",
        category: Category::Required,
        info: "Specifies a background_color",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/background_color",
        check: checks::background_color,
    },
    Rule {
        code: "pwakit::manifest::theme_color",
        member: "theme_color",
        category: Category::Required,
        info: "Specifies a theme_color",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/theme_color",
        check: checks::theme_color,
    },
    Rule {
        code: "pwakit::manifest::description",
        member: "description",
        category: Category::Recommended,
        info: "Includes a description",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/description",
        check: checks::description,
    },
    Rule {
        code: "pwakit::manifest::orientation",
        member: "orientation",
        category: Category::Recommended,
        info: "Specifies an orientation",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/orientation",
        check: checks::orientation,
    },
    Rule {
        code: "pwakit::manifest::screenshots",
        member: "screenshots",
        category: Category::Recommended,
        info: "Lists screenshots",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/screenshots",
        check: checks::screenshots,
    },
    Rule {
        code: "pwakit::manifest::scope",
        member: "scope",
        category: Category::Recommended,
        info: "Defines a scope",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/scope",
        check: checks::scope,
    },
    Rule {
        code: "pwakit::manifest::categories",
        member: "categories",
        category: Category::Recommended,
        info: "Lists categories",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/categories",
        check: checks::categories,
    },
    Rule {
        code: "pwakit::manifest::icons_maskable",
        member: "icons",
        category: Category::Recommended,
        info: "Lists a maskable icon",
        docs: "https://web.dev/articles/maskable-icon",
        check: checks::maskable_icon,
    },
    Rule {
        code: "pwakit::manifest::icons_large",
        member: "icons",
        category: Category::Recommended,
        info: "Lists a large icon of at least 512x512",
        docs: "https://web.dev/articles/install-criteria",
        check: checks::large_icon,
    },
    Rule {
        code: "pwakit::manifest::lang",
        member: "lang",
        category: Category::Optional,
        info: "Declares a language",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/lang",
        check: checks::lang,
    },
    Rule {
        code: "pwakit::manifest::dir",
        member: "dir",
        category: Category::Optional,
        info: "Declares a text direction",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/dir",
        check: checks::dir,
    },
    Rule {
        code: "pwakit::manifest::iarc_rating_id",
        member: "iarc_rating_id",
        category: Category::Optional,
        info: "Includes an IARC rating id",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/iarc_rating_id",
        check: checks::iarc_rating_id,
    },
    Rule {
        code: "pwakit::manifest::related_applications",
        member: "related_applications",
        category: Category::Optional,
        info: "Lists related applications",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/related_applications",
        check: checks::related_applications,
    },
    Rule {
        code: "pwakit::manifest::prefer_related_applications",
        member: "prefer_related_applications",
        category: Category::Optional,
        info: "States a related-applications preference",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/prefer_related_applications",
        check: checks::prefer_related_applications,
    },
    Rule {
        code: "pwakit::manifest::shortcuts",
        member: "shortcuts",
        category: Category::Optional,
        info: "Defines shortcuts",
        docs: "https://developer.mozilla.org/en-US/docs/Web/Manifest/shortcuts",
        check: checks::shortcuts,
    },
];

/// Rule predicates. Each takes the parsed manifest object and must not panic.
mod checks {
    use serde_json::Value;

    use crate::domain::icon::{IconSize, parse_sizes};

    const DISPLAY_MODES: &[&str] = &["fullscreen", "standalone", "minimal-ui", "browser"];
    const ORIENTATIONS: &[&str] = &[
        "any",
        "natural",
        "landscape",
        "landscape-primary",
        "landscape-secondary",
        "portrait",
        "portrait-primary",
        "portrait-secondary",
    ];
    const DIRECTIONS: &[&str] = &["ltr", "rtl", "auto"];

    fn non_empty_string(manifest: &Value, member: &str) -> bool {
        manifest
            .get(member)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty())
    }

    fn non_empty_array(manifest: &Value, member: &str) -> bool {
        manifest
            .get(member)
            .and_then(Value::as_array)
            .is_some_and(|a| !a.is_empty())
    }

    fn string_in(manifest: &Value, member: &str, allowed: &[&str]) -> bool {
        manifest
            .get(member)
            .and_then(Value::as_str)
            .is_some_and(|s| allowed.contains(&s))
    }

    fn icon_entries(manifest: &Value) -> &[Value] {
        manifest
            .get("icons")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    fn any_icon_at_least(manifest: &Value, min: u32) -> bool {
        icon_entries(manifest).iter().any(|icon| {
            icon.get("sizes")
                .and_then(Value::as_str)
                .map(parse_sizes)
                .is_some_and(|sizes| {
                    sizes.iter().any(|size| match size {
                        IconSize::Any => true,
                        IconSize::Pixels(w, h) => *w >= min && *h >= min,
                    })
                })
        })
    }

    pub fn name(m: &Value) -> bool {
        non_empty_string(m, "name")
    }

    pub fn short_name(m: &Value) -> bool {
        non_empty_string(m, "short_name")
    }

    pub fn start_url(m: &Value) -> bool {
        non_empty_string(m, "start_url")
    }

    pub fn display(m: &Value) -> bool {
        string_in(m, "display", DISPLAY_MODES)
    }

    pub fn installable_icon(m: &Value) -> bool {
        any_icon_at_least(m, 192)
    }

    pub fn background_color(m: &Value) -> bool {
        non_empty_string(m, "background_color")
    }

    pub fn theme_color(m: &Value) -> bool {
        non_empty_string(m, "theme_color")
    }

    pub fn description(m: &Value) -> bool {
        non_empty_string(m, "description")
    }

    pub fn orientation(m: &Value) -> bool {
        string_in(m, "orientation", ORIENTATIONS)
    }

    pub fn screenshots(m: &Value) -> bool {
        non_empty_array(m, "screenshots")
    }

    pub fn scope(m: &Value) -> bool {
        non_empty_string(m, "scope")
    }

    pub fn categories(m: &Value) -> bool {
        non_empty_array(m, "categories")
    }

    pub fn maskable_icon(m: &Value) -> bool {
        icon_entries(m).iter().any(|icon| {
            icon.get("purpose")
                .and_then(Value::as_str)
                .is_some_and(|p| {
                    p.split_whitespace()
                        .any(|t| t.eq_ignore_ascii_case("maskable"))
                })
        })
    }

    pub fn large_icon(m: &Value) -> bool {
        any_icon_at_least(m, 512)
    }

    pub fn lang(m: &Value) -> bool {
        non_empty_string(m, "lang")
    }

    pub fn dir(m: &Value) -> bool {
        string_in(m, "dir", DIRECTIONS)
    }

    pub fn iarc_rating_id(m: &Value) -> bool {
        non_empty_string(m, "iarc_rating_id")
    }

    pub fn related_applications(m: &Value) -> bool {
        m.get("related_applications").is_some_and(Value::is_array)
    }

    pub fn prefer_related_applications(m: &Value) -> bool {
        m.get("prefer_related_applications")
            .is_some_and(Value::is_boolean)
    }

    pub fn shortcuts(m: &Value) -> bool {
        non_empty_array(m, "shortcuts")
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn rule(code: &str) -> &'static Rule {
        catalog()
            .iter()
            .find(|r| r.code == code)
            .expect("rule should exist")
    }

    #[test]
    fn test_codes_are_unique_and_namespaced() {
        let mut seen = HashSet::new();
        for rule in catalog() {
            assert!(rule.code.starts_with("pwakit::manifest::"), "{}", rule.code);
            assert!(seen.insert(rule.code), "duplicate code {}", rule.code);
        }
    }

    #[test]
    fn test_every_rule_carries_docs_link() {
        for rule in catalog() {
            assert!(rule.docs.starts_with("https://"), "{}", rule.code);
            assert!(!rule.info.is_empty(), "{}", rule.code);
        }
    }

    #[test]
    fn test_docs_root_is_stable() {
        // Catalog revisions keep MDN as the documentation host for member rules
        assert!(
            rule("pwakit::manifest::name")
                .docs
                .starts_with("https://developer.mozilla.org/en-US/docs/Web/Manifest")
        );
    }

    #[test]
    fn test_missing_member_fails_without_panicking() {
        let empty = json!({});
        for rule in catalog() {
            assert!(!rule.check(&empty), "{} passed on empty object", rule.code);
        }
    }

    #[test]
    fn test_non_object_manifest_fails_all_rules() {
        let array = json!([1, 2, 3]);
        for rule in catalog() {
            assert!(!rule.check(&array), "{} passed on array", rule.code);
        }
    }

    #[test]
    fn test_name_rejects_blank() {
        let r = rule("pwakit::manifest::name");
        assert!(r.check(&json!({"name": "App"})));
        assert!(!r.check(&json!({"name": "   "})));
        assert!(!r.check(&json!({"name": 42})));
    }

    #[test]
    fn test_display_accepts_install_modes_only() {
        let r = rule("pwakit::manifest::display");
        for mode in ["fullscreen", "standalone", "minimal-ui", "browser"] {
            assert!(r.check(&json!({"display": mode})), "{mode}");
        }
        assert!(!r.check(&json!({"display": "popup"})));
    }

    #[test]
    fn test_installable_icon_threshold() {
        let r = rule("pwakit::manifest::icons");
        assert!(r.check(&json!({"icons": [{"sizes": "192x192"}]})));
        assert!(r.check(&json!({"icons": [{"sizes": "any"}]})));
        assert!(!r.check(&json!({"icons": [{"sizes": "144x144"}]})));
        assert!(!r.check(&json!({"icons": []})));
        assert!(!r.check(&json!({"icons": "192x192"})));
    }

    #[test]
    fn test_large_icon_threshold() {
        let r = rule("pwakit::manifest::icons_large");
        assert!(r.check(&json!({"icons": [{"sizes": "512x512"}]})));
        assert!(!r.check(&json!({"icons": [{"sizes": "192x192"}]})));
    }

    #[test]
    fn test_maskable_icon_purpose_tokens() {
        let r = rule("pwakit::manifest::icons_maskable");
        assert!(r.check(&json!({"icons": [{"purpose": "maskable any"}]})));
        assert!(r.check(&json!({"icons": [{"purpose": "Maskable"}]})));
        assert!(!r.check(&json!({"icons": [{"purpose": "monochrome"}]})));
        assert!(!r.check(&json!({"icons": [{}]})));
    }

    #[test]
    fn test_orientation_tokens() {
        let r = rule("pwakit::manifest::orientation");
        assert!(r.check(&json!({"orientation": "portrait-primary"})));
        assert!(!r.check(&json!({"orientation": "diagonal"})));
    }

    #[test]
    fn test_prefer_related_applications_requires_boolean() {
        let r = rule("pwakit::manifest::prefer_related_applications");
        assert!(r.check(&json!({"prefer_related_applications": false})));
        assert!(!r.check(&json!({"prefer_related_applications": "false"})));
    }

    #[test]
    fn test_category_severity_mapping() {
        assert_eq!(Category::Required.severity(), miette::Severity::Error);
        assert_eq!(Category::Recommended.severity(), miette::Severity::Warning);
        assert_eq!(Category::Optional.severity(), miette::Severity::Advice);
    }
}
