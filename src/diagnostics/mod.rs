//! Diagnostic bridge
//!
//! Projects failing validation results onto line/column-anchored
//! diagnostics over the raw manifest text, and answers "give me a fix for
//! this diagnostic" queries. Matching between a diagnostic and its
//! remediation is solely by rule code equality; this module owns no
//! validation logic.

use serde::Serialize;

use crate::rules::Category;
use crate::validation::ValidationResult;

/// 1-based position in the manifest text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A position-anchored finding tagged with a stable rule code
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub code: &'static str,
    pub message: String,
    pub docs: &'static str,
    pub category: Category,
    pub position: Position,
}

impl Diagnostic {
    /// Severity for renderers that speak miette
    pub fn severity(&self) -> miette::Severity {
        self.category.severity()
    }
}

/// Build one diagnostic per failing result, preserving result order
pub fn from_results(manifest_text: &str, results: &[ValidationResult]) -> Vec<Diagnostic> {
    results
        .iter()
        .filter(|result| !result.passed)
        .map(|result| Diagnostic {
            code: result.code,
            message: format!("{}: not satisfied", result.info),
            docs: result.docs,
            category: result.category,
            position: anchor(manifest_text, result.member),
        })
        .collect()
}

/// Locate the quoted member textually. Members absent from the text
/// anchor at 1:1.
fn anchor(text: &str, member: &str) -> Position {
    let needle = format!("\"{member}\"");
    match text.find(&needle) {
        Some(offset) => position_at(text, offset),
        None => Position { line: 1, column: 1 },
    }
}

fn position_at(text: &str, offset: usize) -> Position {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before.rfind('\n').map_or(offset, |nl| offset - nl - 1) + 1;
    Position { line, column }
}

/// A remediation suggestion for a failing rule
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Fix {
    pub code: &'static str,
    pub summary: &'static str,
    /// JSON member snippet to add or correct
    pub snippet: &'static str,
}

/// Remediation for a diagnostic, matched solely by rule code equality
pub fn fix_for(code: &str) -> Option<&'static Fix> {
    FIXES.iter().find(|fix| fix.code == code)
}

static FIXES: &[Fix] = &[
    Fix {
        code: "pwakit::manifest::name",
        summary: "Add a full application name",
        snippet: r#""name": "My Application""#,
    },
    Fix {
        code: "pwakit::manifest::short_name",
        summary: "Add a short name for launchers and home screens",
        snippet: r#""short_name": "MyApp""#,
    },
    Fix {
        code: "pwakit::manifest::start_url",
        summary: "Add the URL the app opens at",
        snippet: r#""start_url": "/""#,
    },
    Fix {
        code: "pwakit::manifest::display",
        summary: "Pick an install-capable display mode",
        snippet: r#""display": "standalone""#,
    },
    Fix {
        code: "pwakit::manifest::icons",
        summary: "List an icon of at least 192x192",
        snippet: r#""icons": [{"src": "icons/192x192-icon.png", "sizes": "192x192", "type": "image/png"}]"#,
    },
    Fix {
        code: "pwakit::manifest::background_color",
        summary: "Add a splash-screen background color",
        snippet: r##""background_color": "#ffffff""##,
    },
    Fix {
        code: "pwakit::manifest::theme_color",
        summary: "Add a browser-chrome theme color",
        snippet: r##""theme_color": "#2f3d58""##,
    },
    Fix {
        code: "pwakit::manifest::description",
        summary: "Describe what the application does",
        snippet: r#""description": "What this application does""#,
    },
    Fix {
        code: "pwakit::manifest::orientation",
        summary: "Declare the preferred orientation",
        snippet: r#""orientation": "any""#,
    },
    Fix {
        code: "pwakit::manifest::screenshots",
        summary: "List store-quality screenshots",
        snippet: r#""screenshots": [{"src": "screenshots/home.png", "sizes": "1280x720", "type": "image/png"}]"#,
    },
    Fix {
        code: "pwakit::manifest::scope",
        summary: "Define the navigation scope",
        snippet: r#""scope": "/""#,
    },
    Fix {
        code: "pwakit::manifest::categories",
        summary: "Categorize the application for stores",
        snippet: r#""categories": ["productivity"]"#,
    },
    Fix {
        code: "pwakit::manifest::icons_maskable",
        summary: "Mark an icon as maskable",
        snippet: r#""purpose": "maskable""#,
    },
    Fix {
        code: "pwakit::manifest::icons_large",
        summary: "List a 512x512 icon for splash screens",
        snippet: r#""icons": [{"src": "icons/512x512-icon.png", "sizes": "512x512", "type": "image/png"}]"#,
    },
    Fix {
        code: "pwakit::manifest::lang",
        summary: "Declare the primary language",
        snippet: r#""lang": "en""#,
    },
    Fix {
        code: "pwakit::manifest::dir",
        summary: "Declare the text direction",
        snippet: r#""dir": "ltr""#,
    },
    Fix {
        code: "pwakit::manifest::iarc_rating_id",
        summary: "Add the IARC rating id",
        snippet: r#""iarc_rating_id": "e84b072d-71b3-4d3e-86ae-31a8ce4e53b7""#,
    },
    Fix {
        code: "pwakit::manifest::related_applications",
        summary: "List related store applications",
        snippet: r#""related_applications": []"#,
    },
    Fix {
        code: "pwakit::manifest::prefer_related_applications",
        summary: "State the related-applications preference",
        snippet: r#""prefer_related_applications": false"#,
    },
    Fix {
        code: "pwakit::manifest::shortcuts",
        summary: "Define app shortcuts",
        snippet: r#""shortcuts": [{"name": "Home", "url": "/"}]"#,
    },
];
