//! Service worker content checks
//!
//! The worker script's existence and raw text are inspected by substring,
//! never parsed: the consumer only cares whether caching is mentioned and
//! whether the index document registers the worker.

/// Registration snippet the caller pastes into an index document
pub const REGISTRATION_SNIPPET: &str =
    "<script>navigator.serviceWorker.register('/service-worker.js');</script>";

const CACHING_KEYWORDS: &[&str] = &["precache", "cache", "caches"];

/// Whether the worker text mentions precaching or the Cache API
pub fn handles_caching(worker_text: &str) -> bool {
    CACHING_KEYWORDS
        .iter()
        .any(|keyword| worker_text.contains(keyword))
}

/// Whether the index document registers a service worker
pub fn registered_in(index_text: &str) -> bool {
    index_text.contains("serviceWorker.register")
}
