//! Deployment base path handling.
//!
//! When `PUBLIC_URL` is set at compile time (e.g. `/portal` when served from a
//! subdirectory), the router is mounted under that prefix. Builds without it
//! are root-anchored.

const PUBLIC_URL: &str = match option_env!("PUBLIC_URL") {
    Some(base) => base,
    None => "",
};

/// Base path handed to the history router as its `basename`.
///
/// Returns `None` when no base path is configured so routing stays at `/`.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(PUBLIC_URL)
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        return None;
    }
    if base.starts_with('/') {
        Some(base.to_string())
    } else {
        Some(format!("/{base}"))
    }
}
