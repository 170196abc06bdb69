use web_sys::{Document, Element, Window};

/// Retrieve the global `window` object, if running in a browser context.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the current document, if available.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// The `#app` mount point declared by `index.html`, if present.
#[must_use]
pub fn app_root() -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id("app"))
}
