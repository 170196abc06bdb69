//! Deferred view modules.
//!
//! Routes never reference a view component directly. They carry a [`ViewId`]
//! that is resolved through a [`ViewSource`] the first time the route is
//! activated, and the resolved [`ViewModule`] is cached for later visits.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use thiserror::Error;
use yew::Html;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewId {
    Home,
    Login,
    Dashboard,
}

impl ViewId {
    #[must_use]
    pub const fn module_name(self) -> &'static str {
        match self {
            Self::Home => "HomeView",
            Self::Login => "LoginView",
            Self::Dashboard => "DashboardView",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.module_name())
    }
}

/// A loaded view: the renderable entry point a view module exports.
#[derive(Clone, Copy)]
pub struct ViewModule {
    pub id: ViewId,
    pub render: fn() -> Html,
}

impl ViewModule {
    #[must_use]
    pub fn render(&self) -> Html {
        (self.render)()
    }
}

impl PartialEq for ViewModule {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for ViewModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewModule").field("id", &self.id).finish()
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewLoadError {
    #[error("view module `{0}` is not available")]
    Unavailable(ViewId),
}

/// Where view modules are loaded from.
pub trait ViewSource {
    fn load(&self, id: ViewId) -> impl Future<Output = Result<ViewModule, ViewLoadError>>;
}

/// View source backed by a fixed registry of modules compiled into the bundle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticViewSource {
    modules: &'static [ViewModule],
}

impl StaticViewSource {
    #[must_use]
    pub const fn new(modules: &'static [ViewModule]) -> Self {
        Self { modules }
    }
}

impl Default for StaticViewSource {
    fn default() -> Self {
        Self::new(crate::pages::VIEW_MODULES)
    }
}

impl ViewSource for StaticViewSource {
    fn load(&self, id: ViewId) -> impl Future<Output = Result<ViewModule, ViewLoadError>> {
        let found = self.modules.iter().find(|module| module.id == id).copied();
        async move { found.ok_or(ViewLoadError::Unavailable(id)) }
    }
}

thread_local! {
    static LOADED: RefCell<BTreeMap<ViewId, ViewModule>> = const { RefCell::new(BTreeMap::new()) };
}

/// Whether `id` has already been resolved on this thread.
#[must_use]
pub fn is_loaded(id: ViewId) -> bool {
    LOADED.with(|loaded| loaded.borrow().contains_key(&id))
}

fn cached(id: ViewId) -> Option<ViewModule> {
    LOADED.with(|loaded| loaded.borrow().get(&id).copied())
}

/// Resolve `id` through `source`, reusing a previously loaded module when present.
///
/// # Errors
/// Propagates the source's [`ViewLoadError`]. Failures are not cached.
#[allow(clippy::future_not_send)]
pub async fn load_from<S: ViewSource>(source: &S, id: ViewId) -> Result<ViewModule, ViewLoadError> {
    if let Some(module) = cached(id) {
        return Ok(module);
    }
    let module = source.load(id).await?;
    LOADED.with(|loaded| loaded.borrow_mut().insert(id, module));
    log::debug!("loaded view module {id}");
    Ok(module)
}

/// Resolve `id` through the bundled [`StaticViewSource`].
///
/// # Errors
/// Returns [`ViewLoadError::Unavailable`] if the bundle does not register the view.
#[allow(clippy::future_not_send)]
pub async fn load(id: ViewId) -> Result<ViewModule, ViewLoadError> {
    load_from(&StaticViewSource::default(), id).await
}

#[cfg(test)]
pub(crate) fn reset_cache() {
    LOADED.with(|loaded| loaded.borrow_mut().clear());
}
