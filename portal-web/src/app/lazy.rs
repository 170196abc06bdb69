use crate::views::{self, StaticViewSource, ViewId};
use yew::prelude::*;
use yew::suspense::use_future_with;

#[derive(Properties, Clone, PartialEq)]
pub struct LazyViewProps {
    pub view: ViewId,
    /// Registry the view is loaded from. Defaults to the bundled pages.
    #[prop_or_default]
    pub source: StaticViewSource,
}

/// Suspends until the view module behind `view` is loaded, then mounts it.
///
/// Must sit inside a `<Suspense>` boundary. A failed load is logged and
/// leaves the outlet empty.
#[function_component(LazyView)]
pub fn lazy_view(props: &LazyViewProps) -> HtmlResult {
    let loaded = use_future_with((props.view, props.source), |deps| {
        let (view, source) = *deps;
        async move { views::load_from(&source, view).await }
    })?;
    Ok(match &*loaded {
        Ok(module) => module.render(),
        Err(err) => {
            log::error!("Failed to load route view: {err}");
            Html::default()
        }
    })
}
