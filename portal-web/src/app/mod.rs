use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod lazy;
pub mod nav;

pub use lazy::LazyView;
pub use nav::NavBar;

/// Root component: HTML5 history router mounted under the configured base path.
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppShell />
        </BrowserRouter>
    }
}

/// Navigation chrome plus the routed view. Needs a router context above it.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let matched = use_route::<Route>().is_some();
    let path = use_location().map(|loc| loc.path().to_string()).unwrap_or_default();
    use_effect_with((path, matched), |(path, matched)| {
        // No catch-all route is declared; the outlet stays empty.
        if !*matched {
            log::warn!("no route matches `{path}`");
        }
    });
    html! {
        <>
            <NavBar />
            <main id="main" role="main">
                <Switch<Route> render={switch} />
            </main>
        </>
    }
}

fn switch(route: Route) -> Html {
    let view = route.view();
    html! {
        <Suspense fallback={loading_fallback()}>
            <LazyView key={view.module_name()} {view} />
        </Suspense>
    }
}

fn loading_fallback() -> Html {
    html! {
        <div class="loading" aria-busy="true" aria-live="polite">{ "Loading…" }</div>
    }
}
