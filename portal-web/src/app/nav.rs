use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let active = use_route::<Route>();
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <nav aria-label="Primary" class="navbar">
                <ul class="menu menu-horizontal">
                    { for Route::ALL.into_iter().map(|route| {
                        let current = (active == Some(route)).then_some("page");
                        html! {
                            <li key={route.name()} aria-current={current}>
                                <Link<Route> to={route}>{ route.name() }</Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        </header>
    }
}
