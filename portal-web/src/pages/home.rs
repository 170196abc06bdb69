use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomeView)]
pub fn home_view() -> Html {
    html! {
        <section class="panel home" aria-labelledby="home-title">
            <h1 id="home-title">{ "Welcome" }</h1>
            <p>{ "Sign in to reach your dashboard." }</p>
            <Link<Route> to={Route::Login} classes="btn btn-primary">{ "Sign in" }</Link<Route>>
        </section>
    }
}

#[must_use]
pub fn render() -> Html {
    html! { <HomeView /> }
}
