use yew::prelude::*;

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    html! {
        <section class="panel dashboard" aria-labelledby="dashboard-title">
            <h1 id="dashboard-title">{ "Dashboard" }</h1>
            <p>{ "Nothing to show yet." }</p>
        </section>
    }
}

#[must_use]
pub fn render() -> Html {
    html! { <DashboardView /> }
}
