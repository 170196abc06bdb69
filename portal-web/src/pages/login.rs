use yew::prelude::*;

/// Sign-in screen. Credential handling belongs to the backend integration.
#[function_component(LoginView)]
pub fn login_view() -> Html {
    html! {
        <section class="panel login" aria-labelledby="login-title">
            <h1 id="login-title">{ "Sign in" }</h1>
            <form class="login-form">
                <label for="login-user">{ "Username" }</label>
                <input id="login-user" name="username" type="text" autocomplete="username" />
                <label for="login-pass">{ "Password" }</label>
                <input id="login-pass" name="password" type="password" autocomplete="current-password" />
                <button type="submit" disabled=true>{ "Continue" }</button>
            </form>
        </section>
    }
}

#[must_use]
pub fn render() -> Html {
    html! { <LoginView /> }
}
