#![cfg(target_arch = "wasm32")]

use portal_web::app::App;
use portal_web::dom;
use portal_web::router::Route;
use portal_web::views;
use wasm_bindgen_test::*;
use yew::Renderer;
use yew_router::Routable;

wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn navigate(route: Route) {
    let history = dom::window()
        .expect("window")
        .history()
        .expect("history");
    history
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&route.to_path()))
        .expect("push state");
}

async fn settle() {
    for _ in 0..5 {
        yew::platform::time::sleep(std::time::Duration::from_millis(10)).await;
    }
}

#[wasm_bindgen_test]
async fn each_route_mounts_its_lazy_view() {
    let markers = [
        (Route::Home, "home-title"),
        (Route::Login, "login-title"),
        (Route::Dashboard, "dashboard-title"),
    ];
    for (route, marker) in markers {
        navigate(route);
        let handle = Renderer::<App>::with_root(ensure_app_root()).render();
        settle().await;

        let doc = dom::document().expect("document");
        assert!(doc.get_element_by_id(marker).is_some(), "{marker} mounted");
        assert!(views::is_loaded(route.view()));
        handle.destroy();
    }
}

#[wasm_bindgen_test]
async fn skip_link_points_to_main_landmark() {
    navigate(Route::Home);
    let handle = Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;

    let doc = dom::document().expect("document");
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
    handle.destroy();
}
