use client::HttpApi;
use dioxus::prelude::*;

mod auth;
mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();

    let config = client::config::load();
    tracing::info!(api = %config.api.base_url, "Starting job manager");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One HTTP client for the whole app so the session cookie is shared.
    use_context_provider(|| HttpApi::new(client::config::api()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
