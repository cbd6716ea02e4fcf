use api::ApiConfig;
use dioxus::prelude::*;

use ui::ApiConfigProvider;
use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Read once; runtime changes go through the provider's signal.
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ApiConfigProvider {
            config,
            Router::<Route> {}
        }
    }
}

fn load_config() -> ApiConfig {
    match ApiConfig::load() {
        Ok(config) => {
            if config.api_base_url.is_empty() {
                tracing::warn!("NOTES_API_BASE_URL is not set; requests will fail");
            } else {
                tracing::info!("Notes backend at {}", config.api_base_url);
            }
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration, using defaults: {}", e);
            ApiConfig::default()
        }
    }
}
