//! Backend configuration context for the UI.

use api::ApiConfig;
use dioxus::prelude::*;

/// Get the backend configuration.
/// Views that read it re-run their loads when it is replaced.
pub fn use_api_config() -> Signal<ApiConfig> {
    use_context::<Signal<ApiConfig>>()
}

/// Provider component that makes the backend configuration available.
///
/// `config` is the initial value; later changes go through the signal
/// returned by [`use_api_config`].
#[component]
pub fn ApiConfigProvider(config: ApiConfig, children: Element) -> Element {
    let api_config = use_signal(move || config);

    use_context_provider(|| api_config);

    rsx! {
        {children}
    }
}
