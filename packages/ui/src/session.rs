//! Session context and hooks for the UI.

use dioxus::prelude::*;
use state::{AppConfig, SessionController};

/// Get the session controller.
/// Returns a signal that updates when the user logs in, logs out, or switches
/// between the login and register forms.
pub fn use_session() -> Signal<SessionController> {
    use_context::<Signal<SessionController>>()
}

/// Get the configuration the app was launched with.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Provider component that owns the single session for the app.
/// Wrap your app with this component; every screen reads and mutates the
/// session through [`use_session`].
#[component]
pub fn SessionProvider(config: AppConfig, children: Element) -> Element {
    use_context_provider(|| Signal::new(SessionController::new()));
    use_context_provider(move || config);

    rsx! {
        {children}
    }
}
