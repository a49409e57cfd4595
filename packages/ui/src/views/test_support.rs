use dioxus::prelude::*;
use state::AppConfig;

use crate::{ActivityLog, SessionProvider};

/// Provides the same contexts a launcher does.
#[component]
pub fn TestProviders(children: Element) -> Element {
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        SessionProvider { config: AppConfig::default(), {children} }
    }
}

/// Build `app` once and render it to HTML.
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
