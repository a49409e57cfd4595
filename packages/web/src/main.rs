use dioxus::prelude::*;
use state::AppConfig;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG: &str = include_str!("../marketplace.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));
    let config = use_hook(|| {
        tracing::info!("starting web client");
        AppConfig::from_toml_or_default(CONFIG)
    });
    let title = config.app.name.clone();

    rsx! {
        // Global app resources
        document::Title { "{title}" }
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::SessionProvider {
            config,
            ui::views::ScreenRouter {}
            ui::ActivityLogToggle {}
            ui::ActivityLogPanel {}
        }
    }
}
