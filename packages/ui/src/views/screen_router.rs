use dioxus::prelude::*;
use state::Screen;

use super::{DashboardView, LoginView, RegisterView};
use crate::session::use_session;

/// Renders whichever screen the session currently selects.
#[component]
pub fn ScreenRouter() -> Element {
    let session = use_session();
    let screen = session.read().screen();

    match screen {
        Screen::Login => rsx! { LoginView {} },
        Screen::Register => rsx! { RegisterView {} },
        Screen::Dashboard(user) => rsx! { DashboardView { user } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::{render, TestProviders};
    use state::{SessionController, User, UserRole};

    #[test]
    fn test_starts_on_login() {
        fn app() -> Element {
            rsx! {
                TestProviders { ScreenRouter {} }
            }
        }

        let html = render(app);
        assert!(html.contains("Welcome Back"));
        assert!(!html.contains("Create Account"));
    }

    #[test]
    fn test_follows_session() {
        fn app() -> Element {
            rsx! {
                TestProviders { SignedIn {} }
            }
        }

        #[component]
        fn SignedIn() -> Element {
            let mut session = use_context::<Signal<SessionController>>();
            use_hook(move || {
                session
                    .write()
                    .register(User::new("sam", UserRole::Worker, "Chicago"))
            });
            rsx! { ScreenRouter {} }
        }

        let html = render(app);
        assert!(html.contains("sam"));
        assert!(html.contains("No jobs found"));
        assert!(!html.contains("Welcome Back"));
    }
}
