//! Login screen with the mock username/password form.

use dioxus::prelude::*;
use state::LoginForm;

use crate::activity_log::{log_activity, use_activity_log, SessionEvent};
use crate::components::{Button, ButtonVariant, Input, Label};
use crate::icons::FaBriefcase;
use crate::session::{use_config, use_session};
use crate::Icon;

/// Login screen component.
#[component]
pub fn LoginView() -> Element {
    let mut session = use_session();
    let config = use_config();
    let mut activity_log = use_activity_log();
    let mut form = use_signal(LoginForm::default);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.read().submit(&config.mock_login);
        match result {
            Ok(user) => {
                log_activity(&mut activity_log, SessionEvent::signed_in(&user));
                session.write().login(user);
            }
            Err(e) => tracing::debug!("login not submitted: {e}"),
        }
    };

    let LoginForm { username, password } = form();

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center p-4",
            div {
                class: "bg-white rounded-2xl shadow-xl w-full max-w-md p-8",

                div {
                    class: "text-center mb-8",
                    div {
                        class: "bg-blue-600 w-12 h-12 rounded-lg flex items-center justify-center mx-auto mb-4 shadow-lg shadow-blue-200",
                        Icon { icon: FaBriefcase, width: 24, height: 24, class: "text-white" }
                    }
                    h1 { class: "text-2xl font-bold text-gray-900", "Welcome Back" }
                    p { class: "text-gray-500 mt-2", "Please sign in to your account" }
                }

                form {
                    onsubmit: handle_login,
                    class: "space-y-6",

                    div {
                        Label { html_for: "login-username", "Username" }
                        Input {
                            id: "login-username",
                            class: "px-4 py-3",
                            placeholder: "Enter your username",
                            value: username,
                            required: true,
                            oninput: move |evt: FormEvent| form.write().username = evt.value(),
                        }
                    }

                    div {
                        Label { html_for: "login-password", "Password" }
                        Input {
                            id: "login-password",
                            class: "px-4 py-3",
                            kind: "password",
                            placeholder: "••••••••",
                            value: password,
                            required: true,
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        kind: "submit",
                        class: "w-full py-3",
                        "Sign In"
                    }
                }

                div {
                    class: "mt-8 text-center text-sm text-gray-600",
                    "Don't have an account? "
                    button {
                        r#type: "button",
                        class: "text-blue-600 font-semibold hover:underline",
                        onclick: move |_| session.write().navigate_to_register(),
                        "Create account"
                    }
                }
            }
        }
    }
}
