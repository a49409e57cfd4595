//! Registration screen: username, password, city and a client/worker choice.

use dioxus::prelude::*;
use state::{RegisterForm, UserRole};

use crate::activity_log::{log_activity, use_activity_log, SessionEvent};
use crate::components::{Button, ButtonVariant, Input, Label};
use crate::session::use_session;

const ROLE_SELECTED: &str = "p-3 border-blue-600 bg-blue-50 text-blue-700 font-medium";
const ROLE_UNSELECTED: &str = "p-3 border-gray-200 text-gray-500 hover:border-gray-300";

/// Register screen component.
#[component]
pub fn RegisterView() -> Element {
    let mut session = use_session();
    let mut activity_log = use_activity_log();
    let mut form = use_signal(RegisterForm::default);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.read().submit();
        match result {
            Ok(user) => {
                log_activity(&mut activity_log, SessionEvent::registered(&user));
                session.write().register(user);
            }
            Err(e) => tracing::debug!("registration not submitted: {e}"),
        }
    };

    let RegisterForm {
        username,
        password,
        city,
        role,
    } = form();

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center p-4",
            div {
                class: "bg-white rounded-2xl shadow-xl w-full max-w-md p-8",

                div {
                    class: "text-center mb-8",
                    h1 { class: "text-2xl font-bold text-gray-900", "Create Account" }
                    p { class: "text-gray-500 mt-2", "Join us as a Client or Worker" }
                }

                form {
                    onsubmit: handle_register,
                    class: "space-y-4",

                    div {
                        Label { html_for: "register-username", "Username" }
                        Input {
                            id: "register-username",
                            class: "px-4 py-2",
                            value: username,
                            required: true,
                            oninput: move |evt: FormEvent| form.write().username = evt.value(),
                        }
                    }

                    div {
                        Label { html_for: "register-password", "Password" }
                        Input {
                            id: "register-password",
                            class: "px-4 py-2",
                            kind: "password",
                            value: password,
                            required: true,
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }

                    div {
                        Label { html_for: "register-city", "City" }
                        Input {
                            id: "register-city",
                            class: "px-4 py-2",
                            placeholder: "e.g. New York",
                            value: city,
                            required: true,
                            oninput: move |evt: FormEvent| form.write().city = evt.value(),
                        }
                    }

                    div {
                        p { class: "block text-sm font-medium text-gray-700 mb-1", "I want to be a" }
                        div {
                            class: "grid grid-cols-2 gap-4",
                            for option in [UserRole::Client, UserRole::Worker] {
                                Button {
                                    key: "{option}",
                                    variant: ButtonVariant::Outline,
                                    class: if role == option { ROLE_SELECTED.to_string() } else { ROLE_UNSELECTED.to_string() },
                                    onclick: move |_| form.write().role = option,
                                    "{option.label()}"
                                }
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        kind: "submit",
                        class: "w-full py-3 mt-4",
                        "Register"
                    }
                }

                div {
                    class: "mt-8 text-center text-sm text-gray-600",
                    "Already have an account? "
                    button {
                        r#type: "button",
                        class: "text-blue-600 font-semibold hover:underline",
                        onclick: move |_| session.write().navigate_to_login(),
                        "Login"
                    }
                }
            }
        }
    }
}
