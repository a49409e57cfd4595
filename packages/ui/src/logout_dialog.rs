use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

#[component]
pub fn LogoutDialog(on_confirm: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "p-6",
            h3 { class: "text-lg font-bold text-gray-900 mb-2", "Sign Out" }
            p { class: "text-gray-500 mb-6", "Are you sure you want to sign out of your account?" }
            div {
                class: "flex justify-end gap-3",
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "px-4 py-2 font-medium",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    class: "px-4 py-2",
                    onclick: move |_| on_confirm.call(()),
                    "Yes, Sign Out"
                }
            }
        }
    }
}
