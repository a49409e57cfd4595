use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: html_for,
            class: "block text-sm font-medium text-gray-700 mb-1",
            {children}
        }
    }
}
