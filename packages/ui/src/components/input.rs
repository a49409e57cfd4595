use dioxus::prelude::*;

const FIELD_CLASS: &str = "w-full border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent outline-none transition-all";

#[component]
pub fn Input(
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] class: String,
    id: Option<String>,
    placeholder: Option<String>,
    value: String,
    #[props(default)] required: bool,
    #[props(default)] autofocus: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id,
            r#type: kind,
            class: "{FIELD_CLASS} {class}",
            placeholder,
            value,
            required,
            autofocus,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn TextArea(
    #[props(default)] class: String,
    id: Option<String>,
    placeholder: Option<String>,
    value: String,
    #[props(default = 3)] rows: u32,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id,
            class: "{FIELD_CLASS} {class}",
            placeholder,
            rows: "{rows}",
            value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
