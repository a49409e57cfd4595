use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-blue-600 text-white rounded-lg hover:bg-blue-700 active:bg-blue-800 active:scale-95 transition-all duration-200 shadow-sm hover:shadow-md font-medium"
            }
            ButtonVariant::Outline => {
                "border-2 rounded-lg text-center transition-all"
            }
            ButtonVariant::Ghost => {
                "text-gray-600 hover:bg-gray-100 active:bg-gray-200 rounded-lg transition-colors"
            }
            ButtonVariant::Destructive => {
                "bg-red-600 text-white rounded-lg hover:bg-red-700 active:scale-95 transition-all shadow-sm font-medium"
            }
        }
    }
}

/// A `button` element styled by `variant`. Defaults to `type="button"` so it
/// never submits a surrounding form unless asked to.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] kind: String,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let base = variant.class();

    rsx! {
        button {
            r#type: kind,
            class: "{base} {class}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
