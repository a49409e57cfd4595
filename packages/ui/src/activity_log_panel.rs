use dioxus::prelude::*;

use crate::activity_log::use_activity_log;

/// Floating list of this page load's session events, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let entries = log().entries.clone();
    let jobs_posted = log().jobs_posted();

    rsx! {
        div {
            class: "fixed right-4 bottom-16 z-[60] w-80 max-h-72 flex flex-col bg-white rounded-xl shadow-xl border border-gray-200 text-sm",
            div {
                class: "flex items-center justify-between px-3 py-2 border-b border-gray-100",
                div {
                    span { class: "font-semibold text-gray-900", "Session activity" }
                    if jobs_posted > 0 {
                        span { class: "ml-2 text-xs text-gray-500", "{jobs_posted} job post(s) discarded" }
                    }
                }
                div {
                    class: "flex gap-2 text-xs text-gray-500",
                    button {
                        class: "hover:text-red-600",
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        class: "hover:text-gray-900",
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            ul {
                class: "overflow-y-auto px-3 py-2 space-y-1.5",
                if entries.is_empty() {
                    li { class: "text-gray-400", "No activity yet" }
                }
                for entry in entries.iter().rev() {
                    li {
                        class: "flex items-baseline gap-2",
                        span { class: "font-mono text-xs text-gray-400", "{entry.timestamp}" }
                        span {
                            class: "px-1.5 py-0.5 rounded text-xs font-medium {entry.event.badge_class()}",
                            "{entry.event.label()}"
                        }
                        span { class: "text-gray-700", "{entry.event.describe()}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log().entries.len();

    rsx! {
        button {
            class: "fixed right-4 bottom-4 z-[60] min-w-9 px-2.5 py-1.5 rounded-full bg-white border border-gray-200 shadow-sm text-xs text-gray-600 hover:bg-gray-50",
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            title: "Session activity",
            if count > 0 {
                "{count}"
            } else {
                "Log"
            }
        }
    }
}
