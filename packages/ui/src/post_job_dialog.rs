use dioxus::prelude::*;
use state::{DashboardState, JobDraft};

use crate::components::{Button, ButtonVariant, Input, Label, TextArea};
use crate::icons::{FaBriefcase, FaDollarSign, FaLocationDot, FaRotateLeft};
use crate::Icon;

const FIELD_ICON: &str = "text-gray-400 absolute left-3 top-3";

/// Form for drafting a job post. Field values live in the dashboard's
/// [`DashboardState`] so they survive closing and reopening the dialog.
#[component]
pub fn PostJobDialog(dashboard: Signal<DashboardState>, on_posted: EventHandler<JobDraft>) -> Element {
    let mut dashboard = dashboard;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = dashboard.write().submit_post_job();
        match result {
            Ok(draft) => on_posted.call(draft),
            Err(e) => tracing::debug!("job post not submitted: {e}"),
        }
    };

    let JobDraft {
        title,
        location,
        price,
        items,
    } = dashboard.read().draft.clone();

    rsx! {
        div {
            class: "p-6",
            h2 { class: "text-xl font-bold mb-6 text-gray-900", "Post a New Job" }

            form {
                onsubmit: handle_submit,
                div {
                    class: "space-y-4",

                    div {
                        Label { html_for: "job-title", "Job Title" }
                        div {
                            class: "relative",
                            Input {
                                id: "job-title",
                                class: "pl-10 p-2",
                                placeholder: "e.g. House Cleaning",
                                value: title,
                                required: true,
                                autofocus: true,
                                oninput: move |evt: FormEvent| dashboard.write().draft.title = evt.value(),
                            }
                            Icon { icon: FaBriefcase, width: 16, height: 16, class: FIELD_ICON.to_string() }
                        }
                    }

                    div {
                        Label { html_for: "job-location", "Location" }
                        div {
                            class: "relative",
                            Input {
                                id: "job-location",
                                class: "pl-10 p-2",
                                placeholder: "e.g. 123 Main St, New York",
                                value: location,
                                required: true,
                                oninput: move |evt: FormEvent| dashboard.write().draft.location = evt.value(),
                            }
                            Icon { icon: FaLocationDot, width: 16, height: 16, class: FIELD_ICON.to_string() }
                        }
                    }

                    div {
                        Label { html_for: "job-price", "Price ($)" }
                        div {
                            class: "relative",
                            Input {
                                id: "job-price",
                                class: "pl-10 p-2",
                                kind: "number",
                                placeholder: "e.g. 50",
                                value: price,
                                required: true,
                                oninput: move |evt: FormEvent| dashboard.write().draft.price = evt.value(),
                            }
                            Icon { icon: FaDollarSign, width: 16, height: 16, class: FIELD_ICON.to_string() }
                        }
                    }

                    div {
                        Label { html_for: "job-items", "Items (Optional)" }
                        TextArea {
                            id: "job-items",
                            class: "p-2",
                            placeholder: "e.g. Rice, Oil, Tomatoes",
                            value: items,
                            oninput: move |evt: FormEvent| dashboard.write().draft.items = evt.value(),
                        }
                        p { class: "text-xs text-gray-500 mt-1", "Separate items with commas" }
                    }

                    div {
                        class: "flex justify-end gap-2 mt-6 border-t pt-4",
                        Button {
                            variant: ButtonVariant::Ghost,
                            class: "group px-3 py-2 text-sm text-gray-500 hover:bg-red-50 hover:text-red-600 flex items-center gap-2 mr-auto",
                            onclick: move |_| dashboard.write().clear_draft(),
                            Icon { icon: FaRotateLeft, width: 16, height: 16 }
                            "Clear Form"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            class: "px-4 py-2",
                            onclick: move |_| dashboard.write().cancel_post_job(),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            kind: "submit",
                            class: "px-4 py-2",
                            "Post Job"
                        }
                    }
                }
            }
        }
    }
}
