use dioxus::prelude::*;
use state::UserRole;

use crate::icons::FaBriefcase;
use crate::Icon;

/// Empty job listing. Nothing is ever stored, so this is all the dashboard
/// has to show.
#[component]
pub fn JobsPlaceholder(role: UserRole, on_post_job: EventHandler<()>) -> Element {
    let hint = if role.can_post_jobs() {
        "Get started by posting a new job opportunity."
    } else {
        "There are no jobs currently available in your area."
    };

    rsx! {
        main {
            class: "bg-white rounded-xl shadow-sm border border-gray-200 p-12 text-center min-h-[400px] flex flex-col items-center justify-center",
            div {
                class: "max-w-md mx-auto",
                div {
                    class: "bg-gray-50 w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-4",
                    Icon { icon: FaBriefcase, width: 32, height: 32, class: "text-gray-400" }
                }
                h3 { class: "text-lg font-medium text-gray-900 mb-2", "No jobs found" }
                p { class: "text-gray-500 mb-6", "{hint}" }
                if role.can_post_jobs() {
                    button {
                        class: "inline-flex items-center gap-2 text-blue-600 hover:text-blue-700 active:scale-95 transition-transform font-medium",
                        onclick: move |_| on_post_job.call(()),
                        "Create a job post →"
                    }
                }
            }
        }
    }
}
