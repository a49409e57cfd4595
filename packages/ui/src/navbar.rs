use dioxus::prelude::*;
use state::User;

use crate::icons::{FaBriefcase, FaPlus, FaRightFromBracket, FaUser};
use crate::Icon;

/// Dashboard header: product name, who is signed in, and the session actions.
/// "Post Job" only appears for roles that can post.
#[component]
pub fn Navbar(
    app_name: String,
    user: User,
    on_post_job: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        header {
            class: "flex justify-between items-center mb-8 bg-white p-4 rounded-xl shadow-sm border border-gray-100",

            div {
                class: "flex items-center gap-3",
                div {
                    class: "bg-blue-600 p-2 rounded-lg",
                    Icon { icon: FaBriefcase, width: 24, height: 24, class: "text-white" }
                }
                div {
                    h1 { class: "text-xl font-bold text-gray-900", "{app_name}" }
                    div {
                        class: "flex items-center gap-1 text-xs text-gray-500",
                        Icon { icon: FaUser, width: 12, height: 12 }
                        span { class: "navbar-username font-medium capitalize", "{user.username}" }
                        span { class: "text-gray-300", "|" }
                        span { class: "navbar-role bg-gray-100 px-1.5 py-0.5 rounded text-gray-600 capitalize", "{user.role}" }
                    }
                }
            }

            div {
                class: "flex items-center gap-4",
                if user.role.can_post_jobs() {
                    button {
                        class: "navbar-post-job flex items-center gap-2 bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 active:bg-blue-800 active:scale-95 transition-all duration-200 font-medium shadow-sm hover:shadow-md text-sm",
                        onclick: move |_| on_post_job.call(()),
                        Icon { icon: FaPlus, width: 16, height: 16 }
                        "Post Job"
                    }
                }
                button {
                    class: "flex items-center gap-2 text-gray-500 hover:text-red-600 hover:bg-red-50 px-3 py-2 rounded-lg transition-colors text-sm font-medium",
                    onclick: move |_| on_logout.call(()),
                    Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                    "Logout"
                }
            }
        }
    }
}
