//! Dashboard for a signed-in user.

use dioxus::prelude::*;
use state::{DashboardState, JobDraft, User};

use super::{JobsPlaceholder, ModalOverlay};
use crate::activity_log::{log_activity, use_activity_log, SessionEvent};
use crate::session::{use_config, use_session};
use crate::{LogoutDialog, Navbar, PostJobDialog};

/// Dashboard component. Its modal flags and job draft are local and are
/// dropped when the session ends and the dashboard unmounts.
#[component]
pub fn DashboardView(user: User) -> Element {
    let dashboard = use_signal(DashboardState::new);

    rsx! {
        DashboardLayout { user, dashboard }
    }
}

/// Header, empty listing and modals for `user`, driven by `dashboard`.
#[component]
pub fn DashboardLayout(user: User, dashboard: Signal<DashboardState>) -> Element {
    let mut dashboard = dashboard;
    let mut session = use_session();
    let config = use_config();
    let mut activity_log = use_activity_log();

    let handle_posted = move |draft: JobDraft| {
        // No backend: the draft is logged and dropped.
        tracing::info!(
            title = %draft.title,
            location = %draft.location,
            price = %draft.price,
            items = ?draft.item_list(),
            "job post submitted"
        );
        log_activity(&mut activity_log, SessionEvent::job_posted(&draft));
    };

    let signed_out = SessionEvent::signed_out(&user);
    let handle_logout = move |_| {
        if dashboard.write().confirm_logout() {
            log_activity(&mut activity_log, signed_out.clone());
            session.write().logout();
        }
    };

    let DashboardState {
        post_job_open,
        logout_confirm_open,
        ..
    } = dashboard();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 font-sans text-gray-900",
            div {
                class: "max-w-5xl mx-auto p-6",

                Navbar {
                    app_name: config.app.name.clone(),
                    user: user.clone(),
                    on_post_job: move |_| dashboard.write().open_post_job(),
                    on_logout: move |_| dashboard.write().request_logout(),
                }

                JobsPlaceholder {
                    role: user.role,
                    on_post_job: move |_| dashboard.write().open_post_job(),
                }

                if post_job_open {
                    ModalOverlay {
                        width: "max-w-lg",
                        on_close: move |_| dashboard.write().cancel_post_job(),
                        PostJobDialog { dashboard, on_posted: handle_posted }
                    }
                }

                if logout_confirm_open {
                    ModalOverlay {
                        width: "max-w-sm",
                        on_close: move |_| dashboard.write().cancel_logout(),
                        LogoutDialog {
                            on_cancel: move |_| dashboard.write().cancel_logout(),
                            on_confirm: handle_logout,
                        }
                    }
                }
            }
        }
    }
}
