//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

mod session;
pub use session::{use_config, use_session, SessionProvider};

mod navbar;
pub use navbar::Navbar;

mod post_job_dialog;
pub use post_job_dialog::PostJobDialog;

mod logout_dialog;
pub use logout_dialog::LogoutDialog;

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityEntry, ActivityLog, SessionEvent};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
