//! Session history for the current page load.
//!
//! Sign-ins, registrations, sign-outs and submitted job posts are recorded as
//! [`SessionEvent`]s and listed by `ActivityLogPanel`. Like everything else in
//! the app, the history is gone on reload.

use dioxus::prelude::*;
use state::{JobDraft, User, UserRole};

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    SignedIn { username: String },
    Registered { username: String, role: UserRole, city: String },
    SignedOut { username: String },
    JobPosted { title: String, price: String, items: usize },
}

impl SessionEvent {
    pub fn signed_in(user: &User) -> Self {
        SessionEvent::SignedIn {
            username: user.username.clone(),
        }
    }

    pub fn registered(user: &User) -> Self {
        SessionEvent::Registered {
            username: user.username.clone(),
            role: user.role,
            city: user.city.clone(),
        }
    }

    pub fn signed_out(user: &User) -> Self {
        SessionEvent::SignedOut {
            username: user.username.clone(),
        }
    }

    pub fn job_posted(draft: &JobDraft) -> Self {
        SessionEvent::JobPosted {
            title: draft.title.clone(),
            price: draft.price.clone(),
            items: draft.item_list().len(),
        }
    }

    /// Short badge text.
    pub fn label(&self) -> &'static str {
        match self {
            SessionEvent::SignedIn { .. } => "Sign in",
            SessionEvent::Registered { .. } => "Register",
            SessionEvent::SignedOut { .. } => "Sign out",
            SessionEvent::JobPosted { .. } => "Job post",
        }
    }

    /// Tailwind classes for the badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            SessionEvent::SignedIn { .. } | SessionEvent::Registered { .. } => {
                "bg-blue-50 text-blue-700"
            }
            SessionEvent::SignedOut { .. } => "bg-red-50 text-red-600",
            SessionEvent::JobPosted { .. } => "bg-green-50 text-green-700",
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SessionEvent::SignedIn { username } => format!("{username} signed in"),
            SessionEvent::Registered {
                username,
                role,
                city,
            } => format!("{username} joined as a {role} in {city}"),
            SessionEvent::SignedOut { username } => format!("{username} signed out"),
            SessionEvent::JobPosted {
                title,
                price,
                items: 0,
            } => format!("\"{title}\" for ${price} (not saved)"),
            SessionEvent::JobPosted {
                title,
                price,
                items,
            } => format!("\"{title}\" for ${price}, {items} item(s) (not saved)"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub event: SessionEvent,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<ActivityEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn record(&mut self, event: SessionEvent) {
        self.entries.push(ActivityEntry {
            timestamp: current_time(),
            event,
        });
    }

    /// Number of job posts submitted, and dropped, so far.
    pub fn jobs_posted(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.event, SessionEvent::JobPosted { .. }))
            .count()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, event: SessionEvent) {
    log.write().record(event);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maria() -> User {
        User::new("maria", UserRole::Client, "New York")
    }

    #[test]
    fn test_record_keeps_order() {
        let mut log = ActivityLog::default();
        log.record(SessionEvent::signed_in(&maria()));
        log.record(SessionEvent::signed_out(&maria()));

        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[0].event.label(), "Sign in");
        assert_eq!(log.entries[1].event.describe(), "maria signed out");
        assert!(!log.visible);
    }

    #[test]
    fn test_describe_registration() {
        let user = User::new("kofi", UserRole::Worker, "Accra");
        assert_eq!(
            SessionEvent::registered(&user).describe(),
            "kofi joined as a worker in Accra"
        );
    }

    #[test]
    fn test_job_post_counts_items() {
        let draft = JobDraft {
            title: "House Cleaning".to_string(),
            location: "123 Main St".to_string(),
            price: "50".to_string(),
            items: "Rice, Oil, ".to_string(),
        };
        let event = SessionEvent::job_posted(&draft);
        assert_eq!(event.describe(), "\"House Cleaning\" for $50, 2 item(s) (not saved)");

        let bare = JobDraft {
            items: String::new(),
            ..draft
        };
        assert_eq!(
            SessionEvent::job_posted(&bare).describe(),
            "\"House Cleaning\" for $50 (not saved)"
        );
    }

    #[test]
    fn test_jobs_posted_counts_only_posts() {
        let mut log = ActivityLog::default();
        log.record(SessionEvent::signed_in(&maria()));
        assert_eq!(log.jobs_posted(), 0);
        log.record(SessionEvent::JobPosted {
            title: "Gardening".to_string(),
            price: "20".to_string(),
            items: 0,
        });
        assert_eq!(log.jobs_posted(), 1);
    }

    #[test]
    fn test_timestamp_is_local_wall_clock() {
        use chrono::{Local, NaiveTime};

        let stamp = NaiveTime::parse_from_str(&current_time(), "%H:%M:%S").unwrap();
        let drift = Local::now()
            .time()
            .signed_duration_since(stamp)
            .num_seconds()
            .abs();
        // Tolerate a midnight rollover between the two reads.
        assert!(drift <= 5 || drift >= 86_395, "drift was {drift}s");
    }
}
