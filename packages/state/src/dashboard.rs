//! # Dashboard-local state
//!
//! Everything here lives as long as the dashboard is mounted and is dropped
//! with it on logout. Nothing is persisted: a submitted [`JobDraft`] is handed
//! back to the caller to be logged, and the dashboard keeps showing its empty
//! listing.

use crate::error::{require, FormError};

/// Fields of the post-job form. Price is kept as the raw input string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub location: String,
    pub price: String,
    /// Comma-separated, optional.
    pub items: String,
}

impl JobDraft {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Title, location and price must be filled in; items may be blank.
    pub fn validate(&self) -> Result<(), FormError> {
        require("Job Title", &self.title)?;
        require("Location", &self.location)?;
        require("Price", &self.price)?;
        Ok(())
    }

    /// The items text split on commas, trimmed, blanks dropped.
    pub fn item_list(&self) -> Vec<&str> {
        self.items
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect()
    }
}

/// Modal flags and the job draft for one mounted dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub post_job_open: bool,
    pub logout_confirm_open: bool,
    pub draft: JobDraft,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_post_job(&mut self) {
        self.post_job_open = true;
    }

    /// Close the post-job modal. The draft is kept for the next time it opens.
    pub fn cancel_post_job(&mut self) {
        self.post_job_open = false;
    }

    /// Reset every draft field; the modal stays as it is.
    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Close the modal and clear the form, returning the discarded draft.
    /// A draft missing a required field leaves everything untouched.
    pub fn submit_post_job(&mut self) -> Result<JobDraft, FormError> {
        self.draft.validate()?;
        self.post_job_open = false;
        Ok(std::mem::take(&mut self.draft))
    }

    pub fn request_logout(&mut self) {
        self.logout_confirm_open = true;
    }

    pub fn cancel_logout(&mut self) {
        self.logout_confirm_open = false;
    }

    /// Close the confirmation. Returns whether it was open, i.e. whether the
    /// caller should now end the session.
    pub fn confirm_logout(&mut self) -> bool {
        std::mem::replace(&mut self.logout_confirm_open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> JobDraft {
        JobDraft {
            title: "House Cleaning".to_string(),
            location: "123 Main St, New York".to_string(),
            price: "50".to_string(),
            items: "Rice, Oil, Tomatoes".to_string(),
        }
    }

    #[test]
    fn test_clear_keeps_modal_open() {
        let mut dash = DashboardState::new();
        dash.open_post_job();
        dash.draft = filled();

        dash.clear_draft();
        assert!(dash.post_job_open);
        assert_eq!(dash.draft.title, "");
        assert_eq!(dash.draft.location, "");
        assert_eq!(dash.draft.price, "");
        assert_eq!(dash.draft.items, "");
    }

    #[test]
    fn test_submit_closes_and_clears() {
        let mut dash = DashboardState::new();
        dash.open_post_job();
        dash.draft = filled();

        let posted = dash.submit_post_job().unwrap();
        assert_eq!(posted, filled());
        assert!(!dash.post_job_open);
        assert_eq!(dash.draft, JobDraft::default());
    }

    #[test]
    fn test_submit_without_items() {
        let mut dash = DashboardState::new();
        dash.open_post_job();
        dash.draft = JobDraft {
            items: String::new(),
            ..filled()
        };
        assert!(dash.submit_post_job().is_ok());
    }

    #[test]
    fn test_submit_rejects_missing_price() {
        let mut dash = DashboardState::new();
        dash.open_post_job();
        dash.draft = JobDraft {
            price: String::new(),
            ..filled()
        };

        assert_eq!(dash.submit_post_job(), Err(FormError::MissingField("Price")));
        assert!(dash.post_job_open);
        assert_eq!(dash.draft.title, "House Cleaning");
    }

    #[test]
    fn test_price_is_not_parsed() {
        let mut dash = DashboardState::new();
        dash.draft = JobDraft {
            price: "fifty-ish".to_string(),
            ..filled()
        };
        assert_eq!(dash.submit_post_job().unwrap().price, "fifty-ish");
    }

    #[test]
    fn test_cancel_keeps_draft() {
        let mut dash = DashboardState::new();
        dash.open_post_job();
        dash.draft.title = "Gardening".to_string();

        dash.cancel_post_job();
        assert!(!dash.post_job_open);
        dash.open_post_job();
        assert_eq!(dash.draft.title, "Gardening");
    }

    #[test]
    fn test_item_list() {
        assert_eq!(filled().item_list(), vec!["Rice", "Oil", "Tomatoes"]);
        let draft = JobDraft {
            items: " ,a,, b ,".to_string(),
            ..JobDraft::default()
        };
        assert_eq!(draft.item_list(), vec!["a", "b"]);
        assert!(JobDraft::default().item_list().is_empty());
    }

    #[test]
    fn test_logout_confirmation() {
        let mut dash = DashboardState::new();
        assert!(!dash.confirm_logout());

        dash.request_logout();
        dash.cancel_logout();
        assert!(!dash.logout_confirm_open);

        dash.request_logout();
        assert!(dash.confirm_logout());
        assert!(!dash.logout_confirm_open);
    }
}
