mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod jobs_placeholder;
pub use jobs_placeholder::JobsPlaceholder;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod dashboard;
pub use dashboard::{DashboardLayout, DashboardView};

mod screen_router;
pub use screen_router::ScreenRouter;

#[cfg(test)]
pub(crate) mod test_support;
