pub mod config;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod models;
pub mod session;

pub use config::{AppConfig, MockLoginConfig};
pub use dashboard::{DashboardState, JobDraft};
pub use error::{ConfigError, FormError};
pub use forms::{LoginForm, RegisterForm};
pub use models::{User, UserRole};
pub use session::{select_screen, PreLoginScreen, Screen, Session, SessionController};
