//! # Session and screen selection
//!
//! [`SessionController`] is the single owner of the [`Session`] and of the
//! pre-login screen choice. Every mutation goes through it; screens only emit
//! intents (login, register, logout, navigate) that the UI forwards here.
//!
//! Which screen is visible is never stored. [`select_screen`] derives it from
//! the session and the pre-login choice:
//!
//! | Session | Pre-login | Screen |
//! |---------|-----------|--------|
//! | `Absent` | `Login` | [`Screen::Login`] |
//! | `Absent` | `Register` | [`Screen::Register`] |
//! | `Present(user)` | any | [`Screen::Dashboard`] |

use crate::models::User;

/// Whether someone is signed in, and who.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Absent,
    Present(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Absent => None,
            Session::Present(user) => Some(user),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Session::Present(_))
    }
}

/// Which form to show while nobody is signed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreLoginScreen {
    #[default]
    Login,
    Register,
}

/// The screen to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Dashboard(User),
}

/// Pick the screen for the current session and pre-login choice.
pub fn select_screen(session: &Session, pre_login: PreLoginScreen) -> Screen {
    match (session, pre_login) {
        (Session::Present(user), _) => Screen::Dashboard(user.clone()),
        (Session::Absent, PreLoginScreen::Login) => Screen::Login,
        (Session::Absent, PreLoginScreen::Register) => Screen::Register,
    }
}

/// Owns the session and the pre-login screen choice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionController {
    session: Session,
    pre_login: PreLoginScreen,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_present()
    }

    pub fn pre_login_screen(&self) -> PreLoginScreen {
        self.pre_login
    }

    pub fn screen(&self) -> Screen {
        select_screen(&self.session, self.pre_login)
    }

    /// Sign `user` in. Any previous session is replaced.
    pub fn login(&mut self, user: User) {
        tracing::info!(username = %user.username, role = %user.role, "signed in");
        self.session = Session::Present(user);
    }

    /// Same effect as [`login`](Self::login); nothing checks for duplicates.
    pub fn register(&mut self, user: User) {
        tracing::info!(
            username = %user.username,
            role = %user.role,
            city = %user.city,
            "registered"
        );
        self.session = Session::Present(user);
    }

    /// Drop the session and go back to the login form.
    pub fn logout(&mut self) {
        if let Session::Present(user) = &self.session {
            tracing::info!(username = %user.username, "signed out");
        }
        self.session = Session::Absent;
        self.pre_login = PreLoginScreen::Login;
    }

    pub fn navigate_to_register(&mut self) {
        tracing::debug!("pre-login screen -> register");
        self.pre_login = PreLoginScreen::Register;
    }

    pub fn navigate_to_login(&mut self) {
        tracing::debug!("pre-login screen -> login");
        self.pre_login = PreLoginScreen::Login;
    }
}
