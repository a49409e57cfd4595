//! Field state for the login and registration forms.
//!
//! Values are kept exactly as typed. The only check is that required fields
//! are non-empty; a rejected submit changes nothing.

use crate::config::MockLoginConfig;
use crate::error::{require, FormError};
use crate::models::{User, UserRole};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Mock sign-in: any non-empty username/password pair succeeds, and the
    /// role and city come from `mock` rather than from the user.
    pub fn submit(&self, mock: &MockLoginConfig) -> Result<User, FormError> {
        require("Username", &self.username)?;
        require("Password", &self.password)?;
        Ok(User::new(self.username.clone(), mock.role, mock.city.clone()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub city: String,
    pub role: UserRole,
}

impl RegisterForm {
    pub fn submit(&self) -> Result<User, FormError> {
        require("Username", &self.username)?;
        require("Password", &self.password)?;
        require("City", &self.city)?;
        Ok(User::new(self.username.clone(), self.role, self.city.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_uses_mock_identity() {
        let user = login("maria", "hunter2")
            .submit(&MockLoginConfig::default())
            .unwrap();
        assert_eq!(user.username, "maria");
        assert_eq!(user.role, UserRole::Client);
        assert_eq!(user.city, "New York");
    }

    #[test]
    fn test_login_ignores_entered_password() {
        let a = login("maria", "a").submit(&MockLoginConfig::default()).unwrap();
        let b = login("maria", "b").submit(&MockLoginConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_login_follows_configured_identity() {
        let mock = MockLoginConfig {
            role: UserRole::Worker,
            city: "Accra".to_string(),
        };
        let user = login("kofi", "pw").submit(&mock).unwrap();
        assert_eq!(user, User::new("kofi", UserRole::Worker, "Accra"));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mock = MockLoginConfig::default();
        assert_eq!(login("", "pw").submit(&mock), Err(FormError::MissingField("Username")));
        assert_eq!(login("maria", "").submit(&mock), Err(FormError::MissingField("Password")));
        assert_eq!(login("", "").submit(&mock), Err(FormError::MissingField("Username")));
    }

    #[test]
    fn test_register_keeps_values_as_entered() {
        let form = RegisterForm {
            username: " Sam ".to_string(),
            password: "pw".to_string(),
            city: "Chicago".to_string(),
            role: UserRole::Worker,
        };
        assert_eq!(form.submit(), Ok(User::new(" Sam ", UserRole::Worker, "Chicago")));
    }

    #[test]
    fn test_register_defaults_to_client() {
        let form = RegisterForm {
            username: "sam".to_string(),
            password: "pw".to_string(),
            city: "Chicago".to_string(),
            ..Default::default()
        };
        assert_eq!(form.submit().unwrap().role, UserRole::Client);
    }

    #[test]
    fn test_register_requires_city() {
        let form = RegisterForm {
            username: "sam".to_string(),
            password: "pw".to_string(),
            ..Default::default()
        };
        let err = form.submit().unwrap_err();
        assert_eq!(err, FormError::MissingField("City"));
        assert_eq!(err.to_string(), "City is required");
    }
}
