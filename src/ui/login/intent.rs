use crate::ui::store::Intent;

/// Transitions of the login page slice.
#[derive(Debug, Clone)]
pub enum LoginIntent {
    SetLoading(bool),
    /// Replace the email field. Editing clears any visible error.
    SetEmail(String),
    /// Replace the password field. Editing clears any visible error.
    SetPassword(String),
    SetRememberMe(bool),
    SetError(String),
}

impl Intent for LoginIntent {}
