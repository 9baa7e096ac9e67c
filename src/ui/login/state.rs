use crate::ui::store::UiState;

/// UI state for the login page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginPageState {
    /// True only while a sign-in request is in flight.
    pub is_loading: bool,
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    /// User-facing failure message; empty when nothing is shown.
    pub error: String,
}

impl UiState for LoginPageState {}
