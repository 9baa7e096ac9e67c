//! App-level state tree.
//!
//! Each feature owns one slice of [`AppState`] under a fixed field. The app
//! reducer routes intents to the owning feature's reducer; every other
//! slice is carried over untouched.

use crate::ui::login::{LoginIntent, LoginPageState, LoginReducer};
use crate::ui::store::{Intent, Reducer, UiState};

/// Global UI state. One field per feature slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub login: LoginPageState,
}

impl UiState for AppState {}

/// Intents addressed to a feature slice.
#[derive(Debug, Clone)]
pub enum AppIntent {
    Login(LoginIntent),
}

impl Intent for AppIntent {}

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppIntent::Login(intent) => AppState {
                login: LoginReducer::reduce(state.login, intent),
            },
        }
    }
}
