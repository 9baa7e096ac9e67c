use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::LoginPageState;
use crate::ui::store::Reducer;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginPageState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::SetLoading(is_loading) => LoginPageState {
                is_loading,
                ..state
            },
            // Editing a credential field invalidates the previous failure.
            LoginIntent::SetEmail(email) => LoginPageState {
                email,
                error: String::new(),
                ..state
            },
            LoginIntent::SetPassword(password) => LoginPageState {
                password,
                error: String::new(),
                ..state
            },
            LoginIntent::SetRememberMe(remember_me) => LoginPageState {
                remember_me,
                ..state
            },
            LoginIntent::SetError(error) => LoginPageState { error, ..state },
        }
    }
}
