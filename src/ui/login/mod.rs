//! Login page: slice, reducer, view model, and chain composition.

mod compose;
mod intent;
mod reducer;
mod state;
mod viewmodel;

pub use compose::LoginComposer;
pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::LoginPageState;
pub use viewmodel::{
    LoginViewModel, EMAIL_REQUIRED, INVALID_CREDENTIALS, PASSWORD_REQUIRED,
};
