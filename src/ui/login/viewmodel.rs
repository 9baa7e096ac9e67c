//! View model for the login page.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::ui::app::{AppIntent, AppReducer};
use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::LoginPageState;
use crate::ui::navigation::{NavigateOptions, Navigator};
use crate::ui::store::Store;

use crate::login::domain::LoginUseCase;

/// Shown when the email field is left empty.
pub const EMAIL_REQUIRED: &str = "Email is required";
/// Shown when the password field is left empty.
pub const PASSWORD_REQUIRED: &str = "Password is required";
/// Shown for every sign-in failure, regardless of cause.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";

/// Orchestrates the login page: proxies reads from the store, turns UI
/// events into dispatched transitions, and runs the sign-in use case.
///
/// The view model never caches slice fields — every accessor reads the
/// store's current state. It is the sole writer of the login slice.
pub struct LoginViewModel {
    store: Store<AppReducer>,
    login_user: Arc<dyn LoginUseCase>,
    /// Ticket of the most recent `login` call. A call may commit terminal
    /// state only while its own ticket is still the latest.
    flight: AtomicU64,
}

impl LoginViewModel {
    pub fn new(store: Store<AppReducer>, login_user: Arc<dyn LoginUseCase>) -> Self {
        Self {
            store,
            login_user,
            flight: AtomicU64::new(0),
        }
    }

    /// Lifecycle hook for the hosting page.
    ///
    /// Idempotent and side-effect free on repeat calls; kept so hosts can
    /// treat every feature's view model uniformly.
    pub fn initialize(&self) {}

    pub fn email(&self) -> String {
        self.slice().email
    }

    pub fn password(&self) -> String {
        self.slice().password
    }

    pub fn remember_me(&self) -> bool {
        self.slice().remember_me
    }

    pub fn error(&self) -> String {
        self.slice().error
    }

    pub fn is_loading(&self) -> bool {
        self.slice().is_loading
    }

    pub fn update_email(&self, value: impl Into<String>) {
        self.dispatch(LoginIntent::SetEmail(value.into()));
    }

    pub fn update_password(&self, value: impl Into<String>) {
        self.dispatch(LoginIntent::SetPassword(value.into()));
    }

    pub fn update_remember_me(&self, value: bool) {
        self.dispatch(LoginIntent::SetRememberMe(value));
    }

    /// Run the sign-in command.
    ///
    /// Validates locally, marks the slice as loading, executes the use case
    /// with the credentials as currently stored, and either navigates to
    /// `redirect` (replacing the current history entry) or surfaces the one
    /// collapsed failure message. Loading is cleared after the command
    /// settles on both paths.
    ///
    /// Overlapping calls: the newest call supersedes older ones. A
    /// superseded call drops its result without dispatching, so the state
    /// observed by the UI always belongs to the latest attempt.
    pub async fn login(&self, redirect: &str, navigator: &dyn Navigator) {
        if self.email().is_empty() {
            self.dispatch(LoginIntent::SetError(EMAIL_REQUIRED.to_string()));
            return;
        }
        if self.password().is_empty() {
            self.dispatch(LoginIntent::SetError(PASSWORD_REQUIRED.to_string()));
            return;
        }

        let ticket = self.flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.dispatch(LoginIntent::SetLoading(true));

        // Read at call time so the request reflects the latest edits.
        let LoginPageState {
            email, password, ..
        } = self.slice();
        let outcome = self.login_user.execute(&email, &password).await;

        if self.flight.load(Ordering::SeqCst) != ticket {
            debug!("sign-in result superseded by a newer attempt, dropping");
            return;
        }

        match outcome {
            Ok(_session) => {
                // The entity is not retained here; the data layer already
                // recorded the token.
                navigator.navigate(redirect, NavigateOptions { replace: true });
            }
            Err(err) => {
                warn!(error = %err, "sign-in failed");
                self.dispatch(LoginIntent::SetError(INVALID_CREDENTIALS.to_string()));
            }
        }

        self.dispatch(LoginIntent::SetLoading(false));
    }

    fn slice(&self) -> LoginPageState {
        self.store.state().login
    }

    fn dispatch(&self, intent: LoginIntent) {
        self.store.dispatch(AppIntent::Login(intent));
    }
}
