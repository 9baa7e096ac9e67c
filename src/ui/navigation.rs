//! Navigation collaborator.
//!
//! The view model never routes by itself; the host supplies a [`Navigator`]
//! and the view model calls it exactly once on a successful command.

use tracing::info;

/// Where the console lands after a successful sign-in.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Options for a navigation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

/// Host-provided navigation sink.
pub trait Navigator: Send + Sync {
    fn navigate(&self, to: &str, options: NavigateOptions);
}

/// Navigator for headless hosts; records the target in the log.
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, to: &str, options: NavigateOptions) {
        info!(to, replace = options.replace, "navigating");
    }
}
