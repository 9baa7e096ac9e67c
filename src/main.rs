use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use opsconsole::api::ApiClient;
use opsconsole::config::Config;
use opsconsole::session::AuthSession;
use opsconsole::ui::app::{AppReducer, AppState};
use opsconsole::ui::login::LoginComposer;
use opsconsole::ui::navigation::{LogNavigator, NavigateOptions, Navigator, DASHBOARD_PATH};
use opsconsole::ui::store::Store;

mod args;
use args::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    match cli.command {
        Command::Login { email, remember } => login(config, email, remember).await,
    }
}

/// Drive the login feature end to end, standing in for the browser page.
async fn login(config: Config, email: String, remember: bool) -> anyhow::Result<()> {
    let session = AuthSession::new();
    let client = ApiClient::new(&config.api, session.clone());
    let store: Store<AppReducer> = Store::new(AppState::default());
    let composer = LoginComposer::new(store, client, session.clone());

    let view_model = composer.view_model();
    view_model.initialize();

    let navigator = LogNavigator;

    // Already signed in: go straight to the dashboard.
    if session.is_authenticated() {
        navigator.navigate(DASHBOARD_PATH, NavigateOptions { replace: true });
        return Ok(());
    }

    view_model.update_email(email);
    view_model.update_password(read_password()?);
    view_model.update_remember_me(remember);

    view_model.login(DASHBOARD_PATH, &navigator).await;

    let error = view_model.error();
    if error.is_empty() {
        println!("Signed in.");
        Ok(())
    } else {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

fn read_password() -> anyhow::Result<String> {
    eprint!("Password: ");
    io::stderr().flush().ok();

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
