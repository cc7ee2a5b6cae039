//! `ptas-cli`: operator command line for the PTAS monitoring API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the same core [`Session`] the browser dashboard uses, with a
//! JSON file standing in for localStorage. Every command except `login`,
//! `logout`, `whoami` and `register` goes through [`require_session`] first.
//! Results are printed as pretty JSON on stdout; logs go to stderr.

mod file_store;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ptas::config::{ApiConfig, ConfigError};
use ptas::guard::{GuardOutcome, guard};
use ptas::resources;
use ptas::types::{NewUser, Role};
use ptas::{ApiError, Session};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::file_store::{FileStore, default_session_path};
use crate::transport::ReqwestTransport;

type CliSession = Session<ReqwestTransport, FileStore>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `ptas-cli login` first")]
    NotLoggedIn,
    #[error("missing password; pass --password or set PTAS_PASSWORD")]
    MissingPassword,
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "ptas-cli", about = "PTAS plant monitoring API CLI")]
struct Cli {
    /// API root; overrides PTAS_API_URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Plant to query; overrides PTAS_PLANT_ID.
    #[arg(long)]
    plant_id: Option<i64>,

    #[arg(long, env = "PTAS_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "PTAS_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    Logout,
    /// Print the locally stored user without contacting the API.
    Whoami,
    /// Re-fetch the profile of the logged-in user.
    Me,
    /// Exchange the stored refresh token for a new session.
    Refresh,
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        full_name: String,
        #[arg(long, env = "PTAS_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        #[arg(long, value_enum)]
        role: Option<RoleArg>,
    },
    Dashboard,
    Measurements {
        #[arg(long)]
        limit: Option<u32>,
    },
    Equipment,
    Alerts {
        #[arg(long)]
        limit: Option<u32>,
    },
    AlertStats,
    Plants,
    Resolve {
        alert_id: i64,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RoleArg {
    #[value(name = "administrador")]
    Administrator,
    #[value(name = "supervisor")]
    Supervisor,
    #[value(name = "operador")]
    Operator,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Administrator => Role::Administrator,
            RoleArg::Supervisor => Role::Supervisor,
            RoleArg::Operator => Role::Operator,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(ApiConfig::from_env()?, cli.base_url.as_deref(), cli.plant_id)?;
    let session_path = cli
        .session_file
        .clone()
        .unwrap_or_else(|| default_session_path(std::env::var_os("HOME").map(PathBuf::from).as_deref()));

    let transport = ReqwestTransport::new(&config)?;
    let session = Session::new(transport, config.base_url.clone(), FileStore::new(session_path));
    session.initialize();

    run(&session, &config, cli.command).await
}

async fn run(session: &CliSession, config: &ApiConfig, command: Command) -> Result<(), CliError> {
    let plant_id = config.plant_id;
    match command {
        Command::Login { username, password } => {
            let password = password.ok_or(CliError::MissingPassword)?;
            let user = session.login(&username, &password).await?;
            print_json(&user)
        }
        Command::Logout => {
            session.logout();
            println!("ok");
            Ok(())
        }
        Command::Whoami => {
            require_session(session)?;
            print_json(&session.user())
        }
        Command::Me => {
            require_session(session)?;
            print_json(&session.refresh_profile().await?)
        }
        Command::Refresh => {
            require_session(session)?;
            print_json(&session.refresh_tokens().await?)
        }
        Command::Register { username, email, full_name, password, role } => {
            let password = password.ok_or(CliError::MissingPassword)?;
            let new_user = NewUser { username, email, password, full_name, role: role.map(Role::from) };
            print_json(&session.register(&new_user).await?)
        }
        Command::Dashboard => {
            require_session(session)?;
            print_json(&resources::dashboard_summary(session.api(), plant_id).await?)
        }
        Command::Measurements { limit } => {
            require_session(session)?;
            let limit = limit.unwrap_or(config.list_limit);
            print_json(&resources::measurements(session.api(), plant_id, limit).await?)
        }
        Command::Equipment => {
            require_session(session)?;
            print_json(&resources::equipment(session.api(), plant_id).await?)
        }
        Command::Alerts { limit } => {
            require_session(session)?;
            let limit = limit.unwrap_or(config.list_limit);
            print_json(&resources::alerts(session.api(), plant_id, limit).await?)
        }
        Command::AlertStats => {
            require_session(session)?;
            print_json(&resources::alert_stats(session.api(), plant_id).await?)
        }
        Command::Plants => {
            require_session(session)?;
            print_json(&resources::plants(session.api()).await?)
        }
        Command::Resolve { alert_id, notes } => {
            require_session(session)?;
            print_json(&resources::resolve_alert(session.api(), alert_id, notes.as_deref()).await?)
        }
    }
}

/// Route guard for commands that need a logged-in user.
fn require_session(session: &CliSession) -> Result<(), CliError> {
    match guard(&session.state()) {
        GuardOutcome::Render => Ok(()),
        GuardOutcome::Loading | GuardOutcome::RedirectToLogin => Err(CliError::NotLoggedIn),
    }
}

/// Apply command-line overrides on top of the environment config.
fn resolve_config(mut config: ApiConfig, base_url: Option<&str>, plant_id: Option<i64>) -> Result<ApiConfig, CliError> {
    if let Some(raw) = base_url {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl.into());
        }
        trimmed.clone_into(&mut config.base_url);
    }
    if let Some(plant_id) = plant_id {
        config.plant_id = plant_id;
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
