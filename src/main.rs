#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context as _;
use carelink_core::{AuthSession, ClientConfig, DataStore, User, UserRole};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::AppServices;

/// Services built from the command line, handed to the root component
static SERVICES: OnceLock<AppServices> = OnceLock::new();

/// Get the services created at startup.
pub fn get_services() -> Option<AppServices> {
    SERVICES.get().cloned()
}

/// CareLink - patient messaging
#[derive(Parser, Debug)]
#[command(name = "carelink-desktop")]
#[command(about = "CareLink - messages between patients and their care team")]
struct Args {
    /// Base URL of the CareLink API
    #[arg(long, env = "CARELINK_API_URL")]
    api_url: Option<String>,

    /// Bearer token for the API
    #[arg(long, env = "CARELINK_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// JSON fixture file to use instead of the API
    #[arg(long, env = "CARELINK_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "CARELINK_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Id of the signed-in user
    #[arg(short, long, env = "CARELINK_USER_ID")]
    user_id: Option<String>,

    /// Role of the signed-in user (admin, patient)
    #[arg(short, long, env = "CARELINK_ROLE", default_value = "admin")]
    role: UserRole,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn default_data_file() -> Option<PathBuf> {
    let path = dirs::data_dir()?.join("carelink").join("messages.json");
    path.exists().then_some(path)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    carelink_core::logging::init(args.verbose.max(1));

    let data_file = args.data_file.or_else(|| {
        if args.api_url.is_none() {
            default_data_file()
        } else {
            None
        }
    });

    let config = ClientConfig::from_parts(
        args.api_url.as_deref(),
        args.token,
        data_file,
        args.timeout_secs,
    )
    .context("invalid client configuration")?;
    let store = DataStore::shared(config.build_api()?);

    let session = match args.user_id {
        Some(id) => AuthSession::signed_in(User::new(id, args.role)),
        None => {
            tracing::warn!("No --user-id given, starting signed out");
            AuthSession::anonymous()
        }
    };

    let _ = SERVICES.set(AppServices {
        session: Arc::new(session),
        store,
    });

    tracing::info!(backend = ?config.backend, "Starting CareLink");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("CareLink - Messages")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
