//! CareLink CLI
//!
//! Thin wrapper around the messages page logic in carelink-core, for
//! scripting and for checking a deployment from the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Roster of patients (administrators only)
//! carelink --user-id A1 --role admin patients --search ali
//!
//! # Thread with a patient
//! carelink --user-id A1 thread --patient P1
//!
//! # A patient's own thread
//! carelink --user-id P1 --role patient thread
//!
//! # Send a message
//! carelink --user-id A1 send --to P1 "Your results are ready."
//! ```
//!
//! Data comes from `--api-url` or a `--data-file` JSON fixture.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use carelink_core::{
    AuthSession, ClientConfig, DataStore, MessagesView, SendOutcome, User, UserRole,
};
use clap::{Parser, Subcommand};

/// CareLink - patient messaging
#[derive(Parser)]
#[command(name = "carelink")]
#[command(version = "0.1.0")]
#[command(about = "CareLink - messages between patients and their care team")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Base URL of the CareLink API
    #[arg(long, env = "CARELINK_API_URL", global = true)]
    api_url: Option<String>,

    /// Bearer token for the API
    #[arg(long, env = "CARELINK_API_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// JSON fixture file to use instead of the API
    #[arg(long, env = "CARELINK_DATA_FILE", global = true)]
    data_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "CARELINK_TIMEOUT_SECS", global = true)]
    timeout_secs: Option<u64>,

    /// Id of the signed-in user
    #[arg(short, long, env = "CARELINK_USER_ID", global = true)]
    user_id: Option<String>,

    /// Role of the signed-in user (admin, patient)
    #[arg(short, long, env = "CARELINK_ROLE", default_value = "admin", global = true)]
    role: UserRole,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List patients with message counts and unread markers
    Patients {
        /// Case-insensitive name filter
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Show a message thread, newest first
    Thread {
        /// Patient whose thread to show (defaults to your own)
        #[arg(short, long)]
        patient: Option<String>,
    },

    /// Send a message
    Send {
        /// Receiving patient (patients leave this empty to reach the care team)
        #[arg(short, long)]
        to: Option<String>,

        /// Message text
        content: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    carelink_core::logging::init(cli.verbose);

    let config = ClientConfig::from_parts(
        cli.api_url.as_deref(),
        cli.token,
        cli.data_file,
        cli.timeout_secs,
    )?;
    let store = DataStore::shared(config.build_api()?);
    let session = match cli.user_id {
        Some(id) => AuthSession::signed_in(User::new(id, cli.role)),
        None => AuthSession::anonymous(),
    };

    let view = MessagesView::new(Arc::new(session), store);
    view.load().await;

    match cli.command {
        Commands::Patients { search } => {
            if !view.roster_visible() {
                bail!("The patient roster is only available to administrators");
            }
            view.set_search_term(search);

            let roster = view.roster();
            if roster.is_empty() {
                println!("No matching patients.");
            }
            for entry in roster {
                let unread = if entry.has_unread { " [unread]" } else { "" };
                println!(
                    "{}  ({} messages){}",
                    entry.full_name, entry.message_count, unread
                );
                println!("  ID: {}", entry.patient_id);
            }
        }

        Commands::Thread { patient } => {
            if let Some(patient_id) = patient {
                if !view.is_admin() {
                    bail!("Only administrators can open another patient's thread");
                }
                view.select_patient(patient_id);
            }

            let thread = view.active_thread();
            let entries = view.active_thread_entries();
            println!("Thread: {} ({} messages)", thread.participant_id, entries.len());
            if entries.is_empty() {
                println!("No messages.");
            }
            for entry in entries {
                let who = if entry.is_mine {
                    "me".to_string()
                } else {
                    entry.message.sender_id.clone()
                };
                let unread = if entry.show_unread { " (unread)" } else { "" };
                println!("[{}] {}: {}{}", entry.timestamp, who, entry.message.content, unread);
            }
        }

        Commands::Send { to, content } => {
            if let Some(receiver) = to {
                view.select_patient(receiver);
            }
            if !view.composer_visible() {
                bail!("Select a patient with --to before sending");
            }
            view.set_composer(content);

            match view.handle_send_message().await {
                SendOutcome::Sent(message) => {
                    println!("Message sent");
                    println!("  ID: {}", message.id);
                }
                SendOutcome::Skipped => bail!("Nothing to send: empty message or no --user-id"),
                SendOutcome::Failed => bail!("Failed to send message"),
            }
        }
    }

    Ok(())
}
