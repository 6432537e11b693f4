use std::{sync::Arc, time::Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::normalize_api_url, load_settings, DeleteOutcome, HttpLeadTransport, LeadController,
    LeadEvent, LeadForm, LeadStore, LoadOutcome, NotificationLevel, NotificationTray,
    SubmitOutcome,
};
use shared::{domain::LeadId, protocol::Lead};
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Capture, list, and delete leads against the lead service")]
struct Args {
    /// Overrides the configured lead service base URL.
    #[arg(long)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all submitted leads.
    List,
    /// Submit a new lead.
    Add {
        #[arg(long, default_value = "")]
        full_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone_number: String,
        #[arg(long, default_value = "")]
        company_name: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Delete leads by id.
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut settings = load_settings().context("failed to load lead client settings")?;
    if let Some(api_url) = args.api_url {
        settings.api_url = normalize_api_url(&api_url)?;
    }
    tracing::info!(api_url = %settings.api_url, "using lead service");

    let controller = LeadController::new(
        Arc::new(HttpLeadTransport::new(settings.api_url.clone())),
        LeadStore::shared(),
        settings.notification_ttl(),
    );
    let mut events = controller.subscribe_events();
    let mut tray = NotificationTray::new();

    let loaded = controller.load().await;
    collect_notifications(&mut events, &mut tray);

    match args.command {
        Command::List => {}
        Command::Add {
            full_name,
            email,
            phone_number,
            company_name,
            notes,
        } => {
            let form = LeadForm {
                full_name,
                email,
                phone_number,
                company_name,
                notes,
            };
            if let SubmitOutcome::Rejected(err) = controller.submit_form(form).await {
                for (field, message) in err.violations().iter() {
                    eprintln!("{}: {message}", field.label());
                }
            }
        }
        Command::Delete { ids } => {
            if matches!(loaded, LoadOutcome::Failed { .. }) {
                tracing::warn!("deleting without a current listing");
            }
            for id in ids {
                if let DeleteOutcome::Deleted { removed: false } = controller.delete(LeadId(id)).await {
                    tracing::debug!(lead_id = id, "lead was not in the fetched listing");
                }
            }
        }
    }

    collect_notifications(&mut events, &mut tray);
    print_notifications(&mut tray);
    print_leads(&controller.leads().await);
    Ok(())
}

fn collect_notifications(events: &mut broadcast::Receiver<LeadEvent>, tray: &mut NotificationTray) {
    while let Ok(event) = events.try_recv() {
        if let LeadEvent::Notification(notification) = event {
            tray.push(notification, Instant::now());
        }
    }
}

fn print_notifications(tray: &mut NotificationTray) {
    tray.prune(Instant::now());
    for notification in tray.visible() {
        match notification.level {
            NotificationLevel::Success => println!("[ok] {}", notification.message),
            NotificationLevel::Error => eprintln!("[error] {}", notification.message),
        }
    }
}

fn print_leads(leads: &[Lead]) {
    println!();
    println!("Submitted Leads");
    if leads.is_empty() {
        println!("No leads yet.");
        return;
    }

    println!(
        "{:<6} {:<24} {:<28} {:<16} {:<20} Notes",
        "Id", "Full Name", "Email", "Phone", "Company"
    );
    for lead in leads {
        println!(
            "{:<6} {:<24} {:<28} {:<16} {:<20} {}",
            lead.id,
            lead.full_name,
            lead.email,
            lead.phone_number.as_deref().unwrap_or(""),
            lead.company_name.as_deref().unwrap_or(""),
            lead.notes.as_deref().unwrap_or("").replace('\n', " / "),
        );
    }
}
