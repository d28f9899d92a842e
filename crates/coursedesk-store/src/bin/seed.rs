//! # Seed Data Generator
//!
//! Populates a data directory with sample leads, trainers and quotations
//! for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./data (default)
//! cargo run -p coursedesk-store --bin seed
//!
//! # Seed another directory
//! cargo run -p coursedesk-store --bin seed -- --data ./tmp/data
//! ```
//!
//! Seeding is skipped when the directory already holds leads.

use anyhow::Context;
use chrono::Utc;
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use coursedesk_core::{ItemCategory, LineItem, Money, NewLead, NewQuotation, NewTrainer};
use coursedesk_store::{Store, StoreConfig};

/// (company, contact, course, participants)
const LEADS: &[(&str, &str, &str, u32)] = &[
    ("Acme Corp", "Ravi Kumar", "Rust Fundamentals", 12),
    ("Globex", "Anita Desai", "Kubernetes Administration", 20),
    ("Initech", "Vikram Rao", "AWS Solutions Architect", 8),
    ("Umbrella Labs", "Meera Iyer", "Secure Coding", 15),
];

/// (name, expertise, daily rate in rupees)
const TRAINERS: &[(&str, &str, i64)] = &[
    ("Priya Sharma", "Rust, Systems Programming", 9_000),
    ("Arjun Mehta", "Kubernetes, DevOps", 8_000),
    ("Sana Khan", "AWS, Cloud Architecture", 10_000),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let mut data_dir = String::from("./data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Coursedesk Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data <DIR>   Data directory (default: ./data)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let store = Store::open(StoreConfig::new(&data_dir))
        .await
        .with_context(|| format!("opening data directory {}", data_dir))?;

    let existing = store.leads().list().await?.len();
    if existing > 0 {
        warn!(existing, "Data directory already has leads, skipping seed");
        return Ok(());
    }

    let stamp = Utc::now().timestamp_millis();
    let today = Utc::now().date_naive();

    for (idx, (company, contact, course, participants)) in LEADS.iter().enumerate() {
        let lead = store
            .leads()
            .create(NewLead {
                lead_number: format!("LD-{}-{}", stamp, idx + 1),
                date: Some(today),
                company_name: company.to_string(),
                contact_person: contact.to_string(),
                email: email_for(contact, company),
                course: course.to_string(),
                participants: Some(*participants),
                ..Default::default()
            })
            .await?;

        let quotation = store
            .quotations()
            .create(sample_quotation(&lead.id, company, contact, *participants, stamp, idx))
            .await?;
        info!(lead = %lead.company_name, total = %quotation.total, "Seeded lead and quotation");
    }

    for (name, expertise, rate) in TRAINERS {
        let trainer = store
            .trainers()
            .create(NewTrainer {
                name: name.to_string(),
                email: email_for(name, "trainers"),
                expertise: expertise.to_string(),
                daily_rate: Money::from_rupees(*rate),
                ..Default::default()
            })
            .await?;
        info!(trainer = %trainer.name, rate = %trainer.daily_rate, "Seeded trainer");
    }

    info!(data_dir = %data_dir, "Seed complete");
    Ok(())
}

fn sample_quotation(
    lead_id: &str,
    company: &str,
    contact: &str,
    participants: u32,
    stamp: i64,
    idx: usize,
) -> NewQuotation {
    let pax = i64::from(participants);
    NewQuotation {
        quotation_number: format!("QT-{}-{}", stamp, idx + 1),
        date: Some(Utc::now().date_naive()),
        lead_id: Some(lead_id.to_string()),
        client_name: company.to_string(),
        contact_person: contact.to_string(),
        email: email_for(contact, company),
        items: vec![
            LineItem::new(
                ItemCategory::TrainerCost,
                "Trainer (3 days)",
                Money::from_rupees(9_000),
                3,
            ),
            LineItem::new(
                ItemCategory::LabCostPerPax,
                "Cloud lab access",
                Money::from_rupees(400),
                pax * 3,
            ),
            LineItem::new(
                ItemCategory::AssessmentWithProctoring,
                "Final assessment",
                Money::from_rupees(750),
                pax,
            ),
        ],
        notes: Some("Sample data".to_string()),
        ..Default::default()
    }
}

fn email_for(person: &str, org: &str) -> String {
    let local = person.split_whitespace().next().unwrap_or("contact").to_lowercase();
    let domain: String = org
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    format!("{}@{}.example", local, domain)
}
