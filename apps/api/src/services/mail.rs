//! # Outgoing Email
//!
//! Trainer notifications go out through a [`Mailer`]. Two implementations:
//!
//! - [`SmtpMailer`]: STARTTLS relay via lettre's async transport
//! - [`LogMailer`]: only logs the message; used when no SMTP server is
//!   configured
//!
//! Callers treat delivery as best-effort. A failed send is logged and the
//! request that triggered it still succeeds.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use coursedesk_core::{Trainer, TrainerPo, Training};

use crate::config::SmtpConfig;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail configuration error: {0}")]
    Configuration(String),

    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("Failed to send email: {0}")]
    SendFailed(String),
}

/// A plain-text message ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}

// =============================================================================
// SMTP
// =============================================================================

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| MailError::Configuration(format!("Failed to create SMTP relay: {}", e)))?
            .port(config.port)
            .credentials(creds)
            .build();

        let from: Mailbox = format!("{} <{}>", config.from_name, config.username)
            .parse()
            .map_err(|e| MailError::Configuration(format!("Invalid from address: {}", e)))?;

        Ok(SmtpMailer { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| MailError::InvalidRecipient(format!("{}: {}", email.to, e)))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body)
            .map_err(|e| MailError::SendFailed(format!("Failed to build message: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::SendFailed(e.to_string()))?;

        info!(to = %email.to, subject = %email.subject, "Email sent");
        Ok(())
    }
}

// =============================================================================
// Log Only
// =============================================================================

/// Writes each message to the log and drops it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        LogMailer
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        info!(
            to = %email.to,
            subject = %email.subject,
            body = %email.body,
            "SMTP not configured, email logged instead of sent"
        );
        Ok(())
    }
}

// =============================================================================
// Messages
// =============================================================================

/// Notice sent to a trainer when a purchase order is raised for them.
pub fn trainer_po_notice(trainer: &Trainer, po: &TrainerPo, company_name: &str) -> OutgoingEmail {
    let notes = po
        .notes
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or("N/A");

    let body = format!(
        "Dear {name},\n\n\
         Please find below the Purchase Order ({number}) for the upcoming training.\n\n\
         Training Details:\n\
         - Start Date: {start}\n\
         - End Date: {end}\n\
         - Daily Rate: {rate}\n\
         - Total Amount: {total}\n\n\
         Notes: {notes}\n\n\
         Please confirm your acceptance of this PO.\n\n\
         Best regards,\n\
         {company}\n",
        name = trainer.name,
        number = po.po_number,
        start = po.start_date,
        end = po.end_date,
        rate = po.daily_rate,
        total = po.total_amount,
        notes = notes,
        company = company_name,
    );

    OutgoingEmail {
        to: trainer.email.clone(),
        subject: format!("Purchase Order {}", po.po_number),
        body,
    }
}

/// Confirmation sent to the assigned trainer when a training is booked.
///
/// `None` when the training has no trainer email.
pub fn training_confirmation(training: &Training) -> Option<OutgoingEmail> {
    let to = training.trainer_email.as_deref()?.trim();
    if to.is_empty() {
        return None;
    }

    let body = format!(
        "New Training Registration Confirmed\n\n\
         Details:\n\
         Client: {client}\n\
         Training Type: {kind}\n\
         Start Date: {start}\n\
         End Date: {end}\n\
         Trainer: {trainer}\n",
        client = training.client_name,
        kind = training.training_type,
        start = training.start_date,
        end = training.end_date,
        trainer = training.trainer,
    );

    Some(OutgoingEmail {
        to: to.to_string(),
        subject: "New Training Registration Confirmed".to_string(),
        body,
    })
}
