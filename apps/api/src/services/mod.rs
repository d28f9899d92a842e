//! Supporting services used by the handlers.
//!
//! - [`pdf`] - Quotation and training purchase-order documents
//! - [`mail`] - Trainer notifications over SMTP (or the log)

pub mod mail;
pub mod pdf;
