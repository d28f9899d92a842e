//! Route handlers, one module per resource.
//!
//! Handlers stay thin: extract, call a repository, shape the response.

pub mod health;
pub mod leads;
pub mod orders;
pub mod quotations;
pub mod reports;
pub mod trainer_pos;
pub mod trainers;
pub mod trainings;

use axum::http::{header, HeaderMap, HeaderValue};

/// Headers for a PDF served as a download.
pub(crate) fn pdf_headers(file_name: &str, len: usize) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    if let Ok(value) = HeaderValue::from_str(&format!("attachment; filename={}", file_name)) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(len));
    headers
}
