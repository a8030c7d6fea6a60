//! Tax Forms - Schedule C / Schedule E totals and PDF rendering
//!
//! This crate provides:
//! - Form record types for Schedule C (business) and Schedule E (rental)
//! - Safe numeric parsing of string-typed inputs
//! - Totals calculation (gross income, expenses, net profit / income)
//! - Field-identifier tables mapping records onto the fillable IRS templates
//! - Fallback plain-text rendering when template filling is unavailable
//!
//! # Example
//!
//! ```ignore
//! use tax_forms::{compute, render, Capabilities, FormRecord, FormType, TemplateDir};
//!
//! let record = FormRecord::from_json(FormType::ScheduleC, body)?;
//! let totals = compute(&record);
//! let store = TemplateDir::new("templates");
//! let pdf_bytes = render(&record, &store, Capabilities::probe())?;
//! ```

pub mod fallback;
pub mod fields;
mod form;
pub mod format;
pub mod parser;
mod renderer;
mod schema;
mod store;
pub mod totals;

pub use fallback::RenderInstruction;
pub use fields::FieldMapping;
pub use form::{FormRecord, FormType, TaxForm, Totals};
pub use format::format_currency;
pub use parser::{parse_record, safe_parse};
pub use renderer::{Capabilities, FormRenderer, RenderPath, RenderedDocument};
pub use schema::*;
pub use store::{MemoryTemplates, TemplateDir, TemplateStore};
pub use totals::{ScheduleCTotals, ScheduleETotals};

use thiserror::Error;

/// Errors that can occur while computing or rendering a form
///
/// Unparseable numbers never surface here: safe parsing turns them into 0.0.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("PDF template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template unreadable: {0}")]
    TemplateUnreadable(String),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Failed to generate PDF: {0}")]
    RenderFailed(String),

    #[error("Invalid form record: {0}")]
    InvalidRecord(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_core::PdfError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for form operations
pub type Result<T> = std::result::Result<T, FormError>;

/// Compute the totals of a record
///
/// Never fails: every numeric input goes through [`safe_parse`].
pub fn compute(record: &FormRecord) -> Totals {
    record.totals()
}

/// Render a record to PDF bytes
///
/// Fails with [`FormError::TemplateNotFound`] when the store has no template
/// for the form, and with [`FormError::RenderFailed`] when neither the
/// template nor the fallback path can produce a document.
pub fn render(
    record: &FormRecord,
    templates: &dyn TemplateStore,
    capabilities: Capabilities,
) -> Result<Vec<u8>> {
    let document = FormRenderer::new(templates, capabilities).render_record(record)?;
    Ok(document.bytes)
}
