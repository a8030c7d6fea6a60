//! PDF Core - Low-level PDF manipulation
//!
//! This crate provides functionality for:
//! - Opening fillable PDF templates and enumerating their widget annotations
//! - Writing form field values by their raw `/T` token
//! - Keeping only the leading pages of a document
//! - Drawing plain text with the standard Type1 fonts on blank pages
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{PdfDocument, StandardFont, TextCanvas};
//!
//! let mut doc = PdfDocument::open_from_bytes(&template_bytes)?;
//! doc.fill_fields(|key| (key == "<FEFF0066>").then(|| "Jane".to_string()));
//! doc.retain_first_pages(2)?;
//! let filled = doc.to_bytes()?;
//!
//! let mut canvas = TextCanvas::letter();
//! canvas.draw_text(0, 50.0, 742.0, StandardFont::HelveticaBold, 16.0, "Title");
//! let drawn = canvas.to_bytes()?;
//! ```

mod canvas;
mod document;
mod font;
mod text;

pub use canvas::{PageSize, TextCanvas};
pub use document::{PdfDocument, Widget};
pub use font::StandardFont;
pub use text::{encode_text_string, generate_text_operators, string_token, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to open PDF: {0}")]
    OpenError(String),

    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Document has no pages")]
    NoPages,
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(PdfError::NoPages.to_string(), "Document has no pages");
        assert_eq!(
            PdfError::OpenError("bad header".to_string()).to_string(),
            "Failed to open PDF: bad header"
        );
    }
}
