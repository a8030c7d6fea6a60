//! Plain text drawing on blank pages

use crate::text::{generate_text_operators, TextRenderContext};
use crate::{PdfError, Result, StandardFont};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

/// Page size in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// US Letter, 8.5 x 11 in
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };
}

/// A document drawn from scratch with the standard fonts
///
/// Pages are created on demand: drawing on page `n` makes sure pages
/// `0..=n` exist. Coordinates are PDF user space (origin bottom-left).
pub struct TextCanvas {
    size: PageSize,
    /// Content stream per page (0-indexed)
    pages: Vec<Vec<u8>>,
}

impl TextCanvas {
    /// Create an empty canvas with the given page size
    pub fn new(size: PageSize) -> Self {
        Self {
            size,
            pages: Vec::new(),
        }
    }

    /// Create an empty US Letter canvas
    pub fn letter() -> Self {
        Self::new(PageSize::LETTER)
    }

    /// Number of pages drawn so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Draw one line of text
    ///
    /// # Arguments
    /// * `page` - Page index (0-indexed)
    /// * `x` - X coordinate of the baseline start
    /// * `y` - Y coordinate of the baseline
    /// * `font` - Font to draw with
    /// * `size` - Font size in points
    /// * `text` - Text to draw
    pub fn draw_text(
        &mut self,
        page: usize,
        x: f64,
        y: f64,
        font: StandardFont,
        size: f32,
        text: &str,
    ) {
        while self.pages.len() <= page {
            self.pages.push(Vec::new());
        }

        let ctx = TextRenderContext {
            font,
            font_size: size,
        };
        self.pages[page].extend_from_slice(&generate_text_operators(text, x, y, &ctx));
    }

    /// Serialize the canvas to PDF bytes
    ///
    /// A canvas nothing was drawn on still produces one blank page.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for font in StandardFont::ALL {
            let font_id = doc.add_object(font.dictionary());
            fonts.set(font.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let blank = [Vec::new()];
        let contents: &[Vec<u8>] = if self.pages.is_empty() {
            &blank
        } else {
            &self.pages
        };

        let mut kids = Vec::with_capacity(contents.len());
        for content in contents {
            let content_id = doc.add_object(Stream::new(Dictionary::new(), content.clone()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    Object::Real(self.size.width as _),
                    Object::Real(self.size.height as _),
                ],
                "Resources" => resources_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_canvas_has_one_page() {
        let canvas = TextCanvas::letter();
        let bytes = canvas.to_bytes().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_draw_creates_pages_on_demand() {
        let mut canvas = TextCanvas::letter();
        canvas.draw_text(2, 50.0, 742.0, StandardFont::Helvetica, 12.0, "third");
        assert_eq!(canvas.page_count(), 3);

        let bytes = canvas.to_bytes().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_drawn_text_in_content_stream() {
        let mut canvas = TextCanvas::letter();
        canvas.draw_text(0, 50.0, 742.0, StandardFont::HelveticaBold, 16.0, "Title");

        let bytes = canvas.to_bytes().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let content = doc.get_page_content(page_id).unwrap();
        let content = String::from_utf8_lossy(&content);
        assert!(content.contains("/F2 16 Tf"));
        assert!(content.contains("(Title) Tj"));
    }
}
