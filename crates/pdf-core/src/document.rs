//! PDF Document wrapper for fillable templates

use crate::text::{encode_text_string, string_token};
use crate::{PdfError, Result};
use lopdf::{Document, Object, ObjectId};

/// A widget annotation found on a page
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    /// Page number (1-indexed)
    pub page: usize,
    /// Raw `/T` token, e.g. `<FEFF00660031005F0031005B0030005D>`
    pub field_key: String,
    /// Current `/V` token, if any
    pub value: Option<String>,
}

/// Where an annotation dictionary lives
enum AnnotRef {
    /// Indirect object
    Object(ObjectId),
    /// Inline entry of a page's `/Annots` array
    Inline { page_id: ObjectId, index: usize },
}

/// PDF document wrapper
pub struct PdfDocument {
    inner: Document,
}

impl PdfDocument {
    /// Open a PDF document from bytes
    ///
    /// # Arguments
    /// * `data` - PDF file bytes
    pub fn open_from_bytes(data: &[u8]) -> Result<Self> {
        let inner = Document::load_mem(data).map_err(|e| PdfError::OpenError(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.inner.get_pages().len()
    }

    /// List every widget annotation that carries a `/T` entry
    pub fn widgets(&self) -> Vec<Widget> {
        let mut widgets = Vec::new();
        for (page, page_id) in self.inner.get_pages() {
            for annot in self.annotations(page_id) {
                let Some(dict) = self.annotation_dict(&annot) else {
                    continue;
                };
                if !is_widget(dict) {
                    continue;
                }
                let Some(field_key) = dict.get(b"T").ok().and_then(string_token) else {
                    continue;
                };
                widgets.push(Widget {
                    page: page as usize,
                    field_key,
                    value: dict.get(b"V").ok().and_then(string_token),
                });
            }
        }
        widgets
    }

    /// Write values into widget annotations
    ///
    /// `lookup` receives each widget's raw `/T` token and returns the value to
    /// write. Widgets for which it returns `None` or an empty string keep the
    /// template's value. Returns the number of widgets written.
    pub fn fill_fields<F>(&mut self, lookup: F) -> usize
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut targets = Vec::new();
        for (_, page_id) in self.inner.get_pages() {
            for annot in self.annotations(page_id) {
                let Some(dict) = self.annotation_dict(&annot) else {
                    continue;
                };
                if !is_widget(dict) {
                    continue;
                }
                let Some(key) = dict.get(b"T").ok().and_then(string_token) else {
                    continue;
                };
                match lookup(&key) {
                    Some(value) if !value.is_empty() => targets.push((annot, value)),
                    _ => {}
                }
            }
        }

        let mut filled = 0;
        for (annot, value) in targets {
            if let Some(dict) = self.annotation_dict_mut(&annot) {
                dict.set("V", encode_text_string(&value));
                filled += 1;
            }
        }

        if filled > 0 {
            self.request_appearances();
        }
        filled
    }

    /// Keep only the first `count` pages
    ///
    /// A document with fewer pages is left as it is. A document without
    /// pages is an error.
    pub fn retain_first_pages(&mut self, count: usize) -> Result<()> {
        let total = self.page_count();
        if total == 0 {
            return Err(PdfError::NoPages);
        }
        if total <= count {
            return Ok(());
        }

        let extra: Vec<u32> = ((count + 1) as u32..=total as u32).collect();
        self.inner.delete_pages(&extra);
        self.inner.prune_objects();

        tracing::debug!(kept = count, dropped = extra.len(), "trimmed template pages");
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(buffer)
    }

    /// Get the underlying lopdf Document
    pub fn inner(&self) -> &Document {
        &self.inner
    }

    /// Collect the annotation references of a page
    fn annotations(&self, page_id: ObjectId) -> Vec<AnnotRef> {
        let Ok(page) = self.inner.get_dictionary(page_id) else {
            return Vec::new();
        };
        let annots = match page.get(b"Annots") {
            Ok(Object::Array(items)) => items,
            Ok(Object::Reference(id)) => match self.inner.get_object(*id) {
                Ok(Object::Array(items)) => items,
                _ => return Vec::new(),
            },
            _ => return Vec::new(),
        };

        annots
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match item {
                Object::Reference(id) => Some(AnnotRef::Object(*id)),
                Object::Dictionary(_) => Some(AnnotRef::Inline { page_id, index }),
                _ => None,
            })
            .collect()
    }

    fn annotation_dict(&self, annot: &AnnotRef) -> Option<&lopdf::Dictionary> {
        match annot {
            AnnotRef::Object(id) => self.inner.get_dictionary(*id).ok(),
            AnnotRef::Inline { page_id, index } => {
                let page = self.inner.get_dictionary(*page_id).ok()?;
                match page.get(b"Annots").ok()? {
                    Object::Array(items) => items.get(*index)?.as_dict().ok(),
                    _ => None,
                }
            }
        }
    }

    fn annotation_dict_mut(&mut self, annot: &AnnotRef) -> Option<&mut lopdf::Dictionary> {
        match annot {
            AnnotRef::Object(id) => self.inner.get_dictionary_mut(*id).ok(),
            AnnotRef::Inline { page_id, index } => {
                let page = self.inner.get_dictionary_mut(*page_id).ok()?;
                match page.get_mut(b"Annots").ok()? {
                    Object::Array(items) => items.get_mut(*index)?.as_dict_mut().ok(),
                    _ => None,
                }
            }
        }
    }

    /// Ask viewers to regenerate field appearances from `/V`
    fn request_appearances(&mut self) {
        let Some(catalog_id) = self
            .inner
            .trailer
            .get(b"Root")
            .ok()
            .and_then(|root| root.as_reference().ok())
        else {
            return;
        };

        let acroform_id = match self
            .inner
            .get_dictionary(catalog_id)
            .ok()
            .and_then(|catalog| catalog.get(b"AcroForm").ok())
        {
            Some(Object::Reference(id)) => *id,
            Some(Object::Dictionary(_)) => catalog_id,
            _ => return,
        };

        let Ok(dict) = self.inner.get_dictionary_mut(acroform_id) else {
            return;
        };
        let acroform = if acroform_id == catalog_id {
            match dict.get_mut(b"AcroForm").ok().and_then(|a| a.as_dict_mut().ok()) {
                Some(inline) => inline,
                None => return,
            }
        } else {
            dict
        };
        acroform.set("NeedAppearances", Object::Boolean(true));
    }
}

fn is_widget(dict: &lopdf::Dictionary) -> bool {
    matches!(dict.get(b"Subtype"), Ok(Object::Name(name)) if name == b"Widget")
}
