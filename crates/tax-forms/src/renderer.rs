//! Form renderer
//!
//! Rendering first tries to fill the form's fillable template. Any failure on
//! that path (backend compiled out or disabled, unreadable template, broken
//! PDF) falls back to drawing a plain text report. Only a missing template
//! and a failed fallback are reported to the caller.

use crate::fallback::RenderInstruction;
use crate::fields::FieldMapping;
use crate::{FormError, FormRecord, Result, TaxForm, TemplateStore};
use pdf_core::{PdfDocument, TextCanvas};
use serde::Serialize;
use tracing::{debug, error, info, warn};

/// Pages of the template copied to the output
const TEMPLATE_PAGES: usize = 2;

/// Which rendering backends may be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// Fill the fillable template
    pub template_filling: bool,
    /// Draw the plain text fallback report
    pub drawing: bool,
}

impl Capabilities {
    /// Backends compiled into this build
    pub fn probe() -> Self {
        Self {
            template_filling: cfg!(feature = "template-fill"),
            drawing: cfg!(feature = "fallback-draw"),
        }
    }

    /// Switch backends off; a backend missing from the build stays off
    pub fn restrict(self, template_filling: bool, drawing: bool) -> Self {
        Self {
            template_filling: self.template_filling && template_filling,
            drawing: self.drawing && drawing,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::probe()
    }
}

/// How a document was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum RenderPath {
    /// The template was filled
    Template { fields_filled: usize },
    /// The plain text report was drawn
    Fallback,
}

/// Rendered PDF
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub path: RenderPath,
}

/// Renders forms against a template store
pub struct FormRenderer<'a> {
    templates: &'a dyn TemplateStore,
    capabilities: Capabilities,
}

impl<'a> FormRenderer<'a> {
    pub fn new(templates: &'a dyn TemplateStore, capabilities: Capabilities) -> Self {
        Self {
            templates,
            capabilities,
        }
    }

    /// Render any form record
    pub fn render_record(&self, record: &FormRecord) -> Result<RenderedDocument> {
        match record {
            FormRecord::ScheduleC(form) => self.render(form),
            FormRecord::ScheduleE(form) => self.render(form),
        }
    }

    /// Render one form
    pub fn render<F: TaxForm>(&self, form: &F) -> Result<RenderedDocument> {
        let form_type = F::FORM_TYPE;

        let template = match self.templates.template(form_type) {
            Err(FormError::TemplateNotFound(name)) => {
                return Err(FormError::TemplateNotFound(name));
            }
            other => other,
        };

        let totals = form.totals();

        match self.try_template(form, template) {
            Ok(document) => return Ok(document),
            Err(FormError::BackendUnavailable(reason)) => {
                debug!(form = %form_type, %reason, "template backend unavailable");
            }
            Err(e) => {
                warn!(form = %form_type, error = %e, "template fill failed, drawing fallback");
            }
        }

        if !self.capabilities.drawing {
            error!(form = %form_type, "no rendering backend available");
            return Err(FormError::RenderFailed(
                "no PDF backend available".to_string(),
            ));
        }

        let plan = form.fallback_plan(&totals);
        let bytes = draw(&plan).map_err(|e| {
            error!(form = %form_type, error = %e, "fallback drawing failed");
            FormError::RenderFailed(e.to_string())
        })?;

        info!(form = %form_type, lines = plan.len(), "drew fallback report");
        Ok(RenderedDocument {
            bytes,
            path: RenderPath::Fallback,
        })
    }

    fn try_template<F: TaxForm>(
        &self,
        form: &F,
        template: Result<Vec<u8>>,
    ) -> Result<RenderedDocument> {
        if !self.capabilities.template_filling {
            return Err(FormError::BackendUnavailable(
                "template filling disabled".to_string(),
            ));
        }

        let template = template?;
        let (bytes, fields_filled) = fill_template(&template, &form.field_mapping())?;

        info!(form = %F::FORM_TYPE, fields_filled, "filled template");
        Ok(RenderedDocument {
            bytes,
            path: RenderPath::Template { fields_filled },
        })
    }
}

/// Fill `template` with `mapping` and keep its first two pages
fn fill_template(template: &[u8], mapping: &FieldMapping) -> Result<(Vec<u8>, usize)> {
    let mut doc = PdfDocument::open_from_bytes(template)
        .map_err(|e| FormError::TemplateUnreadable(e.to_string()))?;

    let filled = doc.fill_fields(|key| mapping.get(key).map(str::to_string));
    doc.retain_first_pages(TEMPLATE_PAGES)?;
    let bytes = doc.to_bytes()?;

    Ok((bytes, filled))
}

/// Draw a fallback plan onto US Letter pages
fn draw(plan: &[RenderInstruction]) -> Result<Vec<u8>> {
    let mut canvas = TextCanvas::letter();
    for line in plan {
        canvas.draw_text(line.page, line.x, line.y, line.font, line.size, &line.text);
    }
    Ok(canvas.to_bytes()?)
}
