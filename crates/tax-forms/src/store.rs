//! Template sources

use crate::{FormError, FormType, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// Source of the fillable template for each form type
pub trait TemplateStore: Send + Sync {
    /// Template bytes for `form_type`
    ///
    /// Fails with [`FormError::TemplateNotFound`] when no template exists.
    fn template(&self, form_type: FormType) -> Result<Vec<u8>>;

    /// Whether a template exists for `form_type`
    fn contains(&self, form_type: FormType) -> bool;
}

/// Templates read from a directory on every request
#[derive(Debug, Clone)]
pub struct TemplateDir {
    dir: PathBuf,
    schedule_c: String,
    schedule_e: String,
}

impl TemplateDir {
    /// Directory using the IRS file names `f1040sc.pdf` and `f1040se.pdf`
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            schedule_c: "f1040sc.pdf".to_string(),
            schedule_e: "f1040se.pdf".to_string(),
        }
    }

    /// Override the template file names
    pub fn with_file_names(mut self, schedule_c: &str, schedule_e: &str) -> Self {
        self.schedule_c = schedule_c.to_string();
        self.schedule_e = schedule_e.to_string();
        self
    }

    /// Full path of the template for `form_type`
    pub fn path(&self, form_type: FormType) -> PathBuf {
        let file = match form_type {
            FormType::ScheduleC => &self.schedule_c,
            FormType::ScheduleE => &self.schedule_e,
        };
        self.dir.join(file)
    }
}

impl TemplateStore for TemplateDir {
    fn template(&self, form_type: FormType) -> Result<Vec<u8>> {
        let path = self.path(form_type);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FormError::TemplateNotFound(path.display().to_string()))
            }
            // Present but unreadable: the renderer treats this like a bad template
            Err(e) => Err(FormError::TemplateUnreadable(format!(
                "{}: {e}",
                path.display()
            ))),
        }
    }

    fn contains(&self, form_type: FormType) -> bool {
        self.path(form_type).is_file()
    }
}

/// Templates held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplates {
    templates: HashMap<FormType, Vec<u8>>,
}

impl MemoryTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the template for `form_type`
    pub fn with_template(mut self, form_type: FormType, bytes: Vec<u8>) -> Self {
        self.insert(form_type, bytes);
        self
    }

    pub fn insert(&mut self, form_type: FormType, bytes: Vec<u8>) {
        self.templates.insert(form_type, bytes);
    }
}

impl TemplateStore for MemoryTemplates {
    fn template(&self, form_type: FormType) -> Result<Vec<u8>> {
        self.templates
            .get(&form_type)
            .cloned()
            .ok_or_else(|| FormError::TemplateNotFound(form_type.to_string()))
    }

    fn contains(&self, form_type: FormType) -> bool {
        self.templates.contains_key(&form_type)
    }
}
