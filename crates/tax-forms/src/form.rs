//! Form types and the per-form behavior the renderer is generic over

use crate::fallback::{self, RenderInstruction};
use crate::fields::{self, FieldMapping};
use crate::totals::{self, ScheduleCTotals, ScheduleETotals};
use crate::{FormError, Result, ScheduleC, ScheduleE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported IRS schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormType {
    ScheduleC,
    ScheduleE,
}

impl FormType {
    /// All supported forms
    pub const ALL: [FormType; 2] = [FormType::ScheduleC, FormType::ScheduleE];

    /// Identifier used in URLs and file names, e.g. `schedule-c`
    pub fn as_str(self) -> &'static str {
        match self {
            FormType::ScheduleC => "schedule-c",
            FormType::ScheduleE => "schedule-e",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "schedule-c" | "schedule_c" | "c" => Ok(FormType::ScheduleC),
            "schedule-e" | "schedule_e" | "e" => Ok(FormType::ScheduleE),
            other => Err(FormError::InvalidRecord(format!("unknown form type: {other}"))),
        }
    }
}

/// Behavior each schedule provides to the renderer
pub trait TaxForm {
    /// Which schedule this is
    const FORM_TYPE: FormType;

    /// Totals shape of this schedule
    type Totals;

    /// Compute the totals
    fn totals(&self) -> Self::Totals;

    /// Template field identifier → value, in table order
    fn field_mapping(&self) -> FieldMapping;

    /// Plain-text drawing plan used when the template path is unavailable
    fn fallback_plan(&self, totals: &Self::Totals) -> Vec<RenderInstruction>;
}

impl TaxForm for ScheduleC {
    const FORM_TYPE: FormType = FormType::ScheduleC;
    type Totals = ScheduleCTotals;

    fn totals(&self) -> ScheduleCTotals {
        totals::calculate_schedule_c(self)
    }

    fn field_mapping(&self) -> FieldMapping {
        FieldMapping::from_table(fields::SCHEDULE_C_FIELDS, self)
    }

    fn fallback_plan(&self, totals: &ScheduleCTotals) -> Vec<RenderInstruction> {
        fallback::schedule_c_plan(self, totals)
    }
}

impl TaxForm for ScheduleE {
    const FORM_TYPE: FormType = FormType::ScheduleE;
    type Totals = ScheduleETotals;

    fn totals(&self) -> ScheduleETotals {
        totals::calculate_schedule_e(self)
    }

    fn field_mapping(&self) -> FieldMapping {
        FieldMapping::from_table(fields::SCHEDULE_E_FIELDS, self)
    }

    fn fallback_plan(&self, totals: &ScheduleETotals) -> Vec<RenderInstruction> {
        fallback::schedule_e_plan(self, totals)
    }
}

/// A decoded submission of either schedule
#[derive(Debug, Clone, PartialEq)]
pub enum FormRecord {
    ScheduleC(ScheduleC),
    ScheduleE(ScheduleE),
}

impl FormRecord {
    /// Decode a record from a JSON value
    pub fn from_json(form_type: FormType, value: serde_json::Value) -> Result<Self> {
        let record = match form_type {
            FormType::ScheduleC => FormRecord::ScheduleC(
                serde_json::from_value(value).map_err(|e| FormError::InvalidRecord(e.to_string()))?,
            ),
            FormType::ScheduleE => FormRecord::ScheduleE(
                serde_json::from_value(value).map_err(|e| FormError::InvalidRecord(e.to_string()))?,
            ),
        };
        Ok(record)
    }

    /// Which schedule this record belongs to
    pub fn form_type(&self) -> FormType {
        match self {
            FormRecord::ScheduleC(_) => FormType::ScheduleC,
            FormRecord::ScheduleE(_) => FormType::ScheduleE,
        }
    }

    /// Compute the totals
    pub fn totals(&self) -> Totals {
        match self {
            FormRecord::ScheduleC(form) => Totals::ScheduleC(form.totals()),
            FormRecord::ScheduleE(form) => Totals::ScheduleE(form.totals()),
        }
    }

    /// Template field mapping
    pub fn field_mapping(&self) -> FieldMapping {
        match self {
            FormRecord::ScheduleC(form) => form.field_mapping(),
            FormRecord::ScheduleE(form) => form.field_mapping(),
        }
    }
}

impl From<ScheduleC> for FormRecord {
    fn from(form: ScheduleC) -> Self {
        FormRecord::ScheduleC(form)
    }
}

impl From<ScheduleE> for FormRecord {
    fn from(form: ScheduleE) -> Self {
        FormRecord::ScheduleE(form)
    }
}

/// Totals of either schedule
///
/// Serializes as the inner struct, e.g.
/// `{"gross_income": 900.0, "total_expenses": 50.0, "net_profit": 850.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Totals {
    ScheduleC(ScheduleCTotals),
    ScheduleE(ScheduleETotals),
}
