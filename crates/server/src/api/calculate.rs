use super::FormJson;
use axum::Json;
use tax_forms::{ScheduleC, ScheduleCTotals, ScheduleE, ScheduleETotals, TaxForm};

/// Totals for a Schedule C submission
pub async fn calculate_schedule_c(FormJson(form): FormJson<ScheduleC>) -> Json<ScheduleCTotals> {
    Json(form.totals())
}

/// Totals for a Schedule E submission
pub async fn calculate_schedule_e(FormJson(form): FormJson<ScheduleE>) -> Json<ScheduleETotals> {
    Json(form.totals())
}
