//! Fallback report layout
//!
//! When the template cannot be filled, each schedule is drawn as a plain
//! text report on US Letter pages. Layout is produced as a list of
//! [`RenderInstruction`]s, consumed top to bottom by the renderer.
//!
//! Amount lines are only emitted when the amount parses to a strictly
//! positive value.

use crate::format::format_currency;
use crate::parser::safe_parse;
use crate::totals::{ScheduleCTotals, ScheduleETotals};
use crate::{RentalProperty, ScheduleC, ScheduleE};
use pdf_core::StandardFont;

/// Left margin of every line
pub const LEFT_MARGIN: f64 = 50.0;

/// Baseline of the first line on a page (792 - 50)
pub const TOP: f64 = 742.0;

/// Lines never start below this baseline; a new page begins instead
pub const BOTTOM_MARGIN: f64 = 50.0;

const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 12.0;

/// One line of text at an absolute position
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInstruction {
    /// Page index (0-indexed)
    pub page: usize,
    pub x: f64,
    pub y: f64,
    pub font: StandardFont,
    pub size: f32,
    pub text: String,
}

/// Cursor that lays lines out downwards and breaks pages
struct PlanBuilder {
    page: usize,
    y: f64,
    lines: Vec<RenderInstruction>,
}

impl PlanBuilder {
    fn new() -> Self {
        Self {
            page: 0,
            y: TOP,
            lines: Vec::new(),
        }
    }

    /// Emit a line at the cursor, then move down by `advance`
    fn line(&mut self, font: StandardFont, size: f32, text: String, advance: f64) {
        if self.y < BOTTOM_MARGIN {
            self.page += 1;
            self.y = TOP;
        }
        self.lines.push(RenderInstruction {
            page: self.page,
            x: LEFT_MARGIN,
            y: self.y,
            font,
            size,
            text,
        });
        self.y -= advance;
    }

    fn title(&mut self, text: &str) {
        self.line(StandardFont::HelveticaBold, TITLE_SIZE, text.to_string(), 30.0);
    }

    fn heading(&mut self, text: &str) {
        self.line(StandardFont::HelveticaBold, HEADING_SIZE, text.to_string(), 20.0);
    }

    fn body(&mut self, text: String, advance: f64) {
        self.line(StandardFont::Helvetica, BODY_SIZE, text, advance);
    }

    fn total(&mut self, label: &str, amount: f64) {
        self.line(
            StandardFont::HelveticaBold,
            HEADING_SIZE,
            format!("{label}: {}", format_currency(amount)),
            20.0,
        );
    }

    /// `label: $amount` when the amount is positive
    fn amount(&mut self, label: &str, value: &str) {
        let amount = safe_parse(value);
        if amount > 0.0 {
            self.body(format!("{label}: {}", format_currency(amount)), 15.0);
        }
    }

    /// `label: value` when the value is not blank
    fn text(&mut self, label: &str, value: &str) {
        if !value.trim().is_empty() {
            self.body(format!("{label}: {value}"), 15.0);
        }
    }

    fn gap(&mut self, amount: f64) {
        self.y -= amount;
    }

    fn finish(self) -> Vec<RenderInstruction> {
        self.lines
    }
}

/// Report layout for Schedule C
pub fn schedule_c_plan(form: &ScheduleC, totals: &ScheduleCTotals) -> Vec<RenderInstruction> {
    let mut plan = PlanBuilder::new();

    plan.title("Schedule C - Profit or Loss From Business");
    plan.body(format!("Name: {}", form.name), 20.0);
    plan.body(format!("SSN: {}", form.ssn), 20.0);
    plan.body(format!("Business: {}", form.business_name), 20.0);
    plan.body(
        format!("Address: {}, {}", form.business_address, form.city_state_zip()),
        30.0,
    );

    plan.heading("Income");
    plan.body(
        format!("Gross Receipts: {}", currency_of(&form.gross_receipts)),
        20.0,
    );
    plan.body(
        format!("Returns & Allowances: {}", currency_of(&form.returns_allowances)),
        20.0,
    );
    plan.body(
        format!("Other Income: {}", currency_of(&form.other_income)),
        30.0,
    );

    plan.heading("Expenses");
    let expenses = [
        ("Advertising", &form.advertising),
        ("Car & Truck", &form.car_truck_expenses),
        ("Commissions", &form.commissions_and_fees),
        ("Contract Labor", &form.contract_labor),
        ("Depreciation", &form.depreciation),
        ("Insurance", &form.insurance),
        ("Legal Services", &form.legal_professional_services),
        ("Office Expense", &form.office_expense),
        ("Rent", &form.rent_lease_other),
        ("Repairs", &form.repairs_maintenance),
        ("Supplies", &form.supplies),
        ("Travel", &form.travel),
        ("Utilities", &form.utilities),
        ("Wages", &form.wages),
    ];
    for (label, value) in expenses {
        plan.amount(label, value);
    }

    if form.vehicle_used {
        plan.gap(10.0);
        plan.body(
            format!("Vehicle: {} {}", form.vehicle_make_model, form.vehicle_year),
            15.0,
        );
        plan.body(format!("Business Miles: {}", form.business_miles), 15.0);
        // No advance after the last vehicle line
        plan.body(format!("Total Miles: {}", form.total_miles), 0.0);
    }

    for entry in form.other_expenses.iter() {
        let amount = safe_parse(&entry.amount);
        if !entry.description.is_empty() && amount > 0.0 {
            plan.gap(10.0);
            plan.body(
                format!("Other: {} - {}", entry.description, format_currency(amount)),
                15.0,
            );
        }
    }

    plan.gap(20.0);
    plan.total("Gross Income", totals.gross_income);
    plan.total("Total Expenses", totals.total_expenses);
    plan.total("Net Profit", totals.net_profit);

    plan.finish()
}

/// Report layout for Schedule E
///
/// Property columns with every field blank are left out.
pub fn schedule_e_plan(form: &ScheduleE, totals: &ScheduleETotals) -> Vec<RenderInstruction> {
    let mut plan = PlanBuilder::new();

    plan.title("Schedule E - Supplemental Income and Loss");
    plan.body(format!("Name: {}", form.name), 20.0);
    plan.body(format!("SSN: {}", form.ssn), 30.0);

    for (i, property) in form.properties.iter().enumerate() {
        if property.is_blank() {
            continue;
        }
        property_section(&mut plan, i + 1, property);
    }

    plan.gap(20.0);
    plan.total("Total Income", totals.total_income);
    plan.total("Total Expenses", totals.total_expenses);
    plan.total("Net Income", totals.net_income);

    plan.finish()
}

fn property_section(plan: &mut PlanBuilder, n: usize, property: &RentalProperty) {
    plan.heading(&format!("Property {n}"));

    plan.text("Address", &property.full_address());
    plan.text("Type", &property.property_type);
    plan.text("Fair Rental Days", &property.rental_days);
    plan.text("Personal Use Days", &property.personal_days);

    let lines = [
        ("Rents Received", &property.rental_income),
        ("Royalties Received", &property.royalties),
        ("Other Income", &property.other_income),
        ("Advertising", &property.advertising),
        ("Auto & Travel", &property.auto_travel),
        ("Cleaning & Maintenance", &property.cleaning),
        ("Commissions", &property.commissions),
        ("Insurance", &property.insurance),
        ("Legal & Professional Fees", &property.legal),
        ("Management Fees", &property.management),
        ("Mortgage Interest", &property.mortgage_interest),
        ("Other Interest", &property.other_interest),
        ("Repairs", &property.repairs),
        ("Supplies", &property.supplies),
        ("Taxes", &property.taxes),
        ("Utilities", &property.utilities),
        ("Depreciation", &property.depreciation),
    ];
    for (label, value) in lines {
        plan.amount(label, value);
    }

    plan.gap(10.0);
}

fn currency_of(value: &str) -> String {
    format_currency(safe_parse(value))
}
