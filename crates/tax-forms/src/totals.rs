//! Totals calculation
//!
//! Pure functions of the record. Values keep full `f64` precision; rounding
//! and separators belong to presentation (see [`crate::format`]).
//!
//! Inputs are always finite, but sums are plain IEEE arithmetic: amounts near
//! `f64::MAX` can add up to `inf` (and `inf - inf` to `NaN`). Such totals
//! serialize to JSON `null` and print as `$inf` / `$nan`.

use crate::parser::safe_parse;
use crate::{RentalProperty, ScheduleC, ScheduleE};
use serde::{Deserialize, Serialize};

/// Schedule C roll-up
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleCTotals {
    /// Gross receipts − returns and allowances + other income
    pub gross_income: f64,
    /// Part II expenses plus every Part V amount
    pub total_expenses: f64,
    /// `gross_income − total_expenses`
    pub net_profit: f64,
}

/// Schedule E roll-up across all property columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleETotals {
    pub total_income: f64,
    pub total_expenses: f64,
    /// `total_income − total_expenses`
    pub net_income: f64,
}

/// Income and expenses of one rental property
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropertyTotals {
    pub income: f64,
    pub expenses: f64,
}

/// Compute Schedule C totals
///
/// Part V amounts count even when their description is blank.
pub fn calculate_schedule_c(form: &ScheduleC) -> ScheduleCTotals {
    let gross_income = safe_parse(&form.gross_receipts) - safe_parse(&form.returns_allowances)
        + safe_parse(&form.other_income);

    let expenses: f64 = form.expense_fields().iter().map(|v| safe_parse(v)).sum();
    let other_expenses: f64 = form
        .other_expenses
        .iter()
        .map(|entry| safe_parse(&entry.amount))
        .sum();

    let total_expenses = expenses + other_expenses;

    ScheduleCTotals {
        gross_income,
        total_expenses,
        net_profit: gross_income - total_expenses,
    }
}

/// Compute the totals of a single property column
pub fn calculate_property(property: &RentalProperty) -> PropertyTotals {
    PropertyTotals {
        income: property.income_fields().iter().map(|v| safe_parse(v)).sum(),
        expenses: property.expense_fields().iter().map(|v| safe_parse(v)).sum(),
    }
}

/// Compute Schedule E totals
pub fn calculate_schedule_e(form: &ScheduleE) -> ScheduleETotals {
    let (total_income, total_expenses) = form
        .properties
        .iter()
        .map(calculate_property)
        .fold((0.0, 0.0), |(income, expenses), p| {
            (income + p.income, expenses + p.expenses)
        });

    ScheduleETotals {
        total_income,
        total_expenses,
        net_income: total_income - total_expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn schedule_c(gross: &str, returns: &str, other: &str, advertising: &str) -> ScheduleC {
        ScheduleC {
            gross_receipts: gross.to_string(),
            returns_allowances: returns.to_string(),
            other_income: other.to_string(),
            advertising: advertising.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_schedule_c_scenario() {
        let totals = calculate_schedule_c(&schedule_c("1000", "100", "0", "50"));
        assert_eq!(
            totals,
            ScheduleCTotals {
                gross_income: 900.0,
                total_expenses: 50.0,
                net_profit: 850.0,
            }
        );
    }

    #[test]
    fn test_schedule_c_blank_record() {
        assert_eq!(
            calculate_schedule_c(&ScheduleC::default()),
            ScheduleCTotals::default()
        );
    }

    #[test]
    fn test_other_expense_without_description_counts() {
        let mut form = ScheduleC::default();
        form.other_expenses.0[2].amount = "25".to_string();
        let totals = calculate_schedule_c(&form);
        assert_eq!(totals.total_expenses, 25.0);
        assert_eq!(totals.net_profit, -25.0);
    }

    #[test]
    fn test_every_expense_field_counts() {
        let mut form = ScheduleC::default();
        form.advertising = "1".to_string();
        form.car_truck_expenses = "1".to_string();
        form.commissions_and_fees = "1".to_string();
        form.contract_labor = "1".to_string();
        form.depletion = "1".to_string();
        form.depreciation = "1".to_string();
        form.employee_benefit_programs = "1".to_string();
        form.insurance = "1".to_string();
        form.interest_mortgage = "1".to_string();
        form.interest_other = "1".to_string();
        form.legal_professional_services = "1".to_string();
        form.office_expense = "1".to_string();
        form.pension_profit_sharing = "1".to_string();
        form.rent_lease_vehicles = "1".to_string();
        form.rent_lease_machinery = "1".to_string();
        form.rent_lease_other = "1".to_string();
        form.repairs_maintenance = "1".to_string();
        form.supplies = "1".to_string();
        form.taxes_licenses = "1".to_string();
        form.travel = "1".to_string();
        form.deductible_meals = "1".to_string();
        form.utilities = "1".to_string();
        form.wages = "1".to_string();
        for entry in form.other_expenses.0.iter_mut() {
            entry.amount = "2".to_string();
        }

        let totals = calculate_schedule_c(&form);
        assert_eq!(totals.total_expenses, 23.0 + 20.0);
    }

    #[test]
    fn test_invalid_numbers_are_zero() {
        let totals = calculate_schedule_c(&schedule_c("abc", "", "1,000", "-5"));
        assert_eq!(totals.gross_income, 0.0);
        assert_eq!(totals.total_expenses, -5.0);
        assert_eq!(totals.net_profit, 5.0);
    }

    #[test]
    fn test_other_expense_order_does_not_matter() {
        let mut form = ScheduleC::default();
        for (entry, amount) in form.other_expenses.0.iter_mut().zip(["10", "2.5", "7", "0.25"]) {
            entry.amount = amount.to_string();
        }
        let mut reversed = form.clone();
        reversed.other_expenses.0.reverse();

        assert_eq!(calculate_schedule_c(&form), calculate_schedule_c(&reversed));
    }

    #[test]
    fn test_schedule_e_blank_properties() {
        assert_eq!(
            calculate_schedule_e(&ScheduleE::default()),
            ScheduleETotals {
                total_income: 0.0,
                total_expenses: 0.0,
                net_income: 0.0,
            }
        );
    }

    #[test]
    fn test_schedule_e_sums_across_properties() {
        let mut form = ScheduleE::default();
        form.properties.0[0].rental_income = "1200".to_string();
        form.properties.0[0].royalties = "100".to_string();
        form.properties.0[0].repairs = "200".to_string();
        form.properties.0[1].other_income = "50".to_string();
        form.properties.0[2].taxes = "300".to_string();
        form.properties.0[2].depreciation = "not a number".to_string();

        let totals = calculate_schedule_e(&form);
        assert_eq!(totals.total_income, 1350.0);
        assert_eq!(totals.total_expenses, 500.0);
        assert_eq!(totals.net_income, 850.0);
    }

    #[test]
    fn test_calculate_property() {
        let property = RentalProperty {
            rental_income: "900".to_string(),
            mortgage_interest: "400".to_string(),
            management: "90".to_string(),
            ..Default::default()
        };
        assert_eq!(
            calculate_property(&property),
            PropertyTotals {
                income: 900.0,
                expenses: 490.0,
            }
        );
    }

    #[test]
    fn test_overflowing_sum_is_infinite() {
        let totals = calculate_schedule_c(&schedule_c("1e308", "", "1e308", "1e308"));
        assert_eq!(totals.gross_income, f64::INFINITY);
        assert_eq!(totals.total_expenses, 1e308);
        assert_eq!(totals.net_profit, f64::INFINITY);

        let json = serde_json::to_value(totals).unwrap();
        assert_eq!(json["gross_income"], serde_json::Value::Null);
        assert_eq!(json["total_expenses"], serde_json::json!(1e308));
    }

    #[test]
    fn test_compute_is_deterministic() {
        let form = schedule_c("1234.56", "34.56", "10", "99.99");
        assert_eq!(calculate_schedule_c(&form), calculate_schedule_c(&form));
    }
}
