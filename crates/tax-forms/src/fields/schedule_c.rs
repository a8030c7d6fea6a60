//! Schedule C template field identifiers

use super::FieldTable;
use crate::ScheduleC;

/// Schedule C widget keys (`/T` tokens) and the record value each receives
///
/// Part V has ten description rows but only nine amount slots on the
/// template, so `otherExpense10Amount` is summed into the totals yet never
/// written to a field.
pub static SCHEDULE_C_FIELDS: FieldTable<ScheduleC> = &[
    // Page 1 header
    ("<FEFF00660031005F0031005B0030005D>", |f| f.name.clone()),
    ("<FEFF00660031005F0032005B0030005D>", |f| f.ssn.clone()),
    ("<FEFF00660031005F0033005B0030005D>", |f| f.principal_business_activity.clone()),
    ("<FEFF00660031005F0034005B0030005D>", |f| f.business_code.clone()),
    ("<FEFF00660031005F0035005B0030005D>", |f| f.business_name.clone()),
    ("<FEFF00660031005F0036005B0030005D>", |f| f.business_address.clone()),
    ("<FEFF00660031005F0037005B0030005D>", |f| f.city_state_zip()),
    ("<FEFF00660031005F0038005B0030005D>", |f| f.business_start_date.clone()),
    ("<FEFF00660031005F0039005B0030005D>", |f| f.additional_business_info.clone()),
    // Part I
    ("<FEFF00660031005F00310030005B0030005D>", |f| f.gross_receipts.clone()),
    ("<FEFF00660031005F00310031005B0030005D>", |f| f.returns_allowances.clone()),
    ("<FEFF00660031005F00310032005B0030005D>", |f| f.other_income.clone()),
    // Part II
    ("<FEFF00660031005F00310034005B0030005D>", |f| f.advertising.clone()),
    ("<FEFF00660031005F00310035005B0030005D>", |f| f.car_truck_expenses.clone()),
    ("<FEFF00660031005F00310036005B0030005D>", |f| f.commissions_and_fees.clone()),
    ("<FEFF00660031005F00310037005B0030005D>", |f| f.contract_labor.clone()),
    ("<FEFF00660031005F00310038005B0030005D>", |f| f.depletion.clone()),
    ("<FEFF00660031005F00310039005B0030005D>", |f| f.depreciation.clone()),
    ("<FEFF00660031005F00320030005B0030005D>", |f| f.employee_benefit_programs.clone()),
    ("<FEFF00660031005F00320031005B0030005D>", |f| f.insurance.clone()),
    ("<FEFF00660031005F00320032005B0030005D>", |f| f.interest_mortgage.clone()),
    ("<FEFF00660031005F00320033005B0030005D>", |f| f.interest_other.clone()),
    ("<FEFF00660031005F00320034005B0030005D>", |f| f.legal_professional_services.clone()),
    ("<FEFF00660031005F00320035005B0030005D>", |f| f.office_expense.clone()),
    ("<FEFF00660031005F00320036005B0030005D>", |f| f.pension_profit_sharing.clone()),
    ("<FEFF00660031005F00320037005B0030005D>", |f| f.rent_lease_vehicles.clone()),
    ("<FEFF00660031005F00320038005B0030005D>", |f| f.rent_lease_machinery.clone()),
    ("<FEFF00660031005F00320039005B0030005D>", |f| f.rent_lease_other.clone()),
    ("<FEFF00660031005F00330030005B0030005D>", |f| f.repairs_maintenance.clone()),
    ("<FEFF00660031005F00330031005B0030005D>", |f| f.supplies.clone()),
    ("<FEFF00660031005F00330032005B0030005D>", |f| f.taxes_licenses.clone()),
    ("<FEFF00660031005F00330033005B0030005D>", |f| f.travel.clone()),
    ("<FEFF00660031005F00330034005B0030005D>", |f| f.deductible_meals.clone()),
    ("<FEFF00660031005F00330035005B0030005D>", |f| f.utilities.clone()),
    ("<FEFF00660031005F00330036005B0030005D>", |f| f.wages.clone()),
    // Part IV
    ("<FEFF00660032005F0031005B0030005D>", |f| f.vehicle_make_model.clone()),
    ("<FEFF00660032005F0032005B0030005D>", |f| f.vehicle_year.clone()),
    ("<FEFF00660032005F0033005B0030005D>", |f| f.total_miles.clone()),
    ("<FEFF00660032005F0034005B0030005D>", |f| f.business_miles.clone()),
    ("<FEFF00660032005F0035005B0030005D>", |f| f.commuting_miles.clone()),
    ("<FEFF00660032005F0036005B0030005D>", |f| f.other_personal_miles.clone()),
    ("<FEFF00660032005F0037005B0030005D>", |f| f.available_for_personal_use.clone()),
    ("<FEFF00660032005F0038005B0030005D>", |f| f.evidence_to_support_deduction.clone()),
    ("<FEFF00660032005F0039005B0030005D>", |f| f.evidence_written.clone()),
    // Part V
    ("<FEFF00660032005F00310035005B0030005D>", |f| f.other_expenses.slot(1).description.clone()),
    ("<FEFF00660032005F00310036005B0030005D>", |f| f.other_expenses.slot(1).amount.clone()),
    ("<FEFF00660032005F00310037005B0030005D>", |f| f.other_expenses.slot(2).description.clone()),
    ("<FEFF00660032005F00310038005B0030005D>", |f| f.other_expenses.slot(2).amount.clone()),
    ("<FEFF00660032005F00310039005B0030005D>", |f| f.other_expenses.slot(3).description.clone()),
    ("<FEFF00660032005F00320030005B0030005D>", |f| f.other_expenses.slot(3).amount.clone()),
    ("<FEFF00660032005F00320031005B0030005D>", |f| f.other_expenses.slot(4).description.clone()),
    ("<FEFF00660032005F00320032005B0030005D>", |f| f.other_expenses.slot(4).amount.clone()),
    ("<FEFF00660032005F00320033005B0030005D>", |f| f.other_expenses.slot(5).description.clone()),
    ("<FEFF00660032005F00320034005B0030005D>", |f| f.other_expenses.slot(5).amount.clone()),
    ("<FEFF00660032005F00320035005B0030005D>", |f| f.other_expenses.slot(6).description.clone()),
    ("<FEFF00660032005F00320036005B0030005D>", |f| f.other_expenses.slot(6).amount.clone()),
    ("<FEFF00660032005F00320037005B0030005D>", |f| f.other_expenses.slot(7).description.clone()),
    ("<FEFF00660032005F00320038005B0030005D>", |f| f.other_expenses.slot(7).amount.clone()),
    ("<FEFF00660032005F00320039005B0030005D>", |f| f.other_expenses.slot(8).description.clone()),
    ("<FEFF00660032005F00330030005B0030005D>", |f| f.other_expenses.slot(8).amount.clone()),
    ("<FEFF00660032005F00330031005B0030005D>", |f| f.other_expenses.slot(9).description.clone()),
    ("<FEFF00660032005F00330032005B0030005D>", |f| f.other_expenses.slot(9).amount.clone()),
    ("<FEFF00660032005F00330033005B0030005D>", |f| f.other_expenses.slot(10).description.clone()),
];
