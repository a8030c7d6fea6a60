//! Schedule E template field identifiers

use super::FieldTable;
use crate::ScheduleE;

/// Schedule E widget keys (`/T` tokens) for Part I, columns A, B and C
///
/// Line 3 onward is laid out as one row per line with a field per column.
/// Other income has no line on Part I and is only counted in the totals.
pub static SCHEDULE_E_FIELDS: FieldTable<ScheduleE> = &[
    // Header
    ("<FEFF00660031005F0031005B0030005D>", |f| f.name.clone()),
    ("<FEFF00660031005F0032005B0030005D>", |f| f.ssn.clone()),
    // Line 1a
    ("<FEFF00660031005F0033005B0030005D>", |f| f.properties.slot(1).full_address()),
    ("<FEFF00660031005F0034005B0030005D>", |f| f.properties.slot(2).full_address()),
    ("<FEFF00660031005F0035005B0030005D>", |f| f.properties.slot(3).full_address()),
    // Line 1b
    ("<FEFF00660031005F0036005B0030005D>", |f| f.properties.slot(1).property_type.clone()),
    ("<FEFF00660031005F0037005B0030005D>", |f| f.properties.slot(2).property_type.clone()),
    ("<FEFF00660031005F0038005B0030005D>", |f| f.properties.slot(3).property_type.clone()),
    // Line 2
    ("<FEFF00660031005F0039005B0030005D>", |f| f.properties.slot(1).rental_days.clone()),
    ("<FEFF00660031005F00310030005B0030005D>", |f| f.properties.slot(1).personal_days.clone()),
    ("<FEFF00660031005F00310032005B0030005D>", |f| f.properties.slot(2).rental_days.clone()),
    ("<FEFF00660031005F00310033005B0030005D>", |f| f.properties.slot(2).personal_days.clone()),
    ("<FEFF00660031005F00310035005B0030005D>", |f| f.properties.slot(3).rental_days.clone()),
    ("<FEFF00660031005F00310036005B0030005D>", |f| f.properties.slot(3).personal_days.clone()),
    // Line 3
    ("<FEFF00660031005F00310038005B0030005D>", |f| f.properties.slot(1).rental_income.clone()),
    ("<FEFF00660031005F00310039005B0030005D>", |f| f.properties.slot(2).rental_income.clone()),
    ("<FEFF00660031005F00320030005B0030005D>", |f| f.properties.slot(3).rental_income.clone()),
    // Line 4
    ("<FEFF00660031005F00320031005B0030005D>", |f| f.properties.slot(1).royalties.clone()),
    ("<FEFF00660031005F00320032005B0030005D>", |f| f.properties.slot(2).royalties.clone()),
    ("<FEFF00660031005F00320033005B0030005D>", |f| f.properties.slot(3).royalties.clone()),
    // Line 5
    ("<FEFF00660031005F00320034005B0030005D>", |f| f.properties.slot(1).advertising.clone()),
    ("<FEFF00660031005F00320035005B0030005D>", |f| f.properties.slot(2).advertising.clone()),
    ("<FEFF00660031005F00320036005B0030005D>", |f| f.properties.slot(3).advertising.clone()),
    // Line 6
    ("<FEFF00660031005F00320037005B0030005D>", |f| f.properties.slot(1).auto_travel.clone()),
    ("<FEFF00660031005F00320038005B0030005D>", |f| f.properties.slot(2).auto_travel.clone()),
    ("<FEFF00660031005F00320039005B0030005D>", |f| f.properties.slot(3).auto_travel.clone()),
    // Line 7
    ("<FEFF00660031005F00330030005B0030005D>", |f| f.properties.slot(1).cleaning.clone()),
    ("<FEFF00660031005F00330031005B0030005D>", |f| f.properties.slot(2).cleaning.clone()),
    ("<FEFF00660031005F00330032005B0030005D>", |f| f.properties.slot(3).cleaning.clone()),
    // Line 8
    ("<FEFF00660031005F00330033005B0030005D>", |f| f.properties.slot(1).commissions.clone()),
    ("<FEFF00660031005F00330034005B0030005D>", |f| f.properties.slot(2).commissions.clone()),
    ("<FEFF00660031005F00330035005B0030005D>", |f| f.properties.slot(3).commissions.clone()),
    // Line 9
    ("<FEFF00660031005F00330036005B0030005D>", |f| f.properties.slot(1).insurance.clone()),
    ("<FEFF00660031005F00330037005B0030005D>", |f| f.properties.slot(2).insurance.clone()),
    ("<FEFF00660031005F00330038005B0030005D>", |f| f.properties.slot(3).insurance.clone()),
    // Line 10
    ("<FEFF00660031005F00330039005B0030005D>", |f| f.properties.slot(1).legal.clone()),
    ("<FEFF00660031005F00340030005B0030005D>", |f| f.properties.slot(2).legal.clone()),
    ("<FEFF00660031005F00340031005B0030005D>", |f| f.properties.slot(3).legal.clone()),
    // Line 11
    ("<FEFF00660031005F00340032005B0030005D>", |f| f.properties.slot(1).management.clone()),
    ("<FEFF00660031005F00340033005B0030005D>", |f| f.properties.slot(2).management.clone()),
    ("<FEFF00660031005F00340034005B0030005D>", |f| f.properties.slot(3).management.clone()),
    // Line 12
    ("<FEFF00660031005F00340035005B0030005D>", |f| f.properties.slot(1).mortgage_interest.clone()),
    ("<FEFF00660031005F00340036005B0030005D>", |f| f.properties.slot(2).mortgage_interest.clone()),
    ("<FEFF00660031005F00340037005B0030005D>", |f| f.properties.slot(3).mortgage_interest.clone()),
    // Line 13
    ("<FEFF00660031005F00340038005B0030005D>", |f| f.properties.slot(1).other_interest.clone()),
    ("<FEFF00660031005F00340039005B0030005D>", |f| f.properties.slot(2).other_interest.clone()),
    ("<FEFF00660031005F00350030005B0030005D>", |f| f.properties.slot(3).other_interest.clone()),
    // Line 14
    ("<FEFF00660031005F00350031005B0030005D>", |f| f.properties.slot(1).repairs.clone()),
    ("<FEFF00660031005F00350032005B0030005D>", |f| f.properties.slot(2).repairs.clone()),
    ("<FEFF00660031005F00350033005B0030005D>", |f| f.properties.slot(3).repairs.clone()),
    // Line 15
    ("<FEFF00660031005F00350034005B0030005D>", |f| f.properties.slot(1).supplies.clone()),
    ("<FEFF00660031005F00350035005B0030005D>", |f| f.properties.slot(2).supplies.clone()),
    ("<FEFF00660031005F00350036005B0030005D>", |f| f.properties.slot(3).supplies.clone()),
    // Line 16
    ("<FEFF00660031005F00350037005B0030005D>", |f| f.properties.slot(1).taxes.clone()),
    ("<FEFF00660031005F00350038005B0030005D>", |f| f.properties.slot(2).taxes.clone()),
    ("<FEFF00660031005F00350039005B0030005D>", |f| f.properties.slot(3).taxes.clone()),
    // Line 17
    ("<FEFF00660031005F00360030005B0030005D>", |f| f.properties.slot(1).utilities.clone()),
    ("<FEFF00660031005F00360031005B0030005D>", |f| f.properties.slot(2).utilities.clone()),
    ("<FEFF00660031005F00360032005B0030005D>", |f| f.properties.slot(3).utilities.clone()),
    // Line 18
    ("<FEFF00660031005F00360033005B0030005D>", |f| f.properties.slot(1).depreciation.clone()),
    ("<FEFF00660031005F00360034005B0030005D>", |f| f.properties.slot(2).depreciation.clone()),
    ("<FEFF00660031005F00360035005B0030005D>", |f| f.properties.slot(3).depreciation.clone()),
];
