//! Form record types
//!
//! Records mirror the flat camelCase JSON the web form posts. Every field
//! defaults to `""` or `false`, so partial submissions always deserialize.
//! Numeric inputs stay strings until [`crate::safe_parse`] coerces them; a
//! JSON number posted for any text field is kept as its JSON text.

use crate::parser::{deserialize_text, take_text, TextMap};
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Number of "other expense" slots in Schedule C Part V
pub const OTHER_EXPENSE_SLOTS: usize = 10;

/// Number of property columns on Schedule E
pub const PROPERTY_SLOTS: usize = 3;

/// Schedule C - Profit or Loss From Business
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleC {
    // Personal information
    #[serde(deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub ssn: String,

    // Business information
    #[serde(deserialize_with = "deserialize_text")]
    pub principal_business_activity: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub business_code: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub business_name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub business_address: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub city: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub state: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub zip_code: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub accounting_method: String,
    pub material_participation: bool,
    pub started_business: bool,
    #[serde(deserialize_with = "deserialize_text")]
    pub business_start_date: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub additional_business_info: String,

    // Part I - Income
    #[serde(deserialize_with = "deserialize_text")]
    pub gross_receipts: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub returns_allowances: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub other_income: String,

    // Part II - Expenses
    #[serde(deserialize_with = "deserialize_text")]
    pub advertising: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub car_truck_expenses: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub commissions_and_fees: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub contract_labor: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub depletion: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub depreciation: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub employee_benefit_programs: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub insurance: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub interest_mortgage: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub interest_other: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub legal_professional_services: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub office_expense: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub pension_profit_sharing: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub rent_lease_vehicles: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub rent_lease_machinery: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub rent_lease_other: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub repairs_maintenance: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub supplies: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub taxes_licenses: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub travel: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub deductible_meals: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub utilities: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub wages: String,

    // Part IV - Vehicle information
    pub vehicle_used: bool,
    #[serde(deserialize_with = "deserialize_text")]
    pub vehicle_make_model: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub vehicle_year: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub total_miles: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub business_miles: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub commuting_miles: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub other_personal_miles: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub available_for_personal_use: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub evidence_to_support_deduction: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub evidence_written: String,

    // Part V - Other expenses, flattened as otherExpense{n}Desc / otherExpense{n}Amount
    #[serde(flatten)]
    pub other_expenses: OtherExpenses,
}

impl ScheduleC {
    /// The Part II expense inputs, in line order
    pub fn expense_fields(&self) -> [&str; 23] {
        [
            &self.advertising,
            &self.car_truck_expenses,
            &self.commissions_and_fees,
            &self.contract_labor,
            &self.depletion,
            &self.depreciation,
            &self.employee_benefit_programs,
            &self.insurance,
            &self.interest_mortgage,
            &self.interest_other,
            &self.legal_professional_services,
            &self.office_expense,
            &self.pension_profit_sharing,
            &self.rent_lease_vehicles,
            &self.rent_lease_machinery,
            &self.rent_lease_other,
            &self.repairs_maintenance,
            &self.supplies,
            &self.taxes_licenses,
            &self.travel,
            &self.deductible_meals,
            &self.utilities,
            &self.wages,
        ]
    }

    /// Business location as written on line E: `city, state zip`
    pub fn city_state_zip(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip_code)
    }
}

/// One Part V "other expense" entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OtherExpense {
    pub description: String,
    pub amount: String,
}

/// The ten Part V entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OtherExpenses(pub [OtherExpense; OTHER_EXPENSE_SLOTS]);

impl OtherExpenses {
    /// Iterate over all slots, blank ones included
    pub fn iter(&self) -> std::slice::Iter<'_, OtherExpense> {
        self.0.iter()
    }

    /// Entry for slot `n` (1-indexed, as on the wire)
    pub fn slot(&self, n: usize) -> &OtherExpense {
        &self.0[n - 1]
    }
}

impl<'de> Deserialize<'de> for OtherExpenses {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = TextMap::deserialize(deserializer)?;
        let mut entries = <[OtherExpense; OTHER_EXPENSE_SLOTS]>::default();
        for (i, entry) in entries.iter_mut().enumerate() {
            let n = i + 1;
            entry.description = take_text::<D::Error>(&mut map, &format!("otherExpense{n}Desc"))?;
            entry.amount = take_text::<D::Error>(&mut map, &format!("otherExpense{n}Amount"))?;
        }
        Ok(OtherExpenses(entries))
    }
}

impl Serialize for OtherExpenses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(OTHER_EXPENSE_SLOTS * 2))?;
        for (i, entry) in self.0.iter().enumerate() {
            let n = i + 1;
            map.serialize_entry(&format!("otherExpense{n}Desc"), &entry.description)?;
            map.serialize_entry(&format!("otherExpense{n}Amount"), &entry.amount)?;
        }
        map.end()
    }
}

/// Schedule E - Supplemental Income and Loss (Part I, rental real estate)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleE {
    // Personal information
    #[serde(deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub ssn: String,

    // Properties, flattened as property{n}{Field}
    #[serde(flatten)]
    pub properties: RentalProperties,
}

/// One rental property column (A, B or C)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentalProperty {
    pub property_type: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub rental_days: String,
    pub personal_days: String,

    // Income
    pub rental_income: String,
    pub royalties: String,
    pub other_income: String,

    // Expenses
    pub advertising: String,
    pub auto_travel: String,
    pub cleaning: String,
    pub commissions: String,
    pub insurance: String,
    pub legal: String,
    pub management: String,
    pub mortgage_interest: String,
    pub other_interest: String,
    pub repairs: String,
    pub supplies: String,
    pub taxes: String,
    pub utilities: String,
    pub depreciation: String,
}

impl RentalProperty {
    /// Wire suffixes, in form order (`property1` + suffix)
    pub const FIELD_SUFFIXES: [&'static str; 24] = [
        "Type",
        "Address",
        "City",
        "State",
        "ZipCode",
        "RentalDays",
        "PersonalDays",
        "RentalIncome",
        "Royalties",
        "OtherIncome",
        "Advertising",
        "AutoTravel",
        "Cleaning",
        "Commissions",
        "Insurance",
        "Legal",
        "Management",
        "MortgageInterest",
        "OtherInterest",
        "Repairs",
        "Supplies",
        "Taxes",
        "Utilities",
        "Depreciation",
    ];

    /// Field values paired with their wire suffix
    pub fn fields(&self) -> [(&'static str, &str); 24] {
        let values = [
            &self.property_type,
            &self.address,
            &self.city,
            &self.state,
            &self.zip_code,
            &self.rental_days,
            &self.personal_days,
            &self.rental_income,
            &self.royalties,
            &self.other_income,
            &self.advertising,
            &self.auto_travel,
            &self.cleaning,
            &self.commissions,
            &self.insurance,
            &self.legal,
            &self.management,
            &self.mortgage_interest,
            &self.other_interest,
            &self.repairs,
            &self.supplies,
            &self.taxes,
            &self.utilities,
            &self.depreciation,
        ];
        let mut out = [("", ""); 24];
        for (slot, (suffix, value)) in out
            .iter_mut()
            .zip(Self::FIELD_SUFFIXES.iter().zip(values))
        {
            *slot = (*suffix, value.as_str());
        }
        out
    }

    fn field_mut(&mut self, suffix: &str) -> Option<&mut String> {
        let field = match suffix {
            "Type" => &mut self.property_type,
            "Address" => &mut self.address,
            "City" => &mut self.city,
            "State" => &mut self.state,
            "ZipCode" => &mut self.zip_code,
            "RentalDays" => &mut self.rental_days,
            "PersonalDays" => &mut self.personal_days,
            "RentalIncome" => &mut self.rental_income,
            "Royalties" => &mut self.royalties,
            "OtherIncome" => &mut self.other_income,
            "Advertising" => &mut self.advertising,
            "AutoTravel" => &mut self.auto_travel,
            "Cleaning" => &mut self.cleaning,
            "Commissions" => &mut self.commissions,
            "Insurance" => &mut self.insurance,
            "Legal" => &mut self.legal,
            "Management" => &mut self.management,
            "MortgageInterest" => &mut self.mortgage_interest,
            "OtherInterest" => &mut self.other_interest,
            "Repairs" => &mut self.repairs,
            "Supplies" => &mut self.supplies,
            "Taxes" => &mut self.taxes,
            "Utilities" => &mut self.utilities,
            "Depreciation" => &mut self.depreciation,
            _ => return None,
        };
        Some(field)
    }

    /// Income inputs: rents, royalties, other income
    pub fn income_fields(&self) -> [&str; 3] {
        [&self.rental_income, &self.royalties, &self.other_income]
    }

    /// Expense inputs, lines 5 through 18
    pub fn expense_fields(&self) -> [&str; 14] {
        [
            &self.advertising,
            &self.auto_travel,
            &self.cleaning,
            &self.commissions,
            &self.insurance,
            &self.legal,
            &self.management,
            &self.mortgage_interest,
            &self.other_interest,
            &self.repairs,
            &self.supplies,
            &self.taxes,
            &self.utilities,
            &self.depreciation,
        ]
    }

    /// True when every field is blank
    pub fn is_blank(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.trim().is_empty())
    }

    /// Street address with city, state and zip, skipping blank parts
    pub fn full_address(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        for part in [&self.address, &self.city] {
            if !part.is_empty() {
                parts.push(part.clone());
            }
        }
        let state_zip = format!("{} {}", self.state, self.zip_code);
        let state_zip = state_zip.trim();
        if !state_zip.is_empty() {
            parts.push(state_zip.to_string());
        }
        parts.join(", ")
    }
}

/// The three property columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentalProperties(pub [RentalProperty; PROPERTY_SLOTS]);

impl RentalProperties {
    /// Iterate over all columns, blank ones included
    pub fn iter(&self) -> std::slice::Iter<'_, RentalProperty> {
        self.0.iter()
    }

    /// Property `n` (1-indexed, as on the wire)
    pub fn slot(&self, n: usize) -> &RentalProperty {
        &self.0[n - 1]
    }
}

impl<'de> Deserialize<'de> for RentalProperties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = TextMap::deserialize(deserializer)?;
        let mut properties = <[RentalProperty; PROPERTY_SLOTS]>::default();
        for (i, property) in properties.iter_mut().enumerate() {
            let n = i + 1;
            for suffix in RentalProperty::FIELD_SUFFIXES {
                if let Some(field) = property.field_mut(suffix) {
                    *field = take_text::<D::Error>(&mut map, &format!("property{n}{suffix}"))?;
                }
            }
        }
        Ok(RentalProperties(properties))
    }
}

impl Serialize for RentalProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PROPERTY_SLOTS * 24))?;
        for (i, property) in self.0.iter().enumerate() {
            let n = i + 1;
            for (suffix, value) in property.fields() {
                map.serialize_entry(&format!("property{n}{suffix}"), value)?;
            }
        }
        map.end()
    }
}
