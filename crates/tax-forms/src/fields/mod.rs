//! Template field mapping
//!
//! Each schedule has a static table pairing the template's widget key with
//! an accessor on the record. Keys are the raw `/T` tokens exactly as they
//! appear in the template (hex-encoded UTF-16BE with a byte-order mark) and
//! are matched byte for byte.

mod schedule_c;
mod schedule_e;

pub use schedule_c::SCHEDULE_C_FIELDS;
pub use schedule_e::SCHEDULE_E_FIELDS;

/// Widget key paired with the accessor producing its value
pub type FieldTable<T> = &'static [(&'static str, fn(&T) -> String)];

/// Ordered template field key → value pairs for one record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMapping {
    entries: Vec<(&'static str, String)>,
}

impl FieldMapping {
    /// Evaluate every accessor of `table` against `form`, keeping table order
    pub fn from_table<T>(table: FieldTable<T>, form: &T) -> Self {
        let entries = table
            .iter()
            .map(|(key, accessor)| (*key, accessor(form)))
            .collect();
        Self { entries }
    }

    /// Value for a widget key, if the key is mapped
    ///
    /// Empty values are returned as-is; skipping them is the writer's job.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Entries whose value would actually be written
    pub fn non_empty(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.iter().filter(|(_, v)| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScheduleC, ScheduleE};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    /// Decode a `<FEFF...>` token back to the field name it spells
    fn decode_key(token: &str) -> String {
        let hex = token
            .strip_prefix("<FEFF")
            .and_then(|s| s.strip_suffix('>'))
            .expect("hex token with BOM");
        assert_eq!(hex.len() % 4, 0, "token {token}");
        (0..hex.len())
            .step_by(4)
            .map(|i| {
                let unit = u16::from_str_radix(&hex[i..i + 4], 16).expect("hex digit");
                char::from_u32(unit as u32).expect("BMP char")
            })
            .collect()
    }

    fn assert_well_formed<T>(table: FieldTable<T>) {
        let mut seen = HashSet::new();
        for (key, _) in table {
            let name = decode_key(key);
            assert!(name.ends_with("[0]"), "{name}");
            assert!(name.starts_with("f1_") || name.starts_with("f2_"), "{name}");
            assert!(seen.insert(*key), "duplicate key {name}");
        }
    }

    #[test]
    fn test_schedule_c_table_shape() {
        assert_eq!(SCHEDULE_C_FIELDS.len(), 63);
        assert_well_formed(SCHEDULE_C_FIELDS);
        assert_eq!(decode_key(SCHEDULE_C_FIELDS[0].0), "f1_1[0]");
        assert_eq!(decode_key(SCHEDULE_C_FIELDS[62].0), "f2_33[0]");
    }

    #[test]
    fn test_schedule_e_table_shape() {
        assert_eq!(SCHEDULE_E_FIELDS.len(), 62);
        assert_well_formed(SCHEDULE_E_FIELDS);
        assert_eq!(decode_key(SCHEDULE_E_FIELDS[61].0), "f1_65[0]");
    }

    #[test]
    fn test_schedule_c_mapping_values() {
        let form = ScheduleC {
            name: "Jane Doe".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "78701".to_string(),
            gross_receipts: "1000".to_string(),
            ..Default::default()
        };
        let mapping = form_mapping_c(&form);

        assert_eq!(mapping.iter().count(), 63);
        assert_eq!(mapping.get("<FEFF00660031005F0031005B0030005D>"), Some("Jane Doe"));
        assert_eq!(
            mapping.get("<FEFF00660031005F0037005B0030005D>"),
            Some("Austin, TX 78701")
        );
        assert_eq!(
            mapping.get("<FEFF00660031005F00310030005B0030005D>"),
            Some("1000")
        );
        // Mapped but blank
        assert_eq!(mapping.get("<FEFF00660031005F0032005B0030005D>"), Some(""));
        assert_eq!(mapping.get("(f1_1[0])"), None);
    }

    #[test]
    fn test_schedule_c_other_expenses() {
        let mut form = ScheduleC::default();
        form.other_expenses.0[0].description = "Postage".to_string();
        form.other_expenses.0[0].amount = "25".to_string();
        form.other_expenses.0[9].description = "Dues".to_string();
        form.other_expenses.0[9].amount = "40".to_string();
        let mapping = form_mapping_c(&form);

        assert_eq!(
            mapping.get("<FEFF00660032005F00310035005B0030005D>"),
            Some("Postage")
        );
        assert_eq!(
            mapping.get("<FEFF00660032005F00310036005B0030005D>"),
            Some("25")
        );
        assert_eq!(
            mapping.get("<FEFF00660032005F00330033005B0030005D>"),
            Some("Dues")
        );
        // The tenth amount has no slot
        assert!(mapping.iter().all(|(_, v)| v != "40"));
    }

    #[test]
    fn test_schedule_e_mapping_values() {
        let mut form = ScheduleE::default();
        form.name = "Pat".to_string();
        form.properties.0[0].address = "1 Main St".to_string();
        form.properties.0[0].city = "Springfield".to_string();
        form.properties.0[1].rental_income = "900".to_string();
        form.properties.0[2].depreciation = "300".to_string();
        form.properties.0[2].other_income = "77".to_string();

        let mapping = FieldMapping::from_table(SCHEDULE_E_FIELDS, &form);
        let filled: Vec<_> = mapping
            .non_empty()
            .map(|(k, v)| (decode_key(k), v.to_string()))
            .collect();

        assert_eq!(
            filled,
            vec![
                ("f1_1[0]".to_string(), "Pat".to_string()),
                ("f1_3[0]".to_string(), "1 Main St, Springfield".to_string()),
                ("f1_19[0]".to_string(), "900".to_string()),
                ("f1_65[0]".to_string(), "300".to_string()),
            ]
        );
    }

    fn form_mapping_c(form: &ScheduleC) -> FieldMapping {
        FieldMapping::from_table(SCHEDULE_C_FIELDS, form)
    }
}
