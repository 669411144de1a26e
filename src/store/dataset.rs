//! Purpose: In-memory tabular model for loaded job listings.
//! Exports: `Record`, `Dataset`.
//! Role: Pure read-only query core; no I/O, no hidden state.
//! Invariants: Every record shares the header's field set (missing cells are "").
//! Invariants: Query results preserve source row order; datasets never mutate after construction.

use std::collections::BTreeMap;

use serde::Serialize;

/// One data row, keyed by the header's field names.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    values: BTreeMap<String, String>,
}

impl Record {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }
}

/// The full ordered collection of records plus the header that keys them.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    fields: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(fields: Vec<String>, records: Vec<Record>) -> Self {
        Self { fields, records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Header fields in source column order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct values of `field` in first-seen row order.
    ///
    /// The field is not validated against the header: an absent field reads as
    /// the empty string for every record and dedups to a single marker entry.
    pub fn unique_values(&self, field: &str) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for record in &self.records {
            let value = record.get(field).unwrap_or("");
            if !values.iter().any(|seen| seen == value) {
                values.push(value.to_string());
            }
        }
        values
    }

    /// Records whose `field` value contains `term`, case-insensitively.
    ///
    /// Records without the field never match. An empty term matches every
    /// record that has the field.
    pub fn search_field(&self, field: &str, term: &str) -> Vec<&Record> {
        let term = term.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record
                    .get(field)
                    .is_some_and(|value| value.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Records where any field value contains `term`, case-insensitively.
    ///
    /// Fields are scanned in header order; the scan short-circuits per record
    /// on the first hit.
    pub fn search_any(&self, term: &str) -> Vec<&Record> {
        let term = term.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                self.fields.iter().any(|field| {
                    record
                        .get(field)
                        .is_some_and(|value| value.to_lowercase().contains(&term))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Dataset, Record};
    use std::collections::BTreeMap;

    fn record(pairs: &[(&str, &str)]) -> Record {
        let values: BTreeMap<String, String> = pairs
            .iter()
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();
        Record::new(values)
    }

    fn sample() -> Dataset {
        let fields = vec![
            "skill".to_string(),
            "employer".to_string(),
            "location".to_string(),
            "type".to_string(),
        ];
        let records = vec![
            record(&[
                ("skill", "Java"),
                ("employer", "Acme"),
                ("location", "NYC"),
                ("type", "FT"),
            ]),
            record(&[
                ("skill", "Python"),
                ("employer", "Globex"),
                ("location", "LA"),
                ("type", "PT"),
            ]),
            record(&[
                ("skill", "Java"),
                ("employer", "Initech"),
                ("location", "NYC"),
                ("type", "FT"),
            ]),
        ];
        Dataset::new(fields, records)
    }

    #[test]
    fn unique_values_dedup_in_first_seen_order() {
        let data = sample();
        assert_eq!(data.unique_values("skill"), vec!["Java", "Python"]);
        assert_eq!(data.unique_values("location"), vec!["NYC", "LA"]);
    }

    #[test]
    fn unique_values_for_absent_field_is_single_marker() {
        let data = sample();
        assert_eq!(data.unique_values("salary"), vec![""]);
    }

    #[test]
    fn search_field_is_case_insensitive_substring() {
        let data = sample();
        let hits = data.search_field("location", "ny");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.get("location") == Some("NYC")));

        let upper = data.search_field("employer", "ACME");
        let lower = data.search_field("employer", "acme");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
    }

    #[test]
    fn search_field_empty_term_matches_every_record_with_field() {
        let data = sample();
        assert_eq!(data.search_field("skill", "").len(), data.len());
        assert!(data.search_field("salary", "").is_empty());
    }

    #[test]
    fn search_field_absent_field_never_matches() {
        let data = sample();
        assert!(data.search_field("salary", "Java").is_empty());
    }

    #[test]
    fn search_any_matches_on_any_field() {
        let data = sample();
        let hits = data.search_any("globex");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].get("employer"), Some("Globex"));

        // Term present in two different columns still yields each record once.
        let ft = data.search_any("ft");
        assert_eq!(ft.len(), 2);
    }

    #[test]
    fn search_any_no_hits_is_empty() {
        let data = sample();
        assert!(data.search_any("c++").is_empty());
    }

    #[test]
    fn results_preserve_row_order() {
        let data = sample();
        let hits = data.search_field("skill", "java");
        assert_eq!(hits[0].get("employer"), Some("Acme"));
        assert_eq!(hits[1].get("employer"), Some("Initech"));
    }

    #[test]
    fn empty_dataset_queries_are_empty() {
        let data = Dataset::empty();
        assert!(data.is_empty());
        assert!(data.unique_values("skill").is_empty());
        assert!(data.search_any("java").is_empty());
    }
}
