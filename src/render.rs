//! Purpose: Render records and value listings for console output.
//! Exports: `record_blocks`, `value_list`, `NO_RESULTS`.
//! Role: Small, pure formatters used by the shell and one-shot commands.
//! Invariants: With color disabled, output is plain text with stable layout.
//! Invariants: ANSI escapes appear only when explicitly enabled.

use jobsift::store::Record;

pub(crate) const NO_RESULTS: &str = "No Results";

const BORDER: &str = "*****";

// Conservative 8/16-color palette for broad terminal compatibility.
// Avoid bright variants that can lose contrast on themes like Solarized.
const COLOR_FIELD: &str = "36";
const COLOR_HEADING: &str = "33";

/// One bordered `field: value` block per record, fields in header order.
/// An empty result set renders as the `No Results` message.
pub(crate) fn record_blocks(fields: &[String], records: &[&Record], use_color: bool) -> String {
    if records.is_empty() {
        return NO_RESULTS.to_string();
    }
    let blocks: Vec<String> = records
        .iter()
        .map(|record| record_block(fields, record, use_color))
        .collect();
    blocks.join("\n\n")
}

fn record_block(fields: &[String], record: &Record, use_color: bool) -> String {
    let mut out = String::new();
    out.push_str(BORDER);
    out.push('\n');
    for field in fields {
        out.push_str(&paint(field, COLOR_FIELD, use_color));
        out.push_str(": ");
        out.push_str(record.get(field).unwrap_or(""));
        out.push('\n');
    }
    out.push_str(BORDER);
    out
}

/// Heading plus one value per line.
pub(crate) fn value_list(field: &str, values: &[String], use_color: bool) -> String {
    let heading = paint(&format!("*** All {field} Values ***"), COLOR_HEADING, use_color);
    let mut out = heading;
    for value in values {
        out.push('\n');
        out.push_str(value);
    }
    out
}

fn paint(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("\u{1b}[{code}m{text}\u{1b}[0m")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{NO_RESULTS, record_blocks, value_list};
    use jobsift::store::Record;
    use std::collections::BTreeMap;

    fn record(pairs: &[(&str, &str)]) -> Record {
        let values: BTreeMap<String, String> = pairs
            .iter()
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();
        Record::new(values)
    }

    #[test]
    fn record_blocks_render_fields_in_header_order() {
        let fields = vec!["skill".to_string(), "employer".to_string()];
        let first = record(&[("skill", "Java"), ("employer", "Acme")]);
        let rows = vec![&first];
        let text = record_blocks(&fields, &rows, false);
        assert_eq!(text, "*****\nskill: Java\nemployer: Acme\n*****");
    }

    #[test]
    fn record_blocks_separate_records_with_blank_line() {
        let fields = vec!["skill".to_string()];
        let first = record(&[("skill", "Java")]);
        let second = record(&[("skill", "Python")]);
        let rows = vec![&first, &second];
        let text = record_blocks(&fields, &rows, false);
        assert_eq!(text.matches("*****").count(), 4);
        assert!(text.contains("*****\n\n*****"));
    }

    #[test]
    fn empty_result_set_renders_no_results() {
        let fields = vec!["skill".to_string()];
        assert_eq!(record_blocks(&fields, &[], false), NO_RESULTS);
    }

    #[test]
    fn missing_field_renders_as_empty_value() {
        let fields = vec!["skill".to_string(), "salary".to_string()];
        let only = record(&[("skill", "Java")]);
        let rows = vec![&only];
        let text = record_blocks(&fields, &rows, false);
        assert!(text.contains("salary: \n"));
    }

    #[test]
    fn value_list_has_heading_and_one_value_per_line() {
        let values = vec!["Java".to_string(), "Python".to_string()];
        let text = value_list("skill", &values, false);
        assert_eq!(text, "*** All skill Values ***\nJava\nPython");
    }

    #[test]
    fn color_is_opt_in() {
        let fields = vec!["skill".to_string()];
        let only = record(&[("skill", "Java")]);
        let rows = vec![&only];
        assert!(!record_blocks(&fields, &rows, false).contains('\u{1b}'));
        assert!(record_blocks(&fields, &rows, true).contains('\u{1b}'));
    }
}
