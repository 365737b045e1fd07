use crate::prelude::{println, *};
use colored::Colorize;
use serde_json::Value;

/// Text shown in a table cell: strings as-is, everything else as compact JSON
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Key/value rows for one record.
///
/// With `keys`, rows follow that order and skip absent keys; otherwise every
/// field is listed. Non-object records become a single `value` row.
pub fn record_rows(record: &Value, keys: Option<&[&str]>) -> Vec<(String, String)> {
    let Some(object) = record.as_object() else {
        return vec![("value".to_string(), cell_text(record))];
    };

    match keys {
        Some(keys) => keys
            .iter()
            .filter_map(|key| object.get(*key).map(|v| (key.to_string(), cell_text(v))))
            .collect(),
        None => object
            .iter()
            .map(|(key, value)| (key.clone(), cell_text(value)))
            .collect(),
    }
}

/// Print records as pretty JSON or as one table per record
pub fn print_records(records: &[Value], json: bool, keys: Option<&[&str]>) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", "No records returned.".bright_black());
        return Ok(());
    }

    for record in records {
        let mut table = new_table();
        for (key, value) in record_rows(record, keys) {
            table.add_row(prettytable::row![key.bold().cyan(), value]);
        }
        table.printstd();
        println!();
    }

    Ok(())
}
