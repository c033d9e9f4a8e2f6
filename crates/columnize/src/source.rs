//! Reading table data from CSV and JSON.
//!
//! JSON objects are flattened with dot notation (`{"a": {"b": 1}}` becomes a
//! column named `a.b`), and arrays inside objects are kept as JSON text.
//! Arrays of arrays are taken as plain rows.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use serde_json::Value;

use crate::columnize::Columnize;
use crate::error::ColumnizeError;

/// Headers and rows read from an external source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Loads the dataset into `table` with one recompute for the rows.
    ///
    /// Headers already set on `table` are kept when the dataset has none.
    pub fn into_columnize(self, mut table: Columnize) -> Columnize {
        if !self.headers.is_empty() {
            table.set_headers(&self.headers);
        }
        table.set_rows(self.rows);
        table
    }
}

/// Reads delimited text. Records may have different lengths.
///
/// With `has_headers`, the first record becomes the headers.
pub fn rows_from_csv<R: Read>(
    reader: R,
    has_headers: bool,
    delimiter: u8,
) -> Result<Dataset, ColumnizeError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers = if has_headers {
        reader.headers()?.iter().map(str::to_string).collect()
    } else {
        Vec::new()
    };

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }

    tracing::debug!(columns = headers.len(), rows = rows.len(), "read delimited input");
    Ok(Dataset { headers, rows })
}

/// Converts a JSON document into a dataset.
///
/// - An array whose items are all arrays becomes rows directly, with no headers.
/// - Otherwise each array item (or a lone object) becomes one row; headers are
///   the sorted union of flattened keys, and missing keys yield empty cells.
pub fn rows_from_json(value: &Value) -> Dataset {
    if let Value::Array(items) = value {
        if !items.is_empty() && items.iter().all(Value::is_array) {
            let rows = items
                .iter()
                .filter_map(Value::as_array)
                .map(|row| row.iter().map(cell_text).collect())
                .collect();
            return Dataset {
                headers: Vec::new(),
                rows,
            };
        }
    }

    let records: Vec<BTreeMap<String, String>> = match value {
        Value::Array(items) => items.iter().map(flatten_single_item).collect(),
        other => vec![flatten_single_item(other)],
    };

    let headers: Vec<String> = records
        .iter()
        .flat_map(|record| record.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let rows = records
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|h| record.get(h).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    Dataset { headers, rows }
}

/// Parses JSON text into a dataset.
pub fn rows_from_json_str(json: &str) -> Result<Dataset, ColumnizeError> {
    let value: Value = serde_json::from_str(json)?;
    let dataset = rows_from_json(&value);
    tracing::debug!(
        columns = dataset.headers.len(),
        rows = dataset.rows.len(),
        "read JSON input"
    );
    Ok(dataset)
}

/// Text of a scalar cell. Strings are unquoted, null is empty, and nested
/// values are written as JSON.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn flatten_single_item(value: &Value) -> BTreeMap<String, String> {
    let mut acc = BTreeMap::new();
    flatten_recursive(value, "", &mut acc);
    acc
}

fn flatten_recursive(value: &Value, prefix: &str, acc: &mut BTreeMap<String, String>) {
    let key = if prefix.is_empty() { "value" } else { prefix };
    match value {
        Value::Null => {}
        Value::Object(map) if map.is_empty() => {
            acc.insert(key.to_string(), "{}".to_string());
        }
        Value::Object(map) => {
            for (k, v) in map {
                let nested = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                flatten_recursive(v, &nested, acc);
            }
        }
        other => {
            acc.insert(key.to_string(), cell_text(other));
        }
    }
}
