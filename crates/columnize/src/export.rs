//! Structured export of a table's contents and layout.

use serde::Serialize;

use crate::columnize::Columnize;
use crate::error::ColumnizeError;
use crate::types::Align;
use crate::width::Measure;

/// A serializable view of a [`Columnize`]: its inputs and computed layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableSnapshot<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    pub headers: &'a [String],
    pub masks: &'a [String],
    pub rows: &'a [Vec<String>],
    pub show_border: bool,
    pub measure: Measure,
    pub column_widths: &'a [usize],
    pub column_aligns: &'a [Align],
    pub table_width: usize,
}

impl Columnize {
    /// Borrows the table's contents and layout for serialization.
    pub fn snapshot(&self) -> TableSnapshot<'_> {
        TableSnapshot {
            title: self.title(),
            headers: self.headers(),
            masks: self.masks(),
            rows: self.rows(),
            show_border: self.show_border(),
            measure: self.measure(),
            column_widths: self.column_widths(),
            column_aligns: self.column_aligns(),
            table_width: self.table_width(),
        }
    }

    /// Pretty-printed JSON of [`Columnize::snapshot`].
    pub fn to_json(&self) -> Result<String, ColumnizeError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// YAML of [`Columnize::snapshot`].
    pub fn to_yaml(&self) -> Result<String, ColumnizeError> {
        Ok(serde_yaml::to_string(&self.snapshot())?)
    }

    /// Writes the headers (when set) and rows as CSV. Ragged rows are kept
    /// as they are; title and masks are not part of the output.
    pub fn to_csv(&self) -> Result<String, ColumnizeError> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());

        if !self.headers().is_empty() {
            writer.write_record(self.headers())?;
        }
        for row in self.rows() {
            writer.write_record(row)?;
        }

        let bytes = writer.into_inner()?;
        String::from_utf8(bytes).map_err(|_| ColumnizeError::Decode { encoding: "UTF-8" })
    }
}
