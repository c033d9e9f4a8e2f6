//! Table settings loaded from YAML or JSON.
//!
//! A config file describes the parts of a table that do not depend on the
//! data: the title, headers, masks, border and width measurement.
//!
//! ```yaml
//! title: Inventory
//! headers: [SKU, Item, Qty]
//! masks: ["---", ":----:", "--:"]
//! border: false
//! measure: unicode
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::columnize::Columnize;
use crate::error::ColumnizeError;
use crate::width::Measure;

/// Settings for building a [`Columnize`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub masks: Vec<String>,
    pub border: bool,
    pub measure: Measure,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            title: None,
            headers: Vec::new(),
            masks: Vec::new(),
            border: true,
            measure: Measure::default(),
        }
    }
}

impl TableConfig {
    /// Parses a config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ColumnizeError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ColumnizeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a config file. `.json` files are read as JSON, everything else
    /// as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ColumnizeError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ColumnizeError::io(path, e))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };
        tracing::debug!(path = %path.display(), ?config, "loaded table config");
        Ok(config)
    }

    /// Serializes the config as YAML.
    pub fn to_yaml(&self) -> Result<String, ColumnizeError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Builds an empty table carrying these settings.
    pub fn build(&self) -> Columnize {
        let mut table = Columnize::with_border(self.border);
        table.set_measure(self.measure);
        if let Some(title) = &self.title {
            table.set_title(title);
        }
        table.set_headers(&self.headers).set_masks(&self.masks);
        table
    }
}
