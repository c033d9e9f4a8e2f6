//! # Columnize - Text Tables for Mixed Latin/CJK Output
//!
//! `columnize` renders rows of strings as aligned text tables, measuring
//! double-width (CJK) characters as two columns so tables line up in a
//! terminal or a log file.
//!
//! ## Core Concepts
//!
//! - [`Columnize`]: Mutable table that recomputes its layout on every change
//! - Masks: Per-column tokens such as `"--:"` that pick alignment and a minimum width
//! - [`Measure`]: How display width is counted (GBK convention or Unicode width)
//! - [`TableConfig`]: Title, headers, masks and border loaded from YAML/JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use columnize::Columnize;
//!
//! let mut table = Columnize::borderless();
//! table.set_headers(["Item", "Qty"]);
//! table.set_masks(["", "--:"]);
//! table.add_row(["bolt", "12"]);
//! table.add_row(["螺母", "7"]);
//!
//! assert_eq!(
//!     table.render(),
//!     "Item Qty\n     --:\nbolt  12\n螺母   7\n"
//! );
//! ```
//!
//! ## Loading Data
//!
//! ```rust
//! use columnize::{rows_from_csv, Columnize};
//!
//! let data = "ID,Name\n1,Al\n2,Bob\n";
//! let table = rows_from_csv(data.as_bytes(), true, b',')
//!     .unwrap()
//!     .into_columnize(Columnize::new());
//! assert_eq!(table.column_widths(), &[2, 4]);
//! ```
//!
//! ## Templates
//!
//! [`template::register_columnize`] adds `display_width` and padding filters
//! plus a `columnize(...)` function to a MiniJinja environment.

mod columnize;
mod config;
mod error;
mod export;
pub mod gbk;
mod source;
pub mod template;
mod types;
mod width;

pub use columnize::Columnize;
pub use config::TableConfig;
pub use error::ColumnizeError;
pub use export::TableSnapshot;
pub use source::{rows_from_csv, rows_from_json, rows_from_json_str, Dataset};
pub use types::Align;
pub use width::{
    display_width, pad_center, pad_center_with, pad_left, pad_left_with, pad_right,
    pad_right_with, Measure,
};
