//! MiniJinja filters and functions for building tables in templates.
//!
//! ## Filters
//!
//! | Filter | Usage |
//! |--------|-------|
//! | `display_width` | `{{ value \| display_width }}` |
//! | `pad_left` | `{{ value \| pad_left(10) }}` or `{{ value \| pad_left(10, "0") }}` |
//! | `pad_right` | `{{ value \| pad_right(10) }}` |
//! | `pad_center` | `{{ value \| pad_center(10) }}` |
//!
//! ## Global Functions
//!
//! `columnize(rows, headers=?, masks=?, title=?, border=?, measure=?)` renders
//! a complete table:
//!
//! ```jinja
//! {{ columnize(items, headers=["ID", "Name"], masks=["--:"], border=false) }}
//! ```
//!
//! A pre-built [`Columnize`] can also be placed in the context with
//! `Value::from_object`; it prints as its rendered table and exposes
//! `column_count`, `table_width`, `column_widths` and `title`.

use std::fmt;
use std::sync::Arc;

use minijinja::value::{Enumerator, Kwargs, Object};
use minijinja::{Environment, Error, ErrorKind, State, Value};
use serde::Serialize;

use crate::columnize::Columnize;
use crate::error::ColumnizeError;
use crate::width::{display_width, pad_center_with, pad_left_with, pad_right_with, Measure};

/// Register the columnize filters and the `columnize` function.
///
/// # Example
///
/// ```rust
/// use minijinja::{context, Environment};
/// use columnize::template::register_columnize;
///
/// let mut env = Environment::new();
/// register_columnize(&mut env);
/// env.add_template("t", "{{ name | pad_left(6) }}|").unwrap();
/// let out = env.get_template("t").unwrap().render(context!(name => "Al")).unwrap();
/// assert_eq!(out, "    Al|");
/// ```
pub fn register_columnize(env: &mut Environment<'static>) {
    env.add_filter("display_width", |value: Value| -> usize {
        display_width(&value_text(&value))
    });

    env.add_filter(
        "pad_left",
        |value: Value, width: usize, pad: Option<String>| -> String {
            pad_left_with(&value_text(&value), width, pad.as_deref().unwrap_or(" "))
        },
    );

    env.add_filter(
        "pad_right",
        |value: Value, width: usize, pad: Option<String>| -> String {
            pad_right_with(&value_text(&value), width, pad.as_deref().unwrap_or(" "))
        },
    );

    env.add_filter(
        "pad_center",
        |value: Value, width: usize, pad: Option<String>| -> String {
            pad_center_with(&value_text(&value), width, pad.as_deref().unwrap_or(" "))
        },
    );

    // columnize(rows, headers=?, masks=?, title=?, border=?, measure=?) -> str
    env.add_function(
        "columnize",
        |rows: Value, kwargs: Kwargs| -> Result<String, Error> {
            let headers = kwargs.get::<Option<Value>>("headers")?;
            let masks = kwargs.get::<Option<Value>>("masks")?;
            let title = kwargs.get::<Option<String>>("title")?;
            let border = kwargs.get::<Option<bool>>("border")?.unwrap_or(true);
            let measure = kwargs.get::<Option<String>>("measure")?;
            kwargs.assert_all_used()?;

            let mut table = Columnize::with_border(border);
            if let Some(measure) = measure {
                table.set_measure(parse_measure(&measure)?);
            }
            if let Some(title) = title {
                table.set_title(title);
            }
            if let Some(headers) = headers {
                table.set_headers(string_list(&headers, "headers")?);
            }
            if let Some(masks) = masks {
                table.set_masks(string_list(&masks, "masks")?);
            }

            let rows = rows
                .try_iter()
                .map_err(|_| invalid("rows must be an array of arrays"))?
                .map(|row| string_list(&row, "each row"))
                .collect::<Result<Vec<_>, _>>()?;
            table.set_rows(rows);

            Ok(table.render().to_string())
        },
    );
}

/// Renders a template string with the columnize filters and function available.
pub fn render_str<S: Serialize>(template: &str, ctx: S) -> Result<String, ColumnizeError> {
    let mut env = Environment::new();
    register_columnize(&mut env);
    Ok(env.render_str(template, ctx)?)
}

fn parse_measure(name: &str) -> Result<Measure, Error> {
    match name.to_ascii_lowercase().as_str() {
        "gbk" => Ok(Measure::Gbk),
        "unicode" => Ok(Measure::Unicode),
        other => Err(invalid(format!(
            "unknown measure '{}', expected 'gbk' or 'unicode'",
            other
        ))),
    }
}

fn string_list(value: &Value, what: &str) -> Result<Vec<String>, Error> {
    Ok(value
        .try_iter()
        .map_err(|_| invalid(format!("{} must be an array", what)))?
        .map(|v| value_text(&v))
        .collect())
}

/// Cell text of a template value; none and undefined are empty.
fn value_text(value: &Value) -> String {
    if value.is_none() || value.is_undefined() {
        return String::new();
    }
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::new(ErrorKind::InvalidOperation, msg.into())
}

impl Object for Columnize {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        match key.as_str()? {
            "column_count" => Some(Value::from(self.column_count())),
            "table_width" => Some(Value::from(self.table_width())),
            "column_widths" => Some(Value::from(self.column_widths().to_vec())),
            "title" => Some(self.title().map(Value::from).unwrap_or(Value::from(()))),
            _ => None,
        }
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Str(&["column_count", "table_width", "column_widths", "title"])
    }

    fn call_method(
        self: &Arc<Self>,
        _state: &State,
        name: &str,
        args: &[Value],
    ) -> Result<Value, Error> {
        match name {
            "render" => {
                if !args.is_empty() {
                    return Err(Error::new(
                        ErrorKind::TooManyArguments,
                        "render() takes no arguments",
                    ));
                }
                Ok(Value::from(Columnize::render(self)))
            }
            _ => Err(Error::new(
                ErrorKind::UnknownMethod,
                format!("Columnize has no method '{}'", name),
            )),
        }
    }

    fn render(self: &Arc<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Columnize::render(self))
    }
}
