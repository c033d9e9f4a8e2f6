//! Column alignment and mask token parsing.

use serde::{Deserialize, Serialize};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides).
    Center,
}

impl Align {
    /// Reads the alignment encoded in a mask token.
    ///
    /// A trailing `:` selects right alignment, a leading and trailing `:`
    /// selects center alignment. Anything else, including an empty token,
    /// is left-aligned.
    ///
    /// ```rust
    /// use columnize::Align;
    ///
    /// assert_eq!(Align::from_mask("------:"), Align::Right);
    /// assert_eq!(Align::from_mask(":----:"), Align::Center);
    /// assert_eq!(Align::from_mask(":-----"), Align::Left);
    /// assert_eq!(Align::from_mask(""), Align::Left);
    /// ```
    pub fn from_mask(mask: &str) -> Self {
        if !mask.ends_with(':') {
            return Align::Left;
        }
        if mask.starts_with(':') {
            Align::Center
        } else {
            Align::Right
        }
    }
}
