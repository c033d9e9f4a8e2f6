//! Display width measurement and padding.
//!
//! The default measurement follows the GBK convention: every character whose
//! UTF-8 encoding is three bytes long (which covers the CJK ideographs and
//! full-width punctuation) occupies two terminal columns, and every other
//! character counts as its UTF-8 length. ASCII text therefore measures as its
//! byte length.
//!
//! ```rust
//! use columnize::{display_width, pad_center, pad_left, pad_right};
//!
//! assert_eq!(display_width("hello"), 5);
//! assert_eq!(display_width("中文"), 4);
//!
//! assert_eq!(pad_left("42", 5), "   42");
//! assert_eq!(pad_right("42", 5), "42   ");
//! assert_eq!(pad_center("hi", 5), " hi  ");
//! ```

use serde::{Deserialize, Serialize};

use crate::types::Align;

/// Strategy used to measure how many terminal columns a string occupies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// Three-byte UTF-8 characters count as 2, everything else as its
    /// UTF-8 length.
    #[default]
    Gbk,
    /// Unicode East Asian width rules as implemented by `unicode-width`.
    Unicode,
}

impl Measure {
    /// Returns the display width of `s` under this strategy.
    pub fn width(self, s: &str) -> usize {
        match self {
            Measure::Gbk => s.chars().map(gbk_char_width).sum(),
            Measure::Unicode => {
                use unicode_width::UnicodeWidthChar;
                s.chars().map(|c| c.width().unwrap_or(0)).sum()
            }
        }
    }

    /// Pads `s` to `width` according to `align`, using `pad` as the fill unit.
    ///
    /// Left alignment pads on the right, right alignment pads on the left.
    pub fn align(self, s: &str, width: usize, align: Align, pad: &str) -> String {
        match align {
            Align::Left => self.pad_right(s, width, pad),
            Align::Right => self.pad_left(s, width, pad),
            Align::Center => self.pad_center(s, width, pad),
        }
    }

    /// Prepends copies of `pad` until `s` reaches `width`.
    pub fn pad_left(self, s: &str, width: usize, pad: &str) -> String {
        let count = self.fill_count(s, width, pad);
        if count == 0 {
            return s.to_string();
        }
        let mut out = pad.repeat(count);
        out.push_str(s);
        out
    }

    /// Appends copies of `pad` until `s` reaches `width`.
    pub fn pad_right(self, s: &str, width: usize, pad: &str) -> String {
        let count = self.fill_count(s, width, pad);
        if count == 0 {
            return s.to_string();
        }
        let mut out = String::with_capacity(s.len() + pad.len() * count);
        out.push_str(s);
        out.push_str(&pad.repeat(count));
        out
    }

    /// Surrounds `s` with copies of `pad`. An odd remainder goes to the right.
    pub fn pad_center(self, s: &str, width: usize, pad: &str) -> String {
        let unit = self.width(pad);
        if unit == 0 {
            return s.to_string();
        }
        let text = self.width(s);
        let left = width.saturating_sub(text) / unit / 2;
        let right = width.saturating_sub(left * unit + text) / unit;

        let mut out = String::with_capacity(s.len() + pad.len() * (left + right));
        out.push_str(&pad.repeat(left));
        out.push_str(s);
        out.push_str(&pad.repeat(right));
        out
    }

    /// Number of whole `pad` units that fit in the gap between `s` and `width`.
    /// A zero-width pad unit never fills anything.
    fn fill_count(self, s: &str, width: usize, pad: &str) -> usize {
        let unit = self.width(pad);
        if unit == 0 {
            return 0;
        }
        width.saturating_sub(self.width(s)) / unit
    }
}

fn gbk_char_width(c: char) -> usize {
    match c.len_utf8() {
        3 => 2,
        n => n,
    }
}

/// Returns the display width of a string under the GBK convention.
///
/// # Example
///
/// ```rust
/// use columnize::display_width;
///
/// assert_eq!(display_width("Alexandra"), 9);
/// assert_eq!(display_width("中文"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    Measure::Gbk.width(s)
}

/// Pads a string on the left (right-aligns) with spaces.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_left(s: &str, width: usize) -> String {
    pad_left_with(s, width, " ")
}

/// Pads a string on the right (left-aligns) with spaces.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_right_with(s, width, " ")
}

/// Centers a string with spaces; the extra space goes on the right.
pub fn pad_center(s: &str, width: usize) -> String {
    pad_center_with(s, width, " ")
}

/// Pads on the left with whole copies of `pad`.
///
/// ```rust
/// use columnize::pad_left_with;
///
/// assert_eq!(pad_left_with("7", 4, "0"), "0007");
/// // Only whole pad units are used
/// assert_eq!(pad_left_with("7", 4, "ab"), "ab7");
/// ```
pub fn pad_left_with(s: &str, width: usize, pad: &str) -> String {
    Measure::Gbk.pad_left(s, width, pad)
}

/// Pads on the right with whole copies of `pad`.
pub fn pad_right_with(s: &str, width: usize, pad: &str) -> String {
    Measure::Gbk.pad_right(s, width, pad)
}

/// Centers with whole copies of `pad`.
pub fn pad_center_with(s: &str, width: usize, pad: &str) -> String {
    Measure::Gbk.pad_center(s, width, pad)
}
