//! The `Columnize` table renderer.
//!
//! A `Columnize` accumulates a title, column headers, column masks and rows.
//! Every mutation recomputes the column layout and re-renders the table, so
//! [`Columnize::render`] is always a cheap borrow of the latest output.
//!
//! # Masks
//!
//! Each column may carry a mask token. The mask is printed on the separator
//! line under the headers, takes part in the column width, and selects the
//! column alignment:
//!
//! | Mask | Alignment |
//! |------|-----------|
//! | `-----:` | right |
//! | `:---:` | center |
//! | anything else | left |
//!
//! # Example
//!
//! ```rust
//! use columnize::Columnize;
//!
//! let mut table = Columnize::new();
//! table.set_headers(["ID", "Name"]);
//! table.add_row(["1", "Al"]);
//! table.add_row(["2", "Bob"]);
//!
//! assert_eq!(
//!     table.render(),
//!     "| ID | Name|\n\
//!      | -- | ----|\n\
//!      | 1  | Al  |\n\
//!      | 2  | Bob |\n"
//! );
//! ```

use std::fmt;

use crate::types::Align;
use crate::width::Measure;

const PAD: &str = " ";

/// A text table that re-renders itself on every change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Columnize {
    title: Option<String>,
    headers: Vec<String>,
    masks: Vec<String>,
    rows: Vec<Vec<String>>,
    show_border: bool,
    measure: Measure,
    layout: Layout,
    rendered: String,
}

/// Column geometry derived from the current contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Layout {
    widths: Vec<usize>,
    aligns: Vec<Align>,
    table_width: usize,
}

impl Layout {
    /// Grows the column at `index` to at least `width`, discovering any
    /// missing columns up to it as left-aligned.
    fn widen(&mut self, index: usize, width: usize) {
        while self.widths.len() <= index {
            self.widths.push(0);
            self.aligns.push(Align::Left);
        }
        if self.widths[index] < width {
            self.widths[index] = width;
        }
    }
}

impl Default for Columnize {
    fn default() -> Self {
        Self::new()
    }
}

impl Columnize {
    /// Creates an empty table with borders.
    pub fn new() -> Self {
        Self::with_border(true)
    }

    /// Creates an empty table without borders.
    pub fn borderless() -> Self {
        Self::with_border(false)
    }

    /// Creates an empty table with the given border setting.
    pub fn with_border(show_border: bool) -> Self {
        let mut table = Columnize {
            title: None,
            headers: Vec::new(),
            masks: Vec::new(),
            rows: Vec::new(),
            show_border,
            measure: Measure::default(),
            layout: Layout::default(),
            rendered: String::new(),
        };
        table.recompute();
        table
    }

    /// Sets the title shown above the headers. Surrounding whitespace is
    /// trimmed; a blank title removes the title block.
    pub fn set_title(&mut self, title: impl AsRef<str>) -> &mut Self {
        let title = title.as_ref().trim();
        self.title = (!title.is_empty()).then(|| title.to_string());
        self.recompute();
        self
    }

    /// Sets the column headers, trimming each one.
    pub fn set_headers<S, I>(&mut self, headers: I) -> &mut Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        self.headers = headers
            .into_iter()
            .map(|h| h.as_ref().trim().to_string())
            .collect();
        self.recompute();
        self
    }

    /// Sets the column masks, trimming each one.
    pub fn set_masks<S, I>(&mut self, masks: I) -> &mut Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        self.masks = masks
            .into_iter()
            .map(|m| m.as_ref().trim().to_string())
            .collect();
        self.recompute();
        self
    }

    /// Replaces all rows. Rows may have different lengths.
    pub fn set_rows<R, S, I>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows = rows.into_iter().map(collect_row).collect();
        self.recompute();
        self
    }

    /// Appends a single row.
    ///
    /// The whole layout is recomputed on each call; use [`set_rows`] or
    /// [`extend_rows`] when loading many rows at once.
    ///
    /// [`set_rows`]: Columnize::set_rows
    /// [`extend_rows`]: Columnize::extend_rows
    pub fn add_row<S, I>(&mut self, row: I) -> &mut Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        self.rows.push(collect_row(row));
        self.recompute();
        self
    }

    /// Appends several rows with a single recompute.
    pub fn extend_rows<R, S, I>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.extend(rows.into_iter().map(collect_row));
        self.recompute();
        self
    }

    /// Removes all rows, keeping title, headers and masks.
    pub fn clear_rows(&mut self) -> &mut Self {
        self.rows.clear();
        self.recompute();
        self
    }

    /// Turns the `|` borders on or off.
    pub fn set_show_border(&mut self, show_border: bool) -> &mut Self {
        self.show_border = show_border;
        self.recompute();
        self
    }

    /// Changes how display widths are measured.
    pub fn set_measure(&mut self, measure: Measure) -> &mut Self {
        self.measure = measure;
        self.recompute();
        self
    }

    /// The rendered table. Every line, including the last, ends with `\n`.
    pub fn render(&self) -> &str {
        &self.rendered
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn masks(&self) -> &[String] {
        &self.masks
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn show_border(&self) -> bool {
        self.show_border
    }

    pub fn measure(&self) -> Measure {
        self.measure
    }

    /// Width of each column: the widest of its mask, header and cells.
    pub fn column_widths(&self) -> &[usize] {
        &self.layout.widths
    }

    /// Alignment of each column, as selected by its mask.
    pub fn column_aligns(&self) -> &[Align] {
        &self.layout.aligns
    }

    /// Number of columns across masks, headers and the longest row.
    pub fn column_count(&self) -> usize {
        self.layout.widths.len()
    }

    /// Total width of the table including border and padding characters.
    pub fn table_width(&self) -> usize {
        self.layout.table_width
    }

    fn recompute(&mut self) {
        let layout = self.compute_layout();
        self.rendered = self.compose(&layout);
        self.layout = layout;

        tracing::trace!(
            columns = self.layout.widths.len(),
            rows = self.rows.len(),
            table_width = self.layout.table_width,
            "recomputed table layout"
        );
    }

    fn compute_layout(&self) -> Layout {
        let measure = self.measure;
        let mut layout = Layout::default();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                layout.widen(i, measure.width(cell));
            }
        }
        for (i, mask) in self.masks.iter().enumerate() {
            layout.widen(i, measure.width(mask));
            layout.aligns[i] = Align::from_mask(mask);
        }
        for (i, header) in self.headers.iter().enumerate() {
            layout.widen(i, measure.width(header));
        }

        let chrome = if self.show_border { 3 } else { 1 };
        layout.table_width = layout.widths.iter().map(|w| w + chrome).sum::<usize>() + 1;

        if let Some(title) = &self.title {
            let title_width = measure.width(title);
            if layout.widths.is_empty() {
                layout.table_width = title_width + if self.show_border { 4 } else { 2 };
            } else if layout.table_width < title_width {
                layout.table_width = title_width + 2;
            }
        }

        layout
    }

    fn compose(&self, layout: &Layout) -> String {
        let measure = self.measure;
        let mut out = String::new();

        if let Some(title) = &self.title {
            let inner = layout.table_width.saturating_sub(2);
            self.push_framed(&mut out, &measure.pad_center(title, inner, PAD));
            self.push_framed(&mut out, &"-".repeat(inner));
        }

        let header_cells = layout.widths.iter().enumerate().map(|(i, &width)| {
            match self.headers.get(i) {
                Some(header) => measure.align(header, width, layout.aligns[i], PAD),
                None => PAD.repeat(width),
            }
        });
        self.push_line(&mut out, header_cells);

        let mask_cells = layout.widths.iter().enumerate().map(|(i, &width)| {
            match self.masks.get(i) {
                Some(mask) => measure.pad_center(mask, width, PAD),
                None => "-".repeat(width),
            }
        });
        self.push_line(&mut out, mask_cells);

        // Short rows render only the cells they have.
        for row in &self.rows {
            let cells = row.iter().enumerate().map(|(i, cell)| {
                let width = layout.widths.get(i).copied().unwrap_or(0);
                let align = layout.aligns.get(i).copied().unwrap_or_default();
                measure.align(cell, width, align, PAD)
            });
            self.push_line(&mut out, cells);
        }

        out
    }

    fn push_line<I>(&self, out: &mut String, cells: I)
    where
        I: IntoIterator<Item = String>,
    {
        for (i, cell) in cells.into_iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            if self.show_border {
                out.push_str("| ");
            }
            out.push_str(&cell);
        }
        if self.show_border {
            out.push('|');
        }
        out.push('\n');
    }

    fn push_framed(&self, out: &mut String, content: &str) {
        if self.show_border {
            out.push('|');
        }
        out.push_str(content);
        if self.show_border {
            out.push('|');
        }
        out.push('\n');
    }
}

fn collect_row<S, R>(row: R) -> Vec<String>
where
    R: IntoIterator<Item = S>,
    S: Into<String>,
{
    row.into_iter().map(Into::into).collect()
}

impl fmt::Display for Columnize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(show_border: bool) -> Columnize {
        let mut table = Columnize::with_border(show_border);
        table.set_headers(["ID", "Name"]);
        table.add_row(["1", "Al"]);
        table.add_row(["2", "Bob"]);
        table
    }

    #[test]
    fn bordered_table() {
        let table = users(true);
        assert_eq!(
            table.render(),
            "| ID | Name|\n| -- | ----|\n| 1  | Al  |\n| 2  | Bob |\n"
        );
        assert_eq!(table.column_widths(), &[2, 4]);
        assert_eq!(table.table_width(), 13);
    }

    #[test]
    fn borderless_table() {
        let table = users(false);
        assert_eq!(table.render(), "ID Name\n-- ----\n1  Al  \n2  Bob \n");
        assert_eq!(table.table_width(), 9);
        assert!(!table.render().contains('|'));
    }

    #[test]
    fn toggling_border_re_renders() {
        let mut table = users(true);
        table.set_show_border(false);
        assert_eq!(table.render(), users(false).render());
        assert_eq!(table.table_width(), 9);
    }

    #[test]
    fn width_comes_from_widest_entry() {
        let mut table = Columnize::new();
        table.set_headers(["Name"]);
        table.add_row(["Al"]);
        table.add_row(["Alexandra"]);
        assert_eq!(table.column_widths(), &[9]);
    }

    #[test]
    fn header_wider_than_rows() {
        let mut table = Columnize::borderless();
        table.set_rows([["a"], ["bb"]]);
        table.set_headers(["Header"]);
        assert_eq!(table.column_widths(), &[6]);
        assert_eq!(table.render(), "Header\n------\na     \nbb    \n");
    }

    #[test]
    fn cjk_cells_are_double_width() {
        let mut table = Columnize::borderless();
        table.set_headers(["名字"]);
        table.add_row(["中文"]);
        table.add_row(["a"]);
        assert_eq!(table.column_widths(), &[4]);
        assert_eq!(table.render(), "名字\n----\n中文\na   \n");
    }

    #[test]
    fn right_mask_right_aligns_every_line() {
        let mut table = Columnize::borderless();
        table.set_headers(["N"]);
        table.set_masks(["right:"]);
        table.set_rows([["1"], ["22"]]);
        assert_eq!(table.column_aligns(), &[Align::Right]);
        assert_eq!(table.render(), "     N\nright:\n     1\n    22\n");
    }

    #[test]
    fn center_mask_centers_cells() {
        let mut table = Columnize::borderless();
        table.set_masks([":center:"]);
        table.add_row(["ab"]);
        assert_eq!(table.column_aligns(), &[Align::Center]);
        assert_eq!(table.render(), "        \n:center:\n   ab   \n");
    }

    #[test]
    fn missing_mask_defaults_to_left() {
        let mut table = Columnize::borderless();
        table.set_masks(["--:"]);
        table.set_headers(["A", "B"]);
        table.add_row(["x", "y"]);
        assert_eq!(table.column_aligns(), &[Align::Right, Align::Left]);
        assert_eq!(table.render(), "  A B\n--: -\n  x y\n");
    }

    #[test]
    fn empty_mask_is_left_aligned() {
        let mut table = Columnize::borderless();
        table.set_masks(["", "  "]);
        table.add_row(["ab", "c"]);
        assert_eq!(table.column_aligns(), &[Align::Left, Align::Left]);
        assert_eq!(table.masks(), &["".to_string(), "".to_string()]);
        assert_eq!(table.render(), "    \n    \nab c\n");
    }

    #[test]
    fn mask_forces_minimum_width() {
        let mut table = Columnize::borderless();
        table.set_masks(["------"]);
        table.add_row(["x"]);
        assert_eq!(table.column_widths(), &[6]);
        assert_eq!(table.render(), "      \n------\nx     \n");
    }

    #[test]
    fn masks_longer_than_headers() {
        let mut table = Columnize::borderless();
        table.set_masks(["--", "---:"]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.render(), "       \n-- ---:\n");
    }

    #[test]
    fn rows_wider_than_headers_add_columns() {
        let mut table = Columnize::borderless();
        table.set_headers(["A"]);
        table.add_row(["1", "2"]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.render(), "A  \n- -\n1 2\n");
    }

    #[test]
    fn short_rows_render_only_their_cells() {
        let mut table = Columnize::new();
        table.set_headers(["A", "B", "C"]);
        table.add_row(["x"]);
        assert_eq!(
            table.render(),
            "| A | B | C|\n| - | - | -|\n| x|\n"
        );
    }

    #[test]
    fn title_centered_over_table() {
        let mut table = users(true);
        table.set_title("Users");
        assert_eq!(
            table.render(),
            "|   Users   |\n|-----------|\n| ID | Name|\n| -- | ----|\n| 1  | Al  |\n| 2  | Bob |\n"
        );
    }

    #[test]
    fn title_without_columns() {
        let mut table = Columnize::new();
        table.set_title("Report");
        assert_eq!(table.table_width(), 10);
        assert_eq!(table.render(), "| Report |\n|--------|\n|\n|\n");

        table.set_show_border(false);
        assert_eq!(table.table_width(), 8);
        assert_eq!(table.render(), "Report\n------\n\n\n");
    }

    #[test]
    fn title_wider_than_columns_widens_table() {
        let mut table = Columnize::borderless();
        table.set_headers(["a"]);
        table.set_title("A long title");
        assert_eq!(table.table_width(), 14);
        assert_eq!(table.render(), "A long title\n------------\na\n-\n");
    }

    #[test]
    fn title_is_trimmed_and_blank_title_removed() {
        let mut table = Columnize::borderless();
        table.set_title("  T  ");
        assert_eq!(table.title(), Some("T"));
        table.set_title("   ");
        assert_eq!(table.title(), None);
        assert_eq!(table.render(), "\n\n");
    }

    #[test]
    fn headers_trimmed_cells_kept() {
        let mut table = Columnize::borderless();
        table.set_headers(["  ID "]);
        table.add_row([" x "]);
        assert_eq!(table.headers(), &["ID".to_string()]);
        assert_eq!(table.column_widths(), &[3]);
    }

    #[test]
    fn empty_table() {
        let table = Columnize::new();
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.table_width(), 1);
        assert_eq!(table.render(), "|\n|\n");
        assert_eq!(Columnize::borderless().render(), "\n\n");
    }

    #[test]
    fn render_is_idempotent() {
        let table = users(true);
        assert_eq!(table.render(), table.render());
        assert_eq!(table.to_string(), table.render());
    }

    #[test]
    fn extend_rows_matches_add_row() {
        let mut bulk = Columnize::new();
        bulk.set_headers(["ID", "Name"]);
        bulk.extend_rows([["1", "Al"], ["2", "Bob"]]);
        assert_eq!(bulk, users(true));
    }

    #[test]
    fn clear_rows_shrinks_layout() {
        let mut table = users(false);
        table.add_row(["3", "Maximilian"]);
        assert_eq!(table.column_widths(), &[2, 10]);
        table.clear_rows();
        assert_eq!(table.column_widths(), &[2, 4]);
        assert_eq!(table.render(), "ID Name\n-- ----\n");
    }

    #[test]
    fn unicode_measure_changes_widths() {
        let mut table = Columnize::borderless();
        table.add_row(["café"]);
        assert_eq!(table.column_widths(), &[5]);
        table.set_measure(Measure::Unicode);
        assert_eq!(table.column_widths(), &[4]);
        assert_eq!(table.measure(), Measure::Unicode);
    }

    #[test]
    fn chained_setters() {
        let mut table = Columnize::borderless();
        table
            .set_headers(["k", "v"])
            .add_row(["a", "1"])
            .set_masks(["-", ":"]);
        assert_eq!(table.render(), "k v\n- :\na 1\n");
    }
}
