//! Layout invariants checked across arbitrary tables.

use columnize::{display_width, Align, Columnize};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 中文表格]{0,8}"
}

fn mask() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "-{1,6}",
        "-{1,6}:",
        ":-{0,6}:",
        ":-{1,6}",
    ]
}

fn table_parts() -> impl Strategy<Value = (Vec<String>, Vec<String>, Vec<Vec<String>>, bool)> {
    (
        prop::collection::vec(cell(), 0..5),
        prop::collection::vec(mask(), 0..5),
        prop::collection::vec(prop::collection::vec(cell(), 0..6), 0..6),
        any::<bool>(),
    )
}

fn build(
    headers: &[String],
    masks: &[String],
    rows: &[Vec<String>],
    show_border: bool,
) -> Columnize {
    let mut table = Columnize::with_border(show_border);
    table.set_headers(headers);
    table.set_masks(masks);
    table.set_rows(rows.to_vec());
    table
}

proptest! {
    #[test]
    fn derived_vectors_match_column_count((headers, masks, rows, border) in table_parts()) {
        let table = build(&headers, &masks, &rows, border);
        let longest_row = rows.iter().map(Vec::len).max().unwrap_or(0);

        prop_assert_eq!(table.column_widths().len(), table.column_count());
        prop_assert_eq!(table.column_aligns().len(), table.column_count());
        prop_assert_eq!(
            table.column_count(),
            headers.len().max(masks.len()).max(longest_row)
        );
    }

    #[test]
    fn column_width_covers_every_entry((headers, masks, rows, border) in table_parts()) {
        let table = build(&headers, &masks, &rows, border);
        let widths = table.column_widths();

        for (i, header) in table.headers().iter().enumerate() {
            prop_assert!(widths[i] >= display_width(header));
        }
        for (i, mask) in table.masks().iter().enumerate() {
            prop_assert!(widths[i] >= display_width(mask));
        }
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                prop_assert!(widths[i] >= display_width(cell));
            }
        }
    }

    #[test]
    fn column_width_is_exactly_the_widest_entry((headers, masks, rows, border) in table_parts()) {
        let table = build(&headers, &masks, &rows, border);

        for (i, &width) in table.column_widths().iter().enumerate() {
            let widest = table.headers().get(i).map(|s| display_width(s))
                .into_iter()
                .chain(table.masks().get(i).map(|s| display_width(s)))
                .chain(rows.iter().filter_map(|r| r.get(i)).map(|s| display_width(s)))
                .max()
                .unwrap_or(0);
            prop_assert_eq!(width, widest);
        }
    }

    #[test]
    fn alignment_comes_only_from_masks((headers, masks, rows, border) in table_parts()) {
        let table = build(&headers, &masks, &rows, border);

        for (i, &align) in table.column_aligns().iter().enumerate() {
            let expected = table.masks().get(i).map(|m| Align::from_mask(m)).unwrap_or_default();
            prop_assert_eq!(align, expected);
        }
    }

    #[test]
    fn line_count_and_terminators((headers, masks, rows, border) in table_parts()) {
        let table = build(&headers, &masks, &rows, border);
        let out = table.render();

        prop_assert!(out.ends_with('\n'));
        prop_assert_eq!(out.matches('\n').count(), 2 + rows.len());
    }

    #[test]
    fn table_width_formula((headers, masks, rows, border) in table_parts()) {
        let table = build(&headers, &masks, &rows, border);
        let chrome = if border { 3 } else { 1 };
        let expected: usize = table.column_widths().iter().map(|w| w + chrome).sum::<usize>() + 1;
        prop_assert_eq!(table.table_width(), expected);
    }

    #[test]
    fn scan_order_does_not_matter((headers, masks, rows, border) in table_parts()) {
        let forward = build(&headers, &masks, &rows, border);

        let mut backward = Columnize::with_border(border);
        backward.set_rows(rows.clone());
        backward.set_masks(&masks);
        backward.set_headers(&headers);

        prop_assert_eq!(forward.render(), backward.render());
    }

    #[test]
    fn incremental_rows_equal_bulk_rows((headers, masks, rows, border) in table_parts()) {
        let bulk = build(&headers, &masks, &rows, border);

        let mut incremental = Columnize::with_border(border);
        incremental.set_headers(&headers);
        incremental.set_masks(&masks);
        for row in &rows {
            incremental.add_row(row.clone());
        }

        prop_assert_eq!(bulk, incremental);
    }

    #[test]
    fn header_and_mask_lines_fill_every_column(
        (headers, masks, rows, _border) in table_parts()
    ) {
        // Borderless header and mask lines are exactly the columns plus one
        // separating space between each pair.
        let table = build(&headers, &masks, &rows, false);
        let count = table.column_count();
        let expected = table.column_widths().iter().sum::<usize>() + count.saturating_sub(1);

        let mut lines = table.render().lines();
        let header = lines.next().unwrap_or_default();
        let mask_line = lines.next().unwrap_or_default();
        prop_assert_eq!(display_width(header), expected);
        prop_assert_eq!(display_width(mask_line), expected);
    }
}
