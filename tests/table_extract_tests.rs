use chart_tags::core::{Cell, extract_table};

#[test]
fn numeric_cells_coerce_to_floats() {
    let table = extract_table("2020,5,3\n2021,6,4");

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][0], Cell::Number(2020.0));
    assert_eq!(table.rows[0][1], Cell::Number(5.0));
    assert_eq!(table.rows[1][2], Cell::Number(4.0));
}

#[test]
fn blank_lines_are_dropped() {
    let table = extract_table("\n2020,5\n\n   \n2021,6\n\n");

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][0], Cell::Number(2020.0));
    assert_eq!(table.rows[1][0], Cell::Number(2021.0));
}

#[test]
fn rows_are_trimmed_and_padded_cells_still_parse() {
    let table = extract_table("  2020 , 5 \n");

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0], vec![Cell::Number(2020.0), Cell::Number(5.0)]);
}

#[test]
fn non_numeric_cells_keep_their_text() {
    let table = extract_table("january,10\nfebruary,12");

    assert_eq!(table.rows[0][0].as_text(), Some("january"));
    assert_eq!(table.rows[0][1], Cell::Number(10.0));
    assert_eq!(table.rows[1][0].as_text(), Some("february"));
}

#[test]
fn coercion_is_per_cell_so_mixed_rows_are_legal() {
    let table = extract_table("q1,100,n/a");

    assert!(table.rows[0][0].as_text().is_some());
    assert_eq!(table.rows[0][1], Cell::Number(100.0));
    assert!(table.rows[0][2].as_text().is_some());
}

#[test]
fn empty_cell_becomes_missing_sentinel_not_zero() {
    let table = extract_table("2020,,3");

    let cell = &table.rows[0][1];
    assert!(cell.is_missing());
    assert_ne!(*cell, Cell::Number(0.0));
}

#[test]
fn scientific_and_negative_numbers_parse() {
    let table = extract_table("-4,1e3,0.25");

    assert_eq!(
        table.rows[0],
        vec![Cell::Number(-4.0), Cell::Number(1000.0), Cell::Number(0.25)]
    );
}

#[test]
fn irregular_row_lengths_pass_through_unchecked() {
    let table = extract_table("a,1,2\nb,3");

    assert_eq!(table.rows[0].len(), 3);
    assert_eq!(table.rows[1].len(), 2);
}

#[test]
fn commas_inside_values_split_like_delimiters() {
    // No quoting support: the markup format cannot distinguish an embedded
    // comma from a delimiter.
    let table = extract_table("\"a,b\",1");

    assert_eq!(table.rows[0].len(), 3);
    assert_eq!(table.rows[0][0].as_text(), Some("\"a"));
}

#[test]
fn empty_text_yields_empty_table() {
    assert!(extract_table("").is_empty());
    assert!(extract_table("\n\n").is_empty());
}
