use docsite_core::{body_values, build_table, sort_table, DomHost, MemoryDocument, NodeId};

fn rows(values: &[&[&str]]) -> Vec<Vec<String>> {
    values
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn table_with(document: &mut MemoryDocument, values: &[&[&str]]) -> NodeId {
    let body = document.body();
    build_table(document, body, &["name", "count"], &rows(values)).expect("build table")
}

#[test]
fn numeric_column_keeps_order_when_already_ascending() {
    let mut document = MemoryDocument::new();
    let table = table_with(&mut document, &[&["b", "2"], &["a", "10"]]);

    sort_table(&mut document, table, 1, true).expect("sort");

    assert_eq!(
        body_values(&document, table).expect("values"),
        rows(&[&["b", "2"], &["a", "10"]])
    );
}

#[test]
fn text_column_sorts_by_collation() {
    let mut document = MemoryDocument::new();
    let table = table_with(&mut document, &[&["b", "2"], &["a", "10"]]);

    sort_table(&mut document, table, 0, true).expect("sort");

    assert_eq!(
        body_values(&document, table).expect("values"),
        rows(&[&["a", "10"], &["b", "2"]])
    );
}

#[test]
fn numeric_sort_orders_both_directions() {
    let mut document = MemoryDocument::new();
    let table = table_with(
        &mut document,
        &[&["w", "7"], &["x", " 100 "], &["y", "-3"], &["z", "25.5"], &["v", "7"]],
    );

    sort_table(&mut document, table, 1, true).expect("ascending");
    let ascending = body_values(&document, table).expect("values");
    let numbers: Vec<f64> = ascending
        .iter()
        .map(|row| row[1].parse::<f64>().expect("numeric cell"))
        .collect();
    assert!(numbers.windows(2).all(|pair| pair[0] <= pair[1]));

    sort_table(&mut document, table, 1, false).expect("descending");
    let descending = body_values(&document, table).expect("values");
    let numbers: Vec<f64> = descending
        .iter()
        .map(|row| row[1].parse::<f64>().expect("numeric cell"))
        .collect();
    assert!(numbers.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn resorting_with_same_parameters_is_idempotent() {
    let mut document = MemoryDocument::new();
    let table = table_with(
        &mut document,
        &[&["c", "3"], &["a", "1"], &["b", "3"], &["d", "2"]],
    );

    sort_table(&mut document, table, 1, true).expect("first sort");
    let first = body_values(&document, table).expect("values");
    sort_table(&mut document, table, 1, true).expect("second sort");
    let second = body_values(&document, table).expect("values");

    assert_eq!(first, second);
}

#[test]
fn equal_keys_keep_relative_order() {
    let mut document = MemoryDocument::new();
    let table = table_with(
        &mut document,
        &[&["first", "1"], &["second", "0"], &["third", "1"], &["fourth", "0"]],
    );

    sort_table(&mut document, table, 1, true).expect("ascending");
    assert_eq!(
        body_values(&document, table).expect("values"),
        rows(&[&["second", "0"], &["fourth", "0"], &["first", "1"], &["third", "1"]])
    );

    sort_table(&mut document, table, 1, false).expect("descending");
    assert_eq!(
        body_values(&document, table).expect("values"),
        rows(&[&["first", "1"], &["third", "1"], &["second", "0"], &["fourth", "0"]])
    );
}

#[test]
fn sort_never_changes_row_count_or_header() {
    let mut document = MemoryDocument::new();
    let table = table_with(&mut document, &[&["b", "x"], &["a", "2"], &["c", "1"]]);

    sort_table(&mut document, table, 1, true).expect("mixed sort");

    assert_eq!(body_values(&document, table).expect("values").len(), 3);
    let header = document.first_by_tag(table, "th").expect("query").expect("th");
    assert_eq!(document.text_content(header).expect("text"), "name");
}

#[test]
fn missing_column_sorts_as_empty_text() {
    let mut document = MemoryDocument::new();
    let table = table_with(&mut document, &[&["b", "2"], &["a"]]);

    sort_table(&mut document, table, 1, true).expect("sort");

    assert_eq!(
        body_values(&document, table).expect("values"),
        vec![vec!["a".to_string()], vec!["b".to_string(), "2".to_string()]]
    );
}

#[test]
fn table_without_body_is_left_alone() {
    let mut document = MemoryDocument::new();
    let table = document.create_element("table");
    let body = document.body();
    document.append_child(body, table).expect("attach");

    sort_table(&mut document, table, 0, true).expect("no-op sort");
    assert!(document.children(table).expect("children").is_empty());
}

#[test]
fn chinese_names_sort_by_pinyin() {
    let mut document = MemoryDocument::new();
    let table = table_with(
        &mut document,
        &[&["腾讯控股", "1"], &["长和", "2"], &["汇丰控股", "3"]],
    );

    sort_table(&mut document, table, 0, true).expect("ascending");
    assert_eq!(
        body_values(&document, table).expect("values"),
        rows(&[&["长和", "2"], &["汇丰控股", "3"], &["腾讯控股", "1"]])
    );

    sort_table(&mut document, table, 0, false).expect("descending");
    assert_eq!(
        body_values(&document, table).expect("values"),
        rows(&[&["腾讯控股", "1"], &["汇丰控股", "3"], &["长和", "2"]])
    );
}

#[test]
fn accented_latin_sorts_with_base_letter() {
    let mut document = MemoryDocument::new();
    let table = table_with(&mut document, &[&["f", "1"], &["é", "2"], &["e", "3"]]);

    sort_table(&mut document, table, 0, true).expect("sort");

    assert_eq!(
        body_values(&document, table).expect("values"),
        rows(&[&["e", "3"], &["é", "2"], &["f", "1"]])
    );
}
