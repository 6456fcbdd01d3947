use docsite_core::{
    build_table, export_csv, table_to_csv, DomHost, ManualClock, MemoryDocument, NodeId,
    ToastKind, ToastNotifier, ToastSettings, CSV_MIME_TYPE, UTF8_BOM,
};

fn read_csv(content: &str) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(content.as_bytes())
        .records()
        .map(|record| {
            record
                .expect("valid csv record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

fn table_with(document: &mut MemoryDocument, headers: &[&str], rows: &[&[&str]]) -> NodeId {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    let body = document.body();
    build_table(document, body, headers, &rows).expect("build table")
}

#[test]
fn csv_quotes_every_cell_and_escapes_quotes() {
    let mut document = MemoryDocument::new();
    let table = table_with(
        &mut document,
        &["代码", "名称"],
        &[&["00700", "腾讯 \"控股\""], &[" 00001 ", "长和"]],
    );

    let csv = table_to_csv(&document, table).expect("csv");

    assert_eq!(
        csv,
        "\"代码\",\"名称\"\n\"00700\",\"腾讯 \"\"控股\"\"\"\n\"00001\",\"长和\""
    );
}

#[test]
fn export_round_trips_trimmed_cells() {
    let mut document = MemoryDocument::new();
    let table = table_with(
        &mut document,
        &["code", "note"],
        &[&["  1 ", "a, b"], &["2", "say \"hi\""], &["3", ""]],
    );
    let mut notifier = ToastNotifier::new(ManualClock::new(0), ToastSettings::default());

    let file = export_csv(&mut document, &mut notifier, table, "list.csv", "done")
        .expect("export");

    let body = file
        .content
        .strip_prefix(UTF8_BOM)
        .expect("content starts with BOM");
    assert_eq!(
        read_csv(body),
        vec![
            vec!["code", "note"],
            vec!["1", "a, b"],
            vec!["2", "say \"hi\""],
            vec!["3", ""],
        ]
    );
}

#[test]
fn export_downloads_bom_prefixed_file_and_notifies() {
    let mut document = MemoryDocument::new();
    let table = table_with(&mut document, &["h"], &[&["v"]]);
    let mut notifier = ToastNotifier::new(ManualClock::new(0), ToastSettings::default());

    let file = export_csv(&mut document, &mut notifier, table, "short.csv", "导出成功！")
        .expect("export");

    assert_eq!(file.filename, "short.csv");
    assert_eq!(file.mime_type, CSV_MIME_TYPE);
    assert_eq!(&file.bytes()[..3], &[0xEF, 0xBB, 0xBF]);
    assert_eq!(document.downloads(), &[file]);

    let toasts: Vec<_> = notifier.toasts().collect();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].message, "导出成功！");
}

#[test]
fn empty_table_exports_bom_only() {
    let mut document = MemoryDocument::new();
    let table = document.create_element("table");
    let body = document.body();
    document.append_child(body, table).expect("attach");
    let mut notifier = ToastNotifier::new(ManualClock::new(0), ToastSettings::default());

    let file = export_csv(&mut document, &mut notifier, table, "empty.csv", "done")
        .expect("export");

    assert_eq!(file.content, UTF8_BOM.to_string());
    assert_eq!(notifier.active_count(), 1);
}
