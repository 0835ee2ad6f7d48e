use std::path::Path;

use csv_pages::config::PageConfig;
use csv_pages::ingestion::csv::{read_csv_from_path, read_csv_from_reader, reader_builder};
use csv_pages::ingestion::{parse_csv_page, CsvPageParser, PageParser, PageRequest};
use csv_pages::types::{FilterSpec, Row};
use csv_pages::ParserError;

fn person(name: &str, age: &str, city: &str) -> Row {
    Row::new([("Name", name), ("Age", age), ("City", city)])
}

#[test]
fn read_csv_from_path_happy_path() {
    let rows = read_csv_from_path("tests/fixtures/people.csv").unwrap();

    assert_eq!(
        rows,
        vec![
            person("Alice", "25", "New York"),
            person("Bob", "30", "Los Angeles"),
            person("Charlie", "35", "Chicago"),
        ]
    );
    assert_eq!(rows[0].columns().collect::<Vec<_>>(), vec!["Name", "Age", "City"]);
}

#[test]
fn read_csv_header_only_file_is_empty() {
    assert!(read_csv_from_path("tests/fixtures/empty.csv").unwrap().is_empty());
}

#[test]
fn read_csv_missing_file_is_not_found() {
    let err = read_csv_from_path("tests/fixtures/does_not_exist.csv").unwrap_err();
    assert!(matches!(err, ParserError::NotFound { .. }));
    assert!(err.to_string().contains("does_not_exist.csv"));
}

#[test]
fn read_csv_from_reader_keeps_row_order() {
    let input = "Age\n35\n25\n31\n";
    let mut rdr = reader_builder().from_reader(input.as_bytes());

    let rows = read_csv_from_reader(&mut rdr).unwrap();
    let ages: Vec<&str> = rows.iter().filter_map(|r| r.get("Age")).collect();
    assert_eq!(ages, vec!["35", "25", "31"]);
}

#[test]
fn parse_content_path_without_config_returns_all_rows_and_empty_body() {
    let page = CsvPageParser::default()
        .parse_content_path(Path::new("tests/fixtures/people.csv"), None)
        .unwrap();

    let (rows, content) = page.into_parts();
    assert_eq!(rows.len(), 3);
    assert_eq!(content, "");
}

#[test]
fn parse_content_path_excludes_then_filters() {
    let cfg = PageConfig::new()
        .exclude("City")
        .filter(FilterSpec::greater_than("Age", 26));
    let page = parse_csv_page("tests/fixtures/people.csv", Some(&cfg)).unwrap();

    assert_eq!(
        page.rows,
        vec![
            Row::new([("Name", "Bob"), ("Age", "30")]),
            Row::new([("Name", "Charlie"), ("Age", "35")]),
        ]
    );
}

#[test]
fn parse_content_path_excluding_name_and_age_keeps_city_only() {
    let cfg = PageConfig::new().exclude("Name").exclude("Age");
    let page = parse_csv_page("tests/fixtures/people.csv", Some(&cfg)).unwrap();

    assert_eq!(page.row_count(), 3);
    assert!(page.rows.iter().all(|r| r.columns().eq(["City"])));
}

#[test]
fn parse_content_path_boundary_value_is_excluded() {
    let below = PageConfig::new().filter(FilterSpec::less_than("Age", 30));
    let above = PageConfig::new().filter(FilterSpec::greater_than("Age", 30));

    let below = parse_csv_page("tests/fixtures/people.csv", Some(&below)).unwrap();
    let above = parse_csv_page("tests/fixtures/people.csv", Some(&above)).unwrap();

    assert_eq!(below.rows, vec![person("Alice", "25", "New York")]);
    assert_eq!(above.rows, vec![person("Charlie", "35", "Chicago")]);
}

#[test]
fn parse_content_path_filter_on_non_integer_errors() {
    let cfg = PageConfig::new().filter(FilterSpec::less_than("Age", 30));
    let err = parse_csv_page("tests/fixtures/bad_age.csv", Some(&cfg)).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("column 'Age'"));
    assert!(msg.contains("raw='unknown'"));
}

#[test]
fn page_request_uses_config_loaded_from_json() {
    let cfg = PageConfig::from_json_path("tests/fixtures/people_config.json").unwrap();
    let req = PageRequest::new("tests/fixtures/people.csv", Some(cfg));

    let page = req.run(&CsvPageParser::default()).unwrap();
    assert_eq!(page.row_count(), 2);
    assert!(page.rows.iter().all(|r| !r.contains("City")));
}

#[test]
fn page_content_serializes_rows_as_objects() {
    let cfg = PageConfig::new().exclude("City").filter(FilterSpec::less_than("Age", 30));
    let page = parse_csv_page("tests/fixtures/people.csv", Some(&cfg)).unwrap();

    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"rows": [{"Name": "Alice", "Age": "25"}], "content": ""})
    );
}
