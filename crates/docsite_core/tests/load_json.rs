use docsite_core::{
    load_json, load_json_as, FetchResponse, Fetcher, LoadError, NetworkError, ShortSellList,
};
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;

#[derive(Default)]
struct StubFetcher {
    routes: HashMap<String, Result<FetchResponse, NetworkError>>,
    requests: RefCell<Vec<String>>,
}

impl StubFetcher {
    fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert(url.to_string(), Ok(FetchResponse::new(status, body)));
        self
    }

    fn fail(mut self, url: &str, message: &str) -> Self {
        self.routes
            .insert(url.to_string(), Err(NetworkError(message.to_string())));
        self
    }
}

impl Fetcher for StubFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, NetworkError> {
        self.requests.borrow_mut().push(url.to_string());
        self.routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| Ok(FetchResponse::new(404, "not found")))
    }
}

#[test]
fn ok_response_resolves_to_parsed_value() {
    let fetcher = StubFetcher::default().respond("data/a.json", 200, r#"{"a":1}"#);

    let value = load_json(&fetcher, "data/a.json").expect("load should succeed");

    assert_eq!(value, json!({"a": 1}));
    assert_eq!(*fetcher.requests.borrow(), vec!["data/a.json".to_string()]);
}

#[test]
fn not_found_fails_with_status() {
    let fetcher = StubFetcher::default();

    let err = load_json(&fetcher, "data/missing.json").expect_err("404 should fail");

    assert!(matches!(
        err,
        LoadError::HttpStatus { status: 404, ref url } if url == "data/missing.json"
    ));
    assert!(err.to_string().contains("HTTP error! status: 404"));
    assert!(err.source().is_none());
}

#[test]
fn server_error_body_is_never_decoded() {
    let fetcher = StubFetcher::default().respond("data/a.json", 500, r#"{"a":1}"#);

    let err = load_json(&fetcher, "data/a.json").expect_err("500 should fail");

    assert!(matches!(err, LoadError::HttpStatus { status: 500, .. }));
}

#[test]
fn network_failure_is_reported_with_url() {
    let fetcher = StubFetcher::default().fail("data/a.json", "connection refused");

    let err = load_json(&fetcher, "data/a.json").expect_err("network error should fail");

    assert!(matches!(err, LoadError::Network { .. }));
    assert_eq!(err.url(), "data/a.json");
    assert_eq!(
        err.source().map(|source| source.to_string()),
        Some("connection refused".to_string())
    );
}

#[test]
fn malformed_body_is_a_decode_error() {
    let fetcher = StubFetcher::default().respond("data/a.json", 200, "<html>oops</html>");

    let err = load_json(&fetcher, "data/a.json").expect_err("decode should fail");

    assert!(matches!(err, LoadError::Decode { .. }));
    assert!(err.source().is_some());
}

#[test]
fn typed_load_decodes_current_list() {
    let body = r#"{
        "date": "2026-01-07",
        "total": 2,
        "stocks": [
            {"code": "00700", "name": "腾讯控股", "currency": "HKD"},
            {"code": "80700", "name": "腾讯控股-R"}
        ]
    }"#;
    let fetcher = StubFetcher::default().respond("data/current.json", 200, body);

    let list: ShortSellList =
        load_json_as(&fetcher, "data/current.json").expect("typed load should succeed");

    assert_eq!(list.total, 2);
    assert_eq!(
        list.table_rows(),
        vec![
            vec!["00700", "腾讯控股", "HKD"],
            vec!["80700", "腾讯控股-R", "Unknown"],
        ]
    );
}

#[test]
fn typed_load_rejects_wrong_shape() {
    let fetcher = StubFetcher::default().respond("data/current.json", 200, r#"{"a":1}"#);

    let err = load_json_as::<ShortSellList>(&fetcher, "data/current.json")
        .expect_err("shape mismatch should fail");

    assert!(matches!(err, LoadError::Decode { .. }));
}
