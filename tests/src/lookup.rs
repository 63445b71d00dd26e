#![cfg(test)]
use std::time::Duration;

use ouilookup_common::config::Config;
use ouilookup_common::error::LookupError;
use ouilookup_common::vendors::{Vendor, VendorRepository};
use ouilookup_core::vendors::MacLookupApi;

use crate::support::{closed_port_url, serve_once, serve_silence};

fn api(base_url: String) -> MacLookupApi {
    let cfg: Config = Config {
        api_url: base_url,
        timeout: Some(Duration::from_secs(5)),
        ..Config::default()
    };
    MacLookupApi::new(&cfg).unwrap()
}

#[tokio::test]
async fn ok_response_yields_company() {
    let (base_url, server) = serve_once("200 OK", r#"{"success":true,"found":true,"company":"Acme"}"#).await;

    let result = api(base_url).lookup("aa:bb:cc:dd:ee:ff").await.unwrap();

    assert_eq!(result.mac, "aa:bb:cc:dd:ee:ff");
    assert_eq!(result.vendor, Vendor::Company("Acme".into()));
    assert_eq!(result.vendor.to_string(), "Acme");
    assert_eq!(server.await.unwrap(), "GET /v2/macs/aa:bb:cc:dd:ee:ff HTTP/1.1");
}

#[tokio::test]
async fn mac_is_not_rewritten_in_the_url() {
    let (base_url, server) = serve_once("404 Not Found", "{}").await;

    api(base_url).lookup("AA-BB-CC").await.unwrap();

    assert_eq!(server.await.unwrap(), "GET /v2/macs/AA-BB-CC HTTP/1.1");
}

#[tokio::test]
async fn ok_response_without_company_is_not_found() {
    let (base_url, _server) = serve_once("200 OK", r#"{"success":true,"found":false}"#).await;

    let result = api(base_url).lookup("aa:bb:cc").await.unwrap();

    assert_eq!(result.vendor, Vendor::NotFound);
}

#[tokio::test]
async fn ok_response_with_null_company_is_not_found() {
    let (base_url, _server) = serve_once("200 OK", r#"{"success":true,"found":false,"company":null}"#).await;

    let result = api(base_url).lookup("aa:bb:cc").await.unwrap();

    assert_eq!(result.vendor, Vendor::NotFound);
    assert_eq!(result.vendor.to_string(), "Not found");
}

#[tokio::test]
async fn ok_response_with_empty_company_is_kept() {
    let (base_url, _server) = serve_once("200 OK", r#"{"success":true,"found":false,"company":""}"#).await;

    let result = api(base_url).lookup("aa:bb:cc").await.unwrap();

    assert_eq!(result.vendor, Vendor::Company(String::new()));
}

#[tokio::test]
async fn not_found_status() {
    let (base_url, _server) = serve_once("404 Not Found", r#"{"error":"not found"}"#).await;

    let result = api(base_url).lookup("aa:bb:cc:dd:ee:ff").await.unwrap();

    assert_eq!(result.vendor.to_string(), "Not found");
}

#[tokio::test]
async fn server_error_status() {
    let (base_url, _server) = serve_once("500 Internal Server Error", "{}").await;

    let result = api(base_url).lookup("aa:bb:cc:dd:ee:ff").await.unwrap();

    assert_eq!(result.vendor, Vendor::UnexpectedStatus(500));
    assert_eq!(result.vendor.to_string(), "Error: 500");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (base_url, _server) = serve_once("200 OK", "<html>rate limited</html>").await;

    let err = api(base_url).lookup("aa:bb:cc:dd:ee:ff").await.unwrap_err();

    assert!(matches!(err, LookupError::Decode(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let err = api(closed_port_url()).lookup("aa:bb:cc:dd:ee:ff").await.unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn configured_timeout_is_honoured() {
    let base_url = serve_silence(Duration::from_secs(10)).await;
    let cfg: Config = Config {
        api_url: base_url,
        timeout: Some(Duration::from_millis(200)),
        ..Config::default()
    };

    let err = MacLookupApi::new(&cfg)
        .unwrap()
        .lookup("aa:bb:cc:dd:ee:ff")
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)), "unexpected error: {err:?}");
}
