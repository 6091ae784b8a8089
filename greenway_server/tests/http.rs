//! Integration tests for the HTTP surface.
//!
//! Uses axum-test to exercise the router without binding a socket.

use axum::http::{StatusCode, header};
use axum_test::TestServer;
use futures::future::join_all;
use greenway_server::server::{AppState, HealthResponse, RETRY_AFTER_SECS, create_router};
use greenway_site::{Route, SiteConfigStore, SiteConfiguration, status_label};
use serde_json::Value;
use std::future::IntoFuture;

fn server_with(config: SiteConfiguration) -> TestServer {
    let state = AppState::new(SiteConfigStore::new(config));
    TestServer::new(create_router(state)).expect("test server")
}

fn online() -> TestServer {
    server_with(SiteConfiguration::new(false))
}

fn in_maintenance() -> TestServer {
    server_with(SiteConfiguration::new(true))
}

// =============================================================================
// HOME PAGE
// =============================================================================

#[tokio::test]
async fn home_online_serves_content() {
    let response = online().get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Our Services"));
    assert!(!body.contains("under maintenance"));
}

#[tokio::test]
async fn home_in_maintenance_serves_placeholder_with_503() {
    let response = in_maintenance().get("/").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.header(header::RETRY_AFTER), RETRY_AFTER_SECS);
    let body = response.text();
    assert!(body.contains("under maintenance"));
    assert!(!body.contains("Our Services"));
    assert!(body.contains("class=\"nav\""));
    assert!(body.contains("class=\"footer\""));
}

#[tokio::test]
async fn home_aliases_share_the_gate() {
    let server = in_maintenance();
    for path in ["/index.html", "/index"] {
        server
            .get(path)
            .await
            .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }
}

// =============================================================================
// UNGATED PAGES
// =============================================================================

#[tokio::test]
async fn ungated_pages_are_served_in_both_modes() {
    for server in [online(), in_maintenance()] {
        for (path, marker) in [
            ("/contact", "Contact Us"),
            ("/privacy", "Privacy Policy"),
            ("/terms", "Terms of Service"),
            ("/sitemap", "Sitemap"),
            ("/contact/", "Contact Us"),
            ("/terms.html", "Terms of Service"),
        ] {
            let response = server.get(path).await;
            response.assert_status_ok();
            let body = response.text();
            assert!(body.contains(marker), "{path} missing {marker}");
            assert!(!body.contains("under maintenance"), "{path} gated");
        }
    }
}

#[tokio::test]
async fn only_gated_routes_answer_503() {
    let server = in_maintenance();
    for route in Route::ALL {
        let response = server.get(route.path()).await;
        if route.is_gated() {
            response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        } else {
            response.assert_status_ok();
            assert!(!response.headers().contains_key(header::RETRY_AFTER));
        }
    }
}

#[tokio::test]
async fn unknown_path_is_404_page() {
    let response = online().get("/gallery").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page not found"));
}

#[tokio::test]
async fn non_get_is_rejected() {
    let response = online().post("/contact").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// MACHINE ENDPOINTS
// =============================================================================

#[tokio::test]
async fn status_matches_reporter() {
    for flag in [true, false] {
        let config = SiteConfiguration::new(flag);
        let expected = status_label(&config);
        let response = server_with(config).get("/status").await;

        response.assert_status_ok();
        let json: Value = response.json();
        assert_eq!(json["status"], expected);
        assert_eq!(json["maintenance_mode"], flag);
    }
}

#[tokio::test]
async fn health_reports_version() {
    let response = in_maintenance().get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn sitemap_xml_uses_base_url() {
    let mut config = SiteConfiguration::new(false);
    config.base_url = "https://greenway-landscaping.com".into();
    let response = server_with(config).get("/sitemap.xml").await;

    response.assert_status_ok();
    assert!(
        response
            .header(header::CONTENT_TYPE)
            .to_str()
            .expect("ascii header")
            .starts_with("application/xml")
    );
    assert!(
        response
            .text()
            .contains("<loc>https://greenway-landscaping.com/contact</loc>")
    );
}

// =============================================================================
// CONCURRENCY
// =============================================================================

#[tokio::test]
async fn concurrent_home_requests_agree() {
    let server = in_maintenance();
    let responses = join_all((0..16).map(|_| server.get("/").into_future())).await;

    let first = responses[0].text();
    for response in &responses {
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.text(), first);
    }
}
