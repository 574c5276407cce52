#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Route rendering tests
//!
//! Drives the full page router the way a browser would: one GET per
//! registered path, asserting the page heading lands in the response body.
//!
//! Run with: cargo test --test routes

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use health_navigator::ui;

/// GET a path against a fresh router, returning status and body text.
async fn get(path: &str) -> (StatusCode, String) {
    let response = ui::router()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Every registered route and the heading its page renders.
/// Headings are asserted as SSR output, so "&" appears as "&amp;".
const ROUTE_HEADINGS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/search", "Find Providers"),
    ("/appointments", "Appointments"),
    ("/symptoms", "AI Symptom Checker"),
    ("/emergency", "Emergency &amp; Urgent Care"),
    ("/more", "More Tools"),
    ("/more/prescriptions", "Prescription Price Finder"),
    ("/more/bill-decoder", "AI Bill Decoder"),
    ("/more/wallet", "Health Wallet"),
    ("/more/mental", "Mental Health"),
    ("/more/coach", "AI Lifestyle Coach"),
    ("/more/community", "Community Q&amp;A"),
    ("/more/rewards", "Health Rewards"),
    ("/more/premium", "Premium Membership"),
];

#[tokio::test]
async fn each_registered_route_renders_its_heading() {
    for (path, heading) in ROUTE_HEADINGS {
        let (status, body) = get(path).await;
        assert_eq!(status, StatusCode::OK, "GET {path}");
        assert!(body.contains(heading), "GET {path} missing heading {heading}");
    }
}

#[tokio::test]
async fn unknown_path_renders_not_found() {
    let (status, body) = get("/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn emergency_page_lists_fixed_wait_times() {
    let (status, body) = get("/emergency").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("15 min"));
    assert!(body.contains("45 min"));
    assert!(body.contains("120+ min"));
}

#[tokio::test]
async fn more_page_links_every_feature_slug() {
    let (_, body) = get("/more").await;
    for slug in [
        "prescriptions",
        "bill-decoder",
        "wallet",
        "mental",
        "coach",
        "community",
        "rewards",
        "premium",
    ] {
        assert!(
            body.contains(&format!("href=\"/more/{slug}\"")),
            "missing /more/{slug}"
        );
    }
}

#[tokio::test]
async fn every_page_carries_the_footer_nav() {
    for (path, _) in ROUTE_HEADINGS {
        let (_, body) = get(path).await;
        for href in ["/", "/search", "/appointments", "/symptoms", "/emergency", "/more"] {
            assert!(
                body.contains(&format!("href=\"{href}\"")),
                "GET {path} missing nav link {href}"
            );
        }
    }
}

#[tokio::test]
async fn symptom_form_submits_nowhere() {
    let (_, body) = get("/symptoms").await;
    assert!(body.contains("<form"));
    assert!(!body.contains("action="), "form must not target a backend");
}

#[tokio::test]
async fn renders_are_deterministic() {
    let (_, first) = get("/").await;
    let (_, second) = get("/").await;
    assert_eq!(first, second);
}
