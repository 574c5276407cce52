//! Web UI handlers - the path -> page lookup table
//!
//! Each registered path renders exactly one Dioxus page component inside the
//! shared layout (header with title and top nav, footer nav). Unknown paths
//! fall through to the NotFound placeholder with a 404 status.
//!
//! All pages are static scaffolding: they render fixed or component-local
//! mock data and perform no network calls. Using Pico CSS (classless CSS
//! framework) for clean, accessible, mobile-friendly design without custom
//! CSS maintenance burden.

pub mod components;
pub mod pages;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use dioxus::prelude::*;

use pages::{
    AiBillDecoder, AiLifestyleCoach, Appointments, CommunityQa, Emergency, HealthRewards,
    HealthWallet, Home, MentalHealth, More, NotFound, Premium, PrescriptionPriceFinder, Search,
    Symptoms,
};

/// Build the full page route table.
///
/// This is the router contract: one GET route per registered page, plus a
/// fallback for everything else. `main.rs` wraps it in middleware layers;
/// tests drive it directly.
pub fn router() -> Router {
    Router::new()
        // Main tabs
        .route("/", get(home_page))
        .route("/search", get(search_page))
        .route("/appointments", get(appointments_page))
        .route("/symptoms", get(symptoms_page))
        .route("/emergency", get(emergency_page))
        .route("/more", get(more_page))
        // Feature pages reachable from More
        .route("/more/prescriptions", get(prescriptions_page))
        .route("/more/bill-decoder", get(bill_decoder_page))
        .route("/more/wallet", get(wallet_page))
        .route("/more/mental", get(mental_page))
        .route("/more/coach", get(coach_page))
        .route("/more/community", get(community_page))
        .route("/more/rewards", get(rewards_page))
        .route("/more/premium", get(premium_page))
        // Anything else
        .fallback(not_found_page)
}

/// Render a page component into a complete HTML document.
fn render_page(body: Element) -> Html<String> {
    let html = dioxus::ssr::render_element(body);
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>",
        html
    ))
}

/// GET / - Dashboard overview with quick actions
pub async fn home_page() -> impl IntoResponse {
    render_page(rsx! { Home {} })
}

/// GET /search - Provider search
pub async fn search_page() -> impl IntoResponse {
    render_page(rsx! { Search {} })
}

/// GET /appointments - Upcoming appointments
pub async fn appointments_page() -> impl IntoResponse {
    render_page(rsx! { Appointments {} })
}

/// GET /symptoms - Symptom checker form (stub)
pub async fn symptoms_page() -> impl IntoResponse {
    render_page(rsx! { Symptoms {} })
}

/// GET /emergency - ER and urgent care wait times (mock)
pub async fn emergency_page() -> impl IntoResponse {
    render_page(rsx! { Emergency {} })
}

/// GET /more - Feature directory
pub async fn more_page() -> impl IntoResponse {
    render_page(rsx! { More {} })
}

/// GET /more/prescriptions - Prescription price finder (stub)
pub async fn prescriptions_page() -> impl IntoResponse {
    render_page(rsx! { PrescriptionPriceFinder {} })
}

/// GET /more/bill-decoder - Bill decoder (stub)
pub async fn bill_decoder_page() -> impl IntoResponse {
    render_page(rsx! { AiBillDecoder {} })
}

/// GET /more/wallet - Health wallet (stub)
pub async fn wallet_page() -> impl IntoResponse {
    render_page(rsx! { HealthWallet {} })
}

/// GET /more/mental - Mental health tools (stub)
pub async fn mental_page() -> impl IntoResponse {
    render_page(rsx! { MentalHealth {} })
}

/// GET /more/coach - Lifestyle coach (stub)
pub async fn coach_page() -> impl IntoResponse {
    render_page(rsx! { AiLifestyleCoach {} })
}

/// GET /more/community - Community Q&A (stub)
pub async fn community_page() -> impl IntoResponse {
    render_page(rsx! { CommunityQa {} })
}

/// GET /more/rewards - Health rewards (stub)
pub async fn rewards_page() -> impl IntoResponse {
    render_page(rsx! { HealthRewards {} })
}

/// GET /more/premium - Premium membership (stub)
pub async fn premium_page() -> impl IntoResponse {
    render_page(rsx! { Premium {} })
}

/// Fallback - any unregistered path
pub async fn not_found_page() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, render_page(rsx! { NotFound {} }))
}
