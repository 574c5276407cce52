//! Health Navigator - consumer health app scaffold
//!
//! A server-rendered web shell with route-based navigation and placeholder
//! feature pages for a consumer health app. Every page renders fixed or
//! component-local mock data; there are no backend calls, no persistence,
//! and no auth.
//!
//! This library provides:
//! - The path -> page route table and axum handlers
//! - Dioxus page components for the six main tabs and the "More" features
//! - Shared layout, navigation, and presentational primitives

pub mod config;
pub mod ui;
