//! Shared UI components for the Dioxus-based web UI.

pub mod card;
pub mod chips;
pub mod layout;
pub mod nav;

pub use card::{Card, QuickAction};
pub use chips::FilterChips;
pub use layout::Layout;
pub use nav::{FooterNav, NavItem, TopNav};
