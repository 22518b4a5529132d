//! Terminal dashboard for browsing job board listings.
//!
//! Jobs are fetched a page at a time from the job search API, then searched,
//! sorted and filtered by category locally. Sort and category choices persist
//! between sessions.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod listing;
pub mod logger;
pub mod preferences;
pub mod state;
pub mod ui;
