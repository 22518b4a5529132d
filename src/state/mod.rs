//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - Navigation types (Mode, FetchStatus, menu entries)
//! - Page tracking
//! - State error handling

mod error;
mod navigation;
mod pagination;

pub use error::StateError;
pub use navigation::{CategoryMenuItem, FetchStatus, Mode, SortMenuItem};
pub use pagination::{Pagination, VISIBLE_PAGE_COUNT};

// State struct, methods and Default impl are in state_impl.rs
mod state_impl;

pub use state_impl::State;
