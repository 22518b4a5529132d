//! Navigation-related state types.
//!
//! This module contains enums describing the input mode and the outcome of the
//! latest fetch.

/// Specifying the different input modes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    Browse,
    Search,
    SortMenu,
    CategoryMenu,
}

/// Specifying the state of the most recently requested fetch. Exactly one
/// applies at any time.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FetchStatus {
    Loading,
    Error,
    Success,
}

/// Entries of the sort menu.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SortMenuItem {
    Field(crate::listing::SortField),
    Reset,
}

/// Entries of the category menu.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CategoryMenuItem {
    Category(String),
    Clear,
}
