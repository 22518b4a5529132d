//! Persisted user preferences.
//!
//! Holds the sort field, sort direction and selected categories. Each slot is
//! loaded once from storage and written through on every change. Stored values
//! are JSON-encoded; anything unparsable falls back to the default.

mod error;
mod storage;

pub use error::PreferenceError;
pub use storage::{FileStorage, MemoryStorage, Storage};

use crate::listing::{SortDirection, SortField, SortSpec};
use log::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const SORT_FIELD_KEY: &str = "sortCriteria";
pub const SORT_DIRECTION_KEY: &str = "sortOrder";
pub const CATEGORIES_KEY: &str = "selectedCategories";

/// Houses the persisted sort and category filter preferences.
///
pub struct Preferences {
    storage: Box<dyn Storage>,
    sort_field: Option<SortField>,
    sort_direction: SortDirection,
    categories: Vec<String>,
}

impl Preferences {
    /// Initialize every slot from storage, substituting defaults for values
    /// that are absent or malformed.
    ///
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let sort_field = read_slot::<Option<SortField>>(storage.as_ref(), SORT_FIELD_KEY)
            .flatten();
        let sort_direction =
            read_slot::<Option<SortDirection>>(storage.as_ref(), SORT_DIRECTION_KEY)
                .flatten()
                .unwrap_or_default();
        let categories = read_slot::<Vec<String>>(storage.as_ref(), CATEGORIES_KEY)
            .map(normalize_categories)
            .unwrap_or_default();
        debug!(
            "Loaded preferences: sort {:?} {:?}, {} categories",
            sort_field,
            sort_direction,
            categories.len()
        );
        Preferences {
            storage,
            sort_field,
            sort_direction,
            categories,
        }
    }

    /// Return the current sort specification.
    ///
    pub fn sort_spec(&self) -> SortSpec {
        SortSpec {
            field: self.sort_field,
            direction: self.sort_direction,
        }
    }

    /// Return the selected category labels.
    ///
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Return true if the category is selected.
    ///
    pub fn is_category_selected(&self, category: &str) -> bool {
        self.categories.contains(&category.to_uppercase())
    }

    /// Set the sort field.
    ///
    pub fn set_sort_field(&mut self, field: Option<SortField>) -> Result<(), PreferenceError> {
        self.sort_field = field;
        write_slot(self.storage.as_mut(), SORT_FIELD_KEY, &self.sort_field)
    }

    /// Set the sort direction.
    ///
    pub fn set_sort_direction(&mut self, direction: SortDirection) -> Result<(), PreferenceError> {
        self.sort_direction = direction;
        write_slot(self.storage.as_mut(), SORT_DIRECTION_KEY, &self.sort_direction)
    }

    /// Replace the selected categories.
    ///
    pub fn set_categories(&mut self, categories: Vec<String>) -> Result<(), PreferenceError> {
        self.categories = normalize_categories(categories);
        write_slot(self.storage.as_mut(), CATEGORIES_KEY, &self.categories)
    }

    /// Select the category if unselected, otherwise deselect it.
    ///
    pub fn toggle_category(&mut self, category: &str) -> Result<(), PreferenceError> {
        let category = category.to_uppercase();
        let mut categories = self.categories.clone();
        if let Some(index) = categories.iter().position(|c| *c == category) {
            categories.remove(index);
        } else {
            categories.push(category);
        }
        self.set_categories(categories)
    }

    /// Deselect every category.
    ///
    pub fn clear_categories(&mut self) -> Result<(), PreferenceError> {
        self.set_categories(vec![])
    }

    /// Choose a sort field. Choosing the active field flips the direction,
    /// choosing another one starts ascending.
    ///
    pub fn select_sort_field(&mut self, field: SortField) -> Result<(), PreferenceError> {
        if self.sort_field == Some(field) {
            self.set_sort_direction(self.sort_direction.toggled())
        } else {
            self.set_sort_field(Some(field))?;
            self.set_sort_direction(SortDirection::Asc)
        }
    }

    /// Clear the sort field and return to ascending.
    ///
    pub fn reset_sort(&mut self) -> Result<(), PreferenceError> {
        self.set_sort_field(None)?;
        self.set_sort_direction(SortDirection::Asc)
    }
}

fn read_slot<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring malformed preference '{}': {}", key, e);
            None
        }
    }
}

fn write_slot<T: Serialize>(
    storage: &mut dyn Storage,
    key: &str,
    value: &T,
) -> Result<(), PreferenceError> {
    let encoded = serde_json::to_string(value).map_err(|e| PreferenceError::EncodeFailed {
        key: key.to_owned(),
        message: e.to_string(),
    })?;
    storage.set(key, encoded)
}

fn normalize_categories(categories: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(categories.len());
    for category in categories {
        let category = category.to_uppercase();
        if !normalized.contains(&category) {
            normalized.push(category);
        }
    }
    normalized
}
