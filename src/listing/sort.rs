use crate::api::Job;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Specifying the fields jobs can be sorted by.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    CreatedAt,
    Category,
}

impl SortField {
    /// All fields in menu order.
    ///
    pub const ALL: [SortField; 3] = [SortField::Name, SortField::Category, SortField::CreatedAt];

    /// Return the label shown in menus.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::CreatedAt => "Creation Date",
            SortField::Category => "Category",
        }
    }
}

/// Specifying sort direction.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Return the opposite direction.
    ///
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Return the arrow shown next to the active field.
    ///
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Sort field and direction. No field means fetch order is kept.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct SortSpec {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        SortSpec {
            field: Some(field),
            direction,
        }
    }

    /// Compare two jobs under this spec. Always Equal when no field is set.
    ///
    pub fn compare(&self, a: &Job, b: &Job) -> Ordering {
        let ordering = match self.field {
            None => Ordering::Equal,
            Some(SortField::Name) => locale_cmp(&a.name, &b.name),
            Some(SortField::CreatedAt) => created_instant(a).cmp(&created_instant(b)),
            Some(SortField::Category) => {
                locale_cmp(a.category().unwrap_or(""), b.category().unwrap_or(""))
            }
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Compare strings ignoring case and accents. Ties fall back to the
/// unaccented form first, then lower case first.
///
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let (lower_a, lower_b) = (a.to_lowercase(), b.to_lowercase());
    fold_accents(&lower_a)
        .cmp(&fold_accents(&lower_b))
        .then_with(|| lower_a.cmp(&lower_b))
        .then_with(|| b.cmp(a))
}

/// Strip combining marks after canonical decomposition.
///
fn fold_accents(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Return the creation instant of a job in milliseconds since the epoch.
/// Missing or unparsable timestamps count as the earliest instant.
///
pub fn created_instant(job: &Job) -> i64 {
    job.created_at
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or(0)
}

/// Parse the timestamp formats the search API is known to emit.
///
pub fn parse_timestamp(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}
