use fake::Dummy;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Tag name carrying the company that posted a job.
///
pub const COMPANY_TAG: &str = "company";

/// Tag name carrying the category a job belongs to.
///
pub const CATEGORY_TAG: &str = "category";

/// Defines a generic name/value pair attached to a job.
///
#[derive(Clone, Debug, Default, Deserialize, Dummy, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub value: Option<String>,
}

/// Defines a named requirement such as a skill, certification or task.
///
#[derive(Clone, Debug, Default, Deserialize, Dummy, PartialEq, Eq)]
pub struct NamedItem {
    pub name: String,
    #[serde(default, rename = "type", deserialize_with = "loose_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub value: Option<String>,
}

/// Defines job location data structure. Only the text is displayed.
///
#[derive(Clone, Debug, Default, Deserialize, Dummy, PartialEq)]
pub struct Location {
    #[serde(default, deserialize_with = "loose_string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "loose_number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub lng: Option<f64>,
}

/// Defines job posting data structure.
///
#[derive(Clone, Debug, Default, Deserialize, Dummy, PartialEq)]
pub struct Job {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<NamedItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub certifications: Vec<NamedItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<NamedItem>,
}

impl Job {
    /// Return the value of the first tag whose name matches case-insensitively,
    /// or None when no such tag exists or it carries no value.
    ///
    pub fn tag(&self, name: &str) -> Option<&str> {
        find_tag(&self.tags, name)
    }

    /// Return the company tag value.
    ///
    pub fn company(&self) -> Option<&str> {
        self.tag(COMPANY_TAG)
    }

    /// Return the category tag value.
    ///
    pub fn category(&self) -> Option<&str> {
        self.tag(CATEGORY_TAG)
    }

    /// Return the location text.
    ///
    pub fn location_text(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.text.as_deref())
    }
}

/// Look up a tag value by name, ignoring case. The first tag with a matching
/// name wins, even when that tag has no value.
///
pub fn find_tag<'a>(tags: &'a [Tag], name: &str) -> Option<&'a str> {
    tags.iter()
        .find(|tag| tag.name.eq_ignore_ascii_case(name))
        .and_then(|tag| tag.value.as_deref())
}

/// Defines pagination metadata returned alongside a page of jobs.
///
#[derive(Clone, Debug, Default, Deserialize, Dummy, PartialEq, Eq)]
pub struct PageMeta {
    #[serde(default)]
    pub count: u32,
    #[serde(default, rename = "maxPage")]
    pub max_page: Option<u32>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total: u64,
}

/// Defines a single fetched page of jobs.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub meta: Option<PageMeta>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept any JSON scalar and keep it as text.
///
fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
