//! Publication data as fetched from the JSON source
//!
//! The document is `{ "years": [ { "year": 2024, "items": [ { "title": ..., ... } ] } ] }`.
//! Parsing is lenient where a hand edited file is likely to be sloppy: missing or null
//! arrays are empty (a `years` value that is not an array at all counts as no groups), a
//! null title is empty, `year` may be a number or a numeric string, and empty optional
//! strings count as absent.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

static NON_SLUG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static HYPHENS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// All publications, grouped by year in source order
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PublicationSet {
    #[serde(default, deserialize_with = "year_groups")]
    pub years: Vec<YearGroup>,
}

impl PublicationSet {
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct YearGroup {
    #[serde(default)]
    pub year: Year,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Publication>,
}

/// A group's year: a numeric sort key plus the label shown in headers and paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Year {
    key: Option<i64>,
    label: String,
}

impl Year {
    pub fn new(year: i64) -> Self {
        Self {
            key: Some(year),
            label: year.to_string(),
        }
    }

    /// Numeric value used for ordering, `None` when the source value was not numeric
    pub fn key(&self) -> Option<i64> {
        self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl From<i64> for Year {
    fn from(year: i64) -> Self {
        Year::new(year)
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let year = match value {
            Value::Number(number) => {
                let key = number
                    .as_i64()
                    .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f as i64));
                Year {
                    key,
                    label: number.to_string(),
                }
            }
            Value::String(text) => Year {
                key: text.trim().parse().ok(),
                label: text,
            },
            Value::Null => Year::default(),
            other => Year {
                key: None,
                label: other.to_string(),
            },
        };
        Ok(year)
    }
}

/// One publication entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Publication {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub pdf: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub md: Option<String>,
}

impl Publication {
    pub fn authors(&self) -> Option<&str> {
        non_empty(&self.authors)
    }

    pub fn venue(&self) -> Option<&str> {
        non_empty(&self.venue)
    }

    pub fn pdf(&self) -> Option<&str> {
        non_empty(&self.pdf)
    }

    pub fn code(&self) -> Option<&str> {
        non_empty(&self.code)
    }

    /// Location of the markdown detail file.
    ///
    /// An explicit `md` wins; otherwise the path is derived as `<base>/<year>/<slug>.md`.
    pub fn detail_path(&self, year: &Year, base: &str) -> String {
        if let Some(md) = non_empty(&self.md) {
            return md.to_string();
        }
        let base = base.trim_end_matches('/');
        let slug = slugify(&self.title);
        match year.label() {
            "" => format!("{base}/{slug}.md"),
            label => format!("{base}/{label}/{slug}.md"),
        }
    }
}

/// Anything but an array means "no groups"; the groups themselves are still strict.
fn year_groups<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<YearGroup>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(groups) => groups
            .into_iter()
            .map(|group| YearGroup::deserialize(group).map_err(D::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

/// Derive a filename-safe identifier from a title.
///
/// Lowercase, drop anything outside `[a-z0-9]`, whitespace and `-`, then turn whitespace
/// runs into single hyphens and collapse repeated hyphens.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept = NON_SLUG_RE.replace_all(&lower, "");
    let hyphenated = WHITESPACE_RE.replace_all(kept.trim(), "-");
    HYPHENS_RE.replace_all(&hyphenated, "-").into_owned()
}
