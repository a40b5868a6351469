//! # Feature Catalog
//!
//! The `web-features` dataset, deserialized into typed entries.
//!
//! ```text
//! Catalog
//! └── features: BTreeMap<key, FeatureEntry>
//!     ├── Feature(FeatureData)       // kind = "feature"
//!     │   └── status: Status         // baseline tier, dates, per-browser support
//!     ├── Moved { redirect_target }  // kind = "moved"
//!     └── Split { redirect_targets } // kind = "split"
//! ```
//!
//! A snapshot of the dataset is compiled into the binary. A full `data.json`
//! from the npm package can be loaded at runtime with `Catalog::from_path`.
//!
//! Keys live in a `BTreeMap`, so every listing derived from the catalog comes
//! out in a stable, sorted order.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Dataset snapshot shipped with the binary.
const BUNDLED_DATA: &str = include_str!("../../data/web-features.json");

/// Prefix marking a date as "on or before".
const APPROXIMATE_PREFIX: char = '≤';

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "feature data I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "feature data parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Baseline Status
// ============================================================================

/// Baseline tier of a feature. The dataset encodes this as `"high"`, `"low"`
/// or the literal `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// Widely available.
    High,
    /// Newly available.
    Low,
    /// Not yet Baseline.
    Limited,
}

impl fmt::Display for Baseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Baseline::High => "high",
            Baseline::Low => "low",
            Baseline::Limited => "false",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Baseline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Tier(String),
            Flag(bool),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Tier(tier) if tier == "high" => Ok(Baseline::High),
            Raw::Tier(tier) if tier == "low" => Ok(Baseline::Low),
            Raw::Tier(other) => Err(D::Error::custom(format!(
                "unknown baseline status `{other}`"
            ))),
            Raw::Flag(false) => Ok(Baseline::Limited),
            Raw::Flag(true) => Err(D::Error::custom("baseline status cannot be `true`")),
        }
    }
}

/// A Baseline date such as `2023-03-14`, or `≤2020-01-29` when the exact
/// date is unknown and only an upper bound is recorded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BaselineDate {
    pub date: NaiveDate,
    pub approximate: bool,
    raw: String,
}

impl BaselineDate {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// The date exactly as it appears in the dataset.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for BaselineDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (approximate, bare) = match trimmed.strip_prefix(APPROXIMATE_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let date = NaiveDate::parse_from_str(bare, "%Y-%m-%d")?;
        Ok(Self {
            date,
            approximate,
            raw: trimmed.to_string(),
        })
    }
}

impl fmt::Display for BaselineDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Deserializes an optional date, dropping values that do not parse.
fn lenient_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BaselineDate>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match s.parse() {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("Ignoring unparsable baseline date {:?}: {}", s, e);
            None
        }
    }))
}

/// Accepts either `"value"` or `["value", ...]`.
fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
        None => Vec::new(),
    })
}

#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub baseline: Baseline,
    #[serde(default, deserialize_with = "lenient_date")]
    pub baseline_low_date: Option<BaselineDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub baseline_high_date: Option<BaselineDate>,
    /// Browser ID → first supporting version.
    #[serde(default)]
    pub support: BTreeMap<String, String>,
    #[serde(default)]
    pub by_compat_key: BTreeMap<String, Status>,
}

// ============================================================================
// Entries
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Discouraged {
    #[serde(default, deserialize_with = "string_list")]
    pub according_to: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "string_list")]
    pub spec: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub group: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub snapshot: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub caniuse: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub compat_features: Vec<String>,
    pub discouraged: Option<Discouraged>,
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeatureEntry {
    Feature(FeatureData),
    Moved {
        redirect_target: String,
    },
    Split {
        #[serde(deserialize_with = "string_list")]
        redirect_targets: Vec<String>,
    },
}

impl FeatureEntry {
    /// The `kind` tag as written in the dataset.
    pub fn kind(&self) -> &'static str {
        match self {
            FeatureEntry::Feature(_) => "feature",
            FeatureEntry::Moved { .. } => "moved",
            FeatureEntry::Split { .. } => "split",
        }
    }

    pub fn as_feature(&self) -> Option<&FeatureData> {
        match self {
            FeatureEntry::Feature(data) => Some(data),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<&Status> {
        self.as_feature().and_then(|data| data.status.as_ref())
    }

    /// Label used in lists: the feature name, or the key for redirects and
    /// unnamed features.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        match self.as_feature() {
            Some(data) if !data.name.is_empty() => &data.name,
            _ => key,
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    features: BTreeMap<String, FeatureEntry>,
}

impl Catalog {
    /// The snapshot compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUNDLED_DATA)?;
        info!("Loaded bundled feature data ({} entries)", catalog.len());
        Ok(catalog)
    }

    /// Load a `data.json` produced by the `web-features` package.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_json(&contents)?;
        info!(
            "Loaded feature data from {} ({} entries)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Parse either the full package document (`{"features": {...}, ...}`)
    /// or a bare map of feature key → entry.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        let features = match value {
            Value::Object(mut document) if matches!(document.get("features"), Some(Value::Object(_))) => {
                document.remove("features").unwrap_or_default()
            }
            other => other,
        };
        let features = serde_json::from_value(features).map_err(CatalogError::Parse)?;
        Ok(Self { features })
    }

    pub fn get(&self, key: &str) -> Option<&FeatureEntry> {
        self.features.get(key)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// All entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureEntry)> {
        self.features.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Only entries of kind `feature`, in key order.
    pub fn features(&self) -> impl Iterator<Item = (&str, &FeatureData)> {
        self.iter()
            .filter_map(|(key, entry)| entry.as_feature().map(|data| (key, data)))
    }
}
