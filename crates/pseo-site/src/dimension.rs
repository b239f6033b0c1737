//! Dimension registry.
//!
//! The dimension document declares the site's base URL, the dimensions with
//! their ordered values, which dimensions get single-value pages, and which
//! dimension pairs are cross-produced into combination pages:
//!
//! ```json
//! {
//!   "baseUrl": "https://factcheck.example.com",
//!   "dimensions": [
//!     { "name": "topic", "values": ["health", "politics"] },
//!     { "name": "claimType", "values": ["viral-posts"] }
//!   ],
//!   "singleDimensionPages": ["topic"],
//!   "combinations": [["topic", "claimType"]]
//! }
//! ```
//!
//! [`DimensionRegistry::new`] validates the document; the registry is
//! read-only afterwards.

use std::collections::HashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::label::SLUG_SEPARATOR;
use crate::language::Language;

/// Dimension configuration error.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Dimension document could not be read.
    #[error("Failed to read dimension document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Dimension document is not valid JSON for the expected shape.
    #[error("Invalid dimension document: {0}")]
    Parse(#[from] serde_json::Error),
    /// Base URL missing or not http(s).
    #[error("baseUrl must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
    /// Dimension declared without values.
    #[error("Dimension '{0}' has no values")]
    EmptyDimension(String),
    /// Dimension name declared twice.
    #[error("Dimension '{0}' is declared more than once")]
    DuplicateDimension(String),
    /// Value repeated within one dimension.
    #[error("Dimension '{dimension}' lists value '{value}' more than once")]
    DuplicateValue { dimension: String, value: String },
    /// Value that cannot be used as a URL slug.
    #[error(
        "Dimension '{dimension}' has invalid value '{value}': \
         values must be non-empty and contain only ASCII letters, digits and '-'"
    )]
    InvalidValue { dimension: String, value: String },
    /// Reference to a dimension that was never declared.
    #[error("{context} references unknown dimension '{name}'")]
    UnknownDimension { name: String, context: String },
    /// Combination pairing a dimension with itself.
    #[error("Combination pairs dimension '{0}' with itself")]
    SelfCombination(String),
    /// Language value without a display name.
    #[error("Unrecognized language code '{0}'")]
    UnknownLanguage(String),
}

/// Dimensions with content templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DimensionKind {
    Topic,
    ClaimType,
    Source,
    Language,
}

impl DimensionKind {
    /// Resolve a dimension name. Names outside the supported set have no templates.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "topic" => Some(Self::Topic),
            "claimType" => Some(Self::ClaimType),
            "source" => Some(Self::Source),
            "language" => Some(Self::Language),
            _ => None,
        }
    }

    /// Dimension name as written in the dimension document.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::ClaimType => "claimType",
            Self::Source => "source",
            Self::Language => "language",
        }
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named axis of variation with ordered values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub values: Vec<String>,
}

impl Dimension {
    /// Template kind for this dimension, if supported.
    #[must_use]
    pub fn kind(&self) -> Option<DimensionKind> {
        DimensionKind::from_name(&self.name)
    }
}

/// Pair of dimensions declared as combinable, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationSpec {
    pub first: String,
    pub second: String,
}

impl fmt::Display for CombinationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SLUG_SEPARATOR}{}", self.first, self.second)
    }
}

/// Dimension document as parsed from JSON.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionDocument {
    #[serde(default)]
    pub base_url: String,
    pub dimensions: Vec<Dimension>,
    #[serde(default)]
    pub single_dimension_pages: Vec<String>,
    #[serde(default)]
    pub combinations: Vec<(String, String)>,
}

impl DimensionDocument {
    /// Read and parse a dimension document.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a dimension document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Validated, read-only dimension configuration.
#[derive(Debug)]
pub struct DimensionRegistry {
    base_url: String,
    dimensions: Vec<Dimension>,
    single_dimension_pages: Vec<String>,
    combinations: Vec<CombinationSpec>,
}

impl DimensionRegistry {
    /// Validate a dimension document into a registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] for a bad base URL, empty or duplicated
    /// dimensions, duplicated or non-slug values, unknown language codes, and
    /// references to undeclared dimensions.
    pub fn new(document: DimensionDocument) -> Result<Self, RegistryError> {
        let base_url = document.base_url.trim_end_matches('/').to_owned();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(RegistryError::InvalidBaseUrl(document.base_url));
        }

        let mut names = HashSet::new();
        for dimension in &document.dimensions {
            if !names.insert(dimension.name.as_str()) {
                return Err(RegistryError::DuplicateDimension(dimension.name.clone()));
            }
            validate_values(dimension)?;
        }

        let require = |name: &str, context: &str| {
            if names.contains(name) {
                Ok(())
            } else {
                Err(RegistryError::UnknownDimension {
                    name: name.to_owned(),
                    context: context.to_owned(),
                })
            }
        };

        for name in &document.single_dimension_pages {
            require(name, "singleDimensionPages")?;
        }

        let mut combinations = Vec::with_capacity(document.combinations.len());
        for (first, second) in document.combinations {
            let context = format!("Combination [{first}, {second}]");
            require(&first, &context)?;
            require(&second, &context)?;
            if first == second {
                return Err(RegistryError::SelfCombination(first));
            }
            combinations.push(CombinationSpec { first, second });
        }

        Ok(Self {
            base_url,
            dimensions: document.dimensions,
            single_dimension_pages: document.single_dimension_pages,
            combinations,
        })
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All dimensions in declaration order.
    #[must_use]
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Look up a dimension by name.
    #[must_use]
    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    /// Dimension names that get single-value pages, in declaration order.
    #[must_use]
    pub fn single_dimension_pages(&self) -> &[String] {
        &self.single_dimension_pages
    }

    /// Combinable pairs in declaration order.
    #[must_use]
    pub fn combinations(&self) -> &[CombinationSpec] {
        &self.combinations
    }
}

fn validate_values(dimension: &Dimension) -> Result<(), RegistryError> {
    if dimension.values.is_empty() {
        return Err(RegistryError::EmptyDimension(dimension.name.clone()));
    }

    let is_language = dimension.kind() == Some(DimensionKind::Language);
    let mut seen = HashSet::with_capacity(dimension.values.len());
    for value in &dimension.values {
        let slug_safe = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == SLUG_SEPARATOR);
        if !slug_safe {
            return Err(RegistryError::InvalidValue {
                dimension: dimension.name.clone(),
                value: value.clone(),
            });
        }
        if !seen.insert(value.as_str()) {
            return Err(RegistryError::DuplicateValue {
                dimension: dimension.name.clone(),
                value: value.clone(),
            });
        }
        if is_language && Language::from_code(value).is_none() {
            return Err(RegistryError::UnknownLanguage(value.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document(json: &str) -> DimensionDocument {
        DimensionDocument::from_json(json).unwrap()
    }

    fn registry_err(json: &str) -> RegistryError {
        DimensionRegistry::new(document(json)).unwrap_err()
    }

    #[test]
    fn parses_document() {
        let doc = document(
            r#"{
                "baseUrl": "https://example.com/",
                "dimensions": [
                    {"name": "topic", "values": ["health", "politics"]},
                    {"name": "claimType", "values": ["viral-posts"]}
                ],
                "singleDimensionPages": ["topic"],
                "combinations": [["topic", "claimType"]]
            }"#,
        );
        let registry = DimensionRegistry::new(doc).unwrap();

        assert_eq!(registry.base_url(), "https://example.com");
        assert_eq!(registry.dimensions().len(), 2);
        assert_eq!(
            registry.dimension("topic").unwrap().values,
            vec!["health".to_owned(), "politics".to_owned()]
        );
        assert_eq!(registry.single_dimension_pages(), ["topic".to_owned()]);
        assert_eq!(
            registry.combinations(),
            [CombinationSpec {
                first: "topic".to_owned(),
                second: "claimType".to_owned(),
            }]
        );
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let doc = document(
            r#"{"baseUrl": "https://example.com", "dimensions": [{"name": "topic", "values": ["health"]}]}"#,
        );
        let registry = DimensionRegistry::new(doc).unwrap();
        assert!(registry.single_dimension_pages().is_empty());
        assert!(registry.combinations().is_empty());
    }

    #[test]
    fn rejects_empty_dimension() {
        let err = registry_err(
            r#"{"baseUrl": "https://example.com", "dimensions": [{"name": "topic", "values": []}]}"#,
        );
        assert!(matches!(err, RegistryError::EmptyDimension(ref name) if name == "topic"));
    }

    #[test]
    fn rejects_unknown_single_dimension() {
        let err = registry_err(
            r#"{
                "baseUrl": "https://example.com",
                "dimensions": [{"name": "topic", "values": ["health"]}],
                "singleDimensionPages": ["region"]
            }"#,
        );
        assert!(matches!(err, RegistryError::UnknownDimension { ref name, .. } if name == "region"));
        assert!(err.to_string().contains("singleDimensionPages"));
    }

    #[test]
    fn rejects_unknown_combination_dimension() {
        let err = registry_err(
            r#"{
                "baseUrl": "https://example.com",
                "dimensions": [{"name": "topic", "values": ["health"]}],
                "combinations": [["topic", "source"]]
            }"#,
        );
        assert!(matches!(err, RegistryError::UnknownDimension { ref name, .. } if name == "source"));
        assert!(err.to_string().contains("[topic, source]"));
    }

    #[test]
    fn rejects_self_combination() {
        let err = registry_err(
            r#"{
                "baseUrl": "https://example.com",
                "dimensions": [{"name": "topic", "values": ["health"]}],
                "combinations": [["topic", "topic"]]
            }"#,
        );
        assert!(matches!(err, RegistryError::SelfCombination(_)));
    }

    #[test]
    fn rejects_duplicate_dimension_and_value() {
        let err = registry_err(
            r#"{
                "baseUrl": "https://example.com",
                "dimensions": [
                    {"name": "topic", "values": ["health"]},
                    {"name": "topic", "values": ["politics"]}
                ]
            }"#,
        );
        assert!(matches!(err, RegistryError::DuplicateDimension(_)));

        let err = registry_err(
            r#"{"baseUrl": "https://example.com", "dimensions": [{"name": "topic", "values": ["health", "health"]}]}"#,
        );
        assert!(matches!(err, RegistryError::DuplicateValue { .. }));
    }

    #[test]
    fn rejects_non_slug_values() {
        for value in ["", "two words", "a/b", "caf\u{e9}"] {
            let json = format!(
                r#"{{"baseUrl": "https://example.com", "dimensions": [{{"name": "topic", "values": ["{value}"]}}]}}"#
            );
            let err = registry_err(&json);
            assert!(
                matches!(err, RegistryError::InvalidValue { .. }),
                "expected InvalidValue for {value:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn rejects_unknown_language_code() {
        let err = registry_err(
            r#"{"baseUrl": "https://example.com", "dimensions": [{"name": "language", "values": ["en", "xx"]}]}"#,
        );
        assert!(matches!(err, RegistryError::UnknownLanguage(ref code) if code == "xx"));
    }

    #[test]
    fn rejects_missing_base_url() {
        let err = registry_err(r#"{"dimensions": [{"name": "topic", "values": ["health"]}]}"#);
        assert!(matches!(err, RegistryError::InvalidBaseUrl(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("dimensions.json");
        let err = DimensionDocument::load(&path).unwrap_err();
        assert!(matches!(err, RegistryError::Read { .. }));
        assert!(err.to_string().contains("dimensions.json"));
    }

    #[test]
    fn load_reports_malformed_json() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("dimensions.json");
        std::fs::write(&path, "{\"dimensions\": 3}").unwrap();
        let err = DimensionDocument::load(&path).unwrap_err();
        assert!(matches!(err, RegistryError::Parse(_)));
    }

    #[test]
    fn dimension_kind_names() {
        assert_eq!(DimensionKind::from_name("claimType"), Some(DimensionKind::ClaimType));
        assert_eq!(DimensionKind::from_name("region"), None);
        assert_eq!(DimensionKind::Language.to_string(), "language");
    }
}
