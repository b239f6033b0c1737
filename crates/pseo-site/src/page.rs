//! Generated page records.

use std::fmt;

use crate::template::ContentRecord;

/// Inputs a page was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOrigin {
    /// One value of one dimension.
    Single { dimension: String, value: String },
    /// One value from each dimension of a combination.
    Combination {
        dimensions: (String, String),
        values: (String, String),
    },
}

impl fmt::Display for PageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single { dimension, value } => write!(f, "{dimension}={value}"),
            Self::Combination { dimensions, values } => write!(
                f,
                "{}={} x {}={}",
                dimensions.0, values.0, dimensions.1, values.1
            ),
        }
    }
}

/// A page of the generated site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Unique URL segment: the value, or `value1-value2` for combinations.
    pub slug: String,
    /// Formatted value(s), used as link text.
    pub label: String,
    pub content: ContentRecord,
    pub origin: PageOrigin,
}

/// Link from one page to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedLink {
    pub slug: String,
    pub label: String,
}

impl From<&Page> for RelatedLink {
    fn from(page: &Page) -> Self {
        Self {
            slug: page.slug.clone(),
            label: page.label.clone(),
        }
    }
}
