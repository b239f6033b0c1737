//! Dimension registry, content templates and page enumeration.
//!
//! A generation run is a pure function of its dimension document:
//!
//! 1. [`DimensionDocument`] is parsed and validated into a [`DimensionRegistry`].
//! 2. [`PagePlan`] resolves every declared page type against a
//!    [`TemplateRegistry`], skipping page types with no template.
//! 3. [`PagePlan::enumerate`] produces the ordered, slug-unique [`Page`] set.
//! 4. [`RelatedSelector`] picks cross-links for each page.
//!
//! # Example
//!
//! ```ignore
//! use pseo_site::{DimensionDocument, DimensionRegistry, PagePlan, TemplateRegistry};
//!
//! let registry = DimensionRegistry::new(DimensionDocument::load(path)?)?;
//! let templates = TemplateRegistry::builtin();
//! let pages = PagePlan::new(&registry, &templates).enumerate()?;
//! ```

mod dimension;
mod enumerate;
mod label;
mod language;
mod page;
mod related;
mod template;

pub use dimension::{
    CombinationSpec, Dimension, DimensionDocument, DimensionKind, DimensionRegistry, RegistryError,
};
pub use enumerate::{EnumerateError, PagePlan, SlugCollisionError, enumerate};
pub use label::{SLUG_SEPARATOR, format_label};
pub use language::Language;
pub use page::{Page, PageOrigin, RelatedLink};
pub use related::{DEFAULT_RELATED_LIMIT, RelatedFallback, RelatedSelector, select_related};
pub use template::{ContentRecord, PairTemplate, SingleTemplate, TemplateKey, TemplateRegistry};
