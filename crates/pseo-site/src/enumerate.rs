//! Page enumeration.
//!
//! Emission order is fixed by the registry: single-dimension page types in
//! declaration order (values in order), then combinations in declaration
//! order with the first dimension as the outer loop. Reruns against the same
//! registry therefore produce the same sequence.

use std::collections::HashMap;

use crate::dimension::{Dimension, DimensionRegistry, RegistryError};
use crate::label::{SLUG_SEPARATOR, format_label};
use crate::page::{Page, PageOrigin};
use crate::template::{PairTemplate, SingleTemplate, TemplateKey, TemplateRegistry};

/// Two inputs produced the same slug.
#[derive(Debug, thiserror::Error)]
#[error("Slug '{slug}' is produced by both {first} and {second}")]
pub struct SlugCollisionError {
    pub slug: String,
    pub first: PageOrigin,
    pub second: PageOrigin,
}

/// Error returned by page enumeration.
#[derive(Debug, thiserror::Error)]
pub enum EnumerateError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    SlugCollision(#[from] Box<SlugCollisionError>),
}

/// Declared page types resolved against their templates.
///
/// Page types without a template are recorded in [`PagePlan::skipped`]
/// instead of failing, so pairs can be declared before their copy exists.
pub struct PagePlan<'a> {
    singles: Vec<(&'a Dimension, SingleTemplate)>,
    pairs: Vec<(&'a Dimension, &'a Dimension, PairTemplate)>,
    skipped: Vec<String>,
}

impl<'a> PagePlan<'a> {
    /// Resolve every declared page type of `registry` in `templates`.
    pub fn new(registry: &'a DimensionRegistry, templates: &TemplateRegistry) -> Self {
        let mut singles = Vec::new();
        let mut pairs = Vec::new();
        let mut skipped = Vec::new();

        for name in registry.single_dimension_pages() {
            // Registry validation guarantees the dimension exists
            let Some(dimension) = registry.dimension(name) else {
                continue;
            };
            if let Some(template) = dimension.kind().and_then(|kind| templates.single(kind)) {
                singles.push((dimension, template));
            } else {
                tracing::warn!(page_type = %name, "No template registered, skipping");
                skipped.push(name.clone());
            }
        }

        for combination in registry.combinations() {
            let (Some(first), Some(second)) = (
                registry.dimension(&combination.first),
                registry.dimension(&combination.second),
            ) else {
                continue;
            };
            let template = first
                .kind()
                .zip(second.kind())
                .and_then(|(a, b)| templates.pair(a, b));
            if let Some(template) = template {
                pairs.push((first, second, template));
            } else {
                tracing::warn!(page_type = %combination, "No template registered, skipping");
                skipped.push(combination.to_string());
            }
        }

        Self {
            singles,
            pairs,
            skipped,
        }
    }

    /// Declared page types without a template, in declaration order.
    #[must_use]
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Number of pages [`enumerate`](Self::enumerate) will emit.
    #[must_use]
    pub fn page_count(&self) -> usize {
        let singles: usize = self.singles.iter().map(|(d, _)| d.values.len()).sum();
        let pairs: usize = self
            .pairs
            .iter()
            .map(|(a, b, _)| a.values.len() * b.values.len())
            .sum();
        singles + pairs
    }

    /// Emit every page in deterministic order.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerateError::Registry`] if a template rejects a value and
    /// [`EnumerateError::SlugCollision`] if two inputs produce the same slug.
    pub fn enumerate(&self) -> Result<Vec<Page>, EnumerateError> {
        let mut pages = Emitter::with_capacity(self.page_count());

        for &(dimension, template) in &self.singles {
            for value in &dimension.values {
                pages.push(Page {
                    slug: value.clone(),
                    label: format_label(value),
                    content: template(value)?,
                    origin: PageOrigin::Single {
                        dimension: dimension.name.clone(),
                        value: value.clone(),
                    },
                })?;
            }
        }

        for &(first, second, template) in &self.pairs {
            for v1 in &first.values {
                for v2 in &second.values {
                    pages.push(Page {
                        slug: format!("{v1}{SLUG_SEPARATOR}{v2}"),
                        label: format!("{} {}", format_label(v1), format_label(v2)),
                        content: template(v1, v2)?,
                        origin: PageOrigin::Combination {
                            dimensions: (first.name.clone(), second.name.clone()),
                            values: (v1.clone(), v2.clone()),
                        },
                    })?;
                }
            }
        }

        tracing::debug!(pages = pages.pages.len(), "Enumerated pages");
        Ok(pages.pages)
    }

    /// Template keys that will be used, in emission order.
    #[must_use]
    pub fn template_keys(&self) -> Vec<TemplateKey> {
        self.singles
            .iter()
            .filter_map(|(d, _)| d.kind().map(TemplateKey::Single))
            .chain(self.pairs.iter().filter_map(|(a, b, _)| {
                a.kind().zip(b.kind()).map(|(a, b)| TemplateKey::Pair(a, b))
            }))
            .collect()
    }
}

/// Enumerate all pages of `registry` using `templates`.
///
/// Shorthand for [`PagePlan::new`] followed by [`PagePlan::enumerate`].
pub fn enumerate(
    registry: &DimensionRegistry,
    templates: &TemplateRegistry,
) -> Result<Vec<Page>, EnumerateError> {
    PagePlan::new(registry, templates).enumerate()
}

/// Page sink that rejects duplicate slugs.
struct Emitter {
    pages: Vec<Page>,
    by_slug: HashMap<String, usize>,
}

impl Emitter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            pages: Vec::with_capacity(capacity),
            by_slug: HashMap::with_capacity(capacity),
        }
    }

    fn push(&mut self, page: Page) -> Result<(), Box<SlugCollisionError>> {
        if let Some(&existing) = self.by_slug.get(&page.slug) {
            return Err(Box::new(SlugCollisionError {
                slug: page.slug,
                first: self.pages[existing].origin.clone(),
                second: page.origin,
            }));
        }
        self.by_slug.insert(page.slug.clone(), self.pages.len());
        self.pages.push(page);
        Ok(())
    }
}
