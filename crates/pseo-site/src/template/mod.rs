//! Content templates keyed by dimension kind.
//!
//! Dispatch is a lookup table over [`TemplateKey`], so a page type without a
//! template is known as soon as a [`PagePlan`](crate::PagePlan) is built.

mod copy;

use std::collections::HashMap;
use std::fmt;

use crate::dimension::{DimensionKind, RegistryError};
use crate::label::SLUG_SEPARATOR;

/// Human-facing text of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    pub title: String,
    pub description: String,
    pub heading: String,
    pub intro: String,
    pub call_to_action: String,
}

/// Template for single-dimension pages.
pub type SingleTemplate = fn(&str) -> Result<ContentRecord, RegistryError>;

/// Template for combination pages. Arguments follow the combination's declaration order.
pub type PairTemplate = fn(&str, &str) -> Result<ContentRecord, RegistryError>;

/// Key of a registered template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateKey {
    Single(DimensionKind),
    Pair(DimensionKind, DimensionKind),
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(kind) => write!(f, "{kind}"),
            Self::Pair(first, second) => write!(f, "{first}{SLUG_SEPARATOR}{second}"),
        }
    }
}

/// Lookup table from [`TemplateKey`] to template function.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    single: HashMap<DimensionKind, SingleTemplate>,
    pair: HashMap<(DimensionKind, DimensionKind), PairTemplate>,
}

impl TemplateRegistry {
    /// Registry without templates.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with every built-in fact-checker template.
    #[must_use]
    pub fn builtin() -> Self {
        use DimensionKind::{ClaimType, Language, Source, Topic};

        let mut registry = Self::empty();
        registry
            .register_single(Topic, copy::topic)
            .register_single(ClaimType, copy::claim_type)
            .register_single(Source, copy::source)
            .register_single(Language, copy::language)
            .register_pair(Topic, ClaimType, copy::topic_claim_type)
            .register_pair(Topic, Source, copy::topic_source)
            .register_pair(Topic, Language, copy::topic_language)
            .register_pair(ClaimType, Source, copy::claim_type_source)
            .register_pair(ClaimType, Language, copy::claim_type_language)
            .register_pair(Source, Language, copy::source_language);
        registry
    }

    /// Register or replace a single-dimension template.
    pub fn register_single(&mut self, kind: DimensionKind, template: SingleTemplate) -> &mut Self {
        self.single.insert(kind, template);
        self
    }

    /// Register or replace a combination template. The pair is ordered.
    pub fn register_pair(
        &mut self,
        first: DimensionKind,
        second: DimensionKind,
        template: PairTemplate,
    ) -> &mut Self {
        self.pair.insert((first, second), template);
        self
    }

    /// Template for single-value pages of `kind`.
    #[must_use]
    pub fn single(&self, kind: DimensionKind) -> Option<SingleTemplate> {
        self.single.get(&kind).copied()
    }

    /// Template for combinations of `first` and `second`, in that order.
    #[must_use]
    pub fn pair(&self, first: DimensionKind, second: DimensionKind) -> Option<PairTemplate> {
        self.pair.get(&(first, second)).copied()
    }

    /// Registered keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<TemplateKey> {
        let mut keys: Vec<TemplateKey> = self
            .single
            .keys()
            .map(|&kind| TemplateKey::Single(kind))
            .chain(self.pair.keys().map(|&(a, b)| TemplateKey::Pair(a, b)))
            .collect();
        keys.sort_unstable();
        keys
    }
}
