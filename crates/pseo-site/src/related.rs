//! Related-link selection.
//!
//! Pages whose slug shares a part (split on `-`) with the target come first,
//! in enumeration order. When fewer than `limit` such pages exist, the
//! remaining slots are filled by a [`RelatedFallback`] rule. Both rules are
//! deterministic, so reruns produce identical link lists.

use std::collections::HashSet;

use sha2::{Digest, Sha256};

use crate::label::SLUG_SEPARATOR;
use crate::page::{Page, RelatedLink};

/// Default number of related links per page.
pub const DEFAULT_RELATED_LIMIT: usize = 5;

/// Inclusion rate of [`RelatedFallback::Sampled`], in percent.
const SAMPLE_PERCENT: u64 = 30;

/// Rule for filling slots left after shared-part matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelatedFallback {
    /// Pages following the target in enumeration order, wrapping around.
    #[default]
    Sequential,
    /// Each remaining page is included with a fixed probability derived from
    /// `seed` and both slugs.
    Sampled { seed: u64 },
}

/// Selects related links against a fixed page set.
pub struct RelatedSelector<'a> {
    pages: &'a [Page],
    parts: Vec<HashSet<&'a str>>,
    limit: usize,
    fallback: RelatedFallback,
}

impl<'a> RelatedSelector<'a> {
    /// Index `pages` for selection.
    pub fn new(pages: &'a [Page], limit: usize, fallback: RelatedFallback) -> Self {
        let parts = pages.iter().map(|page| slug_parts(&page.slug)).collect();
        Self {
            pages,
            parts,
            limit,
            fallback,
        }
    }

    /// Related links for `target_slug`, never including the target itself.
    pub fn select(&self, target_slug: &str) -> Vec<RelatedLink> {
        let target_parts = slug_parts(target_slug);
        let shares = |i: usize| !self.parts[i].is_disjoint(&target_parts);
        let is_target = |i: usize| self.pages[i].slug == target_slug;

        let mut chosen: Vec<usize> = (0..self.pages.len())
            .filter(|&i| !is_target(i) && shares(i))
            .take(self.limit)
            .collect();

        if chosen.len() < self.limit {
            let remaining = self.limit - chosen.len();
            let candidates = self.fallback_order(target_slug);
            match self.fallback {
                RelatedFallback::Sequential => chosen.extend(
                    candidates
                        .filter(|&i| !is_target(i) && !shares(i))
                        .take(remaining),
                ),
                RelatedFallback::Sampled { seed } => chosen.extend(
                    candidates
                        .filter(|&i| !is_target(i) && !shares(i))
                        .filter(|&i| sampled(seed, target_slug, &self.pages[i].slug))
                        .take(remaining),
                ),
            }
        }

        chosen
            .into_iter()
            .map(|i| RelatedLink::from(&self.pages[i]))
            .collect()
    }

    /// Page indices in fallback order.
    ///
    /// Sequential starts right after the target and wraps; sampled keeps
    /// enumeration order.
    fn fallback_order(&self, target_slug: &str) -> impl Iterator<Item = usize> + use<> {
        let len = self.pages.len();
        let start = match self.fallback {
            RelatedFallback::Sequential => self
                .pages
                .iter()
                .position(|p| p.slug == target_slug)
                .map_or(0, |i| i + 1),
            RelatedFallback::Sampled { .. } => 0,
        };
        (0..len).map(move |offset| (start + offset) % len)
    }
}

/// Select up to `limit` related links for `target_slug` with the
/// sequential fallback.
pub fn select_related(target_slug: &str, pages: &[Page], limit: usize) -> Vec<RelatedLink> {
    RelatedSelector::new(pages, limit, RelatedFallback::Sequential).select(target_slug)
}

fn slug_parts(slug: &str) -> HashSet<&str> {
    slug.split(SLUG_SEPARATOR).filter(|p| !p.is_empty()).collect()
}

/// Seeded inclusion test, stable across runs and platforms.
fn sampled(seed: u64, target: &str, candidate: &str) -> bool {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(target.as_bytes());
    hasher.update([0u8]);
    hasher.update(candidate.as_bytes());
    let digest = hasher.finalize();

    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(head) % 100 < SAMPLE_PERCENT
}
