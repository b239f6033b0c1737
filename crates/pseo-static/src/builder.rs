//! Static site builder.
//!
//! Renders every page (in parallel, order preserved) together with the
//! sitemap, then hands the result to the [`OutputWriter`]. Nothing on disk is
//! touched until rendering has finished.

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use pseo_config::SitemapConfig;
use pseo_site::{Page, RelatedFallback, RelatedSelector};
use rayon::prelude::*;

use crate::sitemap::{SitemapError, build_sitemap};
use crate::template::{SiteIdentity, render_document};
use crate::writer::{OutputWriter, RenderedDocument, RenderedSite};

/// Configuration for static site building.
pub struct BuildConfig {
    /// Root directory holding one directory per page. Wiped on every build.
    pub output_dir: PathBuf,
    /// Sitemap document path.
    pub sitemap_path: PathBuf,
    /// Site-wide values embedded in every document.
    pub site: SiteIdentity,
    /// Maximum related links per page.
    pub related_limit: usize,
    /// Related-link fallback rule.
    pub related_fallback: RelatedFallback,
    /// Sitemap entry policy.
    pub sitemap: SitemapConfig,
}

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to clear output directory {}: {source}", path.display())]
    Clear {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write page {index} ('{slug}') to {}: {source}", path.display())]
    WritePage {
        index: usize,
        slug: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write sitemap {}: {source}", path.display())]
    WriteSitemap {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to build sitemap: {0}")]
    Sitemap(#[from] SitemapError),
}

/// Summary of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub pages_written: usize,
    pub sitemap_urls: usize,
    pub output_dir: PathBuf,
    pub sitemap_path: PathBuf,
}

/// Builds the static site for an enumerated page set.
pub struct StaticSiteBuilder {
    config: BuildConfig,
}

impl StaticSiteBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Render documents and sitemap without writing anything.
    ///
    /// Documents and sitemap are produced concurrently; both follow the order
    /// of `pages`.
    pub fn render(&self, pages: &[Page], generated_on: NaiveDate) -> Result<RenderedSite, BuildError> {
        let selector = RelatedSelector::new(
            pages,
            self.config.related_limit,
            self.config.related_fallback,
        );
        let site = &self.config.site;

        let (documents, sitemap) = rayon::join(
            || {
                pages
                    .par_iter()
                    .map(|page| {
                        let related = selector.select(&page.slug);
                        RenderedDocument {
                            slug: page.slug.clone(),
                            html: render_document(page, &related, site, generated_on),
                        }
                    })
                    .collect::<Vec<_>>()
            },
            || build_sitemap(pages, &site.base_url, generated_on, &self.config.sitemap),
        );

        Ok(RenderedSite {
            documents,
            sitemap: sitemap?,
            sitemap_urls: pages.len(),
        })
    }

    /// Render `pages` and replace the output tree with the result.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the sitemap cannot be built or any
    /// filesystem step fails.
    pub fn build(&self, pages: &[Page], generated_on: NaiveDate) -> Result<BuildReport, BuildError> {
        let rendered = self.render(pages, generated_on)?;
        tracing::info!(pages = rendered.documents.len(), "Rendered documents");

        OutputWriter::new(
            self.config.output_dir.clone(),
            self.config.sitemap_path.clone(),
        )
        .write(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pseo_site::{ContentRecord, PageOrigin};
    use tempfile::TempDir;

    fn page(slug: &str) -> Page {
        Page {
            slug: slug.to_owned(),
            label: pseo_site::format_label(slug),
            content: ContentRecord {
                title: format!("{slug} title"),
                description: format!("{slug} description"),
                heading: format!("{slug} heading"),
                intro: format!("{slug} intro"),
                call_to_action: format!("{slug} cta"),
            },
            origin: PageOrigin::Single {
                dimension: "topic".to_owned(),
                value: slug.to_owned(),
            },
        }
    }

    fn config(root: &std::path::Path) -> BuildConfig {
        BuildConfig {
            output_dir: root.join("public/p"),
            sitemap_path: root.join("public/sitemap-programmatic.xml"),
            site: SiteIdentity {
                base_url: "https://example.com".to_owned(),
                name: "AI Fact Checker".to_owned(),
                analytics_id: None,
            },
            related_limit: 2,
            related_fallback: RelatedFallback::Sequential,
            sitemap: SitemapConfig::default(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn render_keeps_page_order() {
        let tmp = TempDir::new().unwrap();
        let builder = StaticSiteBuilder::new(config(tmp.path()));
        let pages: Vec<Page> = (0..64).map(|i| page(&format!("page{i}"))).collect();

        let rendered = builder.render(&pages, date()).unwrap();

        let slugs: Vec<&str> = rendered.documents.iter().map(|d| d.slug.as_str()).collect();
        let expected: Vec<&str> = pages.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, expected);
        assert_eq!(rendered.sitemap_urls, 64);
        assert!(!tmp.path().join("public").exists());
    }

    #[test]
    fn render_limits_related_links() {
        let tmp = TempDir::new().unwrap();
        let builder = StaticSiteBuilder::new(config(tmp.path()));
        let pages = vec![page("a"), page("b"), page("c"), page("d")];

        let rendered = builder.render(&pages, date()).unwrap();
        let html = &rendered.documents[0].html;
        assert!(html.contains("https://example.com/p/b/"));
        assert!(html.contains("https://example.com/p/c/"));
        assert!(!html.contains("https://example.com/p/d/"));
    }

    #[test]
    fn build_writes_pages_and_sitemap() {
        let tmp = TempDir::new().unwrap();
        let builder = StaticSiteBuilder::new(config(tmp.path()));
        let pages = vec![page("health"), page("politics")];

        let report = builder.build(&pages, date()).unwrap();

        assert_eq!(report.pages_written, 2);
        assert_eq!(report.sitemap_urls, 2);
        assert_eq!(report.output_dir, tmp.path().join("public/p"));
        assert!(tmp.path().join("public/p/health/index.html").is_file());
        assert!(tmp.path().join("public/p/politics/index.html").is_file());
        let sitemap =
            std::fs::read_to_string(tmp.path().join("public/sitemap-programmatic.xml")).unwrap();
        assert_eq!(sitemap.matches("<url>").count(), 2);
    }
}
