//! Static document rendering, sitemap building and output writing.

mod builder;
mod sitemap;
mod template;
mod writer;

pub use builder::{BuildConfig, BuildError, BuildReport, StaticSiteBuilder};
pub use sitemap::{SITEMAP_NAMESPACE, SitemapError, build_sitemap};
pub use template::{SiteIdentity, canonical_url, render_document};
pub use writer::{DOCUMENT_FILENAME, OutputWriter, RenderedDocument, RenderedSite};
