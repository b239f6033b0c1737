//! Output writer.
//!
//! Writes a rendered site as a full replacement of the previous run:
//!
//! ```text
//! {output_dir}/          # removed and recreated on every run
//! +-- health/
//! |   +-- index.html
//! +-- health-viral-posts/
//!     +-- index.html
//! {sitemap_path}         # written last
//! ```
//!
//! A failure part-way leaves the partially written tree in place; rerun to
//! regenerate from a clean state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::{BuildError, BuildReport};

/// Filename of each page's document.
pub const DOCUMENT_FILENAME: &str = "index.html";

/// One rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub slug: String,
    pub html: String,
}

/// Every document of a run plus its sitemap, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSite {
    pub documents: Vec<RenderedDocument>,
    pub sitemap: String,
    /// Number of `<url>` entries in `sitemap`.
    pub sitemap_urls: usize,
}

/// Writes a [`RenderedSite`] to disk. Must be the only writer of its paths.
pub struct OutputWriter {
    output_dir: PathBuf,
    sitemap_path: PathBuf,
}

impl OutputWriter {
    /// Create a writer for the given output root and sitemap path.
    #[must_use]
    pub fn new(output_dir: PathBuf, sitemap_path: PathBuf) -> Self {
        Self {
            output_dir,
            sitemap_path,
        }
    }

    /// Replace the output tree with `site`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Clear`] or [`BuildError::CreateDir`] if the
    /// output root cannot be reset, [`BuildError::WritePage`] with the index
    /// and slug of the first page that fails, and [`BuildError::WriteSitemap`]
    /// if the sitemap cannot be written.
    pub fn write(&self, site: &RenderedSite) -> Result<BuildReport, BuildError> {
        self.clear()?;

        for (index, document) in site.documents.iter().enumerate() {
            let page_dir = self.output_dir.join(&document.slug);
            let path = page_dir.join(DOCUMENT_FILENAME);
            fs::create_dir_all(&page_dir)
                .and_then(|()| fs::write(&path, &document.html))
                .map_err(|source| BuildError::WritePage {
                    index,
                    slug: document.slug.clone(),
                    path: path.clone(),
                    source,
                })?;
            tracing::debug!(index, slug = %document.slug, "Wrote page");
        }

        if let Some(parent) = self.sitemap_path.parent() {
            create_dir(parent)?;
        }
        fs::write(&self.sitemap_path, &site.sitemap).map_err(|source| BuildError::WriteSitemap {
            path: self.sitemap_path.clone(),
            source,
        })?;

        tracing::info!(
            pages = site.documents.len(),
            sitemap_urls = site.sitemap_urls,
            output = %self.output_dir.display(),
            "Site written"
        );

        Ok(BuildReport {
            pages_written: site.documents.len(),
            sitemap_urls: site.sitemap_urls,
            output_dir: self.output_dir.clone(),
            sitemap_path: self.sitemap_path.clone(),
        })
    }

    /// Remove any previous output and recreate an empty root.
    fn clear(&self) -> Result<(), BuildError> {
        if self.output_dir.exists() {
            fs::remove_dir_all(&self.output_dir).map_err(|source| BuildError::Clear {
                path: self.output_dir.clone(),
                source,
            })?;
            tracing::info!(output = %self.output_dir.display(), "Cleared previous output");
        }
        create_dir(&self.output_dir)
    }
}

fn create_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path).map_err(|source| BuildError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn document(slug: &str) -> RenderedDocument {
        RenderedDocument {
            slug: slug.to_owned(),
            html: format!("<html>{slug}</html>"),
        }
    }

    fn site(slugs: &[&str]) -> RenderedSite {
        RenderedSite {
            documents: slugs.iter().map(|s| document(s)).collect(),
            sitemap: "<urlset/>".to_owned(),
            sitemap_urls: slugs.len(),
        }
    }

    #[test]
    fn writes_one_directory_per_page() {
        let tmp = TempDir::new().unwrap();
        let writer = OutputWriter::new(tmp.path().join("p"), tmp.path().join("sitemap.xml"));

        let report = writer.write(&site(&["health", "health-rumors"])).unwrap();

        assert_eq!(report.pages_written, 2);
        assert_eq!(report.sitemap_urls, 2);
        assert_eq!(
            fs::read_to_string(tmp.path().join("p/health/index.html")).unwrap(),
            "<html>health</html>"
        );
        assert!(tmp.path().join("p/health-rumors/index.html").is_file());
        assert_eq!(
            fs::read_to_string(tmp.path().join("sitemap.xml")).unwrap(),
            "<urlset/>"
        );
    }

    #[test]
    fn previous_output_is_removed() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("p");
        fs::create_dir_all(output.join("stale-page")).unwrap();
        fs::write(output.join("stale-page/index.html"), "old").unwrap();
        fs::write(output.join("notes.txt"), "old").unwrap();

        let writer = OutputWriter::new(output.clone(), tmp.path().join("sitemap.xml"));
        writer.write(&site(&["health"])).unwrap();

        assert!(!output.join("stale-page").exists());
        assert!(!output.join("notes.txt").exists());
        assert!(output.join("health/index.html").is_file());
    }

    #[test]
    fn creates_sitemap_parent() {
        let tmp = TempDir::new().unwrap();
        let sitemap = tmp.path().join("public/maps/sitemap.xml");
        let writer = OutputWriter::new(tmp.path().join("public/p"), sitemap.clone());
        writer.write(&site(&["health"])).unwrap();
        assert!(sitemap.is_file());
    }

    #[test]
    fn clear_failure_reports_path() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("p");
        fs::write(&output, "not a directory").unwrap();

        let writer = OutputWriter::new(output.clone(), tmp.path().join("sitemap.xml"));
        let err = writer.write(&site(&["health"])).unwrap_err();
        assert!(
            matches!(err, BuildError::Clear { ref path, .. } if *path == output),
            "expected Clear error, got {err:?}"
        );
    }

    #[test]
    fn page_failure_reports_index_and_slug() {
        let tmp = TempDir::new().unwrap();
        let writer = OutputWriter::new(tmp.path().join("p"), tmp.path().join("sitemap.xml"));

        let err = writer
            .write(&site(&["health", "bad\0slug", "politics"]))
            .unwrap_err();
        let BuildError::WritePage { index, slug, .. } = &err else {
            panic!("expected WritePage error, got {err:?}");
        };
        assert_eq!(*index, 1);
        assert_eq!(slug, "bad\0slug");
        assert!(err.to_string().contains("page 1"));

        // Pages before the failure stay on disk
        assert!(tmp.path().join("p/health/index.html").is_file());
        assert!(!tmp.path().join("p/politics").exists());
        assert!(!tmp.path().join("sitemap.xml").exists());
    }

    #[test]
    fn sitemap_failure_reports_path() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("public");
        fs::write(&blocker, "file in the way").unwrap();

        let writer = OutputWriter::new(tmp.path().join("p"), blocker.join("sitemap.xml"));
        let err = writer.write(&site(&["health"])).unwrap_err();
        assert!(
            matches!(err, BuildError::CreateDir { ref path, .. } if *path == blocker),
            "expected CreateDir error, got {err:?}"
        );
    }
}
