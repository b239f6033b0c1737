//! Sitemap generation.
//!
//! Produces a `urlset` document in the sitemaps.org 0.9 schema with one
//! `<url>` entry per page, in enumeration order.

use std::io;
use std::string::FromUtf8Error;

use chrono::NaiveDate;
use pseo_config::SitemapConfig;
use pseo_site::Page;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::template::canonical_url;

/// Sitemap schema namespace.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Error returned while building the sitemap document.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Sitemap is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Build the sitemap for `pages`.
///
/// Every entry carries the same `lastmod` (`generated_on`), change
/// frequency and priority.
pub fn build_sitemap(
    pages: &[Page],
    base_url: &str,
    generated_on: NaiveDate,
    config: &SitemapConfig,
) -> Result<String, SitemapError> {
    let lastmod = generated_on.format("%Y-%m-%d").to_string();
    let changefreq = config.changefreq.as_str();
    let priority = format!("{:.1}", config.priority);

    let mut writer = Writer::new_with_indent(Vec::with_capacity(pages.len() * 160), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NAMESPACE)]),
    ))?;

    for page in pages {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &canonical_url(base_url, &page.slug))?;
        write_text_element(&mut writer, "lastmod", &lastmod)?;
        write_text_element(&mut writer, "changefreq", changefreq)?;
        write_text_element(&mut writer, "priority", &priority)?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

fn write_text_element<W: io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pseo_config::ChangeFrequency;
    use pseo_site::{ContentRecord, PageOrigin};

    fn page(slug: &str) -> Page {
        Page {
            slug: slug.to_owned(),
            label: slug.to_owned(),
            content: ContentRecord {
                title: slug.to_owned(),
                description: slug.to_owned(),
                heading: slug.to_owned(),
                intro: slug.to_owned(),
                call_to_action: slug.to_owned(),
            },
            origin: PageOrigin::Single {
                dimension: "topic".to_owned(),
                value: slug.to_owned(),
            },
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn one_entry_per_page_in_order() {
        let pages = vec![page("health"), page("politics"), page("health-viral-posts")];
        let xml = build_sitemap(&pages, "https://example.com", date(), &SitemapConfig::default())
            .unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"
        ));
        assert_eq!(xml.matches("<url>").count(), 3);
        assert_eq!(xml.matches("</url>").count(), 3);
        assert_eq!(xml.matches("<urlset").count(), 1);

        let health = xml.find("<loc>https://example.com/p/health/</loc>").unwrap();
        let politics = xml.find("<loc>https://example.com/p/politics/</loc>").unwrap();
        let combo = xml
            .find("<loc>https://example.com/p/health-viral-posts/</loc>")
            .unwrap();
        assert!(health < politics && politics < combo);
    }

    #[test]
    fn entries_carry_fixed_fields() {
        let xml = build_sitemap(
            &[page("health")],
            "https://example.com",
            date(),
            &SitemapConfig::default(),
        )
        .unwrap();
        assert!(xml.contains("<lastmod>2026-10-19</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.6</priority>"));
    }

    #[test]
    fn configured_frequency_and_priority() {
        let config = SitemapConfig {
            changefreq: ChangeFrequency::Weekly,
            priority: 0.8,
        };
        let xml = build_sitemap(&[page("health")], "https://example.com", date(), &config).unwrap();
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
    }

    #[test]
    fn empty_page_set_has_empty_urlset() {
        let xml = build_sitemap(&[], "https://example.com", date(), &SitemapConfig::default())
            .unwrap();
        assert!(xml.contains("urlset"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn locations_are_xml_escaped() {
        let xml = build_sitemap(
            &[page("health")],
            "https://example.com/a&b",
            date(),
            &SitemapConfig::default(),
        )
        .unwrap();
        assert!(xml.contains("<loc>https://example.com/a&amp;b/p/health/</loc>"));
    }
}
