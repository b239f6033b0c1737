//! HTML document template for generated pages.
//!
//! Each document is self-contained: metadata, social cards, JSON-LD, the
//! analytics snippet and styles are inlined so pages can be served from any
//! static host.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate};
use pseo_site::{Page, RelatedLink};

/// Site-wide values shared by every document.
#[derive(Debug, Clone)]
pub struct SiteIdentity {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Brand shown in header and footer.
    pub name: String,
    /// Analytics measurement id. `None` omits the snippet.
    pub analytics_id: Option<String>,
}

/// Canonical location of a page: `<base_url>/p/<slug>/`.
pub fn canonical_url(base_url: &str, slug: &str) -> String {
    format!("{base_url}/p/{slug}/")
}

/// Fixed feature block shown on every page.
const FEATURES: [(&str, &str); 3] = [
    (
        "\u{1f50d} Source Tracing",
        "Track claims back to their original source and verify authenticity.",
    ),
    (
        "\u{1f4ca} Credibility Score",
        "Get an AI-generated credibility rating based on multiple factors.",
    ),
    (
        "\u{1f310} Multi-language Support",
        "Verify claims in 7 languages including English, Chinese, and Japanese.",
    ),
];

const STYLES: &str = "\
:root { --primary: #1a365d; --accent: #2c5282; --bg: #f7fafc; }
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Source Serif Pro', Georgia, serif; background: var(--bg); color: #1a202c; line-height: 1.7; }
.container { max-width: 800px; margin: 0 auto; padding: 2rem; }
header { background: var(--primary); color: white; padding: 1.5rem; text-align: center; }
header a { color: white; text-decoration: none; font-size: 1.5rem; font-family: 'Playfair Display', serif; }
h1 { font-family: 'Playfair Display', serif; font-size: 2.5rem; margin: 2rem 0 1rem; color: var(--primary); }
.intro { font-size: 1.1rem; margin-bottom: 2rem; color: #4a5568; }
.cta-section { background: white; border-radius: 12px; padding: 2rem; margin: 2rem 0; box-shadow: 0 4px 6px rgba(0,0,0,0.05); text-align: center; }
.cta-section p { margin: 1rem 0; color: #4a5568; }
.cta-button { display: inline-block; background: var(--accent); color: white; padding: 1rem 2rem; border-radius: 8px; text-decoration: none; font-weight: 600; transition: transform 0.2s; }
.cta-button:hover { transform: translateY(-2px); }
.features { display: grid; gap: 1rem; margin: 2rem 0; }
.feature { background: white; padding: 1.5rem; border-radius: 8px; border-left: 4px solid var(--accent); }
.related { margin: 2rem 0; }
.related h2 { font-family: 'Playfair Display', serif; margin-bottom: 1rem; }
.related-links { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.related-links a { background: #e2e8f0; padding: 0.5rem 1rem; border-radius: 20px; text-decoration: none; color: var(--primary); font-size: 0.9rem; }
.related-links a:hover { background: #cbd5e0; }
footer { text-align: center; padding: 2rem; color: #718096; font-size: 0.9rem; }
";

/// Render a complete HTML document for `page`.
///
/// Pure function of its inputs; `generated_on` stamps the structured data
/// and the footer year.
pub fn render_document(
    page: &Page,
    related: &[RelatedLink],
    site: &SiteIdentity,
    generated_on: NaiveDate,
) -> String {
    let mut html = String::with_capacity(8192);
    let canonical = canonical_url(&site.base_url, &page.slug);

    render_head(&mut html, page, &canonical, site, generated_on);

    html.push_str("<body>\n");
    let _ = writeln!(
        html,
        "<header>\n<a href=\"{}\">{}</a>\n</header>",
        escape(&site.base_url),
        escape(&site.name)
    );

    html.push_str("<main class=\"container\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape(&page.content.heading));
    let _ = writeln!(html, "<p class=\"intro\">{}</p>", escape(&page.content.intro));
    render_call_to_action(&mut html, page, site);
    render_features(&mut html);
    render_related(&mut html, related, site);
    html.push_str("</main>\n");

    let _ = writeln!(
        html,
        "<footer>\n<p>&copy; {} {}. <a href=\"{}/pricing\">Pricing</a></p>\n</footer>",
        generated_on.year(),
        escape(&site.name),
        escape(&site.base_url)
    );
    html.push_str("</body>\n</html>\n");
    html
}

fn render_head(
    html: &mut String,
    page: &Page,
    canonical: &str,
    site: &SiteIdentity,
    generated_on: NaiveDate,
) {
    let title = escape(&page.content.title);
    let description = escape(&page.content.description);
    let canonical_attr = escape(canonical);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(html, "<title>{title}</title>");
    let _ = writeln!(html, "<meta name=\"description\" content=\"{description}\">");
    let _ = writeln!(html, "<link rel=\"canonical\" href=\"{canonical_attr}\">");

    // Open Graph
    let _ = writeln!(html, "<meta property=\"og:title\" content=\"{title}\">");
    let _ = writeln!(html, "<meta property=\"og:description\" content=\"{description}\">");
    html.push_str("<meta property=\"og:type\" content=\"website\">\n");
    let _ = writeln!(html, "<meta property=\"og:url\" content=\"{canonical_attr}\">");
    let _ = writeln!(
        html,
        "<meta property=\"og:image\" content=\"{}/og-image.png\">",
        escape(&site.base_url)
    );

    // Twitter card
    html.push_str("<meta name=\"twitter:card\" content=\"summary_large_image\">\n");
    let _ = writeln!(html, "<meta name=\"twitter:title\" content=\"{title}\">");
    let _ = writeln!(html, "<meta name=\"twitter:description\" content=\"{description}\">");

    html.push_str("<script type=\"application/ld+json\">\n");
    html.push_str(&structured_data(page, canonical, generated_on));
    html.push_str("\n</script>\n");

    if let Some(id) = &site.analytics_id {
        render_analytics(html, id, &page.slug);
    }

    let _ = write!(html, "<style>\n{STYLES}</style>\n");
    html.push_str("</head>\n");
}

/// JSON-LD block describing the page as a free web application.
fn structured_data(page: &Page, canonical: &str, generated_on: NaiveDate) -> String {
    let data = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "WebApplication",
        "name": page.content.title,
        "description": page.content.description,
        "url": canonical,
        "applicationCategory": "UtilitiesApplication",
        "operatingSystem": "Web Browser",
        "dateModified": generated_on.format("%Y-%m-%d").to_string(),
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD"
        }
    });
    // A literal "</" would close the script element early
    format!("{data:#}").replace("</", "<\\/")
}

fn render_analytics(html: &mut String, id: &str, slug: &str) {
    let id = escape_js(id);
    let _ = writeln!(
        html,
        "<script async src=\"https://www.googletagmanager.com/gtag/js?id={}\"></script>",
        escape(&id)
    );
    html.push_str("<script>\n");
    html.push_str("window.dataLayer = window.dataLayer || [];\n");
    html.push_str("function gtag(){dataLayer.push(arguments);}\n");
    html.push_str("gtag('js', new Date());\n");
    let _ = writeln!(html, "gtag('config', '{id}', {{'page_path': '/p/{slug}/'}});");
    html.push_str("</script>\n");
}

fn render_call_to_action(html: &mut String, page: &Page, site: &SiteIdentity) {
    html.push_str("<section class=\"cta-section\">\n");
    html.push_str("<h2>Ready to Verify?</h2>\n");
    html.push_str("<p>Paste any claim and get instant AI-powered fact checking.</p>\n");
    let _ = writeln!(
        html,
        "<a href=\"{}?ref=p&amp;slug={}\" class=\"cta-button\">{} &rarr;</a>",
        escape(&site.base_url),
        escape(&page.slug),
        escape(&page.content.call_to_action)
    );
    html.push_str("</section>\n");
}

fn render_features(html: &mut String) {
    html.push_str("<section class=\"features\">\n");
    for (name, text) in FEATURES {
        let _ = writeln!(
            html,
            "<div class=\"feature\">\n<strong>{name}</strong>\n<p>{text}</p>\n</div>"
        );
    }
    html.push_str("</section>\n");
}

fn render_related(html: &mut String, related: &[RelatedLink], site: &SiteIdentity) {
    html.push_str("<section class=\"related\">\n");
    html.push_str("<h2>Related Fact Checkers</h2>\n");
    html.push_str("<div class=\"related-links\">\n");
    for link in related {
        let _ = writeln!(
            html,
            "<a href=\"{}\">{}</a>",
            escape(&canonical_url(&site.base_url, &link.slug)),
            escape(&link.label)
        );
    }
    html.push_str("</div>\n</section>\n");
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Keep only characters valid in a measurement id inside a JS string literal.
fn escape_js(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
