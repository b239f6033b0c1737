//! Page generation: the only command.

use chrono::NaiveDate;
use pseo_config::{Config, RelatedFallback as FallbackSetting};
use pseo_site::{DimensionDocument, DimensionRegistry, PagePlan, RelatedFallback, TemplateRegistry};
use pseo_static::{BuildConfig, BuildReport, SiteIdentity, StaticSiteBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Load `pseo.toml` (auto-discovered) and generate the site.
pub(crate) fn execute(output: &Output, generated_on: NaiveDate) -> Result<(), CliError> {
    let config = Config::load(None)?;
    run(&config, output, generated_on)?;
    Ok(())
}

/// Generate every page described by `config`.
pub(crate) fn run(
    config: &Config,
    output: &Output,
    generated_on: NaiveDate,
) -> Result<BuildReport, CliError> {
    output.highlight("Starting programmatic page generation...");

    let mut document = DimensionDocument::load(&config.site_resolved.dimensions_path)?;
    if let Some(base_url) = &config.site_resolved.base_url {
        document.base_url.clone_from(base_url);
    }
    let registry = DimensionRegistry::new(document)?;

    let templates = TemplateRegistry::builtin();
    let plan = PagePlan::new(&registry, &templates);
    let keys: Vec<String> = plan.template_keys().iter().map(ToString::to_string).collect();
    output.info(&format!("Templates: {}", keys.join(", ")));
    for page_type in plan.skipped() {
        output.info(&format!("Skipped (no template): {page_type}"));
    }
    let pages = plan.enumerate()?;
    output.info(&format!("Generating {} pages...", pages.len()));

    let builder = StaticSiteBuilder::new(BuildConfig {
        output_dir: config.output_resolved.dir.clone(),
        sitemap_path: config.output_resolved.sitemap.clone(),
        site: SiteIdentity {
            base_url: registry.base_url().to_owned(),
            name: config.site_resolved.name.clone(),
            analytics_id: config.site_resolved.analytics_id.clone(),
        },
        related_limit: config.related.limit,
        related_fallback: match config.related.fallback {
            FallbackSetting::Sequential => RelatedFallback::Sequential,
            FallbackSetting::Sampled => RelatedFallback::Sampled {
                seed: config.related.seed,
            },
        },
        sitemap: config.sitemap,
    });
    let report = builder.build(&pages, generated_on)?;

    output.success(&format!("Generated {} pages", report.pages_written));
    output.success(&format!("Sitemap: {} URLs", report.sitemap_urls));
    output.info(&format!("Output: {}", report.output_dir.display()));
    Ok(report)
}
