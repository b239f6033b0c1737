//! Built-in page copy for the fact checker.

// Templates share one fallible signature to fit the lookup table.
#![allow(clippy::unnecessary_wraps)]

use super::ContentRecord;
use crate::dimension::RegistryError;
use crate::label::format_label;
use crate::language::Language;

fn language_name(code: &str) -> Result<&'static str, RegistryError> {
    Language::from_code(code)
        .map(Language::display_name)
        .ok_or_else(|| RegistryError::UnknownLanguage(code.to_owned()))
}

/// Drop one trailing `s`: "Viral Posts" reads "Viral Post" after "Verify a".
fn singular(label: &str) -> &str {
    label.strip_suffix('s').unwrap_or(label)
}

pub(super) fn topic(topic: &str) -> Result<ContentRecord, RegistryError> {
    let label = format_label(topic);
    let lower = label.to_lowercase();
    Ok(ContentRecord {
        title: format!("{label} Fact Checker | Verify {label} Claims"),
        description: format!(
            "AI-powered fact checking for {lower} claims. Verify statistics, debunk rumors, \
             and trace misinformation sources. Free analysis available."
        ),
        heading: format!("{label} Fact Checker"),
        intro: format!(
            "Misinformation about {lower} spreads rapidly online. Our AI-powered fact checker \
             helps you verify claims, check statistics, and trace the origins of \
             {lower}-related information."
        ),
        call_to_action: format!("Check a {label} Claim Now"),
    })
}

pub(super) fn claim_type(claim_type: &str) -> Result<ContentRecord, RegistryError> {
    let label = format_label(claim_type);
    let lower = label.to_lowercase();
    Ok(ContentRecord {
        title: format!("{label} Fact Checker | Verify {label}"),
        description: format!(
            "Specialized AI fact checking for {lower}. Analyze credibility, find original \
             sources, and get accuracy ratings."
        ),
        heading: format!("{label} Verification"),
        intro: format!(
            "{label} require careful verification. Our AI analyzes the credibility of {lower}, \
             traces back to original sources, and provides reliability scores."
        ),
        call_to_action: format!("Verify a {}", singular(&label)),
    })
}

pub(super) fn source(source: &str) -> Result<ContentRecord, RegistryError> {
    let label = format_label(source);
    let lower = label.to_lowercase();
    Ok(ContentRecord {
        title: format!("{label} Fact Checker | Verify Content from {label}"),
        description: format!(
            "Check claims and content from {label}. Our AI verifies {lower} posts, traces \
             sources, and rates credibility."
        ),
        heading: format!("{label} Content Verification"),
        intro: format!(
            "Content from {label} can be hard to verify. Our AI-powered tool analyzes {lower} \
             content, checks against reliable sources, and helps you identify misinformation."
        ),
        call_to_action: format!("Check {label} Content"),
    })
}

pub(super) fn language(code: &str) -> Result<ContentRecord, RegistryError> {
    let name = language_name(code)?;
    Ok(ContentRecord {
        title: format!("{name} Fact Checker | Verify Claims in {name}"),
        description: format!(
            "AI fact checking for {name} language content. Verify claims, check sources, \
             and debunk misinformation in {name}."
        ),
        heading: format!("{name} Language Fact Checker"),
        intro: format!(
            "Our AI understands {name} content and can verify claims, check statistics, \
             and trace misinformation in {name} language sources."
        ),
        call_to_action: format!("Check {name} Content"),
    })
}

pub(super) fn topic_claim_type(topic: &str, claim_type: &str) -> Result<ContentRecord, RegistryError> {
    let topic = format_label(topic);
    let topic_lower = topic.to_lowercase();
    let claim = format_label(claim_type);
    let claim_lower = claim.to_lowercase();
    Ok(ContentRecord {
        title: format!("{topic} {claim} Checker | AI Verification"),
        description: format!(
            "Verify {claim_lower} about {topic_lower}. AI-powered fact checking with source \
             tracing and credibility analysis."
        ),
        heading: format!("{topic} {claim} Verification"),
        intro: format!(
            "{claim} about {topic_lower} often circulate online. Our AI helps you verify these \
             claims by analyzing sources, checking facts, and providing credibility scores."
        ),
        call_to_action: format!("Verify a {topic} {}", singular(&claim)),
    })
}

pub(super) fn topic_source(topic: &str, source: &str) -> Result<ContentRecord, RegistryError> {
    let topic = format_label(topic);
    let topic_lower = topic.to_lowercase();
    let source = format_label(source);
    let source_lower = source.to_lowercase();
    Ok(ContentRecord {
        title: format!("{topic} on {source} | Fact Checker"),
        description: format!(
            "Check {topic_lower} claims from {source}. AI verification of {source_lower} \
             content about {topic_lower}."
        ),
        heading: format!("{topic} Claims on {source}"),
        intro: format!(
            "{topic} content on {source} can spread quickly. Our AI analyzes {topic_lower} \
             claims from {source_lower}, verifies accuracy, and traces original sources."
        ),
        call_to_action: format!("Check {topic} Content from {source}"),
    })
}

pub(super) fn topic_language(topic: &str, code: &str) -> Result<ContentRecord, RegistryError> {
    let topic = format_label(topic);
    let topic_lower = topic.to_lowercase();
    let name = language_name(code)?;
    Ok(ContentRecord {
        title: format!("{topic} Fact Checker in {name}"),
        description: format!(
            "Verify {topic_lower} claims in {name}. AI-powered fact checking for {name} \
             language {topic_lower} content."
        ),
        heading: format!("{topic} Verification ({name})"),
        intro: format!(
            "Check {topic_lower} claims in {name}. Our AI analyzes {name} language content \
             about {topic_lower} and provides verification results."
        ),
        call_to_action: format!("Check {name} {topic} Claims"),
    })
}

pub(super) fn claim_type_source(claim_type: &str, source: &str) -> Result<ContentRecord, RegistryError> {
    let claim = format_label(claim_type);
    let claim_lower = claim.to_lowercase();
    let source = format_label(source);
    let source_lower = source.to_lowercase();
    Ok(ContentRecord {
        title: format!("{claim} from {source} | AI Fact Checker"),
        description: format!(
            "Verify {claim_lower} that originate from {source}. AI-powered analysis and \
             source verification."
        ),
        heading: format!("{claim} from {source}"),
        intro: format!(
            "{claim} from {source} require verification. Our AI analyzes {claim_lower} shared \
             on {source_lower} and checks their accuracy."
        ),
        call_to_action: format!("Verify {source} {claim}"),
    })
}

pub(super) fn claim_type_language(claim_type: &str, code: &str) -> Result<ContentRecord, RegistryError> {
    let claim = format_label(claim_type);
    let claim_lower = claim.to_lowercase();
    let name = language_name(code)?;
    Ok(ContentRecord {
        title: format!("{claim} Checker in {name}"),
        description: format!(
            "Verify {claim_lower} in {name} language. AI fact checking for {name} {claim_lower}."
        ),
        heading: format!("{claim} ({name})"),
        intro: format!(
            "Check {claim_lower} in {name}. Our AI verifies {name} language {claim_lower} and \
             provides credibility analysis."
        ),
        call_to_action: format!("Check {name} {claim}"),
    })
}

pub(super) fn source_language(source: &str, code: &str) -> Result<ContentRecord, RegistryError> {
    let source = format_label(source);
    let source_lower = source.to_lowercase();
    let name = language_name(code)?;
    Ok(ContentRecord {
        title: format!("{source} {name} Content Checker"),
        description: format!(
            "Verify {name} content from {source}. AI-powered fact checking for {name} \
             {source_lower} posts."
        ),
        heading: format!("{source} ({name}) Verification"),
        intro: format!(
            "Check {name} content from {source}. Our AI analyzes {name} posts on \
             {source_lower} and verifies their accuracy."
        ),
        call_to_action: format!("Check {name} {source} Content"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn topic_copy() {
        let record = topic("health").unwrap();
        assert_eq!(record.title, "Health Fact Checker | Verify Health Claims");
        assert_eq!(record.heading, "Health Fact Checker");
        assert_eq!(record.call_to_action, "Check a Health Claim Now");
        assert!(record.intro.contains("health-related information"));
    }

    #[test]
    fn claim_type_cta_is_singular() {
        let record = claim_type("viral-posts").unwrap();
        assert_eq!(record.heading, "Viral Posts Verification");
        assert_eq!(record.call_to_action, "Verify a Viral Post");
    }

    #[test]
    fn topic_claim_type_copy() {
        let record = topic_claim_type("politics", "viral-posts").unwrap();
        assert_eq!(record.heading, "Politics Viral Posts Verification");
        assert_eq!(record.call_to_action, "Verify a Politics Viral Post");
        assert!(record.description.starts_with("Verify viral posts about politics."));
    }

    #[test]
    fn language_templates_use_display_names() {
        assert_eq!(language("zh").unwrap().heading, "Chinese Language Fact Checker");
        assert_eq!(
            topic_language("health", "de").unwrap().heading,
            "Health Verification (German)"
        );
        assert_eq!(
            source_language("twitter", "fr").unwrap().title,
            "Twitter French Content Checker"
        );
    }

    #[test]
    fn unknown_language_is_error() {
        assert!(matches!(
            language("xx"),
            Err(RegistryError::UnknownLanguage(ref code)) if code == "xx"
        ));
        assert!(claim_type_language("rumors", "klingon").is_err());
    }

    #[test]
    fn singular_strips_one_s() {
        assert_eq!(singular("Viral Posts"), "Viral Post");
        assert_eq!(singular("Statistics"), "Statistic");
        assert_eq!(singular("Video"), "Video");
    }
}
