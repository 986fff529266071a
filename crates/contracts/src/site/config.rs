use super::model::SiteContent;
use std::collections::HashSet;
use thiserror::Error;

/// Site copy embedded in the binary
const DEFAULT_SITE: &str = include_str!("../../site.toml");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("FAQ entry #{0} has an empty key")]
    EmptyFaqKey(usize),
    #[error("FAQ key '{0}' is used more than once")]
    DuplicateFaqKey(String),
    #[error("FAQ default key '{0}' does not match any entry")]
    UnknownFaqDefault(String),
    #[error("pricing tier #{0} needs a name and a price")]
    IncompleteTier(usize),
}

impl SiteContent {
    /// Checks the cross-field rules serde cannot express.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for (idx, entry) in self.faq.entries.iter().enumerate() {
            if entry.key.trim().is_empty() {
                return Err(ContentError::EmptyFaqKey(idx));
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(ContentError::DuplicateFaqKey(entry.key.clone()));
            }
        }
        if let Some(default) = &self.faq.default_key {
            if !seen.contains(default.as_str()) {
                return Err(ContentError::UnknownFaqDefault(default.clone()));
            }
        }

        for (idx, tier) in self.pricing.tiers.iter().enumerate() {
            if tier.name.trim().is_empty() || tier.price.trim().is_empty() {
                return Err(ContentError::IncompleteTier(idx));
            }
        }
        Ok(())
    }

    pub fn faq_keys(&self) -> Vec<String> {
        self.faq.entries.iter().map(|e| e.key.clone()).collect()
    }
}

/// Parse and validate site content from TOML source.
pub fn load_site_content(src: &str) -> anyhow::Result<SiteContent> {
    let content: SiteContent = toml::from_str(src)?;
    content.validate()?;
    Ok(content)
}

/// Content bundled with the build.
pub fn default_site_content() -> anyhow::Result<SiteContent> {
    load_site_content(DEFAULT_SITE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::section::SectionId;

    #[test]
    fn test_default_site_loads() {
        let site = default_site_content();
        assert!(site.is_ok(), "{:?}", site.err());
        let site = site.unwrap();
        assert_eq!(site.brand.name, "TravelPorter");
        assert_eq!(site.features.items.len(), 6);
        assert_eq!(site.phases.len(), 3);
        assert_eq!(site.marquee.len(), 2);
        assert_eq!(site.hero.stats.len(), 3);
    }

    #[test]
    fn test_default_faq_matches_tab_keys() {
        let site = default_site_content().unwrap();
        assert_eq!(site.faq_keys(), vec!["one", "two", "three", "four"]);
        assert_eq!(site.faq.default_key.as_deref(), Some("one"));
    }

    #[test]
    fn test_tier_defaults() {
        let site = default_site_content().unwrap();
        let tiers = &site.pricing.tiers;
        assert_eq!(tiers.len(), 3);
        assert!(tiers.iter().all(|t| t.cta == "Join the Beta"));
        assert!(!tiers[2].popular);
        assert_eq!(tiers[1].period_suffix(), "/mo");
    }

    #[test]
    fn test_footer_links_resolve_sections() {
        let site = default_site_content().unwrap();
        let product = &site.footer.columns[0];
        assert_eq!(product.links[0].section, Some(SectionId::Features));
        let legal = &site.footer.columns[2];
        assert!(legal.links.iter().all(|l| l.section.is_none()));
    }

    #[test]
    fn test_duplicate_faq_key_rejected() {
        let mut site = default_site_content().unwrap();
        site.faq.entries[1].key = "one".to_string();
        assert_eq!(
            site.validate(),
            Err(ContentError::DuplicateFaqKey("one".to_string()))
        );
    }

    #[test]
    fn test_unknown_faq_default_rejected() {
        let mut site = default_site_content().unwrap();
        site.faq.default_key = Some("five".to_string());
        assert_eq!(
            site.validate(),
            Err(ContentError::UnknownFaqDefault("five".to_string()))
        );

        site.faq.default_key = None;
        assert!(site.validate().is_ok());
    }

    #[test]
    fn test_empty_faq_is_valid() {
        let mut site = default_site_content().unwrap();
        site.faq.entries.clear();
        site.faq.default_key = None;
        assert!(site.validate().is_ok());
        assert!(site.faq_keys().is_empty());
    }

    #[test]
    fn test_incomplete_tier_rejected() {
        let mut site = default_site_content().unwrap();
        site.pricing.tiers[0].price = "  ".to_string();
        assert_eq!(site.validate(), Err(ContentError::IncompleteTier(0)));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(load_site_content("[brand\nname = 1").is_err());
        assert!(load_site_content("[brand]\nname = \"x\"").is_err());
    }
}
