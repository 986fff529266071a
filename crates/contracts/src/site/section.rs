use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section id: {0}")]
pub struct UnknownSection(pub String);

/// Anchor targets of the landing page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Social,
    Features,
    How,
    Copilot,
    Integrations,
    Pricing,
    Security,
    Cta,
    Faq,
    Contact,
    Footer,
}

impl SectionId {
    /// Entries of the header navigation (desktop and mobile), in order.
    pub const NAV: [SectionId; 6] = [
        SectionId::Features,
        SectionId::How,
        SectionId::Integrations,
        SectionId::Pricing,
        SectionId::Security,
        SectionId::Contact,
    ];

    pub fn all() -> [SectionId; 12] {
        [
            SectionId::Hero,
            SectionId::Social,
            SectionId::Features,
            SectionId::How,
            SectionId::Copilot,
            SectionId::Integrations,
            SectionId::Pricing,
            SectionId::Security,
            SectionId::Cta,
            SectionId::Faq,
            SectionId::Contact,
            SectionId::Footer,
        ]
    }

    /// DOM id of the section element.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Social => "social",
            SectionId::Features => "features",
            SectionId::How => "how",
            SectionId::Copilot => "copilot",
            SectionId::Integrations => "integrations",
            SectionId::Pricing => "pricing",
            SectionId::Security => "security",
            SectionId::Cta => "cta",
            SectionId::Faq => "faq",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
        }
    }

    /// `href` value pointing at the section.
    pub fn anchor(&self) -> String {
        format!("#{}", self.as_str())
    }

    /// Label used in navigation menus.
    pub fn nav_label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Social => "Partners",
            SectionId::Features => "Features",
            SectionId::How => "How it works",
            SectionId::Copilot => "Copilot",
            SectionId::Integrations => "Integrations",
            SectionId::Pricing => "Pricing",
            SectionId::Security => "Security",
            SectionId::Cta => "Early access",
            SectionId::Faq => "FAQ",
            SectionId::Contact => "Contact",
            SectionId::Footer => "Footer",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim_start_matches('#');
        SectionId::all()
            .into_iter()
            .find(|section| section.as_str() == id)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_order_and_labels() {
        let labels: Vec<_> = SectionId::NAV.iter().map(|s| s.nav_label()).collect();
        assert_eq!(
            labels,
            vec![
                "Features",
                "How it works",
                "Integrations",
                "Pricing",
                "Security",
                "Contact"
            ]
        );
    }

    #[test]
    fn test_parse_accepts_hash_prefix() {
        assert_eq!("how".parse::<SectionId>(), Ok(SectionId::How));
        assert_eq!("#cta".parse::<SectionId>(), Ok(SectionId::Cta));
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn test_ids_match_serde_names() {
        for section in SectionId::all() {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.as_str()));
            assert_eq!(section.anchor(), format!("#{}", section));
        }
    }
}
