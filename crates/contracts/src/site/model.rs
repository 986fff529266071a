use super::section::SectionId;
use serde::{Deserialize, Serialize};

/// All copy shown on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub hero: Hero,
    pub social: Social,
    pub features: Features,
    pub phases: Vec<Phase>,
    pub marquee: Vec<Marquee>,
    pub integrations: Integrations,
    pub pricing: Pricing,
    pub security: Security,
    pub cta: Cta,
    pub faq: Faq,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub beta_label: String,
    pub join_label: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    /// Trailing part of the headline rendered in the accent color.
    pub highlight: String,
    pub body: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub stats: Vec<Stat>,
    pub phone: PhoneMock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneMock {
    pub title: String,
    pub badge: String,
    pub prompt: String,
    pub columns: Vec<PhoneColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneColumn {
    pub title: String,
    pub items: Vec<IconItem>,
}

/// A line of text with a leading icon name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconItem {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub lead: String,
    pub partners: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub body: String,
}

/// One stage of the trip in the "how it works" section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub title: String,
    pub summary: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marquee {
    pub badge: String,
    pub badge_icon: String,
    #[serde(default)]
    pub badge_variant: Option<String>,
    pub title: String,
    pub body: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integrations {
    pub title: String,
    pub items: Vec<String>,
    pub stack_title: String,
    pub stack: Vec<LabeledText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledText {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub title: String,
    pub subtitle: String,
    pub tiers: Vec<Tier>,
}

fn default_tier_cta() -> String {
    "Join the Beta".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    pub price: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default = "default_tier_cta")]
    pub cta: String,
    #[serde(default)]
    pub popular: bool,
}

impl Tier {
    /// "/mo", "/forever"
    pub fn period_suffix(&self) -> String {
        format!("/{}", self.period)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Security {
    pub title: String,
    pub body: String,
    pub points: Vec<IconItem>,
    pub notes_title: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    pub title: String,
    pub body: String,
    pub email_placeholder: String,
    pub submit_label: String,
    pub disclaimer: String,
    pub partners_title: String,
    pub partners_body: String,
    pub contact_label: String,
    pub deck_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub default_key: Option<String>,
    pub entries: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub key: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub title: String,
    pub body: String,
    pub submit_label: String,
    pub model_title: String,
    pub model: Vec<LabeledText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub columns: Vec<FooterColumn>,
    /// Text after "© <year> <brand>."
    pub rights: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<FooterLink>,
}

/// Footer entry; entries without a section render as plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    #[serde(default)]
    pub section: Option<SectionId>,
}
