//! Landing page content: section anchors, the copy model and its TOML source.

pub mod config;
pub mod model;
pub mod section;

pub use config::{default_site_content, load_site_content, ContentError};
pub use model::*;
pub use section::{SectionId, UnknownSection};
