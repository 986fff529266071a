//! DOM-free building blocks shared by the landing frontend.

pub mod site;
pub mod tabs;
