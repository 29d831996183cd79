//! Footer logo catalog.

use std::collections::BTreeMap;

/// One partner logo that may appear in a wayfinding sign footer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoDefinition {
    pub id: &'static str,
    pub name: &'static str,
    /// Resource reference, relative to the asset root
    pub image: &'static str,
    /// Width divided by height of the artwork
    pub aspect: f64,
}

/// Every logo the footer knows about, in display order.
pub const LOGOS: &[LogoDefinition] = &[
    LogoDefinition {
        id: "nmtbc",
        name: "Nelson Mountain Bike Club",
        image: "logos/nmtbc.png",
        aspect: 1.0,
    },
    LogoDefinition {
        id: "ncc",
        name: "Nelson City Council",
        image: "logos/ncc.png",
        aspect: 2.4,
    },
    LogoDefinition {
        id: "doc",
        name: "Department of Conservation",
        image: "logos/doc.png",
        aspect: 1.6,
    },
];

/// Whether a logo is shown; absent keys mean shown.
pub fn logo_enabled(toggles: &BTreeMap<String, bool>, id: &str) -> bool {
    toggles.get(id).copied().unwrap_or(true)
}

/// Logos to place, in catalog order
pub fn enabled_logos(toggles: &BTreeMap<String, bool>) -> impl Iterator<Item = &'static LogoDefinition> + '_ {
    LOGOS.iter().filter(move |logo| logo_enabled(toggles, logo.id))
}
