//! Output backends for laid-out documents
//!
//! - `assets`: where logo images come from, and format sniffing
//! - `svg`: builds and serialises the SVG tree; PNG previews are rasterised from its output

pub mod assets;
pub mod svg;

pub use assets::{AssetSource, FsAssets, ImageFormat, NoAssets};
pub use svg::{SvgOutput, generate_svg};

use std::path::PathBuf;

use crate::document::Document;
use crate::errors::RenderError;

/// Runtime knobs for turning a document into output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Directory logo references resolve against; `None` leaves logos out
    pub asset_root: Option<PathBuf>,
    /// Raster resolution in dots per inch
    pub dpi: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            asset_root: None,
            dpi: 96.0,
        }
    }
}

impl RenderOptions {
    pub fn with_asset_root(self, root: impl Into<PathBuf>) -> Self {
        RenderOptions {
            asset_root: Some(root.into()),
            ..self
        }
    }

    pub fn with_dpi(self, dpi: f32) -> Self {
        RenderOptions { dpi, ..self }
    }

    pub fn assets(&self) -> Box<dyn AssetSource> {
        match &self.asset_root {
            Some(root) => Box::new(FsAssets::new(root.clone())),
            None => Box::new(NoAssets),
        }
    }
}

/// Render a document to SVG with the configured assets.
pub fn render_svg(doc: &Document, options: &RenderOptions) -> Result<SvgOutput, RenderError> {
    let assets = options.assets();
    generate_svg(doc, assets.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;
    use crate::model::SignData;

    #[test]
    fn without_assets_logos_are_skipped() {
        let doc = layout(&SignData::default());
        let out = render_svg(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(out.skipped_images.len(), doc.images().len());
        assert!(out.svg.contains("Te Piki wayfinding sign"));
    }

    #[test]
    fn asset_root_is_used() {
        let options = RenderOptions::default().with_asset_root("/srv/signs");
        assert_eq!(options.asset_root.as_deref(), Some(std::path::Path::new("/srv/signs")));
    }
}
