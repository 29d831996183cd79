//! Printable trail signs for a mountain-bike network.
//!
//! Sign data ([`SignData`]) is laid out into a fixed-size vector
//! [`Document`] by one of four pure layout engines, then serialised by a
//! backend (SVG here; the CLI rasterises that to PNG).
//!
//! ```
//! use trailsign::{SignData, render_sign_svg, render::RenderOptions};
//!
//! let svg = render_sign_svg(&SignData::default(), &RenderOptions::default()).unwrap();
//! assert!(svg.svg.contains(r#"width="240mm""#));
//! ```

pub mod document;
pub mod errors;
pub mod filename;
pub mod icons;
pub mod layout;
pub mod log;
pub mod logos;
pub mod model;
pub mod palette;
pub mod render;
pub mod state;
pub mod types;

pub use document::{Document, Element, Node, Page};
pub use errors::{RenderError, StateError, ValidationError};
pub use filename::download_filename;
pub use layout::layout;
pub use model::{
    Direction, HardEasyPost, PostWord, SignData, SignType, SmallBackground, SmallWayfindingSign, WarningPost,
    WarningSymbol, WayfindingSign,
};
pub use render::{RenderOptions, SvgOutput};
pub use state::{StatePort, StoredState};

/// Lay out a sign and render it to SVG.
pub fn render_sign_svg(sign: &SignData, options: &RenderOptions) -> Result<SvgOutput, RenderError> {
    render::render_svg(&layout(sign), options)
}

/// Parse sign JSON, lay it out and render it to SVG.
///
/// Errors carry the source text for display with miette.
pub fn render_sign_json(json: &str, name: &str, options: &RenderOptions) -> Result<SvgOutput, miette::Report> {
    let sign = state::parse_sign_json(json, name)?;
    Ok(render_sign_svg(&sign, options)?)
}
