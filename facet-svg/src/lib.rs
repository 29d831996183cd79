//! Facet-derived types for the SVG that trail signs are written as.
//!
//! Only the elements a sign uses are modelled. Serialisation goes through
//! `facet-xml`, which handles escaping of text and attribute values.
//!
//! # Example
//!
//! ```rust
//! use facet_svg::{Rect, SVG_NS, Svg, SvgNode};
//!
//! let svg = Svg {
//!     xmlns: Some(SVG_NS.to_string()),
//!     width: Some("10mm".to_string()),
//!     children: vec![SvgNode::Rect(Rect {
//!         width: Some(4.0),
//!         height: Some(4.0),
//!         fill: Some("#FFFFFF".to_string()),
//!         ..Default::default()
//!     })],
//!     ..Default::default()
//! };
//! let xml = facet_svg::facet_xml::to_string(&svg).unwrap();
//! assert!(xml.contains("<rect"));
//! ```

use facet::Facet;
use facet_xml as xml;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(rename = "svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any element a sign can contain
#[derive(Facet, Debug, Clone)]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "title")]
    Title(Title),
    #[facet(rename = "g")]
    G(Group),
    #[facet(rename = "rect")]
    Rect(Rect),
    #[facet(rename = "circle")]
    Circle(Circle),
    #[facet(rename = "path")]
    Path(Path),
    #[facet(rename = "text")]
    Text(Text),
    #[facet(rename = "image")]
    Image(Image),
}

/// Document title (`<title>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Title {
    #[facet(xml::text)]
    pub content: String,
}

/// SVG group element (`<g>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Group {
    #[facet(xml::attribute)]
    pub transform: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// SVG rect element (`<rect>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Rect {
    #[facet(xml::attribute)]
    pub x: Option<f64>,
    #[facet(xml::attribute)]
    pub y: Option<f64>,
    #[facet(xml::attribute)]
    pub width: Option<f64>,
    #[facet(xml::attribute)]
    pub height: Option<f64>,
    #[facet(xml::attribute)]
    pub rx: Option<f64>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<f64>,
}

/// SVG circle element (`<circle>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Circle {
    #[facet(xml::attribute)]
    pub cx: Option<f64>,
    #[facet(xml::attribute)]
    pub cy: Option<f64>,
    #[facet(xml::attribute)]
    pub r: Option<f64>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<f64>,
}

/// SVG path element (`<path>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Path {
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-rule")]
    pub fill_rule: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<f64>,
    #[facet(xml::attribute, rename = "stroke-linecap")]
    pub stroke_linecap: Option<String>,
}

/// SVG text element (`<text>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Text {
    #[facet(xml::attribute)]
    pub x: Option<f64>,
    #[facet(xml::attribute)]
    pub y: Option<f64>,
    #[facet(xml::attribute, rename = "font-family")]
    pub font_family: Option<String>,
    #[facet(xml::attribute, rename = "font-weight")]
    pub font_weight: Option<String>,
    #[facet(xml::attribute, rename = "font-size")]
    pub font_size: Option<f64>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "text-anchor")]
    pub text_anchor: Option<String>,
    #[facet(xml::attribute, rename = "letter-spacing")]
    pub letter_spacing: Option<f64>,
    #[facet(xml::attribute, rename = "xml:space")]
    pub xml_space: Option<String>,
    #[facet(xml::text)]
    pub content: String,
}

/// SVG image element (`<image>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Image {
    #[facet(xml::attribute)]
    pub x: Option<f64>,
    #[facet(xml::attribute)]
    pub y: Option<f64>,
    #[facet(xml::attribute)]
    pub width: Option<f64>,
    #[facet(xml::attribute)]
    pub height: Option<f64>,
    #[facet(xml::attribute, rename = "preserveAspectRatio")]
    pub preserve_aspect_ratio: Option<String>,
    #[facet(xml::attribute)]
    pub href: Option<String>,
}

// Re-export facet_xml for convenience
pub use facet_xml;
