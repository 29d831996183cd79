//! Vector document tree handed to a rendering engine.
//!
//! A [`Document`] is one fixed-size page plus a flat-ish list of drawing
//! primitives in page coordinates (points, origin top-left, y down). Later
//! nodes paint over earlier ones. Nothing here knows about any particular
//! output format; backends match over [`Node`].

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::icons::Icon;
use crate::types::{Angle, Color, Frame, Mm, Pt};

/// Common behaviour for all drawable nodes
#[enum_dispatch]
pub trait Element {
    /// Short name used in diagnostics
    fn kind(&self) -> &'static str;

    /// Untransformed extent in page coordinates
    fn bounds(&self) -> Frame;

    /// Nested nodes (groups only)
    fn children(&self) -> &[Node] {
        &[]
    }
}

/// Any drawable node.
#[enum_dispatch(Element)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Rect(RectNode),
    Circle(CircleNode),
    Text(TextNode),
    Icon(IconNode),
    Image(ImageNode),
    Group(GroupNode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Physical page declaration.
///
/// Sizes are declared the way the print shop quotes them; landscape pages
/// swap width and height when laid out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Page {
    pub width_mm: Mm,
    pub height_mm: Mm,
    pub orientation: Orientation,
}

impl Page {
    pub fn portrait(width_mm: f64, height_mm: f64) -> Self {
        Page {
            width_mm: Mm(width_mm),
            height_mm: Mm(height_mm),
            orientation: Orientation::Portrait,
        }
    }

    pub fn landscape(width_mm: f64, height_mm: f64) -> Self {
        Page {
            width_mm: Mm(width_mm),
            height_mm: Mm(height_mm),
            orientation: Orientation::Landscape,
        }
    }

    /// Laid-out size in millimetres (orientation applied)
    pub fn oriented_mm(&self) -> (Mm, Mm) {
        match self.orientation {
            Orientation::Portrait => (self.width_mm, self.height_mm),
            Orientation::Landscape => (self.height_mm, self.width_mm),
        }
    }

    pub fn width(&self) -> Pt {
        self.oriented_mm().0.to_pt()
    }

    pub fn height(&self) -> Pt {
        self.oriented_mm().1.to_pt()
    }

    pub fn frame(&self) -> Frame {
        Frame::new(Pt::ZERO, Pt::ZERO, self.width(), self.height())
    }
}

/// Outline paint
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: Pt,
}

impl Stroke {
    pub fn new(color: Color, width: Pt) -> Self {
        Stroke { color, width }
    }
}

/// Filled and/or outlined rectangle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectNode {
    pub frame: Frame,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    pub corner_radius: Pt,
}

impl RectNode {
    pub fn filled(frame: Frame, fill: Color) -> Self {
        RectNode {
            frame,
            fill: Some(fill),
            stroke: None,
            corner_radius: Pt::ZERO,
        }
    }

    pub fn outlined(frame: Frame, stroke: Stroke, corner_radius: Pt) -> Self {
        RectNode {
            frame,
            fill: None,
            stroke: Some(stroke),
            corner_radius,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleNode {
    pub cx: Pt,
    pub cy: Pt,
    pub r: Pt,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Font {
    OpenSansBold,
    OpenSansSemiBold,
    OverpassBold,
}

impl Font {
    pub fn family(self) -> &'static str {
        match self {
            Font::OpenSansBold | Font::OpenSansSemiBold => "Open Sans",
            Font::OverpassBold => "Overpass",
        }
    }

    pub fn weight(self) -> u16 {
        match self {
            Font::OpenSansBold | Font::OverpassBold => 700,
            Font::OpenSansSemiBold => 600,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// One line of text. Multi-line blocks are emitted as one node per line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextNode {
    pub content: String,
    /// Anchor point x (see `anchor`)
    pub x: Pt,
    /// Alphabetic baseline
    pub baseline: Pt,
    /// Top of the line box this line was laid out in
    pub top: Pt,
    pub font: Font,
    pub size: Pt,
    /// Line box height as a multiple of `size`
    pub line_height: f64,
    pub color: Color,
    pub anchor: TextAnchor,
    pub letter_spacing: Pt,
    /// Estimated advance width, used for bounds
    pub width: Pt,
}

/// A glyph from the icon set, fitted into a square box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconNode {
    pub icon: Icon,
    pub frame: Frame,
    pub color: Color,
    /// Clockwise, about the frame centre
    pub rotation: Angle,
    /// Visual scale about the frame centre; does not change the frame
    pub scale: f64,
}

/// A raster image placed by resource reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageNode {
    pub href: String,
    pub frame: Frame,
    /// Catalog id when the image is a footer logo
    pub logo_id: Option<String>,
}

/// Rotation applied to a set of children
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rotation {
    pub angle: Angle,
    pub cx: Pt,
    pub cy: Pt,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupNode {
    pub rotation: Option<Rotation>,
    pub children: Vec<Node>,
}

impl Element for RectNode {
    fn kind(&self) -> &'static str {
        "rect"
    }

    fn bounds(&self) -> Frame {
        self.frame
    }
}

impl Element for CircleNode {
    fn kind(&self) -> &'static str {
        "circle"
    }

    fn bounds(&self) -> Frame {
        Frame::new(self.cx - self.r, self.cy - self.r, self.r * 2.0, self.r * 2.0)
    }
}

impl Element for TextNode {
    fn kind(&self) -> &'static str {
        "text"
    }

    fn bounds(&self) -> Frame {
        let left = match self.anchor {
            TextAnchor::Start => self.x,
            TextAnchor::Middle => self.x - self.width / 2.0,
            TextAnchor::End => self.x - self.width,
        };
        Frame::new(left, self.top, self.width, self.size * self.line_height)
    }
}

impl Element for IconNode {
    fn kind(&self) -> &'static str {
        "icon"
    }

    fn bounds(&self) -> Frame {
        self.frame
    }
}

impl Element for ImageNode {
    fn kind(&self) -> &'static str {
        "image"
    }

    fn bounds(&self) -> Frame {
        self.frame
    }
}

impl Element for GroupNode {
    fn kind(&self) -> &'static str {
        "group"
    }

    fn bounds(&self) -> Frame {
        let mut iter = self.children.iter().map(Element::bounds);
        let Some(first) = iter.next() else {
            return Frame::default();
        };
        iter.fold(first, |acc, b| {
            let x = acc.x.min(b.x);
            let y = acc.y.min(b.y);
            Frame::new(x, y, acc.right().max(b.right()) - x, acc.bottom().max(b.bottom()) - y)
        })
    }

    fn children(&self) -> &[Node] {
        &self.children
    }
}

/// A complete single-page sign
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    pub page: Page,
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(title: impl Into<String>, page: Page) -> Self {
        Document {
            title: title.into(),
            page,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.nodes.extend(nodes);
    }

    /// Every node, depth first, in paint order
    pub fn walk(&self) -> Vec<&Node> {
        fn visit<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
            for node in nodes {
                out.push(node);
                visit(node.children(), out);
            }
        }
        let mut out = Vec::new();
        visit(&self.nodes, &mut out);
        out
    }

    pub fn texts(&self) -> Vec<&TextNode> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn icons(&self) -> Vec<&IconNode> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Icon(icon) => Some(icon),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<&ImageNode> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Image(image) => Some(image),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<&RectNode> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Rect(rect) => Some(rect),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<&CircleNode> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Circle(circle) => Some(circle),
                _ => None,
            })
            .collect()
    }

    /// Text content of every line, in paint order
    pub fn text_lines(&self) -> Vec<&str> {
        self.texts().into_iter().map(|t| t.content.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_swaps_declared_size() {
        let page = Page::landscape(80.0, 240.0);
        assert_eq!(page.oriented_mm(), (Mm(240.0), Mm(80.0)));
        assert!(page.width() > page.height());
        let portrait = Page::portrait(115.0, 900.0);
        assert!(portrait.width() < portrait.height());
    }

    #[test]
    fn walk_descends_into_groups() {
        let mut doc = Document::new("t", Page::portrait(100.0, 100.0));
        doc.push(RectNode::filled(Frame::default(), Color::WHITE));
        doc.push(GroupNode {
            rotation: None,
            children: vec![Node::Circle(CircleNode {
                cx: Pt(1.0),
                cy: Pt(1.0),
                r: Pt(1.0),
                fill: None,
                stroke: None,
            })],
        });
        let kinds: Vec<_> = doc.walk().iter().map(|n| n.kind()).collect();
        assert_eq!(kinds, ["rect", "group", "circle"]);
        assert_eq!(doc.circles().len(), 1);
    }

    #[test]
    fn group_bounds_cover_children() {
        let group = GroupNode {
            rotation: None,
            children: vec![
                Node::Rect(RectNode::filled(Frame::new(Pt(10.0), Pt(10.0), Pt(5.0), Pt(5.0)), Color::WHITE)),
                Node::Rect(RectNode::filled(Frame::new(Pt(0.0), Pt(20.0), Pt(5.0), Pt(5.0)), Color::WHITE)),
            ],
        };
        assert_eq!(group.bounds(), Frame::new(Pt(0.0), Pt(10.0), Pt(15.0), Pt(15.0)));
    }

    #[test]
    fn document_serialises_with_node_kind_tags() {
        let mut doc = Document::new("t", Page::portrait(10.0, 20.0));
        doc.push(RectNode::filled(Frame::default(), Color::hex(0x47ACEC)));
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["nodes"][0]["kind"], "rect");
        assert_eq!(json["nodes"][0]["fill"], "#47ACEC");
        assert_eq!(json["page"]["orientation"], "portrait");
    }
}
