//! SVG generation
//!
//! The root element carries the physical page size in millimetres and a
//! `viewBox` in points, so one user unit is one point and every layout
//! coordinate is written as-is.

use facet_svg::facet_xml::{self, SerializeOptions};
use facet_svg::{Circle, Group, Image, Path, Rect, SVG_NS, Svg, SvgNode, Text, Title};

use super::assets::{AssetSource, resolve_image};
use crate::document::{
    CircleNode, Document, Element, GroupNode, IconNode, ImageNode, Node, RectNode, Stroke, TextAnchor, TextNode,
};
use crate::errors::RenderError;
use crate::icons::IconPaint;
use crate::log::{debug, warn};
use crate::types::{Color, Frame, Pt};

/// Finished SVG plus the image references that had to be left out
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOutput {
    pub svg: String,
    pub skipped_images: Vec<String>,
}

/// Serialise a document to a standalone SVG file.
pub fn generate_svg(doc: &Document, assets: &dyn AssetSource) -> Result<SvgOutput, RenderError> {
    let (root, skipped_images) = build_svg(doc, assets)?;

    fn format_float(value: f64, writer: &mut dyn std::io::Write) -> Result<(), std::io::Error> {
        write!(writer, "{}", num(value))
    }

    let options = SerializeOptions {
        float_formatter: Some(format_float),
        ..Default::default()
    };
    let mut svg = facet_xml::to_string_with_options(&root, &options)
        .map_err(|e| RenderError::Serialise { message: e.to_string() })?;
    if !svg.ends_with('\n') {
        svg.push('\n');
    }

    debug!(
        nodes = doc.nodes.len(),
        bytes = svg.len(),
        skipped = skipped_images.len(),
        "svg generated"
    );
    Ok(SvgOutput { svg, skipped_images })
}

/// Build the SVG element tree for a document
fn build_svg(doc: &Document, assets: &dyn AssetSource) -> Result<(Svg, Vec<String>), RenderError> {
    let (width, height) = (doc.page.width(), doc.page.height());
    if !(width.raw().is_finite() && height.raw().is_finite()) || width <= Pt::ZERO || height <= Pt::ZERO {
        return Err(RenderError::InvalidPage {
            width: width.raw(),
            height: height.raw(),
        });
    }
    let (width_mm, height_mm) = doc.page.oriented_mm();

    let mut builder = SvgBuilder {
        assets,
        skipped: Vec::new(),
    };
    let mut children = vec![SvgNode::Title(Title {
        content: doc.title.clone(),
    })];
    children.extend(builder.nodes(&doc.nodes)?);

    let svg = Svg {
        xmlns: Some(SVG_NS.to_string()),
        width: Some(format!("{}mm", num(width_mm.0))),
        height: Some(format!("{}mm", num(height_mm.0))),
        view_box: Some(format!("0 0 {} {}", pt(width), pt(height))),
        children,
    };
    Ok((svg, builder.skipped))
}

/// Walks the document, collecting image references that could not be embedded
struct SvgBuilder<'a> {
    assets: &'a dyn AssetSource,
    skipped: Vec<String>,
}

impl SvgBuilder<'_> {
    fn nodes(&mut self, nodes: &[Node]) -> Result<Vec<SvgNode>, RenderError> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            out.extend(self.node(node)?);
        }
        Ok(out)
    }

    fn node(&mut self, node: &Node) -> Result<Option<SvgNode>, RenderError> {
        let element = match node {
            Node::Rect(rect) => SvgNode::Rect(rect_element(rect)?),
            Node::Circle(circle) => SvgNode::Circle(circle_element(circle)?),
            Node::Text(text) => SvgNode::Text(text_element(text)?),
            Node::Icon(icon) => SvgNode::G(icon_element(icon)?),
            Node::Image(image) => return Ok(self.image(image)?.map(SvgNode::Image)),
            Node::Group(group) => SvgNode::G(self.group(group)?),
        };
        Ok(Some(element))
    }

    /// Embeds the image; a reference that cannot be resolved is skipped
    /// with a warning and the rest of the page still renders.
    fn image(&mut self, image: &ImageNode) -> Result<Option<Image>, RenderError> {
        check_frame("image", &image.frame)?;
        let href = match resolve_image(&image.href, self.assets) {
            Ok(url) => url,
            Err(err) => {
                warn!(href = %image.href, error = %err, "skipping image");
                self.skipped.push(image.href.clone());
                return Ok(None);
            }
        };
        let f = image.frame;
        Ok(Some(Image {
            x: Some(f.x.raw()),
            y: Some(f.y.raw()),
            width: Some(f.width.raw()),
            height: Some(f.height.raw()),
            preserve_aspect_ratio: Some("xMidYMid meet".to_string()),
            href: Some(href),
        }))
    }

    fn group(&mut self, group: &GroupNode) -> Result<Group, RenderError> {
        let transform = match group.rotation {
            Some(r) => {
                if !(r.cx.raw().is_finite() && r.cy.raw().is_finite() && r.angle.degrees().is_finite()) {
                    return Err(RenderError::InvalidGeometry { node: "group" });
                }
                Some(format!("rotate({} {} {})", num(r.angle.degrees()), pt(r.cx), pt(r.cy)))
            }
            None => None,
        };
        Ok(Group {
            transform,
            children: self.nodes(&group.children)?,
        })
    }
}

fn rect_element(rect: &RectNode) -> Result<Rect, RenderError> {
    check_frame("rect", &rect.frame)?;
    let f = rect.frame;
    let (fill, stroke, stroke_width) = paint(rect.fill, rect.stroke);
    Ok(Rect {
        x: Some(f.x.raw()),
        y: Some(f.y.raw()),
        width: Some(f.width.raw()),
        height: Some(f.height.raw()),
        rx: (rect.corner_radius > Pt::ZERO).then(|| rect.corner_radius.raw()),
        fill,
        stroke,
        stroke_width,
    })
}

fn circle_element(circle: &CircleNode) -> Result<Circle, RenderError> {
    check_frame("circle", &circle.bounds())?;
    let (fill, stroke, stroke_width) = paint(circle.fill, circle.stroke);
    Ok(Circle {
        cx: Some(circle.cx.raw()),
        cy: Some(circle.cy.raw()),
        r: Some(circle.r.raw()),
        fill,
        stroke,
        stroke_width,
    })
}

fn text_element(text: &TextNode) -> Result<Text, RenderError> {
    check_frame("text", &text.bounds())?;
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let padded = text.content.starts_with(' ') || text.content.ends_with(' ');
    Ok(Text {
        x: Some(text.x.raw()),
        y: Some(text.baseline.raw()),
        font_family: Some(text.font.family().to_string()),
        font_weight: Some(text.font.weight().to_string()),
        font_size: Some(text.size.raw()),
        fill: Some(text.color.to_string()),
        text_anchor: Some(anchor.to_string()),
        letter_spacing: (text.letter_spacing != Pt::ZERO).then(|| text.letter_spacing.raw()),
        xml_space: padded.then(|| "preserve".to_string()),
        content: text.content.clone(),
    })
}

/// Icons become a group that maps the icon's view box onto its frame.
fn icon_element(icon: &IconNode) -> Result<Group, RenderError> {
    check_frame("icon", &icon.frame)?;
    let f = icon.frame;
    let side = f.width.min(f.height);
    let half = num(side.raw() / 2.0);

    let mut transform = vec![format!("translate({} {})", pt(f.x), pt(f.y))];
    if !icon.rotation.is_zero() {
        transform.push(format!("rotate({} {half} {half})", num(icon.rotation.degrees())));
    }
    if icon.scale != 1.0 {
        transform.push(format!(
            "translate({half} {half}) scale({}) translate(-{half} -{half})",
            num(icon.scale)
        ));
    }
    transform.push(format!("scale({})", num(side.raw() / icon.icon.view_box())));

    let color = icon.color.to_string();
    let children = icon
        .icon
        .paths()
        .iter()
        .map(|path| {
            let element = match path.paint {
                IconPaint::Fill { even_odd } => Path {
                    d: Some(path.d.to_string()),
                    fill: Some(color.clone()),
                    fill_rule: even_odd.then(|| "evenodd".to_string()),
                    ..Default::default()
                },
                IconPaint::Stroke { width, cap } => Path {
                    d: Some(path.d.to_string()),
                    fill: Some("none".to_string()),
                    stroke: Some(color.clone()),
                    stroke_width: Some(width),
                    stroke_linecap: Some(cap.as_str().to_string()),
                    ..Default::default()
                },
            };
            SvgNode::Path(element)
        })
        .collect();

    Ok(Group {
        transform: Some(transform.join(" ")),
        children,
    })
}

/// `fill`, `stroke` and `stroke-width`; an unfilled shape is written `fill="none"`
fn paint(fill: Option<Color>, stroke: Option<Stroke>) -> (Option<String>, Option<String>, Option<f64>) {
    let fill = Some(fill.map_or_else(|| "none".to_string(), |color| color.to_string()));
    match stroke {
        Some(stroke) => (fill, Some(stroke.color.to_string()), Some(stroke.width.raw())),
        None => (fill, None, None),
    }
}

fn check_frame(node: &'static str, frame: &Frame) -> Result<(), RenderError> {
    let finite = [frame.x, frame.y, frame.width, frame.height]
        .iter()
        .all(|v| v.raw().is_finite());
    if finite {
        Ok(())
    } else {
        Err(RenderError::InvalidGeometry { node })
    }
}

fn pt(value: Pt) -> String {
    num(value.raw())
}

/// Six significant figures, trailing zeros trimmed.
fn num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Font, Page, Rotation};
    use crate::icons::Icon;
    use crate::render::assets::NoAssets;
    use crate::types::Angle;

    fn render(doc: &Document) -> SvgOutput {
        generate_svg(doc, &NoAssets).unwrap()
    }

    fn build(doc: &Document) -> Vec<SvgNode> {
        build_svg(doc, &NoAssets).unwrap().0.children
    }

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(0.0), "0");
        assert_eq!(num(40.0), "40");
        assert_eq!(num(680.3149606), "680.315");
        assert_eq!(num(-1.5), "-1.5");
        assert_eq!(num(1200.0), "1200");
    }

    #[test]
    fn root_carries_millimetres_and_points() {
        let doc = Document::new("Te Piki", Page::landscape(80.0, 240.0));
        let (svg, _) = build_svg(&doc, &NoAssets).unwrap();
        assert_eq!(svg.xmlns.as_deref(), Some(SVG_NS));
        assert_eq!(svg.width.as_deref(), Some("240mm"));
        assert_eq!(svg.height.as_deref(), Some("80mm"));
        assert_eq!(svg.view_box.as_deref(), Some("0 0 680.315 226.772"));

        let out = render(&doc).svg;
        assert!(out.contains(r#"width="240mm""#), "{out}");
        assert!(out.contains(r#"viewBox="0 0 680.315 226.772""#), "{out}");
        assert!(out.contains("Te Piki"));
        assert!(out.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_is_escaped() {
        let mut doc = Document::new("a & b", Page::portrait(10.0, 10.0));
        doc.push(TextNode {
            content: "<Tom & Jerry's>".to_string(),
            x: Pt(1.0),
            baseline: Pt(2.0),
            top: Pt(0.0),
            font: Font::OverpassBold,
            size: Pt(12.0),
            line_height: 1.0,
            color: Color::WHITE,
            anchor: TextAnchor::Middle,
            letter_spacing: Pt::ZERO,
            width: Pt(10.0),
        });
        let svg = render(&doc).svg;
        assert!(svg.contains("a &amp; b"), "{svg}");
        assert!(svg.contains("&lt;Tom &amp; Jerry"), "{svg}");
        assert!(!svg.contains("<Tom"));
        for attr in [
            r#"font-family="Overpass""#,
            r#"font-weight="700""#,
            r#"font-size="12""#,
            r##"fill="#FFFFFF""##,
            r#"text-anchor="middle""#,
        ] {
            assert!(svg.contains(attr), "{attr} missing from {svg}");
        }
        assert!(!svg.contains("letter-spacing"));
    }

    #[test]
    fn icon_maps_view_box_onto_frame() {
        let mut doc = Document::new("t", Page::portrait(100.0, 100.0));
        doc.push(IconNode {
            icon: Icon::Arrow,
            frame: Frame::new(Pt(10.0), Pt(20.0), Pt(50.0), Pt(50.0)),
            color: Color::hex(0x1538A6),
            rotation: Angle(90.0),
            scale: 1.0,
        });
        let children = build(&doc);
        let SvgNode::G(group) = &children[1] else {
            panic!("expected a group, got {:?}", children[1]);
        };
        assert_eq!(group.transform.as_deref(), Some("translate(10 20) rotate(90 25 25) scale(0.5)"));
        let SvgNode::Path(shaft) = &group.children[0] else {
            panic!("expected a path");
        };
        assert_eq!(shaft.d.as_deref(), Some("M 50 12 L 50 112"));
        assert_eq!(shaft.fill.as_deref(), Some("none"));
        assert_eq!(shaft.stroke.as_deref(), Some("#1538A6"));
        assert_eq!(shaft.stroke_width, Some(16.0));
        assert_eq!(shaft.stroke_linecap.as_deref(), Some("butt"));
    }

    #[test]
    fn rotated_group_wraps_children() {
        let mut doc = Document::new("t", Page::portrait(100.0, 100.0));
        doc.push(GroupNode {
            rotation: Some(Rotation {
                angle: Angle(90.0),
                cx: Pt(5.0),
                cy: Pt(6.0),
            }),
            children: vec![Node::Rect(RectNode::filled(
                Frame::new(Pt(0.0), Pt(0.0), Pt(10.0), Pt(12.0)),
                Color::hex(0xC63823),
            ))],
        });
        let children = build(&doc);
        let SvgNode::G(group) = &children[1] else {
            panic!("expected a group");
        };
        assert_eq!(group.transform.as_deref(), Some("rotate(90 5 6)"));
        let [SvgNode::Rect(rect)] = group.children.as_slice() else {
            panic!("expected one rect, got {:?}", group.children);
        };
        assert_eq!((rect.width, rect.height), (Some(10.0), Some(12.0)));
        assert_eq!(rect.fill.as_deref(), Some("#C63823"));
        assert_eq!(rect.rx, None);
    }

    #[test]
    fn outlined_rect_has_no_fill() {
        let mut doc = Document::new("t", Page::portrait(100.0, 100.0));
        doc.push(RectNode::outlined(
            Frame::new(Pt(1.0), Pt(1.0), Pt(50.0), Pt(50.0)),
            Stroke::new(Color::BLACK, Pt(0.5)),
            Pt(4.0),
        ));
        let children = build(&doc);
        let SvgNode::Rect(rect) = &children[1] else {
            panic!("expected a rect");
        };
        assert_eq!(rect.fill.as_deref(), Some("none"));
        assert_eq!(rect.stroke.as_deref(), Some("#000000"));
        assert_eq!(rect.stroke_width, Some(0.5));
        assert_eq!(rect.rx, Some(4.0));
    }

    #[test]
    fn unresolvable_image_is_skipped_not_fatal() {
        let mut doc = Document::new("t", Page::portrait(100.0, 100.0));
        doc.push(ImageNode {
            href: "logos/missing.png".to_string(),
            frame: Frame::new(Pt(0.0), Pt(0.0), Pt(10.0), Pt(10.0)),
            logo_id: None,
        });
        doc.push(RectNode::filled(Frame::new(Pt(0.0), Pt(0.0), Pt(1.0), Pt(1.0)), Color::WHITE));
        let out = render(&doc);
        assert_eq!(out.skipped_images, ["logos/missing.png"]);
        assert!(!out.svg.contains("<image"));
        assert!(out.svg.contains("<rect"));
    }

    #[test]
    fn forged_data_url_never_reaches_the_output() {
        let mut doc = Document::new("t", Page::portrait(100.0, 100.0));
        let forged = r#"data:image/png;base64,AAAA"/><script>alert(1)</script><x a=""#;
        doc.push(ImageNode {
            href: forged.to_string(),
            frame: Frame::new(Pt(0.0), Pt(0.0), Pt(10.0), Pt(10.0)),
            logo_id: None,
        });
        let out = render(&doc);
        assert_eq!(out.skipped_images, [forged]);
        assert!(!out.svg.contains("<script"), "{}", out.svg);
    }

    #[test]
    fn non_finite_geometry_is_an_error() {
        let mut doc = Document::new("t", Page::portrait(100.0, 100.0));
        doc.push(RectNode::filled(
            Frame::new(Pt(f64::NAN), Pt(0.0), Pt(1.0), Pt(1.0)),
            Color::WHITE,
        ));
        let err = generate_svg(&doc, &NoAssets).unwrap_err();
        assert!(matches!(err, RenderError::InvalidGeometry { node: "rect" }));
    }

    #[test]
    fn empty_page_is_an_error() {
        let doc = Document::new("t", Page::portrait(0.0, 100.0));
        assert!(matches!(
            generate_svg(&doc, &NoAssets),
            Err(RenderError::InvalidPage { .. })
        ));
    }
}
