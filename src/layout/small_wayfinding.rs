//! Small wayfinding sign, 80 x 240 mm landscape.

use super::components::{CoordinateLayout, arrow_circle, location_coordinates};
use super::defaults::*;
use crate::document::{CircleNode, Document, Node, Page, RectNode, Stroke, TextAnchor};
use crate::model::SmallWayfindingSign;
use crate::palette::small_wayfinding_background_color;
use crate::types::{Color, Mm, Pt};

pub fn layout_small_wayfinding(sign: &SmallWayfindingSign) -> Document {
    let page = Page::landscape(SMALL_WIDTH_MM, SMALL_HEIGHT_MM);
    let (width, height) = (page.width(), page.height());
    let background = small_wayfinding_background_color(sign.background);
    let pad = Pt(SMALL_PADDING);

    let mut doc = Document::new(format!("{} small wayfinding sign", sign.trail_name), page);
    doc.push(RectNode::filled(page.frame(), background));

    // The text column is the same width with or without an arrow
    let column = text_column_width(width);
    let lines = SMALL_TRAIL_NAME.wrap(&sign.trail_name, column);
    let (nodes, name_height) = SMALL_TRAIL_NAME.block(&lines, pad, pad, TextAnchor::Start);
    doc.extend(nodes);
    let cursor = pad + name_height;

    if !sign.activity_description.trim().is_empty() {
        let lines = SMALL_ACTIVITY.wrap(&sign.activity_description, column);
        let top = cursor + Pt(SMALL_ACTIVITY_MARGIN_TOP);
        let (nodes, _) = SMALL_ACTIVITY.block(&lines, pad, top, TextAnchor::Start);
        doc.extend(nodes);
    }

    if let Some(direction) = sign.arrow_direction {
        let diameter = Mm(SMALL_ARROW_MM);
        let cx = width - pad - diameter.to_pt() / 2.0;
        doc.extend(arrow_circle(cx, pad, diameter, background, direction));
    }

    if let Some((latitude, longitude)) = sign.location() {
        let (nodes, _) = location_coordinates(
            latitude,
            longitude,
            pad,
            height - pad,
            CoordinateLayout::SingleLine,
            &SMALL_LOCATION,
            &SMALL_LOCATION,
        );
        doc.extend(nodes);
    }

    if sign.print_guides {
        doc.extend(print_guides(&page));
    }

    doc
}

fn text_column_width(page_width: Pt) -> Pt {
    page_width - Pt(SMALL_PADDING) * 2.0 - Mm(SMALL_ARROW_MM).to_pt() - Pt(SMALL_COLUMN_GAP)
}

/// Cut line and bolt holes. Painted last; nothing else moves for them.
fn print_guides(page: &Page) -> Vec<Node> {
    let stroke = Stroke::new(Color::BLACK, Pt(GUIDE_STROKE));
    let outline = RectNode::outlined(
        page.frame().inset(Mm(GUIDE_INSET_MM).to_pt()),
        stroke,
        Mm(GUIDE_CORNER_MM).to_pt(),
    );
    let cx = page.width() / 2.0;
    let cy = page.height() / 2.0;
    let offset = Mm(BOLT_OFFSET_MM).to_pt();
    let hole = |cx: Pt| {
        Node::Circle(CircleNode {
            cx,
            cy,
            r: Mm(BOLT_HOLE_MM).to_pt() / 2.0,
            fill: None,
            stroke: Some(stroke),
        })
    };
    vec![Node::Rect(outline), hole(cx - offset), hole(cx + offset)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Element;
    use crate::icons::Icon;
    use crate::model::{Direction, NamedBackground, SmallBackground};
    use crate::palette::NO_GRADE_GREY;

    fn sign() -> SmallWayfindingSign {
        SmallWayfindingSign::default()
    }

    /// Text nodes other than the coordinates
    fn column_extent(doc: &Document) -> Vec<(Pt, Pt)> {
        doc.texts()
            .into_iter()
            .filter(|t| t.size != SMALL_LOCATION.size)
            .map(|t| (t.bounds().x, t.top))
            .collect()
    }

    #[test]
    fn page_is_landscape() {
        let doc = layout_small_wayfinding(&sign());
        assert!(doc.page.width() > doc.page.height());
        assert_eq!(doc.page.oriented_mm(), (Mm(240.0), Mm(80.0)));
    }

    #[test]
    fn missing_arrow_removes_circle_but_keeps_column() {
        let with = layout_small_wayfinding(&sign().with_arrow(Some(Direction::E)));
        let without = layout_small_wayfinding(&sign().with_arrow(None));
        assert_eq!(with.circles().len(), 1);
        assert!(without.circles().is_empty());
        assert!(without.icons().iter().all(|i| i.icon != Icon::Arrow));
        assert_eq!(column_extent(&with), column_extent(&without));
    }

    #[test]
    fn arrow_sits_top_right() {
        let doc = layout_small_wayfinding(&sign().with_arrow(Some(Direction::S)));
        let disc = doc.circles()[0].bounds();
        assert!((disc.right() - (doc.page.width() - Pt(SMALL_PADDING))).abs() < Pt(1e-6));
        assert!((disc.y - Pt(SMALL_PADDING)).abs() < Pt(1e-9));
        assert_eq!(doc.icons()[0].rotation.degrees(), 180.0);
    }

    #[test]
    fn wrapped_name_stays_clear_of_the_arrow() {
        let doc = layout_small_wayfinding(&sign().with_trail_name("Codgers Upper Access Road"));
        let disc = doc.circles()[0].bounds();
        for text in doc.texts() {
            assert!(text.bounds().right() < disc.x, "{} runs under the arrow", text.content);
        }
    }

    #[test]
    fn latitude_alone_omits_coordinates() {
        let doc = layout_small_wayfinding(&sign().with_location(Some(-41.0), None));
        assert!(!doc.text_lines().contains(&"Location"));
        let doc = layout_small_wayfinding(&sign().with_location(Some(-41.0), Some(173.5)));
        let lines = doc.text_lines();
        assert!(lines.contains(&"Location"));
        assert!(lines.contains(&"41.0000° S, 173.5000° E"));
    }

    #[test]
    fn coordinates_are_single_line_bottom_left() {
        let doc = layout_small_wayfinding(&sign().with_location(Some(-41.0), Some(173.5)));
        let coords: Vec<_> = doc.texts().into_iter().filter(|t| t.size == SMALL_LOCATION.size).collect();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0].baseline, coords[1].baseline);
        assert_eq!(coords[0].x, Pt(SMALL_PADDING));
        let bottom = coords[0].top + SMALL_LOCATION.line_box();
        assert!((bottom - (doc.page.height() - Pt(SMALL_PADDING))).abs() < Pt(1e-6));
    }

    #[test]
    fn activity_only_when_non_empty() {
        let blank = layout_small_wayfinding(&sign().with_activity("  "));
        assert_eq!(blank.texts().len(), 1);
        let doc = layout_small_wayfinding(&sign().with_activity("Walking only"));
        let activity = doc.texts().into_iter().find(|t| t.content == "Walking only").unwrap();
        assert_eq!(activity.size, SMALL_ACTIVITY.size);
    }

    #[test]
    fn print_guides_are_additive() {
        let plain = layout_small_wayfinding(&sign());
        let guided = layout_small_wayfinding(&sign().with_print_guides(true));
        assert_eq!(guided.nodes[..plain.nodes.len()], plain.nodes[..]);

        let extra = &guided.nodes[plain.nodes.len()..];
        assert_eq!(extra.len(), 3);
        let Node::Rect(outline) = &extra[0] else { panic!("expected outline") };
        assert!(outline.fill.is_none());
        assert_eq!(outline.corner_radius, Mm(GUIDE_CORNER_MM).to_pt());

        let holes: Vec<_> = extra[1..]
            .iter()
            .map(|n| match n {
                Node::Circle(c) => c,
                other => panic!("expected bolt hole, got {}", other.kind()),
            })
            .collect();
        let centre = guided.page.width() / 2.0;
        assert_eq!(holes[0].cy, guided.page.height() / 2.0);
        assert_eq!(holes[0].cy, holes[1].cy);
        assert!(((centre - holes[0].cx) - (holes[1].cx - centre)).abs() < Pt(1e-9));
        assert!((holes[1].cx - centre - Mm(BOLT_OFFSET_MM).to_pt()).abs() < Pt(1e-9));
    }

    #[test]
    fn named_backgrounds() {
        let doc = layout_small_wayfinding(&sign().with_background(SmallBackground::Named(NamedBackground::NoGrade)));
        assert_eq!(doc.rects()[0].fill, Some(NO_GRADE_GREY));
        assert_eq!(doc.icons()[0].color, NO_GRADE_GREY);
    }
}
