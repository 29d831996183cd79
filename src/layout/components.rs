//! Building blocks shared by several sign layouts.

use super::defaults;
use super::text::TextStyle;
use crate::document::{CircleNode, IconNode, Node, TextAnchor};
use crate::icons::Icon;
use crate::model::Direction;
use crate::palette::arrow_rotation_degrees;
use crate::types::{Color, Frame, Mm, Pt};

/// White disc with the arrow knocked out in the sign's own colour.
///
/// `cx`/`top` place the disc; the arrow glyph fills
/// [`ARROW_FILL_RATIO`](defaults::ARROW_FILL_RATIO) of the diameter.
pub fn arrow_circle(cx: Pt, top: Pt, diameter: Mm, background: Color, direction: Direction) -> Vec<Node> {
    let d = diameter.to_pt();
    let cy = top + d / 2.0;
    let glyph = d * defaults::ARROW_FILL_RATIO;
    vec![
        Node::Circle(CircleNode {
            cx,
            cy,
            r: d / 2.0,
            fill: Some(Color::WHITE),
            stroke: None,
        }),
        Node::Icon(IconNode {
            icon: Icon::Arrow,
            frame: Frame::new(cx - glyph / 2.0, cy - glyph / 2.0, glyph, glyph),
            color: background,
            rotation: arrow_rotation_degrees(direction),
            scale: 1.0,
        }),
    ]
}

/// `41.2971° S, 174.7222° E`
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    let ns = if latitude >= 0.0 { 'N' } else { 'S' };
    let ew = if longitude >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}° {ns}, {:.4}° {ew}", latitude.abs(), longitude.abs())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateLayout {
    /// `Location  41.2971° S, 174.7222° E`
    SingleLine,
    /// Label above the value
    TwoLine,
}

/// Space between label and value in single-line mode, in ems of the label
const LABEL_GAP_EMS: f64 = 0.5;

/// "Location" label plus formatted coordinates, bottom-left anchored at
/// (`x`, `bottom`). Returns the nodes and the block's frame.
pub fn location_coordinates(
    latitude: f64,
    longitude: f64,
    x: Pt,
    bottom: Pt,
    layout: CoordinateLayout,
    label: &TextStyle,
    value: &TextStyle,
) -> (Vec<Node>, Frame) {
    let text = format_coordinates(latitude, longitude);
    match layout {
        CoordinateLayout::SingleLine => {
            let height = label.line_box().max(value.line_box());
            let top = bottom - height;
            let label_node = label.line("Location", x, top, TextAnchor::Start);
            let value_x = x + label_node.width + label.size * LABEL_GAP_EMS;
            let value_node = value.line(text, value_x, top, TextAnchor::Start);
            let width = value_x + value_node.width - x;
            (
                vec![Node::Text(label_node), Node::Text(value_node)],
                Frame::new(x, top, width, height),
            )
        }
        CoordinateLayout::TwoLine => {
            let height = label.line_box() + value.line_box();
            let top = bottom - height;
            let label_node = label.line("Location", x, top, TextAnchor::Start);
            let value_node = value.line(text, x, top + label.line_box(), TextAnchor::Start);
            let width = label_node.width.max(value_node.width);
            (
                vec![Node::Text(label_node), Node::Text(value_node)],
                Frame::new(x, top, width, height),
            )
        }
    }
}

/// One line per character, centred on `cx`, for narrow vertical posts.
///
/// Every character gets its own line, spaces included.
pub fn stacked_characters(text: &str, cx: Pt, top: Pt, style: &TextStyle) -> (Vec<Node>, Pt) {
    let chars: Vec<String> = text.chars().map(String::from).collect();
    style.block(&chars, cx, top, TextAnchor::Middle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Font;
    use insta::assert_snapshot;

    const LABEL: TextStyle = TextStyle::new(Font::OpenSansSemiBold, 20.0, 1.2);

    #[test]
    fn southern_and_eastern_coordinates() {
        assert_snapshot!(format_coordinates(-41.2971, 174.7222), @"41.2971° S, 174.7222° E");
    }

    #[test]
    fn zero_latitude_is_north_and_negative_longitude_is_west() {
        assert_snapshot!(format_coordinates(0.0, -0.5), @"0.0000° N, 0.5000° W");
    }

    #[test]
    fn single_line_sits_on_one_baseline() {
        let (nodes, frame) = location_coordinates(
            -41.0,
            174.0,
            Pt(10.0),
            Pt(100.0),
            CoordinateLayout::SingleLine,
            &LABEL,
            &LABEL,
        );
        let [Node::Text(label), Node::Text(value)] = nodes.as_slice() else {
            panic!("expected two text nodes");
        };
        assert_eq!(label.content, "Location");
        assert_eq!(label.baseline, value.baseline);
        assert!(value.x > label.x + label.width);
        assert_eq!(frame.bottom(), Pt(100.0));
    }

    #[test]
    fn two_line_puts_value_under_label() {
        let (nodes, frame) = location_coordinates(
            -41.0,
            174.0,
            Pt(10.0),
            Pt(100.0),
            CoordinateLayout::TwoLine,
            &LABEL,
            &LABEL,
        );
        let [Node::Text(label), Node::Text(value)] = nodes.as_slice() else {
            panic!("expected two text nodes");
        };
        assert_eq!(label.x, value.x);
        assert!(value.baseline > label.baseline);
        assert!((frame.bottom() - Pt(100.0)).abs() < Pt(1e-9));
    }

    #[test]
    fn arrow_circle_knocks_out_arrow_in_background_colour() {
        let bg = Color::hex(0x1538A6);
        let nodes = arrow_circle(Pt(100.0), Pt(0.0), Mm(50.0), bg, Direction::SE);
        let [Node::Circle(disc), Node::Icon(arrow)] = nodes.as_slice() else {
            panic!("expected disc then arrow");
        };
        assert_eq!(disc.fill, Some(Color::WHITE));
        assert_eq!(arrow.color, bg);
        assert_eq!(arrow.rotation.degrees(), 135.0);
        assert!((arrow.frame.width - disc.r * 2.0 * 0.8).abs() < Pt(1e-9));
        assert!((arrow.frame.center_x() - disc.cx).abs() < Pt(1e-9));
        assert!((arrow.frame.center_y() - disc.cy).abs() < Pt(1e-9));
    }

    #[test]
    fn stacked_characters_gives_spaces_their_own_line() {
        let (nodes, height) = stacked_characters("NO GO", Pt(50.0), Pt(0.0), &LABEL);
        assert_eq!(nodes.len(), 5);
        assert!((height - LABEL.line_box() * 5.0).abs() < Pt(1e-9));
        let Node::Text(space) = &nodes[2] else { panic!("expected text") };
        assert_eq!(space.content, " ");
        assert_eq!(space.anchor, TextAnchor::Middle);
    }
}
