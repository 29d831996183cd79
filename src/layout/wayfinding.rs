//! Large wayfinding sign, 240 x 480 mm portrait.
//!
//! Top to bottom: arrow circle (right aligned), trail name, the grade row,
//! then a bottom-aligned activity block (icons over the distance type) and
//! a footer with coordinates on the left and partner logos on the right.

use super::components::{CoordinateLayout, arrow_circle, location_coordinates};
use super::defaults::*;
use super::text::TextStyle;
use crate::document::{Document, IconNode, ImageNode, Node, Page, RectNode, TextAnchor};
use crate::icons::Icon;
use crate::log::debug;
use crate::logos::enabled_logos;
use crate::model::WayfindingSign;
use crate::palette::grade_color;
use crate::types::{Angle, Color, Frame, Mm, Pt};

pub fn layout_wayfinding(sign: &WayfindingSign) -> Document {
    let page = Page::portrait(WAYFINDING_WIDTH_MM, WAYFINDING_HEIGHT_MM);
    let (width, height) = (page.width(), page.height());
    let background = grade_color(sign.grade);
    let pad = Pt(WAYFINDING_PADDING);
    let column = width - pad * 2.0;

    let mut doc = Document::new(format!("{} wayfinding sign", sign.trail_name), page);
    doc.push(RectNode::filled(page.frame(), background));

    // Arrow circle, flush right inside its margins
    let diameter = Mm(WAYFINDING_ARROW_MM);
    let arrow_right = width - pad - Pt(WAYFINDING_ARROW_MARGIN_RIGHT);
    let arrow_top = pad + Pt(WAYFINDING_ARROW_MARGIN_TOP);
    let arrow_cx = arrow_right - diameter.to_pt() / 2.0;
    doc.extend(arrow_circle(arrow_cx, arrow_top, diameter, background, sign.arrow_direction));
    let mut cursor = arrow_top + diameter.to_pt() + Pt(WAYFINDING_ARROW_MARGIN_BOTTOM);

    // Trail name
    let name_lines = TRAIL_NAME.wrap(&sign.trail_name, column);
    debug!(lines = name_lines.len(), "wayfinding trail name wrapped");
    let (nodes, name_height) = TRAIL_NAME.block(&name_lines, pad, cursor, TextAnchor::Start);
    doc.extend(nodes);
    cursor += name_height + Pt(WAYFINDING_NAME_MARGIN_BOTTOM);

    // Grade row
    let grade_label = format!("Grade {}", sign.grade);
    let items = [grade_label.as_str(), sign.grade_note.as_str(), sign.distance.as_str()];
    doc.extend(spaced_row(&items, pad, column, cursor, &GRADE_ROW));

    // Footer, pinned to the bottom padding edge
    let footer_bottom = height - pad;
    let (location, location_frame) = location_coordinates(
        sign.latitude,
        sign.longitude,
        pad,
        footer_bottom,
        CoordinateLayout::TwoLine,
        &LOCATION_LABEL,
        &LOCATION_VALUE,
    );
    doc.extend(location);
    let logos = footer_logos(sign, width - pad, footer_bottom);
    let footer_height = if logos.is_empty() {
        location_frame.height
    } else {
        location_frame.height.max(Pt(FOOTER_LOGO_HEIGHT))
    };
    doc.extend(logos);

    // Activity block, bottom aligned above the footer
    let activity_bottom = footer_bottom - footer_height - Pt(WAYFINDING_BOTTOM_MARGIN_TOP);
    let distance_lines: Vec<&str> = sign.distance_type.split('\n').collect();
    let distance_height = DISTANCE_TYPE.line_box() * distance_lines.len() as f64;
    let distance_top = activity_bottom - distance_height;
    let (nodes, _) = DISTANCE_TYPE.block(&distance_lines, pad, distance_top, TextAnchor::Start);
    let icons = activity_icons(sign.bike, sign.walk, pad, distance_top);
    doc.extend(icons);
    doc.extend(nodes);

    doc
}

/// Three items spread across `width`: first flush left, last flush right,
/// the middle one centred in the remaining space. Falls back to a fixed gap
/// when the items do not fit.
fn spaced_row(items: &[&str], left: Pt, width: Pt, top: Pt, style: &TextStyle) -> Vec<Node> {
    let widths: Vec<Pt> = items.iter().map(|item| style.width(item)).collect();
    let used = widths.iter().fold(Pt::ZERO, |acc, w| acc + *w);
    let gaps = items.len().saturating_sub(1).max(1) as f64;
    let gap = ((width - used) / gaps).max(Pt(WAYFINDING_GRADE_ROW_GAP));

    let mut x = left;
    items
        .iter()
        .zip(&widths)
        .map(|(item, w)| {
            let node = style.line(*item, x, top, TextAnchor::Start);
            x += *w + gap;
            Node::Text(node)
        })
        .collect()
}

/// Bike, optional "+", walker; vertically centred in a row ending at `bottom`.
fn activity_icons(bike: bool, walk: bool, left: Pt, bottom: Pt) -> Vec<Node> {
    let mut row_height = Pt::ZERO;
    if bike {
        row_height = row_height.max(Pt(BIKE_ICON_SIZE));
    }
    if walk {
        row_height = row_height.max(Pt(WALKER_ICON_SIZE));
    }
    if bike && walk {
        row_height = row_height.max(PLUS_SIGN.line_box());
    }
    let middle = bottom - row_height / 2.0;
    let gap = Pt(WAYFINDING_ICON_GAP);

    let mut nodes = Vec::new();
    let mut x = left;
    let mut icon = |icon: Icon, size: f64, x: &mut Pt| {
        let size = Pt(size);
        nodes.push(Node::Icon(IconNode {
            icon,
            frame: Frame::new(*x, middle - size / 2.0, size, size),
            color: Color::WHITE,
            rotation: Angle::ZERO,
            scale: 1.0,
        }));
        *x += size + gap;
    };
    if bike {
        icon(Icon::Bike, BIKE_ICON_SIZE, &mut x);
    }
    let mut plus = None;
    if bike && walk {
        let plus_x = x + Pt(WAYFINDING_PLUS_MARGIN_LEFT);
        let node = PLUS_SIGN.line("+", plus_x, middle - PLUS_SIGN.line_box() / 2.0, TextAnchor::Start);
        x = plus_x + node.width + gap;
        plus = Some(node);
    }
    if walk {
        icon(Icon::Walker, WALKER_ICON_SIZE, &mut x);
    }
    if let Some(plus) = plus {
        nodes.insert(1, Node::Text(plus));
    }
    nodes
}

/// Enabled catalog logos, right aligned at `right`, bottoms on `bottom`.
fn footer_logos(sign: &WayfindingSign, right: Pt, bottom: Pt) -> Vec<Node> {
    let logo_height = Pt(FOOTER_LOGO_HEIGHT);
    let gap = Pt(FOOTER_LOGO_GAP);
    let shown: Vec<_> = enabled_logos(&sign.logo_toggles).collect();
    let total = shown
        .iter()
        .fold(Pt::ZERO, |acc, logo| acc + logo_height * logo.aspect)
        + gap * shown.len().saturating_sub(1) as f64;

    let mut x = right - total;
    shown
        .into_iter()
        .map(|logo| {
            let w = logo_height * logo.aspect;
            let frame = Frame::new(x, bottom - logo_height, w, logo_height);
            x += w + gap;
            Node::Image(ImageNode {
                href: logo.image.to_string(),
                frame,
                logo_id: Some(logo.id.to_string()),
            })
        })
        .collect()
}
