//! Warning post, 115 x 900 mm portrait.
//!
//! Symbol at the top, then the title stacked one character per line down
//! the post. An optional grade badge is laid out as a horizontal band and
//! turned 90° about its centre so it reads along the post.

use super::components::stacked_characters;
use super::defaults::*;
use crate::document::{Document, GroupNode, IconNode, Node, Page, RectNode, Rotation, TextAnchor};
use crate::icons::Icon;
use crate::model::{WarningPost, WarningSymbol};
use crate::palette::{grade_color, warning_color};
use crate::types::{Angle, Color, Frame, Mm, Pt};

pub fn layout_warning_post(post: &WarningPost) -> Document {
    let page = Page::portrait(POST_WIDTH_MM, POST_HEIGHT_MM);
    let cx = page.width() / 2.0;
    let pad = Pt(WARNING_PADDING);

    let mut doc = Document::new(format!("{} warning post", post.title), page);
    doc.push(RectNode::filled(page.frame(), warning_color(post.symbol)));

    let icon = match post.symbol {
        WarningSymbol::Danger => Icon::Danger,
        WarningSymbol::Warning => Icon::Warning,
    };
    let size = Pt(WARNING_SYMBOL_SIZE);
    doc.push(IconNode {
        icon,
        frame: Frame::new(cx - size / 2.0, pad, size, size),
        color: Color::WHITE,
        rotation: Angle::ZERO,
        scale: WARNING_SYMBOL_SCALE,
    });

    let title_top = pad + size + Pt(WARNING_SYMBOL_MARGIN_BOTTOM);
    let (chars, _) = stacked_characters(&post.title, cx, title_top, &WARNING_TITLE);
    doc.extend(chars);

    if let Some(grade) = post.grade {
        doc.push(grade_badge(grade, &page));
    }

    doc
}

/// Grade band: a `BADGE_LENGTH_MM` x page-width box, white borders on its
/// short ends, "GRADE N" centred, rotated a quarter turn.
fn grade_badge(grade: u8, page: &Page) -> GroupNode {
    let length = Mm(BADGE_LENGTH_MM).to_pt();
    let breadth = page.width();
    let cx = page.width() / 2.0;
    let cy = Mm(BADGE_TOP_MM).to_pt() + breadth / 2.0;
    let band = Frame::new(cx - length / 2.0, cy - breadth / 2.0, length, breadth);
    let border = Pt(BADGE_BORDER);

    let label = BADGE_TEXT.line(
        format!("GRADE {grade}"),
        cx,
        cy - BADGE_TEXT.line_box() / 2.0,
        TextAnchor::Middle,
    );
    GroupNode {
        rotation: Some(Rotation {
            angle: Angle(90.0),
            cx,
            cy,
        }),
        children: vec![
            Node::Rect(RectNode::filled(band, grade_color(grade))),
            Node::Rect(RectNode::filled(
                Frame::new(band.x, band.y, border, breadth),
                Color::WHITE,
            )),
            Node::Rect(RectNode::filled(
                Frame::new(band.right() - border, band.y, border, breadth),
                Color::WHITE,
            )),
            Node::Text(label),
        ],
    }
}
