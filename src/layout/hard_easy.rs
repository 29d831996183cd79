//! Hard/easy post, 115 x 900 mm portrait, split into two halves.

use super::components::{arrow_circle, stacked_characters};
use super::defaults::*;
use crate::document::{Document, Node, Page, RectNode};
use crate::model::{Direction, HardEasyPost, PostWord};
use crate::palette::grade_color;
use crate::types::{Color, Frame, Mm, Pt};

/// How the bottom half meets the top half.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Seam {
    /// Same colour both sides: a white divider, no overlap
    Divider { height: Pt },
    /// Different colours: the bottom half slides up under the top half
    Overlap { by: Pt },
}

impl Seam {
    /// Offset from the top half's bottom edge to the bottom half's top edge
    pub fn bottom_offset(self) -> Pt {
        match self {
            Seam::Divider { height } => height,
            Seam::Overlap { by } => -by,
        }
    }
}

pub fn seam(top_grade: u8, bottom_grade: u8) -> Seam {
    if top_grade == bottom_grade {
        Seam::Divider {
            height: Pt(DIVIDER_HEIGHT),
        }
    } else {
        Seam::Overlap { by: Pt(SEAM_OVERLAP) }
    }
}

pub fn layout_hard_easy(post: &HardEasyPost) -> Document {
    let page = Page::portrait(POST_WIDTH_MM, POST_HEIGHT_MM);
    let width = page.width();
    let half = Mm(HALF_HEIGHT_MM).to_pt();

    let title = format!(
        "{} {} / {} {} post",
        post.top_word, post.top_direction, post.bottom_word, post.bottom_direction
    );
    let mut doc = Document::new(title, page);

    doc.extend(half_section(Pt::ZERO, width, half, post.top_word, post.top_direction, post.top_grade));

    let seam = seam(post.top_grade, post.bottom_grade);
    if let Seam::Divider { height } = seam {
        doc.push(RectNode::filled(Frame::new(Pt::ZERO, half, width, height), Color::WHITE));
    }
    let bottom_top = half + seam.bottom_offset();
    doc.extend(half_section(
        bottom_top,
        width,
        half,
        post.bottom_word,
        post.bottom_direction,
        post.bottom_grade,
    ));

    doc
}

/// One coloured half: arrow circle above the stacked word.
fn half_section(top: Pt, width: Pt, height: Pt, word: PostWord, direction: Direction, grade: u8) -> Vec<Node> {
    let color = grade_color(grade);
    let cx = width / 2.0;
    let diameter = Mm(HALF_ARROW_MM);

    let mut nodes = vec![Node::Rect(RectNode::filled(Frame::new(Pt::ZERO, top, width, height), color))];
    let arrow_top = top + Pt(HALF_PADDING_TOP) + Pt(HALF_ARROW_MARGIN);
    nodes.extend(arrow_circle(cx, arrow_top, diameter, color, direction));
    let word_top = arrow_top + diameter.to_pt() + Pt(HALF_ARROW_MARGIN);
    let (chars, _) = stacked_characters(word.as_str(), cx, word_top, &HALF_WORD);
    nodes.extend(chars);
    nodes
}
