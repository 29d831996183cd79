//! Text styles, width estimates and line breaking.
//!
//! There is no font loading in the layout core. Widths come from a fixed
//! advance table so layout stays deterministic across machines; the
//! rendering engine draws the real glyphs.

use crate::document::{Font, Node, TextAnchor, TextNode};
use crate::types::{Color, Pt};

/// Advance widths for ASCII 0x20..=0x7E, thousandths of an em (Open Sans Bold).
#[rustfmt::skip]
const ADVANCE: [u16; 95] = [
    260, 293, 471, 647, 572, 880, 738, 252, 336, 336, 550, 572, 279, 322, 285, 399,
    572, 572, 572, 572, 572, 572, 572, 572, 572, 572,
    285, 285, 572, 572, 572, 472, 899,
    690, 666, 637, 739, 566, 550, 723, 753, 342, 296, 664, 570, 920,
    789, 783, 628, 783, 658, 558, 589, 758, 660, 1005, 668, 622, 576,
    331, 399, 331, 572, 428, 607,
    603, 627, 510, 627, 594, 380, 555, 658, 305, 305, 639, 305, 996,
    658, 616, 627, 627, 457, 510, 415, 658, 591, 861, 603, 591, 500,
    399, 560, 399, 572,
];

/// Advance for anything outside printable ASCII
const FALLBACK_ADVANCE: u16 = 600;

/// Ascender height as a fraction of the font size
const ASCENT: f64 = 0.77;

fn font_width_factor(font: Font) -> f64 {
    match font {
        Font::OpenSansBold => 1.0,
        Font::OpenSansSemiBold => 0.97,
        Font::OverpassBold => 0.95,
    }
}

/// Estimated advance of `text` in ems, without letter spacing.
pub fn text_ems(text: &str, font: Font) -> f64 {
    let thousandths: u32 = text
        .chars()
        .map(|c| {
            if (' '..='~').contains(&c) {
                u32::from(ADVANCE[(c as usize) - 0x20])
            } else {
                u32::from(FALLBACK_ADVANCE)
            }
        })
        .sum();
    f64::from(thousandths) / 1000.0 * font_width_factor(font)
}

/// Complete visual style of a run of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: Pt,
    pub line_height: f64,
    pub color: Color,
    pub letter_spacing: Pt,
}

impl TextStyle {
    pub const fn new(font: Font, size: f64, line_height: f64) -> Self {
        TextStyle {
            font,
            size: Pt(size),
            line_height,
            color: Color::WHITE,
            letter_spacing: Pt(0.0),
        }
    }

    pub const fn with_letter_spacing(self, spacing: f64) -> Self {
        TextStyle {
            letter_spacing: Pt(spacing),
            ..self
        }
    }

    /// Height of one line box
    pub fn line_box(&self) -> Pt {
        self.size * self.line_height
    }

    pub fn width(&self, text: &str) -> Pt {
        let chars = text.chars().count();
        let spacing = self.letter_spacing * chars.saturating_sub(1) as f64;
        self.size * text_ems(text, self.font) + spacing
    }

    /// Baseline for a line whose box starts at `top`
    pub fn baseline(&self, top: Pt) -> Pt {
        top + self.line_box() / 2.0 + self.size * (ASCENT - 0.5)
    }

    /// One line of text with its box starting at `top`
    pub fn line(&self, content: impl Into<String>, x: Pt, top: Pt, anchor: TextAnchor) -> TextNode {
        let content = content.into();
        TextNode {
            width: self.width(&content),
            content,
            x,
            baseline: self.baseline(top),
            top,
            font: self.font,
            size: self.size,
            line_height: self.line_height,
            color: self.color,
            anchor,
            letter_spacing: self.letter_spacing,
        }
    }

    /// Stack `lines` downwards from `top`; returns nodes and total height.
    pub fn block<S: AsRef<str>>(&self, lines: &[S], x: Pt, top: Pt, anchor: TextAnchor) -> (Vec<Node>, Pt) {
        let step = self.line_box();
        let nodes = lines
            .iter()
            .enumerate()
            .map(|(i, line)| Node::Text(self.line(line.as_ref(), x, top + step * i as f64, anchor)))
            .collect();
        (nodes, step * lines.len() as f64)
    }

    /// Break `text` into lines no wider than `max_width`.
    ///
    /// Explicit newlines always break. Within a paragraph words are packed
    /// greedily; a single word wider than the limit gets a line to itself.
    pub fn wrap(&self, text: &str, max_width: Pt) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            let mut current = String::new();
            for word in paragraph.split_whitespace() {
                if current.is_empty() {
                    current.push_str(word);
                    continue;
                }
                let candidate = format!("{current} {word}");
                if self.width(&candidate) <= max_width {
                    current = candidate;
                } else {
                    lines.push(std::mem::take(&mut current));
                    current.push_str(word);
                }
            }
            lines.push(current);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: TextStyle = TextStyle::new(Font::OpenSansBold, 100.0, 1.1);

    #[test]
    fn advance_table_covers_printable_ascii() {
        assert_eq!(ADVANCE.len(), ('~' as usize) - (' ' as usize) + 1);
        assert_eq!(text_ems("0", Font::OpenSansBold), 0.572);
        assert_eq!(text_ems("é", Font::OpenSansBold), 0.6);
    }

    #[test]
    fn width_scales_with_size_and_spacing() {
        let plain = TextStyle::new(Font::OpenSansBold, 10.0, 1.2);
        let spaced = plain.with_letter_spacing(1.0);
        let w = plain.width("ABC");
        assert!(w > Pt::ZERO);
        assert!((spaced.width("ABC") - w - Pt(2.0)).abs() < Pt(1e-9));
        assert_eq!(plain.width(""), Pt::ZERO);
    }

    #[test]
    fn explicit_newlines_always_break() {
        assert_eq!(STYLE.wrap("Te\nPiki", Pt(10_000.0)), ["Te", "Piki"]);
        assert_eq!(STYLE.wrap("a\n\nb", Pt(10_000.0)), ["a", "", "b"]);
    }

    #[test]
    fn long_paragraphs_wrap_greedily() {
        let width = STYLE.width("Upper Brook");
        let lines = STYLE.wrap("Upper Brook Valley Track", width);
        assert_eq!(lines, ["Upper Brook", "Valley Track"]);
    }

    #[test]
    fn oversized_word_keeps_its_own_line() {
        let lines = STYLE.wrap("Supercalifragilistic ok", Pt(50.0));
        assert_eq!(lines, ["Supercalifragilistic", "ok"]);
    }

    #[test]
    fn block_stacks_lines_by_line_box() {
        let (nodes, height) = STYLE.block(&["A", "B"], Pt(0.0), Pt(10.0), TextAnchor::Start);
        assert_eq!(nodes.len(), 2);
        assert!((height - Pt(220.0)).abs() < Pt(1e-9));
        let Node::Text(second) = &nodes[1] else { panic!("expected text") };
        assert!((second.top - Pt(120.0)).abs() < Pt(1e-9));
        assert!(second.baseline > second.top && second.baseline < second.top + STYLE.line_box());
    }
}
