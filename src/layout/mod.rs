//! Sign layout: typed sign data in, page-sized [`Document`] out.
//!
//! Every engine is a pure function of its input. Nothing here does I/O or
//! fails; out-of-range grades fall back to the grade 3 colour.

pub mod components;
pub mod defaults;
mod hard_easy;
mod small_wayfinding;
pub mod text;
mod warning_post;
mod wayfinding;

pub use hard_easy::{Seam, layout_hard_easy, seam};
pub use small_wayfinding::layout_small_wayfinding;
pub use warning_post::layout_warning_post;
pub use wayfinding::layout_wayfinding;

use crate::document::Document;
use crate::log::debug;
use crate::model::{SignData, SignType};

/// Lay out any sign.
pub fn layout(sign: &SignData) -> Document {
    debug!(sign_type = %sign.sign_type(), "laying out sign");
    match sign {
        SignData::Wayfinding(sign) => layout_wayfinding(sign),
        SignData::Warning(post) => layout_warning_post(post),
        SignData::HardEasy(post) => layout_hard_easy(post),
        SignData::SmallWayfinding(sign) => layout_small_wayfinding(sign),
    }
}

/// Default sign for a type tag, laid out. Unknown tags get the wayfinding
/// sign.
pub fn layout_default(sign_type: SignType) -> Document {
    layout(&SignData::default_for(sign_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mm;

    #[test]
    fn page_sizes_are_fixed_per_sign_type() {
        let sizes: Vec<_> = SignType::KNOWN
            .iter()
            .map(|t| (t.as_str(), layout_default(*t).page.oriented_mm()))
            .collect();
        assert_eq!(
            sizes,
            [
                ("wayfinding", (Mm(240.0), Mm(480.0))),
                ("warning", (Mm(115.0), Mm(900.0))),
                ("hardeasy", (Mm(115.0), Mm(900.0))),
                ("smallwayfinding", (Mm(240.0), Mm(80.0))),
            ]
        );
    }

    #[test]
    fn unknown_type_lays_out_as_wayfinding() {
        let doc = layout_default(SignType::Unknown);
        assert_eq!(doc, layout(&SignData::default()));
    }

    #[test]
    fn layout_is_deterministic() {
        for t in SignType::KNOWN {
            let sign = SignData::default_for(t);
            assert_eq!(layout(&sign), layout(&sign));
        }
    }
}
