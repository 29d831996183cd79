//! Download file names.

use crate::model::SignData;

/// Lowercase, with every run of whitespace (newlines included) turned
/// into one hyphen. Leading and trailing runs become hyphens too.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.extend(c.to_lowercase());
            in_space = false;
        }
    }
    out
}

/// File name for a sign download, e.g. `te-piki-wayfinding-sign.pdf`.
///
/// `extension` is given without the dot.
pub fn download_filename(sign: &SignData, extension: &str) -> String {
    let stem = match sign {
        SignData::Wayfinding(sign) => format!("{}-wayfinding-sign", slug(&sign.trail_name)),
        SignData::Warning(post) => format!("{}-warning-post", slug(&post.title)),
        SignData::SmallWayfinding(sign) => format!("{}-small-wayfinding-sign", slug(&sign.trail_name)),
        SignData::HardEasy(post) => format!(
            "{}-{}-{}-{}-{}-{}",
            post.top_word, post.top_direction, post.top_grade, post.bottom_word, post.bottom_direction, post.bottom_grade
        )
        .to_lowercase(),
    };
    format!("{stem}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HardEasyPost, SmallWayfindingSign, WarningPost, WayfindingSign};
    use insta::assert_snapshot;

    #[test]
    fn wayfinding_names_fold_newlines_and_spaces() {
        let sign = WayfindingSign::default().with_trail_name("Te Piki\nUpper  Section");
        assert_snapshot!(download_filename(&sign.into(), "pdf"), @"te-piki-upper-section-wayfinding-sign.pdf");
    }

    #[test]
    fn edge_whitespace_is_kept_as_hyphens() {
        assert_eq!(slug(" Te  Piki\n"), "-te-piki-");
        assert_eq!(slug("\t\n "), "-");
        assert_eq!(slug(""), "");
        let sign = WayfindingSign::default().with_trail_name("Koru ");
        assert_snapshot!(download_filename(&sign.into(), "pdf"), @"koru--wayfinding-sign.pdf");
    }

    #[test]
    fn warning_post() {
        let post = WarningPost::default().with_title("Big Drop");
        assert_snapshot!(download_filename(&post.into(), "svg"), @"big-drop-warning-post.svg");
    }

    #[test]
    fn small_wayfinding() {
        let sign = SmallWayfindingSign::default().with_trail_name("Codgers");
        assert_snapshot!(download_filename(&sign.into(), "png"), @"codgers-small-wayfinding-sign.png");
    }

    #[test]
    fn hard_easy_is_composed_from_both_halves() {
        assert_snapshot!(download_filename(&HardEasyPost::default().into(), "pdf"), @"hard-nw-5-easy-ne-3.pdf");
    }
}
