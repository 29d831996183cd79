//! Sign iconography.
//!
//! Each icon is static path data in its own square view box. Callers place
//! an icon into a frame through [`IconNode`](crate::document::IconNode); the
//! backend scales the view box to the frame and applies the colour.

use std::fmt::Write;

use glam::{DVec2, dvec2};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    /// Points north before rotation
    Arrow,
    Bike,
    Walker,
    /// Triangle with a cut-out exclamation mark
    Danger,
    /// Diamond with a cut-out exclamation mark
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconPaint {
    Fill { even_odd: bool },
    Stroke { width: f64, cap: LineCap },
}

/// One sub-path of an icon, in view-box units
#[derive(Debug, Clone, PartialEq)]
pub struct IconPath {
    pub d: String,
    pub paint: IconPaint,
}

impl IconPath {
    fn fill(d: &str) -> Self {
        IconPath {
            d: d.to_string(),
            paint: IconPaint::Fill { even_odd: false },
        }
    }

    fn fill_even_odd(d: &str) -> Self {
        IconPath {
            d: d.to_string(),
            paint: IconPaint::Fill { even_odd: true },
        }
    }

    fn stroke(d: String, width: f64, cap: LineCap) -> Self {
        IconPath {
            d,
            paint: IconPaint::Stroke { width, cap },
        }
    }
}

const BIKE_RIDER: &str = "M400 160C426.5 160 448 138.5 448 112C448 85.5 426.5 64 400 64C373.5 64 352 85.5 352 112C352 138.5 373.5 160 400 160zM427.2 224L365.4 175.2C348.1 161.6 323.7 161.4 306.3 174.9L223.2 239.1C192.5 262.9 194.7 309.9 227.5 330.7L288 369.1L288 480C288 497.7 302.3 512 320 512C337.7 512 352 497.7 352 480L352 352C352 341.3 346.7 331.3 337.8 325.4L295 296.9L355.3 248.4L396 281C401.7 285.5 408.7 288 416 288L480 288C497.7 288 512 273.7 512 256C512 238.3 497.7 224 480 224L427.2 224z";

const WALKER: &str = "M320 144C350.9 144 376 118.9 376 88C376 57.1 350.9 32 320 32C289.1 32 264 57.1 264 88C264 118.9 289.1 144 320 144zM233.4 291.9L256 269.3L256 338.6C256 366.6 268.2 393.3 289.5 411.5L360.9 472.7C366.8 477.8 370.7 484.8 371.8 492.5L384.4 580.6C386.9 598.1 403.1 610.3 420.6 607.8C438.1 605.3 450.3 589.1 447.8 571.6L435.2 483.5C431.9 460.4 420.3 439.4 402.6 424.2L368.1 394.6L368.1 279.4L371.9 284.1C390.1 306.9 417.7 320.1 446.9 320.1L480.1 320.1C497.8 320.1 512.1 305.8 512.1 288.1C512.1 270.4 497.8 256.1 480.1 256.1L446.9 256.1C437.2 256.1 428 251.7 421.9 244.1L404 221.7C381 192.9 346.1 176.1 309.2 176.1C277 176.1 246.1 188.9 223.4 211.7L188.1 246.6C170.1 264.6 160 289 160 314.5L160 352C160 369.7 174.3 384 192 384C209.7 384 224 369.7 224 352L224 314.5C224 306 227.4 297.9 233.4 291.9zM245.8 471.3C244.3 476.5 241.5 481.3 237.7 485.1L169.4 553.4C156.9 565.9 156.9 586.2 169.4 598.7C181.9 611.2 202.2 611.2 214.7 598.7L283 530.4C294.5 518.9 302.9 504.6 307.4 488.9L309.6 481.3L263.6 441.9C261.1 439.7 258.6 437.5 256.2 435.1L245.8 471.3z";

const DANGER_TRIANGLE: &str = "M320 64C334.7 64 348.2 72.1 355.2 85L571.2 485C577.9 497.4 577.6 512.4 570.4 524.5C563.2 536.6 550.1 544 536 544L104 544C89.9 544 76.8 536.6 69.6 524.5C62.4 512.4 62.1 497.4 68.8 485L284.8 85C291.8 72.1 305.3 64 320 64zM320 416C302.3 416 288 430.3 288 448C288 465.7 302.3 480 320 480C337.7 480 352 465.7 352 448C352 430.3 337.7 416 320 416zM320 224C301.8 224 287.3 239.5 288.6 257.7L296 361.7C296.9 374.2 307.4 384 319.9 384C332.5 384 342.9 374.3 343.8 361.7L351.2 257.7C352.5 239.5 338.1 224 319.8 224z";

const WARNING_DIAMOND: &str = "M81 279L279 81C289.9 70.1 304.6 64 320 64C335.4 64 350.1 70.1 361 81L559 279C569.9 289.9 576 304.6 576 320C576 335.4 569.9 350.1 559 361L361 559C350.1 569.9 335.4 576 320 576C304.6 576 289.9 569.9 279 559L81 361C70.1 350.1 64 335.4 64 320C64 304.6 70.1 289.9 81 279z M320 384C302.3 384 288 398.3 288 416C288 433.7 302.3 448 320 448C337.7 448 352 433.7 352 416C352 398.3 337.7 384 320 384z M320 192C301.8 192 287.3 207.5 288.6 225.7L296 329.7C296.9 342.2 307.4 352 319.9 352C332.5 352 342.9 342.3 343.8 329.7L351.2 225.7C352.5 207.5 338.1 192 319.8 192z";

/// Arrow tip, in the 100-unit view box
const ARROW_TIP: DVec2 = dvec2(50.0, 12.0);
const ARROW_SHAFT: f64 = 100.0;
const ARROW_HEAD: f64 = 50.0;
const ARROW_STROKE: f64 = 16.0;

/// Wheel centres and radius, in the 640-unit view box
const WHEELS: [DVec2; 2] = [dvec2(144.0, 464.0), dvec2(496.0, 464.0)];
const WHEEL_RADIUS: f64 = 112.0;
const WHEEL_STROKE: f64 = 28.0;

impl Icon {
    /// Side of the square view box the path data is drawn in
    pub fn view_box(self) -> f64 {
        match self {
            Icon::Arrow => 100.0,
            Icon::Bike | Icon::Walker | Icon::Danger | Icon::Warning => 640.0,
        }
    }

    pub fn paths(self) -> Vec<IconPath> {
        match self {
            Icon::Arrow => arrow_paths(),
            Icon::Bike => {
                let mut paths = vec![IconPath::fill(BIKE_RIDER)];
                paths.extend(
                    WHEELS
                        .iter()
                        .map(|c| IconPath::stroke(ring_path(*c, WHEEL_RADIUS), WHEEL_STROKE, LineCap::Butt)),
                );
                paths
            }
            Icon::Walker => vec![IconPath::fill(WALKER)],
            Icon::Danger => vec![IconPath::fill(DANGER_TRIANGLE)],
            Icon::Warning => vec![IconPath::fill_even_odd(WARNING_DIAMOND)],
        }
    }
}

/// Shaft plus two chevron strokes meeting at the tip.
fn arrow_paths() -> Vec<IconPath> {
    // Directions are SVG angles: 90° points down the page.
    let stroke = |angle_deg: f64, length: f64, cap: LineCap| {
        let end = ARROW_TIP + DVec2::from_angle(angle_deg.to_radians()) * length;
        IconPath::stroke(line_path(ARROW_TIP, end), ARROW_STROKE, cap)
    };
    vec![
        stroke(90.0, ARROW_SHAFT, LineCap::Butt),
        stroke(45.0, ARROW_HEAD, LineCap::Square),
        stroke(135.0, ARROW_HEAD, LineCap::Square),
    ]
}

fn line_path(from: DVec2, to: DVec2) -> String {
    let mut d = String::new();
    let _ = write!(d, "M {} {} L {} {}", trim(from.x), trim(from.y), trim(to.x), trim(to.y));
    d
}

/// Full circle as two half arcs
fn ring_path(center: DVec2, r: f64) -> String {
    let left = center - dvec2(r, 0.0);
    let mut d = String::new();
    let _ = write!(
        d,
        "M {} {} a {r} {r} 0 1 0 {} 0 a {r} {r} 0 1 0 {} 0",
        trim(left.x),
        trim(left.y),
        trim(2.0 * r),
        trim(-2.0 * r),
        r = trim(r),
    );
    d
}

/// Three decimals, trailing zeros trimmed
fn trim(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_is_shaft_and_two_head_strokes_from_the_tip() {
        let paths = Icon::Arrow.paths();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0].d, "M 50 12 L 50 112");
        assert_eq!(paths[1].d, "M 50 12 L 85.355 47.355");
        assert_eq!(paths[2].d, "M 50 12 L 14.645 47.355");
        assert!(paths.iter().all(|p| matches!(p.paint, IconPaint::Stroke { width, .. } if width == 16.0)));
    }

    #[test]
    fn bike_has_rider_and_two_wheel_rings() {
        let paths = Icon::Bike.paths();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[1].d, "M 32 464 a 112 112 0 1 0 224 0 a 112 112 0 1 0 -224 0");
        assert_eq!(paths[2].d, "M 384 464 a 112 112 0 1 0 224 0 a 112 112 0 1 0 -224 0");
    }

    #[test]
    fn warning_diamond_uses_even_odd_cut_out() {
        let paths = Icon::Warning.paths();
        assert_eq!(paths[0].paint, IconPaint::Fill { even_odd: true });
        assert_eq!(Icon::Danger.paths()[0].paint, IconPaint::Fill { even_odd: false });
    }

    #[test]
    fn view_boxes() {
        assert_eq!(Icon::Arrow.view_box(), 100.0);
        for icon in [Icon::Bike, Icon::Walker, Icon::Danger, Icon::Warning] {
            assert_eq!(icon.view_box(), 640.0);
        }
    }
}
