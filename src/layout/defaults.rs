//! Fixed sizes and type styles (points unless the name says `_MM`)

use super::text::TextStyle;
use crate::document::Font;

// Wayfinding, 240 x 480 mm portrait
pub const WAYFINDING_WIDTH_MM: f64 = 240.0;
pub const WAYFINDING_HEIGHT_MM: f64 = 480.0;
pub const WAYFINDING_PADDING: f64 = 40.0;
pub const WAYFINDING_ARROW_MM: f64 = 111.0;
pub const WAYFINDING_ARROW_MARGIN_TOP: f64 = 60.0;
pub const WAYFINDING_ARROW_MARGIN_RIGHT: f64 = 60.0;
pub const WAYFINDING_ARROW_MARGIN_BOTTOM: f64 = 40.0;
pub const WAYFINDING_NAME_MARGIN_BOTTOM: f64 = 60.0;
pub const WAYFINDING_GRADE_ROW_GAP: f64 = 30.0;
pub const WAYFINDING_BOTTOM_MARGIN_TOP: f64 = 50.0;
pub const WAYFINDING_ICON_GAP: f64 = 10.0;
pub const WAYFINDING_PLUS_MARGIN_LEFT: f64 = 10.0;
pub const BIKE_ICON_SIZE: f64 = 100.0;
pub const WALKER_ICON_SIZE: f64 = 80.0;
pub const FOOTER_LOGO_HEIGHT: f64 = 80.0;
pub const FOOTER_LOGO_GAP: f64 = 30.0;

pub const TRAIL_NAME: TextStyle = TextStyle::new(Font::OpenSansBold, 100.0, 1.1);
pub const GRADE_ROW: TextStyle = TextStyle::new(Font::OpenSansBold, 50.0, 1.2);
pub const DISTANCE_TYPE: TextStyle = TextStyle::new(Font::OpenSansSemiBold, 40.0, 1.2);
pub const PLUS_SIGN: TextStyle = TextStyle::new(Font::OpenSansBold, 60.0, 1.2);
pub const LOCATION_LABEL: TextStyle = TextStyle::new(Font::OpenSansSemiBold, 24.0, 1.2);
pub const LOCATION_VALUE: TextStyle = TextStyle::new(Font::OpenSansBold, 24.0, 1.2).with_letter_spacing(1.2);

// Small wayfinding, 80 x 240 mm landscape
pub const SMALL_WIDTH_MM: f64 = 80.0;
pub const SMALL_HEIGHT_MM: f64 = 240.0;
pub const SMALL_PADDING: f64 = 28.0;
pub const SMALL_ARROW_MM: f64 = 50.0;
pub const SMALL_COLUMN_GAP: f64 = 20.0;
pub const SMALL_ACTIVITY_MARGIN_TOP: f64 = 6.0;
pub const SMALL_TRAIL_NAME: TextStyle = TextStyle::new(Font::OpenSansBold, 50.0, 1.2);
pub const SMALL_ACTIVITY: TextStyle = TextStyle::new(Font::OpenSansSemiBold, 24.0, 1.2);
pub const SMALL_LOCATION: TextStyle = TextStyle::new(Font::OpenSansSemiBold, 14.0, 1.2).with_letter_spacing(0.6);
pub const GUIDE_INSET_MM: f64 = 2.0;
pub const GUIDE_CORNER_MM: f64 = 4.0;
pub const GUIDE_STROKE: f64 = 0.5;
pub const BOLT_HOLE_MM: f64 = 5.0;
/// Bolt hole centres sit this far left and right of the page centre
pub const BOLT_OFFSET_MM: f64 = 80.0;

// Warning post, 115 x 900 mm portrait
pub const POST_WIDTH_MM: f64 = 115.0;
pub const POST_HEIGHT_MM: f64 = 900.0;
pub const WARNING_PADDING: f64 = 40.0;
pub const WARNING_SYMBOL_SIZE: f64 = 200.0;
pub const WARNING_SYMBOL_SCALE: f64 = 1.2;
pub const WARNING_SYMBOL_MARGIN_BOTTOM: f64 = 40.0;
pub const WARNING_TITLE: TextStyle = TextStyle::new(Font::OverpassBold, 250.0, 1.0);
pub const BADGE_TOP_MM: f64 = 580.0;
pub const BADGE_LENGTH_MM: f64 = 240.0;
pub const BADGE_BORDER: f64 = 10.0;
pub const BADGE_TEXT: TextStyle = TextStyle::new(Font::OverpassBold, 120.0, 1.1);

// Hard/easy post, two 450 mm halves
pub const HALF_HEIGHT_MM: f64 = 450.0;
pub const HALF_PADDING_TOP: f64 = 20.0;
pub const HALF_ARROW_MM: f64 = 70.0;
pub const HALF_ARROW_MARGIN: f64 = 60.0;
pub const HALF_WORD: TextStyle = TextStyle::new(Font::OverpassBold, 150.0, 1.0);
pub const DIVIDER_HEIGHT: f64 = 10.0;
/// How far the bottom half slides up under the top half when colours differ
pub const SEAM_OVERLAP: f64 = 1.0;

/// Share of the arrow circle's diameter taken by the arrow glyph
pub const ARROW_FILL_RATIO: f64 = 0.8;
