//! Fixed colour and rotation lookups shared by every sign.

use crate::model::{Direction, NamedBackground, SmallBackground, WarningSymbol};
use crate::types::{Angle, Color};

/// Trail grade colours, index 0 is grade 1.
pub const GRADE_COLORS: [Color; 6] = [
    Color::hex(0x8BBF4B), // light green
    Color::hex(0x45A525), // bright green
    Color::hex(0x47ACEC), // cyan
    Color::hex(0x1538A6), // deep blue
    Color::hex(0x27292E), // dark grey
    Color::hex(0xC63823), // red-orange
];

pub const WARNING_YELLOW: Color = Color::hex(0xECBA42);
pub const DANGER_RED: Color = Color::hex(0xC63823);
pub const NO_GRADE_GREY: Color = Color::hex(0x5F6368);

/// Colour for a trail grade.
///
/// Anything outside 1..=6 gets the grade 3 colour. Stored data is not
/// trusted to be in range, so this never fails.
pub fn grade_color(grade: impl Into<i64>) -> Color {
    let grade = grade.into();
    match grade {
        1..=6 => GRADE_COLORS[(grade - 1) as usize],
        _ => GRADE_COLORS[2],
    }
}

/// Background fill for small wayfinding signs.
pub fn small_wayfinding_background_color(background: SmallBackground) -> Color {
    match background {
        SmallBackground::Grade(grade) => grade_color(grade),
        SmallBackground::Named(NamedBackground::NoGrade) => NO_GRADE_GREY,
        SmallBackground::Named(NamedBackground::Warning) => WARNING_YELLOW,
        SmallBackground::Named(NamedBackground::Danger) => DANGER_RED,
    }
}

/// Clockwise rotation for an arrow that points north at 0°.
pub fn arrow_rotation_degrees(direction: Direction) -> Angle {
    let steps = match direction {
        Direction::N => 0,
        Direction::NE => 1,
        Direction::E => 2,
        Direction::SE => 3,
        Direction::S => 4,
        Direction::SW => 5,
        Direction::W => 6,
        Direction::NW => 7,
    };
    Angle(45.0 * f64::from(steps))
}

pub fn warning_color(symbol: WarningSymbol) -> Color {
    match symbol {
        WarningSymbol::Warning => WARNING_YELLOW,
        WarningSymbol::Danger => DANGER_RED,
    }
}
