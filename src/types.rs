//! Strongly-typed primitives for sign layout (zero-cost newtypes).
//!
//! Layout works in PDF points (1/72 inch). Physical page sizes are declared
//! in millimetres and converted once through [`mm_to_pt`].

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Serialize, Serializer};

/// Points per millimetre.
pub const MM_TO_PT: f64 = 72.0 / 25.4;

/// Convert millimetres to points.
#[inline]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * MM_TO_PT
}

/// Length in points (layout canonical unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Pt(pub f64);

impl Pt {
    pub const ZERO: Pt = Pt(0.0);

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    #[inline]
    pub fn abs(self) -> Pt {
        Pt(self.0.abs())
    }
}

impl Add for Pt {
    type Output = Pt;
    fn add(self, rhs: Pt) -> Pt { Pt(self.0 + rhs.0) }
}
impl Sub for Pt {
    type Output = Pt;
    fn sub(self, rhs: Pt) -> Pt { Pt(self.0 - rhs.0) }
}
impl Mul<f64> for Pt {
    type Output = Pt;
    fn mul(self, rhs: f64) -> Pt { Pt(self.0 * rhs) }
}
impl Div<f64> for Pt {
    type Output = Pt;
    fn div(self, rhs: f64) -> Pt { Pt(self.0 / rhs) }
}
impl Neg for Pt {
    type Output = Pt;
    fn neg(self) -> Pt { Pt(-self.0) }
}

impl AddAssign for Pt {
    fn add_assign(&mut self, rhs: Pt) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Pt {
    fn sub_assign(&mut self, rhs: Pt) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.0)
    }
}

/// Length in millimetres (physical page dimensions)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Mm(pub f64);

impl Mm {
    #[inline]
    pub fn to_pt(self) -> Pt {
        Pt(mm_to_pt(self.0))
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        mm.to_pt()
    }
}

impl fmt::Display for Mm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.0)
    }
}

/// Angle in degrees, clockwise (SVG convention, y axis down)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", self.0)
    }
}

/// 24-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::hex(0xFFFFFF);
    pub const BLACK: Color = Color::hex(0x000000);

    /// Build a colour from a packed `0xRRGGBB` value.
    pub const fn hex(rgb: u32) -> Color {
        Color {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Axis-aligned rectangle in points (top-left origin, y down)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct Frame {
    pub x: Pt,
    pub y: Pt,
    pub width: Pt,
    pub height: Pt,
}

impl Frame {
    pub fn new(x: Pt, y: Pt, width: Pt, height: Pt) -> Self {
        Frame { x, y, width, height }
    }

    pub fn right(&self) -> Pt {
        self.x + self.width
    }

    pub fn bottom(&self) -> Pt {
        self.y + self.height
    }

    pub fn center_x(&self) -> Pt {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> Pt {
        self.y + self.height / 2.0
    }

    /// Shrink on all four sides
    pub fn inset(&self, by: Pt) -> Frame {
        Frame {
            x: self.x + by,
            y: self.y + by,
            width: (self.width - by * 2.0).max(Pt::ZERO),
            height: (self.height - by * 2.0).max(Pt::ZERO),
        }
    }

    /// Whether `other` lies entirely inside this frame
    pub fn contains(&self, other: &Frame) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}
