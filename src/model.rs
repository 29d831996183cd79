//! Sign data model.
//!
//! One struct per sign variant, joined by the [`SignData`] sum type. Values
//! are immutable in spirit: every edit goes through a `with_*` helper that
//! consumes the old value and returns the new one.
//!
//! The JSON shape is the persistence format: an object tagged by
//! `"signType"` with camelCase fields.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ValidationError;

/// Lowest and highest trail grade.
pub const GRADE_RANGE: std::ops::RangeInclusive<u8> = 1..=6;

/// Eight-point compass direction for sign arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbol shown at the top of a warning post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSymbol {
    /// Triangle
    Danger,
    /// Diamond
    Warning,
}

/// Word on one half of a hard/easy post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostWord {
    Hard,
    Easy,
}

impl PostWord {
    pub fn as_str(self) -> &'static str {
        match self {
            PostWord::Hard => "HARD",
            PostWord::Easy => "EASY",
        }
    }
}

impl fmt::Display for PostWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-grade backgrounds available to small wayfinding signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedBackground {
    #[serde(rename = "nograde")]
    NoGrade,
    Warning,
    Danger,
}

/// Small wayfinding background: a trail grade or one of the named fills.
///
/// Serialised as a bare number (`4`) or a string (`"nograde"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SmallBackground {
    Grade(u8),
    Named(NamedBackground),
}

/// Large wayfinding sign (240 x 480 mm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WayfindingSign {
    /// May contain explicit `\n` line breaks
    pub trail_name: String,
    pub grade: u8,
    pub grade_note: String,
    pub distance: String,
    pub distance_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub arrow_direction: Direction,
    pub bike: bool,
    pub walk: bool,
    /// Logo id -> shown. Missing keys mean shown.
    #[serde(default)]
    pub logo_toggles: BTreeMap<String, bool>,
}

impl Default for WayfindingSign {
    fn default() -> Self {
        WayfindingSign {
            trail_name: "Te Piki".to_string(),
            grade: 4,
            grade_note: "Climb".to_string(),
            distance: "1.2 km".to_string(),
            distance_type: "Uphill biking\nTwo way walking".to_string(),
            latitude: -41.2971,
            longitude: 174.7222,
            arrow_direction: Direction::N,
            bike: true,
            walk: true,
            logo_toggles: BTreeMap::new(),
        }
    }
}

impl WayfindingSign {
    pub fn with_trail_name(self, trail_name: impl Into<String>) -> Self {
        WayfindingSign { trail_name: trail_name.into(), ..self }
    }

    pub fn with_grade(self, grade: u8) -> Self {
        WayfindingSign { grade, ..self }
    }

    pub fn with_arrow(self, arrow_direction: Direction) -> Self {
        WayfindingSign { arrow_direction, ..self }
    }

    pub fn with_activities(self, bike: bool, walk: bool) -> Self {
        WayfindingSign { bike, walk, ..self }
    }

    pub fn with_location(self, latitude: f64, longitude: f64) -> Self {
        WayfindingSign { latitude, longitude, ..self }
    }

    pub fn with_logo(mut self, id: impl Into<String>, shown: bool) -> Self {
        self.logo_toggles.insert(id.into(), shown);
        self
    }
}

/// Tall warning post (115 x 900 mm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningPost {
    pub symbol: WarningSymbol,
    /// Rendered one character per line
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<u8>,
}

impl Default for WarningPost {
    fn default() -> Self {
        WarningPost {
            symbol: WarningSymbol::Danger,
            title: "JUMP".to_string(),
            grade: Some(6),
        }
    }
}

impl WarningPost {
    pub fn with_symbol(self, symbol: WarningSymbol) -> Self {
        WarningPost { symbol, ..self }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        WarningPost { title: title.into(), ..self }
    }

    pub fn with_grade(self, grade: Option<u8>) -> Self {
        WarningPost { grade, ..self }
    }
}

/// Two-section hard/easy post (115 x 900 mm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardEasyPost {
    pub top_direction: Direction,
    pub top_word: PostWord,
    pub top_grade: u8,
    pub bottom_direction: Direction,
    pub bottom_word: PostWord,
    pub bottom_grade: u8,
}

impl Default for HardEasyPost {
    fn default() -> Self {
        HardEasyPost {
            top_direction: Direction::NW,
            top_word: PostWord::Hard,
            top_grade: 5,
            bottom_direction: Direction::NE,
            bottom_word: PostWord::Easy,
            bottom_grade: 3,
        }
    }
}

impl HardEasyPost {
    pub fn with_top(self, word: PostWord, direction: Direction, grade: u8) -> Self {
        HardEasyPost {
            top_word: word,
            top_direction: direction,
            top_grade: grade,
            ..self
        }
    }

    pub fn with_bottom(self, word: PostWord, direction: Direction, grade: u8) -> Self {
        HardEasyPost {
            bottom_word: word,
            bottom_direction: direction,
            bottom_grade: grade,
            ..self
        }
    }
}

/// Small landscape wayfinding sign (80 x 240 mm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmallWayfindingSign {
    pub trail_name: String,
    pub background: SmallBackground,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_direction: Option<Direction>,
    #[serde(default)]
    pub activity_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub print_guides: bool,
}

impl Default for SmallWayfindingSign {
    fn default() -> Self {
        SmallWayfindingSign {
            trail_name: "Te Piki".to_string(),
            background: SmallBackground::Grade(3),
            arrow_direction: Some(Direction::E),
            activity_description: String::new(),
            latitude: None,
            longitude: None,
            print_guides: false,
        }
    }
}

impl SmallWayfindingSign {
    pub fn with_trail_name(self, trail_name: impl Into<String>) -> Self {
        SmallWayfindingSign { trail_name: trail_name.into(), ..self }
    }

    pub fn with_background(self, background: SmallBackground) -> Self {
        SmallWayfindingSign { background, ..self }
    }

    pub fn with_arrow(self, arrow_direction: Option<Direction>) -> Self {
        SmallWayfindingSign { arrow_direction, ..self }
    }

    pub fn with_activity(self, activity_description: impl Into<String>) -> Self {
        SmallWayfindingSign {
            activity_description: activity_description.into(),
            ..self
        }
    }

    pub fn with_location(self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        SmallWayfindingSign { latitude, longitude, ..self }
    }

    pub fn with_print_guides(self, print_guides: bool) -> Self {
        SmallWayfindingSign { print_guides, ..self }
    }

    /// Both coordinates, or nothing
    pub fn location(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Discriminant of [`SignData`], also used for stored-state slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SignType {
    #[default]
    #[serde(rename = "wayfinding")]
    Wayfinding,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "hardeasy")]
    HardEasy,
    #[serde(rename = "smallwayfinding")]
    SmallWayfinding,
    /// Any tag this build does not know; routed to the wayfinding engine
    #[serde(other)]
    Unknown,
}

impl SignType {
    pub const KNOWN: [SignType; 4] = [
        SignType::Wayfinding,
        SignType::Warning,
        SignType::HardEasy,
        SignType::SmallWayfinding,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SignType::Wayfinding | SignType::Unknown => "wayfinding",
            SignType::Warning => "warning",
            SignType::HardEasy => "hardeasy",
            SignType::SmallWayfinding => "smallwayfinding",
        }
    }

    /// Resolve unknown tags to the wayfinding slot
    pub fn or_wayfinding(self) -> SignType {
        match self {
            SignType::Unknown => SignType::Wayfinding,
            known => known,
        }
    }
}

impl fmt::Display for SignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any sign, tagged by `signType`.
///
/// A missing or unrecognised tag reads the body as a wayfinding sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "signType")]
pub enum SignData {
    #[serde(rename = "wayfinding")]
    Wayfinding(WayfindingSign),
    #[serde(rename = "warning")]
    Warning(WarningPost),
    #[serde(rename = "hardeasy")]
    HardEasy(HardEasyPost),
    #[serde(rename = "smallwayfinding")]
    SmallWayfinding(SmallWayfindingSign),
}

impl Default for SignData {
    fn default() -> Self {
        SignData::Wayfinding(WayfindingSign::default())
    }
}

impl<'de> Deserialize<'de> for SignData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        fn body<T: DeserializeOwned, E: de::Error>(value: serde_json::Value) -> Result<T, E> {
            serde_json::from_value(value).map_err(E::custom)
        }

        let value = serde_json::Value::deserialize(deserializer)?;
        let tag = match value.get("signType") {
            Some(tag) => SignType::deserialize(tag).map_err(de::Error::custom)?,
            None => SignType::Unknown,
        };
        Ok(match tag.or_wayfinding() {
            SignType::Warning => SignData::Warning(body(value)?),
            SignType::HardEasy => SignData::HardEasy(body(value)?),
            SignType::SmallWayfinding => SignData::SmallWayfinding(body(value)?),
            SignType::Wayfinding | SignType::Unknown => SignData::Wayfinding(body(value)?),
        })
    }
}

impl SignData {
    pub fn sign_type(&self) -> SignType {
        match self {
            SignData::Wayfinding(_) => SignType::Wayfinding,
            SignData::Warning(_) => SignType::Warning,
            SignData::HardEasy(_) => SignType::HardEasy,
            SignData::SmallWayfinding(_) => SignType::SmallWayfinding,
        }
    }

    /// Built-in defaults for a sign type (unknown tags get wayfinding)
    pub fn default_for(sign_type: SignType) -> SignData {
        match sign_type {
            SignType::Wayfinding | SignType::Unknown => SignData::Wayfinding(WayfindingSign::default()),
            SignType::Warning => SignData::Warning(WarningPost::default()),
            SignType::HardEasy => SignData::HardEasy(HardEasyPost::default()),
            SignType::SmallWayfinding => SignData::SmallWayfinding(SmallWayfindingSign::default()),
        }
    }

    /// Check the documented value ranges.
    ///
    /// Layout never calls this: out-of-range grades render with the
    /// fallback colour. The persistence shell uses it to reject
    /// malformed stored state.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            SignData::Wayfinding(sign) => {
                check_grade("grade", sign.grade)?;
                check_coordinates(sign.latitude, sign.longitude)
            }
            SignData::Warning(post) => match post.grade {
                Some(grade) => check_grade("grade", grade),
                None => Ok(()),
            },
            SignData::HardEasy(post) => {
                check_grade("topGrade", post.top_grade)?;
                check_grade("bottomGrade", post.bottom_grade)
            }
            SignData::SmallWayfinding(sign) => {
                if let SmallBackground::Grade(grade) = sign.background {
                    check_grade("background", grade)?;
                }
                match sign.location() {
                    Some((lat, lon)) => check_coordinates(lat, lon),
                    None => Ok(()),
                }
            }
        }
    }
}

fn check_grade(field: &'static str, grade: u8) -> Result<(), ValidationError> {
    if GRADE_RANGE.contains(&grade) {
        Ok(())
    } else {
        Err(ValidationError::GradeOutOfRange { field, grade })
    }
}

fn check_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::Coordinate { axis: "latitude", value: latitude });
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::Coordinate { axis: "longitude", value: longitude });
    }
    Ok(())
}

impl From<WayfindingSign> for SignData {
    fn from(sign: WayfindingSign) -> Self {
        SignData::Wayfinding(sign)
    }
}

impl From<WarningPost> for SignData {
    fn from(post: WarningPost) -> Self {
        SignData::Warning(post)
    }
}

impl From<HardEasyPost> for SignData {
    fn from(post: HardEasyPost) -> Self {
        SignData::HardEasy(post)
    }
}

impl From<SmallWayfindingSign> for SignData {
    fn from(sign: SmallWayfindingSign) -> Self {
        SignData::SmallWayfinding(sign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(sign: SignData) {
        let json = serde_json::to_string(&sign).unwrap();
        let back: SignData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sign, "json was {json}");
    }

    #[test]
    fn every_variant_round_trips() {
        round_trip(WayfindingSign::default().with_logo("ncc", false).into());
        round_trip(WarningPost::default().into());
        round_trip(WarningPost::default().with_grade(None).into());
        round_trip(HardEasyPost::default().into());
        round_trip(
            SmallWayfindingSign::default()
                .with_background(SmallBackground::Named(NamedBackground::NoGrade))
                .with_arrow(None)
                .with_location(Some(-41.3), Some(174.8))
                .with_print_guides(true)
                .into(),
        );
    }

    #[test]
    fn wire_format_uses_camel_case_and_sign_type_tag() {
        let json = serde_json::to_value(SignData::from(HardEasyPost::default())).unwrap();
        assert_eq!(json["signType"], "hardeasy");
        assert_eq!(json["topWord"], "HARD");
        assert_eq!(json["bottomDirection"], "NE");
        assert_eq!(json["topGrade"], 5);
    }

    #[test]
    fn small_background_accepts_number_or_name() {
        let grade: SmallBackground = serde_json::from_str("2").unwrap();
        assert_eq!(grade, SmallBackground::Grade(2));
        let named: SmallBackground = serde_json::from_str("\"nograde\"").unwrap();
        assert_eq!(named, SmallBackground::Named(NamedBackground::NoGrade));
        let danger: SmallBackground = serde_json::from_str("\"danger\"").unwrap();
        assert_eq!(danger, SmallBackground::Named(NamedBackground::Danger));
        assert!(serde_json::from_str::<SmallBackground>("\"purple\"").is_err());
    }

    #[test]
    fn missing_logo_toggles_deserialize_empty() {
        let json = r#"{
            "signType": "wayfinding",
            "trailName": "Koru",
            "grade": 2,
            "gradeNote": "",
            "distance": "800 m",
            "distanceType": "One way",
            "latitude": -41.29,
            "longitude": 174.7,
            "arrowDirection": "SW",
            "bike": true,
            "walk": false
        }"#;
        let SignData::Wayfinding(sign) = serde_json::from_str(json).unwrap() else {
            panic!("expected wayfinding");
        };
        assert!(sign.logo_toggles.is_empty());
        assert_eq!(sign.arrow_direction, Direction::SW);
    }

    #[test]
    fn unknown_sign_type_tag_maps_to_unknown() {
        let tag: SignType = serde_json::from_str("\"billboard\"").unwrap();
        assert_eq!(tag, SignType::Unknown);
        assert_eq!(tag.or_wayfinding(), SignType::Wayfinding);
        assert_eq!(SignData::default_for(tag).sign_type(), SignType::Wayfinding);
    }

    #[test]
    fn unknown_sign_tag_reads_a_wayfinding_body() {
        let json = r#"{
            "signType": "billboard",
            "trailName": "Koru",
            "grade": 2,
            "gradeNote": "",
            "distance": "800 m",
            "distanceType": "One way",
            "latitude": -41.29,
            "longitude": 174.7,
            "arrowDirection": "E",
            "bike": true,
            "walk": true
        }"#;
        let SignData::Wayfinding(sign) = serde_json::from_str(json).unwrap() else {
            panic!("expected wayfinding");
        };
        assert_eq!(sign.trail_name, "Koru");
        assert_eq!(sign.arrow_direction, Direction::E);

        let untagged = json.replace(r#""signType": "billboard","#, "");
        let parsed: SignData = serde_json::from_str(&untagged).unwrap();
        assert_eq!(parsed, SignData::Wayfinding(sign));
    }

    #[test]
    fn unknown_sign_tag_with_a_partial_body_is_rejected() {
        assert!(serde_json::from_str::<SignData>(r#"{"signType":"billboard","trailName":"Nope"}"#).is_err());
        assert!(serde_json::from_str::<SignData>(r#"{"signType":"warning","trailName":"Nope"}"#).is_err());
    }

    #[test]
    fn edits_replace_instead_of_mutating() {
        let original = WarningPost::default();
        let edited = original.clone().with_title("DROP");
        assert_eq!(original.title, "JUMP");
        assert_eq!(edited.title, "DROP");
        assert_eq!(edited.grade, original.grade);
    }

    #[test]
    fn validate_rejects_out_of_range_grades() {
        assert!(SignData::default().validate().is_ok());
        let bad = SignData::from(WayfindingSign::default().with_grade(9));
        assert!(matches!(
            bad.validate(),
            Err(ValidationError::GradeOutOfRange { field: "grade", grade: 9 })
        ));
        let bad_post = SignData::from(HardEasyPost::default().with_bottom(PostWord::Easy, Direction::S, 0));
        assert!(matches!(
            bad_post.validate(),
            Err(ValidationError::GradeOutOfRange { field: "bottomGrade", .. })
        ));
    }

    #[test]
    fn validate_rejects_impossible_coordinates() {
        let bad = SignData::from(WayfindingSign::default().with_location(95.0, 10.0));
        assert!(matches!(bad.validate(), Err(ValidationError::Coordinate { axis: "latitude", .. })));
        let half = SignData::from(SmallWayfindingSign::default().with_location(Some(200.0), None));
        // Half a location is ignored, not validated
        assert!(half.validate().is_ok());
    }
}
