//! Error types with rich diagnostics using miette
//!
//! Layout itself never fails. These errors come from the edges: reading
//! sign or state JSON, validating ranges, and turning a document into
//! output bytes.

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename, "<url>" or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// Span of the character serde_json stopped at (1-based line/column)
    pub fn span_at(&self, line: usize, column: usize) -> SourceSpan {
        if line == 0 {
            return SourceSpan::new(0.into(), 0);
        }
        let offset = SourceOffset::from_location(&self.source, line, column.max(1));
        let len = usize::from(offset.offset() < self.source.len());
        SourceSpan::new(offset, len)
    }
}

// ============================================================================
// Validation Errors
// ============================================================================

/// A sign value whose shape is fine but whose values are out of range
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be between 1 and 6, got {grade}")]
    #[diagnostic(code(trailsign::model::grade_out_of_range))]
    GradeOutOfRange { field: &'static str, grade: u8 },

    #[error("{axis} {value} is not a valid coordinate")]
    #[diagnostic(code(trailsign::model::invalid_coordinate))]
    Coordinate { axis: &'static str, value: f64 },
}

// ============================================================================
// State Errors
// ============================================================================

/// Errors reading or writing sign data and stored state
#[derive(Error, Diagnostic, Debug)]
pub enum StateError {
    #[error("malformed sign JSON: {message}")]
    #[diagnostic(code(trailsign::state::malformed_json))]
    MalformedJson {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("URL state is not valid base64")]
    #[diagnostic(
        code(trailsign::state::bad_url_encoding),
        help("the `state` parameter must be URL-safe base64 without padding")
    )]
    BadUrlEncoding(#[source] base64::DecodeError),

    #[error("{url} is not an absolute URL")]
    #[diagnostic(
        code(trailsign::state::bad_base_url),
        help("share links need a base such as https://signs.example/")
    )]
    BadBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL state is not UTF-8")]
    #[diagnostic(code(trailsign::state::not_utf8))]
    NotUtf8(#[source] std::string::FromUtf8Error),

    #[error("invalid value in stored sign")]
    #[diagnostic(code(trailsign::state::invalid))]
    Invalid(
        #[source]
        #[diagnostic_source]
        ValidationError,
    ),

    #[error("could not access state file {path}")]
    #[diagnostic(code(trailsign::state::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not serialise state")]
    #[diagnostic(code(trailsign::state::serialise))]
    Serialise(#[source] serde_json::Error),
}

impl StateError {
    /// Wrap a serde_json error with a pointer into the offending text
    pub fn from_json(err: &serde_json::Error, ctx: &SourceContext) -> Self {
        StateError::MalformedJson {
            message: err.to_string(),
            src: ctx.named_source(),
            span: ctx.span_at(err.line(), err.column()),
        }
    }
}

impl From<ValidationError> for StateError {
    fn from(err: ValidationError) -> Self {
        StateError::Invalid(err)
    }
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while turning a document into output bytes
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("logo image {href} is not PNG or JPEG")]
    #[diagnostic(
        code(trailsign::render::unsupported_image),
        help("footer logos must be PNG or JPEG files")
    )]
    UnsupportedImage { href: String },

    #[error("logo image {href} could not be loaded")]
    #[diagnostic(code(trailsign::render::missing_image))]
    MissingImage {
        href: String,
        #[source]
        source: std::io::Error,
    },

    #[error("page size {width} x {height} is not drawable")]
    #[diagnostic(code(trailsign::render::invalid_page))]
    InvalidPage { width: f64, height: f64 },

    #[error("infinite or NaN coordinate in {node}")]
    #[diagnostic(code(trailsign::render::invalid_geometry))]
    InvalidGeometry { node: &'static str },

    #[error("could not serialise SVG: {message}")]
    #[diagnostic(code(trailsign::render::serialise))]
    Serialise { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_points_at_line_and_column() {
        let text = "{\n  \"signType\": \"warning\",\n  \"title\": oops\n}";
        let err = serde_json::from_str::<serde_json::Value>(text).unwrap_err();
        let ctx = SourceContext::new("<input>", text);
        let StateError::MalformedJson { span, .. } = StateError::from_json(&err, &ctx) else {
            panic!("expected malformed json");
        };
        let line = text[..span.offset()].matches('\n').count() + 1;
        assert_eq!(line, 3);
    }

    #[test]
    fn validation_error_message() {
        let err = ValidationError::GradeOutOfRange { field: "topGrade", grade: 7 };
        assert_eq!(err.to_string(), "topGrade must be between 1 and 6, got 7");
    }
}
