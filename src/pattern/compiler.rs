//! Pattern compilation.
//!
//! # Responsibilities
//! - Split the expectation text into comma-separated segments
//! - Classify each segment as wildcard, offset, or named host
//! - Extract optional `[latency:loss]` ceilings from named hosts
//!
//! # Design Decisions
//! - Purely syntactic: nothing is checked against the actual path
//! - Surrounding whitespace of a segment is ignored
//! - Threshold fields take the first numeric literal they contain, so
//!   `r1[<20ms:<5%]` and `r1[20:5]` compile to the same token

use thiserror::Error;

use crate::pattern::token::{HostExpectation, PatternToken};

/// Errors raised while compiling an expectation string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An offset segment contained more than one `-`.
    #[error("malformed hop range '{segment}': expected *N or *N-M")]
    MalformedRange { segment: String },

    /// A `[...]` qualifier did not split into exactly two `:` fields.
    #[error("malformed latency/packet loss qualifier in '{segment}': expected host[latency:loss]")]
    MalformedQualifier { segment: String },

    /// An offset or threshold was not a valid number.
    #[error("non-numeric value '{value}' in hop segment '{segment}'")]
    NonNumericValue { segment: String, value: String },
}

/// Compile an expectation string into an ordered token sequence.
pub fn compile(expectation: &str) -> Result<Vec<PatternToken>, ParseError> {
    expectation
        .split(',')
        .map(|segment| compile_segment(segment.trim()))
        .collect()
}

fn compile_segment(segment: &str) -> Result<PatternToken, ParseError> {
    if segment == "*" {
        return Ok(PatternToken::AnyHop);
    }

    match segment.strip_prefix('*') {
        Some(offsets) => compile_offset(segment, offsets),
        None => compile_host(segment).map(PatternToken::Host),
    }
}

fn compile_offset(segment: &str, offsets: &str) -> Result<PatternToken, ParseError> {
    let bounds: Vec<&str> = offsets.split('-').collect();
    match bounds.as_slice() {
        [n] => Ok(PatternToken::FixedOffset {
            n: parse_offset(segment, n)?,
        }),
        [min, max] => Ok(PatternToken::OffsetRange {
            min: parse_offset(segment, min)?,
            max: parse_offset(segment, max)?,
        }),
        _ => Err(ParseError::MalformedRange {
            segment: segment.to_string(),
        }),
    }
}

/// Offsets are plain ASCII digits; signs and blanks are rejected.
fn parse_offset(segment: &str, value: &str) -> Result<usize, ParseError> {
    let non_numeric = || ParseError::NonNumericValue {
        segment: segment.to_string(),
        value: value.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(non_numeric());
    }
    value.parse().map_err(|_| non_numeric())
}

fn compile_host(segment: &str) -> Result<HostExpectation, ParseError> {
    let Some((identity, qualifier)) = segment.split_once('[') else {
        return Ok(HostExpectation::new(segment));
    };

    let fields: Vec<&str> = qualifier.split(':').collect();
    let [latency, loss] = fields.as_slice() else {
        return Err(ParseError::MalformedQualifier {
            segment: segment.to_string(),
        });
    };

    Ok(HostExpectation {
        identity: identity.to_string(),
        latency_ceiling_ms: parse_ceiling(segment, latency)?,
        loss_ceiling_percent: parse_ceiling(segment, loss)?,
    })
}

fn parse_ceiling(segment: &str, field: &str) -> Result<Option<f64>, ParseError> {
    first_number(field)
        .map(|literal| {
            literal.parse::<f64>().map_err(|_| ParseError::NonNumericValue {
                segment: segment.to_string(),
                value: literal.to_string(),
            })
        })
        .transpose()
}

/// Find the first `digits[.digits]` literal in `field`.
fn first_number(field: &str) -> Option<&str> {
    let bytes = field.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    // Fractional part only counts when a digit follows the dot.
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    Some(&field[start..end])
}
