//! Pixel value parsing and validation.

use nom::{
    IResult,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{pair, terminated, tuple},
};

use crate::ManifestError;

/// Parse a floating point or integer number.
///
/// Signs and fractions are accepted here so they can be rejected with a
/// precise message instead of a syntax error.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(number_token, |s: &str| s.parse::<f64>())(input)
}

/// The text of a number (e.g. `400`, `-2`, `12.5`).
pub fn number_token(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(char('-')),
        digit1,
        opt(pair(char('.'), digit1)),
    )))(input)
}

/// Parse a length with an optional `px` suffix.
pub fn parse_length(input: &str) -> IResult<&str, f64> {
    terminated(parse_number, opt(tag("px")))(input)
}

/// Convert the raw text of `property` into whole pixels.
pub fn to_pixels(property: &str, raw: &str) -> Result<u32, ManifestError> {
    let invalid = |reason| ManifestError::InvalidValue {
        property: property.to_string(),
        value: raw.to_string(),
        reason,
    };

    let value = match all_consuming(parse_length)(raw.trim()) {
        Ok((_, value)) => value,
        Err(_) => return Err(invalid("expected a number of pixels")),
    };

    if !value.is_finite() || value > u32::MAX as f64 {
        return Err(invalid("out of range"));
    }
    if value < 0.0 {
        return Err(invalid("must not be negative"));
    }
    if value.fract() != 0.0 {
        return Err(invalid("must be a whole number of pixels"));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_px_lengths() {
        assert_eq!(to_pixels("width", "1000"), Ok(1000));
        assert_eq!(to_pixels("width", "1000px"), Ok(1000));
        assert_eq!(to_pixels("width", "  24px "), Ok(24));
        assert_eq!(to_pixels("padding", "0"), Ok(0));
        assert_eq!(to_pixels("padding", "2.0"), Ok(2));
    }

    #[test]
    fn rejects_negative() {
        let err = to_pixels("padding", "-2").unwrap_err();
        assert!(matches!(
            err,
            ManifestError::InvalidValue { reason: "must not be negative", .. }
        ));
    }

    #[test]
    fn rejects_fractional() {
        let err = to_pixels("width", "99.5px").unwrap_err();
        assert!(matches!(
            err,
            ManifestError::InvalidValue { reason: "must be a whole number of pixels", .. }
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(to_pixels("width", "wide").is_err());
        assert!(to_pixels("width", "10em").is_err());
        assert!(to_pixels("width", "").is_err());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(to_pixels("width", "99999999999").is_err());
    }
}
