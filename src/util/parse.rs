use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from a stored Discord ID string
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed string to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflake() {
        assert_eq!(
            parse_u64_from_string("123456789012345678").unwrap(),
            123456789012345678
        );
    }

    #[test]
    fn rejects_non_numeric_id() {
        let result = parse_u64_from_string("general");
        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::ParseStringId { .. }))
        ));
    }
}
