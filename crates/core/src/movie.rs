//! Movie field validation.
//!
//! Field-level rules for the movie catalog: name and description must be
//! present, and the rating sits on a fixed 0-10 scale.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for a movie name.
pub const MAX_NAME_LEN: usize = 200;

/// Minimum allowed rating value.
pub const MIN_RATING: f64 = 0.0;

/// Maximum allowed rating value.
pub const MAX_RATING: f64 = 10.0;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a movie name: non-empty and within length limit.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(
            "Movie name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Movie name too long: {} chars (max {MAX_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}

/// Validate a movie description: non-empty.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.is_empty() {
        return Err(CoreError::Validation(
            "Movie description must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a rating value: finite and within the allowed range.
pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    if !rating.is_finite() {
        return Err(CoreError::Validation(
            "Rating must be a finite number".to_string(),
        ));
    }
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Name validation ---

    #[test]
    fn validate_name_accepts_valid() {
        assert!(validate_name("Un nouveau départ").is_ok());
    }

    #[test]
    fn validate_name_rejects_empty() {
        let err = validate_name("").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn validate_name_rejects_too_long() {
        let long_name = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_name(&long_name).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    // --- Description validation ---

    #[test]
    fn validate_description_accepts_valid() {
        assert!(validate_description("C'est l'histoire d'un nouveau départ.").is_ok());
    }

    #[test]
    fn validate_description_rejects_empty() {
        let err = validate_description("").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    // --- Rating validation ---

    #[test]
    fn validate_rating_accepts_valid_range() {
        assert!(validate_rating(MIN_RATING).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(8.5).is_ok());
        assert!(validate_rating(MAX_RATING).is_ok());
    }

    #[test]
    fn validate_rating_rejects_out_of_range() {
        assert!(validate_rating(-0.1).is_err());
        assert!(validate_rating(10.1).is_err());
    }

    #[test]
    fn validate_rating_rejects_non_finite() {
        assert!(validate_rating(f64::NAN).is_err());
        assert!(validate_rating(f64::INFINITY).is_err());
    }
}
