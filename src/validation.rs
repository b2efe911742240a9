// Validation utilities module
// Custom rules shared by the request DTOs

use validator::ValidationError;

/// Validates that a price is strictly positive and finite
pub fn validate_positive_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price <= 0.0 {
        let mut err = ValidationError::new("price_must_be_positive");
        err.message = Some("price must be a positive number".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates a text field bound for a Postgres text column.
///
/// Rejects blank values and NUL bytes, which Postgres refuses to store.
pub fn validate_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    if value.contains('\0') {
        let mut err = ValidationError::new("nul_byte");
        err.message = Some("must not contain NUL characters".into());
        return Err(err);
    }
    Ok(())
}
