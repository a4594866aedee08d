//! Validation for loaded content values.

use super::data::MoverConfig;

/// A value that had to be corrected on load: non-positive, NaN or infinite.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub field: &'static str,
    pub value: f32,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} field '{}' must be positive and finite, got {}; clamped",
            self.source_type, self.field, self.value
        )
    }
}

/// Helper macro for checking a magnitude is positive
macro_rules! check_positive {
    ($errors:expr, $source_type:expr, $field:expr, $value:expr) => {
        if !($value.is_finite() && $value > 0.0) {
            $errors.push(ValidationError {
                source_type: $source_type,
                field: $field,
                value: $value,
            });
        }
    };
}

/// Report every non-positive or non-finite magnitude in the mover config.
/// Returns an empty list if all values are usable as-is.
pub fn validate_mover_config(config: &MoverConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    check_positive!(errors, "MoverConfig", "force", config.force);
    check_positive!(errors, "MoverConfig", "jump_impulse", config.jump_impulse);
    errors
}
