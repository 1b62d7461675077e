// ABOUTME: Pagination parameters for list endpoints
// ABOUTME: Parses optional limit/offset query values and rejects invalid bounds

use serde::Deserialize;

use crate::validator::ValidationError;

/// Query parameters for paginated listings. Both bounds are optional: an
/// absent limit means "no bound" and an absent offset means "start at 0".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageParams {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self { limit, offset }
    }

    /// True when neither bound was supplied
    pub fn is_unbounded(&self) -> bool {
        self.limit.is_none() && self.offset.is_none()
    }

    /// Negative bounds are rejected rather than clamped
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if matches!(self.limit, Some(limit) if limit < 0) {
            errors.push(ValidationError::new("limit", "limit must not be negative"));
        }

        if matches!(self.offset, Some(offset) if offset < 0) {
            errors.push(ValidationError::new(
                "offset",
                "offset must not be negative",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_params() {
        let params = PageParams::default();
        assert!(params.is_unbounded());
        assert!(params.validate().is_empty());
    }

    #[test]
    fn test_partial_bounds_are_not_unbounded() {
        assert!(!PageParams::new(Some(10), None).is_unbounded());
        assert!(!PageParams::new(None, Some(5)).is_unbounded());
    }

    #[test]
    fn test_negative_limit_rejected() {
        let errors = PageParams::new(Some(-1), None).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "limit");
    }

    #[test]
    fn test_negative_offset_rejected() {
        let errors = PageParams::new(None, Some(-5)).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "offset");
    }

    #[test]
    fn test_zero_bounds_accepted() {
        assert!(PageParams::new(Some(0), Some(0)).validate().is_empty());
    }
}
