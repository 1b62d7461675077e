use crate::types::{TodoCreateInput, TodoUpdateInput};

/// Maximum length of the title and description columns
pub const MAX_FIELD_LENGTH: usize = 255;

/// Validation errors for todo data
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates todo data for creation
pub fn validate_todo_data(data: &TodoCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if data.title.trim().is_empty() {
        errors.push(ValidationError::new("title", "Todo title is required"));
    }

    if data.title.chars().count() > MAX_FIELD_LENGTH {
        errors.push(ValidationError::new(
            "title",
            format!("Todo title must be at most {} characters", MAX_FIELD_LENGTH),
        ));
    }

    if let Some(ref description) = data.description {
        if description.chars().count() > MAX_FIELD_LENGTH {
            errors.push(ValidationError::new(
                "description",
                format!(
                    "Todo description must be at most {} characters",
                    MAX_FIELD_LENGTH
                ),
            ));
        }
    }

    errors
}

/// Validates todo update data
pub fn validate_todo_update(data: &TodoUpdateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Validate title if provided
    if let Some(ref title) = data.title {
        if title.trim().is_empty() {
            errors.push(ValidationError::new("title", "Todo title cannot be empty"));
        } else if title.chars().count() > MAX_FIELD_LENGTH {
            errors.push(ValidationError::new(
                "title",
                format!("Todo title must be at most {} characters", MAX_FIELD_LENGTH),
            ));
        }
    }

    // Validate description if provided
    if let Some(ref description) = data.description {
        if description.chars().count() > MAX_FIELD_LENGTH {
            errors.push(ValidationError::new(
                "description",
                format!(
                    "Todo description must be at most {} characters",
                    MAX_FIELD_LENGTH
                ),
            ));
        }
    }

    errors
}
