use thiserror::Error;
use tracing::{debug, info};

use crate::pagination::PageParams;
use crate::storage::{StorageError, TodoStorage};
use crate::types::{Todo, TodoCreateInput, TodoUpdateInput};
use crate::validator::{validate_todo_data, validate_todo_update, ValidationError};

/// Manager errors
#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Validation errors: {0:?}")]
    Validation(Vec<ValidationError>),
    #[error("Todo not found: {0}")]
    NotFound(i64),
}

pub type ManagerResult<T> = Result<T, ManagerError>;

/// Service layer for todo records; enforces the business rules the
/// storage layer does not know about
pub struct TodosManager {
    storage: TodoStorage,
}

impl TodosManager {
    pub fn new(storage: TodoStorage) -> Self {
        Self { storage }
    }

    pub async fn list_todos(&self, params: PageParams) -> ManagerResult<Vec<Todo>> {
        let validation_errors = params.validate();
        if !validation_errors.is_empty() {
            return Err(ManagerError::Validation(validation_errors));
        }

        let todos = if params.is_unbounded() {
            self.storage.list_todos().await?
        } else {
            self.storage
                .list_todos_paginated(params.limit, params.offset)
                .await?
        };

        debug!("Retrieved {} todos", todos.len());
        Ok(todos)
    }

    pub async fn count_todos(&self) -> ManagerResult<i64> {
        Ok(self.storage.count_todos().await?)
    }

    pub async fn get_todo(&self, id: i64) -> ManagerResult<Todo> {
        self.storage
            .get_todo(id)
            .await?
            .ok_or(ManagerError::NotFound(id))
    }

    pub async fn create_todo(&self, input: TodoCreateInput) -> ManagerResult<Todo> {
        let validation_errors = validate_todo_data(&input);
        if !validation_errors.is_empty() {
            return Err(ManagerError::Validation(validation_errors));
        }

        let todo = self.storage.create_todo(input).await?;

        info!("Created todo '{}' with ID {}", todo.title, todo.id);
        Ok(todo)
    }

    /// Merges the supplied fields onto the stored record and persists the
    /// result. Absent fields preserve current values; last writer wins.
    pub async fn update_todo(&self, id: i64, input: TodoUpdateInput) -> ManagerResult<()> {
        let validation_errors = validate_todo_update(&input);
        if !validation_errors.is_empty() {
            return Err(ManagerError::Validation(validation_errors));
        }

        let mut todo = self.get_todo(id).await?;

        if let Some(title) = input.title {
            todo.title = title;
        }
        if let Some(description) = input.description {
            todo.description = Some(description);
        }
        if let Some(is_complete) = input.is_complete {
            todo.is_complete = Some(is_complete);
        }

        self.storage.update_todo(&todo).await?;

        info!("Updated todo {}", id);
        Ok(())
    }

    pub async fn delete_todo(&self, id: i64) -> ManagerResult<()> {
        let todo = self.get_todo(id).await?;

        self.storage.delete_todo(todo.id).await?;

        info!("Deleted todo '{}' (ID: {})", todo.title, todo.id);
        Ok(())
    }
}
