// ABOUTME: Todo storage layer using SQLite
// ABOUTME: Handles CRUD operations for todo records

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use thiserror::Error;
use tracing::debug;

use crate::types::{Todo, TodoCreateInput};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Todo not found")]
    NotFound,
}

pub type StorageResult<T> = Result<T, StorageError>;

pub struct TodoStorage {
    pool: SqlitePool,
}

impl TodoStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_todos(&self) -> StorageResult<Vec<Todo>> {
        self.list_todos_paginated(None, None).await
    }

    pub async fn list_todos_paginated(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> StorageResult<Vec<Todo>> {
        debug!("Fetching todos (limit: {:?}, offset: {:?})", limit, offset);

        // Build query with optional pagination
        let mut query_str =
            String::from("SELECT id, title, description, is_complete FROM todos ORDER BY id");

        if let Some(lim) = limit {
            query_str.push_str(&format!(" LIMIT {}", lim));
        } else if offset.is_some() {
            // SQLite requires a LIMIT clause before OFFSET; -1 means unbounded
            query_str.push_str(" LIMIT -1");
        }
        if let Some(off) = offset {
            query_str.push_str(&format!(" OFFSET {}", off));
        }

        let rows = sqlx::query(&query_str)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(|row| self.row_to_todo(row)).collect()
    }

    pub async fn count_todos(&self) -> StorageResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(count)
    }

    pub async fn get_todo(&self, id: i64) -> StorageResult<Option<Todo>> {
        debug!("Fetching todo: {}", id);

        let row = sqlx::query("SELECT id, title, description, is_complete FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        row.as_ref().map(|row| self.row_to_todo(row)).transpose()
    }

    pub async fn create_todo(&self, input: TodoCreateInput) -> StorageResult<Todo> {
        debug!("Creating todo '{}'", input.title);

        let result = sqlx::query(
            r#"
            INSERT INTO todos (title, description, is_complete)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.is_complete)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let id = result.last_insert_rowid();
        self.get_todo(id).await?.ok_or(StorageError::NotFound)
    }

    /// Persists a fully merged record; the caller owns merge semantics
    pub async fn update_todo(&self, todo: &Todo) -> StorageResult<()> {
        debug!("Updating todo: {}", todo.id);

        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = ?, description = ?, is_complete = ?
            WHERE id = ?
            "#,
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.is_complete)
        .bind(todo.id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn delete_todo(&self, id: i64) -> StorageResult<()> {
        debug!("Deleting todo: {}", id);

        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    fn row_to_todo(&self, row: &SqliteRow) -> StorageResult<Todo> {
        Ok(Todo {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            is_complete: row.try_get("is_complete")?,
        })
    }
}
