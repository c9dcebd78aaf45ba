//! Todo Endpoints
//!
//! `/todos` resource.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{NewTodo, Todo};
use super::{ensure_success, http};

pub fn todos_path() -> &'static str {
    "todos"
}

pub fn todo_path(id: u32) -> String {
    format!("todos/{}", id)
}

pub async fn list_todos(config: ApiConfig) -> Result<Vec<Todo>, ApiError> {
    let response = http().get(config.url(todos_path())).send().await?;
    let todos = ensure_success(response)?.json::<Vec<Todo>>().await?;
    Ok(todos)
}

pub async fn create_todo(config: ApiConfig, new_todo: &NewTodo) -> Result<Todo, ApiError> {
    let response = http()
        .post(config.url(todos_path()))
        .json(new_todo)
        .send()
        .await?;
    let created = ensure_success(response)?.json::<Todo>().await?;
    Ok(created)
}

/// Full-record replacement; returns the backend's stored copy
pub async fn update_todo(config: ApiConfig, todo: &Todo) -> Result<Todo, ApiError> {
    let response = http()
        .put(config.url(&todo_path(todo.id)))
        .json(todo)
        .send()
        .await?;
    let updated = ensure_success(response)?.json::<Todo>().await?;
    Ok(updated)
}

pub async fn delete_todo(config: ApiConfig, id: u32) -> Result<(), ApiError> {
    let response = http().delete(config.url(&todo_path(id))).send().await?;
    ensure_success(response)?;
    Ok(())
}
