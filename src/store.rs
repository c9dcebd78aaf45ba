//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{self, Member, Todo};

/// Collections fetched from the backend
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Roster as last fetched
    pub members: Vec<Member>,
    /// To-do list, kept in sync with server responses
    pub todos: Vec<Todo>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_members(store: &AppStore, members: Vec<Member>) {
    *store.members().write() = members;
}

pub fn store_set_todos(store: &AppStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

/// Append a todo created by the backend
pub fn store_add_todo(store: &AppStore, todo: Todo) {
    store.todos().write().push(todo);
}

/// Update a todo in the store by ID
pub fn store_update_todo(store: &AppStore, updated: Todo) {
    models::replace_todo(&mut store.todos().write(), updated);
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &AppStore, todo_id: u32) {
    models::remove_todo(&mut store.todos().write(), todo_id);
}

/// Look up a todo by ID without subscribing
pub fn store_find_todo(store: &AppStore, todo_id: u32) -> Option<Todo> {
    store
        .todos()
        .read_untracked()
        .iter()
        .find(|todo| todo.id == todo_id)
        .cloned()
}
