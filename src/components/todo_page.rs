//! To-Do Page
//!
//! Filterable task list. Local state follows the server's responses.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FilterBar, NewTodoForm, TodoRow};
use crate::context::use_app_context;
use crate::filter::{filter_todos, TodoFilter};
use crate::models::Todo;
use crate::store::{
    store_find_todo, store_remove_todo, store_set_todos, store_update_todo, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn TodoPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (filter, set_filter) = signal(TodoFilter::default());

    // Load on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_todos(ctx.api).await {
                Ok(todos) => {
                    web_sys::console::log_1(&format!("[Todos] Loaded {} todos", todos.len()).into());
                    store_set_todos(&store, todos);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Todos] Error fetching todos: {}", e).into());
                }
            }
        });
    });

    let on_toggle = Callback::new(move |id: u32| {
        let Some(todo) = store_find_todo(&store, id) else { return };
        spawn_local(async move {
            match api::update_todo(ctx.api, &todo.toggled()).await {
                Ok(updated) => store_update_todo(&store, updated),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Todos] Error updating todo {}: {}", id, e).into());
                }
            }
        });
    });

    let on_delete = Callback::new(move |id: u32| {
        spawn_local(async move {
            match api::delete_todo(ctx.api, id).await {
                Ok(()) => store_remove_todo(&store, id),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Todos] Error deleting todo {}: {}", id, e).into());
                }
            }
        });
    });

    let visible_todos = move || filter_todos(&store.todos().read(), filter.get());

    view! {
        <div class="todo-page">
            <h1>"Lista de Tareas"</h1>

            <NewTodoForm />

            <FilterBar filter=filter set_filter=set_filter />

            <ul class="todo-list">
                <For
                    each=visible_todos
                    key=|todo: &Todo| (todo.id, todo.completed, todo.text.clone())
                    children=move |todo| view! {
                        <TodoRow todo=todo on_toggle=on_toggle on_delete=on_delete />
                    }
                />
            </ul>
        </div>
    }
}
