//! Todo Row Component
//!
//! A single task with complete/undo and delete actions.

use leptos::prelude::*;

use crate::models::Todo;

fn toggle_label(completed: bool) -> &'static str {
    if completed { "Desmarcar" } else { "Completar" }
}

#[component]
pub fn TodoRow(
    todo: Todo,
    on_toggle: Callback<u32>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let id = todo.id;
    let completed = todo.completed;

    view! {
        <li class=if completed { "todo-row completed" } else { "todo-row" }>
            <span class="todo-text">{todo.text}</span>
            <div class="todo-actions">
                <button class="toggle-btn" on:click=move |_| on_toggle.run(id)>
                    {toggle_label(completed)}
                </button>
                <button class="delete-btn" on:click=move |_| on_delete.run(id)>"Eliminar"</button>
            </div>
        </li>
    }
}
