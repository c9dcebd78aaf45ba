//! New Todo Form Component
//!
//! Text input plus add button; blank input is ignored.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::NewTodo;
use crate::store::{store_add_todo, use_app_store};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(body) = NewTodo::from_input(new_text.get_untracked()) else { return };

        spawn_local(async move {
            match api::create_todo(ctx.api, &body).await {
                Ok(created) => {
                    store_add_todo(&store, created);
                    set_new_text.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Todos] Error adding todo: {}", e).into());
                }
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Nueva tarea"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Agregar Tarea"</button>
        </form>
    }
}
