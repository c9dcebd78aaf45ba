//! Filter Bar Component
//!
//! One button per todo filter; the selected one is highlighted.

use leptos::prelude::*;

use crate::filter::TodoFilter;

#[component]
pub fn FilterBar(
    filter: ReadSignal<TodoFilter>,
    set_filter: WriteSignal<TodoFilter>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <h2>"Filtrar Tareas"</h2>
            <div class="filter-buttons">
                {TodoFilter::ALL.iter().map(|&option| {
                    let is_selected = move || filter.get() == option;
                    view! {
                        <button
                            class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| set_filter.set(option)
                        >
                            {option.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
