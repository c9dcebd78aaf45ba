//! Page Tab Bar Component
//!
//! Switches between the roster and the to-do list.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Members,
    Todos,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Members, Page::Todos];

    pub fn title(self) -> &'static str {
        match self {
            Page::Members => "Consultar Integrantes",
            Page::Todos => "Lista de Tareas",
        }
    }
}

#[component]
pub fn PageTabBar(
    current_page: ReadSignal<Page>,
    set_current_page: WriteSignal<Page>,
) -> impl IntoView {
    view! {
        <nav class="page-tab-bar">
            {Page::ALL.iter().map(|&page| {
                let tab_class = move || {
                    if current_page.get() == page { "page-tab active" } else { "page-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| set_current_page.set(page)>
                        {page.title()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
