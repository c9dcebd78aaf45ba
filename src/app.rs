//! Roster & To-Do Frontend App
//!
//! Root component: page tab bar plus the active page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{MemberRoster, Page, PageTabBar, TodoPage};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (current_page, set_current_page) = signal(Page::default());
    let members_reload = signal(0u32);

    let api = ApiConfig::from_env();
    web_sys::console::log_1(&format!("[APP] Backend at {}", api.base_url()).into());

    // Provide context to all children
    provide_context(AppContext::new(api, members_reload));
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="app-layout">
            <PageTabBar current_page=current_page set_current_page=set_current_page />

            <main class="main-content">
                {move || match current_page.get() {
                    Page::Members => view! { <MemberRoster /> }.into_any(),
                    Page::Todos => view! { <TodoPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
