//! Member Roster Page
//!
//! Lists the roster and lets one row at a time be edited in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::MemberRow;
use crate::context::use_app_context;
use crate::editing::{after_submit, toggle_edit, EditToggle};
use crate::models::{Member, MemberDraft};
use crate::store::{store_set_members, use_app_store, AppStateStoreFields};

#[component]
pub fn MemberRoster() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Edit target and its draft
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);
    let (draft, set_draft) = signal(MemberDraft::default());

    // Load on mount and after every successful update
    Effect::new(move |_| {
        let trigger = ctx.members_reload.get();
        spawn_local(async move {
            match api::list_members(ctx.api).await {
                Ok(members) => {
                    web_sys::console::log_1(&format!("[Roster] Loaded {} members, trigger={}", members.len(), trigger).into());
                    store_set_members(&store, members);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Roster] Error fetching members: {}", e).into());
                }
            }
        });
    });

    let on_toggle_edit = Callback::new(move |member: Member| {
        match toggle_edit(editing_id.get_untracked(), &member) {
            EditToggle::Open(id, fresh) => {
                set_draft.set(fresh);
                set_editing_id.set(Some(id));
            }
            EditToggle::Close => set_editing_id.set(None),
        }
    });

    let on_submit = Callback::new(move |id: u32| {
        let current = draft.get_untracked();
        spawn_local(async move {
            let result = api::update_member(ctx.api, id, &current.to_update()).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[Roster] Error updating member {}: {}", id, e).into());
            }
            let outcome = after_submit(editing_id.get_untracked(), &result);
            set_editing_id.set(outcome.editing_id);
            if outcome.reload {
                ctx.reload_members();
            }
        });
    });

    view! {
        <div class="roster-page">
            <h1>"Consultar Integrantes"</h1>
            <p>"Bienvenido a la página de consulta de integrantes."</p>

            <ul class="member-list">
                <li class="member-header">
                    <span>"Nombre"</span>
                    <span>"Código"</span>
                    <span>"Edad"</span>
                </li>
                <Show
                    when=move || !store.members().read().is_empty()
                    fallback=|| view! { <li class="member-empty">"No hay integrantes disponibles."</li> }
                >
                    // Keyed on content so refetched edits re-render
                    <For
                        each=move || store.members().get()
                        key=|member: &Member| (member.id, member.name.clone(), member.code.clone(), member.age)
                        children=move |member| view! {
                            <MemberRow
                                member=member
                                editing_id=editing_id
                                draft=draft
                                set_draft=set_draft
                                on_toggle_edit=on_toggle_edit
                                on_submit=on_submit
                            />
                        }
                    />
                </Show>
            </ul>
        </div>
    }
}
