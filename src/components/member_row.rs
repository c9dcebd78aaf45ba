//! Member Row Component
//!
//! One roster entry with its edit toggle.

use leptos::prelude::*;

use crate::components::MemberEditForm;
use crate::editing::edit_button_label;
use crate::models::{Member, MemberDraft};

#[component]
pub fn MemberRow(
    member: Member,
    editing_id: ReadSignal<Option<u32>>,
    draft: ReadSignal<MemberDraft>,
    set_draft: WriteSignal<MemberDraft>,
    on_toggle_edit: Callback<Member>,
    on_submit: Callback<u32>,
) -> impl IntoView {
    let id = member.id;
    let name = member.name.clone();
    let code = member.code.clone();
    let age = member.age;
    let is_editing = move || editing_id.get() == Some(id);

    view! {
        <li class="member-row">
            <div class="member-fields">
                <span>{name}</span>
                <span>{code}</span>
                <span>{age}</span>
                <button
                    class="edit-btn"
                    on:click=move |_| on_toggle_edit.run(member.clone())
                >
                    {move || edit_button_label(editing_id.get(), id)}
                </button>
            </div>

            <Show when=is_editing>
                <MemberEditForm
                    draft=draft
                    set_draft=set_draft
                    on_submit=Callback::new(move |_| on_submit.run(id))
                />
            </Show>
        </li>
    }
}
