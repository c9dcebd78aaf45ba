//! Member Edit Form Component
//!
//! Inputs bound to the draft of the member being edited.

use leptos::prelude::*;

use crate::models::{parse_age, MemberDraft};

#[component]
pub fn MemberEditForm(
    draft: ReadSignal<MemberDraft>,
    set_draft: WriteSignal<MemberDraft>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="member-edit-panel">
            <h2>"Editar Integrante"</h2>
            <form
                class="member-edit-form"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <div class="form-field">
                    <label>"Nombre"</label>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.name = value);
                        }
                    />
                </div>
                <div class="form-field">
                    <label>"Código"</label>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.code.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.code = value);
                        }
                    />
                </div>
                <div class="form-field">
                    <label>"Edad"</label>
                    <input
                        type="number"
                        prop:value=move || draft.with(|d| d.age.to_string())
                        on:input=move |ev| {
                            let age = parse_age(&event_target_value(&ev));
                            set_draft.update(|d| d.age = age);
                        }
                    />
                </div>
                <div class="form-actions">
                    <button type="submit">"Modificar"</button>
                </div>
            </form>
        </div>
    }
}
