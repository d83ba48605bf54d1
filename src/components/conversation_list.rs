//! Sidebar listing conversations with create, select, and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::types::Conversation;
use crate::state::store::ChatStore;
use crate::util::format::title_or_untitled;
use crate::util::time::format_datetime;

#[component]
pub fn ConversationList() -> impl IntoView {
    let store = expect_context::<ChatStore>();

    let items = Memo::new(move |_| store.state.with(|s| s.conversations.items.clone()));
    let selected = Memo::new(move |_| store.state.with(|s| s.conversations.selected));

    let on_new = move |_| spawn_local(store.create_conversation(None));

    view! {
        <div class="conversation-list">
            <button class="btn btn--primary conversation-list__new" on:click=on_new>
                "New Conversation"
            </button>
            <ul class="conversation-list__items">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|conversation| {
                            let active = selected.get() == Some(conversation.id);
                            view! { <ConversationItem conversation=conversation active=active/> }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

#[component]
fn ConversationItem(conversation: Conversation, active: bool) -> impl IntoView {
    let store = expect_context::<ChatStore>();
    let id = conversation.id;
    let title = title_or_untitled(conversation.title.as_deref()).to_owned();
    let updated = format_datetime(&conversation.updated_at);

    view! {
        <li class="conversation-list__item" class:conversation-list__item--active=active>
            <button
                class="conversation-list__select"
                on:click=move |_| spawn_local(store.select_conversation(id))
            >
                <span class="conversation-list__title">{title}</span>
                <span class="conversation-list__updated">{updated}</span>
            </button>
            <button
                class="conversation-list__delete"
                title="Delete conversation"
                aria-label="Delete conversation"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    spawn_local(store.delete_conversation(id));
                }
            >
                "Delete"
            </button>
        </li>
    }
}
