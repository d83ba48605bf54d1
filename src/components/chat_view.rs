//! Chat pane: message timeline and composer for the selected conversation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::message_item::MessageItem;
use crate::state::compose::char_counter;
use crate::state::store::ChatStore;

#[component]
pub fn ChatView() -> impl IntoView {
    let store = expect_context::<ChatStore>();
    let has_selection = Memo::new(move |_| store.state.with(|s| s.conversations.selected.is_some()));

    view! {
        <Show
            when=move || has_selection.get()
            fallback=|| {
                view! {
                    <div class="chat-view__placeholder">
                        <p>"Select a conversation or create a new one to begin chatting."</p>
                    </div>
                }
            }
        >
            <MessageList/>
            <Composer/>
        </Show>
    }
}

#[component]
fn MessageList() -> impl IntoView {
    let store = expect_context::<ChatStore>();
    let entries = Memo::new(move |_| store.state.with(|s| s.thread.entries.clone()));
    let scroll_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = entries.with(Vec::len);

        #[cfg(feature = "csr")]
        {
            if let Some(el) = scroll_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="chat-view__messages" node_ref=scroll_ref>
            {move || {
                let entries = entries.get();
                if entries.is_empty() {
                    return view! { <div class="chat-view__empty">"No messages yet. Say hi!"</div> }.into_any();
                }
                entries
                    .into_iter()
                    .map(|entry| view! { <MessageItem entry=entry/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn Composer() -> impl IntoView {
    let store = expect_context::<ChatStore>();
    let max = store.config().max_message_chars;
    let input = RwSignal::new(String::new());
    let placeholder = format!("Type a message (max {max} chars)");

    let submit = move || {
        let raw = input.get_untracked();
        let Some(text) = store.accept_draft(&raw) else {
            return;
        };
        input.set(String::new());
        spawn_local(store.send_message(text));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit();
        }
    };

    let over_limit = move || input.with(|t| t.trim().chars().count() > max);

    view! {
        <form
            class="composer"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit();
            }
        >
            <textarea
                class="composer__input"
                rows="3"
                placeholder=placeholder
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <span class="composer__counter" class:composer__counter--over=over_limit>
                {move || input.with(|t| char_counter(t, max))}
            </span>
            <button class="btn btn--primary" type="submit">
                "Send"
            </button>
        </form>
    }
}
