//! One timeline row, with helpfulness controls on AI replies.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::types::{Message, Role};
use crate::state::store::ChatStore;
use crate::state::thread::ChatEntry;
use crate::util::format::feedback_status;
use crate::util::html::render_markdown_html;
use crate::util::time::{format_datetime, format_time};

#[component]
pub fn MessageItem(entry: ChatEntry) -> impl IntoView {
    let role = entry.role();
    let is_user = role == Role::User;
    let pending = entry.is_pending();
    let time = match &entry {
        ChatEntry::Pending(_) => "Sending…".to_owned(),
        ChatEntry::Confirmed(msg) => format_time(&msg.created_at),
    };

    let body = match &entry {
        ChatEntry::Confirmed(msg) if msg.role == Role::Ai => {
            let rendered = render_markdown_html(&msg.text);
            view! { <div class="message__body message__body--markdown" inner_html=rendered></div> }.into_any()
        }
        _ => {
            let text = entry.text().to_owned();
            view! { <div class="message__body">{text}</div> }.into_any()
        }
    };

    let controls = entry
        .as_confirmed()
        .filter(|msg| msg.role == Role::Ai)
        .cloned()
        .map(|message| view! { <FeedbackControls message=message/> });

    view! {
        <div
            class="message"
            class:message--user=is_user
            class:message--ai=!is_user
            class:message--pending=pending
        >
            <div class="message__meta">{format!("{} • {time}", role.label())}</div>
            {body}
            {controls}
        </div>
    }
}

#[component]
fn FeedbackControls(message: Message) -> impl IntoView {
    let store = expect_context::<ChatStore>();
    let id = message.id;
    let max_comment = store.config().max_comment_chars.to_string();
    let current = message.feedback.as_ref().map(|f| f.is_helpful);
    let helpful_active = current == Some(true);
    let not_helpful_active = current == Some(false);
    let status = message
        .feedback
        .as_ref()
        .map(|f| feedback_status(f, &format_datetime(&f.created_at)));

    let submitting = move || store.state.with(|s| s.feedback.is_submitting(id));
    let vote = move |is_helpful: bool| {
        if store.state.with_untracked(|s| s.feedback.is_submitting(id)) {
            return;
        }
        spawn_local(store.submit_feedback(id, is_helpful));
    };

    view! {
        <div class="feedback">
            <div class="feedback__prompt">"Was this helpful?"</div>
            <div class="feedback__buttons">
                <button
                    class="feedback__button feedback__button--helpful"
                    class:feedback__button--active=helpful_active
                    disabled=submitting
                    on:click=move |_| vote(true)
                >
                    "Helpful"
                </button>
                <button
                    class="feedback__button feedback__button--not-helpful"
                    class:feedback__button--active=not_helpful_active
                    disabled=submitting
                    on:click=move |_| vote(false)
                >
                    "Not Helpful"
                </button>
            </div>
            <label class="feedback__label">
                "Optional comment"
                <textarea
                    class="feedback__comment"
                    rows="2"
                    maxlength=max_comment
                    disabled=submitting
                    prop:value=move || store.state.with(|s| s.feedback.draft(id).to_owned())
                    on:input=move |ev| store.set_feedback_draft(id, event_target_value(&ev))
                ></textarea>
            </label>
            {status.map(|text| view! { <div class="feedback__status">{text}</div> })}
        </div>
    }
}
