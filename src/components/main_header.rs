//! Header above the main pane: title, last update, and view toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::store::ChatStore;
use crate::util::format::title_or_untitled;
use crate::util::time::format_datetime;

#[component]
pub fn MainHeader() -> impl IntoView {
    let store = expect_context::<ChatStore>();
    let show_insights = Memo::new(move |_| store.state.with(|s| s.insights.visible));

    let heading = move || {
        store.state.with(|s| {
            if s.insights.visible {
                return "Feedback Insights".to_owned();
            }
            s.current().map_or_else(
                || "Select a conversation".to_owned(),
                |c| title_or_untitled(c.title.as_deref()).to_owned(),
            )
        })
    };

    let updated = move || {
        store.state.with(|s| {
            if s.insights.visible {
                return None;
            }
            s.current().map(|c| format!("Updated {}", format_datetime(&c.updated_at)))
        })
    };

    view! {
        <div class="main-header">
            <div class="main-header__titles">
                <h2 class="main-header__title">{heading}</h2>
                {move || updated().map(|text| view! { <p class="main-header__updated">{text}</p> })}
            </div>
            <div class="main-header__actions">
                <Show when=move || show_insights.get()>
                    <button class="btn" on:click=move |_| spawn_local(store.load_insights())>
                        "Refresh"
                    </button>
                </Show>
                <button class="btn" on:click=move |_| spawn_local(store.toggle_insights())>
                    {move || if show_insights.get() { "Back to Chat" } else { "View Insights" }}
                </button>
            </div>
        </div>
    }
}
