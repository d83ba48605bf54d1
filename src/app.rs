//! Root application component and context wiring.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::chat_view::ChatView;
use crate::components::conversation_list::ConversationList;
use crate::components::insights_view::InsightsView;
use crate::components::main_header::MainHeader;
use crate::config::ClientConfig;
use crate::state::store::ChatStore;

/// Root application component.
///
/// Provides the shared [`ChatStore`], injects the stylesheet link, and kicks
/// off the initial load and message polling.
#[component]
pub fn App(#[prop(optional)] config: Option<ClientConfig>) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_default();
    let stylesheet = config.stylesheet_href.clone();
    let store = ChatStore::new(config);
    provide_context(store);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(store.init());
    on_cleanup(move || store.stop_polling());

    let show_insights = Memo::new(move |_| store.state.with(|s| s.insights.visible));

    view! {
        <Stylesheet id="app-style" href=stylesheet/>
        <Title text="Chat"/>

        <div class="app">
            <aside class="app__sidebar">
                <ConversationList/>
            </aside>
            <main class="app__main">
                <MainHeader/>
                {move || {
                    if show_insights.get() {
                        view! { <InsightsView/> }.into_any()
                    } else {
                        view! { <ChatView/> }.into_any()
                    }
                }}
            </main>
        </div>
    }
}
