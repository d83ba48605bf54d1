//! # feedback-chat
//!
//! Leptos + WASM browser client for a conversational AI backend. Users keep
//! a list of conversations, exchange messages with the assistant, rate AI
//! replies as helpful or not, and browse aggregate feedback insights.
//!
//! This crate contains the root component, UI components, application state,
//! the REST client and wire types, and the message polling loop. Browser-only
//! code sits behind the `csr` feature so state and formatting logic can be
//! tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod poll;
pub mod state;
pub mod util;

/// WASM entry point: mounts [`app::App`] into the root element.
///
/// Configuration is read from `data-*` attributes on the element with id
/// [`config::ROOT_ELEMENT_ID`]. Without that element the app mounts to
/// `<body>` with default settings.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;
    use crate::config::{ClientConfig, ROOT_ELEMENT_ID};

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ROOT_ELEMENT_ID));

    let Some(root) = root else {
        log::warn!("no #{ROOT_ELEMENT_ID} element; mounting to body");
        leptos::mount::mount_to_body(|| view! { <App/> });
        return;
    };

    let config = ClientConfig::from_attributes_or_default(|name| root.get_attribute(name));
    log::info!("mounting chat client against {}", config.api_base);

    match root.dyn_into::<web_sys::HtmlElement>() {
        Ok(el) => leptos::mount::mount_to(el, move || view! { <App config=config.clone()/> }).forget(),
        Err(_) => {
            log::warn!("#{ROOT_ELEMENT_ID} is not an HTML element; mounting to body");
            leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
        }
    }
}
