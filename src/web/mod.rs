//! Web - Browser Entry Point
//!
//! Binds the controllers to the live DOM once the document is parsed:
//!
//! ```text
//! DOMContentLoaded → initTheme → sidebar / language toggle / share button
//! ```
//!
//! Each binding is independent; a page missing one group of elements still
//! gets the other two.

mod dom;
mod storage;

pub use dom::{DomLanguageView, DomShareButton, DomSidebar, clipboard_support};
pub use storage::LocalStorage;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use tracing::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Event, Window};

use crate::domain::config::ThemeConfig;
use crate::features::lang_toggle::LanguagePreferenceController;
use crate::features::share::{CopyMethod, ShareController, fallback_copy};
use crate::features::sidebar::SidebarController;
use crate::states::LanguagePreference;

/// Module start: run now if the document is parsed, else on `DOMContentLoaded`
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = init_theme() {
                error!(error = ?e, "Theme initialization failed");
                web_sys::console::error_2(&JsValue::from_str("Theme initialization failed:"), &e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        Ok(())
    } else {
        init_theme()
    }
}

/// Bind every theme script to the current page
#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme() -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let Some(document) = window.document() else {
        return Ok(());
    };
    let config = ThemeConfig::default();

    init_sidebar(&document, &config)?;
    init_language_toggle(&window, &document, &config)?;
    init_share_button(&window, &document, &config)?;
    Ok(())
}

fn init_sidebar(document: &Document, config: &ThemeConfig) -> Result<(), JsValue> {
    let view = DomSidebar::new(document, &config.sidebar);
    let Some(controller) = SidebarController::attach(&view, config.sidebar.clone()) else {
        return Ok(());
    };

    let targets: Vec<_> = view.click_targets().cloned().collect();
    let state = Rc::new(RefCell::new((controller, view)));
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let mut guard = state.borrow_mut();
        let (controller, view) = &mut *guard;
        controller.toggle(view);
    });

    for target in &targets {
        target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    }
    on_click.forget();
    debug!("Sidebar bound");
    Ok(())
}

fn init_language_toggle(window: &Window, document: &Document, config: &ThemeConfig) -> Result<(), JsValue> {
    let mut view = DomLanguageView::new(window.clone(), document, config.language.clone());
    let preference = LanguagePreference::load_with_key(LocalStorage, config.language.storage_key.as_str());
    let Some(controller) =
        LanguagePreferenceController::init(&mut view, preference, config.language.root_url.as_str())
    else {
        return Ok(());
    };

    let Some(toggle) = view.toggle_element().cloned() else {
        return Ok(());
    };
    let state = Rc::new(RefCell::new((controller, view)));
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let mut guard = state.borrow_mut();
        let (controller, view) = &mut *guard;
        controller.on_change(view);
    });

    toggle.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

fn init_share_button(window: &Window, document: &Document, config: &ThemeConfig) -> Result<(), JsValue> {
    let view = DomShareButton::new(document, &config.share);
    let Some(button) = view.button().cloned() else {
        return Ok(());
    };

    let window = window.clone();
    let config = config.clone();
    let view = Rc::new(RefCell::new(view));
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();

        let url = window.location().href().unwrap_or_default();
        let language =
            LanguagePreference::load_with_key(LocalStorage, config.language.storage_key.as_str()).language();
        let share = ShareController::new(config.share.clone(), language);

        match clipboard_support(&window).method() {
            CopyMethod::ClipboardApi => {
                let promise = window.navigator().clipboard().write_text(&url);
                let view = Rc::clone(&view);
                spawn_local(async move {
                    let result = JsFuture::from(promise)
                        .await
                        .map(|_| ())
                        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{e:?}")));
                    show_feedback(share, view, result);
                });
            }
            CopyMethod::Fallback => {
                let result = fallback_copy(&mut *view.borrow_mut(), &url).map_err(|e| e.to_string());
                show_feedback(share, Rc::clone(&view), result);
            }
        }
    });

    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    info!("Share button bound");
    Ok(())
}

/// Show feedback and schedule its undoing
fn show_feedback(share: ShareController, view: Rc<RefCell<DomShareButton>>, result: Result<(), String>) {
    let pending = share.show_feedback(&mut *view.borrow_mut(), result);

    if let Some(delay) = pending.hide_after {
        let share = share.clone();
        let view = Rc::clone(&view);
        Timeout::new(delay.as_millis() as u32, move || share.hide(&mut *view.borrow_mut())).forget();
    }

    let delay = pending.restore_after;
    Timeout::new(delay.as_millis() as u32, move || share.restore(&mut *view.borrow_mut(), pending)).forget();
}
