//! DOM-backed views
//!
//! Element lookups happen once, when a view is built; absent elements are
//! kept as `None` and their setters do nothing.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::constants::{ATTR_LANG, ATTR_LAYOUT, ATTR_TITLE_SUCCEED, ATTR_TOOLTIP_TITLE};
use crate::domain::config::{LanguageConfig, ShareConfig, SidebarConfig};
use crate::domain::page::{PageContext, PostItem};
use crate::error::{Error, Result};
use crate::features::lang_toggle::LanguageView;
use crate::features::share::{ClipboardSupport, FallbackCopier, TooltipView};
use crate::features::sidebar::SidebarView;
use crate::i18n::Language;

#[wasm_bindgen]
extern "C" {
    /// Bootstrap's tooltip widget
    #[wasm_bindgen(js_namespace = bootstrap)]
    #[derive(Debug, Clone)]
    pub type Tooltip;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap)]
    fn new(element: &Element) -> std::result::Result<Tooltip, JsValue>;

    #[wasm_bindgen(method, js_name = setContent)]
    fn set_content(this: &Tooltip, content: &Object);

    #[wasm_bindgen(method)]
    fn show(this: &Tooltip);

    #[wasm_bindgen(method)]
    fn hide(this: &Tooltip);
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_class(element: &Element, class: &str, present: bool) {
    let _ = element.class_list().toggle_with_force(class, present);
}

// ==================== Language toggle ====================

/// The language toggle, its indicators and the post list
pub struct DomLanguageView {
    window: Window,
    body: Option<HtmlElement>,
    config: LanguageConfig,
    toggle: Option<HtmlInputElement>,
    flag: Option<Element>,
    pt_label: Option<Element>,
    en_label: Option<Element>,
    posts: Vec<Element>,
}

impl DomLanguageView {
    pub fn new(window: Window, document: &Document, config: LanguageConfig) -> Self {
        let toggle = document
            .get_element_by_id(&config.checkbox_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

        Self {
            body: document.body(),
            toggle,
            flag: document.get_element_by_id(&config.flag_id),
            pt_label: query(document, &config.pt_label_selector),
            en_label: query(document, &config.en_label_selector),
            posts: query_all(document, &config.post_item_selector),
            window,
            config,
        }
    }

    /// The checkbox, for registering the change listener
    pub fn toggle_element(&self) -> Option<&HtmlInputElement> {
        self.toggle.as_ref()
    }
}

impl LanguageView for DomLanguageView {
    fn toggle_checked(&self) -> Option<bool> {
        self.toggle.as_ref().map(|toggle| toggle.checked())
    }

    fn set_checked(&mut self, checked: bool) {
        if let Some(toggle) = &self.toggle {
            toggle.set_checked(checked);
        }
    }

    fn set_flag(&mut self, glyph: &str) {
        if let Some(flag) = &self.flag {
            flag.set_text_content(Some(glyph));
        }
    }

    fn set_label_active(&mut self, language: Language, active: bool) {
        let label = match language {
            Language::Pt => &self.pt_label,
            Language::En => &self.en_label,
        };
        if let Some(label) = label {
            set_class(label, &self.config.active_class, active);
        }
    }

    fn page_context(&self) -> PageContext {
        let Some(body) = &self.body else {
            return PageContext::default();
        };
        PageContext {
            layout: body.get_attribute(ATTR_LAYOUT),
            lang: body.get_attribute(ATTR_LANG),
        }
    }

    fn post_items(&self) -> Vec<PostItem> {
        self.posts
            .iter()
            .map(|post| PostItem {
                lang: post.get_attribute(ATTR_LANG),
            })
            .collect()
    }

    fn set_item_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(post) = self.posts.get(index) {
            set_class(post, &self.config.hidden_class, hidden);
        }
    }

    fn navigate(&mut self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            tracing::warn!(error = ?e, url, "Navigation failed");
        }
    }
}

// ==================== Sidebar ====================

/// Sidebar, trigger, mask and the body they toggle
pub struct DomSidebar {
    body: Option<HtmlElement>,
    sidebar: Option<Element>,
    trigger: Option<Element>,
    mask: Option<Element>,
}

impl DomSidebar {
    pub fn new(document: &Document, config: &SidebarConfig) -> Self {
        Self {
            body: document.body(),
            sidebar: document.get_element_by_id(&config.sidebar_id),
            trigger: document.get_element_by_id(&config.trigger_id),
            mask: document.get_element_by_id(&config.mask_id),
        }
    }

    /// Elements whose clicks toggle the sidebar
    pub fn click_targets(&self) -> impl Iterator<Item = &Element> {
        self.trigger.iter().chain(self.mask.iter())
    }
}

impl SidebarView for DomSidebar {
    fn has_sidebar_elements(&self) -> bool {
        self.sidebar.is_some() && self.trigger.is_some() && self.mask.is_some()
    }

    fn set_body_attribute(&mut self, name: &str, present: bool) {
        if let Some(body) = &self.body {
            let _ = body.toggle_attribute_with_force(name, present);
        }
    }

    fn set_sidebar_class(&mut self, class: &str, present: bool) {
        if let Some(sidebar) = &self.sidebar {
            set_class(sidebar, class, present);
        }
    }

    fn set_mask_class(&mut self, class: &str, present: bool) {
        if let Some(mask) = &self.mask {
            set_class(mask, class, present);
        }
    }
}

// ==================== Share button ====================

/// `#copy-link`, its bootstrap tooltip and the clipboard fallback
pub struct DomShareButton {
    document: Document,
    button: Option<Element>,
    tooltip: Option<Tooltip>,
}

impl DomShareButton {
    pub fn new(document: &Document, config: &ShareConfig) -> Self {
        let button = document.get_element_by_id(&config.button_id);
        let tooltip = button.as_ref().and_then(|el| Tooltip::new(el).ok());
        Self {
            document: document.clone(),
            button,
            tooltip,
        }
    }

    pub fn button(&self) -> Option<&Element> {
        self.button.as_ref()
    }

    fn icon(&self) -> Option<Element> {
        self.button.as_ref().and_then(|b| b.query_selector("i").ok().flatten())
    }
}

/// Clipboard API presence and secure context of `window`
pub fn clipboard_support(window: &Window) -> ClipboardSupport {
    let navigator = window.navigator();
    let api_available = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false);
    ClipboardSupport {
        api_available,
        secure_context: window.is_secure_context(),
    }
}

impl TooltipView for DomShareButton {
    fn has_share_button(&self) -> bool {
        self.button.is_some()
    }

    fn tooltip_title(&self) -> Option<String> {
        self.button.as_ref().and_then(|b| b.get_attribute(ATTR_TOOLTIP_TITLE))
    }

    fn succeed_title(&self) -> Option<String> {
        self.button.as_ref().and_then(|b| b.get_attribute(ATTR_TITLE_SUCCEED))
    }

    fn set_tooltip_title(&mut self, title: &str) {
        if let Some(button) = &self.button {
            let _ = button.set_attribute(ATTR_TOOLTIP_TITLE, title);
        }
        if let Some(tooltip) = &self.tooltip {
            let content = Object::new();
            let _ = Reflect::set(&content, &JsValue::from_str(".tooltip-inner"), &JsValue::from_str(title));
            tooltip.set_content(&content);
        }
    }

    fn icon_class(&self) -> Option<String> {
        self.icon().map(|icon| icon.class_name())
    }

    fn set_icon_class(&mut self, class: &str) {
        if let Some(icon) = self.icon() {
            icon.set_class_name(class);
        }
    }

    fn show_tooltip(&mut self) {
        if let Some(tooltip) = &self.tooltip {
            tooltip.show();
        }
    }

    fn hide_tooltip(&mut self) {
        if let Some(tooltip) = &self.tooltip {
            tooltip.hide();
        }
    }
}

fn clipboard_error(value: JsValue) -> Error {
    Error::Clipboard {
        message: value.as_string().unwrap_or_else(|| format!("{value:?}")),
    }
}

impl FallbackCopier for DomShareButton {
    type Input = HtmlTextAreaElement;

    fn insert_temp_input(&mut self, text: &str) -> Result<HtmlTextAreaElement> {
        let body = self.document.body().ok_or_else(|| Error::Clipboard {
            message: "document has no body".to_string(),
        })?;
        let textarea: HtmlTextAreaElement = self
            .document
            .create_element("textarea")
            .map_err(clipboard_error)?
            .dyn_into()
            .map_err(|_| Error::Clipboard {
                message: "textarea cast error".to_string(),
            })?;

        textarea.set_value(text);
        let style = textarea.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("left", "-999999px");
        let _ = style.set_property("top", "-999999px");

        body.append_child(&textarea).map_err(clipboard_error)?;
        let _ = textarea.focus();
        textarea.select();
        Ok(textarea)
    }

    fn exec_copy(&mut self, _input: &HtmlTextAreaElement) -> Result<()> {
        let document = self.document.dyn_ref::<HtmlDocument>().ok_or_else(|| Error::Clipboard {
            message: "copy command unsupported".to_string(),
        })?;
        match document.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(Error::Clipboard {
                message: "copy command refused".to_string(),
            }),
            Err(e) => Err(clipboard_error(e)),
        }
    }

    fn remove_temp_input(&mut self, input: HtmlTextAreaElement) {
        input.remove();
    }
}
