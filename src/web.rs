//! Browser binding over `web-sys`.
//!
//! Implements the host traits for DOM elements, `localStorage` and
//! `matchMedia`, and wires a controller to a live page with [`mount`].
//! DOM and storage calls that fail are logged and otherwise ignored.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Storage, Window};

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::Result;
use crate::host::{ClassList, ColorSchemeQuery, PreferenceStore};

/// A controller bound to the live document.
pub type PageController = ThemeController<Element, LocalStorage>;

impl ClassList for Element {
    fn add_class(&self, name: &str) {
        if let Err(err) = self.class_list().add_1(name) {
            warn!(?err, class = name, "failed to add class");
        }
    }

    fn remove_class(&self, name: &str) {
        if let Err(err) = self.class_list().remove_1(name) {
            warn!(?err, class = name, "failed to remove class");
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.class_list().contains(name)
    }

    fn toggle_class(&self, name: &str) -> bool {
        match self.class_list().toggle(name) {
            Ok(present) => present,
            Err(err) => {
                warn!(?err, class = name, "failed to toggle class");
                self.has_class(name)
            }
        }
    }
}

/// The window's `localStorage`, if the page may use it.
///
/// Without storage every read is absent and writes are dropped.
#[derive(Debug, Clone)]
pub struct LocalStorage(Option<Storage>);

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        match window.local_storage() {
            Ok(storage) => Self(storage),
            Err(err) => {
                warn!(?err, "localStorage unavailable");
                Self(None)
            }
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let storage = self.0.as_ref()?;
        storage.get_item(key).unwrap_or_else(|err| {
            warn!(?err, key, "failed to read localStorage");
            None
        })
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            if let Err(err) = storage.set_item(key, value) {
                warn!(?err, key, "failed to write localStorage");
            }
        }
    }
}

/// `window.matchMedia(query).matches`.
#[derive(Debug, Clone)]
pub struct MediaQuery {
    window: Window,
    query: String,
}

impl MediaQuery {
    pub fn new(window: Window, query: impl Into<String>) -> Self {
        Self {
            window,
            query: query.into(),
        }
    }
}

impl ColorSchemeQuery for MediaQuery {
    fn matches_dark_preference(&self) -> bool {
        match self.window.match_media(&self.query) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(err) => {
                warn!(?err, query = %self.query, "matchMedia failed");
                false
            }
        }
    }
}

/// Runs page-load theme logic on the current document and binds the
/// toggle handler to the trigger's `click` event.
///
/// The config is validated first, since an empty class name makes every
/// `classList` call throw. Returns `Ok(None)` when there is no window,
/// document or root element. The listener lives as long as the page.
pub fn mount(config: &ThemeConfig) -> Result<Option<Rc<RefCell<PageController>>>> {
    config.validate()?;

    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let Some(document) = window.document() else {
        return Ok(None);
    };
    let Some(root) = document.document_element() else {
        return Ok(None);
    };

    let store = LocalStorage::from_window(&window);
    let query = MediaQuery::new(window, config.dark_scheme_query.as_str());

    let controller = ThemeController::builder(root, store)
        .dark_icon(document.get_element_by_id(&config.dark_icon_id))
        .light_icon(document.get_element_by_id(&config.light_icon_id))
        .trigger(document.get_element_by_id(&config.toggle_id))
        .config(config.clone())
        .init(&query);
    let controller = Rc::new(RefCell::new(controller));

    let trigger = controller.borrow().trigger().cloned();
    match trigger {
        Some(trigger) => {
            let handler = Rc::clone(&controller);
            let on_click = Closure::<dyn FnMut()>::new(move || {
                handler.borrow_mut().toggle();
            });
            if let Err(err) = trigger
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            {
                warn!(?err, "failed to bind theme toggle");
            }
            on_click.forget();
        }
        None => debug!(id = %config.toggle_id, "no theme trigger on page"),
    }

    Ok(Some(controller))
}
