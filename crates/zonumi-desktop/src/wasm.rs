//! WASM exports for the desktop window manager
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! backed by `localStorage` and the document root element styles.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::DesktopConfig;
use crate::contact::{Clipboard, ContactDraft, ContactForm};
use crate::engine::DesktopEngine;
use crate::error::{DesktopError, StorageError};
use crate::layout::{RootElement, RootStyle};
use crate::math::{Rect, Size, Vec2};
use crate::menu::{MenuAction, MenuKey};
use crate::persistence::Storage;
use crate::window::WindowId;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

fn js_error(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_window(key: &str) -> Result<WindowId, JsValue> {
    key.parse().map_err(js_error)
}

/// Browser `localStorage`
///
/// Blocked storage (private mode, sandboxed frames) reports
/// [`StorageError::Unavailable`] on every access.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Open the window's local storage
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            tracing::debug!("localStorage unavailable");
        }
        Self { inner }
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

/// `<html>` and `<body>` inline styles
struct DocumentRoot {
    html: Option<web_sys::HtmlElement>,
    body: Option<web_sys::HtmlElement>,
}

impl DocumentRoot {
    fn open() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let html = document
            .document_element()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        Some(Self {
            html,
            body: document.body(),
        })
    }

    fn element(&self, element: RootElement) -> Option<&web_sys::HtmlElement> {
        match element {
            RootElement::Html => self.html.as_ref(),
            RootElement::Body => self.body.as_ref(),
        }
    }
}

impl RootStyle for DocumentRoot {
    fn overflow(&self, element: RootElement) -> String {
        self.element(element)
            .and_then(|el| el.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_overflow(&self, element: RootElement, value: &str) {
        if let Some(el) = self.element(element) {
            if let Err(err) = el.style().set_property("overflow", value) {
                tracing::warn!(?err, "failed to set root overflow");
            }
        }
    }
}

/// Clipboard writer supplied by the host as a synchronous function
///
/// The function receives the text and throws or returns `false` on failure.
struct JsClipboard<'a> {
    write_text: &'a js_sys::Function,
}

impl Clipboard for JsClipboard<'_> {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        match self.write_text.call1(&JsValue::NULL, &JsValue::from_str(text)) {
            Ok(result) if result.as_bool() == Some(false) => Err("clipboard refused".to_string()),
            Ok(_) => Ok(()),
            Err(err) => Err(format!("{err:?}")),
        }
    }
}

/// Desktop handle for WASM - wraps DesktopEngine with a JS-friendly API
#[wasm_bindgen]
pub struct DesktopHandle {
    engine: DesktopEngine<LocalStorage>,
    contact_form: Option<ContactForm<LocalStorage>>,
}

#[wasm_bindgen]
impl DesktopHandle {
    /// Create a desktop handle; `config_json` overrides the defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<DesktopHandle, JsValue> {
        let config = match config_json {
            Some(json) => DesktopConfig::from_json(&json).map_err(js_error)?,
            None => DesktopConfig::default(),
        };
        let mut engine = DesktopEngine::with_config(LocalStorage::open(), config);
        if let Some(root) = DocumentRoot::open() {
            engine.set_root_style(Rc::new(root));
        }
        Ok(Self {
            engine,
            contact_form: None,
        })
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Mount with the current viewport width
    #[wasm_bindgen]
    pub fn mount(&mut self, viewport_width: f64) {
        self.engine.mount(viewport_width, date_now());
    }

    /// Unmount: releases the scroll lock
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        self.engine.unmount();
        self.contact_form = None;
    }

    /// Viewport width changed
    #[wasm_bindgen]
    pub fn viewport_changed(&mut self, width: f64) {
        self.engine.viewport_changed(width);
    }

    /// Canvas element bounds changed
    #[wasm_bindgen]
    pub fn canvas_resized(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.engine.canvas_resized(Rect::new(x, y, width, height));
    }

    #[wasm_bindgen]
    pub fn canvas_unmounted(&mut self) {
        self.engine.canvas_unmounted();
    }

    /// Window element size changed
    #[wasm_bindgen]
    pub fn window_resized(&mut self, key: &str, width: f64, height: f64) -> Result<(), JsValue> {
        let id = parse_window(key)?;
        self.engine.window_resized(id, Size::new(width, height));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn window_unmounted(&mut self, key: &str) -> Result<(), JsValue> {
        let id = parse_window(key)?;
        self.engine.window_unmounted(id);
        Ok(())
    }

    /// Animation frame; returns the number of tasks that came due
    #[wasm_bindgen]
    pub fn tick_frame(&mut self) -> usize {
        self.engine.tick_frame().len()
    }

    /// Advance the boot overlay; returns true once it is gone
    #[wasm_bindgen]
    pub fn tick_boot(&mut self) -> bool {
        self.engine.tick_boot(date_now()) == crate::transition::BootPhase::Ready
    }

    // =========================================================================
    // Windows
    // =========================================================================

    #[wasm_bindgen]
    pub fn show_window(&mut self, key: &str) -> Result<(), JsValue> {
        let id = parse_window(key)?;
        self.engine.show_window(id);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, key: &str) -> Result<(), JsValue> {
        let id = parse_window(key)?;
        self.engine.close_window(id);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, key: &str) -> Result<(), JsValue> {
        let id = parse_window(key)?;
        self.engine.focus_window(id);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn reset_layout(&mut self) {
        self.engine.reset_layout();
    }

    // =========================================================================
    // Drag
    // =========================================================================

    /// Pointer down on a title bar, client coordinates
    #[wasm_bindgen]
    pub fn begin_drag(&mut self, key: &str, x: f64, y: f64) -> Result<bool, JsValue> {
        let id = parse_window(key)?;
        Ok(self.engine.begin_drag(id, Vec2::new(x, y)))
    }

    #[wasm_bindgen]
    pub fn drag_move(&mut self, x: f64, y: f64) -> bool {
        self.engine.drag_move(Vec2::new(x, y))
    }

    #[wasm_bindgen]
    pub fn end_drag(&mut self) {
        self.engine.end_drag();
    }

    // =========================================================================
    // Menu
    // =========================================================================

    /// Toggle a menu by name (`"view"` or `"help"`)
    #[wasm_bindgen]
    pub fn menu_toggle(&mut self, key: &str) -> Result<(), JsValue> {
        let key = match key {
            "view" => MenuKey::View,
            "help" => MenuKey::Help,
            other => return Err(JsValue::from_str(&format!("unknown menu: {other}"))),
        };
        self.engine.menu_toggle(key);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn dismiss_menu(&mut self) {
        self.engine.dismiss_menu();
    }

    /// Open a window from a menu entry
    #[wasm_bindgen]
    pub fn menu_open(&mut self, key: &str) -> Result<(), JsValue> {
        let id = parse_window(key)?;
        self.engine.menu_action(MenuAction::Open(id));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn menu_about(&mut self) {
        self.engine.menu_action(MenuAction::About);
    }

    #[wasm_bindgen]
    pub fn close_about(&mut self) {
        self.engine.close_about();
    }

    // =========================================================================
    // Contact
    // =========================================================================

    /// Contact window mounted its form
    #[wasm_bindgen]
    pub fn mount_contact_form(&mut self) {
        self.contact_form = Some(self.engine.contact_form(LocalStorage::open(), date_now()));
    }

    /// Validate a draft (`{name, email, message, honeypot}`)
    ///
    /// Returns the submission as JSON for the host to POST, or throws the
    /// message to show inline.
    #[wasm_bindgen]
    pub fn submit_contact(&mut self, draft_json: &str) -> Result<String, JsValue> {
        let draft: ContactDraft = serde_json::from_str(draft_json)
            .map_err(|e| js_error(DesktopError::Serialization(e)))?;
        let form = match self.contact_form.as_mut() {
            Some(form) => form,
            None => return Err(JsValue::from_str("contact form is not mounted")),
        };
        let submission = form.submit(&draft, date_now()).map_err(|err| match err {
            DesktopError::Contact(reason) => JsValue::from_str(&reason.to_string()),
            other => js_error(other),
        })?;
        serde_json::to_string(&submission).map_err(|e| js_error(DesktopError::Serialization(e)))
    }

    /// Copy the contact address with `write_text`; returns the action as JSON
    #[wasm_bindgen]
    pub fn copy_email(&mut self, write_text: &js_sys::Function) -> String {
        let mut clipboard = JsClipboard { write_text };
        let action = self.engine.copy_contact_email(&mut clipboard, date_now());
        serde_json::to_string(&action).unwrap_or_else(|_| "{}".to_string())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Full view state as JSON
    #[wasm_bindgen]
    pub fn render_json(&self) -> String {
        serde_json::to_string(&self.engine.view(date_now())).unwrap_or_else(|_| "{}".to_string())
    }
}
