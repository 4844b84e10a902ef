//! Dark-mode preference handling.
//!
//! The page never touches browser storage directly. It receives a
//! [`ThemeService`] which resolves the initial mode (stored preference first,
//! then the ambient `prefers-color-scheme` signal) and persists every toggle.
//! All failures are logged and swallowed; the worst case is light mode.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage, Window};

use crate::config;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("no browser window available")]
    NoWindow,
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("storage access failed: {0}")]
    Storage(String),
    #[error("color scheme query failed: {0}")]
    MediaQuery(String),
    #[error("document element is missing")]
    NoDocument,
    #[error("could not update class list: {0}")]
    Marker(String),
    #[error("stored preference {raw:?} is not a boolean")]
    Decode {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

fn js_error(err: JsValue) -> String {
    format!("{:?}", err)
}

/// Environment the theme lives in: a key-value store, an ambient color
/// scheme signal and a document-level marker.
pub trait ThemeHost {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
    fn prefers_dark(&self) -> Result<bool, PreferenceError>;
    fn set_marker(&self, dark: bool) -> Result<(), PreferenceError>;
}

pub struct BrowserHost {
    window: Window,
}

impl BrowserHost {
    pub fn new() -> Result<Self, PreferenceError> {
        window()
            .map(|window| Self { window })
            .ok_or(PreferenceError::NoWindow)
    }

    fn storage(&self) -> Result<Storage, PreferenceError> {
        self.window
            .local_storage()
            .map_err(|e| PreferenceError::Storage(js_error(e)))?
            .ok_or(PreferenceError::StorageUnavailable)
    }
}

impl ThemeHost for BrowserHost {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| PreferenceError::Storage(js_error(e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| PreferenceError::Storage(js_error(e)))
    }

    fn prefers_dark(&self) -> Result<bool, PreferenceError> {
        let query = self
            .window
            .match_media(config::DARK_SCHEME_QUERY)
            .map_err(|e| PreferenceError::MediaQuery(js_error(e)))?;
        Ok(query.map(|q| q.matches()).unwrap_or(false))
    }

    fn set_marker(&self, dark: bool) -> Result<(), PreferenceError> {
        let root = self
            .window
            .document()
            .and_then(|d| d.document_element())
            .ok_or(PreferenceError::NoDocument)?;
        root.class_list()
            .toggle_with_force(config::DARK_CLASS, dark)
            .map(|_| ())
            .map_err(|e| PreferenceError::Marker(js_error(e)))
    }
}

/// In-memory host. Backs the service when there is no browser window and
/// stands in for the browser in tests.
#[derive(Default)]
pub struct MemoryHost {
    stored: RefCell<Option<String>>,
    prefers_dark: bool,
    marker: Cell<bool>,
    storage_broken: bool,
}

#[cfg(test)]
impl MemoryHost {
    pub fn new(stored: Option<&str>, prefers_dark: bool) -> Self {
        Self {
            stored: RefCell::new(stored.map(str::to_owned)),
            prefers_dark,
            ..Self::default()
        }
    }

    /// Host whose storage fails on every access.
    pub fn without_storage(prefers_dark: bool) -> Self {
        Self {
            prefers_dark,
            storage_broken: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    pub fn marker(&self) -> bool {
        self.marker.get()
    }
}

impl ThemeHost for MemoryHost {
    fn read(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        if self.storage_broken {
            return Err(PreferenceError::StorageUnavailable);
        }
        Ok(self.stored.borrow().clone())
    }

    fn write(&self, _key: &str, value: &str) -> Result<(), PreferenceError> {
        if self.storage_broken {
            return Err(PreferenceError::StorageUnavailable);
        }
        *self.stored.borrow_mut() = Some(value.to_owned());
        Ok(())
    }

    fn prefers_dark(&self) -> Result<bool, PreferenceError> {
        Ok(self.prefers_dark)
    }

    fn set_marker(&self, dark: bool) -> Result<(), PreferenceError> {
        self.marker.set(dark);
        Ok(())
    }
}

pub fn decode(raw: &str) -> Result<bool, PreferenceError> {
    serde_json::from_str::<bool>(raw.trim()).map_err(|source| PreferenceError::Decode {
        raw: raw.to_owned(),
        source,
    })
}

pub fn encode(dark: bool) -> String {
    serde_json::Value::Bool(dark).to_string()
}

#[derive(Clone)]
pub struct ThemeService {
    host: Rc<dyn ThemeHost>,
    key: &'static str,
}

impl PartialEq for ThemeService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.host, &other.host) && self.key == other.key
    }
}

impl ThemeService {
    pub fn new(host: Rc<dyn ThemeHost>) -> Self {
        Self {
            host,
            key: config::DARK_MODE_KEY,
        }
    }

    pub fn browser() -> Self {
        match BrowserHost::new() {
            Ok(host) => Self::new(Rc::new(host)),
            Err(e) => {
                warn!("Falling back to in-memory theme storage: {}", e);
                Self::new(Rc::new(MemoryHost::default()))
            }
        }
    }

    pub fn stored(&self) -> Option<bool> {
        let raw = match self.host.read(self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Could not read dark mode preference: {}", e);
                return None;
            }
        };
        match decode(&raw) {
            Ok(dark) => Some(dark),
            Err(e) => {
                warn!("Ignoring stored dark mode preference: {}", e);
                None
            }
        }
    }

    pub fn prefers_dark(&self) -> bool {
        self.host.prefers_dark().unwrap_or_else(|e| {
            warn!("Could not query color scheme: {}", e);
            false
        })
    }

    pub fn initial(&self) -> bool {
        // Stored value wins; the ambient signal only fills the gap.
        let dark = self.stored().unwrap_or_else(|| self.prefers_dark());
        debug!("Resolved initial dark mode: {}", dark);
        dark
    }

    pub fn apply(&self, dark: bool) {
        if let Err(e) = self.host.set_marker(dark) {
            warn!("Could not update document theme marker: {}", e);
        }
    }

    pub fn persist(&self, dark: bool) {
        if let Err(e) = self.host.write(self.key, &encode(dark)) {
            warn!("Could not persist dark mode preference: {}", e);
        }
    }

    pub fn toggle(&self, current: bool) -> bool {
        let next = !current;
        self.persist(next);
        self.apply(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(host: &Rc<MemoryHost>) -> ThemeService {
        ThemeService::new(host.clone())
    }

    #[test]
    fn ambient_dark_is_used_without_stored_value() {
        let host = Rc::new(MemoryHost::new(None, true));
        assert!(service(&host).initial());
    }

    #[test]
    fn light_when_nothing_stored_and_ambient_light() {
        let host = Rc::new(MemoryHost::new(None, false));
        assert!(!service(&host).initial());
    }

    #[test]
    fn stored_true_wins_over_ambient_light() {
        let host = Rc::new(MemoryHost::new(Some("true"), false));
        assert!(service(&host).initial());
    }

    #[test]
    fn stored_false_wins_over_ambient_dark() {
        let host = Rc::new(MemoryHost::new(Some("false"), true));
        assert!(!service(&host).initial());
    }

    #[test]
    fn garbage_stored_value_falls_back_to_ambient() {
        let host = Rc::new(MemoryHost::new(Some("yes please"), true));
        let theme = service(&host);
        assert_eq!(theme.stored(), None);
        assert!(theme.initial());
    }

    #[test]
    fn toggle_inverts_and_persists() {
        let host = Rc::new(MemoryHost::new(None, false));
        let theme = service(&host);

        let dark = theme.toggle(false);
        assert!(dark);
        assert_eq!(host.stored().as_deref(), Some("true"));
        assert!(host.marker());

        let dark = theme.toggle(dark);
        assert!(!dark);
        assert_eq!(host.stored().as_deref(), Some("false"));
        assert!(!host.marker());
    }

    #[test]
    fn toggled_value_is_read_back_on_next_mount() {
        let host = Rc::new(MemoryHost::new(None, false));
        service(&host).toggle(false);
        assert!(service(&host).initial());
    }

    #[test]
    fn broken_storage_is_best_effort() {
        let host = Rc::new(MemoryHost::without_storage(true));
        let theme = service(&host);
        assert!(theme.initial());
        assert!(!theme.toggle(true));
        assert_eq!(host.stored(), None);
        assert!(!host.marker());
    }

    #[test]
    fn encoding_round_trips_through_storage_format() {
        assert_eq!(encode(true), "true");
        assert_eq!(encode(false), "false");
        assert!(decode(" true ").unwrap());
        assert!(matches!(decode("1"), Err(PreferenceError::Decode { .. })));
    }

    #[test]
    fn services_compare_by_host_identity() {
        let host = Rc::new(MemoryHost::default());
        assert!(service(&host) == service(&host));
        let other = Rc::new(MemoryHost::default());
        assert!(service(&host) != service(&other));
    }
}
