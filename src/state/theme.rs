//! Light/dark theme state shared by the toggle control and the particle field.
//!
//! DESIGN
//! ======
//! `ThemeStore` is the only owner of the current theme. Readers hold a clone
//! and call [`ThemeStore::get`]; the toggle control is the only caller of
//! [`ThemeStore::toggle`], which persists the new value and notifies
//! subscribers (the DOM attribute and toggle label are subscribers, not
//! sources of truth).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Page colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse the persisted / attribute form. Anything else is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Font Awesome classes for the toggle icon.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-moon",
            Self::Light => "fas fa-sun",
        }
    }

    /// Toggle caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Mode sombre",
            Self::Light => "Mode clair",
        }
    }
}

/// Pick the starting theme: stored preference, then page attribute, then dark.
///
/// Values that are neither `"dark"` nor `"light"` are skipped.
pub fn resolve_initial(stored: Option<&str>, attribute: Option<&str>) -> Theme {
    if let Some(raw) = stored {
        match Theme::parse(raw) {
            Some(theme) => return theme,
            None => log::warn!("ignoring stored theme {raw:?}"),
        }
    }
    attribute.and_then(Theme::parse).unwrap_or_default()
}

/// Key/value persistence for the theme flag.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// In-process store for hosts without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.save(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) {
        (**self).save(key, value);
    }
}

/// Browser `localStorage`. Unavailable storage (private mode, sandboxed
/// iframes) degrades to a non-persistent theme.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        match Self::storage()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key:?} failed: {err:?}");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("localStorage write of {key:?} failed: {err:?}");
        }
    }
}

type Listener = Rc<dyn Fn(Theme)>;

struct Inner {
    theme: Cell<Theme>,
    storage_key: String,
    storage: Box<dyn PreferenceStore>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener_id: Cell<u64>,
}

/// Shared handle to the current theme.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<Inner>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.inner.theme.get())
            .field("storage_key", &self.inner.storage_key)
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Build the store from persisted state, falling back to `attribute`
    /// (the page's initial `data-theme`).
    pub fn load(storage: impl PreferenceStore + 'static, storage_key: &str, attribute: Option<&str>) -> Self {
        let stored = storage.load(storage_key);
        let theme = resolve_initial(stored.as_deref(), attribute);
        Self {
            inner: Rc::new(Inner {
                theme: Cell::new(theme),
                storage_key: storage_key.to_owned(),
                storage: Box::new(storage),
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
            }),
        }
    }

    pub fn get(&self) -> Theme {
        self.inner.theme.get()
    }

    /// Flip the theme, persist it and notify subscribers. Returns the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.get().toggled();
        self.inner.theme.set(next);
        self.inner.storage.save(&self.inner.storage_key, next.as_str());
        log::debug!("theme -> {}", next.as_str());

        // Snapshot so listeners may subscribe/unsubscribe while being notified.
        let listeners = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect::<Vec<_>>();
        for listener in listeners {
            listener(next);
        }
        next
    }

    /// Register `listener` for theme changes until the returned guard drops.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(Theme) + 'static) -> Subscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        Subscription { store: Rc::downgrade(&self.inner), id }
    }

    /// Value currently held by the backing store.
    pub fn persisted(&self) -> Option<String> {
        self.inner.storage.load(&self.inner.storage_key)
    }
}

/// Unsubscribes on drop.
pub struct Subscription {
    store: Weak<Inner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
