use std::rc::Rc;

use web_sys::{window, Storage};

use crate::cooldown::{session_store, KeyValueStore, MemoryStore};

const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage` when the browser allows it, otherwise the page's shared memory store.
pub enum BrowserStore {
    Local(Storage),
    Memory(Rc<MemoryStore>),
}

pub fn browser_store() -> BrowserStore {
    match local_storage() {
        Some(storage) => BrowserStore::Local(storage),
        None => BrowserStore::Memory(session_store()),
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => storage.get_item(key).ok().flatten(),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> bool {
        match self {
            Self::Local(storage) => storage.set_item(key, value).is_ok(),
            Self::Memory(store) => store.set(key, value),
        }
    }
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.1);

    (width, height)
}
