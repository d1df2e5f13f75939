//! Browser `localStorage` persistence for the provider session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps the user signed in across reloads. Without the `csr` feature (native
//! tests, tooling) writes are dropped and the store reads empty.

use session::supabase::{decode_session, encode_session};
use session::{ProviderSession, TokenStore};

const STORAGE_KEY: &str = "session.auth-token";

/// [`TokenStore`] backed by `window.localStorage`. Holds no browser handle so
/// it stays `Send + Sync`; storage is looked up on each call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<ProviderSession> {
        read_item(STORAGE_KEY).and_then(|raw| decode_session(&raw))
    }

    fn save(&self, session: &ProviderSession) {
        match encode_session(session) {
            Ok(raw) => write_item(STORAGE_KEY, &raw),
            Err(err) => leptos::logging::warn!("failed to encode session: {err}"),
        }
    }

    fn clear(&self) {
        remove_item(STORAGE_KEY);
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read_item(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

fn write_item(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

fn remove_item(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}
