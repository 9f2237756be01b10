use std::cell::RefCell;

use bingo_core::{BingoError, KeyValueStore, Session};

use crate::utils::utc_now;

/// `window.localStorage`, read and written as raw strings.
///
/// Storage can be unreachable (disabled, sandboxed iframe). Reads then find
/// nothing and writes fail, so the card always starts with a fresh deal.
#[derive(Clone, Debug, Default)]
pub(crate) struct BrowserStore(Option<web_sys::Storage>);

impl BrowserStore {
    pub(crate) fn local() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("local storage is not available, the card will not survive a reload");
        }
        Self(storage)
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> bingo_core::Result<()> {
        let storage = self
            .0
            .as_ref()
            .ok_or_else(|| BingoError::Storage("local storage is not available".into()))?;
        storage
            .set_item(key, value)
            .map_err(|err| BingoError::Storage(format!("{err:?}")))
    }
}

pub(crate) fn save_session(session: &RefCell<Session>) {
    match session.borrow().save(&mut BrowserStore::local(), utc_now()) {
        Ok(()) => log::debug!("board saved"),
        Err(err) => log::error!("Could not save board to local storage: {}", err),
    }
}
