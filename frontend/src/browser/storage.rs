use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// String key/value store scoped to the browser profile.
pub trait LocalStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}

/// Clones share the same entries, like two handles on `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::BrowserLocalStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use anyhow::Context;

    use super::LocalStore;
    use crate::browser::js_error;

    pub struct BrowserLocalStore {
        storage: web_sys::Storage,
    }

    impl BrowserLocalStore {
        pub fn open() -> anyhow::Result<Self> {
            let window = web_sys::window().context("no global window")?;
            let storage = window
                .local_storage()
                .map_err(js_error)?
                .context("localStorage is not available")?;
            Ok(Self { storage })
        }
    }

    impl LocalStore for BrowserLocalStore {
        fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            self.storage.get_item(key).map_err(js_error)
        }

        fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            self.storage.set_item(key, value).map_err(js_error)
        }

        fn remove(&self, key: &str) -> anyhow::Result<()> {
            self.storage.remove_item(key).map_err(js_error)
        }
    }
}
