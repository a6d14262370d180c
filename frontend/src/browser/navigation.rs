use std::{cell::RefCell, rc::Rc};

/// The current view location's query string, shared by every component
/// that keeps state in it.
pub trait Navigation {
    /// Query string without the leading `?`.
    fn current_query(&self) -> String;
    /// Replaces the query of the current history entry (no new entry).
    fn replace_query(&self, query: &str) -> anyhow::Result<()>;
    /// Absolute link to `path` with `query` attached.
    fn link_for(&self, path: &str, query: &str) -> String;
}

/// `fragment` is either empty or starts with `#`, as `Location.hash` gives it.
fn join_link(origin: &str, path: &str, query: &str, fragment: &str) -> String {
    if query.is_empty() {
        format!("{}{}{}", origin, path, fragment)
    } else {
        format!("{}{}?{}{}", origin, path, query, fragment)
    }
}

#[derive(Debug, Clone)]
pub struct MemoryNavigation {
    origin: String,
    query: Rc<RefCell<String>>,
}

impl MemoryNavigation {
    pub fn new(origin: impl Into<String>, query: impl Into<String>) -> Self {
        let query = query.into();
        let query = query.strip_prefix('?').map(str::to_string).unwrap_or(query);
        Self { origin: origin.into(), query: Rc::new(RefCell::new(query)) }
    }
}

impl Navigation for MemoryNavigation {
    fn current_query(&self) -> String {
        self.query.borrow().clone()
    }

    fn replace_query(&self, query: &str) -> anyhow::Result<()> {
        *self.query.borrow_mut() = query.to_string();
        Ok(())
    }

    fn link_for(&self, path: &str, query: &str) -> String {
        join_link(&self.origin, path, query, "")
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::BrowserNavigation;

#[cfg(target_arch = "wasm32")]
mod web {
    use anyhow::Context;
    use wasm_bindgen::JsValue;

    use super::{Navigation, join_link};
    use crate::browser::js_error;

    pub struct BrowserNavigation {
        window: web_sys::Window,
    }

    impl BrowserNavigation {
        pub fn current() -> anyhow::Result<Self> {
            Ok(Self { window: web_sys::window().context("no global window")? })
        }
    }

    impl Navigation for BrowserNavigation {
        fn current_query(&self) -> String {
            let search = self.window.location().search().unwrap_or_default();
            search.strip_prefix('?').unwrap_or(&search).to_string()
        }

        fn replace_query(&self, query: &str) -> anyhow::Result<()> {
            let location = self.window.location();
            let path = location.pathname().map_err(js_error)?;
            let fragment = location.hash().map_err(js_error)?;
            let url = join_link("", &path, query, &fragment);
            self.window
                .history()
                .map_err(js_error)?
                .replace_state_with_url(&JsValue::NULL, "", Some(&url))
                .map_err(js_error)
        }

        fn link_for(&self, path: &str, query: &str) -> String {
            let origin = self.window.location().origin().unwrap_or_default();
            join_link(&origin, path, query, "")
        }
    }
}
