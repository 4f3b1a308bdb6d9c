use std::sync::{Arc, Mutex};

use wasm_bindgen::JsValue;
use web_sys::window;

/// Access to the page URL
pub trait QueryNavigator: Send + Sync + 'static {
    /// Current query string without the leading `?`
    fn current_query(&self) -> String;

    /// Rewrite the query string in place, without a new history entry
    fn replace_query(&self, query: &str);

    /// Navigate to another page, e.g. after a successful submit
    fn push_path(&self, path: &str);
}

/// Browser History API implementation
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl QueryNavigator for BrowserHistory {
    fn current_query(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .map(|s| s.trim_start_matches('?').to_string())
            .unwrap_or_default()
    }

    fn replace_query(&self, query: &str) {
        let Some(w) = window() else { return };
        let new_url = if query.is_empty() {
            w.location().pathname().unwrap_or_else(|_| "/".to_string())
        } else {
            format!("?{}", query)
        };
        let current = w.location().search().unwrap_or_default();
        if current.trim_start_matches('?') == query {
            return;
        }
        match w.history() {
            Ok(history) => {
                if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url)) {
                    log::warn!("replaceState failed: {:?}", e);
                }
            }
            Err(e) => log::warn!("history unavailable: {:?}", e),
        }
    }

    fn push_path(&self, path: &str) {
        let Some(w) = window() else { return };
        if let Err(e) = w.location().assign(path) {
            log::warn!("navigation to {} failed: {:?}", path, e);
        }
    }
}

/// In-memory history used by tests and non-browser hosts
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemoryHistory {
    /// History with a single entry at `url` (path plus optional `?query`)
    pub fn new(url: &str) -> Self {
        Self {
            entries: Arc::new(Mutex::new(vec![url.to_string()])),
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn current_url(&self) -> String {
        self.lock().last().cloned().unwrap_or_default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl QueryNavigator for MemoryHistory {
    fn current_query(&self) -> String {
        let url = self.current_url();
        url.split_once('?')
            .map(|(_, q)| q.to_string())
            .unwrap_or_default()
    }

    fn replace_query(&self, query: &str) {
        let mut entries = self.lock();
        let path = entries
            .last()
            .map(|url| url.split('?').next().unwrap_or("/").to_string())
            .unwrap_or_else(|| "/".to_string());
        let url = if query.is_empty() {
            path
        } else {
            format!("{}?{}", path, query)
        };
        match entries.last_mut() {
            Some(last) => *last = url,
            None => entries.push(url),
        }
    }

    fn push_path(&self, path: &str) {
        self.lock().push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_keeps_history_length() {
        let history = MemoryHistory::new("/assets?page=1");
        history.replace_query("page=2&status=ACTIVE");
        history.replace_query("");
        assert_eq!(history.entries(), vec!["/assets".to_string()]);
    }

    #[test]
    fn test_push_adds_entry() {
        let history = MemoryHistory::new("/facility/create");
        history.push_path("/facility/42/bed");
        assert_eq!(history.entries().len(), 2);
        assert_eq!(history.current_query(), "");
    }
}
