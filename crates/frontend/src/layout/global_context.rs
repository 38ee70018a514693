use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::tab_label_for_key;

/// Query parameter mirroring the active tab.
const ACTIVE_PARAM: &str = "active";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// List tab key → reload counter; bumped after a save so an open list refetches.
    pub list_revisions: RwSignal<HashMap<String, u32>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            list_revisions: RwSignal::new(HashMap::new()),
        }
    }

    /// Restore the tab named in `?active=` and keep the URL in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_key_from_search(&search) {
            log::debug!("restoring tab '{}' from url", active_key);
            self.open_tab(&active_key, &tab_label_for_key(&active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = search_for_active(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if exists {
            log::debug!("tab '{}' already open", key);
        } else {
            log::debug!("open tab '{}' ({})", key, title);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab '{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Close every tab; used on logout.
    pub fn reset(&self) {
        self.opened.set(Vec::new());
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn list_revision(&self, list_key: &str) -> u32 {
        self.list_revisions
            .with(|revs| revs.get(list_key).copied().unwrap_or(0))
    }

    pub fn bump_list_revision(&self, list_key: &str) {
        self.list_revisions.update(|revs| {
            *revs.entry(list_key.to_string()).or_insert(0) += 1;
        });
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

fn active_key_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(ACTIVE_PARAM)
        .filter(|key| !key.is_empty())
        .cloned()
}

fn search_for_active(active_key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([(ACTIVE_PARAM, active_key)]))
        .unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_key_read_from_query() {
        assert_eq!(
            active_key_from_search("?active=a010_customer_edit_7"),
            Some("a010_customer_edit_7".to_string())
        );
        assert_eq!(active_key_from_search("?active="), None);
        assert_eq!(active_key_from_search(""), None);
    }

    #[test]
    fn test_query_written_for_active_tab() {
        assert_eq!(search_for_active("a008_area_new"), "?active=a008_area_new");
        assert_eq!(
            active_key_from_search(&search_for_active("d400_home")),
            Some("d400_home".to_string())
        );
    }
}
