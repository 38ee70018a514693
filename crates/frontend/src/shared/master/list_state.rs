use contracts::domain::common::MasterResource;
use contracts::shared::api::{ListQuery, ListResponse, PaginationMeta};
use std::collections::BTreeMap;

/// Everything a paged master list keeps between requests.
#[derive(Clone, Debug)]
pub struct ListState<R: MasterResource> {
    pub items: Vec<R>,
    pub meta: PaginationMeta,
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub page: u32,
    pub per_page: u32,
    pub is_loading: bool,
    pub is_loaded: bool,
}

impl<R: MasterResource> ListState<R> {
    pub fn new(per_page: u32) -> Self {
        Self {
            items: Vec::new(),
            meta: PaginationMeta {
                per_page,
                ..PaginationMeta::default()
            },
            search: String::new(),
            filters: BTreeMap::new(),
            page: 1,
            per_page,
            is_loading: false,
            is_loaded: false,
        }
    }

    pub fn query(&self) -> ListQuery {
        let mut query = ListQuery::page(self.page, self.per_page).with_search(self.search.clone());
        for (key, value) in &self.filters {
            query = query.with_filter(key, value.clone());
        }
        query
    }

    /// A new search starts again from the first page.
    pub fn set_search(&mut self, search: &str) {
        self.search = search.trim().to_string();
        self.page = 1;
    }

    pub fn set_filter(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), value.to_string());
        }
        self.page = 1;
    }

    pub fn filter(&self, key: &str) -> String {
        self.filters.get(key).cloned().unwrap_or_default()
    }

    /// Store a page of results. Returns the page to reload when the requested
    /// page no longer exists (for example after the last row of it went away).
    pub fn apply(&mut self, response: ListResponse<R>) -> Option<u32> {
        self.is_loaded = true;
        let last = response.meta.last_page.max(1);
        if response.data.is_empty() && self.page > last {
            self.page = last;
            return Some(last);
        }
        self.items = response.data;
        self.meta = response.meta;
        self.page = self.meta.current_page.max(1);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a011_brand::Brand;

    fn brand(id: i64) -> Brand {
        Brand {
            id,
            name: format!("Brand {}", id),
            status: true,
            created_at: None,
        }
    }

    fn page_of(current_page: u32, last_page: u32, data: Vec<Brand>) -> ListResponse<Brand> {
        ListResponse {
            success: Some(true),
            data,
            meta: PaginationMeta {
                current_page,
                per_page: 10,
                total: u64::from(last_page) * 10,
                last_page,
            },
        }
    }

    #[test]
    fn test_query_carries_search_and_filters() {
        let mut state = ListState::<Brand>::new(10);
        state.page = 3;
        state.set_search("  oak ");
        state.set_filter("design_type_id", "4");
        let params = state.query().to_params();
        assert_eq!(params.get("page").map(String::as_str), Some("1"));
        assert_eq!(params.get("search_key").map(String::as_str), Some("oak"));
        assert_eq!(params.get("design_type_id").map(String::as_str), Some("4"));
    }

    #[test]
    fn test_clearing_filter_removes_param() {
        let mut state = ListState::<Brand>::new(10);
        state.set_filter("assign_type", "distributor");
        state.set_filter("assign_type", "");
        assert!(!state.query().to_params().contains_key("assign_type"));
    }

    #[test]
    fn test_apply_stores_rows_and_meta() {
        let mut state = ListState::<Brand>::new(10);
        state.page = 2;
        assert_eq!(state.apply(page_of(2, 3, vec![brand(11), brand(12)])), None);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.meta.last_page, 3);
        assert!(state.is_loaded);
    }

    #[test]
    fn test_apply_past_last_page_asks_for_reload() {
        let mut state = ListState::<Brand>::new(10);
        state.page = 4;
        assert_eq!(state.apply(page_of(4, 3, Vec::new())), Some(3));
        assert_eq!(state.page, 3);
    }
}
