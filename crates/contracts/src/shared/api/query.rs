use std::collections::BTreeMap;

pub const DEFAULT_PER_PAGE: u32 = 10;

/// Parameters of a paged list request: `?page=&per_page=&search_key=&<filter>=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub search_key: String,
    pub filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search_key: String::new(),
            filters: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    pub fn page(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search_key = search.into();
        self
    }

    pub fn with_filter(mut self, key: &str, value: impl Into<String>) -> Self {
        self.filters.insert(key.to_string(), value.into());
        self
    }

    /// Flat parameter map; blank search and filter values are left out.
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("page".to_string(), self.page.to_string());
        params.insert("per_page".to_string(), self.per_page.to_string());

        let search = self.search_key.trim();
        if !search.is_empty() {
            params.insert("search_key".to_string(), search.to_string());
        }

        for (key, value) in &self.filters {
            if !value.trim().is_empty() {
                params.insert(key.clone(), value.trim().to_string());
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_has_only_paging() {
        let params = ListQuery::default().to_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params["page"], "1");
        assert_eq!(params["per_page"], "10");
    }

    #[test]
    fn test_blank_search_and_filters_are_omitted() {
        let params = ListQuery::page(3, 25)
            .with_search("   ")
            .with_filter("design_type_id", "")
            .with_filter("assign_type", "distributor")
            .to_params();
        assert!(!params.contains_key("search_key"));
        assert!(!params.contains_key("design_type_id"));
        assert_eq!(params["assign_type"], "distributor");
        assert_eq!(params["page"], "3");
    }

    #[test]
    fn test_page_zero_is_clamped() {
        let query = ListQuery::page(0, 0);
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 1);
    }
}
