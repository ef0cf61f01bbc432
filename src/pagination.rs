//! Pagination and query string conventions for list endpoints.

use serde::Serialize;

use crate::error::{NewReleasesError, Result};

/// A page of results from the NewReleases API.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Number of the last available page.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Create a new page from items and pagination info.
    #[must_use]
    pub fn new(items: Vec<T>, page: u32, total_pages: u32) -> Self {
        Self {
            items,
            page,
            total_pages,
        }
    }

    /// Whether there are pages after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Query string builder for API paths.
///
/// Supports presence-only flags (`?reverse`, `?added`) which the API expects
/// without a value.
#[derive(Debug, Default)]
pub(crate) struct Query {
    parts: Vec<String>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add the page parameter. Page 1 is the default and is omitted.
    ///
    /// # Errors
    ///
    /// Returns [`NewReleasesError::InvalidPageNumber`] for page 0.
    pub(crate) fn page(mut self, page: u32) -> Result<Self> {
        if page < 1 {
            return Err(NewReleasesError::InvalidPageNumber);
        }
        if page > 1 {
            self = self.pair("page", &page.to_string());
        }
        Ok(self)
    }

    pub(crate) fn pair(mut self, key: &str, value: &str) -> Self {
        self.parts.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(value)
        ));
        self
    }

    pub(crate) fn pair_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.pair(key, value),
            _ => self,
        }
    }

    pub(crate) fn flag(mut self, key: &str, enabled: bool) -> Self {
        if enabled {
            self.parts.push(urlencoding::encode(key).into_owned());
        }
        self
    }

    /// Append the query string to `path`.
    pub(crate) fn to_path(&self, path: &str) -> String {
        if self.parts.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.parts.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_more() {
        let page: Page<i32> = Page::new(vec![1; 10], 1, 3);
        assert!(page.has_more());

        let page: Page<i32> = Page::new(vec![1; 4], 3, 3);
        assert!(!page.has_more());

        let page: Page<i32> = Page::new(vec![], 1, 0);
        assert!(!page.has_more());
    }

    #[test]
    fn test_page_map() {
        let page = Page::new(vec![1, 2, 3], 1, 1);
        let mapped = page.map(|x| x * 2);
        assert_eq!(mapped.items, vec![2, 4, 6]);
        assert_eq!(mapped.page, 1);
    }

    #[test]
    fn test_first_page_is_omitted() {
        let path = Query::new().page(1).unwrap().to_path("v1/projects");
        assert_eq!(path, "v1/projects");

        let path = Query::new().page(3).unwrap().to_path("v1/projects");
        assert_eq!(path, "v1/projects?page=3");
    }

    #[test]
    fn test_page_zero_is_rejected() {
        let err = Query::new().page(0).unwrap_err();
        assert!(matches!(err, NewReleasesError::InvalidPageNumber));
    }

    #[test]
    fn test_flag_has_no_value() {
        let path = Query::new()
            .page(2)
            .unwrap()
            .pair_opt("order", Some("name"))
            .flag("reverse", true)
            .to_path("v1/projects");
        assert_eq!(path, "v1/projects?page=2&order=name&reverse");

        let path = Query::new().flag("reverse", false).to_path("v1/projects");
        assert_eq!(path, "v1/projects");
    }

    #[test]
    fn test_values_are_encoded() {
        let path = Query::new()
            .pair("q", "golang/go & more")
            .pair_opt("provider", None)
            .to_path("v1/projects/search");
        assert_eq!(path, "v1/projects/search?q=golang%2Fgo%20%26%20more");
    }
}
