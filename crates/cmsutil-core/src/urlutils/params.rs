//! Query-string parameters appended to URLs.

use indexmap::IndexMap;
use url::form_urlencoded;

/// Ordered query parameters.
///
/// Re-inserting a key replaces its value but keeps the position where the key
/// first appeared, so the encoded query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams(IndexMap<String, String>);

impl UrlParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    /// Builder form of [`UrlParams::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Copies every entry of `other` into `self`, overriding existing keys.
    pub fn merge(&mut self, other: &UrlParams) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `application/x-www-form-urlencoded` encoding (`a=1&b=x+y`).
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for UrlParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = UrlParams::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for UrlParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Appends query parameters to `url` (`url?p1=v1&p2=v2`).
///
/// `mappings` are merged in order and `keywords` last, later sources winning
/// on duplicate keys. With nothing to add, `url` is returned unchanged. The
/// `?` is appended as-is: a `url` that already carries a query string ends up
/// with a second one.
pub fn add_url_parameters(url: &str, mappings: &[UrlParams], keywords: &UrlParams) -> String {
    let mut params = UrlParams::new();
    for mapping in mappings {
        params.merge(mapping);
    }
    params.merge(keywords);

    if params.is_empty() {
        return url.to_string();
    }
    format!("{}?{}", url, params.to_query_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_params_returns_url_unchanged() {
        assert_eq!(add_url_parameters("/x", &[], &UrlParams::new()), "/x");
        assert_eq!(
            add_url_parameters("/x", &[UrlParams::new(), UrlParams::new()], &UrlParams::new()),
            "/x"
        );
    }

    #[test]
    fn mapping_params_in_insertion_order() {
        let params: UrlParams = [("a", "1"), ("b", "2")].into_iter().collect();
        let url = add_url_parameters("/x", &[params], &UrlParams::new());
        assert!(url.starts_with("/x?"));
        assert!(url.contains("a=1"));
        assert!(url.contains("b=2"));
        assert_eq!(url, "/x?a=1&b=2");
    }

    #[test]
    fn keywords_override_mappings() {
        let first = UrlParams::new().with("page", 1).with("q", "cms");
        let second = UrlParams::new().with("page", 2);
        let keywords = UrlParams::new().with("q", "pages").with("edit", "on");
        assert_eq!(
            add_url_parameters("/admin/", &[first, second], &keywords),
            "/admin/?page=2&q=pages&edit=on"
        );
    }

    #[test]
    fn values_are_form_encoded() {
        let keywords = UrlParams::new().with("q", "a b&c=d").with("path", "/x/ü");
        assert_eq!(
            add_url_parameters("/search", &[], &keywords),
            "/search?q=a+b%26c%3Dd&path=%2Fx%2F%C3%BC"
        );
    }

    #[test]
    fn asterisk_left_unescaped() {
        let keywords = UrlParams::new().with("q", "a*b");
        assert_eq!(add_url_parameters("/x", &[], &keywords), "/x?q=a*b");
    }

    #[test]
    fn existing_query_string_is_not_merged() {
        let keywords = UrlParams::new().with("b", 2);
        assert_eq!(add_url_parameters("/x?a=1", &[], &keywords), "/x?a=1?b=2");
    }

    #[test]
    fn reinsert_keeps_first_position() {
        let mut params = UrlParams::new();
        params.insert("a", 1).insert("b", 2).insert("a", 3);
        assert_eq!(params.to_query_string(), "a=3&b=2");
        assert_eq!(params.get("a"), Some("3"));
        assert_eq!(params.len(), 2);
    }
}
