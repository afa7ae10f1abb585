//! Query-string helpers for building embed URLs.
//!
//! Mirrors the browser `URLSearchParams` semantics that player query
//! parameters are usually written against, so that "set" never duplicates a
//! key and existing parameter order is kept.

use url::{form_urlencoded, Url};

/// Ordered list of decoded query pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the query of an existing URL.
    pub fn from_url(url: &Url) -> Self {
        Self {
            pairs: url.query_pairs().into_owned().collect(),
        }
    }

    /// Decode a raw `application/x-www-form-urlencoded` string (no leading `?`).
    pub fn parse(query: &str) -> Self {
        Self {
            pairs: form_urlencoded::parse(query.as_bytes()).into_owned().collect(),
        }
    }

    /// Whether at least one pair is named `key`.
    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Value of the first pair named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key` to `value`.
    ///
    /// The first pair named `key` takes the new value in place and any later
    /// pairs with that name are removed. A missing key is appended.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value.to_string();
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    /// Copy every pair of `other` onto `self` with [`QueryParams::set`].
    pub fn merge(&mut self, other: &QueryParams) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }

    /// Iterate over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Replace the query of `url` with these pairs.
    pub fn apply_to(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            url.set_query(None);
            return;
        }
        url.query_pairs_mut().clear().extend_pairs(self.pairs.iter());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_appends_missing_key() {
        let mut params = QueryParams::parse("rel=0");
        params.set("autoplay", "1");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("rel", "0"), ("autoplay", "1")]);
    }

    #[test]
    fn test_set_replaces_in_place_and_drops_duplicates() {
        let mut params = QueryParams::parse("a=1&start=5&b=2&start=9");
        params.set("start", "42");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("start", "42"), ("b", "2")]);
    }

    #[test]
    fn test_get_and_has() {
        let params = QueryParams::parse("v=abc&t=&v=def");

        assert!(params.has("t"));
        assert_eq!(params.get("v"), Some("abc"));
        assert_eq!(params.get("t"), Some(""));
        assert_eq!(params.get("missing"), None);
        assert!(!params.has("missing"));
    }

    #[test]
    fn test_merge_uses_set_semantics() {
        let mut base = QueryParams::parse("autoplay=0");
        base.merge(&QueryParams::parse("start=3&start=7&autoplay=1"));

        let pairs: Vec<_> = base.iter().collect();
        assert_eq!(pairs, vec![("autoplay", "1"), ("start", "7")]);
    }

    #[test]
    fn test_apply_to_encodes_form_style() {
        let mut url = Url::parse("https://www.youtube.com/embed/foo?old=1#frag").unwrap();
        let mut params = QueryParams::new();
        params.set("origin", "http://localhost:8080");
        params.set("q", "a b");
        params.apply_to(&mut url);

        assert_eq!(
            url.as_str(),
            "https://www.youtube.com/embed/foo?origin=http%3A%2F%2Flocalhost%3A8080&q=a+b#frag"
        );
    }

    #[test]
    fn test_apply_empty_clears_query() {
        let mut url = Url::parse("https://example.com/path?x=1").unwrap();
        QueryParams::new().apply_to(&mut url);
        assert_eq!(url.as_str(), "https://example.com/path");
    }

    #[test]
    fn test_from_url_decodes() {
        let url = Url::parse("https://example.com/?origin=http%3A%2F%2Fa.b&x=y+z").unwrap();
        let params = QueryParams::from_url(&url);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("origin"), Some("http://a.b"));
        assert_eq!(params.get("x"), Some("y z"));
    }
}
