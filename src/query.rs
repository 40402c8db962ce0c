//! # Query Parameter Layer
//!
//! Parse and serialize URL query strings on top of the percent codec.
//!
//! Bracketed names carry structure:
//! - `name[]=v` appends `v` to a list stored under `name`
//! - `name[key]=v` inserts `key => v` into a nested map stored under `name`
//! - segments chain, so `name[a][b]=v` and `name[a][]=v` nest one level deeper
//!
//! Plain names are last-write-wins; the overwritten entry keeps its
//! original position.

use crate::codec::percent::{decode_percent, encode_percent};
use crate::error::BytekitError;

/// A query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    List(Vec<String>),
    Map(QueryParameterMap),
}

impl QueryValue {
    /// The text value, if this is a plain parameter.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            QueryValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(text: &str) -> Self {
        QueryValue::Text(text.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(text: String) -> Self {
        QueryValue::Text(text)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(items: Vec<String>) -> Self {
        QueryValue::List(items)
    }
}

impl From<QueryParameterMap> for QueryValue {
    fn from(map: QueryParameterMap) -> Self {
        QueryValue::Map(map)
    }
}

/// Insertion-ordered mapping from parameter name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameterMap {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParameterMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Shorthand for `get(name).and_then(QueryValue::as_text)`.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(QueryValue::as_text)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut QueryValue> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Insert or overwrite `name`, returning the previous value.
    ///
    /// An overwritten entry stays where it was first inserted.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<QueryValue>,
    ) -> Option<QueryValue> {
        let name = name.into();
        let value = value.into();
        match self.get_mut(&name) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<QueryValue> {
        let index = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn push_list_item(&mut self, name: String, item: String) {
        match self.get_mut(&name) {
            Some(QueryValue::List(items)) => items.push(item),
            Some(slot) => *slot = QueryValue::List(vec![item]),
            None => self.entries.push((name, QueryValue::List(vec![item]))),
        }
    }

    /// Slot for `name`, created as an empty map when absent.
    fn slot_mut(&mut self, name: &str) -> &mut QueryValue {
        let index = match self.entries.iter().position(|(k, _)| k == name) {
            Some(index) => index,
            None => {
                self.entries
                    .push((name.to_owned(), QueryValue::Map(QueryParameterMap::new())));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// Store `value` under `name` followed by its bracket `segments`.
    ///
    /// Each non-final segment descends into a nested map, replacing any
    /// non-map value found on the way. A trailing empty segment appends to
    /// a list.
    fn insert_path(&mut self, name: &str, segments: &[&str], value: String) {
        match segments {
            [] => {
                self.insert(name, value);
            }
            [""] => self.push_list_item(name.to_owned(), value),
            [key, rest @ ..] => {
                let slot = self.slot_mut(name);
                let mut child = match std::mem::replace(slot, QueryValue::List(Vec::new())) {
                    QueryValue::Map(map) => map,
                    QueryValue::Text(_) | QueryValue::List(_) => QueryParameterMap::new(),
                };
                child.insert_path(key, rest, value);
                *slot = QueryValue::Map(child);
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParameterMap
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = QueryParameterMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Split a decoded name into its base and bracket segments.
///
/// `a[b][]` gives `("a", ["b", ""])`. Plain names, names starting with `[`
/// and names with unbalanced brackets yield `None`.
fn split_bracketed(name: &str) -> Option<(&str, Vec<&str>)> {
    let open = name.find('[')?;
    if open == 0 {
        return None;
    }

    let (base, mut rest) = name.split_at(open);
    let mut segments = Vec::new();
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        segments.push(&inner[..close]);
        rest = &inner[close + 1..];
    }
    Some((base, segments))
}

/// Parse a query string (without the leading `?`).
///
/// Segments are split on `&` (empty segments skipped), then on the first
/// `=`; a segment without `=` maps to an empty value. Names and values are
/// percent-decoded before bracket handling.
///
/// # Errors
///
/// [`BytekitError::InvalidPercentEncoding`] or [`BytekitError::InvalidUtf8`]
/// from decoding any name or value.
///
/// ```
/// let params = bytekit::parse_query("a=1&b=2&a=3")?;
/// assert_eq!(params.get_text("a"), Some("3"));
/// assert_eq!(params.get_text("b"), Some("2"));
/// assert_eq!(params.iter().next().map(|(k, _)| k), Some("a"));
/// # Ok::<(), bytekit::BytekitError>(())
/// ```
pub fn parse_query(query: &str) -> Result<QueryParameterMap, BytekitError> {
    let mut params = QueryParameterMap::new();

    for segment in query.split('&').filter(|s| !s.is_empty()) {
        let (raw_name, raw_value) = segment.split_once('=').unwrap_or((segment, ""));
        let name = decode_percent(raw_name)?;
        let value = decode_percent(raw_value)?;

        match split_bracketed(&name) {
            Some((base, segments)) => params.insert_path(base, &segments, value),
            None => {
                params.insert(name.as_str(), value);
            }
        }
    }

    Ok(params)
}

/// Parse the query component of a full URL.
///
/// Takes everything after the first `?` and before any `#`. A URL without
/// `?` yields an empty map.
pub fn parse_url_query(url: &str) -> Result<QueryParameterMap, BytekitError> {
    let Some((_, rest)) = url.split_once('?') else {
        return Ok(QueryParameterMap::new());
    };
    let query = rest.split_once('#').map_or(rest, |(q, _)| q);
    parse_query(query)
}

fn push_pair(out: &mut Vec<String>, name: &str, value: &str) {
    out.push(format!("{}={}", encode_percent(name), encode_percent(value)));
}

fn flatten(prefix: &str, value: &QueryValue, out: &mut Vec<String>) {
    match value {
        QueryValue::Text(text) => push_pair(out, prefix, text),
        QueryValue::List(items) => {
            let name = format!("{prefix}[]");
            for item in items {
                push_pair(out, &name, item);
            }
        }
        QueryValue::Map(map) => {
            for (key, nested) in map.iter() {
                flatten(&format!("{prefix}[{key}]"), nested, out);
            }
        }
    }
}

/// Encode `params` as `name=value` pairs joined with `&`, without a leading separator.
pub fn encode_query(params: &QueryParameterMap) -> String {
    let mut pairs = Vec::with_capacity(params.len());
    for (name, value) in params.iter() {
        flatten(name, value, &mut pairs);
    }
    pairs.join("&")
}

/// Append `params` to `base_url`.
///
/// Uses `?` when `base_url` contains no `?`, otherwise `&`. The check is a
/// plain substring test, not URL parsing. A base URL already ending in `?`
/// or `&` gets the pairs appended directly, and empty `params` return the
/// base URL unchanged.
///
/// ```
/// use bytekit::{serialize_query, QueryParameterMap};
///
/// let params: QueryParameterMap = [("a", "1"), ("b", "2")].into_iter().collect();
/// assert_eq!(serialize_query("https://x.test/p", &params), "https://x.test/p?a=1&b=2");
/// assert_eq!(serialize_query("https://x.test/p?x=0", &params), "https://x.test/p?x=0&a=1&b=2");
/// ```
pub fn serialize_query(base_url: &str, params: &QueryParameterMap) -> String {
    let encoded = encode_query(params);
    if encoded.is_empty() {
        return base_url.to_owned();
    }

    let separator = if base_url.ends_with('?') || base_url.ends_with('&') {
        ""
    } else if base_url.contains('?') {
        "&"
    } else {
        "?"
    };

    format!("{base_url}{separator}{encoded}")
}
