use std::collections::BTreeMap;
use std::mem;

/// Value stored for one protocol header name.
///
/// A name holds several values only after a write with `overwrite = false`
/// hit an existing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    /// A single value.
    Single(String),
    /// Several values in insertion order.
    Multiple(Vec<String>),
}

impl HeaderValue {
    /// All values in storage order.
    pub fn values(&self) -> &[String] {
        match self {
            HeaderValue::Single(v) => std::slice::from_ref(v),
            HeaderValue::Multiple(vs) => vs,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            HeaderValue::Single(existing) => {
                let existing = mem::take(existing);
                *self = HeaderValue::Multiple(vec![existing, value]);
            }
            HeaderValue::Multiple(vs) => vs.push(value),
        }
    }
}

/// HeaderCollection keeps oauth protocol headers, allowing repeated names.
///
/// Storage keeps values in insertion order; [`HeaderCollection::sorted_view`]
/// is the only ordering used for output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCollection {
    headers: BTreeMap<String, HeaderValue>,
}

impl HeaderCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header.
    ///
    /// - `overwrite = true` or an unset name: the value replaces whatever was stored.
    /// - `overwrite = false` on an existing name: the value is appended, turning a
    ///   single value into `[existing, value]`.
    pub fn set_header(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        overwrite: bool,
    ) {
        let name = name.into();
        let value = value.into();

        match self.headers.get_mut(&name) {
            Some(existing) if !overwrite => existing.push(value),
            _ => {
                self.headers.insert(name, HeaderValue::Single(value));
            }
        }
    }

    /// Apply [`HeaderCollection::set_header`] for every entry.
    pub fn set_headers<I, K, V>(&mut self, headers: I, overwrite: bool)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.set_header(name, value, overwrite);
        }
    }

    /// Get the stored value of a header.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// Check if a header is set.
    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns true if no header is set.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Entries sorted by name, each with its values sorted.
    ///
    /// Both orders are byte-lexicographic. Storage is left untouched.
    pub fn sorted_view(&self) -> Vec<(&str, Vec<&str>)> {
        self.headers
            .iter()
            .map(|(name, value)| {
                let mut values: Vec<&str> = value.values().iter().map(String::as_str).collect();
                values.sort_unstable();
                (name.as_str(), values)
            })
            .collect()
    }
}
