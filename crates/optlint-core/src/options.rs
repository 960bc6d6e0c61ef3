use std::collections::HashMap;

use rustc_hash::FxHashMap;

/// Read-only access to the analyzer options that apply to one file.
pub trait ConfigOptions {
    fn get(&self, key: &str) -> Option<&str>;
}

impl<T: ConfigOptions + ?Sized> ConfigOptions for &T {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
}

/// Plain maps are looked up with the key as given.
impl ConfigOptions for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

/// Options resolved for one file.
///
/// Keys are compared ASCII case-insensitively, as in `.editorconfig`. Values
/// are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    values: FxHashMap<String, String>,
}

impl ResolvedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.values
            .insert(key.as_ref().to_ascii_lowercase(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigOptions for ResolvedConfig {
    fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ResolvedConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = ResolvedConfig::new();
        config.extend(iter);
        config
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for ResolvedConfig {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Parse an option value as a boolean. Anything other than `true` or `false`
/// (ignoring case and surrounding whitespace) is malformed.
pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
