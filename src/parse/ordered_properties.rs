use std::collections::HashMap;

/// Key/value pairs kept in the order they were last written.
///
/// Overwriting an existing key replaces its value and moves the key to the
/// end of the sequence, so the order always reflects the position of each
/// key's last occurrence in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedProperties {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl OrderedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let previous = self.remove(&key);
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value.into()));
        previous
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let position = self.index.remove(key)?;
        let (_, value) = self.entries.remove(position);
        // Entries after the removed one shifted left by one
        for (k, _) in &self.entries[position..] {
            if let Some(slot) = self.index.get_mut(k) {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// (key, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
