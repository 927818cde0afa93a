use std::fmt;
use std::ops::Deref;

/// Chain of keys from the walk root to a value.
///
/// The root itself has the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// A new path with `key` appended.
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        let mut keys = Vec::with_capacity(self.0.len() + 1);
        keys.extend(self.0.iter().cloned());
        keys.push(key.to_string());
        Self(keys)
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.0
    }

    /// Render as an RFC 6901 JSON pointer (`""` for the root).
    #[must_use]
    pub fn to_pointer(&self) -> String {
        let mut out = String::new();
        for key in &self.0 {
            out.push('/');
            out.push_str(&key.replace('~', "~0").replace('/', "~1"));
        }
        out
    }
}

impl Deref for KeyPath {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(keys: Vec<String>) -> Self {
        Self(keys)
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Dotted form, e.g. `a.b.0`.
impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}
