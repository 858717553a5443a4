//! Flag binder: command-line token -> (section, key)

use ahash::AHashMap;

/// Lookup table mapping token text to the parameter it addresses.
///
/// Tokens are stored with their markers: `--verbose` for a long flag,
/// `-v` for a short flag, and a bare stringified index like `0` for a
/// positional binding. One token binds at most one (section, key); a
/// parameter may carry a long flag, a short flag, and an index at the
/// same time, each under its own token.
#[derive(Debug, Default)]
pub struct FlagBinder {
    bindings: AHashMap<String, (String, String)>,
}

impl FlagBinder {
    pub fn new() -> Self {
        FlagBinder::default()
    }

    /// Bind a token. A token bound twice keeps the latest target.
    pub fn bind(&mut self, token: &str, section: &str, key: &str) {
        self.bindings
            .insert(token.to_string(), (section.to_string(), key.to_string()));
    }

    /// Resolve a token to its (section, key), if bound.
    pub fn resolve(&self, token: &str) -> Option<(&str, &str)> {
        self.bindings
            .get(token)
            .map(|(section, key)| (section.as_str(), key.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
