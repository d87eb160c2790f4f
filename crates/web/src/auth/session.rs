use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;

/// Set of currently valid bearer tokens.
///
/// Tokens live until the process exits. Lookups share a read lock; inserts
/// take the write lock, so concurrent logins never lose a token.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, token: String) {
        self.tokens.write().insert(token);
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.read().contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.read().is_empty()
    }
}
