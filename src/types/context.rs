//! Shared per-operation context.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::{Map, Value};

/// Mutable scratch space threaded through every link an operation visits.
///
/// Cloning a `Context` clones the handle, not the data: every clone observes
/// writes made through any other. Each accessor holds the lock only for the
/// duration of the call, so there is at most one writer at a time.
#[derive(Clone, Default)]
pub struct Context {
    inner: Arc<Mutex<Map<String, Value>>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(values: Map<String, Value>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(values)),
        }
    }

    // A panicking writer cannot leave the map half-updated, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Map<String, Value>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.lock().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.lock().insert(key.into(), value.into())
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.lock().remove(key)
    }

    /// Shallow merge: keys in `values` overwrite existing keys.
    pub fn merge(&self, values: Map<String, Value>) {
        let mut guard = self.lock();
        for (k, v) in values {
            guard.insert(k, v);
        }
    }

    /// Run `f` with exclusive access to the underlying map.
    ///
    /// The context stays locked while `f` runs: `f` must not touch this
    /// context through any other handle. Use
    /// [`Operation::set_context_with`](crate::types::Operation::set_context_with)
    /// when the new values depend on reading the context.
    pub fn update<R>(&self, f: impl FnOnce(&mut Map<String, Value>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Map<String, Value> {
        self.lock().clone()
    }

    /// Whether both handles point at the same context.
    pub fn ptr_eq(&self, other: &Context) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Context").field(&*self.lock()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clones_share_writes() {
        let ctx = Context::new();
        let other = ctx.clone();
        other.insert("seen", true);
        assert_eq!(ctx.get("seen"), Some(json!(true)));
        assert!(ctx.ptr_eq(&other));
    }

    #[test]
    fn merge_overwrites_shallowly() {
        let mut base = Map::new();
        base.insert("a".into(), json!({"x": 1}));
        base.insert("b".into(), json!(2));
        let ctx = Context::from_map(base);

        let mut patch = Map::new();
        patch.insert("a".into(), json!({"y": 2}));
        ctx.merge(patch);

        assert_eq!(ctx.get("a"), Some(json!({"y": 2})));
        assert_eq!(ctx.get("b"), Some(json!(2)));
    }

    #[test]
    fn update_returns_closure_value() {
        let ctx = Context::new();
        let len = ctx.update(|map| {
            map.insert("k".into(), json!("v"));
            map.len()
        });
        assert_eq!(len, 1);
        assert!(ctx.contains_key("k"));
        assert_eq!(ctx.remove("k"), Some(json!("v")));
        assert!(ctx.snapshot().is_empty());
    }
}
