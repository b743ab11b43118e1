use serde_json::{Map, Value};

/// Executor settings. Start from `default()` and chain `with_*` calls.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Derive `operation_name`/`operation_type` from the document when the
    /// request does not name the operation.
    pub derive_operation_name: bool,
    /// Entries placed in every operation's context before the caller's own
    /// context is merged on top.
    pub default_context: Map<String, Value>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            derive_operation_name: true,
            default_context: Map::new(),
        }
    }
}

impl ExecutorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_derive_operation_name(mut self, derive: bool) -> Self {
        self.derive_operation_name = derive;
        self
    }

    pub fn with_default_context(mut self, context: Map<String, Value>) -> Self {
        self.default_context = context;
        self
    }

    pub fn with_default_context_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.default_context.insert(key.into(), value.into());
        self
    }
}
