//! Normalized operation passed through a link chain.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::context::Context;

/// Kind of GraphQL operation, derived from the document when possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        };
        f.write_str(s)
    }
}

/// A normalized request travelling through the chain.
///
/// `variables` and `extensions` are always present (possibly empty). Cloning
/// an `Operation` copies its fields but shares its [`Context`].
#[derive(Debug, Clone)]
pub struct Operation {
    pub query: String,
    pub variables: Map<String, Value>,
    pub operation_name: Option<String>,
    pub operation_type: Option<OperationType>,
    pub extensions: Map<String, Value>,
    context: Context,
}

impl Operation {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
            operation_name: None,
            operation_type: None,
            extensions: Map::new(),
            context: Context::new(),
        }
    }

    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    pub fn with_operation_type(mut self, ty: OperationType) -> Self {
        self.operation_type = Some(ty);
        self
    }

    pub fn with_extensions(mut self, extensions: Map<String, Value>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Replace the context handle.
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Shared handle to this operation's context.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Snapshot of the current context.
    pub fn get_context(&self) -> Map<String, Value> {
        self.context.snapshot()
    }

    /// Shallow-merge `values` into the context.
    pub fn set_context(&self, values: Map<String, Value>) {
        self.context.merge(values);
    }

    /// Compute new entries from a snapshot of the context and merge them in.
    ///
    /// `f` runs without the context locked, so it may read the context
    /// through any handle.
    pub fn set_context_with(&self, f: impl FnOnce(&Map<String, Value>) -> Map<String, Value>) {
        let next = f(&self.context.snapshot());
        self.context.merge(next);
    }

    /// Stable identity key: `{query}|{variables}|{operation_name}`.
    ///
    /// Variables serialize with sorted keys, so insertion order does not
    /// affect the key.
    pub fn to_key(&self) -> String {
        format!(
            "{}|{}|{}",
            self.query,
            Value::Object(self.variables.clone()),
            self.operation_name.as_deref().unwrap_or_default()
        )
    }
}
