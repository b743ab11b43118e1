//! Raw request description accepted by the executor.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LinkError;

/// Keys accepted by [`GraphQLRequest::from_value`].
pub const OPERATION_FIELDS: [&str; 5] = [
    "query",
    "operationName",
    "variables",
    "extensions",
    "context",
];

/// A request as handed to `execute`, before normalization.
///
/// Every field is optional here; the executor fills in `variables` and
/// `context` and rejects a request without `query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
}

impl GraphQLRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = Some(variables);
        self
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_extensions(mut self, extensions: Map<String, Value>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// Strict conversion from an untyped JSON object.
    ///
    /// Keys outside [`OPERATION_FIELDS`] are rejected with
    /// `InvalidOperation("illegal argument: <key>")`.
    pub fn from_value(value: Value) -> Result<Self, LinkError> {
        let Value::Object(object) = value else {
            return Err(LinkError::invalid_operation(
                "request description must be a JSON object",
            ));
        };
        if let Some(key) = object
            .keys()
            .find(|k| !OPERATION_FIELDS.contains(&k.as_str()))
        {
            return Err(LinkError::invalid_operation(format!(
                "illegal argument: {key}"
            )));
        }
        serde_json::from_value(Value::Object(object))
            .map_err(|e| LinkError::invalid_operation(e.to_string()))
    }
}
