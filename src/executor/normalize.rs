//! Request normalization, validation and transformation.

use async_graphql_parser::types::{DocumentOperations, OperationType as ParsedOperationType};
use serde_json::Map;

use super::config::ExecutorConfig;
use crate::error::LinkError;
use crate::types::{Context, GraphQLRequest, Operation, OperationType};

/// Copy `request`, filling in empty `variables` and `context`.
pub fn normalize_request(request: &GraphQLRequest) -> GraphQLRequest {
    let mut copy = request.clone();
    copy.variables.get_or_insert_with(Map::new);
    copy.context.get_or_insert_with(Map::new);
    copy
}

/// Reject a request without a document.
pub fn validate_request(request: &GraphQLRequest) -> Result<(), LinkError> {
    match request.query.as_deref() {
        Some(query) if !query.trim().is_empty() => Ok(()),
        _ => Err(LinkError::invalid_operation("query is required")),
    }
}

/// Build the operation handed to the head link.
///
/// The context starts from `config.default_context` with the request's own
/// context merged on top. Name and type are derived from the document when
/// enabled and the request leaves the name empty.
pub fn transform_operation(request: GraphQLRequest, config: &ExecutorConfig) -> Operation {
    let context = Context::from_map(config.default_context.clone());
    if let Some(values) = request.context {
        context.merge(values);
    }

    let mut operation = Operation::new(request.query.unwrap_or_default())
        .with_variables(request.variables.unwrap_or_default())
        .with_extensions(request.extensions.unwrap_or_default())
        .with_context(context);
    operation.operation_name = request.operation_name.filter(|name| !name.is_empty());

    if config.derive_operation_name {
        if let Some((name, ty)) =
            derive_operation(&operation.query, operation.operation_name.as_deref())
        {
            if operation.operation_name.is_none() {
                operation.operation_name = name;
            }
            operation.operation_type = Some(ty);
        }
    }
    operation
}

/// Name of the single operation in `query`, if it has one.
pub fn get_operation_name(query: &str) -> Option<String> {
    derive_operation(query, None).and_then(|(name, _)| name)
}

/// Find the operation to run and report its name and type.
///
/// With `operation_name` the matching definition is used. Without it the
/// document must contain exactly one operation. Documents that fail to parse
/// yield `None`.
pub fn derive_operation(
    query: &str,
    operation_name: Option<&str>,
) -> Option<(Option<String>, OperationType)> {
    let document = match async_graphql_parser::parse_query(query) {
        Ok(document) => document,
        Err(e) => {
            tracing::debug!(target: "apollo_link::executor", err = %e, "could not parse document; skipping operation derivation");
            return None;
        }
    };

    match &document.operations {
        DocumentOperations::Single(operation) => Some((None, convert_type(operation.node.ty))),
        DocumentOperations::Multiple(operations) => match operation_name {
            Some(wanted) => operations
                .iter()
                .find(|(name, _)| name.as_str() == wanted)
                .map(|(name, op)| (Some(name.to_string()), convert_type(op.node.ty))),
            None if operations.len() == 1 => operations
                .iter()
                .next()
                .map(|(name, op)| (Some(name.to_string()), convert_type(op.node.ty))),
            None => None,
        },
    }
}

fn convert_type(ty: ParsedOperationType) -> OperationType {
    match ty {
        ParsedOperationType::Query => OperationType::Query,
        ParsedOperationType::Mutation => OperationType::Mutation,
        ParsedOperationType::Subscription => OperationType::Subscription,
    }
}
