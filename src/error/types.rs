//! Core error types

use thiserror::Error;

use crate::types::GraphQLError;

/// Errors produced while composing, executing or running links.
///
/// Structural mistakes (`InvalidOperation`, `Unimplemented`) are returned
/// synchronously from `request`/`execute`. Operational failures travel through
/// the result stream as `Err` items.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkError {
    /// The request description is missing its document or carries unknown keys.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// A link without a handler was invoked.
    #[error("request is not implemented")]
    Unimplemented,

    /// `concat` was called on a terminating link.
    #[error("You are calling concat on a terminating link ({link}), which will have no effect")]
    TerminatingConcat { link: String },

    /// Transport-level failure reported by a terminating link.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// GraphQL errors surfaced as a stream failure.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQLErrors(Vec<GraphQLError>),

    /// Failure while producing or consuming a result stream.
    #[error("Stream error: {0}")]
    StreamError(String),

    /// Tracing subscriber initialization failed.
    #[error("Telemetry initialization error: {0}")]
    TelemetryInit(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Coarse classification of a [`LinkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed request description.
    Validation,
    /// Misuse of the composition algebra or an unimplemented link.
    Composition,
    /// Failure reported by a link while it was running.
    Runtime,
    /// Environment or telemetry setup problem.
    Configuration,
}

/// Result type for link operations
pub type Result<T> = std::result::Result<T, LinkError>;
