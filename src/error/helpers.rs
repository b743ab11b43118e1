//! Constructors and classification helpers for `LinkError`.

use super::types::{ErrorCategory, LinkError};
use crate::link::ApolloLink;

impl LinkError {
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError(message.into())
    }

    pub fn stream(message: impl Into<String>) -> Self {
        Self::StreamError(message.into())
    }

    /// Warning raised when something is concatenated after a terminating link.
    pub fn terminating_concat(link: &ApolloLink) -> Self {
        Self::TerminatingConcat {
            link: link.display_name().to_string(),
        }
    }

    /// Map the error into its coarse category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidOperation(_) => ErrorCategory::Validation,
            Self::Unimplemented | Self::TerminatingConcat { .. } => ErrorCategory::Composition,
            Self::TelemetryInit(_) => ErrorCategory::Configuration,
            Self::NetworkError(_)
            | Self::GraphQLErrors(_)
            | Self::StreamError(_)
            | Self::Other(_) => ErrorCategory::Runtime,
        }
    }

    /// True for errors that fail fast and synchronously: bad composition or a
    /// malformed request. Runtime failures are delivered through the stream.
    pub fn is_programmer_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Validation | ErrorCategory::Composition
        )
    }
}
