//! Executor: entry point that turns a raw request into a result stream.
//!
//! Execution is normalize → validate → transform → `head.request(op, None)`.
//! Nothing is awaited here; the returned stream does the work once polled.

mod config;
mod normalize;

pub use config::ExecutorConfig;
pub use normalize::{
    derive_operation, get_operation_name, normalize_request, transform_operation,
    validate_request,
};

use crate::error::LinkError;
use crate::link::{ApolloLink, LinkLike};
use crate::streaming::{ResultStream, ResultStreamHandle, empty_stream};
use crate::types::{GraphQLRequest, Operation};
use crate::utils::cancel::make_cancellable_stream;

/// Runs requests through a fully composed head link.
#[derive(Debug, Clone)]
pub struct Executor {
    link: ApolloLink,
    config: ExecutorConfig,
}

impl Executor {
    pub fn new(link: impl Into<LinkLike>) -> Self {
        Self {
            link: link.into().into_link(),
            config: ExecutorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn link(&self) -> &ApolloLink {
        &self.link
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Normalize, validate and transform `request` without running it.
    ///
    /// The caller's request is never modified.
    pub fn prepare(&self, request: &GraphQLRequest) -> Result<Operation, LinkError> {
        let normalized = normalize_request(request);
        validate_request(&normalized)?;
        Ok(transform_operation(normalized, &self.config))
    }

    /// Run `request` through the head link.
    ///
    /// Fails synchronously for an invalid request (before any link runs) or
    /// when a link in the chain is unimplemented. Runtime failures arrive as
    /// `Err` items on the returned stream.
    pub fn execute(&self, request: &GraphQLRequest) -> Result<ResultStream, LinkError> {
        let operation = self.prepare(request)?;
        tracing::debug!(
            target: "apollo_link::executor",
            link = %self.link.display_name(),
            operation = %operation.operation_name.as_deref().unwrap_or_default(),
            operation_type = ?operation.operation_type,
            "executing operation"
        );
        Ok(self.link.request(operation, None)?.unwrap_or_else(empty_stream))
    }

    /// Like [`execute`](Self::execute), returning a stream paired with a
    /// cancel handle.
    pub fn execute_with_cancel(
        &self,
        request: &GraphQLRequest,
    ) -> Result<ResultStreamHandle, LinkError> {
        let (stream, cancel) = make_cancellable_stream(self.execute(request)?);
        Ok(ResultStreamHandle { stream, cancel })
    }
}

/// Run `request` through `link` with the default [`ExecutorConfig`].
pub fn execute(link: &ApolloLink, request: &GraphQLRequest) -> Result<ResultStream, LinkError> {
    Executor::new(link).execute(request)
}
