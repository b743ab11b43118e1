//! Request handlers and the terminating/forwarding tag.

use std::sync::Arc;

use crate::error::LinkError;
use crate::streaming::ResultStream;
use crate::types::Operation;

/// Output of a handler: `Err` for synchronous programmer errors, `Ok(None)`
/// for "absent" (replaced by the empty stream wherever it is consumed).
pub type LinkResult = Result<Option<ResultStream>, LinkError>;

/// Forwarding function handed to a non-terminating link: calling it runs the
/// rest of the chain.
pub type NextLink = Arc<dyn Fn(Operation) -> Result<ResultStream, LinkError> + Send + Sync>;

/// Build a [`NextLink`] from a closure.
pub fn next_link<F>(forward: F) -> NextLink
where
    F: Fn(Operation) -> Result<ResultStream, LinkError> + Send + Sync + 'static,
{
    Arc::new(forward)
}

pub type TerminatingFn = dyn Fn(Operation) -> LinkResult + Send + Sync;
pub type ForwardingFn = dyn Fn(Operation, Option<NextLink>) -> LinkResult + Send + Sync;

/// Whether a link ends the chain or may delegate to the rest of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Never receives a forwarding function and always produces the result itself.
    Terminating,
    /// Receives a forwarding function when one is available.
    Forwarding,
}

/// A handler tagged with its [`LinkKind`] at construction time.
#[derive(Clone)]
pub enum RequestHandler {
    Terminating(Arc<TerminatingFn>),
    Forwarding(Arc<ForwardingFn>),
}

impl RequestHandler {
    pub fn terminating<F>(handler: F) -> Self
    where
        F: Fn(Operation) -> LinkResult + Send + Sync + 'static,
    {
        Self::Terminating(Arc::new(handler))
    }

    pub fn forwarding<F>(handler: F) -> Self
    where
        F: Fn(Operation, Option<NextLink>) -> LinkResult + Send + Sync + 'static,
    {
        Self::Forwarding(Arc::new(handler))
    }

    pub fn kind(&self) -> LinkKind {
        match self {
            Self::Terminating(_) => LinkKind::Terminating,
            Self::Forwarding(_) => LinkKind::Forwarding,
        }
    }

    /// Invoke the handler. A terminating handler never sees `forward`.
    pub fn call(&self, operation: Operation, forward: Option<NextLink>) -> LinkResult {
        match self {
            Self::Terminating(f) => f(operation),
            Self::Forwarding(f) => f(operation, forward),
        }
    }
}

impl std::fmt::Debug for RequestHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RequestHandler").field(&self.kind()).finish()
    }
}
