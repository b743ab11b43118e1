//! The `ApolloLink` value and the `LinkLike` composition input.

use std::sync::Arc;

use super::compose;
use super::handler::{LinkKind, LinkResult, NextLink, RequestHandler};
use crate::error::LinkError;
use crate::types::Operation;

/// A single unit of request-handling logic.
///
/// Links are cheap to clone (the handler is reference counted) and compose
/// structurally through [`concat`](ApolloLink::concat), [`split`](ApolloLink::split)
/// and [`fold`](ApolloLink::fold) without either side knowing the other's
/// internals.
///
/// # Example
///
/// ```rust,ignore
/// use apollo_link::prelude::*;
///
/// let auth = ApolloLink::new(|op, forward| {
///     op.context().insert("token", "secret");
///     forward.map(|f| f(op)).transpose()
/// });
/// let http = ApolloLink::terminating(|_op| Ok(Some(of([FetchResult::default()]))));
/// let chain = auth.concat(&http);
/// ```
#[derive(Clone, Default)]
pub struct ApolloLink {
    name: Option<Arc<str>>,
    handler: Option<RequestHandler>,
}

impl ApolloLink {
    /// A forwarding link: `handler` receives the operation and, when the link
    /// is not last in the chain, a forwarding function.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(Operation, Option<NextLink>) -> LinkResult + Send + Sync + 'static,
    {
        Self::from_handler(RequestHandler::forwarding(handler))
    }

    /// A terminating link: `handler` only ever receives the operation.
    pub fn terminating<F>(handler: F) -> Self
    where
        F: Fn(Operation) -> LinkResult + Send + Sync + 'static,
    {
        Self::from_handler(RequestHandler::terminating(handler))
    }

    pub fn from_handler(handler: RequestHandler) -> Self {
        Self {
            name: None,
            handler: Some(handler),
        }
    }

    /// A link with no behavior; `request` fails with `LinkError::Unimplemented`.
    pub fn unimplemented() -> Self {
        Self::default()
    }

    /// Attach a diagnostic name, used in warnings and logs.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Arc::from(name.into()));
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn display_name(&self) -> &str {
        self.name().unwrap_or("anonymous link")
    }

    pub fn handler(&self) -> Option<&RequestHandler> {
        self.handler.as_ref()
    }

    /// A link without a handler counts as forwarding.
    pub fn kind(&self) -> LinkKind {
        self.handler
            .as_ref()
            .map_or(LinkKind::Forwarding, RequestHandler::kind)
    }

    pub fn is_terminating(&self) -> bool {
        self.kind() == LinkKind::Terminating
    }

    /// Run this link for `operation`.
    ///
    /// `forward` is ignored by terminating links. Returns `Ok(None)` when the
    /// handler produced no stream.
    pub fn request(&self, operation: Operation, forward: Option<NextLink>) -> LinkResult {
        match &self.handler {
            Some(handler) => handler.call(operation, forward),
            None => Err(LinkError::Unimplemented),
        }
    }

    /// Chain `next` after this link.
    pub fn concat(&self, next: impl Into<LinkLike>) -> ApolloLink {
        compose::concat(self, next)
    }

    /// Run through this link, then branch on `test`.
    pub fn split<T>(
        &self,
        test: T,
        left: impl Into<LinkLike>,
        right: impl Into<LinkLike>,
    ) -> ApolloLink
    where
        T: Fn(&Operation) -> bool + Send + Sync + 'static,
    {
        self.concat(compose::split(test, left, right))
    }

    /// Run through this link, then route to `left` when `test` holds and
    /// forward unchanged otherwise.
    pub fn split_or_forward<T>(&self, test: T, left: impl Into<LinkLike>) -> ApolloLink
    where
        T: Fn(&Operation) -> bool + Send + Sync + 'static,
    {
        self.concat(compose::split_or_forward(test, left))
    }

    /// See [`compose::empty`].
    pub fn empty() -> ApolloLink {
        compose::empty()
    }

    /// See [`compose::fold`].
    pub fn fold<I, L>(links: I) -> ApolloLink
    where
        I: IntoIterator<Item = L>,
        L: Into<LinkLike>,
    {
        compose::fold(links)
    }

    /// Alias of [`ApolloLink::fold`].
    pub fn from_links<I, L>(links: I) -> ApolloLink
    where
        I: IntoIterator<Item = L>,
        L: Into<LinkLike>,
    {
        compose::fold(links)
    }

    /// Static form of [`compose::split`].
    pub fn branch<T>(test: T, left: impl Into<LinkLike>, right: impl Into<LinkLike>) -> ApolloLink
    where
        T: Fn(&Operation) -> bool + Send + Sync + 'static,
    {
        compose::split(test, left, right)
    }
}

impl std::fmt::Debug for ApolloLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApolloLink")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("implemented", &self.handler.is_some())
            .finish()
    }
}

/// Input accepted at every composition boundary: an existing link or a bare
/// handler that still needs wrapping.
#[derive(Clone, Debug)]
pub enum LinkLike {
    Link(ApolloLink),
    Handler(RequestHandler),
}

impl LinkLike {
    /// Wrap a bare forwarding handler.
    pub fn handler<F>(handler: F) -> Self
    where
        F: Fn(Operation, Option<NextLink>) -> LinkResult + Send + Sync + 'static,
    {
        Self::Handler(RequestHandler::forwarding(handler))
    }

    /// Normalize into a link.
    pub fn into_link(self) -> ApolloLink {
        match self {
            Self::Link(link) => link,
            Self::Handler(handler) => ApolloLink::from_handler(handler),
        }
    }
}

impl From<ApolloLink> for LinkLike {
    fn from(link: ApolloLink) -> Self {
        Self::Link(link)
    }
}

impl From<&ApolloLink> for LinkLike {
    fn from(link: &ApolloLink) -> Self {
        Self::Link(link.clone())
    }
}

impl From<RequestHandler> for LinkLike {
    fn from(handler: RequestHandler) -> Self {
        Self::Handler(handler)
    }
}
