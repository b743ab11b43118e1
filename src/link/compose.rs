//! Link composition: `empty`, `passthrough`, `concat`, `split` and `fold`.
//!
//! Every function branches on the [`LinkKind`] of its inputs when the link is
//! built, never when a request runs. A handler that returns no stream is
//! always replaced by the empty stream.

use super::apollo_link::{ApolloLink, LinkLike};
use super::handler::{LinkKind, next_link};
use crate::error::LinkError;
use crate::streaming::{ResultStream, empty_stream};
use crate::types::Operation;

/// A terminating link that completes immediately without emitting.
pub fn empty() -> ApolloLink {
    ApolloLink::terminating(|_| Ok(Some(empty_stream()))).with_name("empty")
}

/// A forwarding link that hands the operation to the rest of the chain
/// unchanged, or emits nothing when it is last.
pub fn passthrough() -> ApolloLink {
    ApolloLink::new(|operation, forward| match forward {
        Some(forward) => forward(operation).map(Some),
        None => Ok(Some(empty_stream())),
    })
    .with_name("passthrough")
}

/// Outcome of a concatenation: the composed link and, when the call was a
/// no-op, the warning explaining why.
#[derive(Debug, Clone)]
pub struct Composed {
    pub link: ApolloLink,
    pub warning: Option<LinkError>,
}

/// Chain `second` after `first`: `second` becomes the forwarding target of
/// `first`.
///
/// Concatenating after a terminating link has no effect: `first` is
/// returned unchanged and a warning is logged.
pub fn concat(first: impl Into<LinkLike>, second: impl Into<LinkLike>) -> ApolloLink {
    let Composed { link, warning } = concat_with_diagnostic(first, second);
    if let Some(warning) = warning {
        tracing::warn!(target: "apollo_link::compose", link = %link.display_name(), "{warning}");
    }
    link
}

/// Like [`concat`], but rejects concatenation after a terminating link.
pub fn try_concat(
    first: impl Into<LinkLike>,
    second: impl Into<LinkLike>,
) -> Result<ApolloLink, LinkError> {
    let Composed { link, warning } = concat_with_diagnostic(first, second);
    match warning {
        Some(warning) => Err(warning),
        None => Ok(link),
    }
}

/// [`concat`] returning the warning instead of logging it.
///
/// The composed link takes the kind of `second`: when `second` terminates,
/// the whole chain does, and no outer forwarding function is needed.
pub fn concat_with_diagnostic(first: impl Into<LinkLike>, second: impl Into<LinkLike>) -> Composed {
    let first = first.into().into_link();
    if first.is_terminating() {
        return Composed {
            warning: Some(LinkError::terminating_concat(&first)),
            link: first,
        };
    }
    let next = second.into().into_link();

    let link = match next.kind() {
        LinkKind::Terminating => ApolloLink::terminating(move |operation| {
            let next = next.clone();
            let forward = next_link(move |op| Ok(or_empty(next.request(op, None)?)));
            Ok(Some(or_empty(first.request(operation, Some(forward))?)))
        }),
        LinkKind::Forwarding => ApolloLink::new(move |operation, forward| {
            let next = next.clone();
            let inner = next_link(move |op| Ok(or_empty(next.request(op, forward.clone())?)));
            Ok(Some(or_empty(first.request(operation, Some(inner))?)))
        }),
    };
    Composed {
        link,
        warning: None,
    }
}

/// Route each operation to `left` when `test` holds, otherwise to `right`.
///
/// `test` runs once per request and only the chosen side is invoked. The
/// result terminates when both sides do; otherwise the outer forwarding
/// function is handed to whichever side runs.
pub fn split<T>(test: T, left: impl Into<LinkLike>, right: impl Into<LinkLike>) -> ApolloLink
where
    T: Fn(&Operation) -> bool + Send + Sync + 'static,
{
    let left = left.into().into_link();
    let right = right.into().into_link();

    if left.is_terminating() && right.is_terminating() {
        ApolloLink::terminating(move |operation| {
            let chosen = if test(&operation) { &left } else { &right };
            Ok(Some(or_empty(chosen.request(operation, None)?)))
        })
    } else {
        ApolloLink::new(move |operation, forward| {
            let chosen = if test(&operation) { &left } else { &right };
            Ok(Some(or_empty(chosen.request(operation, forward)?)))
        })
    }
}

/// [`split`] whose right side is [`passthrough`].
pub fn split_or_forward<T>(test: T, left: impl Into<LinkLike>) -> ApolloLink
where
    T: Fn(&Operation) -> bool + Send + Sync + 'static,
{
    split(test, left, passthrough())
}

/// Concatenate `links` left to right. No links yields [`empty`]; a single
/// link is returned as is.
pub fn fold<I, L>(links: I) -> ApolloLink
where
    I: IntoIterator<Item = L>,
    L: Into<LinkLike>,
{
    let mut links = links.into_iter().map(|l| l.into().into_link());
    let Some(head) = links.next() else {
        return empty();
    };
    links.fold(head, |chain, next| concat(chain, next))
}

/// Alias of [`fold`].
pub fn from_links<I, L>(links: I) -> ApolloLink
where
    I: IntoIterator<Item = L>,
    L: Into<LinkLike>,
{
    fold(links)
}

fn or_empty(stream: Option<ResultStream>) -> ResultStream {
    stream.unwrap_or_else(empty_stream)
}
