//! Afterware: rewrite results on their way back up the chain.

use std::sync::Arc;

use crate::link::ApolloLink;
use crate::streaming::{ResultStreamExt, empty_stream};
use crate::types::{FetchResult, Operation};

/// Forwarding link that applies `f` to every result returned by the rest of
/// the chain.
///
/// The returned stream owns the forwarded one, so dropping or cancelling it
/// tears down everything downstream.
pub fn afterware<F>(f: F) -> ApolloLink
where
    F: Fn(&Operation, FetchResult) -> FetchResult + Send + Sync + 'static,
{
    let f = Arc::new(f);
    ApolloLink::new(move |operation, forward| {
        let Some(forward) = forward else {
            return Ok(Some(empty_stream()));
        };
        let f = f.clone();
        let seen = operation.clone();
        let inner = forward(operation)?;
        Ok(Some(inner.map_results(move |result| f(&seen, result))))
    })
    .with_name("afterware")
}
