//! Stream constructors and consumers.

use std::future::Future;

use futures::{StreamExt, stream};

use super::types::ResultStream;
use crate::error::LinkError;
use crate::types::FetchResult;

/// An already-complete stream emitting `results` in order.
pub fn of<I>(results: I) -> ResultStream
where
    I: IntoIterator<Item = FetchResult>,
{
    let items: Vec<Result<FetchResult, LinkError>> = results.into_iter().map(Ok).collect();
    Box::pin(stream::iter(items))
}

/// A stream that completes immediately without emitting.
pub fn empty_stream() -> ResultStream {
    Box::pin(stream::empty())
}

/// A stream whose only event is `error`.
pub fn from_error(error: LinkError) -> ResultStream {
    Box::pin(stream::once(async move { Err(error) }))
}

/// A stream emitting the output of `future` once it resolves.
///
/// The future is not polled until the stream is, and is dropped with it.
pub fn from_future<F>(future: F) -> ResultStream
where
    F: Future<Output = Result<FetchResult, LinkError>> + Send + 'static,
{
    Box::pin(stream::once(future))
}

/// Resolve with the first emission of `stream`, dropping the rest.
///
/// Returns `Ok(None)` when the stream completes without emitting.
pub async fn first_result(mut stream: ResultStream) -> Result<Option<FetchResult>, LinkError> {
    stream.next().await.transpose()
}
