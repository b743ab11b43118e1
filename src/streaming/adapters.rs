//! Streaming adapter wrappers
//!
//! Helpers for links that observe or rewrite what comes back from the
//! stream they forwarded to. The wrapper owns the inner stream, so dropping
//! the outer stream tears the inner one down as well.

use futures::{Stream, StreamExt};

use super::types::ResultStream;
use crate::error::LinkError;
use crate::types::FetchResult;

pub trait ResultStreamExt:
    Stream<Item = Result<FetchResult, LinkError>> + Send + Sized + 'static
{
    /// Rewrite every successful emission. Errors pass through untouched.
    fn map_results<F>(self, mut f: F) -> ResultStream
    where
        F: FnMut(FetchResult) -> FetchResult + Send + 'static,
    {
        Box::pin(self.map(move |item| item.map(&mut f)))
    }

    /// Observe every successful emission without changing it.
    fn inspect_results<F>(self, mut f: F) -> ResultStream
    where
        F: FnMut(&FetchResult) + Send + 'static,
    {
        Box::pin(self.inspect(move |item| {
            if let Ok(result) = item {
                f(result);
            }
        }))
    }

    fn into_result_stream(self) -> ResultStream {
        Box::pin(self)
    }
}

impl<S> ResultStreamExt for S where
    S: Stream<Item = Result<FetchResult, LinkError>> + Send + Sized + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaming::{from_error, of};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn map_results_rewrites_data() {
        let out: Vec<_> = of([FetchResult::data(json!(1))])
            .map_results(|mut r| {
                r.data = Some(json!(2));
                r
            })
            .collect()
            .await;
        assert_eq!(out, vec![Ok(FetchResult::data(json!(2)))]);
    }

    #[tokio::test]
    async fn map_results_leaves_errors_alone() {
        let out: Vec<_> = from_error(LinkError::network("x"))
            .map_results(|_| FetchResult::default())
            .collect()
            .await;
        assert_eq!(out, vec![Err(LinkError::network("x"))]);
    }

    #[tokio::test]
    async fn inspect_results_sees_each_value() {
        let seen = Arc::new(Mutex::new(0));
        let counter = seen.clone();
        let _: Vec<_> = of([FetchResult::default(), FetchResult::default()])
            .inspect_results(move |_| *counter.lock().unwrap() += 1)
            .collect()
            .await;
        assert_eq!(*seen.lock().unwrap(), 2);
    }
}
