//! Callback-style consumption of a result stream.
//!
//! `subscribe` drives a stream on the tokio runtime and reports to an
//! [`Observer`]. Exactly one terminal event (`error` or `complete`) is
//! delivered unless the subscription is cancelled first, in which case none is.

use futures::StreamExt;
use tokio::task::JoinHandle;

use super::types::ResultStream;
use crate::error::LinkError;
use crate::types::FetchResult;
use crate::utils::cancel::{CancelHandle, new_cancel_handle};

/// Receives the events of a subscribed stream.
pub trait Observer: Send + 'static {
    fn next(&mut self, result: FetchResult);

    fn error(&mut self, _error: LinkError) {}

    fn complete(&mut self) {}
}

/// Observer assembled from three closures.
pub struct FnObserver<N, E, C> {
    on_next: N,
    on_error: E,
    on_complete: C,
}

/// Build an [`Observer`] from `next`, `error` and `complete` callbacks.
pub fn observer<N, E, C>(on_next: N, on_error: E, on_complete: C) -> FnObserver<N, E, C>
where
    N: FnMut(FetchResult) + Send + 'static,
    E: FnMut(LinkError) + Send + 'static,
    C: FnMut() + Send + 'static,
{
    FnObserver {
        on_next,
        on_error,
        on_complete,
    }
}

impl<N, E, C> Observer for FnObserver<N, E, C>
where
    N: FnMut(FetchResult) + Send + 'static,
    E: FnMut(LinkError) + Send + 'static,
    C: FnMut() + Send + 'static,
{
    fn next(&mut self, result: FetchResult) {
        (self.on_next)(result)
    }

    fn error(&mut self, error: LinkError) {
        (self.on_error)(error)
    }

    fn complete(&mut self) {
        (self.on_complete)()
    }
}

/// Handle returned by [`subscribe`].
#[derive(Debug)]
pub struct Subscription {
    cancel: CancelHandle,
    task: JoinHandle<()>,
}

impl Subscription {
    /// Stop delivering events and drop the stream, cancelling all work it drives.
    pub fn unsubscribe(&self) {
        self.cancel.cancel();
    }

    /// True once unsubscribed or after a terminal event was delivered.
    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled() || self.task.is_finished()
    }

    /// Wait until the driving task has exited.
    pub async fn closed(self) {
        if let Err(e) = self.task.await {
            tracing::warn!(target: "apollo_link::subscription", err = %e, "subscription task failed");
        }
    }
}

/// Drive `stream` on the current tokio runtime, reporting to `observer`.
///
/// Must be called from within a tokio runtime.
pub fn subscribe<O: Observer>(stream: ResultStream, observer: O) -> Subscription {
    let cancel = new_cancel_handle();
    let token = cancel.clone();
    let task = tokio::spawn(async move {
        let mut stream = stream;
        let mut observer = observer;
        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::trace!(target: "apollo_link::subscription", "unsubscribed");
                    break;
                }
                item = stream.next() => match item {
                    Some(Ok(result)) => observer.next(result),
                    Some(Err(error)) => {
                        observer.error(error);
                        break;
                    }
                    None => {
                        observer.complete();
                        break;
                    }
                }
            }
        }
    });
    Subscription { cancel, task }
}
