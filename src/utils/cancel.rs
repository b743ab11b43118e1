//! Cancel handles for result streams.
//!
//! A cancelled stream ends at its next poll and drops the stream it wraps,
//! which tears down every link that stream was driving.

use tokio_util::sync::CancellationToken;

/// Shared switch that ends every stream built with it.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Flip the switch. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once [`cancel`](Self::cancel) has been called.
    pub fn cancelled(&self) -> tokio_util::sync::WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}

/// Wrap `stream` so it ends as soon as the returned handle is cancelled,
/// even while a `next()` is pending.
pub fn make_cancellable_stream(
    stream: crate::streaming::ResultStream,
) -> (crate::streaming::ResultStream, CancelHandle) {
    let handle = CancelHandle::new();
    let token = handle.token.clone();
    let mut inner = stream;
    let s = async_stream::stream! {
        use futures::StreamExt;
        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                item = inner.next() => {
                    let Some(item) = item else { break };
                    yield item;
                }
            }
        }
    };
    (Box::pin(s), handle)
}

/// A fresh handle not yet tied to any stream.
pub fn new_cancel_handle() -> CancelHandle {
    CancelHandle::new()
}
