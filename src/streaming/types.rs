//! Core Streaming Types
//!
//! Defines the stream type every link returns.

use futures::Stream;
use std::pin::Pin;

use crate::error::LinkError;
use crate::types::FetchResult;

/// Result Stream - the lazy, cancellable output of a link
///
/// This is a pinned, boxed stream of `FetchResult` items. Completion is the
/// end of the stream; an `Err` item is the error event and is always the last
/// item. Dropping the stream cancels whatever work it was driving.
pub type ResultStream = Pin<Box<dyn Stream<Item = Result<FetchResult, LinkError>> + Send>>;

/// Result stream with first-class cancellation handle
///
/// # Example
/// ```rust,ignore
/// let handle = executor.execute_with_cancel(&request)?;
///
/// // Use the stream
/// // ...
///
/// // Cancel if needed
/// handle.cancel.cancel();
/// ```
pub struct ResultStreamHandle {
    /// The underlying result stream
    pub stream: ResultStream,
    /// Handle to cancel the stream
    pub cancel: crate::utils::cancel::CancelHandle,
}

impl std::fmt::Debug for ResultStreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultStreamHandle")
            .field("stream", &"<ResultStream>")
            .field("cancel", &self.cancel)
            .finish()
    }
}
