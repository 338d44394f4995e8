//! Cancellation utilities
//!
//! First-class cancellation handles for delta streams.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::streaming::DeltaStream;

/// A handle that can be used to request cancellation.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Request cancellation. The wrapped stream ends before its next fragment
    /// and drops the underlying reader, closing the HTTP connection.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Check if cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Make a DeltaStream cancellable and return its cancel handle.
pub fn make_cancellable_stream(stream: DeltaStream) -> (DeltaStream, CancelHandle) {
    let flag = Arc::new(AtomicBool::new(false));
    let handle = CancelHandle::new(flag.clone());
    let mut inner = stream;
    let s = async_stream::stream! {
        use futures_util::StreamExt;
        // Checked on both sides of the read so a cancel issued while waiting
        // still suppresses the fragment that arrives afterwards.
        while !flag.load(Ordering::SeqCst) {
            let item = match inner.next().await {
                Some(item) => item,
                None => break,
            };
            if flag.load(Ordering::SeqCst) {
                break;
            }
            yield item;
        }
    };
    (Box::pin(s), handle)
}
