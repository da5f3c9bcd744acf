//! Per-frame scheduling with a single cancellable resumption token.

use std::cell::Cell;
use std::rc::Rc;

/// Opaque handle for one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// "Call me back on the next frame", e.g. `requestAnimationFrame`.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameToken;
    fn cancel_frame(&mut self, token: FrameToken);
}

type PendingSlot = Rc<Cell<Option<FrameToken>>>;

/// Owns at most one pending frame request for a mounted scene.
///
/// A frame callback is only honoured while its token is pending; after
/// [`FrameLoop::cancel`] late callbacks are rejected by [`FrameLoop::resume`].
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: PendingSlot,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Request the next frame unless one is already pending.
    pub fn schedule(&mut self) {
        if self.pending.get().is_none() {
            self.pending.set(Some(self.scheduler.request_frame()));
        }
    }

    /// Consume the pending token for a delivered frame. Returns false when the
    /// loop was cancelled and the frame must be ignored.
    pub fn resume(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
        }
    }

    /// A handle that cancels the pending frame without access to the loop,
    /// for owners that may find the loop's scene already borrowed.
    pub fn cancel_handle(&self) -> CancelHandle<S>
    where
        S: Clone,
    {
        CancelHandle {
            scheduler: self.scheduler.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Cancels whatever frame its [`FrameLoop`] has pending, once per request.
pub struct CancelHandle<S: FrameScheduler> {
    scheduler: S,
    pending: PendingSlot,
}

impl<S: FrameScheduler> CancelHandle<S> {
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
        }
    }
}
