//! Pointer-move subscription seam.
//!
//! Hosts only need to deliver pointer moves (and the terminating
//! pointer-up) while an interaction is live. The manager calls
//! [`PointerCapture::capture`] when a drag or resize starts and
//! [`PointerCapture::release`] on every way out of it: pointer-up,
//! capture loss, removal of the active panel, or the manager being
//! dropped. Implementations register and unregister document-level
//! listeners so a pointer-up outside the panel still arrives.

/// Host hook for subscribing to pointer moves during an interaction.
pub trait PointerCapture {
    fn capture(&mut self);
    fn release(&mut self);
}

/// A capture that does nothing. For hosts that always deliver moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCapture;

impl PointerCapture for NoopCapture {
    fn capture(&mut self) {}

    fn release(&mut self) {}
}

/// Counts subscribe/unsubscribe calls. Useful for checking that every
/// interaction is released exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingCapture {
    pub captures: usize,
    pub releases: usize,
}

impl RecordingCapture {
    pub fn is_captured(&self) -> bool {
        self.captures > self.releases
    }
}

impl PointerCapture for RecordingCapture {
    fn capture(&mut self) {
        self.captures += 1;
    }

    fn release(&mut self) {
        self.releases += 1;
    }
}

impl<T: PointerCapture + ?Sized> PointerCapture for &mut T {
    fn capture(&mut self) {
        (**self).capture();
    }

    fn release(&mut self) {
        (**self).release();
    }
}
