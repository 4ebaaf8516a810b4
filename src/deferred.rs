//! Apply-after-next-frame primitive.
//!
//! A [`Deferred`] holds the value currently on screen plus at most one
//! scheduled replacement. The replacement becomes current only when the
//! render loop reports that a frame has been drawn, so the frame that shows a
//! new label or colour still shows the previous value. This is independent
//! of any animation engine or timer.

/// A value whose updates land one rendered frame late.
#[derive(Debug, Clone, PartialEq)]
pub struct Deferred<T> {
    current: T,
    pending: Option<T>,
}

impl<T> Deferred<T> {
    /// Creates a deferred value showing `initial` with nothing scheduled.
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            pending: None,
        }
    }

    /// The value to draw this frame.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Schedules `next` for after the next rendered frame.
    ///
    /// A later call before that frame replaces the earlier one.
    pub fn schedule(&mut self, next: T) {
        self.pending = Some(next);
    }

    /// Whether a value is waiting for the next frame.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Promotes the scheduled value, if any.
    ///
    /// # Returns
    /// `true` if the visible value changed.
    pub fn on_frame_rendered(&mut self) -> bool {
        match self.pending.take() {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }
}

impl<T: Default> Default for Deferred<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
