// Two-step confirmation gate for dropping a collection
// Nothing is dropped unless a request was made first


/// Drop confirmation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropConfirmation {
    #[default]
    Idle,
    PendingConfirmation,
}

impl DropConfirmation {
    #[inline]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::PendingConfirmation)
    }

    /// Show the warning. Requesting again while pending changes nothing.
    #[inline]
    pub fn request(&mut self) {
        *self = Self::PendingConfirmation;
    }

    /// Dismiss the warning. Returns whether anything was pending.
    #[inline]
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        *self = Self::Idle;
        was_pending
    }

    /// Leave the pending state for a confirm. Returns `false` when idle,
    /// in which case the caller must not perform the drop.
    #[inline]
    pub fn take_pending(&mut self) -> bool {
        self.cancel()
    }
}
