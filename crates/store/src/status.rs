//! Request-lifecycle flags shared by every resource slice.

/// Outcome flags for the most recent operation on a slice.
///
/// A slice holds at most one semantic error message at a time; fetches
/// clear stale flags when they begin so a success or error banner never
/// lingers across a navigation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpStatus {
    pub is_loading: bool,
    pub is_success: bool,
    pub is_error: bool,
    pub message: String,
}

impl OpStatus {
    /// Pending: mark the operation in flight, leaving prior flags alone
    /// (used by mutations, matching the original behavior).
    pub fn begin(&mut self) {
        self.is_loading = true;
    }

    /// Pending for list/detail fetches: mark in flight *and* clear prior
    /// error/success state so stale messages do not linger.
    pub fn begin_fresh(&mut self) {
        self.is_loading = true;
        self.is_success = false;
        self.is_error = false;
        self.message.clear();
    }

    /// Fulfilled fetch: loading off; fetches never set the success flag.
    pub fn settle(&mut self) {
        self.is_loading = false;
    }

    /// Fulfilled mutation.
    pub fn succeed(&mut self) {
        self.is_loading = false;
        self.is_success = true;
        self.is_error = false;
    }

    /// Rejected: record the display message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.is_success = false;
        self.is_error = true;
        self.message = message.into();
    }

    /// Explicit reset: clear every flag without a network call.
    pub fn reset(&mut self) {
        *self = OpStatus::default();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_loading_only() {
        let mut status = OpStatus {
            is_error: true,
            message: "old".into(),
            ..Default::default()
        };
        status.begin();
        assert!(status.is_loading);
        // Mutations keep prior flags until they settle.
        assert!(status.is_error);
        assert_eq!(status.message, "old");
    }

    #[test]
    fn begin_fresh_clears_stale_flags() {
        let mut status = OpStatus {
            is_success: true,
            is_error: true,
            message: "stale".into(),
            ..Default::default()
        };
        status.begin_fresh();
        assert!(status.is_loading);
        assert!(!status.is_success);
        assert!(!status.is_error);
        assert!(status.message.is_empty());
    }

    #[test]
    fn loading_clears_on_both_settle_paths() {
        let mut status = OpStatus::default();
        status.begin();
        status.succeed();
        assert!(!status.is_loading);
        assert!(status.is_success);

        status.begin();
        status.fail("boom");
        assert!(!status.is_loading);
        assert!(status.is_error);
        assert!(!status.is_success);
        assert_eq!(status.message, "boom");
    }

    #[test]
    fn settle_does_not_set_success() {
        let mut status = OpStatus::default();
        status.begin_fresh();
        status.settle();
        assert!(!status.is_loading);
        assert!(!status.is_success);
    }

    #[test]
    fn reset_returns_to_default() {
        let mut status = OpStatus::default();
        status.begin();
        status.fail("boom");
        status.reset();
        assert_eq!(status, OpStatus::default());
    }
}
