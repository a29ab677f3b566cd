//! Status returned by behavior nodes.

/// The result of ticking a behavior node.
///
/// # Tick Semantics
///
/// Every tick runs to completion before returning. `Running` is a value, not
/// a blocking wait: a node that needs more than one tick reports `Running`
/// and the caller ticks the tree again later.
/// - Conditions evaluate immediately (e.g., "Is the door open?")
/// - Actions either finish within the tick or report `Running`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action executed without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be executed.
    Failure,

    /// The behavior has not finished yet and wants to be ticked again.
    ///
    /// Composite nodes remember which child reported `Running` and resume
    /// there on the next tick.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_completed(self) -> bool {
        !self.is_running()
    }
}

impl From<bool> for Status {
    /// Maps a condition result onto a status: `true` is `Success`.
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
