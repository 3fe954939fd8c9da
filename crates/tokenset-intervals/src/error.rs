/// Errors returned by [`IntervalSet`](crate::IntervalSet) mutators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntervalSetError {
    #[error("Cannot modify a read-only interval set")]
    ReadOnly,

    /// `isize::MAX` cannot be stored: its interval would need `stop = isize::MAX + 1`.
    #[error("Token type {0} has no representable exclusive stop")]
    Unrepresentable(isize),
}
