use std::fmt;

/// Returned when an operation is called while its precondition does not hold:
/// reading or removing from an empty list, using an out-of-bounds index, or
/// advancing an unset cursor.
///
/// There is only one kind of failure. The operation name is carried for the
/// message and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreconditionViolation {
    operation: &'static str,
}

impl PreconditionViolation {
    pub(crate) fn new(operation: &'static str) -> Self {
        log::debug!("precondition violated in `{}`", operation);
        Self { operation }
    }

    /// The name of the operation that rejected the call.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl fmt::Display for PreconditionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list precondition violated in `{}`", self.operation)
    }
}

impl std::error::Error for PreconditionViolation {}

pub type Result<T, E = PreconditionViolation> = std::result::Result<T, E>;
