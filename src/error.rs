use thiserror::Error;

/// Failure raised by the keying operations.
///
/// Every failure is a caller bug detected before any work is done, so there is
/// a single kind. `op` names the operation, `reason` says what was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("{op}: {reason}")]
    InvalidArgument {
        op: &'static str,
        reason: &'static str,
    },
}

impl KeyError {
    pub(crate) const fn invalid(op: &'static str, reason: &'static str) -> Self {
        KeyError::InvalidArgument { op, reason }
    }

    /// Name of the operation that rejected its input.
    pub fn op(&self) -> &'static str {
        match self {
            KeyError::InvalidArgument { op, .. } => op,
        }
    }
}

pub type Result<T> = std::result::Result<T, KeyError>;
