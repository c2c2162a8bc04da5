use core::fmt;
use std::error::Error;

/// An error validating the parameters of a racing call.
///
/// Every variant is reported synchronously, before any task or timer is
/// started. Task panics and deadline expiry are not errors: the former are
/// absorbed per task, the latter is a normal outcome reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceError {
    /// The task collection was empty.
    NoTasks,
    /// The requested number of results was zero.
    InvalidK,
    /// The task collection holds fewer tasks than the number of requested
    /// results.
    InsufficientTasks {
        /// How many results were requested.
        needed: usize,
        /// How many tasks the collection held at call time.
        available: usize,
    },
}

impl fmt::Display for RaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaceError::NoTasks => write!(f, "no tasks provided"),
            RaceError::InvalidK => write!(f, "k must be greater than zero"),
            RaceError::InsufficientTasks { needed, available } => {
                write!(f, "not enough tasks: need {needed}, have {available}")
            }
        }
    }
}

impl Error for RaceError {}
