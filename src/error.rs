use thiserror::Error;

/// Rejected construction parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    #[error("hash map capacity must be at least 1")]
    Zero,
}
