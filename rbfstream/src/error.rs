use thiserror::Error;

/// Errors produced by this crate. Construction-time problems abort the
/// build of a generator; row sampling itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("column {column} does not support {requested} access")]
    InvalidColumnAccess {
        column: usize,
        requested: &'static str,
    },
}
