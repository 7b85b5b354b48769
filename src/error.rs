pub use anyhow::{anyhow, Result};

use thiserror::Error as TError;

#[derive(Debug, PartialEq, Eq, TError)]
pub enum Error {
    #[error("UnexpectedKind: expected {expected}, got {actual}")]
    UnexpectedKind {
        expected: &'static str,
        actual: &'static str,
    },
}
