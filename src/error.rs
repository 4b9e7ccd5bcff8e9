//! Library error type
//!
//! Drawing itself never fails; only the sink's writer can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write drawing output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
