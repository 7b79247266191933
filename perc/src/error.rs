use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("site ({row}, {col}) is outside of the {size}x{size} grid")]
    OutOfRange { row: usize, col: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
