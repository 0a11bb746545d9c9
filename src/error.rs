use thiserror::Error;

/// Failure modes surfaced to callers.
///
/// `InvariantViolation` (a `make` precondition failing, i.e. a non-increasing
/// variable order) is deliberately not a variant here: it signals a bug in
/// the caller or the engine itself, not a recoverable condition, and is
/// raised with `debug_assert!`/`panic!` at the point of violation instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown expression tag: {0}")]
    UnknownTag(u8),

    #[error("invalid utf-8 symbol: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
