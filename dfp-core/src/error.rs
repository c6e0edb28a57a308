use std::fmt;

/// Ways a price fetch can fail. All of them collapse into the same
/// "no data" outcome at the `fetch_prices` boundary.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FetchError {
    /// Upstream answered with a non-2xx status.
    Status(u16),
    /// Body had no price list where one was expected.
    MissingData,
    /// Price list was present but did not deserialize.
    Malformed(String),
    /// Request could not be sent or the body could not be read.
    Transport(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "Bad response status: {}", code),
            FetchError::MissingData => write!(f, "Response contained no price data"),
            FetchError::Malformed(msg) => write!(f, "Malformed price data: {}", msg),
            FetchError::Transport(msg) => write!(f, "Request failed: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
