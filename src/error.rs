use std::fmt;

/// Errors returned by operations that take a position or a range count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The position does not name a live node of this list.
    InvalidPosition,
    /// A real node was required, but the position names the header or the trailer.
    Sentinel,
    /// The range asks for more nodes than the list holds in that direction.
    OutOfRange { requested: usize, available: usize },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ListError::InvalidPosition => f.write_str("invalid position"),
            ListError::Sentinel => f.write_str("position is a sentinel"),
            ListError::OutOfRange {
                requested,
                available,
            } => write!(
                f,
                "range of {} nodes exceeds the {} available",
                requested, available
            ),
        }
    }
}

impl std::error::Error for ListError {}

#[cfg(test)]
mod tests {
    use super::ListError;

    #[test]
    fn error_display() {
        assert_eq!(ListError::InvalidPosition.to_string(), "invalid position");
        assert_eq!(ListError::Sentinel.to_string(), "position is a sentinel");
        let err = ListError::OutOfRange {
            requested: 5,
            available: 3,
        };
        assert_eq!(err.to_string(), "range of 5 nodes exceeds the 3 available");
    }
}
