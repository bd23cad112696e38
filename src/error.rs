/// Errors returned by list and node operations.
///
/// Every fallible operation checks its preconditions before touching the
/// list, so an `Err` always means nothing was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A position was outside the list: `[0, len)` for access,
    /// `[0, len]` for insertion. For a range whose start is valid but which
    /// runs past the end, `index` is the range's exclusive end.
    IndexOutOfRange { index: usize, len: usize },

    /// The first or last node was requested from an empty list.
    EmptyList,

    /// A structural operation was attempted on a sentinel.
    SentinelViolation,

    /// Navigation tried to step past a sentinel.
    BoundaryViolation,

    /// The node has been unlinked (or the list cleared) since the handle was
    /// issued.
    NotLinked,

    /// The stop node of a range is not reachable forward from its start.
    InvalidRange,

    /// A sentinel holds no element.
    NoValue,
}

/// Shorthand for results carrying [`Error`](enum.Error.html).
pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for list of length {}", index, len)
            }
            Error::EmptyList => f.write_str("list is empty"),
            Error::SentinelViolation => f.write_str("operation not allowed on a sentinel"),
            Error::BoundaryViolation => f.write_str("cannot move past a sentinel"),
            Error::NotLinked => f.write_str("node is no longer linked"),
            Error::InvalidRange => f.write_str("stop node is not reachable from start node"),
            Error::NoValue => f.write_str("sentinel holds no value"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::IndexOutOfRange { index: 3, len: 2 }.to_string(),
            "index 3 out of range for list of length 2"
        );
        assert_eq!(Error::NotLinked.to_string(), "node is no longer linked");
    }

    #[test]
    fn is_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(Error::EmptyList);

        assert_eq!(boxed.to_string(), "list is empty");
    }
}
