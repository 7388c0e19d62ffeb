use alloc::string::String;

use thiserror::Error;

use crate::Key;

/// Errors reported by [`SortedSet`](crate::SortedSet) and [`Key`] parsing.
///
/// Every operation is pure, so a failure is reproducible on each identical call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operand has the wrong shape, e.g. a multi-character string where a
    /// single letter was expected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A positional index is outside `[0, len)`.
    #[error("index {index} out of range for set of size {len}")]
    OutOfRange { index: i64, len: usize },
    /// The operation needs at least one key.
    #[error("set is empty")]
    EmptySet,
    /// A key-based lookup could not locate the key.
    #[error("key {0} not found in set")]
    NotFound(Key),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages() {
        let key = Key::new('q').unwrap();
        assert_eq!(Error::NotFound(key).to_string(), "key q not found in set");
        assert_eq!(Error::NotFound(Key::NULL).to_string(), "key null not found in set");
        assert_eq!(Error::EmptySet.to_string(), "set is empty");
        assert_eq!(
            Error::OutOfRange { index: -1, len: 3 }.to_string(),
            "index -1 out of range for set of size 3"
        );
    }
}
