use alloc::format;
use core::fmt;

use crate::{Error, Result};

/// An element of a [`SortedSet`](crate::SortedSet): a lower-cased ASCII letter
/// or the null key.
///
/// The null key sorts before every letter; letters sort by character code.
///
/// # Examples
///
/// ```
/// use sorted_key_set::Key;
///
/// let a = Key::new('A')?;
/// assert_eq!(a.as_char(), Some('a'));
/// assert!(Key::NULL < a);
/// assert!(Key::new('1').is_err());
/// # Ok::<(), sorted_key_set::Error>(())
/// ```
#[derive(Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Key(Option<char>);

impl Key {
    /// The null key, which sorts before every letter.
    pub const NULL: Self = Self(None);

    /// Creates a key from an ASCII letter, folding it to lower case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `letter` is not ASCII alphabetic.
    pub fn new(letter: char) -> Result<Self> {
        if letter.is_ascii_alphabetic() {
            Ok(Self(Some(letter.to_ascii_lowercase())))
        } else {
            Err(Error::InvalidArgument(format!(
                "expected a single alphabetic character, got {letter:?}"
            )))
        }
    }

    /// Returns `true` if this is the null key.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0.is_none()
    }

    /// Returns the letter, or `None` for the null key.
    #[must_use]
    pub const fn as_char(self) -> Option<char> {
        self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(letter) => fmt::Debug::fmt(&letter, f),
            None => f.write_str("null"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(letter) => fmt::Display::fmt(&letter, f),
            None => f.write_str("null"),
        }
    }
}

impl TryFrom<char> for Key {
    type Error = Error;

    fn try_from(letter: char) -> Result<Self> {
        Self::new(letter)
    }
}

impl TryFrom<&str> for Key {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self> {
        raw.into_key()
    }
}

impl From<Key> for Option<char> {
    fn from(key: Key) -> Self {
        key.0
    }
}

/// Conversion of raw caller input into a validated [`Key`].
///
/// `None` becomes [`Key::NULL`]. Strings must hold exactly one ASCII letter.
pub trait IntoKey {
    /// Validates and normalizes `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `self` is neither null nor a
    /// single alphabetic character.
    fn into_key(self) -> Result<Key>;
}

impl IntoKey for Key {
    fn into_key(self) -> Result<Key> {
        Ok(self)
    }
}

impl IntoKey for &Key {
    fn into_key(self) -> Result<Key> {
        Ok(*self)
    }
}

impl IntoKey for char {
    fn into_key(self) -> Result<Key> {
        Key::new(self)
    }
}

impl IntoKey for Option<char> {
    fn into_key(self) -> Result<Key> {
        self.map_or(Ok(Key::NULL), Key::new)
    }
}

impl IntoKey for &str {
    fn into_key(self) -> Result<Key> {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Key::new(letter),
            _ => Err(Error::InvalidArgument(format!(
                "expected a single alphabetic character, got {self:?}"
            ))),
        }
    }
}

impl IntoKey for Option<&str> {
    fn into_key(self) -> Result<Key> {
        self.map_or(Ok(Key::NULL), IntoKey::into_key)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use static_assertions::assert_eq_size;

    // The null key rides the `char` niche.
    assert_eq_size!(Key, char);

    #[test]
    fn letters_fold_to_lower_case() {
        assert_eq!(Key::new('Q').unwrap(), Key::new('q').unwrap());
        assert_eq!(Key::new('Q').unwrap().as_char(), Some('q'));
    }

    #[test]
    fn null_sorts_first() {
        assert!(Key::NULL < Key::new('a').unwrap());
        assert!(Key::new('a').unwrap() < Key::new('B').unwrap());
        assert!(Key::NULL.is_null());
        assert_eq!(Key::default(), Key::NULL);
    }

    #[test]
    fn rejects_non_letters() {
        for bad in ['1', ' ', '`', 'é', '{'] {
            assert!(matches!(Key::new(bad), Err(Error::InvalidArgument(_))), "{bad:?}");
        }
    }

    #[test]
    fn strings_must_be_one_letter() {
        assert_eq!("J".into_key().unwrap(), Key::new('j').unwrap());
        assert!(matches!("".into_key(), Err(Error::InvalidArgument(_))));
        assert!(matches!("jk".into_key(), Err(Error::InvalidArgument(_))));
        assert!(matches!("7".into_key(), Err(Error::InvalidArgument(_))));
        assert_eq!(None::<&str>.into_key().unwrap(), Key::NULL);
        assert_eq!(Some("x").into_key().unwrap(), Key::new('x').unwrap());
        assert_eq!(None::<char>.into_key().unwrap(), Key::NULL);
        assert_eq!(Key::try_from("z").unwrap(), Key::new('z').unwrap());
    }

    #[test]
    fn formatting() {
        assert_eq!(Key::new('c').unwrap().to_string(), "c");
        assert_eq!(Key::NULL.to_string(), "null");
        assert_eq!(alloc::format!("{:?}", Key::new('c').unwrap()), "'c'");
        assert_eq!(alloc::format!("{:?}", Key::NULL), "null");
    }
}
