//! Entity kinds and their prefixes.

use crate::prefix_id::SEPARATOR;

/// An entity kind, identified by the prefix its IDs carry.
///
/// Implementors are usually uninhabited marker types declared through
/// [`define_id!`](crate::define_id).
///
/// The prefix is checked when the first `PrefixId<K>` constructor is
/// compiled: it must be non-empty and may contain neither whitespace nor the
/// `_` separator. A bad prefix is a build error, not a runtime one.
///
/// ```compile_fail
/// use prefix_id::{IdKind, PrefixId};
///
/// enum Blank {}
///
/// impl IdKind for Blank {
///     const PREFIX: &'static str = "  ";
/// }
///
/// let _ = PrefixId::<Blank>::new();
/// ```
pub trait IdKind: 'static {
    /// The prefix for this ID kind.
    const PREFIX: &'static str;
}

/// Returns true if `prefix` can be used as an ID prefix.
#[must_use]
pub const fn is_valid_prefix(prefix: &str) -> bool {
    let bytes = prefix.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() || bytes[i] == SEPARATOR as u8 {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user", true)]
    #[case("org", true)]
    #[case("x", true)]
    #[case("", false)]
    #[case(" ", false)]
    #[case("\t\n", false)]
    #[case("my user", false)]
    #[case("my_user", false)]
    #[case("_", false)]
    fn test_is_valid_prefix(#[case] prefix: &str, #[case] valid: bool) {
        assert_eq!(is_valid_prefix(prefix), valid);
    }
}
