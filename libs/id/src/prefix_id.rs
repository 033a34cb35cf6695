//! The generic prefixed ID type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use tracing::debug;
use uuid::Uuid;

use crate::base32::{self, Padding};
use crate::error::IdError;
use crate::kind::{is_valid_prefix, IdKind};

/// Separator between the prefix and the encoded payload.
pub const SEPARATOR: char = '_';

/// Size of the payload in bytes.
pub const PAYLOAD_LEN: usize = 16;

/// Length of the encoded payload segment.
pub const ENCODED_PAYLOAD_LEN: usize = base32::encoded_len(PAYLOAD_LEN);

/// An ID of kind `K`: a 128-bit payload rendered as `{prefix}_{base32}`.
///
/// The string form is computed once and kept alongside the payload. IDs
/// obtained by parsing keep the exact input text, so an uppercase or
/// `-`-grouped input is displayed as given. Equality, hashing and ordering
/// only look at the kind and the payload.
///
/// ```
/// use prefix_id::{define_id, Uuid};
///
/// define_id!(UserId, UserKind, "user");
///
/// let id = UserId::from_uuid(Uuid::nil());
/// assert_eq!(id.as_str(), "user_aaaaaaaaaaaaaaaaaaaaaaaaaa");
///
/// let parsed: UserId = "user_AAAAAAAAAAAAAAAAAAAAAAAAAA".parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
pub struct PrefixId<K: IdKind> {
    uuid: Uuid,
    value: String,
    kind: PhantomData<fn() -> K>,
}

impl<K: IdKind> PrefixId<K> {
    const VALID_PREFIX: () = assert!(
        is_valid_prefix(K::PREFIX),
        "ID prefix must be non-empty and contain no whitespace or '_'"
    );

    /// Creates a new ID with a fresh random payload.
    #[must_use]
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Creates an ID from an explicit payload.
    ///
    /// The same payload always produces the same string.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        let mut value = String::with_capacity(K::PREFIX.len() + 1 + ENCODED_PAYLOAD_LEN);
        value.push_str(K::PREFIX);
        value.push(SEPARATOR);
        base32::push_encoded(&mut value, uuid.as_bytes(), Padding::Omit);
        Self::with_value(uuid, value)
    }

    /// Creates an ID from the raw payload bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; PAYLOAD_LEN]) -> Self {
        Self::from_uuid(Uuid::from_bytes(bytes))
    }

    fn with_value(uuid: Uuid, value: String) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_PREFIX;
        Self {
            uuid,
            value,
            kind: PhantomData,
        }
    }

    /// Parses an ID from a string.
    ///
    /// The string must be in the format `{prefix}_{base32}` with exactly one
    /// separator, this kind's prefix, and a payload decoding to 16 bytes.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let uuid = Self::decode(s)?;
        Ok(Self::with_value(uuid, s.to_owned()))
    }

    /// Parses an ID, returning `None` if the string is not a valid ID.
    #[must_use]
    pub fn try_parse(s: &str) -> Option<Self> {
        match Self::parse(s) {
            Ok(id) => Some(id),
            Err(e) => {
                debug!(prefix = K::PREFIX, input = s, error = %e, "rejected ID");
                None
            }
        }
    }

    fn decode(s: &str) -> Result<Uuid, IdError> {
        if s.trim().is_empty() {
            return Err(IdError::Empty);
        }

        let (prefix, encoded) = match s.split_once(SEPARATOR) {
            Some((prefix, encoded)) if !encoded.contains(SEPARATOR) => (prefix, encoded),
            Some(_) => {
                return Err(IdError::TooManySeparators {
                    found: s.matches(SEPARATOR).count(),
                })
            }
            None => return Err(IdError::MissingSeparator),
        };

        if prefix != K::PREFIX {
            return Err(IdError::InvalidPrefix {
                expected: K::PREFIX,
                actual: prefix.to_string(),
            });
        }

        let bytes = base32::decode(encoded)?;
        let Ok(payload) = <[u8; PAYLOAD_LEN]>::try_from(bytes.as_slice()) else {
            return Err(IdError::InvalidPayloadLength {
                expected: PAYLOAD_LEN,
                actual: bytes.len(),
            });
        };

        Ok(Uuid::from_bytes(payload))
    }

    /// Returns the string form of the ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the payload.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns the payload bytes.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; PAYLOAD_LEN] {
        *self.uuid.as_bytes()
    }

    /// Returns the prefix for this ID kind.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        K::PREFIX
    }

    /// Returns true if this ID's prefix is exactly `prefix`.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        K::PREFIX == prefix
    }
}

impl<K: IdKind> Default for PrefixId<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: IdKind> Clone for PrefixId<K> {
    fn clone(&self) -> Self {
        Self {
            uuid: self.uuid,
            value: self.value.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: IdKind> fmt::Debug for PrefixId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrefixId").field(&self.value).finish()
    }
}

impl<K: IdKind> fmt::Display for PrefixId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// The prefix is fixed by `K`, so the payload decides equality.
impl<K: IdKind> PartialEq for PrefixId<K> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl<K: IdKind> Eq for PrefixId<K> {}

impl<K: IdKind> Hash for PrefixId<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        K::PREFIX.hash(state);
        self.uuid.hash(state);
    }
}

impl<K: IdKind> PartialOrd for PrefixId<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: IdKind> Ord for PrefixId<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.uuid.cmp(&other.uuid)
    }
}

impl<K: IdKind> FromStr for PrefixId<K> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<K: IdKind> TryFrom<&str> for PrefixId<K> {
    type Error = IdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl<K: IdKind> TryFrom<String> for PrefixId<K> {
    type Error = IdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let uuid = Self::decode(&s)?;
        Ok(Self::with_value(uuid, s))
    }
}

impl<K: IdKind> From<PrefixId<K>> for String {
    fn from(id: PrefixId<K>) -> Self {
        id.value
    }
}

impl<K: IdKind> AsRef<str> for PrefixId<K> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<K: IdKind> serde::Serialize for PrefixId<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, K: IdKind> serde::Deserialize<'de> for PrefixId<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s).map_err(serde::de::Error::custom)
    }
}
