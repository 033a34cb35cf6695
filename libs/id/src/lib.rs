//! # prefix-id
//!
//! Prefixed, type-tagged identifiers over a 128-bit payload.
//!
//! ## Design Principles
//!
//! - IDs are typed to prevent mixing different entity kinds
//! - All IDs have a canonical string representation with strict parsing
//! - Equality follows the decoded payload, not the text it was parsed from
//! - IDs are immutable values; the string form is computed once
//!
//! ## ID Format
//!
//! All IDs use a prefixed format: `{prefix}_{base32}`, where the payload is
//! 16 bytes rendered as 26 lowercase symbols from
//! `abcdefghijklmnopqrstuvwxyz234567`.
//!
//! Examples:
//! - `user_m7svaraqwfbg7eshxnua4x7aza`
//! - `org_agjpjil4hz5svhkbl2hty2zkca`
//!
//! This format provides:
//! - Type safety (prefix indicates entity kind)
//! - Uniqueness (random v4 UUID payload)
//! - Human readability (clear prefixes, no ambiguous symbols like `0`/`1`/`8`)

pub mod base32;
mod error;
mod kind;
mod macros;
mod prefix_id;

pub use error::{Base32Error, IdError};
pub use kind::{is_valid_prefix, IdKind};
pub use prefix_id::{PrefixId, ENCODED_PAYLOAD_LEN, PAYLOAD_LEN, SEPARATOR};

/// Re-export uuid for consumers that need raw payload operations
pub use uuid::Uuid;
