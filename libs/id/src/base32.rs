//! Lowercase Base32 codec.
//!
//! Bytes are read as a big-endian bit stream and repacked into 5-bit groups,
//! each mapped onto the alphabet `abcdefghijklmnopqrstuvwxyz234567`. Output is
//! unpadded unless [`Padding::Pad`] is requested.
//!
//! Decoding is lenient about presentation: surrounding whitespace, `-` group
//! separators, trailing `=` padding and uppercase symbols are all accepted.
//! Trailing bits that do not fill a whole byte are dropped, which is what lets
//! any byte length round-trip without a length header.
//!
//! ```
//! use prefix_id::base32;
//!
//! let encoded = base32::encode(b"foobar").unwrap();
//! assert_eq!(encoded, "mzxw6ytboi");
//! assert_eq!(base32::decode("MZXW-6YTB-OI").unwrap(), b"foobar");
//! ```

use crate::error::Base32Error;

/// The 32 symbols, indexed by their 5-bit value.
pub const ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

/// Bits carried by one symbol.
pub const BITS_PER_SYMBOL: u32 = ALPHABET.len().trailing_zeros();

/// Padding character used by [`Padding::Pad`].
pub const PAD: char = '=';

/// Cosmetic group separator, ignored on decode.
pub const SEPARATOR: char = '-';

/// Inputs of this many bytes or more are rejected by the encoder.
pub const MAX_INPUT_LEN: usize = 1 << 28;

const MASK: u32 = (1 << BITS_PER_SYMBOL) - 1;

const INVALID: u8 = u8::MAX;

const _: () = assert!(ALPHABET.len().is_power_of_two());

/// Symbol value for every byte, `INVALID` where the byte is not a symbol.
const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Whether encoded output is padded to a multiple of eight symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Padding {
    /// No padding.
    #[default]
    Omit,
    /// Append `=` until the length is a multiple of 8.
    Pad,
}

/// Number of symbols produced for `len` input bytes, without padding.
#[must_use]
pub const fn encoded_len(len: usize) -> usize {
    (len * 8).div_ceil(BITS_PER_SYMBOL as usize)
}

/// Encodes bytes without padding.
pub fn encode(data: &[u8]) -> Result<String, Base32Error> {
    encode_with(data, Padding::Omit)
}

/// Encodes bytes with the requested padding.
///
/// Fails with [`Base32Error::InputTooLong`] if `data` is [`MAX_INPUT_LEN`]
/// bytes or longer.
pub fn encode_with(data: &[u8], padding: Padding) -> Result<String, Base32Error> {
    check_input_len(data.len())?;

    let mut out = String::with_capacity(encoded_len(data.len()).next_multiple_of(8));
    push_encoded(&mut out, data, padding);
    Ok(out)
}

fn check_input_len(len: usize) -> Result<(), Base32Error> {
    if len >= MAX_INPUT_LEN {
        return Err(Base32Error::InputTooLong {
            len,
            max: MAX_INPUT_LEN,
        });
    }
    Ok(())
}

/// Appends the encoding of `data` to `out`.
///
/// Callers are responsible for the length precondition.
pub(crate) fn push_encoded(out: &mut String, data: &[u8], padding: Padding) {
    let start = out.len();
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= BITS_PER_SYMBOL {
            bits -= BITS_PER_SYMBOL;
            out.push(symbol(buffer >> bits));
        }
        // Drop consumed bits so the register never exceeds 12 bits.
        buffer &= (1 << bits) - 1;
    }

    // Runt group: left-align the remaining bits and zero-fill.
    if bits > 0 {
        out.push(symbol(buffer << (BITS_PER_SYMBOL - bits)));
    }

    if padding == Padding::Pad {
        while (out.len() - start) % 8 != 0 {
            out.push(PAD);
        }
    }
}

fn symbol(value: u32) -> char {
    char::from(ALPHABET[(value & MASK) as usize])
}

fn symbol_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_TABLE[c.to_ascii_lowercase() as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Decodes a Base32 string.
///
/// Surrounding whitespace, `-` separators and trailing `=` are removed and
/// the rest is matched case-insensitively. Fails on the first character that
/// is not in the alphabet.
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base32Error> {
    let stripped: String = encoded
        .trim()
        .chars()
        .filter(|&c| c != SEPARATOR)
        .collect();
    let symbols = stripped.trim_end_matches(PAD);

    let mut out = Vec::with_capacity(symbols.len() * BITS_PER_SYMBOL as usize / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for c in symbols.chars() {
        let value = symbol_value(c).ok_or(Base32Error::IllegalCharacter(c))?;
        buffer = (buffer << BITS_PER_SYMBOL) | u32::from(value);
        bits += BITS_PER_SYMBOL;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"", "")]
    #[case(b"f", "my")]
    #[case(b"fo", "mzxq")]
    #[case(b"foo", "mzxw6")]
    #[case(b"foob", "mzxw6yq")]
    #[case(b"fooba", "mzxw6ytb")]
    #[case(b"foobar", "mzxw6ytboi")]
    fn test_encode_known_vectors(#[case] input: &[u8], #[case] expected: &str) {
        assert_eq!(encode(input).unwrap(), expected);
        assert_eq!(decode(expected).unwrap(), input);
    }

    #[rstest]
    #[case(b"f", "my======")]
    #[case(b"fo", "mzxq====")]
    #[case(b"foo", "mzxw6===")]
    #[case(b"foob", "mzxw6yq=")]
    #[case(b"fooba", "mzxw6ytb")]
    #[case(b"foobar", "mzxw6ytboi======")]
    fn test_encode_padded(#[case] input: &[u8], #[case] expected: &str) {
        assert_eq!(encode_with(input, Padding::Pad).unwrap(), expected);
        assert_eq!(decode(expected).unwrap(), input);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(&[]).unwrap(), "");
        assert_eq!(encode_with(&[], Padding::Pad).unwrap(), "");
        assert!(decode("").unwrap().is_empty());
        assert!(decode("   ").unwrap().is_empty());
        assert!(decode("====").unwrap().is_empty());
    }

    #[test]
    fn test_runt_group_is_zero_filled() {
        // 0xff -> 11111 111(00)
        assert_eq!(encode(&[0xff]).unwrap(), "74");
        assert_eq!(encode(&[0u8; 16]).unwrap(), "a".repeat(26));
        assert_eq!(encode(&[0xffu8; 16]).unwrap(), format!("{}4", "7".repeat(25)));
    }

    #[test]
    fn test_trailing_bits_discarded() {
        // a lone symbol carries 5 bits, not enough for a byte
        assert!(decode("a").unwrap().is_empty());
        // "75" and "74" differ only in the discarded bits
        assert_eq!(decode("75").unwrap(), decode("74").unwrap());
    }

    #[test]
    fn test_decode_presentation_is_ignored() {
        assert_eq!(decode("  MZXW6YTBOI\n").unwrap(), b"foobar");
        assert_eq!(decode("mzxw-6ytb-oi").unwrap(), b"foobar");
        assert_eq!(decode("mzxw6ytboi======").unwrap(), b"foobar");
    }

    #[rstest]
    #[case("mzx!", '!')]
    #[case("0aaa", '0')]
    #[case("aa1a", '1')]
    #[case("aa8a", '8')]
    #[case("a=aa", '=')]
    #[case("aaé", 'é')]
    #[case("aa a", ' ')]
    fn test_decode_rejects_illegal_characters(#[case] input: &str, #[case] bad: char) {
        assert_eq!(decode(input), Err(Base32Error::IllegalCharacter(bad)));
    }

    #[test]
    fn test_length_guard() {
        assert!(check_input_len(MAX_INPUT_LEN - 1).is_ok());
        assert_eq!(
            check_input_len(MAX_INPUT_LEN),
            Err(Base32Error::InputTooLong {
                len: MAX_INPUT_LEN,
                max: MAX_INPUT_LEN,
            })
        );
    }

    #[test]
    fn test_alphabet_is_distinct() {
        let unique: std::collections::HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 32);
        assert_eq!(BITS_PER_SYMBOL, 5);
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(symbol_value(char::from(c)), Some(i as u8));
        }
    }

    proptest! {
        #[test]
        fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..64)) {
            let encoded = encode(&data).unwrap();
            prop_assert_eq!(encoded.len(), encoded_len(data.len()));
            prop_assert_eq!(decode(&encoded).unwrap(), data);
        }

        #[test]
        fn prop_padded_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..64)) {
            let padded = encode_with(&data, Padding::Pad).unwrap();
            prop_assert_eq!(padded.len() % 8, 0);
            prop_assert_eq!(padded.trim_end_matches(PAD), encode(&data).unwrap());
            prop_assert_eq!(decode(&padded).unwrap(), data);
        }

        #[test]
        fn prop_decode_case_insensitive(data in proptest::collection::vec(any::<u8>(), 0..64)) {
            let encoded = encode(&data).unwrap();
            prop_assert_eq!(decode(&encoded.to_uppercase()).unwrap(), decode(&encoded).unwrap());
        }
    }
}
