use std::str::from_utf8_unchecked;

use crate::Error;

// cspell:disable-next-line
pub const ALPHABET: [u8; 32] = *b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

const GROUP_MASK: u8 = 0x1F;

/// Ordinal of a Crockford Base32 symbol, or `None` for anything outside
/// the canonical uppercase alphabet (I, L, O and U included).
pub const fn index_of(symbol: u8) -> Option<u8> {
    match symbol {
        b'0'..=b'9' => Some(symbol - b'0'),
        b'A'..=b'H' => Some(symbol - b'A' + 10),
        b'J' | b'K' => Some(symbol - b'J' + 18),
        b'M' | b'N' => Some(symbol - b'M' + 20),
        b'P'..=b'T' => Some(symbol - b'P' + 22),
        b'V'..=b'Z' => Some(symbol - b'V' + 27),
        _ => None,
    }
}

/// Packs a 48-bit timestamp and an 80-bit payload into 26 Base32 characters.
///
/// The timestamp field comes first, so lexicographic order of the output
/// equals chronological order of the input. Callers must have range-checked
/// the timestamp already; the two high bits of the first group are zero for
/// any value below 2^48.
pub fn encode<'a>(timestamp: u64, random: &[u8; 10], buffer: &'a mut [u8; 26]) -> &'a str {
    for (i, slot) in buffer[..10].iter_mut().enumerate() {
        let shift = 45 - 5 * i;
        *slot = ALPHABET[usize::from((timestamp >> shift) as u8 & GROUP_MASK)];
    }

    for (i, slot) in buffer[10..].iter_mut().enumerate() {
        // The group covers bits [start, start + 5) of the big-endian payload.
        // With an offset above 3 it straddles into the following byte.
        let start = 5 * i;
        let byte = start / 8;
        let offset = start % 8;

        let group = if offset <= 3 {
            random[byte] >> (3 - offset)
        } else {
            (random[byte] << (offset - 3)) | (random[byte + 1] >> (11 - offset))
        };

        *slot = ALPHABET[usize::from(group & GROUP_MASK)];
    }

    // Safety: every byte written above is taken from ALPHABET, which is ASCII
    unsafe { from_utf8_unchecked(buffer) }
}

pub fn validate(ascii_bytes: &[u8; 26]) -> Result<(), Error> {
    if ascii_bytes.iter().all(|&c| index_of(c).is_some()) {
        Ok(())
    } else {
        Err(Error::InvalidFormat)
    }
}
