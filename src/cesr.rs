use crate::errors::{CesrError, Result};
use base64::{engine::general_purpose, Engine};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

pub mod bexter;
pub mod cigar;
pub mod counting;
pub mod dater;
pub mod decimer;
pub mod diger;
pub mod ilker;
pub mod indexing;
pub mod labeler;
pub mod matter;
pub mod noncer;
pub mod number;
pub mod pather;
pub mod prefixer;
pub mod seqner;
pub mod tagger;
pub mod texter;
pub mod traitor;
pub mod verser;

pub use matter::codex::{
    bex_dex, dec_dex, dig_dex, label_dex, large_vrz_dex, mtr_dex, non_dex, non_trans_dex,
    num_dex, pre_dex, pre_non_dig_dex, sig_dex, small_vrz_dex, tag_dex, tex_dex,
};

/// Prepad character used in the xtra part of special soft codes
pub const PAD: &str = "_";

/// Base64 URL safe alphabet ordered by sextet value
pub const B64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Versionage is a protocol version given by major and minor numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Versionage {
    pub major: u32,
    pub minor: u32,
}

pub const VRSN_1_0: Versionage = Versionage { major: 1, minor: 0 };
pub const VRSN_2_0: Versionage = Versionage { major: 2, minor: 0 };

/// Default CESR protocol version for counter code tables
pub const VERSION: Versionage = VRSN_2_0;

/// Parsable primitives can be extracted from the front of a stream buffer.
///
/// When `strip` is `Some(true)` the extracted bytes are removed from `data`
/// so the next primitive starts at offset zero.
pub trait Parsable: Sized {
    /// Extracts one primitive from qualified Base64 bytes
    fn parse_qb64b(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self>;

    /// Extracts one primitive from qualified Base2 bytes
    fn parse_qb2(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self>;
}

/// Returns the sextet value of Base64 character `c`
pub fn b64_char_to_index(c: char) -> Result<u8> {
    match c {
        'A'..='Z' => Ok(c as u8 - b'A'),
        'a'..='z' => Ok(c as u8 - b'a' + 26),
        '0'..='9' => Ok(c as u8 - b'0' + 52),
        '-' => Ok(62),
        '_' => Ok(63),
        _ => Err(CesrError::CharsetViolation(format!(
            "Invalid Base64 character={:?}.",
            c
        ))),
    }
}

/// Returns the Base64 character for sextet value `i`
pub fn b64_index_to_char(i: u8) -> Result<char> {
    B64_ALPHABET
        .get(i as usize)
        .map(|&c| c as char)
        .ok_or_else(|| CesrError::CharsetViolation(format!("Invalid Base64 index={}.", i)))
}

/// True when every character of `s` is in the Base64 URL safe alphabet
pub fn is_base64(s: &str) -> bool {
    s.chars().all(|c| b64_char_to_index(c).is_ok())
}

/// Views qualified Base64 bytes as text, rejecting any byte outside the alphabet
pub(crate) fn b64_text(bytes: &[u8]) -> Result<&str> {
    if let Some(&b) = bytes.iter().find(|&&b| !B64_ALPHABET.contains(&b)) {
        return Err(CesrError::CharsetViolation(format!(
            "Invalid Base64 byte={:#04x} in material.",
            b
        )));
    }
    std::str::from_utf8(bytes)
        .map_err(|_| CesrError::CharsetViolation(format!("Non UTF-8 material={:02x?}.", bytes)))
}

/// Converts Base64 text to its unsigned integer value
pub fn b64_to_int(s: &str) -> Result<BigUint> {
    let sextets = s
        .chars()
        .map(b64_char_to_index)
        .collect::<Result<Vec<u8>>>()?;

    BigUint::from_radix_be(&sextets, 64)
        .ok_or_else(|| CesrError::CharsetViolation(format!("Invalid Base64 text={}.", s)))
}

pub fn b64_to_u32(s: &str) -> Result<u32> {
    b64_to_int(s)?
        .to_u32()
        .ok_or_else(|| CesrError::SizeOverflow(format!("Base64 value={} exceeds u32.", s)))
}

pub fn b64_to_u64(s: &str) -> Result<u64> {
    b64_to_int(s)?
        .to_u64()
        .ok_or_else(|| CesrError::SizeOverflow(format!("Base64 value={} exceeds u64.", s)))
}

/// Converts `i` to Base64 text left padded with 'A' to at least `l` characters
pub fn int_to_b64(i: u64, l: usize) -> String {
    big_int_to_b64(&BigUint::from(i), l)
}

pub fn big_int_to_b64(i: &BigUint, l: usize) -> String {
    let digits = if i.is_zero() {
        Vec::new()
    } else {
        i.to_radix_be(64)
    };
    let mut text = String::with_capacity(l.max(digits.len()));
    for _ in digits.len()..l {
        text.push('A');
    }
    for d in digits {
        text.push(B64_ALPHABET[d as usize] as char);
    }
    text
}

/// Big endian bytes to unsigned integer
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Unsigned integer to big endian bytes left padded with zeros to `length`
pub fn int_to_bytes(value: &BigUint, length: usize) -> Vec<u8> {
    if value.is_zero() {
        return vec![0; length];
    }

    let bytes = value.to_bytes_be();
    debug_assert!(bytes.len() <= length, "integer wider than {} bytes", length);
    if bytes.len() >= length {
        return bytes;
    }

    let mut result = vec![0; length - bytes.len()];
    result.extend_from_slice(&bytes);
    result
}

/// Ceiling of integer division
pub fn sceil(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}

pub fn encode_b64(data: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(data)
}

pub fn decode_b64(data: &str) -> Result<Vec<u8>> {
    general_purpose::URL_SAFE_NO_PAD
        .decode(data)
        .map_err(|e| CesrError::CharsetViolation(format!("Invalid Base64 text: {}", e)))
}

/// Returns the first `n` sextets of `bin`, each right aligned in its own byte
pub fn nab_sextets(bin: &[u8], n: usize) -> Result<Vec<u8>> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let bn = sceil(n * 3, 4);
    if bin.len() < bn {
        return Err(CesrError::InsufficientMaterial(format!(
            "Need {} more bytes to extract {} sextets.",
            bn - bin.len(),
            n
        )));
    }

    let i = bytes_to_int(&bin[..bn]) >> (2 * (n % 4));
    let digits = i.to_radix_be(64);
    let mut sextets = vec![0u8; n.saturating_sub(digits.len())];
    sextets.extend(digits);
    Ok(sextets)
}

/// Converts the first `n` sextets of binary code `bin` to Base64 text
pub fn code_b2_to_b64(bin: &[u8], n: usize) -> Result<String> {
    nab_sextets(bin, n)?
        .into_iter()
        .map(b64_index_to_char)
        .collect()
}

/// Converts Base64 code text to binary, left aligned with zeroed trailing pad bits
pub fn code_b64_to_b2(s: &str) -> Result<Vec<u8>> {
    for c in s.chars() {
        b64_char_to_index(c)?;
    }
    Ok(pack_code(s))
}

/// Packs code text already known to be Base64 into left aligned binary
pub(crate) fn pack_code(s: &str) -> Vec<u8> {
    debug_assert!(is_base64(s), "code text {} is not Base64", s);
    let sextets: Vec<u8> = s.chars().filter_map(|c| b64_char_to_index(c).ok()).collect();
    let i = BigUint::from_radix_be(&sextets, 64).unwrap_or_default() << (2 * (s.len() % 4));
    int_to_bytes(&i, sceil(s.len() * 3, 4))
}
