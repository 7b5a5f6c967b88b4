pub mod siger;

use crate::cesr::{
    b64_text, b64_to_u32, code_b2_to_b64, decode_b64, encode_b64, int_to_b64, nab_sextets,
    pack_code, sceil, Parsable,
};
use crate::errors::{CesrError, Result};
use tracing::trace;

/// IndexerCodex is codex hard (stable) part of all indexer derivation codes.
///
/// Codes indicate which list of keys, current and/or prior next, index is for:
///
/// * `_SIG`: indices may appear in both current signing and prior next key
///   lists. Codes with no other index size carry a single index for both.
/// * `_CRT_SIG`: index is for the current signing key list only.
/// * `_BIG_`: big index values.
#[allow(dead_code)]
pub mod idr_dex {
    pub const ED25519_SIG: &str = "A"; // Ed25519 sig appears same in both lists if any.
    pub const ED25519_CRT_SIG: &str = "B"; // Ed25519 sig appears in current list only.
    pub const ECDSA_256K1_SIG: &str = "C"; // ECDSA secp256k1 sig appears same in both lists if any.
    pub const ECDSA_256K1_CRT_SIG: &str = "D"; // ECDSA secp256k1 sig appears in current list.
    pub const ECDSA_256R1_SIG: &str = "E"; // ECDSA secp256r1 sig appears same in both lists if any.
    pub const ECDSA_256R1_CRT_SIG: &str = "F"; // ECDSA secp256r1 sig appears in current list.
    pub const ED448_SIG: &str = "0A"; // Ed448 signature appears in both lists.
    pub const ED448_CRT_SIG: &str = "0B"; // Ed448 signature appears in current list only.
    pub const ED25519_BIG_SIG: &str = "2A"; // Ed25519 sig appears in both lists.
    pub const ED25519_BIG_CRT_SIG: &str = "2B"; // Ed25519 sig appears in current list only.
    pub const ECDSA_256K1_BIG_SIG: &str = "2C"; // ECDSA secp256k1 sig appears in both lists.
    pub const ECDSA_256K1_BIG_CRT_SIG: &str = "2D"; // ECDSA secp256k1 sig appears in current list only.
    pub const ECDSA_256R1_BIG_SIG: &str = "2E"; // ECDSA secp256r1 sig appears in both lists.
    pub const ECDSA_256R1_BIG_CRT_SIG: &str = "2F"; // ECDSA secp256r1 sig appears in current list only.
    pub const ED448_BIG_SIG: &str = "3A"; // Ed448 signature appears in both lists.
    pub const ED448_BIG_CRT_SIG: &str = "3B"; // Ed448 signature appears in current list only.
    pub const TBD0: &str = "0z"; // Test of Var len label L=N*4 <= 4095 char quadlets includes code
    pub const TBD1: &str = "1z"; // Test of index sig lead 1
    pub const TBD4: &str = "4z"; // Test of index sig lead 1 big

    pub static TUPLE: [&str; 19] = [
        ED25519_SIG,
        ED25519_CRT_SIG,
        ECDSA_256K1_SIG,
        ECDSA_256K1_CRT_SIG,
        ECDSA_256R1_SIG,
        ECDSA_256R1_CRT_SIG,
        ED448_SIG,
        ED448_CRT_SIG,
        ED25519_BIG_SIG,
        ED25519_BIG_CRT_SIG,
        ECDSA_256K1_BIG_SIG,
        ECDSA_256K1_BIG_CRT_SIG,
        ECDSA_256R1_BIG_SIG,
        ECDSA_256R1_BIG_CRT_SIG,
        ED448_BIG_SIG,
        ED448_BIG_CRT_SIG,
        TBD0,
        TBD1,
        TBD4,
    ];
}

/// IndexedSigCodex is codex all indexed signature derivation codes.
#[allow(dead_code)]
pub mod idx_sig_dex {
    use super::idr_dex;

    pub static TUPLE: [&str; 16] = [
        idr_dex::ED25519_SIG,
        idr_dex::ED25519_CRT_SIG,
        idr_dex::ECDSA_256K1_SIG,
        idr_dex::ECDSA_256K1_CRT_SIG,
        idr_dex::ECDSA_256R1_SIG,
        idr_dex::ECDSA_256R1_CRT_SIG,
        idr_dex::ED448_SIG,
        idr_dex::ED448_CRT_SIG,
        idr_dex::ED25519_BIG_SIG,
        idr_dex::ED25519_BIG_CRT_SIG,
        idr_dex::ECDSA_256K1_BIG_SIG,
        idr_dex::ECDSA_256K1_BIG_CRT_SIG,
        idr_dex::ECDSA_256R1_BIG_SIG,
        idr_dex::ECDSA_256R1_BIG_CRT_SIG,
        idr_dex::ED448_BIG_SIG,
        idr_dex::ED448_BIG_CRT_SIG,
    ];
}

/// IndexedCurrentSigCodex is codex of indexed signatures for the current list only.
#[allow(dead_code)]
pub mod idx_crt_sig_dex {
    use super::idr_dex;

    pub static TUPLE: [&str; 8] = [
        idr_dex::ED25519_CRT_SIG,
        idr_dex::ECDSA_256K1_CRT_SIG,
        idr_dex::ECDSA_256R1_CRT_SIG,
        idr_dex::ED448_CRT_SIG,
        idr_dex::ED25519_BIG_CRT_SIG,
        idr_dex::ECDSA_256K1_BIG_CRT_SIG,
        idr_dex::ECDSA_256R1_BIG_CRT_SIG,
        idr_dex::ED448_BIG_CRT_SIG,
    ];
}

/// IndexedBothSigCodex is codex of indexed signatures for both current and prior next lists.
#[allow(dead_code)]
pub mod idx_bth_sig_dex {
    use super::idr_dex;

    pub static TUPLE: [&str; 8] = [
        idr_dex::ED25519_SIG,
        idr_dex::ECDSA_256K1_SIG,
        idr_dex::ECDSA_256R1_SIG,
        idr_dex::ED448_SIG,
        idr_dex::ED25519_BIG_SIG,
        idr_dex::ECDSA_256K1_BIG_SIG,
        idr_dex::ECDSA_256R1_BIG_SIG,
        idr_dex::ED448_BIG_SIG,
    ];
}

/// Xizage holds the sizes of an indexer code. `os` is the other index size
/// within the soft part, the remaining `ss - os` chars hold the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xizage {
    pub hs: u32,
    pub ss: u32,
    pub os: u32,
    pub fs: Option<u32>,
    pub ls: u32,
}

impl Xizage {
    const fn new(hs: u32, ss: u32, os: u32, fs: Option<u32>, ls: u32) -> Self {
        Xizage { hs, ss, os, fs, ls }
    }

    pub fn cs(&self) -> u32 {
        self.hs + self.ss
    }

    /// Main index size in chars
    pub fn ms(&self) -> u32 {
        self.ss - self.os
    }
}

/// Returns the Xizage of Indexer code `code`
pub fn xizage(code: &str) -> Option<Xizage> {
    let size = match code {
        "A" | "B" | "C" | "D" | "E" | "F" => Xizage::new(1, 1, 0, Some(88), 0),
        "0A" | "0B" => Xizage::new(2, 2, 1, Some(156), 0),
        "2A" | "2B" | "2C" | "2D" | "2E" | "2F" => Xizage::new(2, 4, 2, Some(92), 0),
        "3A" | "3B" => Xizage::new(2, 6, 3, Some(160), 0),
        "0z" => Xizage::new(2, 2, 0, None, 0),
        "1z" => Xizage::new(2, 2, 1, Some(76), 1),
        "4z" => Xizage::new(2, 6, 3, Some(80), 1),
        _ => return None,
    };
    Some(size)
}

/// Hard code size selected by the first char of an Indexer code
pub fn hardage(c: char) -> Option<u32> {
    match c {
        'A'..='Z' | 'a'..='z' => Some(1),
        '0'..='4' => Some(2),
        _ => None,
    }
}

/// Hard code size selected by the first sextet of an Indexer code
pub fn bardage(b: u8) -> Option<u32> {
    match b {
        0..=51 => Some(1),
        52..=56 => Some(2),
        _ => None,
    }
}

fn max_value(chars: u32) -> u64 {
    64u64.pow(chars) - 1
}

///  Indexer is fully qualified cryptographic material primitive base for
///  indexed primitives. In special cases some codes in the Index code table
///  may be of variable length (i.e. not indexed) when the full size table entry
///  is None. In that case the index is used instead as the length.
pub trait Indexer {
    /// Returns the hard part of the derivation code
    fn code(&self) -> &str;

    /// Returns raw crypto material (without derivation code)
    fn raw(&self) -> &[u8];

    /// Returns the main index
    fn index(&self) -> u32;

    /// Returns the other index, None for current only signatures
    fn ondex(&self) -> Option<u32>;

    /// Returns hard plus soft index chars
    fn both(&self) -> String;

    /// Returns base64 fully qualified representation
    fn qb64(&self) -> String;

    /// Returns base64 fully qualified representation as bytes
    fn qb64b(&self) -> Vec<u8>;

    /// Returns binary fully qualified representation
    fn qb2(&self) -> Vec<u8>;

    /// Full size in chars
    fn full_size(&self) -> usize;
}

/// The four ways of providing Indexer material
#[derive(Debug, Clone, Copy)]
pub enum IndexerSource<'a> {
    CodeAndRaw {
        code: &'a str,
        raw: &'a [u8],
        index: u32,
        ondex: Option<u32>,
    },
    Qb64(&'a str),
    Qb64b(&'a [u8]),
    Qb2(&'a [u8]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseIndexer {
    code: String,
    raw: Vec<u8>,
    index: u32,
    ondex: Option<u32>,
    size: Xizage,
}

impl BaseIndexer {
    pub fn new(source: IndexerSource) -> Result<Self> {
        match source {
            IndexerSource::CodeAndRaw {
                code,
                raw,
                index,
                ondex,
            } => Self::from_parts(code, raw, index, ondex),
            IndexerSource::Qb64(qb64) => Self::exfil(qb64.as_bytes()),
            IndexerSource::Qb64b(qb64b) => Self::exfil(qb64b),
            IndexerSource::Qb2(qb2) => Self::bexfil(qb2),
        }
    }

    pub fn from_code_and_raw(
        code: &str,
        raw: &[u8],
        index: u32,
        ondex: Option<u32>,
    ) -> Result<Self> {
        Self::from_parts(code, raw, index, ondex)
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        Self::exfil(qb64.as_bytes())
    }

    pub fn from_qb64b(qb64b: &[u8]) -> Result<Self> {
        Self::exfil(qb64b)
    }

    pub fn from_qb2(qb2: &[u8]) -> Result<Self> {
        Self::bexfil(qb2)
    }

    fn from_parts(code: &str, raw: &[u8], index: u32, ondex: Option<u32>) -> Result<Self> {
        if code.is_empty() {
            return Err(CesrError::InvalidOptionCombination(
                "Improper initialization need either (raw and code) or qb64b or qb64 or qb2."
                    .to_string(),
            ));
        }

        let size = xizage(code)
            .ok_or_else(|| CesrError::UnknownCode(format!("Unsupported code={}.", code)))?;

        if index as u64 > max_value(size.ms()) {
            return Err(CesrError::SizeOverflow(format!(
                "Invalid index={} for code={}.",
                index, code
            )));
        }

        let ondex = if idx_crt_sig_dex::TUPLE.contains(&code) {
            match ondex {
                Some(o) if o != 0 => {
                    return Err(CesrError::InvalidOndex(format!(
                        "Non zero ondex={} for current only code={}.",
                        o, code
                    )))
                }
                _ => None,
            }
        } else if size.os == 0 {
            match ondex {
                Some(o) if o != index => {
                    return Err(CesrError::InvalidOndex(format!(
                        "Non matching ondex={} and index={} for code={}.",
                        o, index, code
                    )))
                }
                _ => Some(index),
            }
        } else {
            let o = ondex.unwrap_or(index);
            if o as u64 > max_value(size.os) {
                return Err(CesrError::SizeOverflow(format!(
                    "Invalid ondex={} for os={} and code={}.",
                    o, size.os, code
                )));
            }
            Some(o)
        };

        let fs = full_size(&size, index);
        let rize = (fs - size.cs() as usize) * 3 / 4 - size.ls as usize;
        if raw.len() < rize {
            return Err(CesrError::InsufficientMaterial(format!(
                "Not enough raw bytes for code={} and index={} expected rize={} got {}.",
                code,
                index,
                rize,
                raw.len()
            )));
        }
        if raw.len() > rize {
            return Err(CesrError::SizeOverflow(format!(
                "Too many raw bytes for code={} and index={} expected rize={} got {}.",
                code,
                index,
                rize,
                raw.len()
            )));
        }

        Ok(BaseIndexer {
            code: code.to_string(),
            raw: raw.to_vec(),
            index,
            ondex,
            size,
        })
    }

    /// Splits the soft chars into index and ondex applying the signature list rules
    fn unpack_soft(hard: &str, soft: &str, size: &Xizage) -> Result<(u32, Option<u32>)> {
        let ms = size.ms() as usize;
        let index = b64_to_u32(&soft[..ms])?;
        let odx = &soft[ms..];

        let ondex = if idx_crt_sig_dex::TUPLE.contains(&hard) {
            if size.os > 0 {
                let o = b64_to_u32(odx)?;
                if o != 0 {
                    return Err(CesrError::InvalidOndex(format!(
                        "Invalid ondex={} for current only code={}.",
                        o, hard
                    )));
                }
            }
            None
        } else if size.os > 0 {
            Some(b64_to_u32(odx)?)
        } else {
            Some(index)
        };

        Ok((index, ondex))
    }

    fn exfil(qb64b: &[u8]) -> Result<Self> {
        let first = *qb64b.first().ok_or_else(|| {
            CesrError::InsufficientMaterial("Empty material, need more characters.".to_string())
        })?;

        let hs = hardage(first as char).ok_or_else(|| match first {
            b'-' => CesrError::UnknownCode(
                "Unexpected count code start while extracting Indexer.".to_string(),
            ),
            b'_' => CesrError::UnknownCode(
                "Unexpected op code start while extracting Indexer.".to_string(),
            ),
            _ => CesrError::UnknownCode(format!(
                "Unsupported code start char={:?}.",
                first as char
            )),
        })? as usize;

        if qb64b.len() < hs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more characters.",
                hs - qb64b.len()
            )));
        }

        let hard = b64_text(&qb64b[..hs])?;
        let size = xizage(hard)
            .ok_or_else(|| CesrError::UnknownCode(format!("Unsupported code={}.", hard)))?;
        let cs = size.cs() as usize;

        if qb64b.len() < cs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more characters.",
                cs - qb64b.len()
            )));
        }

        let (index, ondex) = Self::unpack_soft(hard, b64_text(&qb64b[hs..cs])?, &size)?;
        let fs = full_size(&size, index);

        if qb64b.len() < fs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more characters.",
                fs - qb64b.len()
            )));
        }

        let ps = cs % 4;
        let base = format!("{}{}", "A".repeat(ps), b64_text(&qb64b[cs..fs])?);
        let paw = decode_b64(&base)?;

        let ls = size.ls as usize;
        if paw.len() < ps + ls {
            return Err(CesrError::MalformedPadding(format!(
                "Missing lead bytes for code={}.",
                hard
            )));
        }
        if paw[..ps].iter().any(|&b| b != 0) {
            return Err(CesrError::MalformedPadding(format!(
                "Nonzero code pad bits for code={}.",
                hard
            )));
        }
        if paw[ps..ps + ls].iter().any(|&b| b != 0) {
            return Err(CesrError::MalformedPadding(format!(
                "Nonzero lead bytes={:02x?}.",
                &paw[ps..ps + ls]
            )));
        }

        Ok(BaseIndexer {
            code: hard.to_string(),
            raw: paw[ps + ls..].to_vec(),
            index,
            ondex,
            size,
        })
    }

    fn bexfil(qb2: &[u8]) -> Result<Self> {
        if qb2.is_empty() {
            return Err(CesrError::InsufficientMaterial(
                "Empty material, need more bytes.".to_string(),
            ));
        }

        let first = nab_sextets(qb2, 1)?[0];
        let hs = bardage(first).ok_or_else(|| match first {
            0x3e => CesrError::UnknownCode(
                "Unexpected count code start while extracting Indexer.".to_string(),
            ),
            0x3f => CesrError::UnknownCode(
                "Unexpected op code start while extracting Indexer.".to_string(),
            ),
            _ => CesrError::UnknownCode(format!(
                "Unsupported code start sextet={:#04x}.",
                first
            )),
        })? as usize;

        let bhs = sceil(hs * 3, 4);
        if qb2.len() < bhs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more bytes.",
                bhs - qb2.len()
            )));
        }

        let hard = code_b2_to_b64(qb2, hs)?;
        let size = xizage(&hard)
            .ok_or_else(|| CesrError::UnknownCode(format!("Unsupported code={}.", hard)))?;
        let cs = size.cs() as usize;

        let bcs = sceil(cs * 3, 4);
        if qb2.len() < bcs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more bytes.",
                bcs - qb2.len()
            )));
        }

        let both = code_b2_to_b64(qb2, cs)?;
        let (index, ondex) = Self::unpack_soft(&hard, &both[hs..], &size)?;
        let fs = full_size(&size, index);

        let bfs = sceil(fs * 3, 4);
        if qb2.len() < bfs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more bytes.",
                bfs - qb2.len()
            )));
        }
        let qb2 = &qb2[..bfs];

        let pbs = 2 * (cs % 4);
        if pbs > 0 {
            let pi = qb2[bcs - 1] & ((1u8 << pbs) - 1);
            if pi != 0 {
                return Err(CesrError::MalformedPadding(format!(
                    "Nonzero code mid pad bits=0b{:0width$b}.",
                    pi,
                    width = pbs
                )));
            }
        }

        let ls = size.ls as usize;
        if qb2.len() < bcs + ls {
            return Err(CesrError::MalformedPadding(format!(
                "Missing lead bytes for code={}.",
                hard
            )));
        }
        if qb2[bcs..bcs + ls].iter().any(|&b| b != 0) {
            return Err(CesrError::MalformedPadding(format!(
                "Nonzero lead midpad bytes={:02x?}.",
                &qb2[bcs..bcs + ls]
            )));
        }

        Ok(BaseIndexer {
            raw: qb2[bcs + ls..].to_vec(),
            code: hard,
            index,
            ondex,
            size,
        })
    }

    fn infil(&self) -> String {
        let both = self.both();
        let ps = (self.size.cs() % 4) as usize;
        let ls = self.size.ls as usize;

        let mut padded = vec![0u8; ps + ls];
        padded.extend_from_slice(&self.raw);
        let full = format!("{}{}", both, &encode_b64(&padded)[ps..]);

        debug_assert_eq!(full.len(), self.full_size(), "bad size for {}", self.code);
        full
    }

    fn binfil(&self) -> Vec<u8> {
        let mut full = pack_code(&self.both());
        full.extend(std::iter::repeat(0u8).take(self.size.ls as usize));
        full.extend_from_slice(&self.raw);

        debug_assert_eq!(full.len() * 4, self.full_size() * 3);
        full
    }
}

/// Full size in chars, computed from the index when variable sized
fn full_size(size: &Xizage, index: u32) -> usize {
    match size.fs {
        Some(fs) => fs as usize,
        None => index as usize * 4 + size.cs() as usize,
    }
}

impl Indexer for BaseIndexer {
    fn code(&self) -> &str {
        &self.code
    }

    fn raw(&self) -> &[u8] {
        &self.raw
    }

    fn index(&self) -> u32 {
        self.index
    }

    fn ondex(&self) -> Option<u32> {
        self.ondex
    }

    fn both(&self) -> String {
        let ms = self.size.ms() as usize;
        let os = self.size.os as usize;
        let odx = self.ondex.unwrap_or(0) as u64;
        format!(
            "{}{}{}",
            self.code,
            int_to_b64(self.index as u64, ms),
            int_to_b64(odx, os)
        )
    }

    fn qb64(&self) -> String {
        self.infil()
    }

    fn qb64b(&self) -> Vec<u8> {
        self.infil().into_bytes()
    }

    fn qb2(&self) -> Vec<u8> {
        self.binfil()
    }

    fn full_size(&self) -> usize {
        full_size(&self.size, self.index)
    }
}

impl Parsable for BaseIndexer {
    fn parse_qb64b(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let indexer = BaseIndexer::exfil(data)?;
        if strip.unwrap_or(false) {
            let fs = indexer.full_size();
            trace!(code = indexer.code(), fs, "stripping qb64b indexer");
            data.drain(..fs);
        }
        Ok(indexer)
    }

    fn parse_qb2(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let indexer = BaseIndexer::bexfil(data)?;
        if strip.unwrap_or(false) {
            let bfs = indexer.full_size() * 3 / 4;
            trace!(code = indexer.code(), bfs, "stripping qb2 indexer");
            data.drain(..bfs);
        }
        Ok(indexer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) const SIG: [u8; 64] = [
        0x99, 0xd2, 0x3c, 0x39, 0x24, 0x24, 0x30, 0x9f, 0x6b, 0xfb, 0x18, 0xa0, 0x8c, 0x40, 0x72,
        0x12, 0x32, 0x2e, 0x6b, 0xb2, 0xc7, 0x1f, 0x70, 0x0e, 0x27, 0x6d, 0x8f, 0x40, 0xaa, 0xa5,
        0x8c, 0xc8, 0x6e, 0x85, 0xc8, 0x21, 0xf6, 0x71, 0x91, 0x70, 0xa9, 0xec, 0xcf, 0x92, 0xaf,
        0x29, 0xde, 0xca, 0xfc, 0x7f, 0x7e, 0xd7, 0x6f, 0x7c, 0x17, 0x82, 0x1d, 0xd4, 0x3c, 0x6f,
        0x22, 0x81, 0x26, 0x09,
    ];
    const SIG_QB64: &str = "AACZ0jw5JCQwn2v7GKCMQHISMi5rsscfcA4nbY9AqqWMyG6FyCH2cZFwqezPkq8p3sr8f37Xb3wXgh3UPG8igSYJ";

    #[test]
    fn test_indexer_sizes() {
        for code in idr_dex::TUPLE {
            let size = xizage(code).unwrap();
            assert_eq!(hardage(code.chars().next().unwrap()), Some(size.hs), "{}", code);
            assert_eq!(size.hs as usize, code.len(), "{}", code);
            assert!(size.os <= size.ss, "{}", code);

            match size.fs {
                Some(fs) => {
                    let cs = size.cs();
                    let rs = ((fs - cs) * 3 / 4 - size.ls) as usize;
                    let ps = (3 - (rs + size.ls as usize) % 3) % 3;
                    assert_eq!(ps, (cs % 4) as usize, "{}", code);
                }
                None => {
                    assert_eq!(size.cs() % 4, 0, "{}", code);
                    assert_eq!(size.os, 0, "{}", code);
                }
            }
        }

        for code in idx_sig_dex::TUPLE {
            assert!(
                idx_crt_sig_dex::TUPLE.contains(&code) ^ idx_bth_sig_dex::TUPLE.contains(&code),
                "{}",
                code
            );
        }

        assert_eq!(bardage(0), Some(1));
        assert_eq!(bardage(56), Some(2));
        assert_eq!(bardage(57), None);
        assert_eq!(hardage('5'), None);
        assert_eq!(hardage('-'), None);
    }

    #[test]
    fn test_base_indexer_from_qb64() -> Result<()> {
        let indexer = BaseIndexer::from_qb64(SIG_QB64)?;
        assert_eq!(indexer.code(), idr_dex::ED25519_SIG);
        assert_eq!(indexer.raw(), &SIG);
        assert_eq!(indexer.index(), 0);
        assert_eq!(indexer.ondex(), Some(0));
        assert_eq!(indexer.qb64(), SIG_QB64);
        assert_eq!(indexer.full_size(), 88);

        let qb2 = indexer.qb2();
        assert_eq!(qb2.len(), 66);
        assert_eq!(qb2, decode_b64(SIG_QB64)?);
        assert_eq!(BaseIndexer::from_qb2(&qb2)?, indexer);

        let indexer = BaseIndexer::from_qb64(
            "AAApXLez5eVIs6YyRXOMDMBy4cTm2GvsilrZlcMmtBbO5twLst_jjFoEyfKTWKntEtv9JPBv1DLkqg-ImDmGPM8E",
        )?;
        assert_eq!(indexer.index(), 0);
        assert_eq!(indexer.raw().len(), 64);
        Ok(())
    }

    #[test]
    fn test_base_indexer_from_raw() -> Result<()> {
        let indexer = BaseIndexer::new(IndexerSource::CodeAndRaw {
            code: idr_dex::ED25519_SIG,
            raw: &SIG,
            index: 5,
            ondex: None,
        })?;
        assert_eq!(indexer.ondex(), Some(5));
        assert_eq!(indexer.both(), "AF");
        assert_eq!(indexer.qb64(), format!("AF{}", &SIG_QB64[2..]));

        let qb2 = indexer.qb2();
        assert_eq!(&qb2[..2], &[0x00, 0x50]);
        assert_eq!(&qb2[2..], &SIG);

        assert_eq!(BaseIndexer::new(IndexerSource::Qb2(&qb2))?, indexer);
        assert_eq!(BaseIndexer::new(IndexerSource::Qb64b(&indexer.qb64b()))?, indexer);
        Ok(())
    }

    #[test]
    fn test_indexer_ondex_rules() -> Result<()> {
        // current only with no other index field
        let crt = BaseIndexer::from_code_and_raw(idr_dex::ED25519_CRT_SIG, &SIG, 3, None)?;
        assert_eq!(crt.ondex(), None);
        assert_eq!(BaseIndexer::from_qb64(&crt.qb64())?.ondex(), None);

        let result = BaseIndexer::from_code_and_raw(idr_dex::ED25519_CRT_SIG, &SIG, 3, Some(3));
        assert!(matches!(result, Err(CesrError::InvalidOndex(_))));

        // current only with other index field carries zero
        let crt = BaseIndexer::from_code_and_raw(idr_dex::ED25519_BIG_CRT_SIG, &SIG, 67, None)?;
        assert_eq!(crt.both(), "2BBDAA");
        assert_eq!(BaseIndexer::from_qb2(&crt.qb2())?, crt);

        let mut bad = crt.qb64();
        bad.replace_range(4..6, "AB");
        let result = BaseIndexer::from_qb64(&bad);
        assert!(matches!(result, Err(CesrError::InvalidOndex(_))));

        // both lists without other index field
        let bth = BaseIndexer::from_code_and_raw(idr_dex::ED25519_SIG, &SIG, 7, Some(7))?;
        assert_eq!(bth.ondex(), Some(7));
        let result = BaseIndexer::from_code_and_raw(idr_dex::ED25519_SIG, &SIG, 7, Some(8));
        assert!(matches!(result, Err(CesrError::InvalidOndex(_))));

        // both lists with other index field
        let bth = BaseIndexer::from_code_and_raw(idr_dex::ED25519_BIG_SIG, &SIG, 5, Some(3))?;
        assert_eq!(bth.both(), "2AAFAD");
        let decoded = BaseIndexer::from_qb64(&bth.qb64())?;
        assert_eq!(decoded.index(), 5);
        assert_eq!(decoded.ondex(), Some(3));

        let bth = BaseIndexer::from_code_and_raw(idr_dex::ED25519_BIG_SIG, &SIG, 5, None)?;
        assert_eq!(bth.ondex(), Some(5));
        Ok(())
    }

    #[test]
    fn test_indexer_size_limits() {
        let result = BaseIndexer::from_code_and_raw(idr_dex::ED25519_SIG, &SIG, 64, None);
        assert!(matches!(result, Err(CesrError::SizeOverflow(_))));

        let result =
            BaseIndexer::from_code_and_raw(idr_dex::ED25519_BIG_SIG, &SIG, 4095, Some(4096));
        assert!(matches!(result, Err(CesrError::SizeOverflow(_))));

        let result = BaseIndexer::from_code_and_raw(idr_dex::ED25519_SIG, &SIG[..63], 0, None);
        assert!(matches!(result, Err(CesrError::InsufficientMaterial(_))));

        let long = [SIG.as_slice(), &[0]].concat();
        let result = BaseIndexer::from_code_and_raw(idr_dex::ED25519_SIG, &long, 0, None);
        assert!(matches!(result, Err(CesrError::SizeOverflow(_))));

        let result = BaseIndexer::from_code_and_raw("", &SIG, 0, None);
        assert!(matches!(result, Err(CesrError::InvalidOptionCombination(_))));

        let result = BaseIndexer::from_code_and_raw("G", &SIG, 0, None);
        assert!(matches!(result, Err(CesrError::UnknownCode(_))));
    }

    #[test]
    fn test_indexer_test_codes() -> Result<()> {
        let var = BaseIndexer::from_code_and_raw(idr_dex::TBD0, b"xyz", 1, None)?;
        assert_eq!(var.qb64(), "0zABeHl6");
        assert_eq!(var.full_size(), 8);
        assert_eq!(BaseIndexer::from_qb64("0zABeHl6")?, var);
        assert_eq!(BaseIndexer::from_qb2(&var.qb2())?, var);

        let raw: Vec<u8> = (0..53).collect();
        let lead = BaseIndexer::from_code_and_raw(idr_dex::TBD1, &raw, 2, Some(3))?;
        assert_eq!(
            lead.qb64(),
            "1zCDAAABAgMEBQYHCAkKCwwNDg8QERITFBUWFxgZGhscHR4fICEiIyQlJicoKSorLC0uLzAxMjM0"
        );
        assert_eq!(BaseIndexer::from_qb2(&lead.qb2())?, lead);

        let big = BaseIndexer::from_code_and_raw(idr_dex::TBD4, &raw, 2, Some(3))?;
        assert_eq!(big.qb64().len(), 80);
        assert!(big.qb64().starts_with("4zAACAADAAAB"));
        assert_eq!(BaseIndexer::from_qb64(&big.qb64())?, big);

        let result = BaseIndexer::from_qb64("1zCDBAAB");
        assert!(matches!(result, Err(CesrError::InsufficientMaterial(_))));
        let bad = format!("1zCDB{}", &lead.qb64()[5..]);
        let result = BaseIndexer::from_qb64(&bad);
        assert!(matches!(result, Err(CesrError::MalformedPadding(_))));
        Ok(())
    }

    #[test]
    fn test_indexer_round_trip_all_codes() -> Result<()> {
        for code in idr_dex::TUPLE {
            let size = xizage(code).unwrap();
            let index = 1;
            let rize = (full_size(&size, index) - size.cs() as usize) * 3 / 4 - size.ls as usize;
            let raw: Vec<u8> = (0..rize).map(|i| (i * 13 + 7) as u8).collect();

            let indexer = BaseIndexer::from_code_and_raw(code, &raw, index, None)?;
            let qb64 = indexer.qb64();
            let qb2 = indexer.qb2();
            assert_eq!(qb64.len() % 4, 0, "{}", code);
            assert_eq!(qb2.len() % 3, 0, "{}", code);
            assert_eq!(decode_b64(&qb64)?, qb2, "{}", code);
            assert_eq!(BaseIndexer::from_qb64(&qb64)?, indexer, "{}", code);
            assert_eq!(BaseIndexer::from_qb2(&qb2)?, indexer, "{}", code);
        }
        Ok(())
    }

    #[test]
    fn test_indexer_extraction_errors() {
        for qb64 in ["-AAB", "_AAB", "G", "5AAA"] {
            let result = BaseIndexer::from_qb64(qb64);
            assert!(matches!(result, Err(CesrError::UnknownCode(_))), "{}", qb64);
        }
        let result = BaseIndexer::from_qb2(&[0xf8, 0x00, 0x01]);
        assert!(matches!(result, Err(CesrError::UnknownCode(_))));

        let result = BaseIndexer::from_qb64(&SIG_QB64[..87]);
        assert!(matches!(result, Err(CesrError::InsufficientMaterial(_))));
        let result = BaseIndexer::from_qb64("");
        assert!(matches!(result, Err(CesrError::InsufficientMaterial(_))));

        let bad = format!("AAQ{}", &SIG_QB64[3..]);
        let result = BaseIndexer::from_qb64(&bad);
        assert!(matches!(result, Err(CesrError::MalformedPadding(_))));

        let mut bad = decode_b64(SIG_QB64).unwrap();
        bad[1] |= 0x04;
        let result = BaseIndexer::from_qb2(&bad);
        assert!(matches!(result, Err(CesrError::MalformedPadding(_))));

        let bad = format!("A{}", &SIG_QB64[2..]).replacen('A', "A+", 1);
        let result = BaseIndexer::from_qb64(&bad);
        assert!(matches!(result, Err(CesrError::CharsetViolation(_))));

        // index and ondex fields outside the alphabet
        let tail = "A".repeat(86);
        for bad in [
            format!("A*{}", &SIG_QB64[2..]),
            format!("2A*BAA{}", tail),
            format!("2AAB*A{}", tail),
            format!("0A.A{}", "A".repeat(152)),
        ] {
            let result = BaseIndexer::from_qb64(&bad);
            assert!(matches!(result, Err(CesrError::CharsetViolation(_))), "{}", bad);
        }

        // multibyte UTF-8 inside the index and ondex fields
        for bad in [
            format!("Aé{}", &SIG_QB64[3..]),
            format!("2AAéA{}", tail),
            format!("2AAAé{}", tail),
        ] {
            let result = BaseIndexer::from_qb64(&bad);
            assert!(matches!(result, Err(CesrError::CharsetViolation(_))), "{}", bad);
            let mut stream = bad.clone().into_bytes();
            let result = BaseIndexer::parse_qb64b(&mut stream, Some(true));
            assert!(matches!(result, Err(CesrError::CharsetViolation(_))));
            assert_eq!(stream, bad.into_bytes());
        }
    }

    #[test]
    fn test_indexer_parsable() -> Result<()> {
        let mut stream = format!("{}{}", SIG_QB64, "-AAB").into_bytes();
        let indexer = BaseIndexer::parse_qb64b(&mut stream, Some(true))?;
        assert_eq!(indexer.raw(), &SIG);
        assert_eq!(stream, b"-AAB".to_vec());

        let mut stream = [indexer.qb2(), indexer.qb2()].concat();
        BaseIndexer::parse_qb2(&mut stream, Some(true))?;
        assert_eq!(stream.len(), 66);
        BaseIndexer::parse_qb2(&mut stream, Some(true))?;
        assert!(stream.is_empty());
        Ok(())
    }
}
