pub mod codex;

use crate::cesr::{
    b64_text, b64_to_u32, code_b2_to_b64, decode_b64, encode_b64, int_to_b64, is_base64,
    nab_sextets, pack_code, sceil, Parsable, PAD,
};
use crate::errors::{CesrError, Result};
use codex::{
    bardage, dig_dex, hardage, large_vrz_dex, non_trans_dex, pre_dex, sizage, small_vrz_dex,
    Sizage,
};
use tracing::{debug, trace};

/// Largest quadlet count a 2 char variable size soft can hold
const SMALL_VRZ_MAX: usize = 64usize.pow(2) - 1;
/// Largest quadlet count a 4 char variable size soft can hold
const LARGE_VRZ_MAX: usize = 64usize.pow(4) - 1;

/// Matter is a fully qualified cryptographic primitive: a code plus raw
/// material, or for special codes a code plus a short soft value.
pub trait Matter {
    /// Returns the hard part of the derivation code
    fn code(&self) -> &str;

    /// Returns raw crypto material (without derivation code)
    fn raw(&self) -> &[u8];

    /// Returns the soft part of the code without its xtra prepad
    fn soft(&self) -> &str;

    /// Returns hard plus xtra plus soft
    fn both(&self) -> String;

    /// Returns base64 fully qualified representation
    fn qb64(&self) -> String;

    /// Returns base64 fully qualified representation as bytes
    fn qb64b(&self) -> Vec<u8>;

    /// Returns binary fully qualified representation
    fn qb2(&self) -> Vec<u8>;

    /// Returns the full size in chars of the qb64 representation
    fn full_size(&self) -> usize;

    /// Returns the quadlet count of variable sized material, None when fixed
    fn size(&self) -> Option<u32>;

    /// Returns whether the derivation code is transferable
    fn is_transferable(&self) -> bool;

    /// Returns whether the code represents a digest
    fn is_digestive(&self) -> bool;

    /// Returns whether the code represents a prefix
    fn is_prefixive(&self) -> bool;

    /// Returns whether the code is special, carrying a soft value
    fn is_special(&self) -> bool;
}

/// The four ways of providing Matter material
#[derive(Debug, Clone, Copy)]
pub enum MatterSource<'a> {
    /// Code and raw bytes, plus soft value for special codes
    CodeAndRaw {
        code: &'a str,
        raw: &'a [u8],
        soft: Option<&'a str>,
    },
    Qb64(&'a str),
    Qb64b(&'a [u8]),
    Qb2(&'a [u8]),
}

/// Common implementation for all Matter types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseMatter {
    code: String,
    soft: String,
    raw: Vec<u8>,
    size: Sizage,
}

impl BaseMatter {
    pub fn new(source: MatterSource) -> Result<Self> {
        match source {
            MatterSource::CodeAndRaw { code, raw, soft } => Self::from_parts(code, raw, soft),
            MatterSource::Qb64(qb64) => Self::exfil(qb64.as_bytes()),
            MatterSource::Qb64b(qb64b) => Self::exfil(qb64b),
            MatterSource::Qb2(qb2) => Self::bexfil(qb2),
        }
    }

    pub fn from_code_and_raw(code: &str, raw: &[u8]) -> Result<Self> {
        Self::from_parts(code, raw, None)
    }

    /// Creates special soft only material such as tags
    pub fn from_soft_and_code(soft: &str, code: &str) -> Result<Self> {
        Self::from_parts(code, &[], Some(soft))
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

    fn from_parts(code: &str, raw: &[u8], soft: Option<&str>) -> Result<Self> {
        if code.is_empty() {
            return Err(CesrError::InvalidOptionCombination(
                "Improper initialization need either (raw and code) or (code and soft) \
                 or qb64b or qb64 or qb2."
                    .to_string(),
            ));
        }

        let size = sizage(code)
            .ok_or_else(|| CesrError::UnknownCode(format!("Unsupported code={}.", code)))?;

        if size.fs.is_none() {
            if soft.is_some() {
                return Err(CesrError::InvalidOptionCombination(format!(
                    "Soft not allowed for variable sized code={}.",
                    code
                )));
            }
            return Self::from_variable(code, raw);
        }

        let soft = if size.ss > 0 {
            let soft = soft.ok_or_else(|| {
                CesrError::InvalidOptionCombination(format!(
                    "Missing soft for special code={}.",
                    code
                ))
            })?;
            if soft.len() != (size.ss - size.xs) as usize {
                return Err(CesrError::InvalidSoft(format!(
                    "Invalid soft={} with ss={} xs={} for code={}.",
                    soft, size.ss, size.xs, code
                )));
            }
            if !is_base64(soft) {
                return Err(CesrError::CharsetViolation(format!(
                    "Non Base64 chars in soft={}.",
                    soft
                )));
            }
            soft.to_string()
        } else {
            if soft.is_some() {
                return Err(CesrError::InvalidOptionCombination(format!(
                    "Soft not allowed for non special code={}.",
                    code
                )));
            }
            String::new()
        };

        let rize = size.raw_size().unwrap_or(0);
        if raw.len() < rize {
            return Err(CesrError::InsufficientMaterial(format!(
                "Not enough raw bytes for code={} expected rize={} got {}.",
                code,
                rize,
                raw.len()
            )));
        }
        if raw.len() > rize {
            return Err(CesrError::SizeOverflow(format!(
                "Too many raw bytes for code={} expected rize={} got {}.",
                code,
                rize,
                raw.len()
            )));
        }

        Ok(BaseMatter {
            code: code.to_string(),
            soft,
            raw: raw.to_vec(),
            size,
        })
    }

    /// Selects the variable sized code matching the lead size of `raw`,
    /// promoting small codes to big ones when the size soft overflows.
    fn from_variable(code: &str, raw: &[u8]) -> Result<Self> {
        let rize = raw.len();
        let ls = (3 - (rize % 3)) % 3;
        let quadlets = (rize + ls) / 3;

        let selector = &code[..1];
        let (code, ss) = if small_vrz_dex::TUPLE.contains(&selector) {
            if quadlets <= SMALL_VRZ_MAX {
                (format!("{}{}", small_vrz_dex::TUPLE[ls], &code[1..2]), 2)
            } else if quadlets <= LARGE_VRZ_MAX {
                let big = format!("{}AA{}", large_vrz_dex::TUPLE[ls], &code[1..2]);
                debug!(code, big = big.as_str(), quadlets, "promoting to big variable code");
                (big, 4)
            } else {
                return Err(CesrError::SizeOverflow(format!(
                    "Unsupported raw size={} for code={}.",
                    rize, code
                )));
            }
        } else if large_vrz_dex::TUPLE.contains(&selector) {
            if quadlets <= LARGE_VRZ_MAX {
                (format!("{}{}", large_vrz_dex::TUPLE[ls], &code[1..4]), 4)
            } else {
                return Err(CesrError::SizeOverflow(format!(
                    "Unsupported raw size={} for large code={}. {} <= {}",
                    rize, code, quadlets, LARGE_VRZ_MAX
                )));
            }
        } else {
            return Err(CesrError::UnknownCode(format!(
                "Unsupported variable size code={}.",
                code
            )));
        };

        let size = sizage(&code)
            .ok_or_else(|| CesrError::UnknownCode(format!("Unsupported code={}.", code)))?;

        Ok(BaseMatter {
            code,
            soft: int_to_b64(quadlets as u64, ss),
            raw: raw.to_vec(),
            size,
        })
    }

    /// Extracts Matter from the front of qualified Base64 bytes.
    fn exfil(qb64b: &[u8]) -> Result<Self> {
        let first = *qb64b.first().ok_or_else(|| {
            CesrError::InsufficientMaterial("Empty material, need more characters.".to_string())
        })?;

        let hs = hardage(first as char).ok_or_else(|| match first {
            b'-' => CesrError::UnknownCode(
                "Unexpected count code start while extracting Matter.".to_string(),
            ),
            b'_' => CesrError::UnknownCode(
                "Unexpected op code start while extracting Matter.".to_string(),
            ),
            _ => CesrError::UnknownCode(format!("Unsupported code start char={:?}.", first as char)),
        })? as usize;

        if qb64b.len() < hs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more characters.",
                hs - qb64b.len()
            )));
        }

        let hard = b64_text(&qb64b[..hs])?;
        let size = sizage(hard)
            .ok_or_else(|| CesrError::UnknownCode(format!("Unsupported code={}.", hard)))?;
        let cs = size.cs() as usize;

        if qb64b.len() < cs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more characters.",
                cs - qb64b.len()
            )));
        }

        let soft = strip_xtra(b64_text(&qb64b[hs..cs])?, &size)?;
        let fs = full_size(&size, soft)?;

        if qb64b.len() < fs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more characters.",
                fs - qb64b.len()
            )));
        }

        // prepad ps 'A's so the lead plus raw converts on a 24 bit boundary
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

        Ok(BaseMatter {
            code: hard.to_string(),
            soft: soft.to_string(),
            raw: paw[ps + ls..].to_vec(),
            size,
        })
    }

    /// Extracts Matter from the front of qualified Base2 bytes.
    fn bexfil(qb2: &[u8]) -> Result<Self> {
        if qb2.is_empty() {
            return Err(CesrError::InsufficientMaterial(
                "Empty material, need more bytes.".to_string(),
            ));
        }

        let first = nab_sextets(qb2, 1)?[0];
        let hs = bardage(first).ok_or_else(|| match first {
            0x3e => CesrError::UnknownCode(
                "Unexpected count code start while extracting Matter.".to_string(),
            ),
            0x3f => CesrError::UnknownCode(
                "Unexpected op code start while extracting Matter.".to_string(),
            ),
            _ => CesrError::UnknownCode(format!("Unsupported code start sextet={:#04x}.", first)),
        })? as usize;

        let bhs = sceil(hs * 3, 4);
        if qb2.len() < bhs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more bytes.",
                bhs - qb2.len()
            )));
        }

        let hard = code_b2_to_b64(qb2, hs)?;
        let size = sizage(&hard)
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
        let soft = strip_xtra(&both[hs..], &size)?;
        let fs = full_size(&size, soft)?;

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
            let mask = (1u8 << pbs) - 1;
            let pi = qb2[bcs - 1] & mask;
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

        Ok(BaseMatter {
            soft: soft.to_string(),
            raw: qb2[bcs + ls..].to_vec(),
            code: hard,
            size,
        })
    }

    /// Qualified Base64 text of code and raw
    fn infil(&self) -> String {
        let both = self.both();
        let ls = self.size.ls as usize;
        let rs = self.raw.len();

        let full = match self.size.fs {
            Some(fs) => {
                let ps = (3 - ((rs + ls) % 3)) % 3;
                debug_assert_eq!(ps, (self.size.cs() % 4) as usize, "bad size for {}", self.code);

                let mut padded = vec![0u8; ps + ls];
                padded.extend_from_slice(&self.raw);
                let full = format!("{}{}", both, &encode_b64(&padded)[ps..]);
                debug_assert_eq!(full.len(), fs as usize, "bad size for {}", self.code);
                full
            }
            None => {
                debug_assert_eq!((ls + rs) % 3, 0, "bad lead for {}", self.code);
                let mut padded = vec![0u8; ls];
                padded.extend_from_slice(&self.raw);
                format!("{}{}", both, encode_b64(&padded))
            }
        };

        debug_assert_eq!(full.len() % 4, 0);
        full
    }

    /// Qualified Base2 bytes of code and raw
    fn binfil(&self) -> Vec<u8> {
        let mut full = pack_code(&self.both());
        full.extend(std::iter::repeat(0u8).take(self.size.ls as usize));
        full.extend_from_slice(&self.raw);

        debug_assert_eq!(full.len() % 3, 0);
        debug_assert_eq!(full.len() * 4 / 3, self.full_size());
        full
    }
}

/// Verifies and strips the xtra prepad chars at the front of a soft
fn strip_xtra<'a>(soft: &'a str, size: &Sizage) -> Result<&'a str> {
    let xs = size.xs as usize;
    let (xtra, soft) = soft.split_at(xs.min(soft.len()));
    if xtra != PAD.repeat(xs) {
        return Err(CesrError::MalformedPrepad(format!("Invalid prepad xtra={}.", xtra)));
    }
    Ok(soft)
}

/// Full size in chars, computed from the soft quadlet count when variable sized
fn full_size(size: &Sizage, soft: &str) -> Result<usize> {
    match size.fs {
        Some(fs) => Ok(fs as usize),
        None => Ok(b64_to_u32(soft)? as usize * 4 + size.cs() as usize),
    }
}

impl Matter for BaseMatter {
    fn code(&self) -> &str {
        &self.code
    }

    fn raw(&self) -> &[u8] {
        &self.raw
    }

    fn soft(&self) -> &str {
        &self.soft
    }

    fn both(&self) -> String {
        format!("{}{}{}", self.code, PAD.repeat(self.size.xs as usize), self.soft)
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
        match self.size.fs {
            Some(fs) => fs as usize,
            None => self.size.cs() as usize + (self.size.ls as usize + self.raw.len()) * 4 / 3,
        }
    }

    fn size(&self) -> Option<u32> {
        match self.size.fs {
            Some(_) => None,
            None => Some(((self.size.ls as usize + self.raw.len()) / 3) as u32),
        }
    }

    fn is_transferable(&self) -> bool {
        !non_trans_dex::TUPLE.contains(&self.code.as_str())
    }

    fn is_digestive(&self) -> bool {
        dig_dex::TUPLE.contains(&self.code.as_str())
    }

    fn is_prefixive(&self) -> bool {
        pre_dex::TUPLE.contains(&self.code.as_str())
    }

    fn is_special(&self) -> bool {
        self.size.is_special()
    }
}

impl Parsable for BaseMatter {
    fn parse_qb64b(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let matter = BaseMatter::exfil(data)?;
        if strip.unwrap_or(false) {
            let fs = matter.full_size();
            trace!(code = matter.code(), fs, "stripping qb64b matter");
            data.drain(..fs);
        }
        Ok(matter)
    }

    fn parse_qb2(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let matter = BaseMatter::bexfil(data)?;
        if strip.unwrap_or(false) {
            let bfs = matter.full_size() * 3 / 4;
            trace!(code = matter.code(), bfs, "stripping qb2 matter");
            data.drain(..bfs);
        }
        Ok(matter)
    }
}
