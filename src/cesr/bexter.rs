use crate::cesr::matter::codex::sizage;
use crate::cesr::matter::{BaseMatter, Matter};
use crate::cesr::{bex_dex, decode_b64, encode_b64, is_base64};
use crate::errors::{CesrError, Result};

///  Bexter is subclass of Matter, cryptographic material, for variable length
///  strings that only contain Base64 URL safe characters, i.e. Base64 text (bext).
///  When created using the 'bext' paramaeter, the encoded matter in qb64 format
///  in the text domain is more compact than would be the case if the string were
///  passed in as raw bytes. The text is used as is to form the value part of the
///  qb64 version not including the leader.
///
///  Due to ambiguity that arises from pre-padding bext whose length is a multiple of
///  three with one or more 'A' chars. Any bext that starts with an 'A' and whose length
///  is either a multiple of 3 or 4 may not round trip. Bext with a leading 'A'
///  whose length is a multiple of four may have the leading 'A' stripped when
///  round tripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bexter {
    base: BaseMatter,
}

impl Bexter {
    fn from_base(base: BaseMatter) -> Result<Self> {
        if !bex_dex::TUPLE.contains(&base.code()) {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for bexter.",
                base.code()
            )));
        }
        Ok(Bexter { base })
    }

    pub fn from_bext(bext: &str) -> Result<Self> {
        let raw = rawify(bext)?;
        Self::from_base(BaseMatter::from_code_and_raw(bex_dex::STR_B64_L0, &raw)?)
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        Self::from_base(BaseMatter::from_qb64(qb64)?)
    }

    pub fn from_qb64b(qb64b: &[u8]) -> Result<Self> {
        Self::from_base(BaseMatter::from_qb64b(qb64b)?)
    }

    pub fn from_qb2(qb2: &[u8]) -> Result<Self> {
        Self::from_base(BaseMatter::from_qb2(qb2)?)
    }

    /// Returns the Base64 text recovered from raw
    pub fn bext(&self) -> String {
        derawify(self.base.raw(), self.base.code())
    }
}

/// Converts Base64 text to raw bytes, prepadding with 'A' to a whole quadlet
/// and dropping the zero lead bytes the prepad produces.
pub(crate) fn rawify(bext: &str) -> Result<Vec<u8>> {
    if !is_base64(bext) {
        return Err(CesrError::CharsetViolation(format!(
            "Invalid Base64 text={}.",
            bext
        )));
    }

    let ts = bext.len() % 4;
    let ws = (4 - ts) % 4;
    let ls = (3 - ts) % 3;
    let raw = decode_b64(&format!("{}{}", "A".repeat(ws), bext))?;
    Ok(raw[ls..].to_vec())
}

/// Inverse of `rawify` using the lead size of `code`
pub(crate) fn derawify(raw: &[u8], code: &str) -> String {
    let ls = sizage(code).map(|s| s.ls as usize).unwrap_or(0);
    let mut padded = vec![0u8; ls];
    padded.extend_from_slice(raw);
    let bext = encode_b64(&padded);

    let ws = if ls == 0 {
        usize::from(bext.starts_with('A'))
    } else {
        (ls + 1) % 4
    };
    bext.get(ws..).unwrap_or_default().to_string()
}

impl Matter for Bexter {
    fn code(&self) -> &str { self.base.code() }
    fn raw(&self) -> &[u8] { self.base.raw() }
    fn soft(&self) -> &str { self.base.soft() }
    fn both(&self) -> String { self.base.both() }
    fn qb64(&self) -> String { self.base.qb64() }
    fn qb64b(&self) -> Vec<u8> { self.base.qb64b() }
    fn qb2(&self) -> Vec<u8> { self.base.qb2() }
    fn full_size(&self) -> usize { self.base.full_size() }
    fn size(&self) -> Option<u32> { self.base.size() }
    fn is_transferable(&self) -> bool { self.base.is_transferable() }
    fn is_digestive(&self) -> bool { self.base.is_digestive() }
    fn is_prefixive(&self) -> bool { self.base.is_prefixive() }
    fn is_special(&self) -> bool { self.base.is_special() }
}
