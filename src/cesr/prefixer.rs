use crate::cesr::matter::{BaseMatter, Matter};
use crate::cesr::{pre_dex, Parsable};
use crate::errors::{CesrError, Result};

///  Prefixer is Matter subclass for autonomic identifier AID prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefixer {
    base: BaseMatter,
}

impl Prefixer {
    fn from_base(base: BaseMatter) -> Result<Self> {
        if !pre_dex::TUPLE.contains(&base.code()) {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for prefixer.",
                base.code()
            )));
        }
        Ok(Prefixer { base })
    }

    pub fn from_code_and_raw(code: &str, raw: &[u8]) -> Result<Self> {
        Self::from_base(BaseMatter::from_code_and_raw(code, raw)?)
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
}

impl Matter for Prefixer {
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

impl Parsable for Prefixer {
    fn parse_qb64b(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let prefixer = Self::from_qb64b(data)?;
        if strip.unwrap_or(false) {
            data.drain(..prefixer.full_size());
        }
        Ok(prefixer)
    }

    fn parse_qb2(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let prefixer = Self::from_qb2(data)?;
        if strip.unwrap_or(false) {
            data.drain(..prefixer.full_size() * 3 / 4);
        }
        Ok(prefixer)
    }
}
