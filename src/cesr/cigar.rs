use crate::cesr::matter::{BaseMatter, Matter};
use crate::cesr::sig_dex;
use crate::errors::{CesrError, Result};

///  Cigar is Matter subclass holding a nonindexed signature.
///  From Matter .raw is signature and .code is signature cipher suite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cigar {
    base: BaseMatter,
}

impl Cigar {
    fn from_base(base: BaseMatter) -> Result<Self> {
        if !sig_dex::TUPLE.contains(&base.code()) {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for cigar.",
                base.code()
            )));
        }
        Ok(Cigar { base })
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

impl Matter for Cigar {
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
