use crate::cesr::indexing::{idx_sig_dex, BaseIndexer, Indexer};
use crate::cesr::Parsable;
use crate::errors::{CesrError, Result};

///  Siger is Indexer subclass holding an indexed signature.
///  From Indexer .raw is signature, .code is signature cipher suite and
///  .index and .ondex locate the signing key in the current and prior next lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Siger {
    base: BaseIndexer,
}

impl Siger {
    fn from_base(base: BaseIndexer) -> Result<Self> {
        if !idx_sig_dex::TUPLE.contains(&base.code()) {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for siger.",
                base.code()
            )));
        }
        Ok(Siger { base })
    }

    pub fn from_code_and_raw(
        code: &str,
        raw: &[u8],
        index: u32,
        ondex: Option<u32>,
    ) -> Result<Self> {
        Self::from_base(BaseIndexer::from_code_and_raw(code, raw, index, ondex)?)
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        Self::from_base(BaseIndexer::from_qb64(qb64)?)
    }

    pub fn from_qb64b(qb64b: &[u8]) -> Result<Self> {
        Self::from_base(BaseIndexer::from_qb64b(qb64b)?)
    }

    pub fn from_qb2(qb2: &[u8]) -> Result<Self> {
        Self::from_base(BaseIndexer::from_qb2(qb2)?)
    }
}

impl Indexer for Siger {
    fn code(&self) -> &str { self.base.code() }
    fn raw(&self) -> &[u8] { self.base.raw() }
    fn index(&self) -> u32 { self.base.index() }
    fn ondex(&self) -> Option<u32> { self.base.ondex() }
    fn both(&self) -> String { self.base.both() }
    fn qb64(&self) -> String { self.base.qb64() }
    fn qb64b(&self) -> Vec<u8> { self.base.qb64b() }
    fn qb2(&self) -> Vec<u8> { self.base.qb2() }
    fn full_size(&self) -> usize { self.base.full_size() }
}

impl Parsable for Siger {
    fn parse_qb64b(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let siger = Self::from_qb64b(data)?;
        if strip.unwrap_or(false) {
            data.drain(..siger.full_size());
        }
        Ok(siger)
    }

    fn parse_qb2(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let siger = Self::from_qb2(data)?;
        if strip.unwrap_or(false) {
            data.drain(..siger.full_size() * 3 / 4);
        }
        Ok(siger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cesr::indexing::idr_dex;

    const SIG_QB64: &str = "AACZ0jw5JCQwn2v7GKCMQHISMi5rsscfcA4nbY9AqqWMyG6FyCH2cZFwqezPkq8p3sr8f37Xb3wXgh3UPG8igSYJ";

    #[test]
    fn test_siger() -> Result<()> {
        let siger = Siger::from_qb64(SIG_QB64)?;
        assert_eq!(siger.code(), idr_dex::ED25519_SIG);
        assert_eq!(siger.index(), 0);
        assert_eq!(siger.ondex(), Some(0));
        assert_eq!(siger.raw().len(), 64);
        assert_eq!(siger.qb64(), SIG_QB64);

        let moved = Siger::from_code_and_raw(idr_dex::ED25519_BIG_SIG, siger.raw(), 5, Some(3))?;
        assert_eq!(moved.index(), 5);
        assert_eq!(moved.ondex(), Some(3));
        assert_eq!(Siger::from_qb2(&moved.qb2())?, moved);

        let current = Siger::from_code_and_raw(idr_dex::ED25519_CRT_SIG, siger.raw(), 1, None)?;
        assert_eq!(current.ondex(), None);
        assert!(current.qb64().starts_with("BB"));
        Ok(())
    }

    #[test]
    fn test_siger_parsable() -> Result<()> {
        let mut stream = format!("{}{}", SIG_QB64, SIG_QB64).into_bytes();
        Siger::parse_qb64b(&mut stream, Some(true))?;
        assert_eq!(stream, SIG_QB64.as_bytes().to_vec());
        Siger::parse_qb64b(&mut stream, Some(true))?;
        assert!(stream.is_empty());
        Ok(())
    }

    #[test]
    fn test_siger_errors() -> Result<()> {
        let result = Siger::from_code_and_raw(idr_dex::TBD0, b"xyz", 1, None);
        assert!(matches!(result, Err(CesrError::UnsupportedCode(_))));
        assert!(matches!(
            Siger::from_qb64("0zABeHl6"),
            Err(CesrError::UnsupportedCode(_))
        ));
        Ok(())
    }
}
