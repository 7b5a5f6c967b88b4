use crate::cesr::matter::{BaseMatter, Matter};
use crate::cesr::{non_dex, Parsable};
use crate::errors::{CesrError, Result};
use rand_core::{OsRng, RngCore};

///  Noncer is Matter subclass for nonces, salty nonces and UUIDs.
///  A random salt, the Empty code or a digest may fill the nonce field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Noncer {
    base: BaseMatter,
}

impl Noncer {
    fn from_base(base: BaseMatter) -> Result<Self> {
        if !non_dex::TUPLE.contains(&base.code()) {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for noncer.",
                base.code()
            )));
        }
        Ok(Noncer { base })
    }

    /// Creates a fresh 128 bit random nonce
    pub fn new() -> Result<Self> {
        Self::from_random(non_dex::SALT_128)
    }

    /// Creates a random nonce for the salt `code`
    pub fn from_random(code: &str) -> Result<Self> {
        let mut raw = match code {
            non_dex::SALT_128 => vec![0u8; 16],
            non_dex::SALT_256 => vec![0u8; 32],
            _ => {
                return Err(CesrError::UnsupportedCode(format!(
                    "Invalid code={} for random nonce.",
                    code
                )))
            }
        };
        OsRng.fill_bytes(&mut raw);
        Self::from_base(BaseMatter::from_code_and_raw(code, &raw)?)
    }

    /// Creates a Noncer from nonce text, empty text giving the Empty code
    pub fn from_nonce(nonce: &str) -> Result<Self> {
        if nonce.is_empty() {
            return Self::from_base(BaseMatter::from_code_and_raw(non_dex::EMPTY, &[])?);
        }
        Self::from_qb64(nonce)
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

    /// Returns the nonce as qb64, or empty text for the Empty code
    pub fn nonce(&self) -> String {
        if self.base.code() == non_dex::EMPTY {
            return String::new();
        }
        self.base.qb64()
    }

    pub fn nonceb(&self) -> Vec<u8> {
        self.nonce().into_bytes()
    }
}

impl Parsable for Noncer {
    fn parse_qb64b(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let noncer = Self::from_qb64b(data)?;
        if strip.unwrap_or(false) {
            data.drain(..noncer.full_size());
        }
        Ok(noncer)
    }

    fn parse_qb2(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let noncer = Self::from_qb2(data)?;
        if strip.unwrap_or(false) {
            data.drain(..noncer.full_size() * 3 / 4);
        }
        Ok(noncer)
    }
}

impl Matter for Noncer {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cesr::diger::Diger;
    use crate::cesr::dig_dex;

    #[test]
    fn test_noncer_random() -> Result<()> {
        let noncer = Noncer::new()?;
        assert_eq!(noncer.code(), non_dex::SALT_128);
        assert_eq!(noncer.raw().len(), 16);
        assert_eq!(noncer.nonce().len(), 24);
        assert_eq!(noncer.nonceb(), noncer.qb64b());
        assert_ne!(Noncer::new()?, noncer);

        let noncer = Noncer::from_random(non_dex::SALT_256)?;
        assert_eq!(noncer.code(), non_dex::SALT_256);
        assert_eq!(noncer.nonce().len(), 44);
        assert_eq!(Noncer::from_nonce(&noncer.nonce())?, noncer);
        assert_eq!(Noncer::from_qb2(&noncer.qb2())?, noncer);
        Ok(())
    }

    #[test]
    fn test_noncer_empty_and_digest() -> Result<()> {
        let noncer = Noncer::from_nonce("")?;
        assert_eq!(noncer.code(), non_dex::EMPTY);
        assert_eq!(noncer.qb64(), "1AAP");
        assert_eq!(noncer.nonce(), "");
        assert!(noncer.nonceb().is_empty());
        assert_eq!(Noncer::from_qb64("1AAP")?, noncer);

        let diger = Diger::from_ser(b"abc", dig_dex::BLAKE3_256)?;
        let noncer = Noncer::from_nonce(&diger.qb64())?;
        assert_eq!(noncer.code(), dig_dex::BLAKE3_256);
        assert_eq!(noncer.nonce(), diger.qb64());
        assert!(noncer.is_digestive());
        Ok(())
    }

    #[test]
    fn test_noncer_parsable() -> Result<()> {
        let noncer = Noncer::from_code_and_raw(non_dex::SALT_128, &[3u8; 16])?;
        let mut stream = [noncer.qb64b(), b"1AAP".to_vec()].concat();
        assert_eq!(Noncer::parse_qb64b(&mut stream, Some(true))?, noncer);
        assert_eq!(Noncer::parse_qb64b(&mut stream, Some(true))?.nonce(), "");
        assert!(stream.is_empty());

        let mut stream = noncer.qb2();
        assert_eq!(Noncer::parse_qb2(&mut stream, Some(true))?, noncer);
        assert!(stream.is_empty());
        Ok(())
    }

    #[test]
    fn test_noncer_errors() {
        assert!(matches!(
            Noncer::from_random(non_dex::EMPTY),
            Err(CesrError::UnsupportedCode(_))
        ));
        assert!(matches!(
            Noncer::from_nonce("Xicp"),
            Err(CesrError::UnsupportedCode(_))
        ));
        let bad = format!("0A{}", "!".repeat(22));
        assert!(matches!(
            Noncer::from_nonce(&bad),
            Err(CesrError::CharsetViolation(_))
        ));
    }
}
