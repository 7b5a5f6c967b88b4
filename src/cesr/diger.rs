use crate::cesr::matter::{BaseMatter, Matter};
use crate::cesr::{dig_dex, Parsable};
use crate::errors::{CesrError, Result};
use blake2::digest::consts::U32;
use blake2::{Blake2b, Blake2b512, Blake2s256};
use blake3::Hasher as Blake3Hasher;
use sha2::{Digest, Sha256, Sha512};
use sha3::{Sha3_256, Sha3_512};
use tracing::warn;

type Blake2b256 = Blake2b<U32>;

///  Diger is Matter subclass with method to verify digest of serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diger {
    base: BaseMatter,
}

impl Diger {
    fn from_base(base: BaseMatter) -> Result<Self> {
        if !dig_dex::TUPLE.contains(&base.code()) {
            return Err(CesrError::UnsupportedCode(format!(
                "Unsupported digest code={}.",
                base.code()
            )));
        }
        Ok(Diger { base })
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

    /// Digests `ser` with the algorithm selected by `code`
    pub fn from_ser(ser: &[u8], code: &str) -> Result<Self> {
        let raw = Diger::digest(ser, code)?;
        Self::from_code_and_raw(code, &raw)
    }

    pub fn digest(ser: &[u8], code: &str) -> Result<Vec<u8>> {
        let raw = match code {
            dig_dex::BLAKE3_256 => blake3::hash(ser).as_bytes().to_vec(),
            dig_dex::BLAKE3_512 => {
                let mut hasher = Blake3Hasher::new();
                hasher.update(ser);
                let mut digest = [0u8; 64];
                hasher.finalize_xof().fill(&mut digest);
                digest.to_vec()
            }
            dig_dex::BLAKE2B_256 => Blake2b256::digest(ser).to_vec(),
            dig_dex::BLAKE2B_512 => Blake2b512::digest(ser).to_vec(),
            dig_dex::BLAKE2S_256 => Blake2s256::digest(ser).to_vec(),
            dig_dex::SHA3_256 => Sha3_256::digest(ser).to_vec(),
            dig_dex::SHA3_512 => Sha3_512::digest(ser).to_vec(),
            dig_dex::SHA2_256 => Sha256::digest(ser).to_vec(),
            dig_dex::SHA2_512 => Sha512::digest(ser).to_vec(),
            _ => {
                return Err(CesrError::UnsupportedCode(format!(
                    "Unsupported digest code={}.",
                    code
                )))
            }
        };
        Ok(raw)
    }

    /// Returns true when raw is the digest of `ser` under this code
    pub fn verify(&self, ser: &[u8]) -> bool {
        match Diger::digest(ser, self.code()) {
            Ok(raw) => raw == self.raw(),
            Err(_) => false,
        }
    }

    /// Returns true when both digests commit to `ser`. Digests with the same
    /// code are compared directly, otherwise both are verified against `ser`.
    pub fn compare(&self, ser: &[u8], other: &Diger) -> bool {
        if self.qb64() == other.qb64() {
            return true;
        }

        if self.code() == other.code() {
            warn!(
                code = self.code(),
                "digest mismatch with same code, serializations differ"
            );
            return false;
        }

        self.verify(ser) && other.verify(ser)
    }
}

impl Matter for Diger {
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

impl Parsable for Diger {
    fn parse_qb64b(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let diger = Self::from_qb64b(data)?;
        if strip.unwrap_or(false) {
            data.drain(..diger.full_size());
        }
        Ok(diger)
    }

    fn parse_qb2(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let diger = Self::from_qb2(data)?;
        if strip.unwrap_or(false) {
            data.drain(..diger.full_size() * 3 / 4);
        }
        Ok(diger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cesr::mtr_dex;

    #[test]
    fn test_diger_blake3() -> Result<()> {
        let ser = b"abcdefghijklmnopqrstuvwxyz0123456789";
        let diger = Diger::from_ser(ser, dig_dex::BLAKE3_256)?;
        assert_eq!(diger.code(), mtr_dex::BLAKE3_256);
        assert_eq!(diger.raw(), blake3::hash(ser).as_bytes());
        assert_eq!(diger.qb64().len(), 44);
        assert!(diger.verify(ser));
        assert!(!diger.verify(b"abc"));

        let decoded = Diger::from_qb64(&diger.qb64())?;
        assert_eq!(decoded, diger);
        assert_eq!(Diger::from_qb2(&diger.qb2())?, diger);
        Ok(())
    }

    #[test]
    fn test_diger_all_codes() -> Result<()> {
        let ser = b"abcdefghijklmnopqrstuvwxyz0123456789";
        for code in dig_dex::TUPLE {
            let diger = Diger::from_ser(ser, code)?;
            let rs = if code.len() == 1 { 32 } else { 64 };
            assert_eq!(diger.raw().len(), rs, "{}", code);
            assert!(diger.verify(ser), "{}", code);
            assert!(diger.is_digestive(), "{}", code);
            assert_eq!(Diger::from_qb64b(&diger.qb64b())?, diger);
        }

        let sha = Diger::from_ser(b"abc", dig_dex::SHA2_256)?;
        assert_eq!(
            hex(sha.raw()),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        Ok(())
    }

    #[test]
    fn test_diger_compare() -> Result<()> {
        let ser = b"abcdefghijklmnopqrstuvwxyz0123456789";
        let other_ser = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

        let diger = Diger::from_ser(ser, dig_dex::BLAKE3_256)?;
        let same = Diger::from_ser(ser, dig_dex::BLAKE3_256)?;
        assert!(diger.compare(ser, &same));

        let blake2b = Diger::from_ser(ser, dig_dex::BLAKE2B_256)?;
        assert!(diger.compare(ser, &blake2b));
        assert!(!diger.compare(other_ser, &blake2b));

        let other = Diger::from_ser(other_ser, dig_dex::BLAKE3_256)?;
        assert!(!diger.compare(ser, &other));

        let other = Diger::from_ser(other_ser, dig_dex::SHA3_256)?;
        assert!(!diger.compare(ser, &other));
        Ok(())
    }

    #[test]
    fn test_diger_unsupported_code() {
        let result = Diger::from_ser(b"abc", mtr_dex::ED25519);
        assert!(matches!(result, Err(CesrError::UnsupportedCode(_))));

        let result = Diger::from_qb64("BGlOiUdp5sMmfotHfCWQKEzWR91C72AH0lT84c0um-Qj");
        assert!(matches!(result, Err(CesrError::UnsupportedCode(_))));
    }

    #[test]
    fn test_diger_parsable() -> Result<()> {
        let diger = Diger::from_ser(b"abc", dig_dex::BLAKE3_256)?;
        let mut stream = [diger.qb64b(), diger.qb64b()].concat();
        assert_eq!(Diger::parse_qb64b(&mut stream, Some(true))?, diger);
        assert_eq!(stream, diger.qb64b());
        assert_eq!(Diger::parse_qb64b(&mut stream, None)?, diger);
        assert_eq!(stream.len(), 44);
        Ok(())
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
