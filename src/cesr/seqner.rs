use crate::cesr::matter::{BaseMatter, Matter};
use crate::cesr::{num_dex, Parsable};
use crate::errors::{CesrError, Result};

/// Seqner represents sequence numbers or first-seen numbers, always coded
/// as a 16 byte Huge number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seqner {
    base: BaseMatter,
}

impl Seqner {
    fn from_base(base: BaseMatter) -> Result<Self> {
        if base.code() != num_dex::HUGE {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for seqner, expected Huge.",
                base.code()
            )));
        }
        Ok(Seqner { base })
    }

    pub fn from_sn(sn: u128) -> Result<Self> {
        Self::from_base(BaseMatter::from_code_and_raw(num_dex::HUGE, &sn.to_be_bytes())?)
    }

    pub fn from_snh(snh: &str) -> Result<Self> {
        let sn = u128::from_str_radix(snh, 16)
            .map_err(|e| CesrError::InvalidValue(format!("Invalid snh={}: {}", snh, e)))?;
        Self::from_sn(sn)
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

    /// Returns the sequence number
    pub fn sn(&self) -> u128 {
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(self.base.raw());
        u128::from_be_bytes(bytes)
    }

    /// Returns hex string representation of the sequence number
    pub fn snh(&self) -> String {
        format!("{:x}", self.sn())
    }
}

impl Parsable for Seqner {
    fn parse_qb64b(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let seqner = Self::from_qb64b(data)?;
        if strip.unwrap_or(false) {
            data.drain(..seqner.full_size());
        }
        Ok(seqner)
    }

    fn parse_qb2(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        let seqner = Self::from_qb2(data)?;
        if strip.unwrap_or(false) {
            data.drain(..seqner.full_size() * 3 / 4);
        }
        Ok(seqner)
    }
}

impl Matter for Seqner {
    fn code(&self) -> &str {
        self.base.code()
    }
    fn raw(&self) -> &[u8] {
        self.base.raw()
    }
    fn soft(&self) -> &str {
        self.base.soft()
    }
    fn both(&self) -> String {
        self.base.both()
    }
    fn qb64(&self) -> String {
        self.base.qb64()
    }
    fn qb64b(&self) -> Vec<u8> {
        self.base.qb64b()
    }
    fn qb2(&self) -> Vec<u8> {
        self.base.qb2()
    }
    fn full_size(&self) -> usize {
        self.base.full_size()
    }
    fn size(&self) -> Option<u32> {
        self.base.size()
    }
    fn is_transferable(&self) -> bool {
        self.base.is_transferable()
    }
    fn is_digestive(&self) -> bool {
        self.base.is_digestive()
    }
    fn is_prefixive(&self) -> bool {
        self.base.is_prefixive()
    }
    fn is_special(&self) -> bool {
        self.base.is_special()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seqner() -> Result<()> {
        let seqner = Seqner::from_sn(0)?;
        assert_eq!(seqner.sn(), 0);
        assert_eq!(seqner.snh(), "0");
        assert_eq!(seqner.qb64(), "0AAAAAAAAAAAAAAAAAAAAAAA");
        assert_eq!(seqner.qb2(), {
            let mut qb2 = vec![0xd0, 0x00];
            qb2.extend([0u8; 16]);
            qb2
        });

        let seqner = Seqner::from_sn(5)?;
        assert_eq!(seqner.qb64(), "0AAAAAAAAAAAAAAAAAAAAAAF");
        assert_eq!(Seqner::from_qb64("0AAAAAAAAAAAAAAAAAAAAAAF")?.sn(), 5);

        let seqner = Seqner::from_snh("a")?;
        assert_eq!(seqner.sn(), 10);
        assert_eq!(seqner.snh(), "a");
        assert_eq!(Seqner::from_qb2(&seqner.qb2())?, seqner);
        Ok(())
    }

    #[test]
    fn test_seqner_parsable() -> Result<()> {
        let seqner = Seqner::from_sn(20)?;
        let mut stream = [seqner.qb64b(), b"-AAB".to_vec()].concat();
        assert_eq!(Seqner::parse_qb64b(&mut stream, Some(true))?, seqner);
        assert_eq!(stream, b"-AAB".to_vec());

        let mut stream = seqner.qb2();
        assert_eq!(Seqner::parse_qb2(&mut stream, Some(true))?.sn(), 20);
        assert!(stream.is_empty());
        Ok(())
    }

    #[test]
    fn test_seqner_errors() {
        assert!(matches!(
            Seqner::from_qb64("MAAB"),
            Err(CesrError::UnsupportedCode(_))
        ));
        assert!(matches!(
            Seqner::from_snh("xyz"),
            Err(CesrError::InvalidValue(_))
        ));
    }
}
