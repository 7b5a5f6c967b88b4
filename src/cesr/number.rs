use crate::cesr::matter::codex::sizage;
use crate::cesr::matter::{BaseMatter, Matter};
use crate::cesr::num_dex;
use crate::errors::{CesrError, Result};

/// Number codes in order of increasing raw size
const NUM_CODES: [&str; 8] = [
    num_dex::SHORT,
    num_dex::LONG,
    num_dex::TALL,
    num_dex::BIG,
    num_dex::LARGE,
    num_dex::GREAT,
    num_dex::HUGE,
    num_dex::VAST,
];

/// Number represents ordinal counting numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    base: BaseMatter,
}

impl Number {
    fn from_base(base: BaseMatter) -> Result<Self> {
        if !num_dex::TUPLE.contains(&base.code()) {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for number.",
                base.code()
            )));
        }
        // the value must fit in 16 octets
        let raw = base.raw();
        if raw.len() > 16 && raw[..raw.len() - 16].iter().any(|&b| b != 0) {
            return Err(CesrError::InvalidValue(format!(
                "Number raw={:02x?} exceeds 16 octets.",
                raw
            )));
        }
        Ok(Number { base })
    }

    /// Creates a Number using the smallest code that fits `num`
    pub fn from_num(num: u128) -> Result<Self> {
        let size = ((128 - num.leading_zeros() as usize) + 7) / 8;
        for code in NUM_CODES {
            if raw_size(code)? >= size {
                return Self::from_num_and_code(num, code);
            }
        }
        Err(CesrError::InvalidValue(format!("Unsupported number={}.", num)))
    }

    pub fn from_num_and_code(num: u128, code: &str) -> Result<Self> {
        if !num_dex::TUPLE.contains(&code) {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for number.",
                code
            )));
        }

        let rs = raw_size(code)?;
        let bytes = num.to_be_bytes();
        let width = bytes.len();
        if rs < width && bytes[..width - rs].iter().any(|&b| b != 0) {
            return Err(CesrError::InvalidValue(format!(
                "Number={} too large for code={}.",
                num, code
            )));
        }

        let raw = if rs >= width {
            let mut raw = vec![0u8; rs - width];
            raw.extend_from_slice(&bytes);
            raw
        } else {
            bytes[width - rs..].to_vec()
        };
        Self::from_base(BaseMatter::from_code_and_raw(code, &raw)?)
    }

    /// Creates a Number from hex text, empty text is zero
    pub fn from_numh(numh: &str) -> Result<Self> {
        let num = if numh.is_empty() {
            0
        } else {
            u128::from_str_radix(numh, 16)
                .map_err(|e| CesrError::InvalidValue(format!("Invalid numh={}: {}", numh, e)))?
        };
        Self::from_num(num)
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

    /// Returns the numeric value
    pub fn num(&self) -> u128 {
        self.base
            .raw()
            .iter()
            .fold(0u128, |acc, &b| (acc << 8) | b as u128)
    }

    /// Returns the value as lowercase hex without leading zeros
    pub fn numh(&self) -> String {
        format!("{:x}", self.num())
    }

    /// True when the value is positive
    pub fn positive(&self) -> bool {
        self.num() > 0
    }
}

fn raw_size(code: &str) -> Result<usize> {
    sizage(code)
        .and_then(|s| s.raw_size())
        .ok_or_else(|| CesrError::UnknownCode(format!("Unsupported code={}.", code)))
}

impl Matter for Number {
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

    #[test]
    fn test_number_code_selection() -> Result<()> {
        let number = Number::from_num(0)?;
        assert_eq!(number.code(), num_dex::SHORT);
        assert_eq!(number.qb64(), "MAAA");
        assert_eq!(number.num(), 0);
        assert_eq!(number.numh(), "0");
        assert!(!number.positive());

        let number = Number::from_num(1)?;
        assert_eq!(number.qb64(), "MAAB");
        assert!(number.positive());

        let cases: [(u128, &str); 8] = [
            (0xffff, num_dex::SHORT),
            (0x1_0000, num_dex::LONG),
            (0xffff_ffff, num_dex::LONG),
            (0x1_0000_0000, num_dex::TALL),
            (u64::MAX as u128, num_dex::BIG),
            (u64::MAX as u128 + 1, num_dex::LARGE),
            (1u128 << 112, num_dex::HUGE),
            (u128::MAX, num_dex::HUGE),
        ];
        for (num, code) in cases {
            let number = Number::from_num(num)?;
            assert_eq!(number.code(), code, "{:x}", num);
            assert_eq!(number.num(), num);
            assert_eq!(Number::from_qb64(&number.qb64())?.num(), num);
            assert_eq!(Number::from_qb2(&number.qb2())?, number);
        }
        Ok(())
    }

    #[test]
    fn test_number_hex_and_codes() -> Result<()> {
        let number = Number::from_numh("1f")?;
        assert_eq!(number.num(), 31);
        assert_eq!(number.numh(), "1f");
        assert_eq!(Number::from_numh("")?.num(), 0);

        let number = Number::from_num_and_code(5, num_dex::VAST)?;
        assert_eq!(number.raw().len(), 17);
        assert_eq!(number.num(), 5);

        let number = Number::from_num_and_code(5, num_dex::BIG)?;
        assert_eq!(number.raw(), &[0, 0, 0, 0, 0, 0, 0, 5]);
        Ok(())
    }

    #[test]
    fn test_number_errors() {
        assert!(matches!(
            Number::from_num_and_code(0x1_0000, num_dex::SHORT),
            Err(CesrError::InvalidValue(_))
        ));
        assert!(matches!(
            Number::from_num_and_code(1, "E"),
            Err(CesrError::UnsupportedCode(_))
        ));
        assert!(matches!(
            Number::from_numh("xyz"),
            Err(CesrError::InvalidValue(_))
        ));

        let mut raw = vec![0u8; 17];
        raw[0] = 1;
        let vast = BaseMatter::from_code_and_raw(num_dex::VAST, &raw).unwrap();
        assert!(matches!(
            Number::from_qb64(&vast.qb64()),
            Err(CesrError::InvalidValue(_))
        ));
    }
}
