use crate::cesr::bexter::{derawify, rawify};
use crate::cesr::matter::{BaseMatter, Matter};
use crate::cesr::dec_dex;
use crate::errors::{CesrError, Result};

/// Decimer is Matter subclass for decimal numbers, ints or floats, held as
/// Base64 text (dns) with the decimal point encoded as 'p'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimer {
    base: BaseMatter,
}

impl Decimer {
    fn from_base(base: BaseMatter) -> Result<Self> {
        if !dec_dex::TUPLE.contains(&base.code()) {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for decimer.",
                base.code()
            )));
        }
        Ok(Decimer { base })
    }

    /// Creates a Decimer from decimal number text such as "12" or "-0.25"
    pub fn from_dns(dns: &str) -> Result<Self> {
        let decimal = dns
            .parse::<f64>()
            .map_err(|e| CesrError::InvalidValue(format!("Invalid dns={}: {}", dns, e)))?;
        Self::from_decimal(decimal)
    }

    pub fn from_decimal(decimal: f64) -> Result<Self> {
        if !decimal.is_finite() {
            return Err(CesrError::InvalidValue(format!(
                "Non finite decimal={}.",
                decimal
            )));
        }

        // integral values drop the fraction, floats use the shortest exact text
        let dns = if decimal.trunc() == decimal {
            format!("{:.0}", decimal)
        } else {
            format!("{}", decimal)
        };
        let raw = drawify(&dns)?;
        Self::from_base(BaseMatter::from_code_and_raw(dec_dex::DECIMAL_L0, &raw)?)
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

    /// Returns the decimal number text
    pub fn dns(&self) -> String {
        derawify(self.base.raw(), self.base.code()).replace('p', ".")
    }

    pub fn decimal(&self) -> Result<f64> {
        let dns = self.dns();
        dns.parse::<f64>()
            .map_err(|e| CesrError::InvalidValue(format!("Invalid dns={}: {}", dns, e)))
    }
}

/// Converts decimal text to raw bytes
fn drawify(dns: &str) -> Result<Vec<u8>> {
    rawify(&dns.replace('.', "p"))
}

impl Matter for Decimer {
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
    fn test_decimer() -> Result<()> {
        let decimer = Decimer::from_dns("0")?;
        assert_eq!(decimer.code(), dec_dex::DECIMAL_L2);
        assert_eq!(decimer.raw(), &[0x34]);
        assert_eq!(decimer.qb64(), "6HABAAA0");
        assert_eq!(decimer.dns(), "0");
        assert_eq!(decimer.decimal()?, 0.0);

        let decimer = Decimer::from_dns("1.5")?;
        assert_eq!(decimer.code(), dec_dex::DECIMAL_L0);
        assert_eq!(decimer.qb64(), "4HABA1p5");
        assert_eq!(decimer.dns(), "1.5");
        assert_eq!(Decimer::from_qb64("4HABA1p5")?, decimer);

        let decimer = Decimer::from_decimal(-12.25)?;
        assert_eq!(decimer.code(), dec_dex::DECIMAL_L1);
        assert_eq!(decimer.qb64(), "5HACAA-12p25");
        assert_eq!(decimer.decimal()?, -12.25);
        assert_eq!(Decimer::from_qb2(&decimer.qb2())?, decimer);
        Ok(())
    }

    #[test]
    fn test_decimer_normalizes() -> Result<()> {
        assert_eq!(Decimer::from_dns("2.0")?.dns(), "2");
        assert_eq!(Decimer::from_dns("0031")?.dns(), "31");
        assert_eq!(Decimer::from_decimal(1234.5)?.dns(), "1234.5");
        assert_eq!(Decimer::from_dns("1234")?, Decimer::from_decimal(1234.0)?);

        let decimer = Decimer::from_dns("0.001")?;
        assert_eq!(Decimer::from_qb64b(&decimer.qb64b())?.decimal()?, 0.001);
        Ok(())
    }

    #[test]
    fn test_decimer_errors() {
        assert!(matches!(Decimer::from_dns("abc"), Err(CesrError::InvalidValue(_))));
        assert!(matches!(Decimer::from_dns(""), Err(CesrError::InvalidValue(_))));
        assert!(matches!(
            Decimer::from_decimal(f64::NAN),
            Err(CesrError::InvalidValue(_))
        ));
        assert!(matches!(
            Decimer::from_decimal(f64::INFINITY),
            Err(CesrError::InvalidValue(_))
        ));
        assert!(matches!(
            Decimer::from_qb64("4AAA"),
            Err(CesrError::UnsupportedCode(_))
        ));
    }
}
