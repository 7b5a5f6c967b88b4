use crate::cesr::matter::{BaseMatter, Matter};
use crate::cesr::mtr_dex;
use crate::errors::{CesrError, Result};
use chrono::{DateTime, FixedOffset, Utc};

/// Dater is subclass of Matter, cryptographic material, for ISO-8601 datetimes.
/// Dater provides a custom Base64 coding of an ASCII ISO-8601 datetime by
/// replacing the three non-Base64 characters ':.+' with the Base64 equivalents
/// 'cdp' respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dater {
    base: BaseMatter,
}

const DTS_SIZE: usize = 32;

impl Dater {
    fn from_base(base: BaseMatter) -> Result<Self> {
        if base.code() != mtr_dex::DATE_TIME {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for dater.",
                base.code()
            )));
        }
        Ok(Dater { base })
    }

    /// Creates a Dater from a 32 char ISO-8601 datetime such as
    /// `2020-08-22T17:50:09.988921+00:00`
    pub fn from_dts(dts: &str) -> Result<Self> {
        if dts.len() != DTS_SIZE {
            return Err(CesrError::InvalidValue(format!(
                "Invalid datetime size={} for dts={}.",
                dts.len(),
                dts
            )));
        }
        DateTime::parse_from_rfc3339(dts)
            .map_err(|e| CesrError::InvalidValue(format!("Invalid datetime={}: {}", dts, e)))?;

        let qb64 = format!(
            "{}{}",
            mtr_dex::DATE_TIME,
            dts.replace(':', "c").replace('.', "d").replace('+', "p")
        );
        Self::from_base(BaseMatter::from_qb64(&qb64)?)
    }

    /// Creates a Dater for the current UTC time
    pub fn now() -> Result<Self> {
        Self::from_dts(&Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f+00:00").to_string())
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

    /// Returns the ISO-8601 datetime text
    pub fn dts(&self) -> String {
        let qb64 = self.base.qb64();
        qb64[mtr_dex::DATE_TIME.len()..]
            .replace('c', ":")
            .replace('d', ".")
            .replace('p', "+")
    }

    pub fn datetime(&self) -> Result<DateTime<FixedOffset>> {
        let dts = self.dts();
        DateTime::parse_from_rfc3339(&dts)
            .map_err(|e| CesrError::InvalidValue(format!("Invalid datetime={}: {}", dts, e)))
    }
}

impl Matter for Dater {
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
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_dater() -> Result<()> {
        let dts = "2020-08-22T17:50:09.988921+00:00";
        let dater = Dater::from_dts(dts)?;
        assert_eq!(dater.code(), mtr_dex::DATE_TIME);
        assert_eq!(dater.qb64(), "1AAG2020-08-22T17c50c09d988921p00c00");
        assert_eq!(dater.raw().len(), 24);
        assert_eq!(dater.dts(), dts);

        let dt = dater.datetime()?;
        assert_eq!(dt.year(), 2020);
        assert_eq!(dt.month(), 8);
        assert_eq!(dt.second(), 9);
        assert_eq!(dt.nanosecond(), 988_921_000);

        assert_eq!(Dater::from_qb2(&dater.qb2())?, dater);
        assert_eq!(Dater::from_qb64b(&dater.qb64b())?.dts(), dts);
        Ok(())
    }

    #[test]
    fn test_dater_now() -> Result<()> {
        let dater = Dater::now()?;
        assert_eq!(dater.dts().len(), 32);
        assert!(dater.dts().ends_with("+00:00"));
        Ok(())
    }

    #[test]
    fn test_dater_errors() {
        assert!(matches!(
            Dater::from_dts("2020-08-22T17:50:09+00:00"),
            Err(CesrError::InvalidValue(_))
        ));
        assert!(matches!(
            Dater::from_dts("2020-13-22T17:50:09.988921+00:00"),
            Err(CesrError::InvalidValue(_))
        ));
        assert!(matches!(
            Dater::from_qb64("Xicp"),
            Err(CesrError::UnsupportedCode(_))
        ));
    }
}
