use crate::cesr::matter::Matter;
use crate::cesr::tag_dex;
use crate::cesr::tagger::Tagger;
use crate::errors::{CesrError, Result};

/// Message types (ilks) known to KERI and ACDC
pub mod ilks {
    pub const ICP: &str = "icp";
    pub const ROT: &str = "rot";
    pub const IXN: &str = "ixn";
    pub const DIP: &str = "dip";
    pub const DRT: &str = "drt";
    pub const RCT: &str = "rct";
    pub const QRY: &str = "qry";
    pub const RPY: &str = "rpy";
    pub const XIP: &str = "xip";
    pub const EXN: &str = "exn";
    pub const PRO: &str = "pro";
    pub const BAR: &str = "bar";
    pub const VCP: &str = "vcp";
    pub const VRT: &str = "vrt";
    pub const ISS: &str = "iss";
    pub const REV: &str = "rev";
    pub const BIS: &str = "bis";
    pub const BRV: &str = "brv";
    pub const RIP: &str = "rip";
    pub const BUP: &str = "bup";
    pub const UPD: &str = "upd";
    pub const ACM: &str = "acm";
    pub const ACT: &str = "act";
    pub const ACG: &str = "acg";
    pub const ACE: &str = "ace";
    pub const SCH: &str = "sch";
    pub const ATT: &str = "att";
    pub const AGG: &str = "agg";
    pub const EDG: &str = "edg";
    pub const RUL: &str = "rul";

    pub static TUPLE: [&str; 30] = [
        ICP, ROT, IXN, DIP, DRT, RCT, QRY, RPY, XIP, EXN, PRO, BAR, VCP, VRT, ISS, REV, BIS, BRV,
        RIP, BUP, UPD, ACM, ACT, ACG, ACE, SCH, ATT, AGG, EDG, RUL,
    ];
}

/// Ilker is subclass of Tagger, cryptographic material, for formatted
/// message types (ilks) in Base64. Leverages Tagger support compact special
/// fixed size primitives with non-empty soft part and empty raw part.
///
/// Ilker provides a more compact representation than would be obtained by
/// converting the raw ASCII representation to Base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ilker {
    tagger: Tagger,
}

impl Ilker {
    fn from_tagger(tagger: Tagger) -> Result<Self> {
        if tagger.code() != tag_dex::TAG3 {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for ilker, expected Tag3.",
                tagger.code()
            )));
        }
        Ok(Ilker { tagger })
    }

    pub fn from_ilk(ilk: &str) -> Result<Self> {
        if !ilks::TUPLE.contains(&ilk) {
            return Err(CesrError::InvalidValue(format!("Unknown ilk={}.", ilk)));
        }
        Self::from_tagger(Tagger::from_tag(ilk)?)
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        Self::from_tagger(Tagger::from_qb64(qb64)?)
    }

    pub fn from_qb64b(qb64b: &[u8]) -> Result<Self> {
        Self::from_tagger(Tagger::from_qb64b(qb64b)?)
    }

    pub fn from_qb2(qb2: &[u8]) -> Result<Self> {
        Self::from_tagger(Tagger::from_qb2(qb2)?)
    }

    pub fn ilk(&self) -> &str {
        self.tagger.tag()
    }
}

impl Matter for Ilker {
    fn code(&self) -> &str { self.tagger.code() }
    fn raw(&self) -> &[u8] { self.tagger.raw() }
    fn soft(&self) -> &str { self.tagger.soft() }
    fn both(&self) -> String { self.tagger.both() }
    fn qb64(&self) -> String { self.tagger.qb64() }
    fn qb64b(&self) -> Vec<u8> { self.tagger.qb64b() }
    fn qb2(&self) -> Vec<u8> { self.tagger.qb2() }
    fn full_size(&self) -> usize { self.tagger.full_size() }
    fn size(&self) -> Option<u32> { self.tagger.size() }
    fn is_transferable(&self) -> bool { self.tagger.is_transferable() }
    fn is_digestive(&self) -> bool { self.tagger.is_digestive() }
    fn is_prefixive(&self) -> bool { self.tagger.is_prefixive() }
    fn is_special(&self) -> bool { self.tagger.is_special() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ilker() -> Result<()> {
        for ilk in ilks::TUPLE {
            let ilker = Ilker::from_ilk(ilk)?;
            assert_eq!(ilker.ilk(), ilk);
            assert_eq!(ilker.qb64(), format!("X{}", ilk));
            assert_eq!(Ilker::from_qb2(&ilker.qb2())?, ilker);
        }

        let ilker = Ilker::from_qb64("Xrot")?;
        assert_eq!(ilker.ilk(), ilks::ROT);
        Ok(())
    }

    #[test]
    fn test_ilker_errors() {
        assert!(matches!(Ilker::from_ilk("abc"), Err(CesrError::InvalidValue(_))));
        assert!(matches!(
            Ilker::from_qb64("0Kab"),
            Err(CesrError::UnsupportedCode(_))
        ));
        assert!(matches!(
            Ilker::from_qb64("EAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"),
            Err(CesrError::UnsupportedCode(_))
        ));
    }
}
