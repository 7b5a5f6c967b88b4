use crate::cesr::matter::Matter;
use crate::cesr::tag_dex;
use crate::cesr::tagger::Tagger;
use crate::errors::{CesrError, Result};

/// Configuration traits of key event establishment
pub mod trait_dex {
    pub const EST_ONLY: &str = "EO"; // Only allow establishment events
    pub const DO_NOT_DELEGATE: &str = "DND"; // Dot not allow delegated identifiers
    pub const REGISTRAR_BACKERS: &str = "RB"; // Registrar backers provided in 'bt' field
    pub const NO_BACKERS: &str = "NB"; // Do not allow any registrar backers
    pub const NO_REGISTRAR_BACKERS: &str = "NRB"; // Do not allow registrar backers
    pub const DELEGATE_IS_DELEGATOR: &str = "DID"; // Delegate is delegator

    pub static TUPLE: [&str; 6] = [
        EST_ONLY,
        DO_NOT_DELEGATE,
        REGISTRAR_BACKERS,
        NO_BACKERS,
        NO_REGISTRAR_BACKERS,
        DELEGATE_IS_DELEGATOR,
    ];
}

/// Traitor is Tagger for configuration traits, coded as Tag2 or Tag3
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traitor {
    tagger: Tagger,
}

impl Traitor {
    fn from_tagger(tagger: Tagger) -> Result<Self> {
        if tagger.code() != tag_dex::TAG2 && tagger.code() != tag_dex::TAG3 {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for traitor, expected Tag2 or Tag3.",
                tagger.code()
            )));
        }
        Ok(Traitor { tagger })
    }

    pub fn from_trait(trait_: &str) -> Result<Self> {
        if !trait_dex::TUPLE.contains(&trait_) {
            return Err(CesrError::InvalidValue(format!(
                "Unknown trait={}.",
                trait_
            )));
        }
        Self::from_tagger(Tagger::from_tag(trait_)?)
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

    pub fn trait_(&self) -> &str {
        self.tagger.tag()
    }
}

impl Matter for Traitor {
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
